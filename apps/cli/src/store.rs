//! Flat-file card storage.
//!
//! One CSV record per card, no header: `category,prompt,expected`.

use std::fs::File;
use std::io;
use std::path::Path;

use flashcard_core::Card;
use thiserror::Error;
use tracing::debug;

/// Storage errors. A missing file is its own variant because the session
/// treats it as an empty collection rather than a failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file '{path}' not found")]
    NotFound { path: String },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: csv::Error,
    },
}

/// Load all cards from `path`.
///
/// Rows with the wrong field count or an unrecognized category are
/// skipped without error.
pub fn load(path: &Path) -> Result<Vec<Card>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut cards = Vec::new();
    for (idx, record) in reader.deserialize::<Card>().enumerate() {
        match record {
            Ok(card) => cards.push(card),
            Err(err) => debug!(row = idx + 1, %err, "skipping malformed row"),
        }
    }

    Ok(cards)
}

/// Overwrite `path` with one record per card, category column first.
pub fn save(path: &Path, cards: &[Card]) -> Result<(), StoreError> {
    let write_error = |source: csv::Error| StoreError::Write {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_error)?;

    for card in cards {
        writer.serialize(card).map_err(write_error)?;
    }
    writer.flush().map_err(|e| write_error(csv::Error::from(e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_core::Category;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn sample_cards() -> Vec<Card> {
        vec![
            Card::vocabulary("capital of France", "Paris"),
            Card::math("What is 2 + 2?", "2 + 2"),
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");

        save(&path, &sample_cards()).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, sample_cards());
    }

    #[test]
    fn save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");

        save(&path, &sample_cards()).unwrap();
        let first = fs::read(&path).unwrap();

        let loaded = load(&path).unwrap();
        save(&path, &loaded).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        assert!(matches!(load(&path), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn unknown_category_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        fs::write(
            &path,
            "Vocabulary,capital of France,Paris\nTrivia,x,y\nMath,1 + 1,1 + 1\n",
        )
        .unwrap();

        let loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].category, Category::Vocabulary);
        assert_eq!(loaded[1].category, Category::Math);
    }

    #[test]
    fn wrong_field_count_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        fs::write(
            &path,
            "Vocabulary,only-two-fields\nMath,1 + 1,1 + 1,extra\nVocabulary,ok,ok\n",
        )
        .unwrap();

        let loaded = load(&path).unwrap();

        assert_eq!(loaded, vec![Card::vocabulary("ok", "ok")]);
    }

    #[test]
    fn quoted_fields_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        let cards = vec![Card::vocabulary("a word, with a comma", "it \"quotes\"")];

        save(&path, &cards).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, cards);
    }
}
