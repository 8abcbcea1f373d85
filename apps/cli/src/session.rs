//! Interactive menu session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use flashcard_core::{Card, Category, ProgressTracker};
use tracing::{error, warn};

use crate::import::{TriviaImporter, BATCH_SIZE};
use crate::store::{self, StoreError};

/// Outcome of one menu action.
enum Flow {
    Continue,
    Quit,
}

/// State for one run: the card collection, the attempt tracker, the
/// storage path, and the importer. Lives for the process lifetime; the
/// tracker is never persisted.
pub struct Session {
    cards: Vec<Card>,
    tracker: ProgressTracker,
    store_path: PathBuf,
    importer: TriviaImporter,
}

impl Session {
    pub fn new(store_path: PathBuf, importer: TriviaImporter) -> Self {
        Self {
            cards: Vec::new(),
            tracker: ProgressTracker::new(),
            store_path,
            importer,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        self.cards = load_reporting(&self.store_path, out)?;
        writeln!(out, "\nType 'exit' at any prompt to quit the application.")?;

        loop {
            writeln!(out, "\nFlashcard Application")?;
            writeln!(out, "1. Add Flashcard")?;
            writeln!(out, "2. Review Flashcards")?;
            writeln!(out, "3. Import Flashcards from API")?;
            writeln!(out, "4. Load Flashcards from a Specific File")?;
            writeln!(out, "5. View Progress")?;
            writeln!(out, "6. Exit")?;

            let Some(choice) = prompt(input, out, "Choose an option: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_card(input, out)?,
                "2" => self.review(input, out)?,
                "3" => self.import(out)?,
                "4" => self.load_from_file(input, out)?,
                "5" => self.view_progress(out)?,
                "6" => Flow::Quit,
                _ => {
                    writeln!(out, "Invalid choice, please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    fn add_card<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<Flow> {
        let Some(kind) = prompt(input, out, "Enter type (Vocabulary/Math): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = Category::from_str(&kind) else {
            writeln!(out, "Unknown card type '{kind}'.")?;
            return Ok(Flow::Continue);
        };
        let Some(question) = prompt(input, out, "Enter question/definition/problem: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(answer) = prompt(input, out, "Enter answer: ")? else {
            return Ok(Flow::Quit);
        };

        self.cards.push(Card::new(category, question, answer));
        self.save(out)?;
        Ok(Flow::Continue)
    }

    fn review<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<Flow> {
        for card in &self.cards {
            writeln!(out, "{card}")?;
            let Some(answer) = prompt(input, out, "Your answer: ")? else {
                return Ok(Flow::Quit);
            };

            let correct = card.check_answer(&answer);
            self.tracker.record_attempt(correct);
            if correct {
                writeln!(out, "Correct!")?;
            } else {
                writeln!(out, "Wrong! The answer was: {}", card.expected)?;
            }
        }

        self.save(out)?;
        Ok(Flow::Continue)
    }

    fn import<W: Write>(&mut self, out: &mut W) -> io::Result<Flow> {
        match self.importer.import_batch(BATCH_SIZE) {
            Ok(imported) => {
                let count = imported.len();
                self.cards.extend(imported);
                self.save(out)?;
                writeln!(out, "Imported {count} flashcards.")?;
            }
            Err(err) => {
                warn!(%err, "trivia import failed");
                writeln!(out, "Failed to fetch data from API.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn load_from_file<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        let Some(file_name) = prompt(input, out, "Enter the file name to load flashcards from: ")?
        else {
            return Ok(Flow::Quit);
        };

        // Replaces the working set; later saves still go to the session's
        // own storage path.
        self.cards = load_reporting(Path::new(&file_name), out)?;
        if self.cards.is_empty() {
            writeln!(
                out,
                "No flashcards loaded. Ensure the file '{file_name}' exists and is correctly formatted."
            )?;
        } else {
            writeln!(
                out,
                "Loaded {} flashcards from '{file_name}'.",
                self.cards.len()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn view_progress<W: Write>(&self, out: &mut W) -> io::Result<Flow> {
        writeln!(out, "{}", self.tracker)?;
        Ok(Flow::Continue)
    }

    fn save<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Err(err) = store::save(&self.store_path, &self.cards) {
            error!(%err, "failed to save flashcards");
            writeln!(out, "Failed to save flashcards: {err}")?;
        }
        Ok(())
    }
}

/// Load a file, reporting a missing or unreadable one and continuing with
/// an empty collection. Nothing here is fatal.
fn load_reporting<W: Write>(path: &Path, out: &mut W) -> io::Result<Vec<Card>> {
    match store::load(path) {
        Ok(cards) => Ok(cards),
        Err(StoreError::NotFound { path }) => {
            writeln!(out, "File '{path}' not found.")?;
            Ok(Vec::new())
        }
        Err(err) => {
            warn!(%err, "failed to load flashcards");
            writeln!(out, "Failed to load flashcards: {err}")?;
            Ok(Vec::new())
        }
    }
}

/// Show a prompt and read one trimmed line. Returns `None` when the user
/// types the exit token (any case) or input ends.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim().to_string();
    if line.eq_ignore_ascii_case("exit") {
        return Ok(None);
    }
    Ok(Some(line))
}
