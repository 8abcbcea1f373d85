//! Interactive flashcard command-line application.
//!
//! Wires the core card model to a flat-file store, a remote trivia
//! importer, and a numbered-menu session loop.

pub mod import;
pub mod session;
pub mod store;
