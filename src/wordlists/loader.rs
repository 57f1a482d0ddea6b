//! Word list loading utilities
//!
//! Builds a `WordPool` from a file or from the embedded dictionary.

use crate::core::WordPool;
use crate::wordlists::DICTIONARY;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a word pool from a file
///
/// One word per line. Words are lowercased; blank lines and lines starting
/// with `#` are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no words.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordPool> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    pool_from_text(&content).with_context(|| format!("No words found in {}", path.display()))
}

/// Build a word pool from newline-separated text
///
/// # Errors
///
/// Returns an error if the text contains no words.
pub fn pool_from_text(content: &str) -> Result<WordPool> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase);

    Ok(WordPool::new(words)?)
}

/// Build a word pool from the embedded dictionary
///
/// # Errors
///
/// Returns an error if the dictionary was built from an empty file.
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::embedded_pool;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let pool = embedded_pool().unwrap();
/// assert_eq!(pool.len(), DICTIONARY.len());
/// ```
pub fn embedded_pool() -> Result<WordPool> {
    WordPool::new(DICTIONARY).context("Embedded dictionary is empty")
}
