//! Dictionary loading utilities
//!
//! A dictionary is any text made of whitespace-delimited word tokens. Tokens
//! are returned in order with duplicates kept; filtering is the candidate
//! filter's job.

use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Split text into word tokens
///
/// # Examples
/// ```
/// use absurdle::dictionary::loader::tokens_from_str;
///
/// let tokens = tokens_from_str("arise berry\n\tferry  berry\n");
/// assert_eq!(tokens, ["arise", "berry", "ferry", "berry"]);
/// ```
#[must_use]
pub fn tokens_from_str(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Read every token from a reader
///
/// # Errors
///
/// Returns an I/O error if the reader fails or the content is not UTF-8.
pub fn load_from_reader<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(tokens_from_str(&content))
}

/// Load dictionary tokens from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use absurdle::dictionary::loader::load_from_file;
///
/// let tokens = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", tokens.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let tokens = tokens_from_str(&content);

    info!(
        "loaded {} tokens from {}",
        tokens.len(),
        path.as_ref().display()
    );

    Ok(tokens)
}

/// Convert the embedded string slice to owned tokens
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
