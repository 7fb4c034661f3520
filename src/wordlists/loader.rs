//! Word list loading utilities
//!
//! Provides functions to load dictionary words from files, readers or embedded constants.

use crate::core::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words of exactly `length` letters from a file
///
/// Lines are trimmed; blank lines and lines that are not valid words of the
/// requested length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordstack::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), length)
}

/// Load words of exactly `length` letters from any buffered reader
///
/// # Errors
///
/// Returns the first I/O error encountered while reading lines.
pub fn load_from_reader<R: BufRead>(reader: R, length: usize) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?, length) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Convert string lines to Word vector, skipping ineligible entries
///
/// # Examples
/// ```
/// use wordstack::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["apple", " angle ", "pear"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines<I, S>(lines: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref(), length))
        .collect()
}

fn parse_line(line: &str, length: usize) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Word::new(trimmed, length).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn words_from_lines_converts_valid_words() {
        let words = words_from_lines(["apple", "angle", "crane"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "angle");
        assert_eq!(words[2].text(), "crane");
    }

    #[test]
    fn words_from_lines_trims_and_filters_length() {
        let words = words_from_lines(["  apple\t", "toolong", "abc", "", "ANGLE"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "angle");
    }

    #[test]
    fn words_from_lines_other_lengths() {
        let words = words_from_lines(["lion", "apple", "bird"], 4);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "bird");
    }

    #[test]
    fn load_from_reader_reads_lines() {
        let reader = Cursor::new("apple\nangle\r\n\nkiwi\n");
        let words = load_from_reader(reader, 5).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here/words.txt", 5).is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_lines(WORDS.iter(), 5);
        assert!(!words.is_empty());
        assert!(words.len() <= WORDS.len());
    }
}
