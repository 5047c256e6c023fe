// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list loading.
//!
//! Reads one word per line from any buffered source and inserts the words
//! into a [`TrieTree`]. Lines are validated as UTF-8 before they reach the
//! tree; an invalid line stops the load and reports its line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::words::WordsConfig;
use crate::data_structures::trie_tree::{self, TrieTree};
use crate::error::word_list::WordListError;

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordListStats {
    /// Lines read from the source
    pub lines: usize,

    /// Words that were new to the tree
    pub inserted: usize,

    /// Words the tree already held
    pub duplicates: usize,

    /// Blank or comment lines that were ignored
    pub skipped: usize,
}

/// Reads words from `reader` into `tree`.
///
/// Words inserted before a failing line stay in the tree.
///
/// # Errors
///
/// * `WordListError::Read` if the source fails.
/// * `WordListError::InvalidWord` if a line is not valid UTF-8.
pub fn read_words<R: BufRead>(
    reader: R,
    config: &WordsConfig,
    tree: &mut TrieTree,
) -> Result<WordListStats, WordListError> {
    let mut stats = WordListStats::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let number = index + 1;
        let mut bytes = line.map_err(|source| WordListError::Read {
            line: number,
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        stats.lines += 1;

        let decoded = trie_tree::decode(&bytes).map_err(|source| WordListError::InvalidWord {
            line: number,
            source,
        })?;
        let word = if config.trim { decoded.trim() } else { decoded };

        let is_comment = config
            .comment_prefix
            .as_deref()
            .is_some_and(|prefix| word.starts_with(prefix));
        if is_comment || (config.skip_blank && word.is_empty()) {
            stats.skipped += 1;
            continue;
        }

        if tree.insert(word) {
            stats.inserted += 1;
        } else {
            stats.duplicates += 1;
        }
    }

    debug!(?stats, "word list read");
    Ok(stats)
}

/// Opens `path` and reads its words into `tree`.
///
/// # Errors
///
/// `WordListError::Open` if the file cannot be opened, otherwise as
/// [`read_words`].
pub fn load_words_file(
    path: &Path,
    config: &WordsConfig,
    tree: &mut TrieTree,
) -> Result<WordListStats, WordListError> {
    let file = File::open(path).map_err(|source| WordListError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let stats = read_words(BufReader::new(file), config, tree)?;
    info!(
        path = %path.display(),
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        "loaded word list"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_words_defaults() {
        let input = "cat\r\n  car \n\ncart\ncat\n";
        let mut tree = TrieTree::new();
        let stats = read_words(Cursor::new(input), &WordsConfig::default(), &mut tree).unwrap();

        assert_eq!(
            stats,
            WordListStats {
                lines: 5,
                inserted: 3,
                duplicates: 1,
                skipped: 1,
            }
        );
        assert_eq!(tree.all_tree_strings(), vec!["car", "cart", "cat"]);
    }

    #[test]
    fn test_read_words_untrimmed_keeps_blank_line() {
        let config = WordsConfig {
            trim: false,
            skip_blank: false,
            ..Default::default()
        };
        let mut tree = TrieTree::new();
        read_words(Cursor::new("a \n\nb"), &config, &mut tree).unwrap();

        assert!(tree.contains("a "));
        assert!(tree.contains(""));
        assert!(tree.contains("b"));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_read_words_skips_comments() {
        let config = WordsConfig {
            comment_prefix: Some("#".to_string()),
            ..Default::default()
        };
        let mut tree = TrieTree::new();
        let stats = read_words(Cursor::new("# header\nword\n"), &config, &mut tree).unwrap();

        assert_eq!(stats.skipped, 1);
        assert_eq!(tree.all_tree_strings(), vec!["word"]);
    }

    #[test]
    fn test_read_words_rejects_invalid_utf8() {
        let input: &[u8] = b"good\nba\xffd\nlater\n";
        let mut tree = TrieTree::new();
        let err = read_words(Cursor::new(input), &WordsConfig::default(), &mut tree).unwrap_err();

        assert!(matches!(err, WordListError::InvalidWord { line: 2, .. }));
        assert_eq!(tree.all_tree_strings(), vec!["good"]);
    }

    #[test]
    fn test_load_missing_file() {
        let mut tree = TrieTree::new();
        let err = load_words_file(
            Path::new("/definitely/not/here.txt"),
            &WordsConfig::default(),
            &mut tree,
        )
        .unwrap_err();
        assert!(matches!(err, WordListError::Open { .. }));
    }
}
