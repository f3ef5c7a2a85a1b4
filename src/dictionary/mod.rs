use std::collections::HashSet;
use std::path::Path;

use tokio::fs;

use crate::error::DictionaryError;

/// Set of playable words, stored lower-cased.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a newline-delimited UTF-8 word list.
    ///
    /// Blank lines are skipped and every word is lower-cased. A missing file,
    /// invalid UTF-8, or a list with no words at all is an error.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).await.map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| DictionaryError::Decode {
            path: path.to_path_buf(),
        })?;

        let dictionary = Self::from_words(content.lines());
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from in-memory words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Check if a word exists in the dictionary (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// First `count` words in sorted order.
    pub fn sample(&self, count: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words.truncate(count);
        words
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
