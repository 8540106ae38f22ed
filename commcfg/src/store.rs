//! Raw key-value loading.
//!
//! A configuration source is a sequence of `key=value` lines. The first `=`
//! on a line separates key from value; neither side is trimmed. Lines without
//! `=` are skipped. When a key repeats, the last occurrence wins.

use std::collections::btree_map::{self, BTreeMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Key-value pairs read from a configuration source.
///
/// # Examples
///
/// ```
/// use commcfg::RawConfigMap;
///
/// let map = RawConfigMap::parse("ip=10.0.0.1\nnot a pair\nport=80\nport=8080\n");
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("port"), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfigMap {
    entries: BTreeMap<String, String>,
}

impl RawConfigMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from configuration text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        let mut skipped = 0usize;
        for line in text.lines() {
            if !map.insert_line(line) {
                skipped += 1;
            }
        }
        log::debug!(
            "Loaded {} configuration entries ({skipped} lines skipped)",
            map.len()
        );
        map
    }

    /// Builds a map from a line-oriented reader.
    ///
    /// Lines end at `\n`, with a trailing `\r` removed. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the reader fails part way.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut map = Self::new();
        let mut skipped = 0usize;
        for line in reader.split(b'\n') {
            let bytes = line?;
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
            if !map.insert_line(&String::from_utf8_lossy(bytes)) {
                skipped += 1;
            }
        }
        log::debug!(
            "Loaded {} configuration entries ({skipped} lines skipped)",
            map.len()
        );
        Ok(map)
    }

    /// Opens and reads the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpenFailed`] if the file cannot be opened or read.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::FileOpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Reading configuration from {}", path.display());
        Self::from_reader(BufReader::new(file)).map_err(|source| Error::FileOpenFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Splits one line on its first `=` and stores the pair.
    ///
    /// Returns `false` if the line holds no delimiter.
    fn insert_line(&mut self, line: &str) -> bool {
        match line.split_once('=') {
            Some((key, value)) => {
                self.entries.insert(key.to_string(), value.to_string());
                true
            }
            None => {
                log::trace!("Skipping line without '=': {line:?}");
                false
            }
        }
    }

    /// Returns the raw value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over `(key, value)` pairs of a [`RawConfigMap`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a RawConfigMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RawConfigMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
