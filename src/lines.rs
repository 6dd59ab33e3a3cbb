//! Ordered, duplicate-free collection of text lines.
//!
//! Lines are compared as exact strings (case and whitespace sensitive). Trimming, if
//! any, happens before lines get here.

use std::collections::HashSet;

/// Whether `add_all` admits lines that are already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duplicates {
    #[default]
    Skip,
    Allow,
}

/// Lines in first-insertion order, with a hash index for membership.
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    lines: Vec<String>,
    index: HashSet<String>,
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from lines taken verbatim (e.g. a file on disk). Existing repeats are kept.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let index = lines.iter().cloned().collect();
        Self { lines, index }
    }

    pub fn contains(&self, line: &str) -> bool {
        self.index.contains(line)
    }

    /// Append each line not already present, in input order.
    ///
    /// Lines present on entry are never moved or dropped. With `Duplicates::Allow` every
    /// input line is appended.
    pub fn add_all<I, S>(&mut self, lines: I, duplicates: Duplicates) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            let line = line.into();
            if duplicates == Duplicates::Allow || !self.index.contains(&line) {
                self.index.insert(line.clone());
                self.lines.push(line);
            }
        }
        self
    }

    /// Every line not exactly matching one of `lines`, order preserved.
    pub fn remove_all<I, S>(&self, lines: I) -> LineSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded: HashSet<String> = lines.into_iter().map(|l| l.as_ref().to_string()).collect();
        if excluded.is_empty() {
            return self.clone();
        }
        LineSet::from_lines(self.lines.iter().filter(|l| !excluded.contains(l.as_str())).cloned())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn into_vec(self) -> Vec<String> {
        self.lines
    }
}

impl PartialEq for LineSet {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

impl Eq for LineSet {}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
