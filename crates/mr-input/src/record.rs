//! Append-only sequences of raw input lines.
//!
//! Each sequence mirrors the definition order of its source, which the
//! downstream parser relies on when cross-referencing nodes and elements.

use core::fmt;

use crate::error::{InputError, InputResult};

/// The four record collections held by the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    CableLibrary,
    Node,
    Element,
    SolverOption,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::CableLibrary,
        RecordKind::Node,
        RecordKind::Element,
        RecordKind::SolverOption,
    ];

    /// Human-readable collection name used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::CableLibrary => "cable library",
            RecordKind::Node => "node",
            RecordKind::Element => "element",
            RecordKind::SolverOption => "solver option",
        }
    }

    /// Numbered out-of-range diagnostic for this collection.
    pub fn out_of_range_code(self) -> u32 {
        match self {
            RecordKind::CableLibrary => 4,
            RecordKind::Node => 14,
            RecordKind::Element => 15,
            RecordKind::SolverOption => 16,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered, append-only list of text lines of one [`RecordKind`].
///
/// There is no remove or reorder operation: an index handed out once stays
/// valid and keeps pointing at the same line.
///
/// The kind is fixed by the owning container and never read from input, so
/// an out-of-range error always names the collection that was indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSequence {
    kind: RecordKind,
    lines: Vec<String>,
}

impl RecordSequence {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    #[cfg(feature = "serde")]
    pub(crate) fn from_lines(kind: RecordKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    #[cfg(feature = "serde")]
    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Append a line verbatim. Content is not inspected.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(kind = %self.kind, index = self.lines.len(), line = %line, "append record");
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, or the kind-specific out-of-range error.
    pub fn get(&self, index: usize) -> InputResult<&str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(signed(index)))
    }

    /// Like [`get`](Self::get), for hosts that index with signed integers.
    pub fn get_signed(&self, index: i64) -> InputResult<&str> {
        let idx = usize::try_from(index).map_err(|_| self.out_of_range(i128::from(index)))?;
        self.lines
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(i128::from(index)))
    }

    /// Mutable handle to the stored line for collaborators that edit in place.
    pub fn get_mut(&mut self, index: usize) -> InputResult<&mut String> {
        if index >= self.lines.len() {
            return Err(self.out_of_range(signed(index)));
        }
        Ok(&mut self.lines[index])
    }

    /// Trim surrounding whitespace of the line at `index` in place and
    /// return the normalized text.
    pub fn normalize(&mut self, index: usize) -> InputResult<&str> {
        let line = self.get_mut(index)?;
        let trimmed = line.trim();
        if trimmed.len() != line.len() {
            *line = trimmed.to_string();
        }
        Ok(line.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    fn out_of_range(&self, index: i128) -> InputError {
        tracing::warn!(
            kind = %self.kind,
            index = %index,
            len = self.lines.len(),
            "record index out of range"
        );
        InputError::OutOfRange {
            kind: self.kind,
            index,
            len: self.lines.len(),
        }
    }
}

// usize is at most 64 bits, so this never truncates
fn signed(index: usize) -> i128 {
    index as i128
}

impl Extend<String> for RecordSequence {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for line in iter {
            self.push(line);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn len_and_order_follow_pushes(lines in prop::collection::vec(".*", 0..32)) {
            let mut seq = RecordSequence::new(RecordKind::Node);
            for line in &lines {
                seq.push(line.clone());
            }
            prop_assert_eq!(seq.len(), lines.len());
            for (i, line) in lines.iter().enumerate() {
                prop_assert_eq!(seq.get(i).unwrap(), line.as_str());
            }
            let err = seq.get(lines.len()).unwrap_err();
            prop_assert_eq!(err.kind(), RecordKind::Node);
        }
    }
}
