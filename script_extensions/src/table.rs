// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use crate::names::{NameTable, ScriptId, ScriptIds};
use crate::scripts::{ScriptRange, Scripts};
use crate::{DEFAULT_MISSING_SCRIPT, DomainError, Error, MAX_CODE_POINT};

/// Descriptive values carried alongside the ranges of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    table: Option<Box<str>>,
    unicode_version: Option<Box<str>>,
    missing: Box<str>,
}

impl Metadata {
    /// Creates metadata with no table name or version and the `Unknown` missing value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table name.
    ///
    /// Like the Unicode version, it is validated when the metadata is handed to a
    /// [`TableBuilder`](crate::TableBuilder).
    pub fn with_table(mut self, table: &str) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the Unicode version the table was generated from.
    pub fn with_unicode_version(mut self, version: &str) -> Self {
        self.unicode_version = Some(version.into());
        self
    }

    /// Sets the script that uncovered code points resolve to.
    ///
    /// The name is validated when the metadata is handed to a
    /// [`TableBuilder`](crate::TableBuilder).
    pub fn with_missing(mut self, missing: &str) -> Self {
        self.missing = missing.into();
        self
    }

    /// The table name, e.g. `Script_Extensions`.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The Unicode version the table was generated from.
    pub fn unicode_version(&self) -> Option<&str> {
        self.unicode_version.as_deref()
    }

    /// The script that uncovered code points resolve to.
    pub fn missing(&self) -> &str {
        &self.missing
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            table: None,
            unicode_version: None,
            missing: DEFAULT_MISSING_SCRIPT.into(),
        }
    }
}

/// Whether `value` survives a write and re-parse as a metadata line.
pub(crate) fn is_valid_metadata_value(value: &str) -> bool {
    !value.is_empty() && !value.ends_with(' ') && !value.contains(['\t', '\n', '\r'])
}

/// A range entry: `start..=end` maps to `lists[list]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) start: u32,
    pub(crate) end: u32,
    pub(crate) list: u32,
}

/// An immutable table of disjoint code point ranges and their script lists.
///
/// Ranges are kept sorted, so a lookup is a binary search over them. The table is `Send` and
/// `Sync` and is never mutated after it is built.
///
/// Two tables compare equal when their metadata, range boundaries and per-range script lists,
/// in order, are equal.
#[derive(Clone, Debug)]
pub struct ScriptExtensionsTable {
    metadata: Metadata,
    names: NameTable,
    lists: Vec<ScriptIds>,
    entries: Vec<Entry>,
    missing: u32,
}

impl ScriptExtensionsTable {
    pub(crate) fn from_parts(
        metadata: Metadata,
        names: NameTable,
        lists: Vec<ScriptIds>,
        entries: Vec<Entry>,
        missing: u32,
    ) -> Self {
        Self {
            metadata,
            names,
            lists,
            entries,
            missing,
        }
    }

    /// Parses a table from its text form.
    ///
    /// Fails on the first malformed line; no partial table is produced.
    pub fn parse(source: &str) -> Result<Self, Error> {
        crate::parse::parse_table(source)
    }

    /// The table's metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the number of ranges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no ranges, in which case every code point resolves to the
    /// missing value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the scripts `code_point` may belong to.
    ///
    /// Code points not covered by any range resolve to the missing value, `["Unknown"]` by
    /// default. Values above `U+10FFFF` are rejected.
    pub fn lookup(&self, code_point: u32) -> Result<Scripts<'_>, DomainError> {
        if code_point > MAX_CODE_POINT {
            return Err(DomainError::new(code_point));
        }
        Ok(match self.entry_index(code_point) {
            Some(index) => self.scripts_of(self.entries[index].list, false),
            None => self.default_scripts(),
        })
    }

    /// Returns the scripts `ch` may belong to.
    pub fn lookup_char(&self, ch: char) -> Scripts<'_> {
        match self.entry_index(ch as u32) {
            Some(index) => self.scripts_of(self.entries[index].list, false),
            None => self.default_scripts(),
        }
    }

    /// Returns `true` if `script` is among the scripts of `code_point`.
    pub fn has_script(&self, code_point: u32, script: &str) -> Result<bool, DomainError> {
        Ok(self.lookup(code_point)?.contains(script))
    }

    /// Returns the range covering `code_point`, if any.
    pub fn range_containing(&self, code_point: u32) -> Option<ScriptRange<'_>> {
        self.entry_index(code_point)
            .map(|index| self.range_at(&self.entries[index]))
    }

    /// Returns the missing value as a script list.
    pub fn default_scripts(&self) -> Scripts<'_> {
        self.scripts_of(self.missing, true)
    }

    /// Returns an iterator over the ranges, in code point order.
    pub fn ranges(&self) -> impl DoubleEndedIterator<Item = ScriptRange<'_>> + ExactSizeIterator {
        self.entries.iter().map(|entry| self.range_at(entry))
    }

    /// Returns the maximal code point ranges whose script list contains `script`.
    ///
    /// Adjacent entries are merged. Uncovered code points count as the missing value, so asking
    /// for `Unknown` yields the gaps between ranges.
    pub fn ranges_for_script(&self, script: &str) -> ScriptRanges<'_> {
        ScriptRanges {
            table: self,
            script: self.names.id(script),
            segments: Segments::new(&self.entries, self.missing),
        }
    }

    /// Returns the distinct script names used by the table, in first-appearance order.
    ///
    /// The missing value comes first.
    pub fn script_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter()
    }

    fn entry_index(&self, code_point: u32) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| {
                if entry.end < code_point {
                    Ordering::Less
                } else if entry.start > code_point {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()
    }

    fn range_at(&self, entry: &Entry) -> ScriptRange<'_> {
        ScriptRange::new(entry.start, entry.end, self.scripts_of(entry.list, false))
    }

    fn scripts_of(&self, list: u32, is_default: bool) -> Scripts<'_> {
        Scripts::new(&self.names, &self.lists[list as usize], is_default)
    }

    fn list_contains(&self, list: u32, script: ScriptId) -> bool {
        self.lists[list as usize].contains(&script)
    }
}

impl FromStr for ScriptExtensionsTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for ScriptExtensionsTable {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata
            && self.default_scripts() == other.default_scripts()
            && self.ranges().eq(other.ranges())
    }
}

impl Eq for ScriptExtensionsTable {}

/// Writes the table in the text form accepted by [`ScriptExtensionsTable::parse`].
impl fmt::Display for ScriptExtensionsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = self.metadata.table() {
            writeln!(f, "@table\t{table}")?;
        }
        if let Some(version) = self.metadata.unicode_version() {
            writeln!(f, "@unicode\t{version}")?;
        }
        writeln!(f, "@missing\t{}", self.metadata.missing())?;
        for range in self.ranges() {
            if range.is_single() {
                writeln!(f, "{:X}\t\t{}", range.start(), range.scripts())?;
            } else {
                writeln!(
                    f,
                    "{:X}\t{:X}\t{}",
                    range.start(),
                    range.end(),
                    range.scripts()
                )?;
            }
        }
        Ok(())
    }
}

/// A run of code points sharing one script list; the runs tile `0..=MAX_CODE_POINT`.
#[derive(Clone, Copy, Debug)]
struct Segment {
    start: u32,
    end: u32,
    list: u32,
}

/// Walks the table's entries and the gaps between them.
#[derive(Clone, Debug)]
struct Segments<'a> {
    entries: core::slice::Iter<'a, Entry>,
    pending: Option<&'a Entry>,
    missing: u32,
    next: Option<u32>,
}

impl<'a> Segments<'a> {
    fn new(entries: &'a [Entry], missing: u32) -> Self {
        let mut entries = entries.iter();
        Self {
            pending: entries.next(),
            entries,
            missing,
            next: Some(0),
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let start = self.next?;
        let segment = match self.pending {
            Some(entry) if entry.start == start => {
                self.pending = self.entries.next();
                Segment {
                    start,
                    end: entry.end,
                    list: entry.list,
                }
            }
            Some(entry) => Segment {
                start,
                end: entry.start - 1,
                list: self.missing,
            },
            None => Segment {
                start,
                end: MAX_CODE_POINT,
                list: self.missing,
            },
        };
        self.next = (segment.end < MAX_CODE_POINT).then(|| segment.end + 1);
        Some(segment)
    }
}

/// Iterator over the maximal code point ranges carrying one script.
///
/// Returned by [`ScriptExtensionsTable::ranges_for_script`].
#[derive(Clone, Debug)]
pub struct ScriptRanges<'a> {
    table: &'a ScriptExtensionsTable,
    script: Option<ScriptId>,
    segments: Segments<'a>,
}

impl Iterator for ScriptRanges<'_> {
    type Item = RangeInclusive<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let script = self.script?;
        let table = self.table;
        let first = self
            .segments
            .by_ref()
            .find(|segment| table.list_contains(segment.list, script))?;
        let mut end = first.end;
        for segment in self.segments.by_ref() {
            if !table.list_contains(segment.list, script) {
                break;
            }
            end = segment.end;
        }
        Some(first.start..=end)
    }
}
