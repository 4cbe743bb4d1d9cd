// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::names::{NameTable, ScriptIds, is_valid_name};
use crate::table::{Entry, Metadata, ScriptExtensionsTable, is_valid_metadata_value};
use crate::{Error, ErrorKind, MAX_CODE_POINT};

/// Assembles a [`ScriptExtensionsTable`] range by range.
///
/// Ranges must be pushed in increasing code point order. Every push is validated against the
/// same rules the text loader applies, so a built table always satisfies the table invariants.
///
/// ## Example
///
/// ```
/// use script_extensions::TableBuilder;
///
/// let mut builder = TableBuilder::new();
/// builder.push(0x41, 0x5A, ["Latin"]).unwrap();
/// builder.push(0x60C, 0x60C, ["Arabic", "Syriac"]).unwrap();
/// assert!(builder.push(0x50, 0x60, ["Greek"]).is_err());
///
/// let table = builder.build();
/// assert_eq!(table.lookup(0x60C).unwrap(), ["Arabic", "Syriac"]);
/// ```
#[derive(Clone, Debug)]
pub struct TableBuilder {
    metadata: Metadata,
    names: NameTable,
    lists: Vec<ScriptIds>,
    list_index: HashMap<ScriptIds, u32>,
    entries: Vec<Entry>,
    missing: u32,
}

impl TableBuilder {
    /// Creates a builder with default [`Metadata`].
    pub fn new() -> Self {
        Self::empty(Metadata::default())
    }

    /// Creates a builder carrying `metadata`.
    ///
    /// Fails if the missing value is not a valid script name, or if the table name or Unicode
    /// version could not be written back as a single metadata line.
    pub fn with_metadata(metadata: Metadata) -> Result<Self, Error> {
        if !is_valid_name(metadata.missing()) {
            return Err(ErrorKind::InvalidScriptName.into());
        }
        let mut values = metadata.table().into_iter().chain(metadata.unicode_version());
        if !values.all(is_valid_metadata_value) {
            return Err(ErrorKind::InvalidMetadata.into());
        }
        Ok(Self::empty(metadata))
    }

    fn empty(metadata: Metadata) -> Self {
        let missing = Box::<str>::from(metadata.missing());
        let mut builder = Self {
            metadata,
            names: NameTable::default(),
            lists: Vec::new(),
            list_index: HashMap::new(),
            entries: Vec::new(),
            missing: 0,
        };
        builder.missing = builder.intern_list(&[&*missing]);
        builder
    }

    /// Returns the number of ranges pushed so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no range has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the inclusive range `start..=end` with its ordered script list.
    ///
    /// The range must start after the end of the previous one. On error the builder is left
    /// unchanged.
    pub fn push<'s, I>(&mut self, start: u32, end: u32, scripts: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'s str>,
    {
        if start > MAX_CODE_POINT || end > MAX_CODE_POINT {
            return Err(ErrorKind::CodePointOutOfRange.into());
        }
        if end < start {
            return Err(ErrorKind::InvalidRange.into());
        }
        if self.entries.last().is_some_and(|last| start <= last.end) {
            return Err(ErrorKind::Unordered.into());
        }
        let scripts: SmallVec<[&str; 4]> = scripts.into_iter().collect();
        if scripts.is_empty() {
            return Err(ErrorKind::MissingScripts.into());
        }
        let mut new_names = 0;
        for (i, name) in scripts.iter().enumerate() {
            if !is_valid_name(name) {
                return Err(ErrorKind::InvalidScriptName.into());
            }
            if scripts[..i].contains(name) {
                return Err(ErrorKind::DuplicateScript.into());
            }
            if self.names.id(name).is_none() {
                new_names += 1;
            }
        }
        if !self.names.has_room_for(new_names) {
            return Err(ErrorKind::TooManyScripts.into());
        }
        let list = self.intern_list(&scripts);
        self.entries.push(Entry { start, end, list });
        Ok(())
    }

    /// Finishes the table.
    pub fn build(self) -> ScriptExtensionsTable {
        log::debug!(
            "built Script_Extensions table: {} ranges, {} scripts, {} distinct lists",
            self.entries.len(),
            self.names.len(),
            self.lists.len()
        );
        ScriptExtensionsTable::from_parts(
            self.metadata,
            self.names,
            self.lists,
            self.entries,
            self.missing,
        )
    }

    /// Interns every name and the list itself. Names must already be validated.
    fn intern_list(&mut self, scripts: &[&str]) -> u32 {
        let ids: ScriptIds = scripts
            .iter()
            .filter_map(|name| self.names.intern(name))
            .collect();
        if let Some(&list) = self.list_index.get(&ids) {
            return list;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "there are never more lists than disjoint code point ranges"
        )]
        let list = self.lists.len() as u32;
        self.lists.push(ids.clone());
        self.list_index.insert(ids, list);
        list
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::TableBuilder;
    use crate::{ErrorKind, MAX_CODE_POINT, Metadata, ScriptExtensionsTable};

    #[test]
    fn rejects_out_of_range_code_points() {
        let mut builder = TableBuilder::new();
        let err = builder.push(0x10FFFF, 0x110000, ["Common"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CodePointOutOfRange);
        assert_eq!(err.line(), None);
        builder.push(0x10FFFF, MAX_CODE_POINT, ["Common"]).unwrap();
    }

    #[test]
    fn rejects_inverted_range() {
        let mut builder = TableBuilder::new();
        let err = builder.push(0x5A, 0x41, ["Latin"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn rejects_overlap_and_disorder() {
        let mut builder = TableBuilder::new();
        builder.push(0x41, 0x5A, ["Latin"]).unwrap();
        assert_eq!(
            builder.push(0x5A, 0x60, ["Common"]).unwrap_err().kind(),
            ErrorKind::Unordered
        );
        assert_eq!(
            builder.push(0x30, 0x39, ["Common"]).unwrap_err().kind(),
            ErrorKind::Unordered
        );
        builder.push(0x5B, 0x60, ["Common"]).unwrap();
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn rejects_bad_script_lists() {
        let mut builder = TableBuilder::new();
        let none: [&str; 0] = [];
        assert_eq!(
            builder.push(0x41, 0x41, none).unwrap_err().kind(),
            ErrorKind::MissingScripts
        );
        assert_eq!(
            builder.push(0x41, 0x41, ["Latin", ""]).unwrap_err().kind(),
            ErrorKind::InvalidScriptName
        );
        assert_eq!(
            builder
                .push(0x41, 0x41, ["Latin", "Greek", "Latin"])
                .unwrap_err()
                .kind(),
            ErrorKind::DuplicateScript
        );
        assert!(builder.is_empty());
        let table = builder.build();
        assert_eq!(table.script_names().collect::<std::vec::Vec<_>>(), ["Unknown"]);
    }

    #[test]
    fn deduplicates_lists() {
        let mut builder = TableBuilder::new();
        builder.push(0x41, 0x5A, ["Latin"]).unwrap();
        builder.push(0x61, 0x7A, ["Latin"]).unwrap();
        builder.push(0x3001, 0x3002, ["Han", "Hiragana"]).unwrap();
        builder.push(0x3008, 0x3011, ["Han", "Hiragana"]).unwrap();
        assert_eq!(builder.lists.len(), 3);
        let table = builder.build();
        assert_eq!(table.lookup(0x3010).unwrap(), ["Han", "Hiragana"]);
    }

    #[test]
    fn validates_missing_value() {
        let err = TableBuilder::with_metadata(Metadata::new().with_missing("no such")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScriptName);
        let table = TableBuilder::with_metadata(Metadata::new().with_missing("Zzzz"))
            .unwrap()
            .build();
        assert_eq!(table.lookup(0).unwrap(), ["Zzzz"]);
    }

    #[test]
    fn rejects_metadata_that_cannot_be_written() {
        for value in ["", "15.0.0 ", "15.0\t0", "Script\nExtensions", "Script\r"] {
            let err =
                TableBuilder::with_metadata(Metadata::new().with_unicode_version(value)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidMetadata, "{value:?}");
            let err = TableBuilder::with_metadata(Metadata::new().with_table(value)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidMetadata, "{value:?}");
        }
    }

    #[test]
    fn built_table_round_trips() {
        let metadata = Metadata::new()
            .with_table("Script Extensions (subset)")
            .with_unicode_version("15.0.0")
            .with_missing("Zzzz");
        let mut builder = TableBuilder::with_metadata(metadata).unwrap();
        builder.push(0x41, 0x5A, ["Latin"]).unwrap();
        builder.push(0x60C, 0x60C, ["Arabic", "Syriac"]).unwrap();
        let table = builder.build();
        let reparsed = ScriptExtensionsTable::parse(&table.to_string()).unwrap();
        assert_eq!(reparsed, table);
        assert_eq!(reparsed.metadata().table(), Some("Script Extensions (subset)"));
    }
}
