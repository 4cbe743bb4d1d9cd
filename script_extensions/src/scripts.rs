// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;

use crate::names::{NameTable, ScriptId};

/// The ordered script list a code point resolves to.
///
/// Order follows the table declaration; the first entry is the preferred script for consumers
/// that need a single answer. A list is never empty.
#[derive(Clone, Copy)]
pub struct Scripts<'a> {
    names: &'a NameTable,
    ids: &'a [ScriptId],
    is_default: bool,
}

impl<'a> Scripts<'a> {
    pub(crate) fn new(names: &'a NameTable, ids: &'a [ScriptId], is_default: bool) -> Self {
        debug_assert!(!ids.is_empty(), "script lists are never empty");
        Self {
            names,
            ids,
            is_default,
        }
    }

    /// Returns the number of scripts in the list.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the list is empty, which a well-formed table never produces.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the script at `index`.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        let names = self.names;
        self.ids.get(index).map(|&id| names.name(id))
    }

    /// Returns the first listed script.
    pub fn preferred(&self) -> &'a str {
        self.names.name(self.ids[0])
    }

    /// Returns an iterator over the script names, in declaration order.
    pub fn iter(&self) -> ScriptsIter<'a> {
        ScriptsIter {
            names: self.names,
            ids: self.ids.iter(),
        }
    }

    /// Returns `true` if `script` is one of the listed scripts.
    pub fn contains(&self, script: &str) -> bool {
        self.names
            .id(script)
            .is_some_and(|id| self.ids.contains(&id))
    }

    /// Returns `true` if the code point was not covered by any range and fell back to the
    /// table's missing value.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Collects the script names into a vector.
    pub fn to_vec(&self) -> Vec<&'a str> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for Scripts<'a> {
    type Item = &'a str;
    type IntoIter = ScriptsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Scripts<'a> {
    type Item = &'a str;
    type IntoIter = ScriptsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Scripts<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Scripts<'_> {}

impl PartialEq<[&str]> for Scripts<'_> {
    fn eq(&self, other: &[&str]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Scripts<'_> {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}

impl PartialEq<Vec<&str>> for Scripts<'_> {
    fn eq(&self, other: &Vec<&str>) -> bool {
        *self == other[..]
    }
}

impl fmt::Debug for Scripts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Scripts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Iterator over the names in a [`Scripts`] list.
#[derive(Clone, Debug)]
pub struct ScriptsIter<'a> {
    names: &'a NameTable,
    ids: core::slice::Iter<'a, ScriptId>,
}

impl<'a> Iterator for ScriptsIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let names = self.names;
        self.ids.next().map(|&id| names.name(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for ScriptsIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let names = self.names;
        self.ids.next_back().map(|&id| names.name(id))
    }
}

impl ExactSizeIterator for ScriptsIter<'_> {}

/// One entry of a [`ScriptExtensionsTable`](crate::ScriptExtensionsTable): an inclusive code
/// point range and its script list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptRange<'a> {
    start: u32,
    end: u32,
    scripts: Scripts<'a>,
}

impl<'a> ScriptRange<'a> {
    pub(crate) fn new(start: u32, end: u32, scripts: Scripts<'a>) -> Self {
        Self {
            start,
            end,
            scripts,
        }
    }

    /// The first code point of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The last code point of the range, inclusive.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// The range as a `RangeInclusive`.
    pub fn range(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Returns `true` if the range covers exactly one code point.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `code_point` lies within the range.
    pub fn contains(&self, code_point: u32) -> bool {
        (self.start..=self.end).contains(&code_point)
    }

    /// The scripts associated with every code point of the range.
    pub fn scripts(&self) -> Scripts<'a> {
        self.scripts
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;
    use std::vec;

    use super::{ScriptRange, Scripts};
    use crate::names::{NameTable, ScriptId};

    fn names() -> NameTable {
        let mut names = NameTable::default();
        for name in ["Unknown", "Arabic", "Syriac", "Thaana"] {
            names.intern(name).unwrap();
        }
        names
    }

    #[test]
    fn preserves_declaration_order() {
        let names = names();
        let ids: [ScriptId; 3] = [3, 1, 2];
        let scripts = Scripts::new(&names, &ids, false);
        assert_eq!(scripts, ["Thaana", "Arabic", "Syriac"]);
        assert_ne!(scripts, ["Arabic", "Syriac", "Thaana"]);
        assert_eq!(scripts.preferred(), "Thaana");
        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts.get(2), Some("Syriac"));
        assert_eq!(scripts.get(3), None);
        assert_eq!(scripts.iter().rev().next(), Some("Syriac"));
    }

    #[test]
    fn membership() {
        let names = names();
        let ids: [ScriptId; 2] = [1, 2];
        let scripts = Scripts::new(&names, &ids, false);
        assert!(scripts.contains("Arabic"));
        assert!(!scripts.contains("Thaana"));
        assert!(!scripts.contains("Latin"));
        assert!(!scripts.is_default());
    }

    #[test]
    fn display_and_debug() {
        let names = names();
        let ids: [ScriptId; 2] = [1, 2];
        let scripts = Scripts::new(&names, &ids, false);
        assert_eq!(scripts.to_string(), "Arabic Syriac");
        assert_eq!(std::format!("{scripts:?}"), r#"["Arabic", "Syriac"]"#);
        assert_eq!(scripts.to_vec(), vec!["Arabic", "Syriac"]);
    }

    #[test]
    fn range_bounds() {
        let names = names();
        let ids: [ScriptId; 1] = [0];
        let range = ScriptRange::new(0x41, 0x5A, Scripts::new(&names, &ids, true));
        assert!(range.contains(0x41));
        assert!(range.contains(0x5A));
        assert!(!range.contains(0x40));
        assert!(!range.contains(0x5B));
        assert!(!range.is_single());
        assert_eq!(range.range(), 0x41..=0x5A);
        assert!(range.scripts().is_default());
    }
}
