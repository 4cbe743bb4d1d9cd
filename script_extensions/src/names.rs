// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interned script names.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Index of a script name within a [`NameTable`].
pub(crate) type ScriptId = u16;

/// An ordered list of interned script names.
pub(crate) type ScriptIds = SmallVec<[ScriptId; 4]>;

/// Script names in first-appearance order, with a reverse index.
#[derive(Clone, Debug, Default)]
pub(crate) struct NameTable {
    names: Vec<Box<str>>,
    index: HashMap<Box<str>, ScriptId>,
}

impl NameTable {
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn id(&self, name: &str) -> Option<ScriptId> {
        self.index.get(name).copied()
    }

    pub(crate) fn name(&self, id: ScriptId) -> &str {
        &self.names[usize::from(id)]
    }

    /// Returns the id for `name`, adding it if needed.
    ///
    /// Returns `None` once every id is taken.
    pub(crate) fn intern(&mut self, name: &str) -> Option<ScriptId> {
        if let Some(id) = self.id(name) {
            return Some(id);
        }
        let id = ScriptId::try_from(self.names.len()).ok()?;
        self.names.push(name.into());
        self.index.insert(name.into(), id);
        Some(id)
    }

    /// Whether `count` more names still fit.
    pub(crate) fn has_room_for(&self, count: usize) -> bool {
        self.names.len() + count <= usize::from(ScriptId::MAX) + 1
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }
}

/// Whether `name` is usable as a script name: non-empty ASCII alphanumerics and `_`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::{NameTable, is_valid_name};

    #[test]
    fn intern_is_idempotent() {
        let mut names = NameTable::default();
        let latin = names.intern("Latin").unwrap();
        let greek = names.intern("Greek").unwrap();
        assert_eq!(names.intern("Latin"), Some(latin));
        assert_ne!(latin, greek);
        assert_eq!(names.len(), 2);
        assert_eq!(names.name(greek), "Greek");
        assert_eq!(names.id("Greek"), Some(greek));
        assert_eq!(names.id("Han"), None);
    }

    #[test]
    fn valid_names() {
        assert!(is_valid_name("Hanifi_Rohingya"));
        assert!(is_valid_name("Zyyy"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Old Italic"));
        assert!(!is_valid_name("Latin,"));
    }
}
