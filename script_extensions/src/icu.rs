// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of script names to ICU4X values.

use icu_properties::PropertyParser;
use icu_properties::props::Script;

use crate::Scripts;

/// Maps a script name, long (`Hanifi_Rohingya`) or short (`Rohg`), to its ICU4X [`Script`].
///
/// Returns `None` for names ICU4X's compiled data does not know, e.g. scripts added in a newer
/// Unicode version than the compiled data.
pub fn icu_script(name: &str) -> Option<Script> {
    PropertyParser::<Script>::new().get_strict(name)
}

impl<'a> Scripts<'a> {
    /// Returns the ICU4X [`Script`] values of the list, skipping names ICU4X does not know.
    pub fn icu_scripts(&self) -> impl Iterator<Item = Script> + 'a {
        self.iter().filter_map(icu_script)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use icu_properties::props::Script;

    use super::icu_script;
    use crate::ScriptExtensionsTable;

    #[test]
    fn maps_long_and_short_names() {
        assert_eq!(icu_script("Latin"), Some(Script::Latin));
        assert_eq!(icu_script("Latn"), Some(Script::Latin));
        assert_eq!(icu_script("Hanifi_Rohingya"), Some(Script::HanifiRohingya));
        assert_eq!(icu_script("Unknown"), Some(Script::Unknown));
        assert_eq!(icu_script("Not_A_Script"), None);
    }

    #[test]
    fn maps_a_lookup() {
        let table = ScriptExtensionsTable::parse("60C\t\tArabic Nko Syriac\n").unwrap();
        let scripts: Vec<_> = table.lookup(0x60C).unwrap().icu_scripts().collect();
        assert_eq!(scripts, [Script::Arabic, Script::Nko, Script::Syriac]);
    }
}
