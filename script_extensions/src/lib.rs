// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup of the Unicode `Script_Extensions` property over a sorted range table.
//!
//! The table maps disjoint, inclusive code point ranges to an ordered list of script names.
//! Code points outside every range resolve to a single default script, `Unknown` unless the
//! table says otherwise. A table is built once, either by parsing the generated text format with
//! [`ScriptExtensionsTable::parse`] or programmatically through a [`TableBuilder`], and is
//! read-only afterwards, so it can be shared freely between threads.
//!
//! ## Text format
//!
//! ```text
//! # comment
//! @table	Script_Extensions
//! @unicode	15.0.0
//! @missing	Unknown
//! 41	5A	Latin
//! 60C		Arabic Nko Hanifi_Rohingya Syriac Thaana Yezidi
//! ```
//!
//! Fields are tab separated. A blank end field denotes a single code point range. Metadata lines
//! start with `@` and must precede the data lines.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `icu`: Map script names to `icu_properties` `Script` values.
//!
//! ## Example
//!
//! ```
//! use script_extensions::ScriptExtensionsTable;
//!
//! let table = ScriptExtensionsTable::parse("0\t40\tCommon\n41\t5A\tLatin\n").unwrap();
//! assert_eq!(table.lookup(0x41).unwrap(), ["Latin"]);
//! assert_eq!(table.lookup_char('!'), ["Common"]);
//! assert_eq!(table.lookup(0x3400).unwrap(), ["Unknown"]);
//! assert!(table.lookup(0x110000).is_err());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod builder;
mod error;
#[cfg(feature = "icu")]
mod icu;
mod names;
mod parse;
mod scripts;
mod table;

pub use crate::builder::TableBuilder;
pub use crate::error::{DomainError, Error, ErrorKind};
#[cfg(feature = "icu")]
pub use crate::icu::icu_script;
pub use crate::scripts::{ScriptRange, Scripts, ScriptsIter};
pub use crate::table::{Metadata, ScriptExtensionsTable, ScriptRanges};

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// The script that uncovered code points resolve to unless a table overrides it.
pub const DEFAULT_MISSING_SCRIPT: &str = "Unknown";
