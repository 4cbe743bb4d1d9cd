// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `script_extensions_data` packages the generated Unicode `Script_Extensions` table and loads
//! it into a process-wide [`ScriptExtensionsTable`] on first use.
//!
//! The table text is embedded at compile time. It is parsed once, behind a one-time initializer,
//! and never mutated afterwards, so lookups from any number of threads need no locking.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables the process-wide table and the free lookup functions.
//!   Without it, [`load`] still parses a private copy of the embedded table.
//!
//! ## Example
//!
//! ```
//! assert_eq!(script_extensions_data::lookup(0x41).unwrap(), ["Latin"]);
//! assert_eq!(script_extensions_data::lookup_char('\u{3400}'), ["Han"]);
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

#[cfg(feature = "std")]
extern crate std;

use script_extensions::{Error, ScriptExtensionsTable};
#[cfg(feature = "std")]
use script_extensions::{DomainError, Scripts};

/// The generated table text.
pub const SCRIPT_EXTENSIONS: &str = include_str!("../data/scx.txt");

/// The Unicode version [`SCRIPT_EXTENSIONS`] was generated from.
pub const UNICODE_VERSION: &str = "15.0.0";

/// Parses a fresh copy of the embedded table.
///
/// Most callers want the shared [`table`] instead.
pub fn load() -> Result<ScriptExtensionsTable, Error> {
    log::debug!("parsing embedded Script_Extensions table, Unicode {UNICODE_VERSION}");
    ScriptExtensionsTable::parse(SCRIPT_EXTENSIONS)
}

#[cfg(feature = "std")]
static TABLE: std::sync::OnceLock<Result<ScriptExtensionsTable, Error>> =
    std::sync::OnceLock::new();

/// Returns the process-wide table, parsing it on first use.
///
/// Concurrent first calls block until the single initialization finishes.
#[cfg(feature = "std")]
pub fn try_table() -> Result<&'static ScriptExtensionsTable, Error> {
    TABLE.get_or_init(load).as_ref().map_err(|err| *err)
}

/// Returns the process-wide table, parsing it on first use.
///
/// # Panics
///
/// Panics if the embedded table is malformed, which the crate's tests rule out.
#[cfg(feature = "std")]
pub fn table() -> &'static ScriptExtensionsTable {
    try_table().expect("embedded Script_Extensions table is well-formed")
}

/// Returns the scripts `code_point` may belong to, according to the embedded table.
#[cfg(feature = "std")]
pub fn lookup(code_point: u32) -> Result<Scripts<'static>, DomainError> {
    table().lookup(code_point)
}

/// Returns the scripts `ch` may belong to, according to the embedded table.
#[cfg(feature = "std")]
pub fn lookup_char(ch: char) -> Scripts<'static> {
    table().lookup_char(ch)
}
