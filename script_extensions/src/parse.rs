// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loader for the tab-separated text form of a table.

use crate::names::is_valid_name;
use crate::table::{Metadata, ScriptExtensionsTable, is_valid_metadata_value};
use crate::{Error, ErrorKind, TableBuilder};

pub(crate) fn parse_table(source: &str) -> Result<ScriptExtensionsTable, Error> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches(' ')))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .peekable();

    let mut header = Header::default();
    while let Some((number, line)) = lines.next_if(|(_, line)| line.starts_with('@')) {
        header
            .apply(&line[1..])
            .map_err(|kind| Error::new(kind).at_line(number))?;
    }
    let mut builder = TableBuilder::with_metadata(header.finish())?;

    for (number, line) in lines {
        if line.starts_with('@') {
            return Err(Error::new(ErrorKind::MisplacedMetadata).at_line(number));
        }
        let (start, end, scripts) =
            parse_data_line(line).map_err(|kind| Error::new(kind).at_line(number))?;
        builder
            .push(start, end, scripts.split(' '))
            .map_err(|err| err.at_line(number))?;
    }

    let table = builder.build();
    log::debug!(
        "loaded {} table (Unicode {}): {} ranges",
        table.metadata().table().unwrap_or("unnamed"),
        table.metadata().unicode_version().unwrap_or("unknown"),
        table.len()
    );
    Ok(table)
}

/// Metadata lines seen before the first data line.
#[derive(Default)]
struct Header<'a> {
    table: Option<&'a str>,
    unicode: Option<&'a str>,
    missing: Option<&'a str>,
}

impl<'a> Header<'a> {
    /// Applies one `key<TAB>value` line, with the leading `@` stripped.
    fn apply(&mut self, line: &'a str) -> Result<(), ErrorKind> {
        let Some((key, value)) = line.split_once('\t') else {
            return Err(ErrorKind::MalformedLine);
        };
        if !is_valid_metadata_value(value) {
            return Err(ErrorKind::MalformedLine);
        }
        let slot = match key {
            "table" => &mut self.table,
            "unicode" => &mut self.unicode,
            "missing" => {
                if !is_valid_name(value) {
                    return Err(ErrorKind::InvalidScriptName);
                }
                &mut self.missing
            }
            _ => return Err(ErrorKind::UnknownMetadata),
        };
        if slot.replace(value).is_some() {
            return Err(ErrorKind::DuplicateMetadata);
        }
        Ok(())
    }

    fn finish(self) -> Metadata {
        let mut metadata = Metadata::new();
        if let Some(table) = self.table {
            metadata = metadata.with_table(table);
        }
        if let Some(version) = self.unicode {
            metadata = metadata.with_unicode_version(version);
        }
        if let Some(missing) = self.missing {
            metadata = metadata.with_missing(missing);
        }
        metadata
    }
}

/// Splits `start<TAB>end<TAB>scripts`; a blank `end` means a single code point.
fn parse_data_line(line: &str) -> Result<(u32, u32, &str), ErrorKind> {
    let mut fields = line.split('\t');
    let (Some(start), Some(end), Some(scripts), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ErrorKind::MalformedLine);
    };
    let start = parse_code_point(start)?;
    let end = if end.is_empty() {
        start
    } else {
        parse_code_point(end)?
    };
    if scripts.trim().is_empty() {
        return Err(ErrorKind::MissingScripts);
    }
    Ok((start, end, scripts))
}

/// Parses a bare hexadecimal code point.
fn parse_code_point(field: &str) -> Result<u32, ErrorKind> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ErrorKind::InvalidCodePoint);
    }
    // All digits are valid, so the only failure left is overflow.
    u32::from_str_radix(field, 16).map_err(|_| ErrorKind::CodePointOutOfRange)
}
