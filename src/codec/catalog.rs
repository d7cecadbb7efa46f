//! Fixture definition catalog format
//!
//! Format: [version: u8][count: i32][entry]*count
//! Entry: name(string) + label(string) + shape ordinal(i32) + color(3 x u8)
//!        + fixed angle(f32) + range min(f32) + range max(f32)
//!
//! The same count + entries block is embedded at the top of scene plan files.

use super::binary::*;
use super::error::{CodecError, CodecResult};
use crate::plan::{FieldAngle, FixtureDefinition, FixtureShape};
use std::io::{Read, Write};

/// Version byte written to and required from catalog files
pub const CATALOG_FILE_VERSION: u8 = 1;

/// Write a standalone catalog
pub fn write_catalog<W: Write>(writer: &mut W, definitions: &[FixtureDefinition]) -> CodecResult<()> {
    write_u8(writer, CATALOG_FILE_VERSION)?;
    write_definitions(writer, definitions)
}

/// Read a standalone catalog
///
/// # Errors
/// `UnsupportedVersion` for any version byte other than [`CATALOG_FILE_VERSION`].
pub fn read_catalog<R: Read>(reader: &mut R) -> CodecResult<Vec<FixtureDefinition>> {
    let found = read_u8(reader)?;
    if found != CATALOG_FILE_VERSION {
        return Err(CodecError::UnsupportedVersion { found, expected: CATALOG_FILE_VERSION });
    }
    read_definitions(reader)
}

pub(crate) fn write_definitions<W: Write>(writer: &mut W, definitions: &[FixtureDefinition]) -> CodecResult<()> {
    write_len(writer, definitions.len())?;
    for definition in definitions {
        write_definition(writer, definition)?;
    }
    Ok(())
}

pub(crate) fn read_definitions<R: Read>(reader: &mut R) -> CodecResult<Vec<FixtureDefinition>> {
    let count = read_len(reader, "catalog")?;
    log::debug!("Reading {} fixture definitions", count);

    // Capacity is capped; the count is untrusted until the entries are read
    let mut definitions = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        definitions.push(read_definition(reader)?);
    }
    Ok(definitions)
}

fn write_definition<W: Write>(writer: &mut W, definition: &FixtureDefinition) -> CodecResult<()> {
    if !definition.field_angle.is_finite() {
        return Err(CodecError::malformed(format!(
            "non-finite field angle in definition {:?}",
            definition.display_name
        )));
    }

    write_string(writer, &definition.display_name)?;
    write_string(writer, &definition.label)?;
    write_i32(writer, definition.shape.ordinal())?;
    write_rgb(writer, definition.display_color)?;

    let (fixed, min, max) = definition.field_angle.to_parts();
    write_f32(writer, fixed)?;
    write_f32(writer, min)?;
    write_f32(writer, max)?;
    Ok(())
}

fn read_definition<R: Read>(reader: &mut R) -> CodecResult<FixtureDefinition> {
    let display_name = read_string(reader)?;
    let label = read_string(reader)?;

    let ordinal = read_i32(reader)?;
    let shape = FixtureShape::from_ordinal(ordinal)
        .ok_or_else(|| CodecError::malformed(format!("unknown shape ordinal {}", ordinal)))?;

    let display_color = read_rgb(reader)?;

    let fixed = read_f32(reader)?;
    let min = read_f32(reader)?;
    let max = read_f32(reader)?;
    if !(fixed.is_finite() && min.is_finite() && max.is_finite()) {
        return Err(CodecError::malformed(format!(
            "non-finite field angle in definition {:?}",
            display_name
        )));
    }

    Ok(FixtureDefinition {
        display_name,
        label,
        shape,
        display_color,
        field_angle: FieldAngle::from_parts(fixed, min, max),
    })
}
