//! Scene plan file format
//!
//! Format: [version: u8][catalog: count + entries][element_count: i32][element]*
//! Element: [grid_x: i32][grid_y: i32][kind: u8][payload]
//!
//! Payloads by kind:
//! - 1 rail: height_from_floor(i32) + length(i32) + orientation(i32)
//! - 2 fixture: catalog_index(i32) + field_angle(f32) + tint(3 x u8)
//!   + rotation(f32) + tilt(f32) + connection_id(string) + intensity(i32)
//! - 3 label: text(string) + color(3 x u8) + font_size(i32) + font_family(string)
//!
//! Kind 0 carries no payload. It is accepted on read and never written.

use super::binary::*;
use super::catalog::{read_definitions, write_definitions};
use super::error::{CodecError, CodecResult};
use crate::plan::{Fixture, FixtureDefinition, GridPos, MountingRail, Orientation, ScenePlan, StageElement, TextLabel};
use std::io::{Read, Write};

/// Version byte written to and required from scene plan files
pub const SCENE_FILE_VERSION: u8 = 1;

// Element discriminants; these must never change between versions
const KIND_NONE: u8 = 0;
const KIND_RAIL: u8 = 1;
const KIND_FIXTURE: u8 = 2;
const KIND_LABEL: u8 = 3;

/// Write a scene plan with its deduplicated catalog
pub fn write_scene<W: Write>(writer: &mut W, plan: &ScenePlan) -> CodecResult<()> {
    write_u8(writer, SCENE_FILE_VERSION)?;

    let catalog = plan.catalog();
    write_definitions(writer, &catalog)?;

    write_len(writer, plan.len())?;
    for element in plan {
        write_element(writer, element, &catalog)?;
    }

    log::debug!("Wrote scene: {} catalog entries, {} elements", catalog.len(), plan.len());
    Ok(())
}

/// Read a scene plan
///
/// The plan is built from scratch; on any error nothing is returned.
pub fn read_scene<R: Read>(reader: &mut R) -> CodecResult<ScenePlan> {
    let found = read_u8(reader)?;
    if found != SCENE_FILE_VERSION {
        return Err(CodecError::UnsupportedVersion { found, expected: SCENE_FILE_VERSION });
    }

    let catalog = read_definitions(reader)?;

    let count = read_len(reader, "element list")?;
    log::debug!("Reading {} stage elements", count);

    let mut elements = Vec::with_capacity(count.min(4096));
    for _ in 0..count {
        if let Some(element) = read_element(reader, &catalog)? {
            elements.push(element);
        }
    }

    Ok(ScenePlan::from_elements(elements))
}

fn write_element<W: Write>(writer: &mut W, element: &StageElement, catalog: &[FixtureDefinition]) -> CodecResult<()> {
    let position = element.position();
    write_i32(writer, position.x)?;
    write_i32(writer, position.y)?;

    match element {
        StageElement::Rail(rail) => {
            write_u8(writer, KIND_RAIL)?;
            write_i32(writer, rail.height_from_floor)?;
            write_i32(writer, rail.length)?;
            write_i32(writer, rail.orientation.ordinal())?;
        }
        StageElement::Fixture(fixture) => {
            write_u8(writer, KIND_FIXTURE)?;
            let index = catalog
                .iter()
                .position(|d| d.same_as(&fixture.definition))
                .ok_or_else(|| CodecError::malformed("fixture definition missing from catalog"))?;
            write_len(writer, index)?;
            write_f32(writer, fixture.field_angle)?;
            write_rgb(writer, fixture.beam_tint)?;
            write_f32(writer, fixture.rotation)?;
            write_f32(writer, fixture.tilt)?;
            write_string(writer, &fixture.connection_id)?;
            write_i32(writer, fixture.beam_intensity())?;
        }
        StageElement::Label(label) => {
            write_u8(writer, KIND_LABEL)?;
            write_string(writer, &label.text)?;
            write_rgb(writer, label.color)?;
            write_i32(writer, label.font_size)?;
            write_string(writer, &label.font_family)?;
        }
    }
    Ok(())
}

fn read_element<R: Read>(reader: &mut R, catalog: &[FixtureDefinition]) -> CodecResult<Option<StageElement>> {
    let position = GridPos::new(read_i32(reader)?, read_i32(reader)?);
    let kind = read_u8(reader)?;

    let element = match kind {
        KIND_NONE => return Ok(None),
        KIND_RAIL => {
            let height_from_floor = read_i32(reader)?;
            let length = read_i32(reader)?;
            let ordinal = read_i32(reader)?;
            let orientation = Orientation::from_ordinal(ordinal)
                .ok_or_else(|| CodecError::malformed(format!("unknown orientation ordinal {}", ordinal)))?;
            StageElement::Rail(MountingRail::new(position, length, orientation, height_from_floor))
        }
        KIND_FIXTURE => {
            let index = read_i32(reader)?;
            let definition = usize::try_from(index)
                .ok()
                .and_then(|i| catalog.get(i))
                .ok_or_else(|| {
                    CodecError::malformed(format!(
                        "catalog index {} out of range ({} entries)",
                        index,
                        catalog.len()
                    ))
                })?;
            let field_angle = read_f32(reader)?;
            let beam_tint = read_rgb(reader)?;
            let rotation = read_f32(reader)?;
            let tilt = read_f32(reader)?;
            let connection_id = read_string(reader)?;
            let beam_intensity = read_i32(reader)?;
            StageElement::Fixture(Fixture::from_parts(
                position,
                definition.clone(),
                beam_tint,
                rotation,
                tilt,
                field_angle,
                connection_id,
                beam_intensity,
            ))
        }
        KIND_LABEL => {
            let text = read_string(reader)?;
            let color = read_rgb(reader)?;
            let font_size = read_i32(reader)?;
            let font_family = read_string(reader)?;
            StageElement::Label(TextLabel::new(position, text, color, font_size, font_family))
        }
        other => return Err(CodecError::malformed(format!("unknown element kind {}", other))),
    };

    Ok(Some(element))
}
