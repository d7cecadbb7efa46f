//! File-level save and load
//!
//! Writers normalize the file suffix; readers open exactly the path given.
//! Loads decode the whole file before returning, so a failure never yields
//! a partial catalog or plan. Saves go to a sibling temp file that is
//! renamed over the target only once it is complete, so a failed save
//! leaves any previous file as it was.

use super::catalog::{read_catalog, write_catalog};
use super::error::{CodecError, CodecResult};
use super::scene::{read_scene, write_scene};
use crate::plan::{FixtureDefinition, ScenePlan};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Suffix of fixture definition catalog files
pub const CATALOG_EXTENSION: &str = "slpfd";
/// Suffix of scene plan files
pub const SCENE_EXTENSION: &str = "slpsp";

/// Append `.extension` unless the file name already ends with it (any case)
pub fn with_extension_suffix(path: &Path, extension: &str) -> PathBuf {
    let suffix = format!(".{}", extension.to_lowercase());
    let has_suffix = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
        .unwrap_or(false);

    if has_suffix {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(&suffix);
        PathBuf::from(name)
    }
}

/// Sibling path a save is staged in before it replaces `path`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    PathBuf::from(name)
}

fn stage<F>(staging: &Path, encode: F) -> CodecResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> CodecResult<()>,
{
    let mut writer = BufWriter::new(File::create(staging)?);
    encode(&mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Run `encode` into a staging file, then move it over `path`
fn write_replacing<F>(path: &Path, encode: F) -> CodecResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> CodecResult<()>,
{
    let staging = staging_path(path);
    let result = stage(&staging, encode).and_then(|()| fs::rename(&staging, path).map_err(CodecError::from));

    if result.is_err() {
        fs::remove_file(&staging).ok();
    }
    result
}

/// Save a catalog, returning the path actually written
pub fn save_catalog<P: AsRef<Path>>(path: P, definitions: &[FixtureDefinition]) -> CodecResult<PathBuf> {
    let path = with_extension_suffix(path.as_ref(), CATALOG_EXTENSION);
    write_replacing(&path, |writer| write_catalog(writer, definitions))?;
    log::info!("Saved {} fixture definitions to {}", definitions.len(), path.display());
    Ok(path)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> CodecResult<Vec<FixtureDefinition>> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let definitions = read_catalog(&mut reader)?;
    log::info!("Loaded {} fixture definitions from {}", definitions.len(), path.display());
    Ok(definitions)
}

/// Save a scene plan, returning the path actually written
pub fn save_scene<P: AsRef<Path>>(path: P, plan: &ScenePlan) -> CodecResult<PathBuf> {
    let start = Instant::now();
    let path = with_extension_suffix(path.as_ref(), SCENE_EXTENSION);
    write_replacing(&path, |writer| write_scene(writer, plan))?;
    log::info!("Saved {} elements to {} in {:.2?}", plan.len(), path.display(), start.elapsed());
    Ok(path)
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> CodecResult<ScenePlan> {
    let start = Instant::now();
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let plan = read_scene(&mut reader)?;
    log::info!("Loaded {} elements from {} in {:.2?}", plan.len(), path.display(), start.elapsed());
    Ok(plan)
}
