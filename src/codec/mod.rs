//! Binary persistence for fixture catalogs and scene plans
//!
//! Both formats lead with a single version byte. Readers accept exactly the
//! current version and reject everything else with
//! [`CodecError::UnsupportedVersion`]; there is no migration path. Supporting
//! older files means adding a decoder per version, not guessing from content.
//!
//! # Submodules
//! - `binary` - Big-endian primitives, strings and colors
//! - `catalog` - Fixture definition catalog format
//! - `scene` - Scene plan format with embedded catalog
//! - `files` - Path handling, save and load
//! - `error` - Codec error type

mod binary;
mod catalog;
mod error;
mod files;
mod scene;

pub use catalog::{read_catalog, write_catalog, CATALOG_FILE_VERSION};
pub use error::{CodecError, CodecResult};
pub use files::{
    load_catalog,
    load_scene,
    save_catalog,
    save_scene,
    with_extension_suffix,
    CATALOG_EXTENSION,
    SCENE_EXTENSION,
};
pub use scene::{read_scene, write_scene, SCENE_FILE_VERSION};
