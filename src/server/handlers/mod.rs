//! Handler module declarations and re-exports

pub mod elements;
pub mod file;
pub mod geometry;
pub mod settings;

// Re-export all handlers for convenient access
pub use elements::*;
pub use file::*;
pub use geometry::*;
pub use settings::*;
