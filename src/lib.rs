//! Validator for JSON indexes of image-overlay templates.
//!
//! An index is a document of the form `{ "templates": [ ... ] }`. Each template names a base
//! image, a four-point screen quad placing the overlay on it, exactly one mask (a fixed aspect
//! ratio or a mask image) and optional metadata.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`load_index`] reads and parses the document.
//! 2. **Validate**: [`validate_index`] checks the top-level shape, then runs the template rule
//!    chain on each record in order. Referenced images are checked for existence and extension
//!    relative to [`ValidatorConfig::base_dir`].
//! 3. **Type**: records that pass are converted into [`Template`] values.
//!
//! Validation is read-only and deterministic for a given document and filesystem.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod foundation;
mod index;
mod model;
mod schema;

pub use assets::image_ref::{IMAGE_EXTENSIONS, check_image_ref, has_image_extension};
pub use config::{DEFAULT_INDEX_FILE, ValidatorConfig, default_index_path};
pub use foundation::core::{Point, Rect, ScreenQuad};
pub use foundation::error::{
    ImageRefError, IndexError, IndexResult, TemplateError, TemplateIssue,
};
pub use index::{IndexReport, load_index, validate_index, validate_index_file};
pub use model::{Mask, Template};
pub use schema::validate::{OPTIONAL_FIELDS, REQUIRED_FIELDS, is_known_field, validate_template};
