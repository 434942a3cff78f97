use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::foundation::error::{IndexError, IndexResult, TemplateError};
use crate::model::Template;
use crate::schema::validate::validate_template;

/// Outcome of a validation pass over an index document.
#[derive(Clone, Debug, Default)]
pub struct IndexReport {
    /// Number of template records the pass looked at.
    pub checked: usize,
    /// Typed form of every record that passed, in index order.
    pub templates: Vec<Template>,
    /// One entry per failing record. At most one when `fail_fast` is set.
    pub failures: Vec<TemplateError>,
}

impl IndexReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Read and parse the index document at `path`.
#[tracing::instrument]
pub fn load_index(path: &Path) -> IndexResult<Value> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(IndexError::IndexNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(IndexError::io(path, e)),
    };

    serde_json::from_slice(&bytes)
        .map_err(|e| IndexError::serde(format!("parse index '{}': {e}", path.display())))
}

/// Validate every template of a loaded index document in order.
///
/// Whole-index problems (no `templates` key, `templates` not a list) are returned as errors.
/// Per-template failures are collected in the report; with `fail_fast` the pass stops at the
/// first one and later records are never looked at.
#[tracing::instrument(skip(doc))]
pub fn validate_index(doc: &Value, cfg: &ValidatorConfig) -> IndexResult<IndexReport> {
    let templates = doc.get("templates").ok_or(IndexError::MissingTemplates)?;
    let Value::Array(templates) = templates else {
        return Err(IndexError::TemplatesNotList);
    };

    let mut report = IndexReport::default();
    for (position, value) in templates.iter().enumerate() {
        report.checked += 1;
        match validate_template(value, position, cfg) {
            Ok(()) => {
                let template = Template::from_value(value)?;
                tracing::debug!(
                    position,
                    slug = %template.slug,
                    bounds = ?template.screen_quad.bounds(),
                    "template ok"
                );
                report.templates.push(template);
            }
            Err(err) => {
                tracing::warn!(position, "{err}");
                report.failures.push(err);
                if cfg.fail_fast {
                    break;
                }
            }
        }
    }

    Ok(report)
}

/// Load the index at `path` and validate it.
pub fn validate_index_file(path: &Path, cfg: &ValidatorConfig) -> IndexResult<IndexReport> {
    let doc = load_index(path)?;
    validate_index(&doc, cfg)
}
