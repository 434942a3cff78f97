use std::path::PathBuf;

pub type IndexResult<T> = Result<T, IndexError>;

#[derive(thiserror::Error, Debug)]
pub enum IndexError {
    #[error("index file not found: {}", .0.display())]
    IndexNotFound(PathBuf),

    #[error("failed to read index file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error("index missing templates")]
    MissingTemplates,

    #[error("index templates must be a list")]
    TemplatesNotList,
}

impl IndexError {
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// First rule violation found in one template record.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateError {
    /// Rendered `slug` value, present once the key exists in the record. Kept for image issues
    /// too, although their display omits it.
    pub slug: Option<String>,
    /// 0-based position of the record in the `templates` array.
    pub position: usize,
    pub issue: TemplateIssue,
}

impl TemplateError {
    pub fn new(slug: Option<String>, position: usize, issue: TemplateIssue) -> Self {
        Self {
            slug,
            position,
            issue,
        }
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Image check failures name the offending path instead of the template.
        match (&self.slug, &self.issue) {
            (_, TemplateIssue::Image(err)) => write!(f, "{err}"),
            (Some(slug), issue) => write!(f, "error validating template {slug}: {issue}"),
            (None, issue) => write!(f, "{issue}"),
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.issue)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TemplateIssue {
    #[error("template must be an object")]
    NotAnObject,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0} must be a string")]
    NotString(&'static str),

    #[error(transparent)]
    Image(#[from] ImageRefError),

    #[error("screen points must have 4 points")]
    ScreenPointCount,

    #[error("screen points must be 2D")]
    ScreenPointNot2d,

    #[error("screen point coordinates must be numbers")]
    ScreenPointNotNumeric,

    #[error("template must have either mask_aspect_ratio or mask_file, not both")]
    MaskBoth,

    #[error("template must have either mask_aspect_ratio or mask_file")]
    MaskMissing,

    #[error("{0} must be a float")]
    NotFloat(&'static str),

    #[error("categories must be a list")]
    CategoriesNotList,

    #[error("categories must be strings")]
    CategoryNotString,

    #[error("unexpected field: {0}")]
    UnexpectedField(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("image file not found: {0}")]
    NotFound(String),

    #[error("invalid image file extension: {0}")]
    InvalidExtension(String),
}
