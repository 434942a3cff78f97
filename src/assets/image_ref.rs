use std::path::Path;

use crate::foundation::error::ImageRefError;

/// Accepted image suffixes. Matching is case-sensitive on the raw path string.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];

/// Check that `rel_path` names an existing file under `base_dir` with an accepted image suffix.
///
/// Existence is checked before the extension, so a missing `.txt` file reports "not found".
/// The file is never opened.
pub fn check_image_ref(base_dir: &Path, rel_path: &str) -> Result<(), ImageRefError> {
    let resolved = base_dir.join(rel_path);
    if !resolved.is_file() {
        tracing::debug!(path = %resolved.display(), "image file not found");
        return Err(ImageRefError::NotFound(rel_path.to_string()));
    }

    if !has_image_extension(rel_path) {
        tracing::debug!(path = rel_path, "rejected image extension");
        return Err(ImageRefError::InvalidExtension(rel_path.to_string()));
    }

    Ok(())
}

pub fn has_image_extension(path: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
