use std::path::{Path, PathBuf};

/// File name looked up next to the running executable when no index path is given.
pub const DEFAULT_INDEX_FILE: &str = "index.json";

/// Settings for one validation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Directory that `base_file` and `mask_file` paths are resolved against.
    pub base_dir: PathBuf,
    /// Reject integer literals where a float is required.
    pub strict_floats: bool,
    /// Stop at the first invalid template. When false, every template is checked.
    pub fail_fast: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            strict_floats: true,
            fail_fast: true,
        }
    }
}

impl ValidatorConfig {
    /// Config whose asset root is the directory holding `index_path`.
    pub fn for_index(index_path: &Path) -> Self {
        let base_dir = index_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Self {
            base_dir,
            ..Self::default()
        }
    }

    pub fn with_strict_floats(mut self, strict: bool) -> Self {
        self.strict_floats = strict;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

/// `index.json` next to the running executable.
pub fn default_index_path() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_INDEX_FILE))
}
