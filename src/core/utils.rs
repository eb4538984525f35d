use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

pub const HOME_ENV_VAR: &str = "COFFEE_BUDGET_HOME";
const DEFAULT_DIR_NAME: &str = ".coffee_budget";
const DATA_FILE: &str = "coffee_data.json";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Resolves the on-disk layout used by the application.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory: `$COFFEE_BUDGET_HOME`, else `~/.coffee_budget`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV_VAR) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn data_file_in(base: &Path) -> PathBuf {
        base.join(DATA_FILE)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Replaces `path` with `data` by writing and syncing a sibling temp file, then
/// renaming it over the target. A failed write leaves the old file untouched.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// `coffee_data.json` stages as `coffee_data.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_keeps_the_original_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/coffee_data.json")),
            PathBuf::from("/data/coffee_data.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("beans")), PathBuf::from("beans.tmp"));
    }

    #[test]
    fn write_atomic_replaces_contents_and_cleans_up() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("config.json");

        write_atomic(&target, b"first").unwrap();
        write_atomic(&target, b"second").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
        assert!(!tmp_path(&target).exists());
    }

    #[test]
    fn blocked_temp_file_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("config.json");
        write_atomic(&target, b"kept").unwrap();
        fs::create_dir_all(tmp_path(&target)).unwrap();

        assert!(write_atomic(&target, b"lost").is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "kept");
    }
}
