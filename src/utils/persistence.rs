use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Sibling staging path, e.g. `budget.json` -> `budget.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a staging file and renames it over `path`, so readers
/// never observe a half-written file.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("data/budget.json")),
            PathBuf::from("data/budget.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("budget")), PathBuf::from("budget.tmp"));
    }

    #[test]
    fn failed_write_preserves_original() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("budget.json");
        write_atomic(&path, "original").unwrap();

        // A directory squatting on the staging path makes File::create fail.
        fs::create_dir_all(tmp_path(&path)).unwrap();
        assert!(write_atomic(&path, "replacement").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
