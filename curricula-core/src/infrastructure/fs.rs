use crate::infrastructure::error::InfrastructureError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Replace `path` with `content` in one step.
///
/// The bytes go to a temporary file next to the target, which is then renamed over it,
/// so readers see either the old table or the new one. Missing parent directories are
/// created.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = parent_dir(path);
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Append `content` to `path`, creating the file if needed.
pub fn append_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    fs::create_dir_all(parent_dir(path))?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_ref())?;
    Ok(())
}

/// True when `path` is missing or holds no bytes.
pub fn is_missing_or_empty(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_replaces_content() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("requirements.csv");

        atomic_write(&file_path, "Program\nA\n")?;
        atomic_write(&file_path, "Program\nB\n")?;

        assert_eq!(fs::read_to_string(file_path)?, "Program\nB\n");
        Ok(())
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("out/nested/table.csv");

        atomic_write(&file_path, "x")?;

        assert!(file_path.exists());
        Ok(())
    }

    #[test]
    fn test_append_write_accumulates() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("log.csv");
        assert!(is_missing_or_empty(&file_path));

        append_write(&file_path, "a\n")?;
        append_write(&file_path, "b\n")?;

        assert!(!is_missing_or_empty(&file_path));
        assert_eq!(fs::read_to_string(file_path)?, "a\nb\n");
        Ok(())
    }
}
