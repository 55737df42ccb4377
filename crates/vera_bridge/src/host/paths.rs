//! Host path expansion and file probing
//!
//! The host writes paths relative to its open scene file as `//name`, and
//! user-relative paths as `~/name`. Both must be expanded before the file
//! system can be asked about them.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::PathError;

/// Prefix the host uses for paths relative to its scene file
pub const HOST_RELATIVE_PREFIX: &str = "//";

/// Expand host path syntax into a file system path
///
/// * `//rest` resolves against `base_dir`, the directory of the host file
/// * `~` and `~/rest` resolve against `$HOME`
/// * anything else is returned unchanged
pub fn expand(path: &str, base_dir: Option<&Path>) -> Result<PathBuf, PathError> {
    let home = std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from);
    expand_with_home(path, base_dir, home.as_deref())
}

/// Expand host path syntax against an explicit home directory
pub fn expand_with_home(
    path: &str,
    base_dir: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    if let Some(rest) = path.strip_prefix(HOST_RELATIVE_PREFIX) {
        let base = base_dir.ok_or_else(|| PathError::NoBaseDirectory(path.to_string()))?;
        return Ok(base.join(rest));
    }

    if path == "~" || path.starts_with("~/") {
        let home = home.ok_or_else(|| PathError::NoHomeDirectory(path.to_string()))?;
        let rest = path.trim_start_matches('~').trim_start_matches('/');
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Check that a host path names a readable file
///
/// Expands the path, opens it for reading and closes it again. Every
/// failure, whether expansion, permissions or a missing file, collapses
/// to `false`. Directories open fine on some platforms but are not files.
pub fn file_exists(path: &str, base_dir: Option<&Path>) -> bool {
    let resolved = match expand(path, base_dir) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::debug!("Cannot expand '{}': {}", path, e);
            return false;
        }
    };

    match File::open(&resolved) {
        Ok(file) => {
            let is_file = file.metadata().map(|meta| meta.is_file()).unwrap_or(false);
            if !is_file {
                log::debug!("{} is not a regular file", resolved.display());
            }
            is_file
        }
        Err(e) => {
            log::debug!("Cannot open {}: {}", resolved.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("vera_bridge_{}_{}", std::process::id(), name));
        std::fs::write(&path, "shader").unwrap();
        path
    }

    #[test]
    fn test_expand_host_relative() {
        let base = Path::new("/projects/scene");
        assert_eq!(
            expand("//textures/wood.png", Some(base)).unwrap(),
            PathBuf::from("/projects/scene/textures/wood.png")
        );
    }

    #[test]
    fn test_expand_host_relative_without_base() {
        assert_eq!(
            expand("//wood.png", None),
            Err(PathError::NoBaseDirectory("//wood.png".to_string()))
        );
    }

    #[test]
    fn test_expand_plain_paths_unchanged() {
        assert_eq!(expand("/tmp/a.frag", None).unwrap(), PathBuf::from("/tmp/a.frag"));
        assert_eq!(expand("a.frag", None).unwrap(), PathBuf::from("a.frag"));
        assert_eq!(expand("", None), Err(PathError::Empty));
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/artist");
        assert_eq!(
            expand_with_home("~/shaders/a.frag", None, Some(home)).unwrap(),
            PathBuf::from("/home/artist/shaders/a.frag")
        );
        assert_eq!(expand_with_home("~", None, Some(home)).unwrap(), PathBuf::from("/home/artist"));
        assert_eq!(
            expand_with_home("~user/a.frag", None, Some(home)).unwrap(),
            PathBuf::from("~user/a.frag")
        );
    }

    #[test]
    fn test_expand_home_without_home() {
        assert_eq!(
            expand_with_home("~/a.frag", None, None),
            Err(PathError::NoHomeDirectory("~/a.frag".to_string()))
        );
    }

    #[test]
    fn test_expand_home_from_environment() {
        let home = match std::env::var_os("HOME").filter(|home| !home.is_empty()) {
            Some(home) => home,
            None => return,
        };
        assert_eq!(expand("~/a.frag", None).unwrap(), PathBuf::from(&home).join("a.frag"));
        assert_eq!(expand("~", None).unwrap(), PathBuf::from(&home));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        assert!(!file_exists(dir.to_str().unwrap(), None));
        assert!(!file_exists("//", Some(&dir)));
    }

    #[test]
    fn test_existing_file() {
        let path = scratch_file("exists.frag");
        assert!(file_exists(path.to_str().unwrap(), None));

        std::fs::remove_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_file_through_host_relative_path() {
        let path = scratch_file("relative.frag");
        let name = path.file_name().unwrap().to_str().unwrap();
        let host_path = format!("//{}", name);

        assert!(file_exists(&host_path, Some(&std::env::temp_dir())));
        assert!(!file_exists(&host_path, None));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("vera_bridge_definitely_missing.frag");
        assert!(!file_exists(path.to_str().unwrap(), None));
    }

    #[test]
    fn test_empty_path() {
        assert!(!file_exists("", None));
    }
}
