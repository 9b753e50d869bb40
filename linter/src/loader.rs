use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Fatal discovery failure: the root itself is missing or unreadable.
/// Per-file problems never surface here; the runner demotes them to
/// warning diagnostics instead.
#[derive(Debug)]
pub enum LoadError {
    NotADirectory(PathBuf),
    Io(PathBuf, io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotADirectory(path) => {
                write!(f, "'{}' is not a directory", path.display())
            }
            LoadError::Io(path, e) => write!(f, "cannot read '{}': {}", path.display(), e),
        }
    }
}

impl std::error::Error for LoadError {}

/// What a discovery walk found: the rule documents plus any subdirectories
/// that could not be read. Skipped directories are the runner's problem to
/// report; only the root itself failing is fatal.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub skipped_dirs: Vec<(PathBuf, io::Error)>,
}

/// Discover rule documents under `root`, sorted by path so repeated runs
/// report in the same order.
pub fn discover(root: &Path, extensions: &[String]) -> Result<Discovery, LoadError> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) if !root.is_dir() => return Err(LoadError::NotADirectory(root.to_path_buf())),
        Err(e) => return Err(LoadError::Io(root.to_path_buf(), e)),
    };

    let mut found = Discovery::default();
    for entry in entries.flatten() {
        visit(&entry.path(), extensions, &mut found);
    }
    found.files.sort();
    found.skipped_dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

fn visit(path: &Path, extensions: &[String], out: &mut Discovery) {
    if path.is_dir() {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                out.skipped_dirs.push((path.to_path_buf(), e));
                return;
            }
        };
        for entry in entries.flatten() {
            visit(&entry.path(), extensions, out);
        }
    } else if has_rule_extension(path, extensions) {
        out.files.push(path.to_path_buf());
    }
}

fn has_rule_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|want| ext.eq_ignore_ascii_case(want))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn exts() -> Vec<String> {
        vec!["md".to_string(), "markdown".to_string()]
    }

    #[test]
    fn discovers_nested_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.md"), "# B\n").unwrap();
        fs::write(dir.path().join("a.markdown"), "# A\n").unwrap();
        fs::write(dir.path().join("sub/c.md"), "# C\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a rule file").unwrap();

        let found = discover(dir.path(), &exts()).unwrap();
        assert!(found.skipped_dirs.is_empty());
        let names: Vec<_> = found
            .files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.markdown", "b.md", "sub/c.md"]);
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UPPER.MD"), "# U\n").unwrap();
        let found = discover(dir.path(), &exts()).unwrap();
        assert_eq!(found.files.len(), 1);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = discover(&missing, &exts()).unwrap_err();
        assert!(matches!(err, LoadError::NotADirectory(_)));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.md");
        fs::write(&file, "# P\n").unwrap();
        let err = discover(&file, &exts()).unwrap_err();
        assert!(matches!(err, LoadError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_recorded_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("open.md"), "# Open\n").unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.md"), "# Hidden\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Running as root; permissions are not enforced here.
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = discover(dir.path(), &exts());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let found = result.unwrap();
        assert_eq!(found.files.len(), 1);
        assert!(found.files[0].ends_with("open.md"));
        assert_eq!(found.skipped_dirs.len(), 1);
        assert_eq!(found.skipped_dirs[0].0, locked);
    }
}
