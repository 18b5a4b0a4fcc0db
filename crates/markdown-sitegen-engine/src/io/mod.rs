use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name that is never mirrored.
pub const VCS_DIR: &str = ".git";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
    #[error("Path {0} cannot be expressed relative to its root")]
    InvalidPath(PathBuf),
}

/// Read a whole file, failing with `NotFound` when it is absent
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files below `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_source_dir(root)?;

    let files = scan_files(root)?
        .into_iter()
        .filter(|path| path.extension() == Some("md"))
        .collect();
    Ok(files)
}

/// Mirror every file below `source` into `destination`.
///
/// Relative paths are preserved. Paths with a `.git` component, or for
/// which `exclude` returns true, are skipped. Returns the copied paths,
/// sorted.
pub fn copy_tree<F>(
    source: &Path,
    destination: &Path,
    exclude: F,
) -> Result<Vec<RelativePathBuf>, IoError>
where
    F: Fn(&RelativePath) -> bool,
{
    validate_source_dir(source)?;
    fs::create_dir_all(destination)?;

    let mut copied = Vec::new();
    for relative in scan_files(source)? {
        if exclude(&relative) {
            log::debug!("Skipping excluded {relative}");
            continue;
        }

        let from = relative.to_path(source);
        let to = relative.to_path(destination);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&from, &to)?;
        log::info!("Copied {} to {}", from.display(), to.display());
        copied.push(relative);
    }

    Ok(copied)
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// True when any component of the path is the version-control directory.
pub fn is_vcs_path(path: &RelativePath) -> bool {
    path.components().any(|c| c.as_str() == VCS_DIR)
}

/// All files below `root` as sorted relative paths, skipping VCS metadata.
fn scan_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    let mut files = Vec::new();
    scan_directory_recursive(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        let relative = path
            .strip_prefix(root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| IoError::InvalidPath(path.clone()))?;
        if is_vcs_path(&relative) {
            log::debug!("Skipping version control path {relative}");
            continue;
        }

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else {
            files.push(relative);
        }
    }

    Ok(())
}
