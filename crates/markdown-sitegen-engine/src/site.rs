use relative_path::RelativePath;
use std::fs;
use std::path::PathBuf;

use crate::io::{self, IoError};
use crate::page::{self, BuildReport, PageError, PageOptions};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to prepare output directory {path}: {source}")]
    Output { path: PathBuf, source: IoError },
    #[error("Failed to copy static files: {0}")]
    Static(#[source] IoError),
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Where a site build reads from and writes to.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
    pub page: PageOptions,
    pub keep_going: bool,
}

/// Rebuilds the whole site.
///
/// The output directory is deleted, static files are mirrored into it, and
/// a page is generated for every markdown source. `exclude` filters static
/// files by their path relative to `static_dir`.
pub fn build_site<F>(settings: &SiteSettings, exclude: F) -> Result<BuildReport, SiteError>
where
    F: Fn(&RelativePath) -> bool,
{
    let output = &settings.output_dir;
    if output.exists() {
        log::info!("Removing {}", output.display());
        fs::remove_dir_all(output).map_err(|e| SiteError::Output {
            path: output.clone(),
            source: IoError::from(e),
        })?;
    }

    let copied = io::copy_tree(&settings.static_dir, output, exclude).map_err(SiteError::Static)?;
    log::info!("Copied {} static files", copied.len());

    let report = page::generate_pages_recursive(
        &settings.content_dir,
        &settings.template,
        output,
        &settings.page,
        settings.keep_going,
    )?;
    log::info!(
        "Generated {} pages ({} failed)",
        report.generated.len(),
        report.failures.len()
    );

    Ok(report)
}
