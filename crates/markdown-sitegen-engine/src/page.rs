//! # Page Generation
//!
//! Turns one markdown source into one HTML page by converting it and
//! substituting the result into a template.

use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::parsing::{MarkdownError, ParseOptions, parse_document_with};

pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Prefix of the line that names the page.
const TITLE_PREFIX: &str = "# ";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: IoError },
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: IoError },
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: MarkdownError,
    },
}

/// How a page is rendered.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub parse: ParseOptions,
    /// Escape text and attribute values when serializing.
    pub escape_html: bool,
}

/// Outcome of a recursive page generation.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Source paths (relative to the content root) that produced pages.
    pub generated: Vec<RelativePathBuf>,
    /// Sources that failed, when failures did not abort the run.
    pub failures: Vec<(RelativePathBuf, PageError)>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The text of the first `# ` line, trimmed.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
}

/// Substitutes content, then title, into every placeholder occurrence.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(CONTENT_PLACEHOLDER, content)
        .replace(TITLE_PLACEHOLDER, title)
}

/// Converts `markdown` and fills it into `template`.
pub fn render_page(
    markdown: &str,
    template: &str,
    options: &PageOptions,
) -> Result<String, MarkdownError> {
    let tree = parse_document_with(markdown, &options.parse)?;
    let content = if options.escape_html {
        tree.to_escaped_html()
    } else {
        tree.to_html()
    };
    let title = extract_title(markdown).unwrap_or_else(|| {
        log::warn!("No `# ` title line found, using an empty title");
        String::new()
    });
    Ok(render_template(template, &title, &content))
}

/// Generates one page from `from_path` into `dest_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    options: &PageOptions,
) -> Result<(), PageError> {
    log::info!(
        "Generating page {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read(from_path)?;
    let template = read(template_path)?;
    let html = render_page(&markdown, &template, options).map_err(|source| {
        PageError::Convert {
            path: from_path.to_path_buf(),
            source,
        }
    })?;

    write(dest_path, &html)
}

/// Generates a page for every `*.md` below `content_dir`.
///
/// Each page lands at the same relative path below `dest_dir` with an
/// `.html` extension. With `keep_going` a failing page is logged and
/// recorded in the report; otherwise the first failure is returned.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    options: &PageOptions,
    keep_going: bool,
) -> Result<BuildReport, PageError> {
    let sources = io::scan_markdown_files(content_dir).map_err(|source| PageError::Read {
        path: content_dir.to_path_buf(),
        source,
    })?;

    let mut report = BuildReport::default();
    for relative in sources {
        let from_path = relative.to_path(content_dir);
        let dest_path = relative.with_extension("html").to_path(dest_dir);

        match generate_page(&from_path, template_path, &dest_path, options) {
            Ok(()) => report.generated.push(relative),
            Err(e) if keep_going => {
                log::error!("{e}");
                report.failures.push((relative, e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn read(path: &Path) -> Result<String, PageError> {
    io::read_file(path).map_err(|source| PageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, content: &str) -> Result<(), PageError> {
    io::write_file(path, content).map_err(|source| PageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
