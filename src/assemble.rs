//! Site assembly pipeline.
//!
//! Orchestrates the whole run in two one-way phases:
//!
//! 1. **Collecting** — enumerate `*.html` pages in the source directory
//!    (sorted by filename, `index.html` excluded), extract each page's
//!    descriptor, render one link fragment per page, and render the index
//!    shell around the accumulated link list.
//! 2. **Emitting** — for every page plus the freshly rendered index, strip
//!    any previously injected footer, inject a fresh one, and write the
//!    result flat into the output directory under the page's base filename.
//!
//! Ordering is deterministic: link entries appear in sorted-filename order,
//! never re-sorted by title or metadata, so the generated index is stable
//! across runs and platforms.
//!
//! Per-page problems (missing or malformed descriptor, no `</body>` tag)
//! degrade and continue; the only fatal condition is a template that cannot
//! be loaded, which aborts before any page is written. Writes that already
//! happened before an abort stay on disk; there is no rollback.

use crate::config::Config;
use crate::descriptor::{self, Extraction, ToolDescriptor};
use crate::footer::FooterComposer;
use crate::naming;
use crate::template::{self, TemplateError, Templates};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("failed to read page {path}: {source}")]
    ReadPage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Name of the generated index page; excluded from input enumeration.
pub const INDEX_FILENAME: &str = "index.html";

/// Description shown for pages without a descriptor.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// One page's resolved index entry, as reported to the CLI.
#[derive(Debug)]
pub struct PageEntry {
    /// Base filename, also the output filename.
    pub filename: String,
    /// Resolved display title (descriptor name or filename-derived).
    pub title: String,
    /// Resolved description (descriptor or the fixed default).
    pub description: String,
    /// Whether a descriptor was successfully decoded.
    pub has_descriptor: bool,
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct Report {
    /// Index entries in link-list order.
    pub entries: Vec<PageEntry>,
    /// Descriptor warnings, in page order.
    pub warnings: Vec<String>,
    /// Files written to the output directory (pages + index).
    pub files_written: usize,
}

/// A page read into memory during the collect phase.
struct Page {
    filename: String,
    content: String,
}

/// Enumerate candidate input pages: top-level `*.html` files in `source`,
/// excluding the index output, sorted by filename.
fn enumerate_pages(source: &Path) -> Result<Vec<PathBuf>, AssembleError> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(source).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == INDEX_FILENAME || !name.ends_with(".html") {
            continue;
        }
        pages.push(entry.into_path());
    }
    pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pages)
}

/// Base filename of a path, as written to the output directory.
/// Directory components of the input path are discarded.
fn base_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Render the meta-badge HTML for a descriptor: one badge per functionality
/// entry (tooltip = explanation, label = humanized key) and a trailing
/// dependency line when any dependencies are declared.
///
/// The explanation lands verbatim in the `title` attribute. A value that
/// contains a double quote breaks the attribute; kept bug-for-bug with the
/// original generator.
fn render_meta_html(descriptor: &ToolDescriptor) -> String {
    let mut out = String::new();
    for (key, explanation) in &descriptor.functionality {
        out.push_str(&format!(
            "<span class=\"badge\" title=\"{}\">{}</span>\n",
            explanation,
            naming::humanize_key(key)
        ));
    }
    if !descriptor.dependencies.is_empty() {
        out.push_str(&format!(
            "<p class=\"uses\">Uses: {}</p>\n",
            descriptor.dependencies.join(", ")
        ));
    }
    out
}

fn render_last_updated_html(last_updated: Option<&str>) -> String {
    match last_updated {
        Some(date) => format!("<span class=\"last-updated\">Last updated: {date}</span>"),
        None => String::new(),
    }
}

/// Resolve one page's index entry from its content, falling back to
/// filename-derived defaults when the descriptor is absent or malformed.
/// Malformed descriptors push a warning and degrade, never abort.
fn resolve_entry(
    filename: &str,
    content: &str,
    warnings: &mut Vec<String>,
) -> (PageEntry, ToolDescriptor) {
    let extraction = descriptor::extract(content);
    if let Extraction::Malformed(err) = &extraction {
        warnings.push(format!("{filename}: malformed descriptor block: {err}"));
    }
    let descriptor = extraction.descriptor();
    let has_descriptor = descriptor.is_some();
    let descriptor = descriptor.unwrap_or_default();

    let entry = PageEntry {
        filename: filename.to_string(),
        title: descriptor
            .name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| naming::title_from_filename(filename)),
        description: descriptor
            .description
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        has_descriptor,
    };
    (entry, descriptor)
}

/// Run the full pipeline: read pages from `source`, render the index, stamp
/// footers, write everything into `output`.
pub fn assemble(
    source: &Path,
    output: &Path,
    templates_dir: &Path,
    config: &Config,
) -> Result<Report, AssembleError> {
    let templates = Templates::load(templates_dir)?;
    fs::create_dir_all(output)?;

    // Collecting: read every page, resolve its index entry, grow the link list.
    let mut pages = Vec::new();
    let mut entries = Vec::new();
    let mut warnings = Vec::new();
    let mut links_html = String::new();

    for path in enumerate_pages(source)? {
        let filename = base_filename(&path);
        let content = fs::read_to_string(&path).map_err(|source| AssembleError::ReadPage {
            path: path.clone(),
            source,
        })?;

        let (entry, descriptor) = resolve_entry(&filename, &content, &mut warnings);
        let meta_html = render_meta_html(&descriptor);
        let last_updated = render_last_updated_html(descriptor.last_updated.as_deref());

        links_html.push_str(&template::render(&templates.link, &[
            ("FILENAME", filename.as_str()),
            ("TITLE", entry.title.as_str()),
            ("DESCRIPTION", entry.description.as_str()),
            ("META_HTML", meta_html.as_str()),
            ("LAST_UPDATED", last_updated.as_str()),
        ]));

        entries.push(entry);
        pages.push(Page { filename, content });
    }

    let index_content = template::render(&templates.index, &[(
        "LINKS_PLACEHOLDER",
        links_html.as_str(),
    )]);
    pages.push(Page {
        filename: INDEX_FILENAME.to_string(),
        content: index_content,
    });

    // Emitting: strip stale footers, inject fresh ones, write flat.
    let composer = FooterComposer::new(&templates.footer, config);
    let mut files_written = 0;
    for page in &pages {
        let is_index = page.filename == INDEX_FILENAME;
        let stripped = composer.strip(&page.content);
        let footer = composer.build(&page.filename, is_index);
        let finished = composer.inject(&stripped, &footer);
        fs::write(output.join(&page.filename), finished)?;
        files_written += 1;
    }

    Ok(Report {
        entries,
        warnings,
        files_written,
    })
}

/// Collect-phase only: enumerate pages and resolve their index entries
/// without rendering or writing anything. Backs the `check` command.
pub fn inventory(source: &Path) -> Result<Report, AssembleError> {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for path in enumerate_pages(source)? {
        let filename = base_filename(&path);
        let content = fs::read_to_string(&path).map_err(|source| AssembleError::ReadPage {
            path: path.clone(),
            source,
        })?;

        let (entry, _) = resolve_entry(&filename, &content, &mut warnings);
        entries.push(entry);
    }

    Ok(Report {
        entries,
        warnings,
        files_written: 0,
    })
}
