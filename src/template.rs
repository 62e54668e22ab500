//! Template loading and placeholder substitution.
//!
//! Three templates drive the generated output, loaded once per run from a
//! templates directory and held read-only for the rest of the run:
//!
//! - `index_template.html` — the index page shell; `{{ LINKS_PLACEHOLDER }}`
//!   receives the accumulated link list.
//! - `link_template.html` — one entry in the index's link list; recognizes
//!   `{{ FILENAME }}`, `{{ TITLE }}`, `{{ DESCRIPTION }}`, `{{ META_HTML }}`,
//!   `{{ LAST_UPDATED }}`.
//! - `footer_template.html` — the footer fragment; recognizes
//!   `{{ REPO_URL }}`, `{{ SOURCE_URL }}`, `{{ VIEW_TEXT }}`.
//!
//! Substitution is literal and single-pass: a placeholder is the exact token
//! `{{ NAME }}` including braces and spacing, every occurrence of a mapped
//! token is replaced, and unmapped tokens are left untouched. There is no
//! recursive expansion; replacement values are never re-scanned for tokens.
//! A template that omits a placeholder is legal, so site owners can drop
//! fields they don't want (e.g. a footer without the repo link).
//!
//! A missing template *file* is the one fatal condition of the pipeline:
//! every page needs the footer, and the index needs its shell, so the run
//! aborts with an error naming the missing path.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub const INDEX_TEMPLATE: &str = "index_template.html";
pub const LINK_TEMPLATE: &str = "link_template.html";
pub const FOOTER_TEMPLATE: &str = "footer_template.html";

/// The three run templates, loaded once and shared by reference.
#[derive(Debug)]
pub struct Templates {
    pub index: String,
    pub link: String,
    pub footer: String,
}

impl Templates {
    /// Load all three templates from `dir`. Any missing file aborts the run.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        Ok(Self {
            index: load_one(dir, INDEX_TEMPLATE)?,
            link: load_one(dir, LINK_TEMPLATE)?,
            footer: load_one(dir, FOOTER_TEMPLATE)?,
        })
    }
}

fn load_one(dir: &Path, name: &str) -> Result<String, TemplateError> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(TemplateError::Missing(path));
    }
    fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
}

/// The literal token for a placeholder name: `{{ NAME }}`.
fn token(name: &str) -> String {
    format!("{{{{ {name} }}}}")
}

/// Replace every occurrence of each mapped placeholder token in `template`.
///
/// Single pass per placeholder; unmapped tokens stay verbatim. Replacement
/// values must not themselves be placeholder tokens of later-substituted
/// names (the generated values here never are).
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&token(name), value);
    }
    out
}
