//! Embedded tool descriptor extraction.
//!
//! A tool page may carry its own metadata inside an HTML comment or anywhere
//! else in the document, as a JSON object fenced by two markers:
//!
//! ```text
//! TOOL_OVERVIEW_START
//! {
//!   "name": "Widget",
//!   "description": "does things",
//!   "functionality": { "live_preview": "Renders output as you type" },
//!   "dependencies": ["marked.js"],
//!   "last_updated": "2026-08-01"
//! }
//! TOOL_OVERVIEW_END
//! ```
//!
//! Every field is optional and unknown keys are ignored, so pages can carry
//! extra metadata for other consumers without breaking extraction.
//!
//! ## Degradation contract
//!
//! Extraction never fails the pipeline. A page with no fenced region yields
//! [`Extraction::Absent`]; a region that isn't valid JSON yields
//! [`Extraction::Malformed`] with the parse error attached. Both cases fall
//! back to filename-derived defaults at the call site; malformed descriptors
//! additionally surface as a warning in the run report.

use serde::Deserialize;
use std::collections::BTreeMap;

pub const START_MARKER: &str = "TOOL_OVERVIEW_START";
pub const END_MARKER: &str = "TOOL_OVERVIEW_END";

/// Metadata a page declares about itself. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    /// Display name, shown as the link title on the index.
    pub name: Option<String>,
    /// One-line description shown under the link title.
    pub description: Option<String>,
    /// Capability key → human-readable explanation. Rendered as badges;
    /// BTreeMap keeps badge order deterministic across runs.
    #[serde(default)]
    pub functionality: BTreeMap<String, String>,
    /// External libraries the page loads, in declaration order.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Free-form date string, shown verbatim when present.
    pub last_updated: Option<String>,
}

/// Outcome of scanning a page for a descriptor block.
#[derive(Debug)]
pub enum Extraction {
    /// A fenced region was found and decoded.
    Found(ToolDescriptor),
    /// No fenced region in the page.
    Absent,
    /// A fenced region was found but its contents aren't valid JSON.
    Malformed(serde_json::Error),
}

impl Extraction {
    /// The descriptor, if one was successfully decoded.
    pub fn descriptor(self) -> Option<ToolDescriptor> {
        match self {
            Extraction::Found(d) => Some(d),
            _ => None,
        }
    }
}

/// Scan `content` for the first `TOOL_OVERVIEW_START … TOOL_OVERVIEW_END`
/// region and decode the enclosed JSON.
///
/// The start marker is searched anywhere in the page; the region ends at the
/// first end marker after it and may span multiple lines. Surrounding
/// whitespace is trimmed before decoding. Pure; no I/O.
pub fn extract(content: &str) -> Extraction {
    let Some(start) = content.find(START_MARKER) else {
        return Extraction::Absent;
    };
    let body_start = start + START_MARKER.len();
    let Some(end) = content[body_start..].find(END_MARKER) else {
        return Extraction::Absent;
    };
    let raw = content[body_start..body_start + end].trim();
    match serde_json::from_str::<ToolDescriptor>(raw) {
        Ok(descriptor) => Extraction::Found(descriptor),
        Err(err) => Extraction::Malformed(err),
    }
}
