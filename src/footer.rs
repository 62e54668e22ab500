//! Footer composition, stripping, and injection.
//!
//! Every published page carries one footer linking back to the repository
//! and to the page's own source file. The footer must be *idempotent*: the
//! pipeline regularly re-runs over pages that already carry a footer (the
//! output of a previous run, or a page committed with one baked in), and the
//! result must always be exactly one fresh footer.
//!
//! That invariant is carried by a fixed sentinel comment. [`FooterComposer::build`]
//! always emits the sentinel immediately before the rendered footer template,
//! and [`FooterComposer::strip`] removes every span from a sentinel through
//! the first `</footer>` after it. Strip-then-inject therefore converges in
//! one step no matter how many times a page has been processed before.
//!
//! Detection is a plain string scan, not HTML parsing: tool pages are
//! frequently not well-formed, and a parser that chokes on them would be
//! worse than a scan that tolerates them. The known sharp edge: a literal
//! `</footer>` *inside* the injected block (say, in a quoted string) would
//! end the strip span early. See `strip_stops_at_first_closing_tag`.
//!
//! Injection inserts before the **last** `</body>` in the document, so a
//! `</body>` appearing earlier in a code sample or script string is never
//! targeted. A page with no `</body>` at all gets the footer appended.

use crate::config::Config;
use crate::template;

/// Marker comment emitted immediately before every injected footer.
pub const SENTINEL: &str = "<!-- Auto-generated Footer -->";

const FOOTER_CLOSE: &str = "</footer>";
const BODY_CLOSE: &str = "</body>";

/// Builds footer fragments for pages and removes previously injected ones.
///
/// Borrows the loaded footer template and the run [`Config`]; all methods are
/// pure string transforms.
pub struct FooterComposer<'a> {
    footer_template: &'a str,
    config: &'a Config,
}

impl<'a> FooterComposer<'a> {
    pub fn new(footer_template: &'a str, config: &'a Config) -> Self {
        Self {
            footer_template,
            config,
        }
    }

    /// Render the footer fragment for one page.
    ///
    /// The index links to the repository root ("Repository Root"); every
    /// other page links to its own file on the configured branch
    /// ("View Source"). The sentinel is prepended here rather than left to
    /// the template, so stripping works whatever the template contains.
    pub fn build(&self, filename: &str, is_index: bool) -> String {
        let (source_url, view_text) = if is_index {
            (self.config.repo_url(), "Repository Root")
        } else {
            (self.config.blob_url(filename), "View Source")
        };
        let rendered = template::render(self.footer_template, &[
            ("REPO_URL", &self.config.repo_url()),
            ("SOURCE_URL", &source_url),
            ("VIEW_TEXT", view_text),
        ]);
        format!("\n{SENTINEL}\n{rendered}")
    }

    /// Remove every previously injected footer from `content`.
    ///
    /// Each removal spans from the sentinel (including any whitespace run
    /// immediately before it) through the first `</footer>` after it,
    /// inclusive. A sentinel with no subsequent `</footer>` is left alone.
    /// Content without a sentinel is returned unchanged.
    pub fn strip(&self, content: &str) -> String {
        let mut out = content.to_string();
        let mut search_from = 0;
        while let Some(rel) = out[search_from..].find(SENTINEL) {
            let marker = search_from + rel;
            let after_marker = marker + SENTINEL.len();
            let Some(close_rel) = out[after_marker..].find(FOOTER_CLOSE) else {
                // No closing tag: leave this sentinel in place, stop scanning.
                break;
            };
            let span_end = after_marker + close_rel + FOOTER_CLOSE.len();
            let span_start = leading_whitespace_start(&out, marker);
            out.replace_range(span_start..span_end, "");
            search_from = span_start;
        }
        out
    }

    /// Insert `footer` immediately before the last `</body>` in `content`,
    /// or append it when the tag is absent.
    ///
    /// A single newline follows the footer, mirroring the newline [`strip`]
    /// consumes ahead of the sentinel. For a page whose `</body>` sits on its
    /// own line, strip exactly undoes inject, so re-processing already
    /// published output is byte-stable.
    ///
    /// [`strip`]: FooterComposer::strip
    pub fn inject(&self, content: &str, footer: &str) -> String {
        match content.rfind(BODY_CLOSE) {
            Some(pos) => {
                let mut out = String::with_capacity(content.len() + footer.len());
                out.push_str(&content[..pos]);
                out.push_str(footer);
                out.push('\n');
                out.push_str(&content[pos..]);
                out
            }
            None => format!("{content}{footer}"),
        }
    }
}

/// Byte index where the whitespace run immediately preceding `pos` begins.
fn leading_whitespace_start(s: &str, pos: usize) -> usize {
    match s[..pos].rfind(|c: char| !c.is_whitespace()) {
        Some(i) => i + s[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            repo: "ccollis/tools".into(),
            branch: "main".into(),
        }
    }

    const TEMPLATE: &str = "<footer>\
<a href=\"{{ REPO_URL }}\">GitHub Repo</a> | \
<a href=\"{{ SOURCE_URL }}\">{{ VIEW_TEXT }}</a>\
</footer>";

    fn composer<'a>(config: &'a Config) -> FooterComposer<'a> {
        FooterComposer::new(TEMPLATE, config)
    }

    // =========================================================================
    // build() tests
    // =========================================================================

    #[test]
    fn build_page_footer_links_to_blob() {
        let config = test_config();
        let footer = composer(&config).build("goddamn.html", false);
        assert!(footer.contains("https://github.com/ccollis/tools/blob/main/goddamn.html"));
        assert!(footer.contains("View Source"));
        assert!(footer.contains("https://github.com/ccollis/tools\""));
    }

    #[test]
    fn build_index_footer_links_to_repo_root() {
        let config = test_config();
        let footer = composer(&config).build("index.html", true);
        assert!(footer.contains("Repository Root"));
        assert!(!footer.contains("/blob/"));
    }

    #[test]
    fn build_prepends_sentinel() {
        let config = test_config();
        let footer = composer(&config).build("a.html", false);
        let sentinel_pos = footer.find(SENTINEL).unwrap();
        let footer_pos = footer.find("<footer>").unwrap();
        assert!(sentinel_pos < footer_pos);
    }

    // =========================================================================
    // strip() tests
    // =========================================================================

    #[test]
    fn strip_without_sentinel_is_identity() {
        let config = test_config();
        let content = "<html><body><footer>hand-written</footer></body></html>";
        assert_eq!(composer(&config).strip(content), content);
    }

    #[test]
    fn strip_removes_injected_footer_and_leading_whitespace() {
        let config = test_config();
        let c = composer(&config);
        let content = format!(
            "<body><p>x</p>\n  \n{SENTINEL}\n<footer>old</footer>\n</body>"
        );
        assert_eq!(c.strip(&content), "<body><p>x</p>\n</body>");
    }

    #[test]
    fn strip_preserves_hand_written_footer_before_sentinel() {
        let config = test_config();
        let c = composer(&config);
        let content = format!(
            "<footer>Get the hell out of my office!</footer>\n{SENTINEL}\n<footer>old</footer>"
        );
        let stripped = c.strip(&content);
        assert!(stripped.contains("Get the hell out of my office!"));
        assert!(!stripped.contains(SENTINEL));
    }

    #[test]
    fn strip_removes_all_complete_spans() {
        let config = test_config();
        let c = composer(&config);
        let content = format!(
            "<body>{SENTINEL}<footer>one</footer>{SENTINEL}<footer>two</footer></body>"
        );
        assert_eq!(c.strip(&content), "<body></body>");
    }

    #[test]
    fn strip_leaves_sentinel_without_closing_tag() {
        let config = test_config();
        let c = composer(&config);
        let content = format!("<body>{SENTINEL}<footer>never closed</body>");
        assert_eq!(c.strip(&content), content);
    }

    #[test]
    fn strip_stops_at_first_closing_tag() {
        // Known sharp edge: a quoted </footer> inside the block ends the span
        // early, leaving the tail behind. Pinned so a change is deliberate.
        let config = test_config();
        let c = composer(&config);
        let content = format!(
            "<body>{SENTINEL}<footer><code>\"</footer>\"</code>tail</footer></body>"
        );
        assert_eq!(c.strip(&content), "<body>\"</code>tail</footer></body>");
    }

    // =========================================================================
    // inject() tests
    // =========================================================================

    #[test]
    fn inject_before_last_body_close() {
        let config = test_config();
        let c = composer(&config);
        let content = "<p>x</p></body><script>y</script></body></html>";
        let out = c.inject(content, "[F]");
        assert_eq!(out, "<p>x</p></body><script>y</script>[F]\n</body></html>");
    }

    #[test]
    fn inject_appends_when_no_body_close() {
        let config = test_config();
        let c = composer(&config);
        let out = c.inject("<p>fragment</p>", "[F]");
        assert_eq!(out, "<p>fragment</p>[F]");
    }

    // =========================================================================
    // Idempotence properties
    // =========================================================================

    #[test]
    fn strip_inject_converges_to_one_footer() {
        let config = test_config();
        let c = composer(&config);
        let content = "<html>\n<body>\n<h1>Tool</h1>\n</body>\n</html>\n".to_string();

        let footer = c.build("tool.html", false);
        let once = c.inject(&c.strip(&content), &footer);
        let twice = c.inject(&c.strip(&once), &footer);

        assert_eq!(once, twice);
        assert_eq!(twice.matches(SENTINEL).count(), 1);
    }

    #[test]
    fn strip_exactly_undoes_inject() {
        let config = test_config();
        let c = composer(&config);
        let content = "<html>\n<body>\n<h1>Tool</h1>\n</body>\n</html>\n";

        let footer = c.build("tool.html", false);
        let injected = c.inject(content, &footer);
        assert_eq!(c.strip(&injected), content);
    }

    #[test]
    fn converges_even_with_stale_footers_in_input() {
        let config = test_config();
        let c = composer(&config);
        let stale = format!(
            "<html><body><h1>Tool</h1>\n{SENTINEL}\n<footer>stale one</footer>\n\
             {SENTINEL}\n<footer>stale two</footer>\n</body></html>"
        );

        let footer = c.build("tool.html", false);
        let out = c.inject(&c.strip(&stale), &footer);

        assert_eq!(out.matches(SENTINEL).count(), 1);
        assert_eq!(out.matches("</footer>").count(), 1);
        assert!(!out.contains("stale"));
    }
}
