//! # toolshelf
//!
//! A small site assembler for a directory of standalone HTML tool pages.
//! Each page is a self-contained document; toolshelf reads them all, builds
//! an `index.html` linking to every page, and stamps a uniform footer onto
//! each one before writing the set to an output directory. Inputs are never
//! modified.
//!
//! # Architecture: Two-Phase Pipeline
//!
//! ```text
//! 1. Collect   pages/   →  link list + rendered index   (read, extract, render)
//! 2. Emit      pages    →  dist/                        (strip + inject footer, write)
//! ```
//!
//! The collect phase is side-effect free apart from reading files; the emit
//! phase writes each output file exactly once. Re-running the pipeline over
//! its own output is safe: footer injection is idempotent, so a page never
//! accumulates duplicate footers.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`descriptor`] | Extracts the embedded `TOOL_OVERVIEW` JSON block from a page |
//! | [`template`] | Loads the three on-disk templates and performs `{{ NAME }}` substitution |
//! | [`footer`] | Builds, strips, and injects the per-page footer fragment |
//! | [`assemble`] | Orchestrates the pipeline and writes the output directory |
//! | [`config`] | Repository/branch configuration from env vars and `toolshelf.toml` |
//! | [`naming`] | Filename → display title, functionality-key humanization |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Text Templates Over a Template Engine
//!
//! Templates are plain files with literal `{{ NAME }}` placeholders and
//! nothing else: no conditionals, no loops, no recursive expansion. The
//! substitution is a single pass of string replacement. Pages hosted this way
//! are hand-written one-offs; the three templates change rarely and live next
//! to the content so they can be edited without rebuilding the binary.
//!
//! ## String-Scan Footer Handling, Not DOM Parsing
//!
//! Footer removal is a pure string scan: a sentinel comment marks every
//! injected footer, and stripping deletes from the sentinel through the first
//! subsequent `</footer>`. Injection targets the *last* `</body>` in the
//! document. Parsing the page as a DOM would reject the many tool pages that
//! are not well-formed HTML; the string contract tolerates them.
//!
//! ## Graceful Descriptor Degradation
//!
//! A page may embed a JSON descriptor (name, description, capabilities,
//! dependencies). Pages without one, or with a malformed one, still get an
//! index entry, derived from the filename and fixed defaults. A broken
//! descriptor is a warning in the run report, never an abort.

pub mod assemble;
pub mod config;
pub mod descriptor;
pub mod footer;
pub mod naming;
pub mod output;
pub mod template;
