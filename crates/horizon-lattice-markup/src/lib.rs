//! Link label markup for Horizon Lattice.
//!
//! Link labels accept a small HTML-like markup: plain text, `&` mnemonic
//! markers and `<a>`/`<a href="...">` anchors. This crate turns that markup
//! into something a renderer and an input handler can use:
//!
//! - [`parse`] produces a [`ParsedLabel`]: display text, link spans with
//!   their ids, and per-segment mnemonic offsets
//! - [`normalize::normalize_anchors`] rewrites bare `<a>` anchors so a
//!   rich-text renderer recognizes them as hyperlinks
//! - [`mnemonic`] holds the `&` marker rules shared by both
//!
//! Everything here is a pure function of its input. No state is shared
//! between calls, so parsing is safe from any thread.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_markup::{normalize::normalize_anchors, parse};
//!
//! let text = "Read the <a>&manual</a> or visit <a href=\"https://example.com\">our site</a>.";
//!
//! let parsed = parse(text);
//! assert_eq!(parsed.display_text, "Read the manual or visit our site.");
//! assert_eq!(parsed.link_text(1), Some("our site"));
//! assert_eq!(parsed.links[1].id, "https://example.com");
//! assert_eq!(parsed.mnemonics.len(), parsed.links.len() + 1);
//!
//! let markup = normalize_anchors(text);
//! assert!(markup.starts_with("Read the <a href=\"&manual\">&manual</a>"));
//! ```
//!
//! # Logging
//!
//! Parsing is instrumented with `tracing` under the
//! `horizon_lattice_markup::parser` and `horizon_lattice_markup::normalize`
//! targets. Abandoned anchors are reported at `debug`, completed links at
//! `trace`.

pub mod mnemonic;
pub mod normalize;
mod parsed;
pub mod parser;

/// Target names for log filtering.
pub mod targets {
    /// Markup parsing.
    pub const PARSER: &str = "horizon_lattice_markup::parser";
    /// Anchor normalization.
    pub const NORMALIZE: &str = "horizon_lattice_markup::normalize";
}

pub use mnemonic::{MnemonicText, extract_mnemonic, parse_mnemonic};
pub use normalize::{escape_attribute, lowercase_anchor_tags, normalize_anchors};
pub use parsed::{LinkSpan, ParsedLabel};
pub use parser::parse;
