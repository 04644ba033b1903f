//! Logging and debugging facilities for link labels.
//!
//! Link labels are instrumented with the `tracing` crate. Install a
//! subscriber to see the events:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_link=debug,horizon_lattice_markup=debug")
//!     .init();
//! ```
//!
//! [`LabelDebug`] renders a parsed label's segments, links and mnemonics in a
//! readable form for logs and test failure messages.

use std::fmt::{self, Write as FmtWrite};

use horizon_lattice_markup::ParsedLabel;

/// Target names for log filtering.
pub mod targets {
    /// Link label state changes, focus and activation.
    pub const LINK: &str = "horizon_lattice_link::link";
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_lattice_link::signal";

    pub use horizon_lattice_markup::targets::{NORMALIZE, PARSER};
}

/// Options for [`LabelDebug`] output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDebugOptions {
    /// Show each link's id next to its text.
    pub show_ids: bool,
    /// Show the mnemonic table.
    pub show_mnemonics: bool,
}

impl Default for LabelDebugOptions {
    fn default() -> Self {
        Self {
            show_ids: true,
            show_mnemonics: true,
        }
    }
}

impl LabelDebugOptions {
    /// Only the display text and link ranges.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_mnemonics: false,
        }
    }
}

/// Human-readable dump of a [`ParsedLabel`].
///
/// ```
/// use horizon_lattice_link::logging::LabelDebug;
/// use horizon_lattice_markup::parse;
///
/// let parsed = parse("&Go <a href=\"/home\">home</a>");
/// let dump = LabelDebug::new(&parsed).to_string();
/// assert!(dump.contains("[0] 3..7 \"home\" -> \"/home\""));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabelDebug<'a> {
    label: &'a ParsedLabel,
    options: LabelDebugOptions,
}

impl<'a> LabelDebug<'a> {
    /// Dump with default options.
    pub fn new(label: &'a ParsedLabel) -> Self {
        Self::with_options(label, LabelDebugOptions::default())
    }

    /// Dump with custom options.
    pub fn with_options(label: &'a ParsedLabel, options: LabelDebugOptions) -> Self {
        Self { label, options }
    }

    /// Format the dump into a string.
    pub fn format(&self) -> String {
        let mut output = String::new();
        // Writing to a String cannot fail.
        let _ = self.format_into(&mut output);
        output
    }

    fn format_into(&self, output: &mut String) -> fmt::Result {
        let label = self.label;
        writeln!(output, "Label {:?} ({} links):", label.display_text, label.links.len())?;

        for (index, link) in label.links.iter().enumerate() {
            let text = label.link_text(index).unwrap_or("");
            write!(output, "  [{index}] {:?} {text:?}", link.range)?;
            if self.options.show_ids {
                write!(output, " -> {:?}", link.id)?;
            }
            output.push('\n');
        }

        if self.options.show_mnemonics {
            output.push_str("  mnemonics:");
            for (segment, mnemonic) in label.mnemonics.iter().enumerate() {
                match (mnemonic, label.mnemonic_char(segment)) {
                    (Some(offset), Some(ch)) => write!(output, " {offset}:{ch:?}")?,
                    (Some(offset), None) => write!(output, " {offset}:<end>")?,
                    (None, _) => output.push_str(" -"),
                }
            }
            output.push('\n');
        }
        Ok(())
    }
}

impl fmt::Display for LabelDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
