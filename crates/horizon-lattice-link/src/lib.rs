//! Link labels for Horizon Lattice.
//!
//! A link label displays text with embedded hyperlinks:
//!
//! ```text
//! Read the <a>manual</a> or visit <a href="https://example.com">our site</a>.
//! ```
//!
//! This crate holds the toolkit-neutral half of such a widget:
//!
//! - **Write path**: [`LinkLabel::set_text`] lower-cases anchor tags,
//!   normalizes bare anchors for the rich-text renderer and parses the text
//!   into display text, link spans and mnemonics
//! - **Activation**: pointer, keyboard and API activation all raise
//!   [`LinkLabel::link_activated`] carrying the link's id
//! - **Focus**: Tab/BackTab traversal between links and mnemonic hits
//! - **Styling**: [`LinkLabel::style_runs`] lists the ranges a renderer colors
//!   and underlines, configured by [`LinkLabelConfig`]
//!
//! Parsing lives in [`horizon_lattice_markup`], re-exported as [`markup`].
//!
//! # Example
//!
//! ```
//! use horizon_lattice_link::LinkLabel;
//!
//! let mut label = LinkLabel::new("&Help: <a href=\"help://index\">contents</a>");
//! label.link_activated.connect(|event| println!("open {}", event.id));
//!
//! assert_eq!(label.display_text(), "Help: contents");
//! assert!(label.mnemonic_hit('h'));
//! label.activate_focused().unwrap();
//! ```

mod config;
mod error;
mod link;
pub mod logging;
pub mod signal;

pub use horizon_lattice_markup as markup;

pub use config::{Color, LINK_DISABLED_FOREGROUND, LINK_FOREGROUND, LinkLabelConfig};
pub use error::{LinkError, Result};
pub use link::{LinkActivated, LinkLabel, NavigationKey, StyleKind, StyleRun};
pub use logging::{LabelDebug, LabelDebugOptions};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
