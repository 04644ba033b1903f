//! Link label: text with embedded, activatable hyperlinks.
//!
//! A [`LinkLabel`] holds the caller's markup and everything derived from it:
//! the renderer markup, the parsed display text with its link and mnemonic
//! tables, and which link has keyboard focus. Native bindings feed it pointer
//! offsets and navigation keys and listen on its signals.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_link::{LinkLabel, NavigationKey};
//! use std::sync::{Arc, Mutex};
//!
//! let mut label = LinkLabel::new(r#"See <a href="https://example.com">the site</a> or <a>help</a>"#);
//! assert_eq!(label.accessible_name(), "See the site or help");
//!
//! let opened = Arc::new(Mutex::new(Vec::new()));
//! let sink = opened.clone();
//! label.link_activated.connect(move |event| sink.lock().unwrap().push(event.id.clone()));
//!
//! label.handle_key(NavigationKey::Enter);
//! label.handle_key(NavigationKey::Tab);
//! label.handle_key(NavigationKey::Space);
//! assert_eq!(*opened.lock().unwrap(), vec!["https://example.com", "help"]);
//! ```

use std::ops::Range;

use horizon_lattice_markup::{ParsedLabel, lowercase_anchor_tags, normalize_anchors, parse};

use crate::config::{Color, LinkLabelConfig};
use crate::error::{LinkError, Result};
use crate::logging::targets;
use crate::signal::Signal;

/// Payload of [`LinkLabel::link_activated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkActivated {
    /// Index of the activated link.
    pub index: usize,
    /// The link's `href`, or its text when it had none.
    pub id: String,
}

/// Keys a link label reacts to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    /// Activate the focused link.
    Enter,
    /// Activate the focused link.
    Space,
    /// Move focus to the next link.
    Tab,
    /// Move focus to the previous link.
    BackTab,
}

/// What a [`StyleRun`] decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// The text of link `n`.
    Link(usize),
    /// The mnemonic character of segment `n`.
    Mnemonic(usize),
}

/// A styled range of the display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    /// Byte range into the display text.
    pub range: Range<usize>,
    /// What the run decorates.
    pub kind: StyleKind,
    /// Foreground override, if any.
    pub foreground: Option<Color>,
    /// Whether the range is underlined.
    pub underline: bool,
}

/// Text with embedded hyperlinks, focus and activation state.
#[derive(Debug)]
pub struct LinkLabel {
    /// Text exactly as the caller supplied it.
    text: String,
    /// Text handed to the rich-text renderer.
    markup: String,
    parsed: ParsedLabel,
    enabled: bool,
    focus_index: Option<usize>,
    config: LinkLabelConfig,

    /// Emitted with the new text after [`set_text`](Self::set_text) changes it.
    pub text_changed: Signal<String>,
    /// Emitted when a link is activated by pointer, keyboard or API.
    pub link_activated: Signal<LinkActivated>,
    /// Emitted when the focused link changes.
    pub focus_changed: Signal<Option<usize>>,
}

impl Default for LinkLabel {
    fn default() -> Self {
        Self::with_config("", LinkLabelConfig::default())
    }
}

impl LinkLabel {
    /// Create a label from markup text.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, LinkLabelConfig::default())
    }

    /// Create a label with explicit styling.
    pub fn with_config(text: impl Into<String>, config: LinkLabelConfig) -> Self {
        let mut label = Self {
            text: String::new(),
            markup: String::new(),
            parsed: ParsedLabel::default(),
            enabled: true,
            focus_index: None,
            config,
            text_changed: Signal::new(),
            link_activated: Signal::new(),
            focus_changed: Signal::new(),
        };
        label.set_text(text);
        label
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// The markup text as last set.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label's markup.
    ///
    /// Returns `false` and does nothing when `text` equals the current text.
    /// Otherwise the text is re-parsed, focus moves to the first link (if
    /// any) and `text_changed` is emitted.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }

        let lowered = lowercase_anchor_tags(&text);
        self.markup = normalize_anchors(&lowered).into_owned();
        self.parsed = parse(&text);
        self.text = text;

        tracing::debug!(
            target: targets::LINK,
            links = self.parsed.link_count(),
            display = %self.parsed.display_text,
            "link label text changed"
        );

        let focus = if self.parsed.has_links() { Some(0) } else { None };
        self.move_focus(focus);
        self.text_changed.emit(self.text.clone());
        true
    }

    /// Builder variant of [`set_text`](Self::set_text).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Markup for a rich-text renderer; every anchor carries an `href`.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The parsed label.
    pub fn parsed(&self) -> &ParsedLabel {
        &self.parsed
    }

    /// The text as displayed, without markup or mnemonic markers.
    pub fn display_text(&self) -> &str {
        &self.parsed.display_text
    }

    /// Name exposed to assistive technology.
    pub fn accessible_name(&self) -> &str {
        self.display_text()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.parsed.link_count()
    }

    /// Id of link `index`.
    pub fn link_id(&self, index: usize) -> Option<&str> {
        self.parsed.links.get(index).map(|link| link.id.as_str())
    }

    /// Displayed text of link `index`.
    pub fn link_text(&self, index: usize) -> Option<&str> {
        self.parsed.link_text(index)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the label accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the label. Disabled labels ignore activation.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Builder variant of [`set_enabled`](Self::set_enabled).
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Current styling.
    pub fn config(&self) -> &LinkLabelConfig {
        &self.config
    }

    /// Replace the styling.
    pub fn set_config(&mut self, config: LinkLabelConfig) {
        self.config = config;
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Index of the link with keyboard focus.
    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    /// Focus a specific link, or clear focus with `None`.
    pub fn set_focus_index(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        self.move_focus(index);
        Ok(())
    }

    /// Move focus to the next link. Returns `false` at the last link.
    pub fn focus_next(&mut self) -> bool {
        match self.focus_index {
            Some(index) if index + 1 < self.link_count() => {
                self.move_focus(Some(index + 1));
                true
            }
            _ => false,
        }
    }

    /// Move focus to the previous link. Returns `false` at the first link.
    pub fn focus_previous(&mut self) -> bool {
        match self.focus_index {
            Some(index) if index > 0 => {
                self.move_focus(Some(index - 1));
                true
            }
            _ => false,
        }
    }

    /// Whether `key` would be handled inside the label rather than move
    /// focus to another control.
    pub fn traversal_consumes(&self, key: NavigationKey) -> bool {
        if !self.parsed.has_links() {
            return false;
        }
        match (key, self.focus_index) {
            (NavigationKey::Tab, Some(index)) => index + 1 < self.link_count(),
            (NavigationKey::BackTab, Some(index)) => index > 0,
            (NavigationKey::Enter | NavigationKey::Space, focus) => focus.is_some(),
            (_, None) => false,
        }
    }

    fn move_focus(&mut self, index: Option<usize>) {
        if self.focus_index == index {
            return;
        }
        tracing::trace!(target: targets::LINK, from = ?self.focus_index, to = ?index, "link focus moved");
        self.focus_index = index;
        self.focus_changed.emit(index);
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Activate link `index`, emitting `link_activated`.
    pub fn activate(&self, index: usize) -> Result<()> {
        if !self.enabled {
            return Err(LinkError::Disabled);
        }
        self.check_index(index)?;

        let id = self.parsed.links[index].id.clone();
        tracing::debug!(target: targets::LINK, index, %id, "link activated");
        self.link_activated.emit(LinkActivated { index, id });
        Ok(())
    }

    /// Activate the focused link.
    pub fn activate_focused(&self) -> Result<()> {
        let index = self.focus_index.ok_or(LinkError::NoFocusedLink)?;
        self.activate(index)
    }

    /// Handle a navigation key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: NavigationKey) -> bool {
        match key {
            NavigationKey::Enter | NavigationKey::Space => match self.activate_focused() {
                Ok(()) => true,
                Err(err) => {
                    tracing::trace!(target: targets::LINK, ?key, %err, "activation key ignored");
                    false
                }
            },
            NavigationKey::Tab => self.focus_next(),
            NavigationKey::BackTab => self.focus_previous(),
        }
    }

    /// Index of the link covering display-text offset `offset`.
    pub fn link_at_offset(&self, offset: usize) -> Option<usize> {
        self.parsed.link_at(offset)
    }

    /// Primary button pressed over display-text offset `offset`.
    ///
    /// Focuses and returns the link under the pointer.
    pub fn press_at(&mut self, offset: usize) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        let index = self.link_at_offset(offset)?;
        self.move_focus(Some(index));
        Some(index)
    }

    /// Primary button released over display-text offset `offset`.
    ///
    /// Activates the focused link if the release lands inside it. Returns
    /// whether a link was activated.
    pub fn release_at(&mut self, offset: usize) -> bool {
        let Some(index) = self.focus_index else {
            return false;
        };
        let inside = self
            .parsed
            .links
            .get(index)
            .is_some_and(|link| link.contains(offset));
        inside && self.activate(index).is_ok()
    }

    // =========================================================================
    // Mnemonics
    // =========================================================================

    /// Whether `key` matches the mnemonic of any text segment preceding a link.
    ///
    /// Mnemonics in the trailing text are ignored.
    pub fn mnemonic_match(&self, key: char) -> bool {
        self.mnemonic_target(key).is_some()
    }

    /// Focus the link whose preceding segment has mnemonic `key`.
    pub fn mnemonic_hit(&mut self, key: char) -> bool {
        if !self.enabled {
            return false;
        }
        match self.mnemonic_target(key) {
            Some(index) => {
                self.move_focus(Some(index));
                true
            }
            None => false,
        }
    }

    fn mnemonic_target(&self, key: char) -> Option<usize> {
        (0..self.link_count()).find(|&segment| {
            self.parsed
                .mnemonic_char(segment)
                .is_some_and(|mnemonic| mnemonic.to_uppercase().eq(key.to_uppercase()))
        })
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Style runs a renderer applies on top of the display text.
    ///
    /// Link runs come first, in link order, followed by mnemonic underlines.
    pub fn style_runs(&self) -> Vec<StyleRun> {
        let foreground = if self.enabled {
            self.config.link_color
        } else {
            self.config.disabled_color
        };

        let links = self.parsed.links.iter().enumerate().map(|(index, link)| StyleRun {
            range: link.range.clone(),
            kind: StyleKind::Link(index),
            foreground: Some(foreground),
            underline: self.config.underline_links,
        });

        let mnemonics = (0..self.parsed.mnemonics.len()).filter_map(|segment| {
            if !self.config.underline_mnemonics {
                return None;
            }
            let offset = self.parsed.mnemonics[segment]?;
            let ch = self.parsed.mnemonic_char(segment)?;
            Some(StyleRun {
                range: offset..offset + ch.len_utf8(),
                kind: StyleKind::Mnemonic(segment),
                foreground: None,
                underline: true,
            })
        });

        links.chain(mnemonics).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.link_count();
        if index < count {
            Ok(())
        } else {
            Err(LinkError::invalid_index(index, count))
        }
    }
}
