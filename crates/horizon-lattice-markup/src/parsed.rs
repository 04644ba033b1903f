//! The result of parsing link label markup.

use std::ops::Range;

/// One clickable region of a parsed label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkSpan {
    /// Half-open byte range into [`ParsedLabel::display_text`].
    pub range: Range<usize>,
    /// The `href` value, or the link's displayed text when no `href` was given.
    pub id: String,
}

impl LinkSpan {
    /// Whether `offset` falls inside this link's text.
    pub fn contains(&self, offset: usize) -> bool {
        self.range.contains(&offset)
    }
}

/// Plain display text plus the link and mnemonic tables extracted from markup.
///
/// `mnemonics` always holds `links.len() + 1` entries: entry `i` belongs to the
/// text segment preceding link `i`, and the last entry to the trailing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
    /// Text with all markup and mnemonic markers removed.
    pub display_text: String,
    /// Links in left-to-right order. Ranges never overlap.
    pub links: Vec<LinkSpan>,
    /// Per-segment mnemonic offsets into `display_text`.
    pub mnemonics: Vec<Option<usize>>,
}

impl Default for ParsedLabel {
    /// The parse of an empty string.
    fn default() -> Self {
        Self {
            display_text: String::new(),
            links: Vec::new(),
            mnemonics: vec![None],
        }
    }
}

impl ParsedLabel {
    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Whether the label contains any links.
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// The displayed text of link `index`.
    pub fn link_text(&self, index: usize) -> Option<&str> {
        let link = self.links.get(index)?;
        self.display_text.get(link.range.clone())
    }

    /// Index of the link whose text covers `offset`.
    pub fn link_at(&self, offset: usize) -> Option<usize> {
        self.links.iter().position(|link| link.contains(offset))
    }

    /// Ids of all links, in order.
    pub fn link_ids(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.id.as_str())
    }

    /// The mnemonic character of `segment`.
    ///
    /// Returns `None` when the segment has no mnemonic or its offset points
    /// past the end of the text (a trailing `&`).
    pub fn mnemonic_char(&self, segment: usize) -> Option<char> {
        let offset = (*self.mnemonics.get(segment)?)?;
        self.display_text.get(offset..)?.chars().next()
    }
}
