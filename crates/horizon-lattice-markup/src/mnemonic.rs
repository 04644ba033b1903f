//! Mnemonic marker handling for link label text.
//!
//! A `&` marks the character that follows it as the segment's keyboard
//! mnemonic. A doubled `&&` is an escape and produces one literal `&`.
//!
//! ```
//! use horizon_lattice_markup::mnemonic::parse_mnemonic;
//!
//! let parsed = parse_mnemonic("Save &As");
//! assert_eq!(parsed.display_text, "Save As");
//! assert_eq!(parsed.mnemonic_index, Some(5));
//!
//! let escaped = parse_mnemonic("Fish && Chips");
//! assert_eq!(escaped.display_text, "Fish & Chips");
//! assert_eq!(escaped.mnemonic_index, None);
//! ```

/// Result of stripping mnemonic markers from a standalone piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicText {
    /// The text with `&` markers removed and `&&` collapsed to `&`.
    pub display_text: String,
    /// Byte offset into `display_text` of the mnemonic character, if any.
    ///
    /// May equal `display_text.len()` when the text ends in a lone `&`.
    pub mnemonic_index: Option<usize>,
}

impl MnemonicText {
    /// The mnemonic character, if the recorded offset points at one.
    pub fn mnemonic(&self) -> Option<char> {
        let offset = self.mnemonic_index?;
        self.display_text.get(offset..)?.chars().next()
    }
}

/// Strip mnemonic markers from `text`.
///
/// Unlike menu mnemonics, the *last* unescaped `&` wins and a trailing `&`
/// still records a position (one past the end of the display text).
pub fn parse_mnemonic(text: &str) -> MnemonicText {
    let mut display_text = String::with_capacity(text.len());
    let mnemonic_index = extract_mnemonic(text, &mut display_text);
    MnemonicText {
        display_text,
        mnemonic_index,
    }
}

/// Append `segment` to `out` with mnemonic markers removed.
///
/// Returns the offset into `out` (not into `segment`) recorded by the last
/// unescaped `&`, so callers accumulating several segments into one buffer
/// get offsets that index the final buffer directly.
pub fn extract_mnemonic(segment: &str, out: &mut String) -> Option<usize> {
    let mut mnemonic = None;
    let mut chars = segment.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            out.push(ch);
            continue;
        }
        if chars.next_if_eq(&'&').is_some() {
            out.push('&');
        } else {
            mnemonic = Some(out.len());
        }
    }
    mnemonic
}
