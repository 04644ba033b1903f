//! Anchor markup parser.
//!
//! Converts label text such as `Read the <a href="https://x">&manual</a>` into
//! a [`ParsedLabel`]: the plain text to display, the link spans with their
//! ids, and one mnemonic entry per text segment.
//!
//! # Grammar
//!
//! - `<a>body</a>` and `<a href="id">body</a>`; tag letters match
//!   case-insensitively, the `href` value is taken verbatim.
//! - Other attributes of the form `name="value"` are tolerated and ignored.
//! - Anchors do not nest. A `<` inside a link body is body text unless it
//!   starts `</a>`.
//! - Anything that fails to form a complete anchor stays in the output as
//!   literal text. Parsing never fails.
//!
//! # Scanner
//!
//! The grammar is a small state machine. [`transition`] is a pure function
//! from a state and a (lower-cased) character to a [`Step`]; the driver keeps
//! the positional markers and builds the output when a link closes.

use crate::mnemonic::extract_mnemonic;
use crate::parsed::{LinkSpan, ParsedLabel};

use crate::targets::PARSER as TARGET;

/// Characters that must follow the `h` of `href` in an opening tag.
const HREF_TAIL: [char; 5] = ['r', 'e', 'f', '=', '"'];

/// A state of the anchor scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Ordinary text outside any tag.
    PlainText,
    /// Saw `<`, expecting `a`.
    TagOpen,
    /// Inside `<a ...`, before the closing `>`.
    InOpeningTag,
    /// Matching `href="`; the value is how many characters of
    /// `ref="` have matched so far.
    Href(usize),
    /// Inside the quoted `href` value.
    HrefValue,
    /// Inside the name of some other attribute.
    Attribute,
    /// Saw `name=`, expecting the opening quote.
    AttributeEquals,
    /// Inside the quoted value of some other attribute.
    AttributeValue,
    /// Inside the link text.
    LinkBody,
    /// Saw `<` inside the link text.
    CloseTagOpen,
    /// Saw `</` inside the link text.
    CloseTagSlash,
    /// Saw `</a` inside the link text.
    CloseTagName,
}

/// A position the driver records when a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The current `<` may open an anchor.
    TagStart,
    /// The current `>` ends the opening tag; the body starts after it.
    BodyStart,
    /// The current `"` opens the `href` value.
    HrefStart,
    /// The current `"` closes the `href` value.
    HrefEnd,
    /// The current `<` may start `</a>`.
    CloseTagStart,
    /// The current `>` completes `</a>`.
    LinkEnd,
}

/// Outcome of feeding one character to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Accept the character and move to the given state.
    Advance(ScanState, Option<Marker>),
    /// Reject the character; rescan it from the given state.
    ///
    /// Only ever targets [`ScanState::PlainText`] or [`ScanState::LinkBody`],
    /// both of which accept every character.
    Fallback(ScanState),
}

impl Step {
    fn to(state: ScanState) -> Self {
        Step::Advance(state, None)
    }

    fn mark(state: ScanState, marker: Marker) -> Self {
        Step::Advance(state, Some(marker))
    }
}

/// The scanner's transition function.
///
/// `c` must already be lower-cased; tag matching is case-insensitive.
pub fn transition(state: ScanState, c: char) -> Step {
    use ScanState::*;

    match state {
        PlainText => match c {
            '<' => Step::mark(TagOpen, Marker::TagStart),
            _ => Step::to(PlainText),
        },
        TagOpen => match c {
            'a' => Step::to(InOpeningTag),
            _ => Step::Fallback(PlainText),
        },
        InOpeningTag => match c {
            'h' => Step::to(Href(0)),
            '>' => Step::mark(LinkBody, Marker::BodyStart),
            c if c.is_whitespace() => Step::to(InOpeningTag),
            _ => Step::to(Attribute),
        },
        Href(matched) => {
            if HREF_TAIL.get(matched) != Some(&c) {
                Step::Fallback(PlainText)
            } else if matched + 1 == HREF_TAIL.len() {
                Step::mark(HrefValue, Marker::HrefStart)
            } else {
                Step::to(Href(matched + 1))
            }
        }
        HrefValue => match c {
            '"' => Step::mark(InOpeningTag, Marker::HrefEnd),
            _ => Step::to(HrefValue),
        },
        Attribute => match c {
            '=' => Step::to(AttributeEquals),
            c if c.is_whitespace() => Step::Fallback(PlainText),
            _ => Step::to(Attribute),
        },
        AttributeEquals => match c {
            '"' => Step::to(AttributeValue),
            _ => Step::Fallback(PlainText),
        },
        AttributeValue => match c {
            '"' => Step::to(InOpeningTag),
            _ => Step::to(AttributeValue),
        },
        LinkBody => match c {
            '<' => Step::mark(CloseTagOpen, Marker::CloseTagStart),
            _ => Step::to(LinkBody),
        },
        CloseTagOpen => match c {
            '/' => Step::to(CloseTagSlash),
            _ => Step::Fallback(LinkBody),
        },
        CloseTagSlash => match c {
            'a' => Step::to(CloseTagName),
            _ => Step::Fallback(LinkBody),
        },
        CloseTagName => match c {
            '>' => Step::mark(PlainText, Marker::LinkEnd),
            _ => Step::Fallback(LinkBody),
        },
    }
}

/// Parse anchor markup and mnemonic markers into a [`ParsedLabel`].
///
/// ```
/// use horizon_lattice_markup::parse;
///
/// let parsed = parse(r#"Click <a href="http://x">here</a> now"#);
/// assert_eq!(parsed.display_text, "Click here now");
/// assert_eq!(parsed.links[0].range, 6..10);
/// assert_eq!(parsed.links[0].id, "http://x");
/// assert_eq!(parsed.mnemonics, vec![None, None]);
/// ```
pub fn parse(input: &str) -> ParsedLabel {
    let mut scanner = Scanner::new(input);
    for (index, ch) in input.char_indices() {
        scanner.feed(index, ch);
    }
    scanner.finish()
}

/// Driver state for one call to [`parse`].
struct Scanner<'a> {
    input: &'a str,
    state: ScanState,
    /// Start of the text segment not yet emitted.
    segment_start: usize,
    /// The `<` that may open the current anchor.
    tag_start: usize,
    /// First byte of the current link body.
    body_start: usize,
    /// The `<` that may start `</a>`.
    close_start: usize,
    /// First byte of the `href` value being read.
    href_start: usize,
    /// `href` value of the anchor being scanned.
    pending_href: Option<&'a str>,
    output: ParsedLabel,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            state: ScanState::PlainText,
            segment_start: 0,
            tag_start: 0,
            body_start: 0,
            close_start: 0,
            href_start: 0,
            pending_href: None,
            output: ParsedLabel {
                display_text: String::with_capacity(input.len()),
                links: Vec::new(),
                mnemonics: Vec::new(),
            },
        }
    }

    fn feed(&mut self, index: usize, ch: char) {
        let lowered = ch.to_ascii_lowercase();
        let mut state = self.state;
        loop {
            match transition(state, lowered) {
                Step::Advance(next, marker) => {
                    if let Some(marker) = marker {
                        self.mark(marker, index, ch);
                    }
                    self.state = next;
                    return;
                }
                Step::Fallback(fallback) => {
                    if fallback == ScanState::PlainText {
                        tracing::debug!(
                            target: TARGET,
                            tag_start = self.tag_start,
                            offset = index,
                            ?state,
                            "abandoned anchor tag"
                        );
                        self.pending_href = None;
                    }
                    state = fallback;
                }
            }
        }
    }

    fn mark(&mut self, marker: Marker, index: usize, ch: char) {
        let input = self.input;
        let after = index + ch.len_utf8();
        match marker {
            Marker::TagStart => {
                self.tag_start = index;
                self.pending_href = None;
            }
            Marker::BodyStart => self.body_start = after,
            Marker::HrefStart => self.href_start = after,
            Marker::HrefEnd => self.pending_href = Some(&input[self.href_start..index]),
            Marker::CloseTagStart => self.close_start = index,
            Marker::LinkEnd => self.close_link(after),
        }
    }

    fn close_link(&mut self, after: usize) {
        let input = self.input;
        let out = &mut self.output;

        let mnemonic = extract_mnemonic(&input[self.segment_start..self.tag_start], &mut out.display_text);
        out.mnemonics.push(mnemonic);

        let start = out.display_text.len();
        // Mnemonics inside link text are not tracked.
        extract_mnemonic(&input[self.body_start..self.close_start], &mut out.display_text);
        let range = start..out.display_text.len();

        let id = match self.pending_href.take() {
            Some(href) => href.to_owned(),
            None => out.display_text[range.clone()].to_owned(),
        };
        tracing::trace!(target: TARGET, index = out.links.len(), ?range, %id, "closed link");
        out.links.push(LinkSpan { range, id });

        self.segment_start = after;
    }

    fn finish(mut self) -> ParsedLabel {
        // Unterminated tags are still pending here; their text is emitted literally.
        let trailing = &self.input[self.segment_start..];
        let mnemonic = extract_mnemonic(trailing, &mut self.output.display_text);
        self.output.mnemonics.push(mnemonic);

        tracing::trace!(
            target: TARGET,
            links = self.output.links.len(),
            len = self.output.display_text.len(),
            "parsed label markup"
        );
        self.output
    }
}
