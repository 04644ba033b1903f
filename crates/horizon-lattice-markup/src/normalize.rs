//! Anchor normalization for rich-text renderers.
//!
//! Renderers only treat `<a href="...">text</a>` as a hyperlink, so bare
//! `<a>text</a>` anchors are rewritten to carry an `href` equal to their own
//! text. The rewrite is all-or-nothing: if any bare anchor lacks a closing
//! tag, the input is returned untouched.

use std::borrow::Cow;

use crate::targets::NORMALIZE as TARGET;

const BARE_OPEN: &str = "<a>";
const CLOSE: &str = "</a>";

/// Escape text for embedding inside a double-quoted attribute value.
///
/// Only `"`, `<` and `>` are replaced; `&` is left alone.
///
/// ```
/// use horizon_lattice_markup::normalize::escape_attribute;
///
/// assert_eq!(
///     escape_attribute(r#"A "quote" & <tag>"#),
///     "A &quot;quote&quot; & &lt;tag&gt;"
/// );
/// ```
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    if !text.contains(['"', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Rewrite every bare `<a>text</a>` into `<a href="text">text</a>`.
///
/// Matching is case-sensitive; run [`lowercase_anchor_tags`] first when the
/// text may contain `<A>`. The `href` value is escaped with
/// [`escape_attribute`] while the visible body is kept verbatim.
///
/// ```
/// use horizon_lattice_markup::normalize::normalize_anchors;
///
/// assert_eq!(
///     normalize_anchors("See <a>docs</a>."),
///     r#"See <a href="docs">docs</a>."#
/// );
/// // Unclosed anchors leave the whole string untouched.
/// assert_eq!(normalize_anchors("<a>ok</a> <a>open"), "<a>ok</a> <a>open");
/// ```
pub fn normalize_anchors(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(BARE_OPEN) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 32);
    let mut copied_to = 0;
    let mut open = first;
    loop {
        let body_start = open + BARE_OPEN.len();
        let Some(body_len) = input[body_start..].find(CLOSE) else {
            tracing::debug!(
                target: TARGET,
                offset = open,
                "unclosed bare anchor, leaving markup unchanged"
            );
            return Cow::Borrowed(input);
        };
        let body_end = body_start + body_len;
        let body = &input[body_start..body_end];

        out.push_str(&input[copied_to..open]);
        out.push_str("<a href=\"");
        out.push_str(&escape_attribute(body));
        out.push_str("\">");
        out.push_str(body);
        out.push_str(CLOSE);

        copied_to = body_end + CLOSE.len();
        match input[copied_to..].find(BARE_OPEN) {
            Some(next) => open = copied_to + next,
            None => break,
        }
    }
    out.push_str(&input[copied_to..]);
    Cow::Owned(out)
}

/// Lower-case the `A` of `<A` and `</A` anchor delimiters.
///
/// Only a tag name directly followed by `>`, whitespace or end of input is
/// touched, so `<ABBR>` and the surrounding text keep their case.
pub fn lowercase_anchor_tags(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut positions = Vec::new();
    for (index, _) in input.match_indices('<') {
        let mut name = index + 1;
        if bytes.get(name) == Some(&b'/') {
            name += 1;
        }
        if bytes.get(name) != Some(&b'A') {
            continue;
        }
        let terminated = match input[name + 1..].chars().next() {
            None => true,
            Some(next) => next == '>' || next.is_whitespace(),
        };
        if terminated {
            positions.push(name);
        }
    }

    if positions.is_empty() {
        return Cow::Borrowed(input);
    }

    let mut out = input.as_bytes().to_vec();
    for position in positions {
        out[position] = b'a';
    }
    // Only ASCII bytes were replaced with ASCII bytes.
    Cow::Owned(String::from_utf8(out).unwrap_or_else(|_| input.to_owned()))
}
