//! Integration tests for label markup parsing and anchor normalization.

use horizon_lattice_markup::{
    LinkSpan, ParsedLabel, escape_attribute, lowercase_anchor_tags, normalize_anchors, parse,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const PLAIN_SAMPLES: &[&str] = &[
    "",
    " ",
    "Hello, World",
    "multi\nline\ttext",
    "tags > without opening",
    "quotes \"here\" and 'there'",
    "ünïcödé ✓ 日本語",
];

#[test]
fn plain_text_is_identity() {
    init_tracing();
    for &sample in PLAIN_SAMPLES {
        let parsed = parse(sample);
        assert_eq!(parsed.display_text, sample);
        assert!(parsed.links.is_empty());
        assert_eq!(parsed.mnemonics, vec![None]);
    }
}

#[test]
fn escaped_ampersand_is_literal() {
    let parsed = parse("A && B");
    assert_eq!(parsed.display_text, "A & B");
    assert_eq!(parsed.mnemonics, vec![None]);
}

#[test]
fn single_mnemonic() {
    let parsed = parse("&File");
    assert_eq!(parsed.display_text, "File");
    assert_eq!(parsed.mnemonics, vec![Some(0)]);
    assert_eq!(parsed.mnemonic_char(0), Some('F'));
}

#[test]
fn link_with_href() {
    let parsed = parse(r#"Click <a href="http://x">here</a> now"#);
    assert_eq!(
        parsed,
        ParsedLabel {
            display_text: "Click here now".to_string(),
            links: vec![LinkSpan {
                range: 6..10,
                id: "http://x".to_string(),
            }],
            mnemonics: vec![None, None],
        }
    );
}

#[test]
fn link_without_href_uses_text() {
    let parsed = parse("See <a>this</a>");
    assert_eq!(parsed.display_text, "See this");
    assert_eq!(
        parsed.links,
        vec![LinkSpan {
            range: 4..8,
            id: "this".to_string(),
        }]
    );
}

#[test]
fn unbalanced_tag_is_literal() {
    init_tracing();
    let parsed = parse("Broken <a>never closed");
    assert_eq!(parsed.display_text, "Broken <a>never closed");
    assert!(parsed.links.is_empty());
}

#[test]
fn malformed_markup_never_panics() {
    let inputs = [
        "<", "<a", "<a ", "<a h", "<a href", "<a href=", "<a href=\"", "<a>", "<a></", "<a></a",
        "</a>", "<a x=", "<a x=y>", "&", "&&", "&<a>&</a>&", "<<<>>>", "<a href=\"\">",
    ];
    for input in inputs {
        let parsed = parse(input);
        assert_eq!(parsed.mnemonics.len(), parsed.links.len() + 1, "input {input:?}");
        for link in &parsed.links {
            assert!(link.range.start <= link.range.end);
            assert!(link.range.end <= parsed.display_text.len());
        }
    }
}

#[test]
fn cardinality_matches_link_count() {
    let cases = [
        ("no links", 0),
        ("<a>one</a>", 1),
        ("<a>one</a><a>two</a>", 2),
        ("x <a href=\"1\">a</a> y <a>b</a> z <A HREF=\"3\">c</A>", 3),
        ("<a>one</a> <a>unclosed", 1),
    ];
    for (input, links) in cases {
        let parsed = parse(input);
        assert_eq!(parsed.links.len(), links, "input {input:?}");
        assert_eq!(parsed.mnemonics.len(), links + 1, "input {input:?}");
    }
}

#[test]
fn spans_are_ordered_and_disjoint() {
    let parsed = parse("<a>a</a> <a>bb</a><a>ccc</a> tail");
    assert_eq!(parsed.display_text, "a bbccc tail");
    let ranges: Vec<_> = parsed.links.iter().map(|link| link.range.clone()).collect();
    assert_eq!(ranges, vec![0..1, 2..4, 4..7]);
    for pair in parsed.links.windows(2) {
        assert!(pair[0].range.end <= pair[1].range.start);
    }
}

#[test]
fn identical_links_disambiguated_by_href() {
    let parsed = parse(r#"<a href="first">same</a> and <a href="second">same</a>"#);
    assert_eq!(parsed.link_text(0), parsed.link_text(1));
    let ids: Vec<_> = parsed.link_ids().collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn parse_is_reentrant_across_threads() {
    let input = "&Go <a href=\"x\">there</a> now";
    let expected = parse(input);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || parse(input)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn escaping_rule() {
    assert_eq!(
        escape_attribute(r#"A "quote" & <tag>"#),
        "A &quot;quote&quot; & &lt;tag&gt;"
    );
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "no anchors at all",
        "<a>one</a>",
        "before <a>one</a> middle <a>two words</a> after",
        r#"<a href="kept">explicit</a> and <a>bare</a>"#,
        "<a>ok</a> <a>unclosed",
    ];
    for sample in samples {
        let once = normalize_anchors(sample).into_owned();
        let twice = normalize_anchors(&once).into_owned();
        assert_eq!(twice, once, "sample {sample:?}");
    }
}

#[test]
fn normalized_markup_parses_to_same_links() {
    let original = "Visit <a>home</a> or <a>help</a>";
    let normalized = normalize_anchors(original);
    let from_original = parse(original);
    let from_normalized = parse(&normalized);
    assert_eq!(from_normalized, from_original);
}

#[test]
fn write_path_preprocessing() {
    let raw = "Open <A>Settings</A>";
    let lowered = lowercase_anchor_tags(raw);
    assert_eq!(
        normalize_anchors(&lowered),
        r#"Open <a href="Settings">Settings</a>"#
    );
    assert_eq!(parse(raw).links[0].id, "Settings");
}
