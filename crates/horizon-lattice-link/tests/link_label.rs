//! Integration tests for link label behavior driven the way a native
//! binding drives it: text updates, pointer offsets, keys and mnemonics.

use std::sync::Arc;

use horizon_lattice_link::markup::parse;
use horizon_lattice_link::{
    LinkActivated, LinkError, LinkLabel, LinkLabelConfig, NavigationKey, StyleKind,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn activations(label: &LinkLabel) -> Arc<Mutex<Vec<String>>> {
    let ids = Arc::new(Mutex::new(Vec::new()));
    let sink = ids.clone();
    label
        .link_activated
        .connect(move |event: &LinkActivated| sink.lock().push(event.id.clone()));
    ids
}

#[test]
fn accessible_name_matches_parse() {
    init_tracing();
    let text = "&Read the <a href=\"manual.html\">manual</a> && notes";
    let label = LinkLabel::new(text);
    assert_eq!(label.accessible_name(), parse(text).display_text);
    assert_eq!(label.accessible_name(), "Read the manual & notes");
}

#[test]
fn replacing_text_discards_previous_links() {
    let mut label = LinkLabel::new("<a>one</a> <a>two</a> <a>three</a>");
    label.set_focus_index(Some(2)).unwrap();

    assert!(label.set_text("now <a>single</a>"));
    assert_eq!(label.link_count(), 1);
    assert_eq!(label.focus_index(), Some(0));
    assert_eq!(label.parsed().mnemonics.len(), 2);
    assert_eq!(label.activate(1), Err(LinkError::invalid_index(1, 1)));
}

#[test]
fn keyboard_walkthrough() {
    init_tracing();
    let mut label = LinkLabel::new(
        "Open <a href=\"file:///a\">A</a>, <a href=\"file:///b\">B</a> or <a>C</a>",
    );
    let ids = activations(&label);

    assert!(label.handle_key(NavigationKey::Space));
    while label.traversal_consumes(NavigationKey::Tab) {
        assert!(label.handle_key(NavigationKey::Tab));
        assert!(label.handle_key(NavigationKey::Enter));
    }
    assert!(!label.handle_key(NavigationKey::Tab));

    assert_eq!(*ids.lock(), vec!["file:///a", "file:///b", "C"]);
}

#[test]
fn pointer_click_on_each_link() {
    let mut label = LinkLabel::new("x <a>first</a> y <a>second</a>");
    let ids = activations(&label);

    for index in 0..label.link_count() {
        let range = label.parsed().links[index].range.clone();
        assert_eq!(label.press_at(range.start), Some(index));
        assert!(label.release_at(range.end - 1));
    }
    // Releasing past the end of the link does nothing.
    let end = label.parsed().links[1].range.end;
    assert!(!label.release_at(end));

    assert_eq!(*ids.lock(), vec!["first", "second"]);
}

#[test]
fn mnemonic_focus_then_activate() {
    let mut label = LinkLabel::new("&Docs: <a>read</a>  &Bugs: <a href=\"bugs://new\">file one</a>");
    let ids = activations(&label);

    assert!(label.mnemonic_hit('b'));
    label.activate_focused().unwrap();
    assert!(label.mnemonic_hit('D'));
    label.activate_focused().unwrap();
    assert!(!label.mnemonic_hit('z'));

    assert_eq!(*ids.lock(), vec!["bugs://new", "read"]);
}

#[test]
fn style_runs_follow_enabled_state() {
    let mut label =
        LinkLabel::with_config("&a <a>b</a>", LinkLabelConfig::default());
    let enabled = label.style_runs();
    label.set_enabled(false);
    let disabled = label.style_runs();

    assert_eq!(enabled.len(), 2);
    assert_eq!(enabled[0].kind, StyleKind::Link(0));
    assert_eq!(enabled[0].foreground, Some(label.config().link_color));
    assert_eq!(disabled[0].foreground, Some(label.config().disabled_color));
    assert_eq!(enabled[1].kind, StyleKind::Mnemonic(0));
    assert_eq!(enabled[1].range, 0..1);
}

#[test]
fn blocked_signal_suppresses_activation_notice() {
    let label = LinkLabel::new("<a>quiet</a>");
    let ids = activations(&label);

    label.link_activated.set_blocked(true);
    label.activate(0).unwrap();
    label.link_activated.set_blocked(false);
    label.activate(0).unwrap();

    assert_eq!(*ids.lock(), vec!["quiet"]);
}

#[test]
fn label_moves_across_threads() {
    let label = LinkLabel::new("<a>remote</a>");
    let ids = activations(&label);
    let handle = std::thread::spawn(move || {
        label.activate_focused().unwrap();
        label
    });
    let label = handle.join().unwrap();
    assert_eq!(label.link_id(0), Some("remote"));
    assert_eq!(*ids.lock(), vec!["remote"]);
}
