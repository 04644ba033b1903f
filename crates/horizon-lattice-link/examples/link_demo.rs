//! Drives a link label from the terminal.
//!
//! Run with `RUST_LOG=horizon_lattice_link=debug,horizon_lattice_markup=trace`
//! to see parser and activation events.

use horizon_lattice_link::{LabelDebug, LinkLabel, NavigationKey};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("horizon_lattice_link=debug")),
        )
        .init();

    let text = std::env::args().nth(1).unwrap_or_else(|| {
        "&Read the <A>manual</A>, &browse <a href=\"https://example.com\">the site</a> \
         or &quit <a>now</a>."
            .to_string()
    });

    let mut label = LinkLabel::new(text);
    label
        .link_activated
        .connect(|event| println!("activated link {} -> {}", event.index, event.id));
    label
        .focus_changed
        .connect(|focus| println!("focus -> {focus:?}"));

    println!("renderer markup: {}", label.markup());
    print!("{}", LabelDebug::new(label.parsed()));

    label.handle_key(NavigationKey::Enter);
    while label.handle_key(NavigationKey::Tab) {
        label.handle_key(NavigationKey::Enter);
    }

    for key in ['r', 'b', 'q'] {
        if label.mnemonic_hit(key) {
            println!("mnemonic {key:?} focused link {:?}", label.focus_index());
        }
    }

    for run in label.style_runs() {
        let color = run.foreground.map(|color| color.to_hex());
        println!("style {:?} {:?} color={color:?} underline={}", run.kind, run.range, run.underline);
    }
}
