//! zview demo: a lazily loaded list next to a text box.
//!
//! Tab / Shift-Tab switch panes, Enter selects, ^Q quits.

use std::process::ExitCode;
use std::rc::Rc;
use std::sync::atomic::Ordering;

use zview::config;
use zview::core::{App, EventResult, Key, Window};
use zview::logging;
use zview::views::{ListView, Loader, Page, SplitView, TextBox};

const PAGE_SIZE: usize = 40;
const TOTAL_ENTRIES: usize = 200;
const LIST_WIDTH: u16 = 28;

const WELCOME: &str = "Welcome to zview.\n\n\
Shift-Tab moves focus between the list and this text box.\n\
Press Enter on \"Load more...\" at the bottom of the list to fetch more entries.\n\
^Q quits.\n";

/// Numbered entries served a page at a time; the continuation is the next index.
struct Entries;

impl Loader<String> for Entries {
    fn load(&mut self, next: Option<&str>) -> Page<String> {
        let start: usize = next.and_then(|s| s.parse().ok()).unwrap_or(0);
        let end = (start + PAGE_SIZE).min(TOTAL_ENTRIES);
        let items = (start..end).map(|i| format!("entry {i:>3}")).collect();
        if end >= TOTAL_ENTRIES {
            Page::last(items)
        } else {
            Page::more(items, end.to_string())
        }
    }
}

fn cycle_focus(window: &mut Window, _key: Key) -> EventResult {
    match window.top_mut().and_then(|v| v.downcast_mut::<SplitView>()) {
        Some(split) => {
            split.cycle_focus();
            EventResult::Consumed
        }
        None => EventResult::Ignored,
    }
}

fn build(app: &mut App) {
    let host = Rc::downgrade(app.host());
    let list = ListView::loading_selecting(Vec::new(), Entries).on_select(
        move |index, item: &String| {
            if let Some(host) = host.upgrade() {
                host.debug_out(format!("selected #{index}: {item}"));
            }
        },
    );

    let mut split = SplitView::horizontal(&[LIST_WIDTH, 0]);
    if let Some(pane) = split.pane_mut(0) {
        pane.add_view(list);
    }
    if let Some(pane) = split.pane_mut(1) {
        pane.add_view(TextBox::with_text(WELCOME).with_line_numbers());
    }
    app.add_view(split);

    // The text box keeps Tab for itself; Shift-Tab works from either pane.
    app.on_key(Key::TAB, cycle_focus);
    app.on_key(Key::BACK_TAB, cycle_focus);
    app.on_key(Key::ctrl('q'), |window, _| {
        window.clear();
        EventResult::Consumed
    });
}

fn main() -> ExitCode {
    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("zview: {err}");
            return ExitCode::FAILURE;
        }
    };
    let _logging = logging::init(None);

    let mut app = App::with_config(config);
    build(&mut app);

    match app.run_tty() {
        Ok(()) if app.interrupt_flag().load(Ordering::SeqCst) => ExitCode::from(130),
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "zview failed");
            eprintln!("zview: {err}");
            ExitCode::FAILURE
        }
    }
}
