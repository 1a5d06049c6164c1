use super::*;
use crate::config::UiConfig;
use crate::core::view::ViewCore;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Probe {
    core: ViewCore,
    name: &'static str,
    consumes: Option<Key>,
    fill: char,
    log: Log,
}

impl Probe {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            core: ViewCore::new(),
            name,
            consumes: None,
            fill: name.chars().next().unwrap_or('?'),
            log: log.clone(),
        }
    }

    fn consuming(mut self, key: Key) -> Self {
        self.consumes = Some(key);
        self
    }

    fn transparent(mut self) -> Self {
        self.core.transparent = true;
        self
    }
}

impl View for Probe {
    fn core(&self) -> &ViewCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    fn die(&mut self) -> bool {
        let already = self.core.kill();
        if !already {
            self.log.borrow_mut().push(format!("die {}", self.name));
        }
        already
    }

    fn proc(&mut self) -> bool {
        self.log.borrow_mut().push(format!("proc {}", self.name));
        false
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.core.begin_draw(surface) {
            return true;
        }
        self.log.borrow_mut().push(format!("draw {}", self.name));
        let _ = surface.put_char(Pos::new(0, 0), self.fill, Attr::NONE);
        false
    }

    fn key(&mut self, key: Key) -> EventResult {
        self.log.borrow_mut().push(format!("key {}", self.name));
        if self.consumes == Some(key) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn entries(log: &Log, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|e| e.starts_with(prefix))
        .cloned()
        .collect()
}

fn stacked(log: &Log) -> Window {
    let mut win = Window::new();
    win.add_view(Probe::new("A", log).consuming(Key::from('x')));
    win.add_view(Probe::new("B", log));
    win.add_view(Probe::new("C", log));
    win.init();
    win
}

#[test]
fn keys_travel_top_to_bottom_until_consumed() {
    let log = log();
    let mut win = stacked(&log);

    assert_eq!(win.key(Key::from('x')), EventResult::Consumed);
    assert_eq!(entries(&log, "key"), ["key C", "key B", "key A"]);
}

#[test]
fn first_consumer_stops_propagation() {
    let log = log();
    let mut win = Window::new();
    win.add_view(Probe::new("A", &log).consuming(Key::from('x')));
    win.add_view(Probe::new("B", &log).consuming(Key::from('x')));

    win.key(Key::from('x'));
    assert_eq!(entries(&log, "key"), ["key B"]);
}

#[test]
fn unconsumed_key_falls_back_to_handler_table() {
    let log = log();
    let mut win = stacked(&log);
    let hits = Rc::new(RefCell::new(Vec::new()));

    let seen = hits.clone();
    win.on_key(Key::from('q'), move |_, k| {
        seen.borrow_mut().push(format!("exact {}", k.code()));
        EventResult::Consumed
    });
    let seen = hits.clone();
    win.on_unknown_key(move |_, k| {
        seen.borrow_mut().push(format!("unknown {}", k.code()));
        EventResult::Consumed
    });

    assert_eq!(win.key(Key::from('q')), EventResult::Consumed);
    assert_eq!(win.key(Key::from('z')), EventResult::Consumed);
    // Handlers survive being called.
    assert_eq!(win.key(Key::from('q')), EventResult::Consumed);
    assert_eq!(*hits.borrow(), ["exact 113", "unknown 122", "exact 113"]);
}

#[test]
fn unhandled_key_without_fallback_is_ignored() {
    let log = log();
    let mut win = stacked(&log);
    assert_eq!(win.key(Key::from('z')), EventResult::Ignored);
}

#[test]
fn handlers_can_mutate_the_window() {
    let log = log();
    let mut win = stacked(&log);
    win.on_key(Key::ctrl('Q'), |w, _| {
        w.clear();
        EventResult::Consumed
    });

    win.key(Key::ctrl('Q'));
    assert!(win.is_empty());
    assert_eq!(entries(&log, "die").len(), 3);
}

#[test]
fn idle_key_reaches_exact_handler_but_not_fallback() {
    let mut win = Window::new();
    let idle = Rc::new(RefCell::new(0));
    let unknown = Rc::new(RefCell::new(0));

    let n = idle.clone();
    win.on_key(Key::NONE, move |_, _| {
        *n.borrow_mut() += 1;
        EventResult::Consumed
    });
    let n = unknown.clone();
    win.on_unknown_key(move |_, _| {
        *n.borrow_mut() += 1;
        EventResult::Consumed
    });

    win.key(Key::NONE);
    assert_eq!(*idle.borrow(), 1);
    assert_eq!(*unknown.borrow(), 0);
}

#[test]
fn resize_touches_every_view_even_when_consumed() {
    let log = log();
    let mut win = Window::new();
    win.add_view(Probe::new("A", &log));
    win.add_view(Probe::new("B", &log).consuming(Key::RESIZE));

    win.key(Key::RESIZE);
    assert!(win.views().all(|v| v.is_touched()));
}

#[test]
fn repeats_within_the_release_window_are_swallowed() {
    let log = log();
    let mut win = stacked(&log);
    let t0 = Instant::now();
    let x = Key::from('x');

    assert!(win.key_at(x, t0).is_consumed());
    win.wait_key_release_at(x, t0);

    assert_eq!(
        win.key_at(x, t0 + Duration::from_millis(30)),
        EventResult::Ignored
    );
    assert_eq!(
        win.key_at(x, t0 + Duration::from_millis(40)),
        EventResult::Ignored
    );
    assert_eq!(entries(&log, "key A").len(), 1);

    // 60ms after the last repeat: a new press.
    assert!(win
        .key_at(x, t0 + Duration::from_millis(100))
        .is_consumed());
    assert!(!win.is_waiting_release());
    assert_eq!(entries(&log, "key A").len(), 2);
}

#[test]
fn a_different_key_disarms_and_is_processed() {
    let log = log();
    let mut win = stacked(&log);
    let t0 = Instant::now();
    win.wait_key_release_at(Key::from('x'), t0);

    win.key_at(Key::from('y'), t0 + Duration::from_millis(5));
    assert!(!win.is_waiting_release());
    assert_eq!(entries(&log, "key C").len(), 1);
}

#[test]
fn consumed_until_release_arms_the_debounce() {
    let mut win = Window::new();
    win.on_key(Key::from(' '), |_, _| EventResult::ConsumedUntilRelease);
    let t0 = Instant::now();

    assert_eq!(
        win.key_at(Key::from(' '), t0),
        EventResult::ConsumedUntilRelease
    );
    assert!(win.is_waiting_release());
    assert_eq!(
        win.key_at(Key::from(' '), t0 + Duration::from_millis(20)),
        EventResult::Ignored
    );
}

#[test]
fn release_window_comes_from_host_config() {
    let host = Rc::new(Host::new(UiConfig {
        release_debounce_ms: 200,
        ..UiConfig::default()
    }));
    let mut win = Window::new();
    win.attach(Rc::downgrade(&host));
    win.init();

    let t0 = Instant::now();
    win.wait_key_release_at(Key::from('x'), t0);
    assert_eq!(
        win.key_at(Key::from('x'), t0 + Duration::from_millis(150)),
        EventResult::Ignored
    );
}

#[test]
fn die_cascades_once() {
    let log = log();
    let mut win = stacked(&log);

    assert!(!win.die());
    assert_eq!(entries(&log, "die"), ["die A", "die B", "die C"]);
    assert!(win.die());
    assert_eq!(entries(&log, "die").len(), 3);
}

#[test]
fn add_view_inits_only_after_window_init() {
    let log = log();
    let mut win = Window::new();
    win.add_view(Probe::new("A", &log));
    assert!(!win.touched());

    win.init();
    assert!(win.touched());

    let mut grid = Grid::new(Size::new(2, 1));
    win.draw(&mut grid);
    assert!(!win.touched());

    win.add_view(Probe::new("B", &log));
    assert!(win.top().unwrap().is_touched());
}

#[test]
fn pop_view_kills_top_and_touches_new_top() {
    let log = log();
    let mut win = stacked(&log);
    let mut grid = Grid::new(Size::new(2, 1));
    win.draw(&mut grid);

    assert!(win.pop_view());
    assert_eq!(entries(&log, "die"), ["die C"]);
    assert_eq!(win.len(), 2);
    assert!(win.top().unwrap().is_touched());

    let mut empty = Window::new();
    assert!(!empty.pop_view());
}

#[test]
fn proc_drops_dead_views_and_touches_the_next() {
    let log = log();
    let mut win = stacked(&log);
    let mut grid = Grid::new(Size::new(2, 1));
    win.draw(&mut grid);

    win.top_mut().unwrap().die();
    win.proc();

    assert_eq!(win.len(), 2);
    assert_eq!(entries(&log, "proc"), ["proc B", "proc A"]);
    let touched: Vec<bool> = win.views().map(|v| v.is_touched()).collect();
    assert_eq!(touched, [false, true]);
}

#[test]
fn dirty_transparent_view_touches_the_view_below() {
    let log = log();
    let mut win = Window::new();
    win.add_view(Probe::new("A", &log));
    win.add_view(Probe::new("B", &log));
    win.add_view(Probe::new("T", &log).transparent());
    win.init();
    let mut grid = Grid::new(Size::new(2, 1));
    win.draw(&mut grid);

    win.top_mut().unwrap().touch();
    win.proc();
    let touched: Vec<bool> = win.views().map(|v| v.is_touched()).collect();
    assert_eq!(touched, [false, true, true]);
}

#[test]
fn draw_paints_bottom_to_top() {
    let log = log();
    let mut win = Window::new();
    win.add_view(Probe::new("A", &log));
    win.add_view(Probe::new("B", &log).transparent());
    win.init();
    win.touch_all();

    let mut grid = Grid::new(Size::new(3, 1));
    win.draw(&mut grid);
    assert_eq!(entries(&log, "draw"), ["draw A", "draw B"]);
    assert_eq!(grid.row_text(0), "B  ");
}

#[test]
fn debug_overlay_is_centred_and_cleared_by_next_key() {
    let mut win = Window::new();
    let mut grid = Grid::new(Size::new(12, 3));
    win.draw(&mut grid);

    win.debug_out("hi");
    win.draw(&mut grid);
    assert_eq!(grid.row_text(0), "    hi      ");
    assert_eq!(grid.cell(Pos::new(4, 0)).unwrap().attr, Attr::STANDOUT);

    win.key(Key::from('a'));
    assert!(win.debug_lines().is_empty());
}

#[test]
fn debug_overlay_wraps_to_half_width() {
    let mut win = Window::new();
    let mut grid = Grid::new(Size::new(10, 4));
    win.draw(&mut grid);

    win.debug_out("aaa bbb ccc");
    assert_eq!(win.debug_lines(), ["aaa", "bbb", "ccc"]);
}

#[test]
fn pane_renders_window_into_region() {
    let log = log();
    let mut pane = Pane::new();
    pane.window_mut().add_view(Probe::new("P", &log));
    pane.window_mut().init();

    let mut screen = Grid::new(Size::new(4, 2));
    pane.render(&mut screen, Rect::new(2, 1, 2, 1));
    assert_eq!(pane.pad().size(), Size::new(2, 1));
    assert_eq!(screen.row_text(1), "  P ");
}
