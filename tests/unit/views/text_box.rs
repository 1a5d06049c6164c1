use super::*;
use crate::config::UiConfig;
use crate::core::host::Host;
use crate::ui::core::geom::Size;
use crate::ui::core::grid::Grid;
use std::rc::Rc;

fn render(tb: &mut TextBox, w: u16, h: u16) -> Grid {
    let mut grid = Grid::new(Size::new(w, h));
    tb.touch();
    tb.draw(&mut grid);
    grid
}

fn press(tb: &mut TextBox, keys: &[Key]) {
    for &k in keys {
        tb.key(k);
    }
}

fn type_str(tb: &mut TextBox, s: &str) {
    for ch in s.chars() {
        assert!(tb.key(Key::from(ch)).is_consumed(), "{ch:?} not consumed");
    }
}

fn numbered_lines(n: usize) -> String {
    (0..n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
}

fn attr_at(grid: &Grid, x: u16, y: u16) -> Attr {
    grid.cell(Pos::new(x, y)).map(|c| c.attr).unwrap_or_default()
}

#[test]
fn typed_text_reads_back() {
    let mut tb = TextBox::new();
    type_str(&mut tb, "hello, wörld\tend");
    assert_eq!(tb.text(), "hello, wörld\tend");
    assert_eq!(tb.cursor(), (0, 16));
}

#[test]
fn enter_splits_the_line_at_the_cursor() {
    let mut tb = TextBox::with_text("abcdef");
    press(&mut tb, &[Key::RIGHT, Key::RIGHT, Key::RIGHT, Key::ENTER]);
    assert_eq!(tb.text(), "abc\ndef");
    assert_eq!(tb.cursor(), (1, 0));
    assert_eq!(tb.current_line(), "def");
    assert_eq!(tb.line_count(), 2);
}

#[test]
fn typed_newlines_build_lines() {
    let mut tb = TextBox::new();
    type_str(&mut tb, "ab\ncd\n");
    assert_eq!(tb.text(), "ab\ncd\n");
    assert_eq!(tb.line_count(), 3);
    assert_eq!(tb.cursor(), (2, 0));
}

#[test]
fn backspace_removes_and_joins() {
    let mut tb = TextBox::with_text("ab\ncd");
    press(&mut tb, &[Key::DOWN, Key::RIGHT, Key::BACKSPACE]);
    assert_eq!(tb.text(), "ab\nd");
    assert_eq!(tb.cursor(), (1, 0));

    press(&mut tb, &[Key::DEL]);
    assert_eq!(tb.text(), "abd");
    assert_eq!(tb.cursor(), (0, 2));

    press(&mut tb, &[Key::HOME, Key::BS]);
    assert_eq!(tb.text(), "abd");
    assert_eq!(tb.cursor(), (0, 0));
}

#[test]
fn delete_removes_forward_and_joins_at_line_end() {
    let mut tb = TextBox::with_text("ab\ncd");
    press(&mut tb, &[Key::DELETE]);
    assert_eq!(tb.text(), "b\ncd");

    press(&mut tb, &[Key::END, Key::DELETE]);
    assert_eq!(tb.text(), "bcd");
    assert_eq!(tb.cursor(), (0, 1));

    press(&mut tb, &[Key::END, Key::DELETE]);
    assert_eq!(tb.text(), "bcd");
}

#[test]
fn delete_on_an_empty_line_folds_it_into_the_line_above() {
    let mut tb = TextBox::with_text("ab\n\ncd");
    press(&mut tb, &[Key::DOWN, Key::DELETE]);
    assert_eq!(tb.text(), "ab\ncd");
    assert_eq!(tb.cursor(), (0, 2));

    // The first line has nothing above it, so the next line is pulled up.
    let mut tb = TextBox::with_text("\ncd");
    press(&mut tb, &[Key::DELETE]);
    assert_eq!(tb.text(), "cd");
    assert_eq!(tb.cursor(), (0, 0));
}

#[test]
fn multibyte_characters_edit_by_character() {
    let mut tb = TextBox::with_text("añb");
    press(&mut tb, &[Key::RIGHT, Key::DELETE]);
    assert_eq!(tb.text(), "ab");
    type_str(&mut tb, "é");
    press(&mut tb, &[Key::BACKSPACE, Key::BACKSPACE]);
    assert_eq!(tb.text(), "b");
}

#[test]
fn ctrl_k_cuts_then_joins() {
    let mut tb = TextBox::with_text("hello\nworld");
    press(&mut tb, &[Key::RIGHT, Key::RIGHT, Key::ctrl('k')]);
    assert_eq!(tb.text(), "he\nworld");

    press(&mut tb, &[Key::ctrl('K')]);
    assert_eq!(tb.text(), "heworld");
    assert_eq!(tb.cursor(), (0, 2));
}

#[test]
fn horizontal_moves_wrap_across_lines() {
    let mut tb = TextBox::with_text("ab\ncd");
    press(&mut tb, &[Key::END, Key::RIGHT]);
    assert_eq!(tb.cursor(), (1, 0));

    press(&mut tb, &[Key::LEFT]);
    assert_eq!(tb.cursor(), (0, 2));

    press(&mut tb, &[Key::HOME, Key::LEFT]);
    assert_eq!(tb.cursor(), (0, 0));

    press(&mut tb, &[Key::DOWN, Key::END, Key::RIGHT]);
    assert_eq!(tb.cursor(), (1, 2));
}

#[test]
fn vertical_moves_clamp_the_column() {
    let mut tb = TextBox::with_text("long line\nab\nlonger line");
    press(&mut tb, &[Key::END, Key::DOWN]);
    assert_eq!(tb.cursor(), (1, 2));
    press(&mut tb, &[Key::DOWN, Key::DOWN]);
    assert_eq!(tb.cursor(), (2, 2));
    press(&mut tb, &[Key::UP, Key::UP, Key::UP]);
    assert_eq!(tb.cursor(), (0, 2));
}

#[test]
fn paging_moves_by_the_viewport() {
    let mut tb = TextBox::with_text(&numbered_lines(30));
    render(&mut tb, 10, 10);

    press(&mut tb, &[Key::PAGE_DOWN]);
    assert_eq!((tb.cursor(), tb.scroll_offset()), ((10, 0), 10));
    press(&mut tb, &[Key::PAGE_DOWN, Key::PAGE_DOWN]);
    assert_eq!((tb.cursor(), tb.scroll_offset()), ((29, 0), 20));
    press(&mut tb, &[Key::PAGE_DOWN]);
    assert_eq!(tb.cursor(), (29, 7));

    press(&mut tb, &[Key::PAGE_UP]);
    assert_eq!((tb.cursor().0, tb.scroll_offset()), (19, 10));
    press(&mut tb, &[Key::PAGE_UP, Key::PAGE_UP]);
    assert_eq!((tb.cursor(), tb.scroll_offset()), ((0, 6), 0));
    press(&mut tb, &[Key::PAGE_UP]);
    assert_eq!(tb.cursor(), (0, 0));
}

#[test]
fn document_extremes_and_view_scrolling() {
    let mut tb = TextBox::with_text(&numbered_lines(30));
    render(&mut tb, 10, 10);

    press(&mut tb, &[Key::CTRL_END]);
    assert_eq!((tb.cursor(), tb.scroll_offset()), ((29, 7), 20));

    press(&mut tb, &[Key::ALT_UP, Key::ALT_UP]);
    assert_eq!(tb.scroll_offset(), 18);
    assert_eq!(tb.cursor(), (29, 7));

    press(&mut tb, &[Key::CTRL_HOME]);
    assert_eq!((tb.cursor(), tb.scroll_offset()), ((0, 0), 0));
    press(&mut tb, &[Key::ALT_UP, Key::ALT_DOWN]);
    assert_eq!(tb.scroll_offset(), 1);
}

#[test]
fn moving_down_scrolls_to_follow_the_cursor() {
    let mut tb = TextBox::with_text(&numbered_lines(5));
    render(&mut tb, 10, 3);
    press(&mut tb, &[Key::DOWN, Key::DOWN, Key::DOWN]);
    assert_eq!(tb.scroll_offset(), 1);

    let grid = render(&mut tb, 10, 3);
    assert_eq!(
        grid.rows().collect::<Vec<_>>(),
        ["line 1    ", "line 2    ", "line 3    "]
    );
}

#[test]
fn caret_is_drawn_in_reverse_video() {
    let mut tb = TextBox::with_text("ab\ncd");
    let grid = render(&mut tb, 4, 3);
    assert_eq!(grid.rows().collect::<Vec<_>>(), ["ab  ", "cd  ", "    "]);
    assert_eq!(attr_at(&grid, 0, 0), Attr::STANDOUT);
    assert_eq!(attr_at(&grid, 1, 0), Attr::NONE);

    press(&mut tb, &[Key::END]);
    let grid = render(&mut tb, 4, 3);
    assert_eq!(attr_at(&grid, 0, 0), Attr::NONE);
    assert_eq!(attr_at(&grid, 2, 0), Attr::STANDOUT);
}

#[test]
fn long_lines_soft_wrap() {
    let mut tb = TextBox::with_text("abcdef\ngh");
    let grid = render(&mut tb, 4, 4);
    assert_eq!(
        grid.rows().collect::<Vec<_>>(),
        ["abcd", "ef  ", "gh  ", "    "]
    );
}

#[test]
fn caret_after_a_full_row_wraps() {
    let mut tb = TextBox::with_text("abcd");
    press(&mut tb, &[Key::END]);
    let grid = render(&mut tb, 4, 2);
    assert_eq!(attr_at(&grid, 0, 1), Attr::STANDOUT);
}

#[test]
fn tabs_advance_to_the_next_stop() {
    let mut tb = TextBox::with_text("a\tb\n\tc").with_tab_size(4);
    let grid = render(&mut tb, 6, 2);
    assert_eq!(grid.rows().collect::<Vec<_>>(), ["a   b ", "    c "]);
}

#[test]
fn tab_size_comes_from_the_host() {
    let host = Rc::new(Host::new(UiConfig {
        tab_size: 2,
        ..UiConfig::default()
    }));
    let mut tb = TextBox::with_text("\tx");
    tb.attach(Rc::downgrade(&host));
    tb.init();
    assert_eq!(tb.tab_size(), 2);

    let mut fixed = TextBox::new().with_tab_size(3);
    fixed.attach(Rc::downgrade(&host));
    fixed.init();
    assert_eq!(fixed.tab_size(), 3);
}

#[test]
fn line_numbers_are_right_aligned_and_dim() {
    let text = (b'a'..=b'j')
        .map(|c| (c as char).to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let mut tb = TextBox::with_text(&text).with_line_numbers();
    let grid = render(&mut tb, 6, 2);

    assert_eq!(grid.rows().collect::<Vec<_>>(), [" 1 a  ", " 2 b  "]);
    assert_eq!(attr_at(&grid, 1, 0), Attr::DIM);
    assert_eq!(attr_at(&grid, 3, 0), Attr::STANDOUT);
}

#[test]
fn set_text_clamps_the_cursor() {
    let mut tb = TextBox::with_text(&numbered_lines(5));
    press(&mut tb, &[Key::CTRL_END]);
    tb.set_text("x");
    assert_eq!(tb.cursor(), (0, 1));
    assert_eq!(tb.scroll_offset(), 0);

    tb.set_text("");
    assert_eq!(tb.line_count(), 1);
    assert_eq!(tb.cursor(), (0, 0));
    assert_eq!(tb.text(), "");
}

#[test]
fn unknown_keys_are_ignored() {
    let mut tb = TextBox::new();
    assert!(tb.key(Key::f(1)).is_ignored());
    assert!(tb.key(Key::ESC).is_ignored());
    assert!(tb.key(Key::NONE).is_ignored());
    assert_eq!(tb.text(), "");
}
