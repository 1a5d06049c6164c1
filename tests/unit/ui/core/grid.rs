use super::*;

#[test]
fn put_str_writes_and_returns_next_column() {
    let mut grid = Grid::new(Size::new(5, 2));
    let end = grid.put_str(Pos::new(1, 0), "ab", Attr::BOLD).unwrap();
    assert_eq!(end, 3);
    assert_eq!(grid.row_text(0), " ab  ");
    assert_eq!(grid.cell(Pos::new(1, 0)).unwrap().attr, Attr::BOLD);
}

#[test]
fn put_str_clips_and_reports_overflow() {
    let mut grid = Grid::new(Size::new(3, 1));
    let res = grid.put_str(Pos::new(0, 0), "abcdef", Attr::NONE);
    assert_eq!(res, Err(SurfaceError::WriteOverflow));
    assert_eq!(grid.row_text(0), "abc");
}

#[test]
fn put_char_on_last_cell_succeeds_but_beyond_fails() {
    let mut grid = Grid::new(Size::new(2, 2));
    assert!(grid.put_char(Pos::new(1, 1), 'x', Attr::NONE).is_ok());
    assert_eq!(
        grid.put_char(Pos::new(2, 1), 'y', Attr::NONE),
        Err(SurfaceError::WriteOverflow)
    );
    assert_eq!(grid.row_text(1), " x");
}

#[test]
fn wide_glyphs_do_not_split_at_the_edge() {
    let mut grid = Grid::new(Size::new(3, 1));
    let res = grid.put_str(Pos::new(0, 0), "a你好", Attr::NONE);
    assert_eq!(res, Err(SurfaceError::WriteOverflow));
    assert_eq!(grid.cell(Pos::new(1, 0)).unwrap().symbol, '你');
    assert_eq!(grid.cell(Pos::new(2, 0)).unwrap().symbol, ' ');
}

#[test]
fn erase_blanks_every_cell() {
    let mut grid = Grid::new(Size::new(2, 1));
    grid.put_str(Pos::new(0, 0), "xy", Attr::REVERSE).unwrap();
    grid.erase();
    assert_eq!(grid.row_text(0), "  ");
    assert_eq!(grid.cell(Pos::new(0, 0)).unwrap().attr, Attr::NONE);
}

#[test]
fn resize_discards_contents_only_on_change() {
    let mut grid = Grid::new(Size::new(2, 1));
    grid.put_str(Pos::new(0, 0), "xy", Attr::NONE).unwrap();
    grid.resize(Size::new(2, 1));
    assert_eq!(grid.row_text(0), "xy");
    grid.resize(Size::new(3, 2));
    assert_eq!(grid.size(), Size::new(3, 2));
    assert_eq!(grid.row_text(0), "   ");
}

#[test]
fn blit_copies_into_region_and_clips() {
    let mut pad = Grid::new(Size::new(3, 2));
    pad.put_str(Pos::new(0, 0), "abc", Attr::NONE).unwrap();
    pad.put_str(Pos::new(0, 1), "def", Attr::DIM).unwrap();

    let mut screen = Grid::new(Size::new(4, 3));
    screen.blit(&pad, Rect::new(2, 1, 3, 2));
    assert_eq!(screen.row_text(0), "    ");
    assert_eq!(screen.row_text(1), "  ab");
    assert_eq!(screen.row_text(2), "  de");
    assert_eq!(screen.cell(Pos::new(2, 2)).unwrap().attr, Attr::DIM);
}
