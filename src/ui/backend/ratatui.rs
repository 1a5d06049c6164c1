use super::Terminal;
use crate::core::key::Key;
use crate::tui::crossterm::into_key;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::grid::Grid;
use crate::ui::core::style::Attr;
use crate::ui::core::surface::Surface;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use std::io;
use std::time::Duration;

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: ratatui::Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = ratatui::Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Terminal for RatatuiTerminal {
    fn size(&self) -> io::Result<Size> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Size::new(w, h))
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        Ok(into_key(crossterm::event::read()?))
    }

    fn present(&mut self, frame: &Grid) -> io::Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            f.render_widget(GridWidget { grid: frame }, area);
        })?;
        Ok(())
    }
}

struct GridWidget<'a> {
    grid: &'a Grid,
}

impl Widget for GridWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let size = self.grid.size();
        let w = size.w.min(area.width);
        let h = size.h.min(area.height);
        for y in 0..h {
            for x in 0..w {
                let Some(src) = self.grid.cell(Pos::new(x, y)) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(src.symbol)
                        .set_style(RStyle::default().add_modifier(to_ratatui_mods(src.attr)));
                }
            }
        }
    }
}

fn to_ratatui_mods(attr: Attr) -> RModifier {
    let mut out = RModifier::empty();
    if attr.contains(Attr::BOLD) {
        out |= RModifier::BOLD;
    }
    if attr.contains(Attr::DIM) {
        out |= RModifier::DIM;
    }
    if attr.contains(Attr::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}
