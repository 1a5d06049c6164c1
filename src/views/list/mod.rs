//! Scrollable lists.
//!
//! One `ListView` covers the whole family; the constructor picks which of the
//! two orthogonal behaviours are on:
//!
//! - selecting: a highlighted row `n` moved by the navigation keys and a
//!   selected row `s` committed with Enter;
//! - loading: rows arrive in pages from a [`Loader`], with a trailing
//!   [`LoadItem`] sentinel kept as the last row while more may exist.
//!
//! Keys are resolved loading first, then selecting, then plain scrolling.

mod loader;
mod row;

pub use loader::{Loader, Page};
pub use row::{ListItem, LoadItem, Row, Span};

use crate::core::key::Key;
use crate::core::view::{EventResult, View, ViewCore};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Attr;
use crate::ui::core::surface::Surface;

type SelectHandler<T> = Box<dyn FnMut(usize, &T)>;

pub struct ListView<T> {
    core: ViewCore,
    rows: Vec<Row<T>>,
    /// First visible row.
    offset: usize,
    highlighted: usize,
    selected: Option<usize>,
    selecting: bool,
    loader: Option<Box<dyn Loader<T>>>,
    /// A load was requested; the next draw shows the banner.
    to_load: bool,
    /// The banner is up; the next draw runs the loader.
    loading: bool,
    on_select: Option<SelectHandler<T>>,
}

impl<T: ListItem + 'static> ListView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            core: ViewCore::new(),
            rows: items.into_iter().map(Row::Item).collect(),
            offset: 0,
            highlighted: 0,
            selected: None,
            selecting: false,
            loader: None,
            to_load: false,
            loading: false,
            on_select: None,
        }
    }

    pub fn selecting(items: Vec<T>) -> Self {
        let mut list = Self::new(items);
        list.selecting = true;
        list
    }

    /// A list fed by `loader`. An empty list requests its first page on the
    /// first draw; a non-empty one gets a sentinel and loads on demand.
    pub fn loading(items: Vec<T>, loader: impl Loader<T> + 'static) -> Self {
        let mut list = Self::new(items);
        list.loader = Some(Box::new(loader));
        if list.rows.is_empty() {
            list.to_load = true;
        } else {
            list.rows.push(Row::Load(LoadItem::default()));
        }
        list
    }

    pub fn loading_selecting(items: Vec<T>, loader: impl Loader<T> + 'static) -> Self {
        let mut list = Self::loading(items, loader);
        list.selecting = true;
        list
    }

    /// Called with the index and item of every committed selection.
    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(usize, &T) + 'static,
    {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.rows.get(index).and_then(Row::item)
    }

    /// Append an item, keeping the sentinel last.
    pub fn push(&mut self, item: T) {
        self.insert_row(Row::Item(item));
    }

    pub fn push_empty(&mut self) {
        self.insert_row(Row::Empty);
    }

    fn insert_row(&mut self, row: Row<T>) {
        let at = match self.rows.last() {
            Some(Row::Load(_)) => self.rows.len() - 1,
            _ => self.rows.len(),
        };
        self.rows.insert(at, row);
        self.touch();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|s| self.item(s))
    }

    /// A load is pending or in progress.
    pub fn is_loading(&self) -> bool {
        self.to_load || self.loading
    }

    /// The trailing sentinel, if any.
    pub fn sentinel(&self) -> Option<&LoadItem> {
        self.rows.last().and_then(Row::load_item)
    }

    /// Rows that can never be highlighted: out of range, spacers, and an
    /// exhausted sentinel.
    pub fn is_empty_row(&self, index: usize) -> bool {
        match self.rows.get(index) {
            None | Some(Row::Empty) => true,
            Some(row) => row.is_exhausted_sentinel(),
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.highlighted = 0;
        self.offset = 0;
        self.touch();
    }

    /// Bring the highlighted row into view: pull the offset down to it, or
    /// push it up so the row is the last visible one.
    pub fn scroll_to_highlighted(&mut self) {
        let n = self.highlighted;
        let h = self.viewport();
        if self.offset > n {
            self.offset = n;
            self.touch();
        }
        if self.offset + h <= n {
            self.offset = (n + 1 - h).min((self.rows.len() + 1).saturating_sub(h));
            self.touch();
        }
    }

    pub fn highlight_and_scroll(&mut self, index: usize) -> bool {
        if self.is_empty_row(index) {
            return false;
        }
        self.highlighted = index;
        self.touch();
        self.scroll_to_highlighted();
        true
    }

    /// Mark `index` selected without notifying `on_select`. Only real items
    /// can be selected.
    pub fn set_selection(&mut self, index: usize) -> bool {
        if !matches!(self.rows.get(index), Some(Row::Item(_))) {
            return false;
        }
        self.selected = Some(index);
        self.touch();
        true
    }

    /// Commit the highlighted row. On a sentinel with more data this requests
    /// a load instead; on an exhausted one the highlight steps back a row.
    /// Returns whether a selection was made.
    pub fn select(&mut self) -> bool {
        let n = self.highlighted;
        match self.rows.get(n) {
            Some(Row::Load(li)) if li.has_more => {
                if !self.loading {
                    self.to_load = true;
                }
                self.touch();
                false
            }
            Some(Row::Load(_)) => {
                self.highlighted = n.saturating_sub(1);
                self.touch();
                false
            }
            Some(Row::Item(_)) => {
                self.set_selection(n);
                if let (Some(handler), Some(Row::Item(item))) =
                    (self.on_select.as_mut(), self.rows.get(n))
                {
                    handler(n, item);
                }
                true
            }
            Some(Row::Empty) | None => false,
        }
    }

    pub fn unselect(&mut self) {
        self.selected = None;
        self.touch();
    }

    /// Start over from the first page. With `cleared` the current rows are
    /// kept as they are (the caller already emptied or reseeded them).
    pub fn reload(&mut self, cleared: bool) {
        if !cleared {
            self.rows.clear();
        }
        if matches!(self.rows.last(), Some(Row::Load(_))) {
            self.rows.pop();
        }
        self.offset = 0;
        self.highlighted = 0;
        self.selected = None;
        self.to_load = true;
        self.loading = false;
        tracing::debug!(cleared, "list reload");
        self.touch();
    }

    /// Fetch the next page and re-seat the sentinel after it. Returns `true`
    /// once the list is exhausted.
    pub fn load(&mut self) -> bool {
        self.to_load = false;
        self.loading = false;

        if let Some(Row::Load(li)) = self.rows.last_mut() {
            if !li.has_more {
                li.next = None;
                return true;
            }
        }
        let next = if matches!(self.rows.last(), Some(Row::Load(_))) {
            match self.rows.pop() {
                Some(Row::Load(li)) => li.next,
                _ => None,
            }
        } else {
            None
        };

        let Some(loader) = self.loader.as_mut() else {
            return true;
        };
        let page = loader.load(next.as_deref());
        let count = page.items.len();
        let has_more = page.has_more;
        self.rows.extend(page.items.into_iter().map(Row::Item));
        self.rows.push(Row::Load(LoadItem {
            has_more,
            next: if has_more { page.next } else { None },
        }));
        tracing::debug!(count, has_more, "list page loaded");
        self.touch();
        !has_more
    }

    fn viewport(&self) -> usize {
        self.core.height.max(1) as usize
    }

    /// Last row index the highlight may reach.
    fn last_navigable(&self) -> Option<usize> {
        let exhausted = self
            .rows
            .last()
            .is_some_and(Row::is_exhausted_sentinel) as usize;
        (self.rows.len() - exhausted).checked_sub(1)
    }

    fn move_highlight(&mut self, n: usize) {
        self.highlighted = n;
        self.touch();
        self.scroll_to_highlighted();
    }

    /// Step forward from `n` past spacers, staying within `last`.
    fn skip_empty_forward(&self, mut n: usize, last: usize) -> usize {
        while n < last && self.is_empty_row(n) {
            n += 1;
        }
        n
    }

    fn skip_empty_backward(&self, mut n: usize) -> usize {
        while n > 0 && self.is_empty_row(n) {
            n -= 1;
        }
        n
    }

    fn selecting_key(&mut self, key: Key) -> Option<EventResult> {
        let h = self.viewport();
        let last = self.last_navigable();
        match key {
            Key::UP => {
                if let Some(n) = (0..self.highlighted).rev().find(|&i| !self.is_empty_row(i)) {
                    self.highlighted = n;
                    self.touch();
                }
                self.scroll_to_highlighted();
            }
            Key::DOWN => {
                let last = last.unwrap_or(0);
                if let Some(n) =
                    (self.highlighted + 1..=last).find(|&i| !self.is_empty_row(i))
                {
                    self.highlighted = n;
                    self.touch();
                }
                self.scroll_to_highlighted();
            }
            Key::PAGE_UP => {
                let n = self.highlighted.saturating_sub(h);
                let n = self.skip_empty_forward(n, self.rows.len().saturating_sub(1));
                self.move_highlight(n);
            }
            Key::PAGE_DOWN => {
                let n = (self.highlighted + h).min(last.unwrap_or(0));
                let n = self.skip_empty_backward(n);
                self.move_highlight(n);
            }
            Key::HOME => {
                let n = self.skip_empty_forward(0, self.rows.len().saturating_sub(1));
                self.move_highlight(n);
            }
            Key::END => {
                let n = self.skip_empty_backward(last.unwrap_or(0));
                self.move_highlight(n);
            }
            Key::INSERT => {
                self.offset = self.offset.saturating_sub(1);
                self.touch();
            }
            Key::DELETE => {
                // A loading list's sentinel already stands in for the spare row.
                let navigable = last.map_or(0, |l| l + 1);
                let spare = usize::from(self.loader.is_none());
                self.offset = (self.offset + 1).min((navigable + spare).saturating_sub(h));
                self.touch();
            }
            Key::ENTER => {
                self.select();
            }
            _ => return None,
        }
        Some(EventResult::Consumed)
    }

    fn plain_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::UP => {
                self.offset = self.offset.saturating_sub(1);
                self.touch();
            }
            Key::DOWN => {
                self.offset = (self.offset + 1).min(self.rows.len().saturating_sub(1));
                self.touch();
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn row_spans(&self, index: usize) -> Vec<Span> {
        let mut overlay = Attr::NONE;
        if self.selecting {
            overlay |= Attr::when(index == self.highlighted, Attr::STANDOUT);
            overlay |= Attr::when(self.selected == Some(index), Attr::BOLD);
        }
        match &self.rows[index] {
            Row::Item(item) => item
                .spans()
                .into_iter()
                .map(|mut span| {
                    span.attr |= overlay;
                    span
                })
                .collect(),
            Row::Empty => Vec::new(),
            Row::Load(li) => {
                let (text, attr) = if !li.has_more {
                    ("End.", Attr::DIM)
                } else if self.loading {
                    ("Loading...", Attr::NONE)
                } else {
                    ("Load more...", Attr::NONE)
                };
                vec![Span::styled(text, attr | overlay)]
            }
        }
    }

    /// Sentinel with more data scrolled into view.
    fn wants_more(&self) -> bool {
        let end = self.offset + self.core.height as usize;
        match self.sentinel() {
            Some(li) => li.has_more && self.rows.len() - 1 < end,
            None => false,
        }
    }
}

impl<T: ListItem + 'static> View for ListView<T> {
    fn core(&self) -> &ViewCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.core.begin_draw(surface) {
            return true;
        }
        let height = self.core.height as usize;

        // Without a highlight to land on the sentinel, scrolling to it loads.
        if self.loader.is_some() && !self.selecting && !self.is_loading() && self.wants_more() {
            self.to_load = true;
        }

        let end = (self.offset + height).min(self.rows.len());
        for (y, i) in (self.offset..end).enumerate() {
            let mut x = 0;
            for span in self.row_spans(i) {
                match surface.put_str(Pos::new(x, y as u16), &span.text, span.attr) {
                    Ok(next) => x = next,
                    Err(_) => break,
                }
            }
        }

        if self.loader.is_none() {
            return false;
        }
        if self.is_loading() {
            let banner = format!("{:^width$}", "Loading", width = self.core.width as usize);
            let _ = surface.put_str(Pos::new(0, 0), &banner, Attr::STANDOUT);
            self.touch();
        }
        if self.to_load {
            self.to_load = false;
            self.loading = true;
            return true;
        }
        if self.loading {
            self.loading = false;
            self.load();
        }
        false
    }

    fn key(&mut self, key: Key) -> EventResult {
        if self.selecting {
            if let Some(result) = self.selecting_key(key) {
                return result;
            }
        }
        self.plain_key(key)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/list.rs"]
mod tests;
