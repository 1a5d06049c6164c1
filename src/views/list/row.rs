use crate::ui::core::style::Attr;

/// A run of text drawn with one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub attr: Attr,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::styled(text, Attr::NONE)
    }

    pub fn styled(text: impl Into<String>, attr: Attr) -> Self {
        Self {
            text: text.into(),
            attr,
        }
    }
}

/// Something a list can render as one row.
pub trait ListItem {
    fn spans(&self) -> Vec<Span>;
}

impl ListItem for String {
    fn spans(&self) -> Vec<Span> {
        vec![Span::raw(self.as_str())]
    }
}

impl ListItem for &'static str {
    fn spans(&self) -> Vec<Span> {
        vec![Span::raw(*self)]
    }
}

/// Trailing placeholder of a lazily loaded list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadItem {
    pub has_more: bool,
    /// Opaque continuation handed back to the loader.
    pub next: Option<String>,
}

impl Default for LoadItem {
    fn default() -> Self {
        Self {
            has_more: true,
            next: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<T> {
    Item(T),
    /// Blank spacer; never highlighted or selected.
    Empty,
    Load(LoadItem),
}

impl<T> Row<T> {
    pub fn item(&self) -> Option<&T> {
        match self {
            Row::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn load_item(&self) -> Option<&LoadItem> {
        match self {
            Row::Load(li) => Some(li),
            _ => None,
        }
    }

    pub fn is_exhausted_sentinel(&self) -> bool {
        matches!(self, Row::Load(li) if !li.has_more)
    }
}
