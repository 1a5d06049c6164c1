/// One batch of rows fetched by a [`Loader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation for the following page. Ignored when `has_more` is false.
    pub next: Option<String>,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn more(items: Vec<T>, next: impl Into<String>) -> Self {
        Self {
            items,
            next: Some(next.into()),
            has_more: true,
        }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next: None,
            has_more: false,
        }
    }
}

/// Source of pages for a lazily loaded list. `next` is `None` for the first
/// page and after a reload.
pub trait Loader<T> {
    fn load(&mut self, next: Option<&str>) -> Page<T>;
}

impl<T, F> Loader<T> for F
where
    F: FnMut(Option<&str>) -> Page<T>,
{
    fn load(&mut self, next: Option<&str>) -> Page<T> {
        self(next)
    }
}
