//! Concrete views.
//!
//! - CharView: fills its surface with one character
//! - WindowView: hosts a nested window
//! - SplitView: sibling windows along one axis
//! - ListView: plain, selecting and lazily loaded lists
//! - TextBox: multi-line editor

pub mod char_view;
pub mod list;
pub mod split;
pub mod text_box;
pub mod window_view;

pub use char_view::CharView;
pub use list::{ListItem, ListView, LoadItem, Loader, Page, Row, Span};
pub use split::{split_offsets, Axis, SplitView};
pub use text_box::TextBox;
pub use window_view::WindowView;
