//! Engine core: keys, the View contract, windows and the App loop.

pub mod app;
pub mod host;
pub mod key;
pub mod view;
pub mod window;

pub use app::App;
pub use host::Host;
pub use key::Key;
pub use view::{EventResult, View, ViewCore};
pub use window::{KeyHandler, Pane, Window};
