pub mod geom;
pub mod grid;
pub mod style;
pub mod surface;

pub use geom::{Pos, Rect, Size};
pub use grid::{Cell, Grid};
pub use style::Attr;
pub use surface::{Surface, SurfaceError};
