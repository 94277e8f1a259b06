//! Recorded draw stream.
//!
//! Responsibilities:
//! - implement [`DrawingSurface`](crate::surface::DrawingSurface) by recording
//! - preserve issue order (blobs draw in creation order)

mod cmd;
mod list;

pub use cmd::{DrawCmd, StrokeCmd};
pub use list::DrawList;
