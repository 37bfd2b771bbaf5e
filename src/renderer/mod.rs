//! Draw list generation
//!
//! The simulation never draws. Each frame it is turned into a `Frame` that the
//! platform paints however it likes.

pub mod frame;

pub use frame::{Frame, Rgb, Sprite, SpriteKind, TextAnchor, TextItem, build_frame};
