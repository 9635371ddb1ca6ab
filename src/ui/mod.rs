//! Data shapes matching the visual editor's persisted canvas JSON.
//!
//! These structs mirror the editor format field for field (camelCase names
//! via serde aliases) and tolerate every UI-only attribute the compiler has
//! no use for. Convert them into the canonical model with
//! [`crate::canvas::IntoCanvas`] before compiling.

mod types;

pub use types::{CanvasState, UiBlock, UiBlockData, UiConnection, UiPosition};
