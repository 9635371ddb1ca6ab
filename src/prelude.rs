//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the kyto crate.
//! Import this module to get access to the core functionality without
//! having to import each type individually.

// Core compilation
pub use crate::compiler::{Compiler, CompilerBuilder};

// Canvas model and conversion
pub use crate::canvas::{
    BlockCategory, BlockDefinition, CanvasDefinition, ConnectionDefinition, IntoCanvas,
};

// Emission plan
pub use crate::plan::{BotPlan, CommandSpec, EventSpec, Statement};

// Editor-facing shapes
pub use crate::ui::CanvasState;

// Delivery shapes
pub use crate::export::{
    ArchiveExport, ExportBundle, ExportRequest, ExportSettings, FilePreview, GeneratedFile,
    PushOutcome, PushStatus, TargetLanguage,
};

// Error types
pub use crate::error::{CanvasConversionError, ExportError};
