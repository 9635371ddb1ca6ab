use thiserror::Error;

/// Errors that can occur when converting an editor canvas into the
/// compiler's canonical `CanvasDefinition`.
///
/// Graph-shape problems (dangling connections, unknown block kinds, cycles)
/// are deliberately *not* errors anywhere in this crate; the compiler
/// tolerates them structurally. Conversion errors exist for custom
/// `IntoCanvas` implementations that parse external formats.
#[derive(Error, Debug, Clone)]
pub enum CanvasConversionError {
    #[error("Failed to parse canvas JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid canvas data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while packaging an export.
///
/// Archive failures are the one request-fatal case in the pipeline; every
/// other anomaly surfaces as per-file validator diagnostics instead.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to build export archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to write archive entry: {0}")]
    ArchiveIo(#[from] std::io::Error),
}
