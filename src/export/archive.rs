use super::GeneratedFile;
use crate::error::ExportError;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Suggested download name for the archive delivery mode.
pub const ARCHIVE_FILE_NAME: &str = "kyto-export.zip";

/// MIME type for the archive delivery mode.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// The archive delivery shape: the full file set as one compressed stream.
#[derive(Debug, Clone)]
pub struct ArchiveExport {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub content_type: &'static str,
}

/// Serializes the assembled files into a deflate-compressed zip stream.
///
/// Unlike validator diagnostics, a failure here is fatal for the whole
/// request. The archive strictly depends on all fragments being generated
/// first; there is no partial-archive streaming.
pub(crate) fn build_archive(files: &[GeneratedFile]) -> Result<ArchiveExport, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamp keeps repeated exports byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for file in files {
        writer.start_file(file.path.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(ArchiveExport {
        bytes: cursor.into_inner(),
        file_name: ARCHIVE_FILE_NAME,
        content_type: ARCHIVE_CONTENT_TYPE,
    })
}
