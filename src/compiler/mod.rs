//! The compile pipeline: canvas in, deliverable file set out.

use crate::assemble::{self, EventNameTable};
use crate::canvas::{CanvasDefinition, IntoCanvas};
use crate::error::{CanvasConversionError, ExportError};
use crate::export::{
    ArchiveExport, ExportBundle, ExportRequest, ExportSettings, FilePreview, GeneratedFile,
    TargetLanguage, build_archive,
};
use crate::plan::BotPlan;
use crate::validate;
use tracing::{debug, info};

mod lowering;

/// Compiles one canvas into deliverable bot source for one target language.
///
/// A `Compiler` is a pure function of its inputs: repeated calls yield
/// byte-identical output, no state is shared across instances, and
/// concurrent compiles never interfere. The canvas is only ever read.
pub struct Compiler {
    canvas: CanvasDefinition,
    language: TargetLanguage,
    settings: ExportSettings,
    events: EventNameTable,
}

/// Configures and creates a [`Compiler`].
pub struct CompilerBuilder {
    canvas: CanvasDefinition,
    language: TargetLanguage,
    settings: ExportSettings,
    events: EventNameTable,
}

impl CompilerBuilder {
    pub fn new(
        canvas: CanvasDefinition,
        language: TargetLanguage,
        settings: ExportSettings,
    ) -> Self {
        Self {
            canvas,
            language,
            settings,
            events: EventNameTable::default(),
        }
    }

    /// Extends the built-in event lookup table with a custom tag mapping.
    /// `js_name` and `py_name` are the runtime event names emitted for the
    /// respective targets.
    pub fn with_event_mapping(
        mut self,
        tag: impl Into<String>,
        js_name: impl Into<String>,
        py_name: impl Into<String>,
    ) -> Self {
        self.events.insert(tag, js_name, py_name);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            canvas: self.canvas,
            language: self.language,
            settings: self.settings,
            events: self.events,
        }
    }
}

impl Compiler {
    pub fn builder(
        canvas: CanvasDefinition,
        language: TargetLanguage,
        settings: ExportSettings,
    ) -> CompilerBuilder {
        CompilerBuilder::new(canvas, language, settings)
    }

    /// Builds a compiler straight from an editor export request.
    pub fn from_request(request: ExportRequest) -> Result<Self, CanvasConversionError> {
        let canvas = request.canvas.into_canvas()?;
        Ok(Self::builder(canvas, request.language, request.settings).build())
    }

    /// Lowers the canvas into its language-agnostic emission plan.
    pub fn plan(&self) -> BotPlan {
        lowering::lower(&self.canvas)
    }

    /// Full delivery shape: every file, manifest data, setup notes.
    pub fn bundle(&self) -> ExportBundle {
        info!(
            language = %self.language,
            blocks = self.canvas.blocks.len(),
            "compiling canvas export"
        );
        let plan = self.plan();
        let files = assemble::assemble(&plan, self.language, &self.settings, &self.events);
        debug!(files = files.len(), "assembled export file set");
        ExportBundle {
            files,
            dependencies: assemble::dependencies(self.language),
            instructions: assemble::instructions(self.language, &plan),
        }
    }

    /// Preview delivery shape: metadata and diagnostics, no full content.
    pub fn preview(&self) -> Vec<FilePreview> {
        self.bundle()
            .files
            .into_iter()
            .map(|file| FilePreview {
                issues: validate::validate_file(self.language, &file),
                preview: file.content.chars().take(200).collect(),
                size: file.content.len(),
                path: file.path,
            })
            .collect()
    }

    /// Archive delivery shape: the full file set as one compressed stream.
    pub fn archive(&self) -> Result<ArchiveExport, ExportError> {
        let archive = build_archive(&self.bundle().files)?;
        debug!(bytes = archive.bytes.len(), "export archive built");
        Ok(archive)
    }

    /// Diagnostics for one generated file under this compiler's target.
    pub fn validate_file(&self, file: &GeneratedFile) -> Vec<String> {
        validate::validate_file(self.language, file)
    }
}
