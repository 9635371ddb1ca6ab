//! # Kyto - Canvas-to-Source Bot Compiler
//!
//! **Kyto** turns user-authored canvases (directed graphs of typed blocks
//! joined by typed connections) into complete, runnable Discord bot
//! projects for either the discord.js or discord.py ecosystem. Compilation
//! is deterministic: the same canvas, settings and target always produce
//! byte-identical output.
//!
//! ## Core Workflow
//!
//! The compiler is format-agnostic. It operates on a canonical canvas
//! model and never mutates or persists what it is given:
//!
//! 1.  **Load Your Canvas**: Parse the editor's JSON into
//!     [`ui::CanvasState`], or parse your own format into your own structs.
//! 2.  **Convert**: Use the [`canvas::IntoCanvas`] trait to translate into
//!     the canonical [`canvas::CanvasDefinition`]. The `ui` shapes already
//!     implement it.
//! 3.  **Compile**: Create a [`compiler::Compiler`] with the builder, then
//!     request one of the three delivery shapes: `preview()` (paths, sizes
//!     and validator diagnostics), `bundle()` (every file plus manifest
//!     data) or `archive()` (one compressed zip stream).
//!
//! Malformed canvases never abort a compile: dangling connections are
//! filtered, unknown block kinds contribute nothing, and cyclic chains are
//! truncated. Only archive serialization can fail.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kyto::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let canvas_json = std::fs::read_to_string("canvas.json")?;
//!     let state: CanvasState = serde_json::from_str(&canvas_json)?;
//!
//!     let settings = ExportSettings {
//!         prefix: "!".to_string(),
//!         bot_token: "your-bot-token".to_string(),
//!         client_id: "your-client-id".to_string(),
//!         intents: vec![],
//!     };
//!
//!     let compiler = Compiler::builder(
//!         state.into_canvas()?,
//!         TargetLanguage::DiscordJs,
//!         settings,
//!     )
//!     .build();
//!
//!     let bundle = compiler.bundle();
//!     for file in &bundle.files {
//!         println!("{} ({} bytes)", file.path, file.content.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod compiler;
pub mod error;
pub mod export;
pub mod plan;
pub mod prelude;
pub mod ui;
pub mod validate;

// File composition and rendering are reached through `Compiler`.
mod assemble;
mod render;
