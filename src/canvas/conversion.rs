use super::{BlockCategory, BlockDefinition, CanvasDefinition, ConnectionDefinition};
use crate::error::CanvasConversionError;

/// A trait for editor data models that can be converted into the compiler's
/// canonical [`CanvasDefinition`].
///
/// This is the extension point that keeps the compiler format-agnostic. The
/// crate ships an implementation for [`crate::ui::CanvasState`] (the visual
/// editor's own persistence format); implement it yourself to compile
/// canvases from any other source.
///
/// # Example
///
/// ```rust,no_run
/// use kyto::prelude::*;
/// use kyto::error::CanvasConversionError;
///
/// struct MyNode { id: String, op: String }
/// struct MyGraph { nodes: Vec<MyNode> }
///
/// impl IntoCanvas for MyGraph {
///     fn into_canvas(self) -> Result<CanvasDefinition, CanvasConversionError> {
///         let blocks = self
///             .nodes
///             .into_iter()
///             .map(|node| BlockDefinition {
///                 id: node.id,
///                 kind: node.op,
///                 category: BlockCategory::Unknown,
///                 label: String::new(),
///                 properties: Default::default(),
///             })
///             .collect();
///
///         Ok(CanvasDefinition {
///             blocks,
///             connections: vec![], // convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoCanvas {
    /// Consumes the object and converts it into a compiler-ready canvas.
    fn into_canvas(self) -> Result<CanvasDefinition, CanvasConversionError>;
}

impl IntoCanvas for crate::ui::CanvasState {
    fn into_canvas(self) -> Result<CanvasDefinition, CanvasConversionError> {
        let blocks = self
            .blocks
            .into_iter()
            .map(|block| BlockDefinition {
                id: block.id,
                kind: block.kind,
                category: BlockCategory::from_tag(&block.data.category),
                label: block.data.label,
                properties: block.data.properties,
            })
            .collect();

        let connections = self
            .connections
            .into_iter()
            .map(|conn| ConnectionDefinition {
                id: conn.id,
                source: conn.source,
                target: conn.target,
                source_handle: conn.source_handle,
                target_handle: conn.target_handle,
            })
            .collect();

        Ok(CanvasDefinition {
            blocks,
            connections,
        })
    }
}
