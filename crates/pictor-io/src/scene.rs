//! Declarative JSON scene descriptions.
//!
//! A scene file names a canvas and a tree of layout nodes:
//!
//! ```json
//! {
//!   "canvas": { "width": 200, "height": 200 },
//!   "root": {
//!     "type": "align",
//!     "anchor": "center",
//!     "child": { "type": "coloredBox", "width": 50, "height": 50, "color": "red" }
//!   }
//! }
//! ```
//!
//! Colors are either `[r, g, b, a]` arrays or palette names. `Painter`
//! nodes wrap closures and have no JSON form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pictor_core::{CanvasConfig, Color, PixelBuffer, RasterError};
use pictor_layout::{
    render, Align, Anchor, Border, BoxedRenderObject, ColoredBox, Column, EdgeInsets,
    MainAxisAlignment, MainAxisSize, Padding, Row, Stack, Text, TextService,
};

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid node at {path}: {message}")]
    InvalidNode { path: String, message: String },

    #[error("Render failed: {0}")]
    Render(#[from] RasterError),
}

fn invalid(path: &str, message: impl Into<String>) -> SceneError {
    SceneError::InvalidNode {
        path: path.to_string(),
        message: message.into(),
    }
}

/// A color as written in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Rgba([u8; 4]),
    Named(String),
}

impl ColorSpec {
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Rgba(rgba) => Some(Color::from_array(*rgba)),
            ColorSpec::Named(name) => Color::named(name),
        }
    }

    fn resolve_at(&self, path: &str) -> Result<Color, SceneError> {
        self.resolve().ok_or_else(|| match self {
            ColorSpec::Named(name) => invalid(path, format!("unknown color '{}'", name)),
            ColorSpec::Rgba(_) => invalid(path, "unresolvable color"),
        })
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgba(color.to_array())
    }
}

/// Padding insets: one number for all sides, or an object per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsetsSpec {
    Uniform(i32),
    Sides(EdgeInsets),
}

impl InsetsSpec {
    pub fn to_edge_insets(self) -> EdgeInsets {
        match self {
            InsetsSpec::Uniform(n) => EdgeInsets::all(n),
            InsetsSpec::Sides(insets) => insets,
        }
    }
}

fn default_font() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SceneNode {
    ColoredBox {
        width: i32,
        height: i32,
        color: ColorSpec,
    },
    Text {
        text: String,
        color: ColorSpec,
        #[serde(rename = "fontSize")]
        font_size: f32,
        #[serde(default = "default_font")]
        font: String,
    },
    Padding {
        insets: InsetsSpec,
        child: Box<SceneNode>,
    },
    Align {
        #[serde(default)]
        anchor: Anchor,
        child: Box<SceneNode>,
    },
    Row {
        #[serde(default)]
        alignment: MainAxisAlignment,
        #[serde(default)]
        sizing: MainAxisSize,
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    Column {
        #[serde(default)]
        alignment: MainAxisAlignment,
        #[serde(default)]
        sizing: MainAxisSize,
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    Stack {
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    Border {
        #[serde(rename = "strokeWidth")]
        stroke_width: i32,
        color: ColorSpec,
        child: Box<SceneNode>,
    },
}

impl SceneNode {
    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + match self {
            SceneNode::ColoredBox { .. } | SceneNode::Text { .. } => 0,
            SceneNode::Padding { child, .. }
            | SceneNode::Align { child, .. }
            | SceneNode::Border { child, .. } => child.node_count(),
            SceneNode::Row { children, .. }
            | SceneNode::Column { children, .. }
            | SceneNode::Stack { children } => children.iter().map(SceneNode::node_count).sum(),
        }
    }

    /// Build the render tree this node describes.
    pub fn build(&self, service: &Arc<dyn TextService>) -> Result<BoxedRenderObject, SceneError> {
        self.build_at("root", service)
    }

    fn build_at(
        &self,
        path: &str,
        service: &Arc<dyn TextService>,
    ) -> Result<BoxedRenderObject, SceneError> {
        let node: BoxedRenderObject = match self {
            SceneNode::ColoredBox {
                width,
                height,
                color,
            } => {
                if *width < 0 || *height < 0 {
                    return Err(invalid(path, format!("negative size {}x{}", width, height)));
                }
                Box::new(ColoredBox::new(*width, *height, color.resolve_at(path)?))
            }
            SceneNode::Text {
                text,
                color,
                font_size,
                font,
            } => {
                if !font_size.is_finite() || *font_size <= 0.0 {
                    return Err(invalid(path, format!("font size {} is not positive", font_size)));
                }
                Box::new(Text::new(
                    text.as_str(),
                    color.resolve_at(path)?,
                    *font_size,
                    font.as_str(),
                    Arc::clone(service),
                ))
            }
            SceneNode::Padding { insets, child } => {
                let insets = insets.to_edge_insets();
                if insets.top < 0 || insets.right < 0 || insets.bottom < 0 || insets.left < 0 {
                    return Err(invalid(path, "padding insets must not be negative"));
                }
                let child = child.build_at(&format!("{}.child", path), service)?;
                Box::new(Padding::new(child, insets))
            }
            SceneNode::Align { anchor, child } => {
                let child = child.build_at(&format!("{}.child", path), service)?;
                Box::new(Align::new(child, *anchor))
            }
            SceneNode::Row {
                alignment,
                sizing,
                children,
            } => Box::new(
                Row::new(build_children(path, children, service)?)
                    .with_alignment(*alignment)
                    .with_sizing(*sizing),
            ),
            SceneNode::Column {
                alignment,
                sizing,
                children,
            } => Box::new(
                Column::new(build_children(path, children, service)?)
                    .with_alignment(*alignment)
                    .with_sizing(*sizing),
            ),
            SceneNode::Stack { children } => {
                Box::new(Stack::new(build_children(path, children, service)?))
            }
            SceneNode::Border {
                stroke_width,
                color,
                child,
            } => {
                if *stroke_width < 0 {
                    return Err(invalid(path, "stroke width must not be negative"));
                }
                let color = color.resolve_at(path)?;
                let child = child.build_at(&format!("{}.child", path), service)?;
                Box::new(Border::new(child, *stroke_width, color))
            }
        };
        Ok(node)
    }
}

fn build_children(
    path: &str,
    children: &[SceneNode],
    service: &Arc<dyn TextService>,
) -> Result<Vec<BoxedRenderObject>, SceneError> {
    children
        .iter()
        .enumerate()
        .map(|(i, child)| child.build_at(&format!("{}.children[{}]", path, i), service))
        .collect()
}

/// A complete scene: canvas settings plus the root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub canvas: CanvasConfig,
    pub root: SceneNode,
}

impl SceneFile {
    pub fn new(canvas: CanvasConfig, root: SceneNode) -> Self {
        Self { canvas, root }
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: SceneFile = serde_json::from_str(json)?;
        log::info!(
            "Loaded scene: {}x{} canvas, {} nodes",
            scene.canvas.width,
            scene.canvas.height,
            scene.root.node_count()
        );
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the tree and paint it onto a fresh buffer of the scene's canvas size.
    pub fn render(&self, service: &Arc<dyn TextService>) -> Result<PixelBuffer, SceneError> {
        let root = self.root.build(service)?;
        Ok(render(root.as_ref(), &self.canvas)?)
    }
}
