//! # Content Model
//!
//! The declarative half of the engine. A [`Node`] describes *what* to lay
//! out: a leaf (blank box, text), an overlay of several nodes, or a decorator
//! that wraps exactly one target and changes how much room it gets and where
//! it lands.
//!
//! Nodes are immutable values. Decorators own their target but never change
//! it, and two nodes built from the same parts compare equal, so a content
//! producer can deduplicate or cache subtrees freely. All lengths here are in
//! points (1/72 inch); conversion to device units happens when a cursor is
//! created (see [`crate::units`]).
//!
//! Decorator parameter structs keep their fields private. The only ways to
//! build one, including through serde, run the same validation, so a node
//! that exists is a node that is valid.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::text::TextStyle;

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// A blank box of fixed size.
    Empty(EmptyNode),
    /// A run of text, broken into lines as narrow regions demand.
    Text(TextNode),
    /// Several nodes painted on top of each other.
    Layer(LayerNode),
    /// Alignment plus a fixed displacement.
    Offset(OffsetNode),
    /// Four-sided inset.
    Padding(PaddingNode),
    /// Upper bound on the region the target may use.
    MaxSize(MaxSizeNode),
    /// Lower bound on the size the target reports.
    MinSize(MinSizeNode),
}

impl Node {
    /// A blank box `width` x `height` points.
    pub fn empty(width: f64, height: f64) -> Result<Node, LayoutError> {
        Ok(Node::Empty(EmptyNode::new(width, height)?))
    }

    /// Text with the default style.
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text(TextNode {
            content: content.into(),
            style: TextStyle::default(),
        })
    }

    pub fn styled_text(content: impl Into<String>, style: TextStyle) -> Result<Node, LayoutError> {
        Ok(Node::Text(TextNode::new(content, style)?))
    }

    /// An overlay with no children yet. Add them with [`Node::with_child`].
    pub fn layer() -> Node {
        Node::Layer(LayerNode::default())
    }

    /// Wrap `self` in an [`OffsetNode`].
    pub fn offset(
        self,
        h_align: Align,
        v_align: Align,
        dx: f64,
        dy: f64,
    ) -> Result<Node, LayoutError> {
        Ok(Node::Offset(OffsetNode::new(self, h_align, v_align, dx, dy)?))
    }

    /// Wrap `self` in a [`PaddingNode`].
    pub fn padding(self, padding: Edges) -> Result<Node, LayoutError> {
        Ok(Node::Padding(PaddingNode::new(self, padding)?))
    }

    /// Wrap `self` in a [`MaxSizeNode`]. `None` leaves an axis unconstrained.
    pub fn max_size(self, width: Option<f64>, height: Option<f64>) -> Result<Node, LayoutError> {
        Ok(Node::MaxSize(MaxSizeNode::new(self, width, height)?))
    }

    /// Wrap `self` in a [`MinSizeNode`].
    pub fn min_size(self, width: f64, height: f64) -> Result<Node, LayoutError> {
        Ok(Node::MinSize(MinSizeNode::new(self, width, height)?))
    }

    /// Attach another child, start-aligned.
    ///
    /// Only a [`LayerNode`] accepts children this way. Leaves have none and
    /// decorators hold exactly the target they were built with, so both fail
    /// with [`LayoutError::UnsupportedOperation`].
    pub fn with_child(self, child: Node) -> Result<Node, LayoutError> {
        self.with_aligned_child(child, Align::Start)
    }

    pub fn with_aligned_child(self, child: Node, align: Align) -> Result<Node, LayoutError> {
        match self {
            Node::Layer(mut layer) => {
                layer.children.push(LayerEntry { node: child, align });
                Ok(Node::Layer(layer))
            }
            Node::Empty(_) | Node::Text(_) => Err(LayoutError::unsupported(format!(
                "{} nodes do not accept children",
                self.kind_name()
            ))),
            _ => Err(LayoutError::unsupported(format!(
                "{} wraps exactly one target; it cannot accept another child",
                self.kind_name()
            ))),
        }
    }

    /// The wrapped target of a decorator, if this is one.
    pub fn target(&self) -> Option<&Node> {
        match self {
            Node::Offset(n) => Some(n.target()),
            Node::Padding(n) => Some(n.target()),
            Node::MaxSize(n) => Some(n.target()),
            Node::MinSize(n) => Some(n.target()),
            Node::Empty(_) | Node::Text(_) | Node::Layer(_) => None,
        }
    }

    /// Human-readable name of the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Empty(_) => "Empty",
            Node::Text(_) => "Text",
            Node::Layer(_) => "Layer",
            Node::Offset(_) => "Offset",
            Node::Padding(_) => "Padding",
            Node::MaxSize(_) => "MaxSize",
            Node::MinSize(_) => "MinSize",
        }
    }
}

fn check_length(name: &str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::invalid(format!(
            "{name} must be a finite, non-negative length in points, got {value}"
        )))
    }
}

/// Placement of content along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    /// Left, or top.
    #[default]
    Start,
    Center,
    /// Right, or bottom.
    End,
}

impl Align {
    /// Where a piece `used` units long starts inside `available` units,
    /// kept `displacement` units away from the edge it is aligned to.
    /// Centering ignores the displacement.
    pub fn place(self, available: i32, used: i32, displacement: i32) -> i32 {
        match self {
            Align::Start => displacement,
            Align::Center => available.saturating_sub(used) / 2,
            Align::End => available.saturating_sub(used).saturating_sub(displacement),
        }
    }
}

/// Edge values (top, right, bottom, left) in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Edges {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub(crate) fn validate(self, name: &str) -> Result<Self, LayoutError> {
        check_length(&format!("{name}.left"), self.left)?;
        check_length(&format!("{name}.top"), self.top)?;
        check_length(&format!("{name}.right"), self.right)?;
        check_length(&format!("{name}.bottom"), self.bottom)?;
        Ok(self)
    }
}

// ── Leaves ──────────────────────────────────────────────────────────

/// A blank box. Produces a single fragment of exactly its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EmptyParams")]
pub struct EmptyNode {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct EmptyParams {
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

impl EmptyNode {
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            width: check_length("width", width)?,
            height: check_length("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl TryFrom<EmptyParams> for EmptyNode {
    type Error = LayoutError;

    fn try_from(p: EmptyParams) -> Result<Self, Self::Error> {
        EmptyNode::new(p.width, p.height)
    }
}

/// A run of text. Measurement is delegated to the render context's
/// [`crate::text::TextMeasure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TextParams")]
pub struct TextNode {
    content: String,
    style: TextStyle,
}

#[derive(Deserialize)]
struct TextParams {
    content: String,
    #[serde(default)]
    style: TextStyle,
}

impl TextNode {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Result<Self, LayoutError> {
        check_length("font size", style.font_size)?;
        Ok(Self {
            content: content.into(),
            style,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

impl TryFrom<TextParams> for TextNode {
    type Error = LayoutError;

    fn try_from(p: TextParams) -> Result<Self, Self::Error> {
        TextNode::new(p.content, p.style)
    }
}

/// Children drawn over one another, each aligned horizontally within the
/// widest of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerNode {
    #[serde(default)]
    pub children: Vec<LayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub node: Node,
    #[serde(default)]
    pub align: Align,
}

// ── Decorators ──────────────────────────────────────────────────────

/// Aligns the target within the offered region and pushes it `dx`/`dy`
/// points away from the edge it is aligned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OffsetParams")]
pub struct OffsetNode {
    target: Box<Node>,
    h_align: Align,
    v_align: Align,
    dx: f64,
    dy: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OffsetParams {
    target: Box<Node>,
    #[serde(default)]
    h_align: Align,
    #[serde(default)]
    v_align: Align,
    #[serde(default)]
    dx: f64,
    #[serde(default)]
    dy: f64,
}

impl OffsetNode {
    pub fn new(
        target: Node,
        h_align: Align,
        v_align: Align,
        dx: f64,
        dy: f64,
    ) -> Result<Self, LayoutError> {
        Ok(Self {
            target: Box::new(target),
            h_align,
            v_align,
            dx: check_length("offset dx", dx)?,
            dy: check_length("offset dy", dy)?,
        })
    }

    pub fn target(&self) -> &Node {
        &self.target
    }

    pub fn h_align(&self) -> Align {
        self.h_align
    }

    pub fn v_align(&self) -> Align {
        self.v_align
    }

    /// Horizontal and vertical displacement, in points.
    pub fn displacement(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }
}

impl TryFrom<OffsetParams> for OffsetNode {
    type Error = LayoutError;

    fn try_from(p: OffsetParams) -> Result<Self, Self::Error> {
        OffsetNode::new(*p.target, p.h_align, p.v_align, p.dx, p.dy)
    }
}

/// Insets the target on all four sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaddingParams")]
pub struct PaddingNode {
    target: Box<Node>,
    padding: Edges,
}

#[derive(Deserialize)]
struct PaddingParams {
    target: Box<Node>,
    #[serde(default)]
    padding: Edges,
}

impl PaddingNode {
    pub fn new(target: Node, padding: Edges) -> Result<Self, LayoutError> {
        Ok(Self {
            target: Box::new(target),
            padding: padding.validate("padding")?,
        })
    }

    pub fn target(&self) -> &Node {
        &self.target
    }

    pub fn padding(&self) -> Edges {
        self.padding
    }
}

impl TryFrom<PaddingParams> for PaddingNode {
    type Error = LayoutError;

    fn try_from(p: PaddingParams) -> Result<Self, Self::Error> {
        PaddingNode::new(*p.target, p.padding)
    }
}

/// Caps the region offered to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MaxSizeParams")]
pub struct MaxSizeNode {
    target: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_height: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaxSizeParams {
    target: Box<Node>,
    #[serde(default)]
    max_width: Option<f64>,
    #[serde(default)]
    max_height: Option<f64>,
}

impl MaxSizeNode {
    /// `None` on an axis means no clamp there. A maximum of zero is treated
    /// the same way once converted to device units.
    pub fn new(
        target: Node,
        max_width: Option<f64>,
        max_height: Option<f64>,
    ) -> Result<Self, LayoutError> {
        Ok(Self {
            target: Box::new(target),
            max_width: max_width.map(|w| check_length("max width", w)).transpose()?,
            max_height: max_height.map(|h| check_length("max height", h)).transpose()?,
        })
    }

    pub fn target(&self) -> &Node {
        &self.target
    }

    pub fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }
}

impl TryFrom<MaxSizeParams> for MaxSizeNode {
    type Error = LayoutError;

    fn try_from(p: MaxSizeParams) -> Result<Self, Self::Error> {
        MaxSizeNode::new(*p.target, p.max_width, p.max_height)
    }
}

/// Reserves a blank floor: the target reports at least this size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MinSizeParams")]
pub struct MinSizeNode {
    target: Box<Node>,
    min_width: f64,
    min_height: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MinSizeParams {
    target: Box<Node>,
    #[serde(default)]
    min_width: f64,
    #[serde(default)]
    min_height: f64,
}

impl MinSizeNode {
    pub fn new(target: Node, min_width: f64, min_height: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            target: Box::new(target),
            min_width: check_length("min width", min_width)?,
            min_height: check_length("min height", min_height)?,
        })
    }

    pub fn target(&self) -> &Node {
        &self.target
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }
}

impl TryFrom<MinSizeParams> for MinSizeNode {
    type Error = LayoutError;

    fn try_from(p: MinSizeParams) -> Result<Self, Self::Error> {
        MinSizeNode::new(*p.target, p.min_width, p.min_height)
    }
}
