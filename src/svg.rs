use anyhow::Result;
use std::path::Path;

/// Root canvas: fixed size, an embedded stylesheet, and a flat list of
/// top-level nodes. Serialization is a separate step (`render_svg`).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub style: String,
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(width: f64, height: f64, style: impl Into<String>) -> Self {
        Self {
            width,
            height,
            style: style.into(),
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(Rect),
    Circle(Circle),
    Text(Text),
    Group(Group),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub stroke: Option<String>,
    pub fill: String,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: None,
            ry: None,
            stroke: None,
            fill: fill.to_string(),
        }
    }

    /// Rounds both axes with the same radius.
    pub fn rounded(x: f64, y: f64, width: f64, height: f64, radius: f64, fill: &str) -> Self {
        let mut rect = Self::new(x, y, width, height, fill);
        rect.rx = Some(radius);
        rect.ry = Some(radius);
        rect
    }

    pub fn with_rx(mut self, rx: f64) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn with_stroke(mut self, stroke: &str) -> Self {
        self.stroke = Some(stroke.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub class: Option<String>,
}

impl Text {
    pub fn classed(x: f64, y: f64, content: &str, class: &str) -> Self {
        Self {
            x,
            y,
            content: content.to_string(),
            class: Some(class.to_string()),
        }
    }
}

/// Container translated by `(tx, ty)`; children are positioned relative to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub tx: f64,
    pub ty: f64,
    pub nodes: Vec<Node>,
}

impl Group {
    pub fn translated(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }
}

impl From<Rect> for Node {
    fn from(rect: Rect) -> Self {
        Node::Rect(rect)
    }
}

impl From<Circle> for Node {
    fn from(circle: Circle) -> Self {
        Node::Circle(circle)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

pub fn render_svg(document: &Document) -> String {
    let mut svg = String::new();
    let width = document.width;
    let height = document.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str("<defs><style>");
    svg.push_str(&document.style);
    svg.push_str("</style></defs>");

    for node in &document.nodes {
        push_node(&mut svg, node);
    }

    svg.push_str("</svg>");
    svg
}

fn push_node(svg: &mut String, node: &Node) {
    match node {
        Node::Rect(rect) => {
            svg.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                rect.x, rect.y, rect.width, rect.height
            ));
            if let Some(rx) = rect.rx {
                svg.push_str(&format!(" rx=\"{rx}\""));
            }
            if let Some(ry) = rect.ry {
                svg.push_str(&format!(" ry=\"{ry}\""));
            }
            if let Some(stroke) = &rect.stroke {
                svg.push_str(&format!(" stroke=\"{stroke}\""));
            }
            svg.push_str(&format!(" fill=\"{}\"/>", rect.fill));
        }
        Node::Circle(circle) => {
            svg.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                circle.cx, circle.cy, circle.r, circle.fill
            ));
        }
        Node::Text(text) => {
            svg.push_str(&format!("<text x=\"{}\" y=\"{}\"", text.x, text.y));
            if let Some(class) = &text.class {
                svg.push_str(&format!(" class=\"{class}\""));
            }
            svg.push_str(&format!(">{}</text>", escape_xml(&text.content)));
        }
        Node::Group(group) => {
            svg.push_str(&format!(
                "<g transform=\"translate({}, {})\">",
                group.tx, group.ty
            ));
            for child in &group.nodes {
                push_node(svg, child);
            }
            svg.push_str("</g>");
        }
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Segoe UI".to_string();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
