use std::path::{Path, PathBuf};

use svg::node::element::{self, Circle, ClipPath, Definitions, Element, Group, Line, Rectangle, Text};
use svg::{Document, Node};

use super::style::PlotStyle;
use crate::color::palette;
use crate::config::Config;
use crate::error::{PlotError, PlotResult};
use crate::grid::{self, GridLine};
use crate::scale::CoordinateMapper;
use crate::spline;
use crate::trace::Trace;
use crate::types::{PlotConfig, Point2D, Size};

pub const CLIP_ID: &str = "plot_clip";

const FREQ_LABEL_DROP: f64 = 10.0;
const FREQ_LABEL_ROTATION: f64 = 45.0;
const AMP_LABEL_SHIFT: Point2D = Point2D::new(-20.0, 4.0);
const FREQ_TITLE_SHIFT: Point2D = Point2D::new(30.0, 10.0);
const AMP_TITLE_SHIFT: Point2D = Point2D::new(-90.0, 5.0);
const LEGEND_TOP: f64 = 60.0;
const LEGEND_SWATCH: Size = Size::new(20.0, 10.0);
const LEGEND_TEXT_GAP: f64 = 10.0;
const MARKER_RADIUS: f64 = 2.0;

#[derive(Debug)]
pub struct SkippedTrace {
    pub name: String,
    pub error: PlotError,
}

#[derive(Debug, Default)]
pub struct RenderSummary {
    pub drawn: usize,
    pub skipped: Vec<SkippedTrace>,
}

/// Every call to [`Renderer::render`] appends a full drawing to the document,
/// so rendering twice draws everything twice.
#[derive(Debug)]
pub struct Renderer {
    config: PlotConfig,
    style: PlotStyle,
    output_path: PathBuf,
    traces: Vec<Trace>,
    document: Document,
}

struct DrawnTrace<'a> {
    name: &'a str,
    color: String,
    pixels: Vec<Point2D>,
    segments: Vec<spline::CurveSegment>,
}

impl Renderer {
    pub fn new(config: PlotConfig, style: PlotStyle, output_path: impl Into<PathBuf>) -> Self {
        Self {
            document: new_document(config.total_size()),
            config,
            style,
            output_path: output_path.into(),
            traces: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> PlotResult<Self> {
        Ok(Self::new(
            config.plot_config()?,
            config.style.clone(),
            config.output_path(),
        ))
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    pub fn trace_names(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn count(&self) -> usize {
        self.traces.len()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn render(&mut self) -> PlotResult<RenderSummary> {
        let mapper = CoordinateMapper::new(&self.config);
        let h_lines = grid::horizontal_lines(&self.config)?;
        let v_lines = grid::vertical_lines(&self.config)?;

        let mut summary = RenderSummary::default();
        let total = self.traces.len();
        let colors = palette(total);
        let mut drawn = Vec::with_capacity(total);

        for (index, trace) in self.traces.iter().enumerate() {
            let pixels = mapper.map_points(&trace.points)?;
            match spline::fit(&pixels) {
                Ok(segments) => {
                    tracing::debug!(
                        "Fitted '{}': {} points, {} segments",
                        trace.name,
                        pixels.len(),
                        segments.len()
                    );
                    drawn.push(DrawnTrace {
                        name: &trace.name,
                        color: colors[index].to_string(),
                        pixels,
                        segments,
                    });
                }
                Err(e @ (PlotError::InsufficientPoints { .. } | PlotError::SingularSystem { .. })) => {
                    tracing::warn!("Skipping trace '{}': {}", trace.name, e);
                    summary.skipped.push(SkippedTrace {
                        name: trace.name.clone(),
                        error: e,
                    });
                }
                Err(e) => return Err(e),
            }
        }
        summary.drawn = drawn.len();

        let background = self.background();
        let scale_lines = self.scale_lines(&h_lines, &v_lines);
        let labels = self.labels(&h_lines, &v_lines);
        let clip = Definitions::new().add(ClipPath::new().set("id", CLIP_ID).add(self.plot_area()));
        let trace_paths = self.trace_paths(&drawn);
        let markers = self
            .style
            .show_markers
            .then(|| self.markers(&drawn, &mapper));
        let legend = self.legend(&drawn);

        self.document.append(background);
        self.document.append(scale_lines);
        self.document.append(labels);
        self.document.append(clip);
        self.document.append(trace_paths);
        if let Some(markers) = markers {
            self.document.append(markers);
        }
        self.document.append(legend);

        tracing::debug!(
            "Rendered {} of {} traces with {} horizontal and {} vertical gridlines",
            summary.drawn,
            total,
            h_lines.len(),
            v_lines.len()
        );
        Ok(summary)
    }

    pub fn save(&self) -> PlotResult<()> {
        svg::save(&self.output_path, &self.document)?;
        tracing::info!("Saved plot to {}", self.output_path.display());
        Ok(())
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    fn plot_area(&self) -> Rectangle {
        rect(self.config.graph_offset(), self.config.graph_size())
    }

    fn background(&self) -> Group {
        Group::new().set("id", "background").add(
            self.plot_area()
                .set("fill", self.style.background_fill.as_str())
                .set("stroke", self.style.background_stroke.as_str())
                .set("stroke-width", 1),
        )
    }

    fn scale_lines(&self, h_lines: &[GridLine], v_lines: &[GridLine]) -> Group {
        let mut group = Group::new()
            .set("id", "scale_lines")
            .set("fill", self.style.grid_color.as_str())
            .set("stroke", self.style.grid_color.as_str());
        for line in h_lines.iter().chain(v_lines) {
            group.append(
                Line::new()
                    .set("x1", line.start.x)
                    .set("y1", line.start.y)
                    .set("x2", line.end.x)
                    .set("y2", line.end.y)
                    .set("stroke-width", line.tier.stroke_width()),
            );
        }
        group
    }

    fn labels(&self, h_lines: &[GridLine], v_lines: &[GridLine]) -> Group {
        let mut group = self.font_group("labels");

        for line in v_lines.iter().filter(|l| l.labeled) {
            let at = Point2D::new(line.end.x, line.end.y + FREQ_LABEL_DROP);
            group.append(label(line.value.to_string(), at, FREQ_LABEL_ROTATION));
        }
        for line in h_lines.iter().filter(|l| l.labeled) {
            let at = Point2D::new(line.start.x + AMP_LABEL_SHIFT.x, line.start.y + AMP_LABEL_SHIFT.y);
            group.append(label(line.value.to_string(), at, 0.0));
        }

        let end = self.config.graph_end();
        let offset = self.config.graph_offset();
        group.append(label(
            self.style.frequency_title.as_str(),
            Point2D::new(end.x + FREQ_TITLE_SHIFT.x, end.y + FREQ_TITLE_SHIFT.y),
            0.0,
        ));
        group.append(label(
            self.style.amplitude_title.as_str(),
            Point2D::new(offset.x + AMP_TITLE_SHIFT.x, offset.y + AMP_TITLE_SHIFT.y),
            0.0,
        ));
        group
    }

    fn trace_paths(&self, drawn: &[DrawnTrace<'_>]) -> Group {
        let mut group = Group::new()
            .set("id", "trace_paths")
            .set("clip-path", format!("url(#{})", CLIP_ID))
            .set("fill", "none")
            .set("stroke-width", self.style.trace_width);
        for trace in drawn {
            group.append(
                element::Path::new()
                    .set("d", spline::to_path_data(&trace.segments))
                    .set("stroke", trace.color.as_str())
                    .add(title(trace.name)),
            );
        }
        group
    }

    fn markers(&self, drawn: &[DrawnTrace<'_>], mapper: &CoordinateMapper) -> Group {
        let mut group = Group::new().set("id", "markers").set("stroke-width", 1);
        for trace in drawn {
            for pixel in trace.pixels.iter().filter(|p| mapper.contains_strictly(**p)) {
                group.append(
                    Circle::new()
                        .set("cx", pixel.x)
                        .set("cy", pixel.y)
                        .set("r", MARKER_RADIUS)
                        .set("fill", trace.color.as_str())
                        .set("stroke", trace.color.as_str()),
                );
            }
        }
        group
    }

    fn legend(&self, drawn: &[DrawnTrace<'_>]) -> Group {
        let mut group = self.font_group("legend");
        let left = self.config.graph_offset().x;
        let top = self.config.graph_end().y + LEGEND_TOP;

        for (row, trace) in drawn.iter().enumerate() {
            let y = top + row as f64 * self.style.legend_row_height;
            group.append(rect(Point2D::new(left, y), LEGEND_SWATCH).set("fill", trace.color.as_str()));
            group.append(label(
                trace.name,
                Point2D::new(left + LEGEND_SWATCH.width + LEGEND_TEXT_GAP, y + LEGEND_SWATCH.height),
                0.0,
            ));
        }
        group
    }

    fn font_group(&self, id: &str) -> Group {
        let font = &self.style.label_font;
        Group::new()
            .set("id", id)
            .set("fill", font.color.as_str())
            .set("font-family", font.family.as_str())
            .set("font-size", font.size)
    }
}

fn new_document(size: Size) -> Document {
    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("version", "1.1")
        .set("width", format!("{}px", size.width))
        .set("height", format!("{}px", size.height))
        .set("viewBox", (0.0, 0.0, size.width, size.height))
}

fn rect(origin: Point2D, size: Size) -> Rectangle {
    Rectangle::new()
        .set("x", origin.x)
        .set("y", origin.y)
        .set("width", size.width)
        .set("height", size.height)
}

fn title(content: &str) -> Element {
    let mut title = Element::new("title");
    title.append(svg::node::Text::new(content));
    title
}

fn label(content: impl Into<String>, at: Point2D, rotation: f64) -> Text {
    let text = Text::new(content).set("x", at.x).set("y", at.y);
    if rotation == 0.0 {
        text
    } else {
        text.set("transform", format!("rotate({} {} {})", rotation, at.x, at.y))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(PlotConfig::default(), PlotStyle::default(), "./default_output.svg")
    }
}
