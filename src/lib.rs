pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod scale;
pub mod spline;
pub mod trace;
pub mod types;

pub use color::{color_at, palette, Color};
pub use config::{Config, OutputConfig, PlotSettings};
pub use error::{PlotError, PlotResult};
pub use grid::{GridLine, Tier};
pub use render::{LabelFont, PlotStyle, RenderSummary, Renderer, SkippedTrace};
pub use scale::{map_point, CoordinateMapper, LinearScale, LogarithmicScale, Scale};
pub use spline::{fit, to_path_data, CurveSegment};
pub use trace::{load_measurement, parse_measurement, Trace};
pub use types::{AxisRange, PlotConfig, Point2D, Size};
