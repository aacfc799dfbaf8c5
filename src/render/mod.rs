pub mod renderer;
pub mod style;

pub use renderer::{RenderSummary, Renderer, SkippedTrace};
pub use style::{LabelFont, PlotStyle};
