use crate::error::{PlotError, PlotResult};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, other: Point2D, t: f64) -> Point2D {
        Point2D {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotConfig {
    total_size: Size,
    graph_size: Size,
    graph_offset: Point2D,
    freq_range: AxisRange,
    amp_range: AxisRange,
}

impl PlotConfig {
    pub fn new(
        total_size: Size,
        graph_size: Size,
        graph_offset: Point2D,
        freq_range: AxisRange,
        amp_range: AxisRange,
    ) -> PlotResult<Self> {
        for (what, size) in [("total_size", total_size), ("graph_size", graph_size)] {
            if !(size.width.is_finite() && size.height.is_finite())
                || size.width <= 0.0
                || size.height <= 0.0
            {
                return Err(PlotError::InvalidConfig(format!(
                    "{} must be positive, got {}x{}",
                    what, size.width, size.height
                )));
            }
        }
        if !graph_offset.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "graph_offset must be finite, got ({}, {})",
                graph_offset.x, graph_offset.y
            )));
        }
        if !(freq_range.min.is_finite() && freq_range.max.is_finite())
            || freq_range.min <= 0.0
            || freq_range.min >= freq_range.max
        {
            return Err(PlotError::InvalidConfig(format!(
                "freq_range must satisfy 0 < min < max, got ({}, {})",
                freq_range.min, freq_range.max
            )));
        }
        if !(amp_range.min.is_finite() && amp_range.max.is_finite())
            || amp_range.min >= amp_range.max
        {
            return Err(PlotError::InvalidConfig(format!(
                "amp_range must satisfy min < max, got ({}, {})",
                amp_range.min, amp_range.max
            )));
        }

        Ok(Self {
            total_size,
            graph_size,
            graph_offset,
            freq_range,
            amp_range,
        })
    }

    pub fn total_size(&self) -> Size {
        self.total_size
    }

    pub fn graph_size(&self) -> Size {
        self.graph_size
    }

    pub fn graph_offset(&self) -> Point2D {
        self.graph_offset
    }

    pub fn freq_range(&self) -> AxisRange {
        self.freq_range
    }

    pub fn amp_range(&self) -> AxisRange {
        self.amp_range
    }

    pub fn graph_end(&self) -> Point2D {
        Point2D::new(
            self.graph_offset.x + self.graph_size.width,
            self.graph_offset.y + self.graph_size.height,
        )
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            total_size: Size::new(1000.0, 600.0),
            graph_size: Size::new(700.0, 300.0),
            graph_offset: Point2D::new(120.0, 10.0),
            freq_range: AxisRange::new(20.0, 20000.0),
            amp_range: AxisRange::new(60.0, 95.0),
        }
    }
}
