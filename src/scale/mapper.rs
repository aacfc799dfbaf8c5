use super::{LinearScale, LogarithmicScale, Scale};
use crate::error::PlotResult;
use crate::types::{PlotConfig, Point2D, Size};

/// Values outside the configured ranges are mapped without clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    freq: LogarithmicScale,
    amp: LinearScale,
    offset: Point2D,
    size: Size,
}

impl CoordinateMapper {
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            freq: LogarithmicScale::new(config.freq_range()),
            amp: LinearScale::new(config.amp_range()),
            offset: config.graph_offset(),
            size: config.graph_size(),
        }
    }

    pub fn map_point(&self, frequency_hz: f64, amplitude_db: f64) -> PlotResult<Point2D> {
        let x_fraction = self.freq.fraction(frequency_hz)?;
        let y_fraction = self.amp.fraction(amplitude_db)?;

        Ok(Point2D {
            x: self.offset.x + x_fraction * self.size.width,
            y: self.offset.y + self.size.height - y_fraction * self.size.height,
        })
    }

    pub fn map_points(&self, samples: &[(f64, f64)]) -> PlotResult<Vec<Point2D>> {
        samples
            .iter()
            .map(|&(f, a)| self.map_point(f, a))
            .collect()
    }

    pub fn contains_strictly(&self, pixel: Point2D) -> bool {
        pixel.x > self.offset.x
            && pixel.x < self.offset.x + self.size.width
            && pixel.y > self.offset.y
            && pixel.y < self.offset.y + self.size.height
    }
}

pub fn map_point(frequency_hz: f64, amplitude_db: f64, config: &PlotConfig) -> PlotResult<Point2D> {
    CoordinateMapper::new(config).map_point(frequency_hz, amplitude_db)
}
