use super::Scale;
use crate::error::{PlotError, PlotResult};
use crate::types::AxisRange;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogarithmicScale {
    pub range: AxisRange,
    log_min: f64,
    log_max: f64,
}

impl LogarithmicScale {
    pub fn new(range: AxisRange) -> Self {
        Self {
            range,
            log_min: range.min.log10(),
            log_max: range.max.log10(),
        }
    }
}

impl Scale for LogarithmicScale {
    fn fraction(&self, value: f64) -> PlotResult<f64> {
        if value <= 0.0 || !value.is_finite() {
            return Err(PlotError::Domain { value });
        }
        Ok((value.log10() - self.log_min) / (self.log_max - self.log_min))
    }
}
