use super::Scale;
use crate::error::PlotResult;
use crate::types::AxisRange;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub range: AxisRange,
}

impl LinearScale {
    pub fn new(range: AxisRange) -> Self {
        Self { range }
    }
}

impl Scale for LinearScale {
    fn fraction(&self, value: f64) -> PlotResult<f64> {
        Ok((value - self.range.min) / self.range.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_fraction() {
        let scale = LinearScale::new(AxisRange::new(60.0, 95.0));
        assert_eq!(scale.fraction(60.0).unwrap(), 0.0);
        assert_eq!(scale.fraction(95.0).unwrap(), 1.0);
        assert_eq!(scale.fraction(130.0).unwrap(), 2.0);
    }

    #[test]
    fn test_linear_fraction_of_negative_range() {
        let scale = LinearScale::new(AxisRange::new(-10.0, 10.0));
        assert_eq!(scale.fraction(0.0).unwrap(), 0.5);
        assert_eq!(scale.fraction(-20.0).unwrap(), -0.5);
    }
}
