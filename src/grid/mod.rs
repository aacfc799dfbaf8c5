use crate::error::PlotResult;
use crate::scale::CoordinateMapper;
use crate::types::{PlotConfig, Point2D};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Major,
    Mid,
    Minor,
}

impl Tier {
    pub fn stroke_width(&self) -> f64 {
        match self {
            Tier::Major => 1.0,
            Tier::Mid => 0.5,
            Tier::Minor => 0.25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub start: Point2D,
    pub end: Point2D,
    pub tier: Tier,
    pub labeled: bool,
}

pub fn horizontal_lines(config: &PlotConfig) -> PlotResult<Vec<GridLine>> {
    let mapper = CoordinateMapper::new(config);
    let freq = config.freq_range();
    let amp = config.amp_range();

    let first = amp.min.ceil() as i64;
    let mut lines = Vec::new();
    let mut a = first;
    while (a as f64) < amp.max {
        let value = a as f64;
        let tier = if a.rem_euclid(10) == 0 {
            Tier::Major
        } else if a.rem_euclid(5) == 0 {
            Tier::Mid
        } else {
            Tier::Minor
        };
        lines.push(GridLine {
            value,
            start: mapper.map_point(freq.min, value)?,
            end: mapper.map_point(freq.max, value)?,
            tier,
            labeled: a.rem_euclid(5) == 0,
        });
        a += 1;
    }

    tracing::debug!("Generated {} horizontal gridlines", lines.len());
    Ok(lines)
}

/// `1, 2, ... 9` times each power of ten in `[freq_min, freq_max)`, starting at the
/// first whole multiple of `freq_min`'s decade.
pub fn vertical_lines(config: &PlotConfig) -> PlotResult<Vec<GridLine>> {
    let mapper = CoordinateMapper::new(config);
    let freq = config.freq_range();
    let amp = config.amp_range();

    let mut exponent = decade_exponent(freq.min);
    let mut multiple = first_multiple(freq.min, exponent);
    let mut lines = Vec::new();
    loop {
        if multiple == 10 {
            multiple = 1;
            exponent += 1;
        }
        let value = decade_value(multiple, exponent);
        if value >= freq.max {
            break;
        }
        let tier = if multiple == 1 && exponent >= 1 { Tier::Major } else { Tier::Minor };
        lines.push(GridLine {
            value,
            start: mapper.map_point(value, amp.max)?,
            end: mapper.map_point(value, amp.min)?,
            tier,
            labeled: leading_digit(value).is_some_and(|d| d == 1 || d == 5),
        });
        multiple += 1;
    }

    tracing::debug!("Generated {} vertical gridlines", lines.len());
    Ok(lines)
}

/// `floor(log10(f))`, corrected for rounding in `log10` near exact powers of ten.
fn decade_exponent(f: f64) -> i32 {
    let mut exponent = f.log10().floor() as i32;
    if decade_value(1, exponent) > f {
        exponent -= 1;
    } else if decade_value(1, exponent + 1) <= f {
        exponent += 1;
    }
    exponent
}

fn first_multiple(f: f64, exponent: i32) -> u32 {
    let ratio = f / decade_value(1, exponent);
    let nearest = ratio.round();
    let multiple = if (ratio - nearest).abs() < 1e-9 { nearest } else { ratio.ceil() };
    multiple.clamp(1.0, 10.0) as u32
}

// Divide for negative exponents so that 0.3 comes out as 3 / 10, not 3 * 0.1.
fn decade_value(multiple: u32, exponent: i32) -> f64 {
    if exponent >= 0 {
        multiple as f64 * 10f64.powi(exponent)
    } else {
        multiple as f64 / 10f64.powi(-exponent)
    }
}

fn leading_digit(value: f64) -> Option<u32> {
    format!("{:.0}", value.trunc()).chars().next().and_then(|c| c.to_digit(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AxisRange, Size};

    fn config(freq: (f64, f64), amp: (f64, f64)) -> PlotConfig {
        PlotConfig::new(
            Size::new(1000.0, 600.0),
            Size::new(700.0, 300.0),
            Point2D::new(120.0, 10.0),
            AxisRange::from(freq),
            AxisRange::from(amp),
        )
        .unwrap()
    }

    #[test]
    fn test_horizontal_tiers() {
        let lines = horizontal_lines(&PlotConfig::default()).unwrap();
        assert_eq!(lines.len(), 35);

        let values_with = |tier: Tier| -> Vec<f64> {
            lines.iter().filter(|l| l.tier == tier).map(|l| l.value).collect()
        };
        assert_eq!(values_with(Tier::Major), vec![60.0, 70.0, 80.0, 90.0]);
        assert_eq!(values_with(Tier::Mid), vec![65.0, 75.0, 85.0]);
        assert_eq!(values_with(Tier::Minor).len(), 28);
        assert!(!lines.iter().any(|l| l.value == 95.0));
    }

    #[test]
    fn test_horizontal_labels_on_multiples_of_five() {
        let lines = horizontal_lines(&PlotConfig::default()).unwrap();
        let labeled: Vec<f64> = lines.iter().filter(|l| l.labeled).map(|l| l.value).collect();
        assert_eq!(labeled, vec![60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0]);
    }

    #[test]
    fn test_horizontal_endpoints_span_plot() {
        let lines = horizontal_lines(&PlotConfig::default()).unwrap();
        let bottom = lines[0];
        assert_eq!(bottom.start, Point2D::new(120.0, 310.0));
        assert_eq!(bottom.end, Point2D::new(820.0, 310.0));
    }

    #[test]
    fn test_horizontal_negative_range() {
        let lines = horizontal_lines(&config((20.0, 20000.0), (-12.0, 3.0))).unwrap();
        assert_eq!(lines.len(), 15);
        let major: Vec<f64> = lines.iter().filter(|l| l.tier == Tier::Major).map(|l| l.value).collect();
        assert_eq!(major, vec![-10.0, 0.0]);
        let mid: Vec<f64> = lines.iter().filter(|l| l.tier == Tier::Mid).map(|l| l.value).collect();
        assert_eq!(mid, vec![-5.0]);
    }

    #[test]
    fn test_vertical_decades() {
        let lines = vertical_lines(&PlotConfig::default()).unwrap();
        let values: Vec<f64> = lines.iter().map(|l| l.value).collect();

        let mut expected = Vec::new();
        expected.extend((2..10).map(|m| m as f64 * 10.0));
        expected.extend((1..10).map(|m| m as f64 * 100.0));
        expected.extend((1..10).map(|m| m as f64 * 1000.0));
        expected.push(10000.0);
        assert_eq!(values, expected);
        assert_eq!(lines.len(), 27);
    }

    #[test]
    fn test_vertical_values_are_decade_multiples() {
        let lines = vertical_lines(&config((37.0, 15000.0), (60.0, 95.0))).unwrap();
        assert_eq!(lines[0].value, 40.0);
        for line in &lines {
            let step = decade_value(1, decade_exponent(line.value));
            let multiple = line.value / step;
            assert_eq!(multiple, multiple.round());
            assert!(multiple >= 1.0 && multiple <= 9.0);
            assert!(line.value < 15000.0);
        }
    }

    #[test]
    fn test_vertical_tiers_and_labels() {
        let lines = vertical_lines(&PlotConfig::default()).unwrap();
        let major: Vec<f64> = lines.iter().filter(|l| l.tier == Tier::Major).map(|l| l.value).collect();
        assert_eq!(major, vec![100.0, 1000.0, 10000.0]);

        let labeled: Vec<f64> = lines.iter().filter(|l| l.labeled).map(|l| l.value).collect();
        assert_eq!(labeled, vec![50.0, 100.0, 500.0, 1000.0, 5000.0, 10000.0]);
    }

    #[test]
    fn test_vertical_endpoints_top_to_bottom() {
        let lines = vertical_lines(&PlotConfig::default()).unwrap();
        let first = lines[0];
        assert_eq!(first.start, Point2D::new(120.0, 10.0));
        assert_eq!(first.end, Point2D::new(120.0, 310.0));
    }

    #[test]
    fn test_vertical_includes_ten_below_first_decade() {
        let lines = vertical_lines(&config((1.0, 100.0), (0.0, 1.0))).unwrap();
        let values: Vec<f64> = lines.iter().map(|l| l.value).collect();
        assert_eq!(values[0], 1.0);
        assert_eq!(lines[0].tier, Tier::Minor);
        assert!(values.contains(&10.0));
        assert_eq!(lines.iter().find(|l| l.value == 10.0).unwrap().tier, Tier::Major);
        assert!(!values.contains(&100.0));
    }

    #[test]
    fn test_decade_exponent() {
        assert_eq!(decade_exponent(20.0), 1);
        assert_eq!(decade_exponent(100.0), 2);
        assert_eq!(decade_exponent(999.0), 2);
        assert_eq!(decade_exponent(1000.0), 3);
        assert_eq!(decade_exponent(0.5), -1);
    }

    #[test]
    fn test_sub_hertz_ranges_step_without_drift() {
        let values = |freq| -> Vec<f64> {
            vertical_lines(&config(freq, (60.0, 95.0)))
                .unwrap()
                .iter()
                .map(|l| l.value)
                .collect()
        };
        assert_eq!(
            values((0.2, 2.0)),
            vec![0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
        assert_eq!(
            values((0.02, 0.2)),
            vec![0.02, 0.03, 0.04, 0.05, 0.06, 0.07, 0.08, 0.09, 0.1]
        );
    }

    #[test]
    fn test_sub_hertz_lines_are_unlabeled_minor() {
        let lines = vertical_lines(&config((0.2, 2.0), (60.0, 95.0))).unwrap();
        assert!(lines.iter().all(|l| l.tier == Tier::Minor));
        let labeled: Vec<f64> = lines.iter().filter(|l| l.labeled).map(|l| l.value).collect();
        assert_eq!(labeled, vec![1.0]);
    }

    #[test]
    fn test_leading_digit_of_huge_frequencies() {
        assert_eq!(leading_digit(2e19), Some(2));
        assert_eq!(leading_digit(8e19), Some(8));
        assert_eq!(leading_digit(1.5e20), Some(1));
        assert_eq!(leading_digit(599.9), Some(5));
        assert_eq!(leading_digit(0.7), Some(0));
    }

    #[test]
    fn test_huge_range_labels_only_ones_and_fives() {
        let lines = vertical_lines(&config((1e19, 1e20), (60.0, 95.0))).unwrap();
        assert_eq!(lines.len(), 9);
        let labeled: Vec<f64> = lines.iter().filter(|l| l.labeled).map(|l| l.value).collect();
        assert_eq!(labeled, vec![1e19, 5e19]);
    }

    #[test]
    fn test_stroke_widths() {
        assert_eq!(Tier::Major.stroke_width(), 1.0);
        assert_eq!(Tier::Mid.stroke_width(), 0.5);
        assert_eq!(Tier::Minor.stroke_width(), 0.25);
    }
}
