use std::path::Path;

use super::Trace;
use crate::error::{PlotError, PlotResult};

const MEASUREMENT_PREFIX: &str = "* Measurement:";

pub fn load_measurement(path: &Path) -> PlotResult<Trace> {
    let content = std::fs::read_to_string(path)?;
    let mut trace = parse_measurement(&content)?;

    if trace.name.is_empty() {
        trace.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string();
    }

    if trace.is_empty() {
        tracing::warn!("No data points in {}", path.display());
    }
    tracing::debug!("Loaded {} points for '{}' from {}", trace.len(), trace.name, path.display());
    Ok(trace)
}

pub fn parse_measurement(content: &str) -> PlotResult<Trace> {
    let mut trace = Trace::default();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_start_matches('\u{feff}').trim();

        if line.starts_with('*') {
            if let Some(name) = line.strip_prefix(MEASUREMENT_PREFIX) {
                let name = name.trim();
                if name.is_empty() {
                    tracing::warn!("Ignoring empty measurement name on line {}", line_no);
                } else {
                    trace.name = name.to_string();
                }
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let frequency = parse_field(fields.next(), line_no, "frequency")?;
        let amplitude = parse_field(fields.next(), line_no, "amplitude")?;
        trace.points.push((frequency, amplitude));
    }

    Ok(trace)
}

fn parse_field(field: Option<&str>, line: usize, what: &str) -> PlotResult<f64> {
    let raw = field.map(str::trim).ok_or_else(|| PlotError::Parse {
        line,
        message: format!("missing {} field", what),
    })?;

    raw.parse().map_err(|_| PlotError::Parse {
        line,
        message: format!("invalid {} value: '{}'", what, raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "* Measurement data measured by REW V5.18\n\
                          * Source: Focusrite USB\n\
                          * Measurement: Shure SM-57\n\
                          * Freq(Hz), SPL(dB), Phase(degrees)\n\
                          2.102, 35.533, -113.200\n\
                          \n\
                          2.193, 36.012, -110.027\n";

    #[test]
    fn test_parse_name_and_points() {
        let trace = parse_measurement(SAMPLE).unwrap();
        assert_eq!(trace.name, "Shure SM-57");
        assert_eq!(trace.points, vec![(2.102, 35.533), (2.193, 36.012)]);
    }

    #[test]
    fn test_parse_two_column_lines() {
        let trace = parse_measurement("20, 60\n20000, 90\n").unwrap();
        assert_eq!(trace.name, "");
        assert_eq!(trace.points, vec![(20.0, 60.0), (20000.0, 90.0)]);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse_measurement("* Measurement: x\n20, 60\nabc, 70\n").unwrap_err();
        match err {
            PlotError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("frequency"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_keeps_earlier_name_over_empty_header() {
        let trace = parse_measurement("* Measurement: left\n* Measurement:   \n20, 60\n").unwrap();
        assert_eq!(trace.name, "left");
    }

    #[test]
    fn test_parse_ignores_bom_and_indentation() {
        let trace = parse_measurement("\u{feff}* Measurement: Mic\n  * Freq(Hz), SPL(dB)\n\t20, 60\n").unwrap();
        assert_eq!(trace.name, "Mic");
        assert_eq!(trace.points, vec![(20.0, 60.0)]);

        let bare = parse_measurement("\u{feff}20, 60\n").unwrap();
        assert_eq!(bare.points, vec![(20.0, 60.0)]);
    }

    #[test]
    fn test_parse_missing_amplitude() {
        let err = parse_measurement("20\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_load_falls_back_to_file_stem() {
        let dir = std::env::temp_dir().join(format!("bodeplot-extract-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("kick_drum.txt");
        std::fs::write(&path, "20, 60\n100, 70\n").unwrap();

        let trace = load_measurement(&path).unwrap();
        assert_eq!(trace.name, "kick_drum");
        assert_eq!(trace.len(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_measurement(Path::new("/nonexistent/bodeplot/trace.txt"));
        assert!(matches!(result, Err(PlotError::Io(_))));
    }
}
