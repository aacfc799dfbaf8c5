use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LabelFont {
    #[serde(default = "default_font_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: f64,
    #[serde(default = "default_font_color")]
    pub color: String,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
            color: default_font_color(),
        }
    }
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_font_size() -> f64 {
    12.0
}

fn default_font_color() -> String {
    "black".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlotStyle {
    #[serde(default = "default_background_fill")]
    pub background_fill: String,
    #[serde(default = "default_background_stroke")]
    pub background_stroke: String,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_trace_width")]
    pub trace_width: f64,
    #[serde(default)]
    pub show_markers: bool,
    #[serde(default = "default_frequency_title")]
    pub frequency_title: String,
    #[serde(default = "default_amplitude_title")]
    pub amplitude_title: String,
    #[serde(default = "default_legend_row_height")]
    pub legend_row_height: f64,
    #[serde(default)]
    pub label_font: LabelFont,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background_fill: default_background_fill(),
            background_stroke: default_background_stroke(),
            grid_color: default_grid_color(),
            trace_width: default_trace_width(),
            show_markers: false,
            frequency_title: default_frequency_title(),
            amplitude_title: default_amplitude_title(),
            legend_row_height: default_legend_row_height(),
            label_font: LabelFont::default(),
        }
    }
}

fn default_background_fill() -> String {
    "#fcfcfc".to_string()
}

fn default_background_stroke() -> String {
    "#000000".to_string()
}

fn default_grid_color() -> String {
    "grey".to_string()
}

fn default_trace_width() -> f64 {
    2.0
}

fn default_frequency_title() -> String {
    "Frequency in Hz".to_string()
}

fn default_amplitude_title() -> String {
    "Amplitude in dB".to_string()
}

fn default_legend_row_height() -> f64 {
    20.0
}
