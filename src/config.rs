use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PlotResult;
use crate::render::PlotStyle;
use crate::types::PlotConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub plot: PlotSettings,
    #[serde(default)]
    pub style: PlotStyle,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plot: PlotSettings::default(),
            style: PlotStyle::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlotSettings {
    #[serde(default = "default_total_size")]
    pub total_size: (f64, f64),
    #[serde(default = "default_graph_size")]
    pub graph_size: (f64, f64),
    #[serde(default = "default_graph_offset")]
    pub graph_offset: (f64, f64),
    #[serde(default = "default_freq_range")]
    pub freq_range: (f64, f64),
    #[serde(default = "default_amp_range")]
    pub amp_range: (f64, f64),
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            total_size: default_total_size(),
            graph_size: default_graph_size(),
            graph_offset: default_graph_offset(),
            freq_range: default_freq_range(),
            amp_range: default_amp_range(),
        }
    }
}

fn default_total_size() -> (f64, f64) {
    (1000.0, 600.0)
}

fn default_graph_size() -> (f64, f64) {
    (700.0, 300.0)
}

fn default_graph_offset() -> (f64, f64) {
    (120.0, 10.0)
}

fn default_freq_range() -> (f64, f64) {
    (20.0, 20000.0)
}

fn default_amp_range() -> (f64, f64) {
    (60.0, 95.0)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "./default_output.svg".to_string()
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        let mut figment = Figment::new();

        if let Some(path) = Self::default_path() {
            figment = figment.merge(Toml::file(path));
        }

        // BODEPLOT_STYLE__SHOW_MARKERS=true sets style.show_markers
        let config: Config = figment
            .merge(Env::prefixed("BODEPLOT_").split("__"))
            .extract()?;

        Ok(config)
    }

    pub fn load_from_path(path: PathBuf) -> Result<Self, figment::Error> {
        if !path.is_file() {
            return Err(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let figment = Figment::new().merge(Toml::file(path));

        let config: Config = figment.extract()?;

        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "bodeplot", "bodeplot").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn plot_config(&self) -> PlotResult<PlotConfig> {
        PlotConfig::new(
            self.plot.total_size.into(),
            self.plot.graph_size.into(),
            self.plot.graph_offset.into(),
            self.plot.freq_range.into(),
            self.plot.amp_range.into(),
        )
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output.path).into_owned())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
