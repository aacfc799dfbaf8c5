pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Frequency out of domain: {value} (must be a positive, finite number of Hz)")]
    Domain { value: f64 },
    #[error("Not enough points to fit a curve: got {count}, need at least 2")]
    InsufficientPoints { count: usize },
    #[error("Spline system is singular at row {row}")]
    SingularSystem { row: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for PlotError {
    fn from(err: figment::Error) -> Self {
        PlotError::Config(Box::new(err))
    }
}
