pub mod extract;

pub use extract::{load_measurement, parse_measurement};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Trace {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Trace {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
