pub mod linear;
pub mod logarithmic;
pub mod mapper;

use crate::error::PlotResult;

pub trait Scale {
    fn fraction(&self, value: f64) -> PlotResult<f64>;
}

pub use linear::LinearScale;
pub use logarithmic::LogarithmicScale;
pub use mapper::{map_point, CoordinateMapper};
