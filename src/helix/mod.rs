//! Parametrische helix: parameterset en generatie van CV's en knots.

mod generate;
mod params;

pub use generate::{DEGREE, GenerateError, GeneratedCurve, MAX_CV_COUNT};
pub use params::HelixParameters;
