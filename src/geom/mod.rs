//! Minimal geometry kernel: points, tolerances and NURBS curves.

mod core;
mod curve;

pub use core::{Point3, Tolerance};
pub use curve::{Curve3, CurveForm, NurbsCurve3, tessellate_curve_uniform};
