//! Omzetting van helixparameters naar control vertices en een knotvector.

use thiserror::Error;

use crate::geom::{CurveForm, NurbsCurve3, Point3};

use super::HelixParameters;

/// Graad van de gegenereerde curve (kubisch).
pub const DEGREE: usize = 3;

/// Bovengrens voor het aantal control vertices van één helix.
pub const MAX_CV_COUNT: u32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("een helix van graad {degree} heeft meer dan {degree} control vertices nodig, kreeg {count}")]
    TooFewControlVertices { count: u32, degree: usize },
    #[error("een helix mag hoogstens {max} control vertices hebben, kreeg {count}")]
    TooManyControlVertices { count: u32, max: u32 },
}

/// Gegenereerde CV's en knots, klaar voor de curve-constructor van de host.
///
/// De knotvector volgt de hostconventie: `spans + 2 * degree - 1` waarden,
/// zonder de twee impliciete eindknots.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCurve {
    pub control_vertices: Vec<Point3>,
    pub knots: Vec<f64>,
    pub degree: usize,
    pub form: CurveForm,
}

impl GeneratedCurve {
    #[must_use]
    pub fn spans(&self) -> usize {
        self.control_vertices.len().saturating_sub(self.degree)
    }

    /// Bouwt de curve met volledige knotvector, zoals een host die zelf evalueert.
    pub fn to_nurbs(&self) -> Result<NurbsCurve3, String> {
        NurbsCurve3::from_host_knots(
            self.degree,
            self.control_vertices.clone(),
            &self.knots,
            self.form,
        )
    }
}

impl HelixParameters {
    /// Genereert de CV's en knots van de helix.
    ///
    /// Vertex `i` ligt op hoek `i` radialen: opeenvolgende vertices liggen één
    /// radiaal uit elkaar, dus de curve maakt `cv_count / 2π` omwentelingen.
    pub fn generate(&self) -> Result<GeneratedCurve, GenerateError> {
        if self.cv_count > MAX_CV_COUNT {
            return Err(GenerateError::TooManyControlVertices {
                count: self.cv_count,
                max: MAX_CV_COUNT,
            });
        }
        let cv_count = self.cv_count as usize;
        let spans = cv_count
            .checked_sub(DEGREE)
            .filter(|spans| *spans > 0)
            .ok_or(GenerateError::TooFewControlVertices {
                count: self.cv_count,
                degree: DEGREE,
            })?;
        let knot_count = spans + 2 * DEGREE - 1;

        let up = self.up_factor();
        let control_vertices = (0..cv_count)
            .map(|i| {
                let angle = i as f64;
                Point3::new(
                    self.radius * angle.cos(),
                    up * self.pitch * angle,
                    self.radius * angle.sin(),
                )
            })
            .collect();

        let knots = (0..knot_count).map(|i| i as f64).collect();

        Ok(GeneratedCurve {
            control_vertices,
            knots,
            degree: DEGREE,
            form: CurveForm::Open,
        })
    }
}
