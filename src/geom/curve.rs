use serde::Serialize;

use super::core::{Point3, Tolerance};

pub trait Curve3 {
    fn point_at(&self, t: f64) -> Point3;

    #[must_use]
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn is_closed(&self) -> bool {
        false
    }
}

/// Topological form of a NURBS curve as the host understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveForm {
    Open,
    Closed,
    Periodic,
}

/// Non-rational NURBS curve with a full (`n + p + 1`) knot vector.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve3 {
    pub degree: usize,
    pub control_points: Vec<Point3>,
    pub knots: Vec<f64>,
    pub form: CurveForm,
}

impl NurbsCurve3 {
    pub fn new(
        degree: usize,
        control_points: Vec<Point3>,
        knots: Vec<f64>,
        form: CurveForm,
    ) -> Result<Self, String> {
        if control_points.len() < 2 {
            return Err("nurbs curve requires at least 2 control points".to_string());
        }
        if degree == 0 {
            return Err("nurbs curve degree must be >= 1".to_string());
        }
        if degree >= control_points.len() {
            return Err(format!(
                "nurbs curve degree must be < control point count ({} >= {})",
                degree,
                control_points.len()
            ));
        }
        if let Some(index) = control_points.iter().position(|p| !p.is_finite()) {
            return Err(format!("nurbs curve control point {index} is not finite"));
        }

        let expected_knot_len = control_points.len() + degree + 1;
        if knots.len() != expected_knot_len {
            return Err(format!(
                "nurbs curve knot length must be {}, got {}",
                expected_knot_len,
                knots.len()
            ));
        }

        if knots.iter().any(|k| !k.is_finite()) {
            return Err("nurbs curve knots must be finite".to_string());
        }
        if !is_non_decreasing(&knots) {
            return Err("nurbs curve knots must be non-decreasing".to_string());
        }

        let (start, end) = (knots[degree], knots[control_points.len()]);
        if end <= start {
            return Err("nurbs curve parameter domain is empty".to_string());
        }

        Ok(Self {
            degree,
            control_points,
            knots,
            form,
        })
    }

    /// Builds a curve from a host-style knot sequence.
    ///
    /// Hosts in the Maya tradition store `n + p - 1` knots and leave the two
    /// outermost ones implicit. They are restored here by repeating the first
    /// and last knot.
    pub fn from_host_knots(
        degree: usize,
        control_points: Vec<Point3>,
        host_knots: &[f64],
        form: CurveForm,
    ) -> Result<Self, String> {
        let expected = (control_points.len() + degree).saturating_sub(1);
        if host_knots.len() != expected {
            return Err(format!(
                "host knot sequence must have {} entries, got {}",
                expected,
                host_knots.len()
            ));
        }

        let (Some(&first), Some(&last)) = (host_knots.first(), host_knots.last()) else {
            return Err("host knot sequence is empty".to_string());
        };

        let mut knots = Vec::with_capacity(host_knots.len() + 2);
        knots.push(first);
        knots.extend_from_slice(host_knots);
        knots.push(last);

        Self::new(degree, control_points, knots, form)
    }

    /// Knot sequence without the two implicit end knots.
    #[must_use]
    pub fn host_knots(&self) -> &[f64] {
        &self.knots[1..self.knots.len() - 1]
    }

    /// Number of polynomial segments.
    #[must_use]
    pub fn spans(&self) -> usize {
        self.control_points.len().saturating_sub(self.degree)
    }
}

impl Curve3 for NurbsCurve3 {
    fn point_at(&self, t: f64) -> Point3 {
        let p = self.degree;
        let (a, b) = self.domain();
        let u = t.clamp(a, b);

        let n = self.control_points.len() - 1;
        let span = find_span(n, p, u, &self.knots);

        let mut d: Vec<Point3> = (0..=p)
            .map(|j| self.control_points[span - p + j])
            .collect();
        de_boor(&mut d, span, p, u, &self.knots);
        d[p]
    }

    fn domain(&self) -> (f64, f64) {
        (self.knots[self.degree], self.knots[self.control_points.len()])
    }

    fn is_closed(&self) -> bool {
        let (a, b) = self.domain();
        self.form != CurveForm::Open
            && Tolerance::default_geom().approx_eq_point3(self.point_at(a), self.point_at(b))
    }
}

/// Samples `steps + 1` evenly spaced parameters (endpoint excluded for closed curves).
pub fn tessellate_curve_uniform(curve: &impl Curve3, steps: usize) -> Vec<Point3> {
    let steps = steps.max(1);
    let (a, b) = curve.domain();
    let count = if curve.is_closed() { steps } else { steps + 1 };
    (0..count)
        .map(|i| {
            let t = a + (b - a) * (i as f64 / steps as f64);
            curve.point_at(t)
        })
        .collect()
}

fn is_non_decreasing(knots: &[f64]) -> bool {
    knots.windows(2).all(|w| w[0] <= w[1])
}

fn find_span(n: usize, p: usize, u: f64, knots: &[f64]) -> usize {
    if u >= knots[n + 1] {
        return n;
    }
    if u <= knots[p] {
        return p;
    }

    let mut low = p;
    let mut high = n + 1;
    let mut mid = (low + high) / 2;
    while u < knots[mid] || u >= knots[mid + 1] {
        if u < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2;
    }
    mid
}

fn de_boor(d: &mut [Point3], span: usize, p: usize, u: f64, knots: &[f64]) {
    for r in 1..=p {
        for j in (r..=p).rev() {
            let i = span - p + j;
            let denom = knots[i + p + 1 - r] - knots[i];
            let alpha = if denom == 0.0 { 0.0 } else { (u - knots[i]) / denom };
            d[j] = lerp_point(d[j - 1], d[j], alpha);
        }
    }
}

fn lerp_point(a: Point3, b: Point3, t: f64) -> Point3 {
    Point3::new(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}
