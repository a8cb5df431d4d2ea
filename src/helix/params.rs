use serde::Serialize;

/// Standaardstraal van de helix.
pub const DEFAULT_RADIUS: f64 = 2.0;
/// Standaard hoogtetoename per radiaal.
pub const DEFAULT_PITCH: f64 = 0.25;
/// Standaard aantal control vertices.
pub const DEFAULT_CV_COUNT: u32 = 20;

/// Instelbare parameters van het helix-gereedschap.
///
/// De setters valideren bewust niets: een straal van nul of een negatieve
/// pitch levert een gedegenereerde of gespiegelde curve op. Alleen het aantal
/// control vertices wordt gecontroleerd, en wel bij het genereren.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelixParameters {
    pub radius: f64,
    pub pitch: f64,
    #[serde(rename = "numCVs")]
    pub cv_count: u32,
    pub upside_down: bool,
}

impl Default for HelixParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            pitch: DEFAULT_PITCH,
            cv_count: DEFAULT_CV_COUNT,
            upside_down: false,
        }
    }
}

impl HelixParameters {
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch;
    }

    pub fn set_cv_count(&mut self, cv_count: u32) {
        self.cv_count = cv_count;
    }

    pub fn set_upside_down(&mut self, upside_down: bool) {
        self.upside_down = upside_down;
    }

    /// Teken van de verticale voortgang: `-1` als de helix ondersteboven staat.
    #[must_use]
    pub fn up_factor(&self) -> f64 {
        if self.upside_down { -1.0 } else { 1.0 }
    }
}
