//! Koppelvlak met de scene van de host: curveconstructie en het verwijderen
//! van nodes.

mod memory;

use std::fmt;

use thiserror::Error;

use crate::geom::{CurveForm, Point3};

pub use memory::{InMemoryScene, SceneCurve};

/// Verwijzing naar een curve die de host heeft aangemaakt.
///
/// Bewust niet `Clone`: het commando dat de curve maakte is de enige eigenaar.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CurveHandle(u64);

impl CurveHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Id van een transform-node in de scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(pub u64);

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Aanvraag voor de curve-constructor van de host.
#[derive(Debug, Clone, Copy)]
pub struct CurveConstruction<'a> {
    pub control_vertices: &'a [Point3],
    /// Knots in hostconventie (`n + degree - 1` waarden).
    pub knots: &'a [f64],
    pub degree: usize,
    pub form: CurveForm,
    pub periodic: bool,
    pub rational: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("curve geweigerd: {0}")]
    Rejected(String),
    #[error("niet ondersteund: {0}")]
    Unsupported(&'static str),
    #[error("{0} bestaat niet (meer)")]
    NodeNotFound(NodeHandle),
    #[error("curve #{0} bestaat niet (meer)")]
    CurveNotFound(u64),
}

/// De externe operaties die een commando op de scene mag uitvoeren.
pub trait CurveHost {
    /// Bouwt een curve en voegt die, met een eigen transform, aan de scene toe.
    fn construct_curve(&mut self, request: &CurveConstruction<'_>)
        -> Result<CurveHandle, SceneError>;

    /// Zoekt de transform op die eigenaar is van de curve.
    fn owning_transform(&self, curve: &CurveHandle) -> Result<NodeHandle, SceneError>;

    /// Verwijdert een node inclusief onderliggende nodes.
    fn delete_node(&mut self, node: NodeHandle) -> Result<(), SceneError>;
}
