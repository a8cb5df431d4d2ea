use std::collections::BTreeMap;

use crate::geom::{CurveForm, NurbsCurve3};

use super::{CurveConstruction, CurveHandle, CurveHost, NodeHandle, SceneError};

/// Curve-node zoals de in-memory scene die bijhoudt.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCurve {
    pub transform: NodeHandle,
    pub curve_id: u64,
    pub name: String,
    pub curve: NurbsCurve3,
}

/// Eenvoudige scene zonder host: valideert curves door ze als
/// [`NurbsCurve3`] op te bouwen en bewaart ze per transform.
#[derive(Debug, Default)]
pub struct InMemoryScene {
    nodes: BTreeMap<NodeHandle, SceneCurve>,
    owners: BTreeMap<u64, NodeHandle>,
    next_id: u64,
    created: u64,
}

impl InMemoryScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, node: NodeHandle) -> bool {
        self.nodes.contains_key(&node)
    }

    #[must_use]
    pub fn curve(&self, curve: &CurveHandle) -> Option<&SceneCurve> {
        self.owners
            .get(&curve.id())
            .and_then(|node| self.nodes.get(node))
    }

    /// Alle curves op volgorde van aanmaak.
    pub fn curves(&self) -> impl Iterator<Item = &SceneCurve> {
        self.nodes.values()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl CurveHost for InMemoryScene {
    fn construct_curve(
        &mut self,
        request: &CurveConstruction<'_>,
    ) -> Result<CurveHandle, SceneError> {
        if request.periodic || request.form == CurveForm::Periodic {
            return Err(SceneError::Unsupported("periodieke curves"));
        }
        if request.rational {
            return Err(SceneError::Unsupported("rationale curves"));
        }

        let curve = NurbsCurve3::from_host_knots(
            request.degree,
            request.control_vertices.to_vec(),
            request.knots,
            request.form,
        )
        .map_err(SceneError::Rejected)?;

        let transform = NodeHandle(self.allocate_id());
        let curve_id = self.allocate_id();
        self.created += 1;
        let name = format!("curve{}", self.created);

        log::debug!(
            "{name} aangemaakt ({transform}, {} CV's, {} spans)",
            curve.control_points.len(),
            curve.spans()
        );

        self.owners.insert(curve_id, transform);
        self.nodes.insert(
            transform,
            SceneCurve {
                transform,
                curve_id,
                name,
                curve,
            },
        );

        Ok(CurveHandle::new(curve_id))
    }

    fn owning_transform(&self, curve: &CurveHandle) -> Result<NodeHandle, SceneError> {
        self.owners
            .get(&curve.id())
            .copied()
            .ok_or(SceneError::CurveNotFound(curve.id()))
    }

    fn delete_node(&mut self, node: NodeHandle) -> Result<(), SceneError> {
        let removed = self
            .nodes
            .remove(&node)
            .ok_or(SceneError::NodeNotFound(node))?;
        self.owners.remove(&removed.curve_id);
        log::debug!("{} verwijderd ({node})", removed.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryScene;
    use crate::geom::{CurveForm, Point3};
    use crate::scene::{CurveConstruction, CurveHost, SceneError};

    fn square_points() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ]
    }

    fn request<'a>(points: &'a [Point3], knots: &'a [f64]) -> CurveConstruction<'a> {
        CurveConstruction {
            control_vertices: points,
            knots,
            degree: 3,
            form: CurveForm::Open,
            periodic: false,
            rational: false,
        }
    }

    #[test]
    fn construct_then_delete_round_trips() {
        let mut scene = InMemoryScene::new();
        let points = square_points();
        let knots = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let handle = scene.construct_curve(&request(&points, &knots)).expect("curve");
        assert_eq!(scene.len(), 1);
        let stored = scene.curve(&handle).expect("opgeslagen curve");
        assert_eq!(stored.name, "curve1");
        assert_eq!(stored.curve.control_points, points);

        let transform = scene.owning_transform(&handle).expect("transform");
        assert!(scene.contains(transform));
        scene.delete_node(transform).expect("verwijderen");

        assert!(scene.is_empty());
        assert_eq!(
            scene.owning_transform(&handle),
            Err(SceneError::CurveNotFound(handle.id()))
        );
        assert_eq!(
            scene.delete_node(transform),
            Err(SceneError::NodeNotFound(transform))
        );
    }

    #[test]
    fn rejects_bad_knot_count() {
        let mut scene = InMemoryScene::new();
        let points = square_points();
        let knots = [0.0, 1.0, 2.0];

        let err = scene.construct_curve(&request(&points, &knots)).unwrap_err();
        assert!(matches!(err, SceneError::Rejected(_)));
        assert!(scene.is_empty());
    }

    #[test]
    fn rejects_periodic_and_rational_requests() {
        let mut scene = InMemoryScene::new();
        let points = square_points();
        let knots = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let mut periodic = request(&points, &knots);
        periodic.periodic = true;
        assert!(matches!(
            scene.construct_curve(&periodic),
            Err(SceneError::Unsupported(_))
        ));

        let mut rational = request(&points, &knots);
        rational.rational = true;
        assert!(matches!(
            scene.construct_curve(&rational),
            Err(SceneError::Unsupported(_))
        ));
        assert!(scene.is_empty());
    }

    #[test]
    fn names_keep_counting_after_deletion() {
        let mut scene = InMemoryScene::new();
        let points = square_points();
        let knots = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let first = scene.construct_curve(&request(&points, &knots)).expect("curve");
        let transform = scene.owning_transform(&first).expect("transform");
        scene.delete_node(transform).expect("verwijderen");

        let second = scene.construct_curve(&request(&points, &knots)).expect("curve");
        assert_ne!(first, second);
        assert_eq!(scene.curve(&second).map(|c| c.name.as_str()), Some("curve2"));
    }
}
