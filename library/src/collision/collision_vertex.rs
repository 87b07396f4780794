use crate::geometry::fixed_point::{FixedPosition, to_fixed_position};
use crate::material::material_index::MaterialIndex;
use crate::scene::flattener::visit_meshes;
use crate::scene::scene_graph::Scene;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CollisionVertex {
    position: FixedPosition,
    material: MaterialIndex,
    useless: bool,
    list: usize,
}

impl CollisionVertex {
    #[must_use]
    pub(crate) fn new(position: FixedPosition, material: MaterialIndex, list: usize) -> Self {
        Self { position, material, useless: false, list }
    }

    pub(super) fn merge_into(&mut self, canonical: usize) {
        self.useless = true;
        self.list = canonical;
    }

    pub(super) fn assign_slot(&mut self, slot: usize) {
        debug_assert!(!self.useless);
        self.list = slot;
    }

    #[must_use]
    pub fn position(&self) -> FixedPosition {
        self.position
    }

    #[must_use]
    pub fn material(&self) -> MaterialIndex {
        self.material
    }

    #[must_use]
    pub fn useless(&self) -> bool {
        self.useless
    }

    #[must_use]
    pub fn list(&self) -> usize {
        self.list
    }
}

/// One record per face corner, so shared mesh vertices repeat.
#[must_use]
pub(crate) fn collect_collision_vertices(scene: &Scene, scale: f32) -> Vec<CollisionVertex> {
    let mut vertices: Vec<CollisionVertex> = Vec::new();
    visit_meshes(scene.root(), scene, &mut |mesh| {
        for &face in mesh.faces() {
            for corner in mesh.corners(face) {
                let position = to_fixed_position(corner.position, scale);
                vertices.push(CollisionVertex::new(position, mesh.material(), vertices.len()));
            }
        }
    });
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::flattener::tests::make_strip_mesh;
    use crate::scene::scene_graph::{MeshIndex, Node};

    #[test]
    fn test_collect_enumerates_face_corners() {
        let meshes = vec![make_strip_mesh(2, MaterialIndex(1), 0.0)];
        let scene = Scene::new(Node::new("root").with_mesh(MeshIndex(0)), meshes, vec!["a".to_string(), "b".to_string()]);

        let system_under_test = collect_collision_vertices(&scene, 10.0);

        assert_eq!(system_under_test.len(), 6);
        assert_eq!(system_under_test[3].position(), [10, 10, 0]);
        assert_eq!(system_under_test[5].list(), 5);
        assert!(system_under_test.iter().all(|vertex| vertex.material() == MaterialIndex(1) && !vertex.useless()));
    }
}
