use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::material::material_index::MaterialIndex;
use crate::material::material_record::MaterialRecord;
use crate::material::surface::configure_materials;
use crate::scene::flattener::inspect_node;
use crate::scene::scene_graph::Scene;

/// Counters of one conversion run. Build a fresh one per scene.
#[derive(Clone, Debug, Default)]
pub struct ConversionContext {
    vertex_total: usize,
    materials: Vec<MaterialRecord>,
}

impl ConversionContext {
    #[must_use]
    pub fn new(scene: &Scene) -> Self {
        let mut context = Self { vertex_total: 0, materials: configure_materials(scene.material_names()) };
        inspect_node(scene.root(), scene, &mut context);
        context
    }

    pub(crate) fn register_mesh(&mut self, material: MaterialIndex, face_count: usize) {
        self.vertex_total += face_count * VERTICES_IN_TRIANGLE;
        self.materials[material.0].register_triangles(face_count);
    }

    #[must_use]
    pub fn vertex_total(&self) -> usize {
        self.vertex_total
    }

    #[must_use]
    pub fn materials(&self) -> &[MaterialRecord] {
        &self.materials
    }

    #[must_use]
    pub fn material(&self, index: MaterialIndex) -> &MaterialRecord {
        &self.materials[index.0]
    }
}
