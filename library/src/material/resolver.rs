use crate::display_list::command::{Command, CycleType};
use crate::display_list::layer::Layer;
use crate::material::geometry_mode::GeometryModeState;
use crate::material::material_index::MaterialIndex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedMaterial {
    pub commands: Vec<Command>,
    pub invalidates_vertex_cache: bool,
}

pub trait MaterialResolver {
    #[must_use]
    fn name(&self, material: MaterialIndex) -> &str;

    /// Brings `geometry` up to date with the state the returned commands establish.
    #[must_use]
    fn resolve(&self, material: MaterialIndex, layer: Layer, geometry: &mut GeometryModeState, cycle: CycleType) -> ResolvedMaterial;
}
