use crate::display_list::command::{Command, CycleType};
use crate::display_list::layer::Layer;
use crate::material::geometry_mode::{GeometryMode, GeometryModeState};
use crate::material::material_index::MaterialIndex;
use crate::material::resolver::{MaterialResolver, ResolvedMaterial};
use crate::material::surface::SURFACE_MARKER;
use log::{trace, warn};

const TAG_MARKER: char = '+';
const LAYER_TAG_PREFIX: &str = "LAYER_";
const UNLIT_TAG: &str = "UNLIT";
const ENVIRONMENT_MAP_TAG: &str = "ENVMAP";
const LINEAR_ENVIRONMENT_MAP_TAG: &str = "LIN_ENVMAP";
const BACKFACE_CULLING_TAG: &str = "BACKFACE";

const SHADE_COMBINER: &str = "G_CC_SHADE";
const PASS_COMBINER: &str = "G_CC_PASS2";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RenderTraits {
    pub layer: Layer,
    pub lit: bool,
    pub texture_generation: GeometryMode,
    pub backface_culling: bool,
}

impl Default for RenderTraits {
    fn default() -> Self {
        Self { layer: Layer::default(), lit: true, texture_generation: GeometryMode::empty(), backface_culling: false }
    }
}

impl RenderTraits {
    #[must_use]
    pub fn parse(material_name: &str) -> Self {
        let mut traits = RenderTraits::default();
        for tag in material_name.split(TAG_MARKER).skip(1).map(tag_token) {
            match tag {
                UNLIT_TAG => traits.lit = false,
                ENVIRONMENT_MAP_TAG => traits.texture_generation |= GeometryMode::G_TEXTURE_GEN,
                LINEAR_ENVIRONMENT_MAP_TAG => traits.texture_generation |= GeometryMode::TEXTURE_GENERATION,
                BACKFACE_CULLING_TAG => traits.backface_culling = true,
                _ => match tag.strip_prefix(LAYER_TAG_PREFIX) {
                    Some(value) => match value.parse::<u8>().ok().and_then(Layer::new) {
                        Some(layer) => traits.layer = layer,
                        None => warn!("material {material_name}: ignoring invalid layer tag '{tag}'"),
                    },
                    None => warn!("material {material_name}: ignoring unknown tag '{tag}'"),
                },
            }
        }
        traits
    }

    #[must_use]
    fn wanted_geometry(&self) -> GeometryMode {
        let mut wanted = GeometryMode::G_SHADE | self.texture_generation;
        if self.lit {
            wanted |= GeometryMode::G_LIGHTING;
        }
        if self.backface_culling {
            wanted |= GeometryMode::G_CULL_BACK;
        }
        wanted
    }
}

/// A tag runs up to whitespace or the surface marker.
#[must_use]
fn tag_token(segment: &str) -> &str {
    segment.split(|symbol: char| symbol.is_whitespace() || symbol == SURFACE_MARKER).next().unwrap_or_default()
}

struct LibraryEntry {
    name: String,
    traits: RenderTraits,
}

pub struct MaterialLibrary {
    entries: Vec<LibraryEntry>,
}

impl MaterialLibrary {
    #[must_use]
    pub fn new<Name: AsRef<str>>(material_names: &[Name]) -> Self {
        let entries = material_names
            .iter()
            .map(|name| LibraryEntry { name: name.as_ref().to_string(), traits: RenderTraits::parse(name.as_ref()) })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn traits(&self, material: MaterialIndex) -> &RenderTraits {
        &self.entries[material.0].traits
    }

    #[must_use]
    pub fn layer(&self, material: MaterialIndex) -> Layer {
        self.traits(material).layer
    }

    #[must_use]
    pub fn lit(&self, material: MaterialIndex) -> bool {
        self.traits(material).lit
    }
}

impl MaterialResolver for MaterialLibrary {
    fn name(&self, material: MaterialIndex) -> &str {
        &self.entries[material.0].name
    }

    fn resolve(&self, material: MaterialIndex, layer: Layer, geometry: &mut GeometryModeState, cycle: CycleType) -> ResolvedMaterial {
        trace!("resolving material {} for layer {}", material, layer);
        let traits = self.traits(material);

        let second_combiner = match cycle {
            CycleType::OneCycle => SHADE_COMBINER,
            CycleType::TwoCycle => PASS_COMBINER,
        };
        let mut commands = vec![Command::pipe_sync(), Command::combine_mode(SHADE_COMBINER, second_combiner)];

        let wanted = traits.wanted_geometry();
        let current = geometry.active() & GeometryMode::MATERIAL_MANAGED;
        let to_clear = current.difference(wanted);
        let to_set = wanted.difference(current);
        if !to_clear.is_empty() {
            commands.push(Command::clear_geometry_mode(to_clear));
        }
        if !to_set.is_empty() {
            commands.push(Command::set_geometry_mode(to_set));
        }
        geometry.apply(to_set, to_clear);

        ResolvedMaterial { commands, invalidates_vertex_cache: to_set.union(to_clear).contains(GeometryMode::G_LIGHTING) }
    }
}
