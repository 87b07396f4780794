use crate::config::settings::{ConversionSettings, FogSettings};
use crate::display_list::command::{Command, CycleType, DisplayList, GbiMacro};
use crate::display_list::grouping::{TriangleCursor, VertexGrouping};
use crate::display_list::layer::Layer;
use crate::display_list::vertex_writer::vertex_buffer_label;
use crate::geometry::fundamental_constants::{TRIANGLES_IN_PAIR, VERTICES_IN_TRIANGLE};
use crate::material::geometry_mode::{GeometryMode, GeometryModeState};
use crate::material::material_index::MaterialIndex;
use crate::material::resolver::MaterialResolver;
use log::debug;

/// Stock microcode buffers at or below this size have no two-triangle command.
pub const TWO_TRIANGLES_CAPACITY_THRESHOLD: usize = 15;

const OPAQUE_FOG_RENDER_MODE: (&str, &str) = ("G_RM_FOG_SHADE_A", "G_RM_AA_ZB_OPA_SURF2");
const TRANSPARENT_FOG_RENDER_MODE: (&str, &str) = ("G_RM_FOG_SHADE_A", "G_RM_AA_ZB_XLU_SURF2");
const DEFAULT_RENDER_MODE: (&str, &str) = ("G_RM_AA_ZB_OPA_SURF", "G_RM_NOOP2");

const TEXTURE_OFF_ARGUMENTS: &str = "-1, -1, 0, 0, 0";
const FLAT_SHADE_COMBINE_ARGUMENTS: &str = "G_CCMUX_0, G_CCMUX_0, G_CCMUX_0, G_CCMUX_SHADE, G_ACMUX_0, G_ACMUX_0, G_ACMUX_0, G_ACMUX_SHADE, \
G_CCMUX_0, G_CCMUX_0, G_CCMUX_0, G_CCMUX_SHADE, G_ACMUX_0, G_ACMUX_0, G_ACMUX_0, G_ACMUX_SHADE";
const NO_TEXTURE_LUT: &str = "G_TT_NONE";

#[must_use]
pub(crate) fn layer_label(asset: &str, layer: Layer) -> String {
    format!("{asset}_layer_{layer}")
}

pub struct CommandStreamEmitter<'a, Resolver: MaterialResolver> {
    asset: &'a str,
    resolver: &'a Resolver,
    fog: Option<FogSettings>,
    two_cycle: bool,
}

impl<'a, Resolver: MaterialResolver> CommandStreamEmitter<'a, Resolver> {
    #[must_use]
    pub fn new(asset: &'a str, resolver: &'a Resolver, settings: &ConversionSettings) -> Self {
        Self { asset, resolver, fog: settings.fog, two_cycle: settings.two_cycle }
    }

    #[must_use]
    pub fn two_cycle(&self) -> bool {
        self.two_cycle
    }

    #[must_use]
    pub fn emit_layer<Grouping: VertexGrouping>(&mut self, layer: Layer, groupings: &[Grouping]) -> DisplayList {
        let mut emission = LayerEmission {
            asset: self.asset,
            resolver: self.resolver,
            layer,
            cycle: CycleType::OneCycle,
            current_material: None,
            geometry: GeometryModeState::default(),
            display_list: DisplayList::default(),
        };

        emission.display_list.push(Command::Open(layer_label(self.asset, layer)));
        emission.display_list.push(Command::clear_geometry_mode(GeometryMode::G_LIGHTING));

        if self.two_cycle || self.fog.is_some() {
            emission.display_list.push(Command::cycle_type(CycleType::TwoCycle));
        }
        if let Some(fog) = self.fog {
            self.two_cycle = true;
            emission.emit_fog(&fog);
        }
        if self.two_cycle {
            emission.cycle = CycleType::TwoCycle;
        }

        for grouping in groupings.iter().filter(|grouping| grouping.has_layer(layer)) {
            emission.emit_grouping(grouping);
        }

        emission.emit_epilogue(self.two_cycle, self.fog.is_some());
        debug!("layer {} of {}: {} commands", layer, self.asset, emission.display_list.commands().len());
        emission.display_list
    }
}

struct LayerEmission<'a, Resolver: MaterialResolver> {
    asset: &'a str,
    resolver: &'a Resolver,
    layer: Layer,
    cycle: CycleType,
    current_material: Option<MaterialIndex>,
    geometry: GeometryModeState,
    display_list: DisplayList,
}

impl<Resolver: MaterialResolver> LayerEmission<'_, Resolver> {
    fn emit_fog(&mut self, fog: &FogSettings) {
        let (first_cycle, second_cycle) = if self.layer.is_transparent() { TRANSPARENT_FOG_RENDER_MODE } else { OPAQUE_FOG_RENDER_MODE };
        self.display_list.push(Command::render_mode(first_cycle, second_cycle));
        self.display_list.push(Command::set_geometry_mode(GeometryMode::G_FOG));
        self.display_list.push(Command::call(GbiMacro::FogPosition, format!("{}, {}", fog.near, fog.far)));
        let [r, g, b, a] = fog.color;
        self.display_list.push(Command::call(GbiMacro::SetFogColor, format!("{r}, {g}, {b}, {a}")));
    }

    fn emit_grouping<Grouping: VertexGrouping>(&mut self, grouping: &Grouping) {
        let mut cursor = grouping.cursor(self.layer);

        if let Some(material) = grouping.first_material(self.layer) {
            if self.current_material != Some(material) {
                let _ = self.emit_material(material);
            }
        }

        let vertex_load = Command::vertex_load(&vertex_buffer_label(self.asset, grouping.slot()), grouping.load_size());
        self.display_list.push(vertex_load.clone());

        while cursor.has_triangles() {
            if let Some(material) = cursor.pending_material() {
                if self.current_material != Some(material) && self.emit_material(material) {
                    self.display_list.push(vertex_load.clone());
                }
            }

            let packing = cursor.can_pack_pair() && grouping.capacity() > TWO_TRIANGLES_CAPACITY_THRESHOLD;
            let draw = if packing {
                pull_indices::<{ VERTICES_IN_TRIANGLE * TRIANGLES_IN_PAIR }>(&mut cursor).map(Command::two_triangles)
            } else {
                pull_indices::<VERTICES_IN_TRIANGLE>(&mut cursor).map(Command::one_triangle)
            };

            match draw {
                Some(command) => self.display_list.push(command),
                None => {
                    debug!("vertex buffer {} ran out of indices in layer {}", grouping.slot(), self.layer);
                    break;
                }
            }
        }
    }

    /// Returns whether the vertex cache must be reloaded.
    fn emit_material(&mut self, material: MaterialIndex) -> bool {
        let resolved = self.resolver.resolve(material, self.layer, &mut self.geometry, self.cycle);
        self.display_list.push(Command::Comment(self.resolver.name(material).to_string()));
        self.display_list.extend(resolved.commands);
        self.current_material = Some(material);
        resolved.invalidates_vertex_cache
    }

    fn emit_epilogue(&mut self, two_cycle: bool, fog: bool) {
        self.display_list.push(Command::call(GbiMacro::Texture, TEXTURE_OFF_ARGUMENTS));
        self.display_list.push(Command::pipe_sync());
        self.display_list.push(Command::call(GbiMacro::SetCombineModeLerp, FLAT_SHADE_COMBINE_ARGUMENTS));
        self.display_list.push(Command::set_geometry_mode(GeometryMode::G_LIGHTING));
        self.display_list.push(Command::call(GbiMacro::SetTextureLut, NO_TEXTURE_LUT));

        if two_cycle {
            self.display_list.push(Command::cycle_type(CycleType::OneCycle));
        }
        if fog {
            let (first_cycle, second_cycle) = DEFAULT_RENDER_MODE;
            self.display_list.push(Command::render_mode(first_cycle, second_cycle));
            self.display_list.push(Command::clear_geometry_mode(GeometryMode::G_FOG));
        }

        let texture_generation = self.geometry.texture_generation_to_clear();
        if !texture_generation.is_empty() {
            self.display_list.push(Command::clear_geometry_mode(texture_generation));
        }
        if self.geometry.culling_to_clear() {
            self.display_list.push(Command::clear_geometry_mode(GeometryMode::G_CULL_BACK));
        }

        self.display_list.push(Command::bare(GbiMacro::EndDisplayList));
        self.display_list.push(Command::Close);
    }
}

/// Always consumes `N` pulls; any missing index drops the whole draw.
#[must_use]
fn pull_indices<const N: usize>(cursor: &mut impl TriangleCursor) -> Option<[u16; N]> {
    let mut indices = [0u16; N];
    let mut complete = true;
    for index in indices.iter_mut() {
        match cursor.next_index() {
            Some(value) => *index = value,
            None => complete = false,
        }
    }
    complete.then_some(indices)
}
