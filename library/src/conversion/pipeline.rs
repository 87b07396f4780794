use crate::collision::collision_vertex::collect_collision_vertices;
use crate::collision::collision_writer::write_collision;
use crate::collision::deduplicator::deduplicate;
use crate::config::settings::{ConversionSettings, SettingsError, source_scale_correction};
use crate::conversion::context::ConversionContext;
use crate::display_list::emitter::CommandStreamEmitter;
use crate::display_list::grouping::VertexGrouping;
use crate::display_list::layer::Layer;
use crate::display_list::vertex_buffer::build_vertex_buffers;
use crate::display_list::vertex_writer::write_vertex_buffers;
use crate::material::material_library::MaterialLibrary;
use crate::scene::obj_import::{MeshLoadError, import_obj};
use crate::scene::scene_graph::Scene;
use crate::utils::file_system::{ensure_folder_exists, write_text_file};
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const COLLISION_FILE_NAME: &str = "collision.s";

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error(transparent)]
    MeshLoadError(#[from] MeshLoadError),
    #[error(transparent)]
    SettingsError(#[from] SettingsError),
    #[error("failed to write output: {what:?}")]
    OutputError { what: String },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ConversionTargets {
    pub collision: bool,
    pub display_lists: bool,
}

impl ConversionTargets {
    pub const ALL: ConversionTargets = ConversionTargets { collision: true, display_lists: true };
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversionReport {
    pub asset: String,
    pub written_files: Vec<PathBuf>,
    pub collision_vertices: usize,
    pub merged_vertices: usize,
    pub vertex_buffers: usize,
    pub layers: Vec<Layer>,
}

pub struct CollisionOutput {
    pub text: String,
    pub kept_vertices: usize,
    pub merged_vertices: usize,
}

pub struct DisplayListOutput {
    pub text: String,
    pub vertex_buffers: usize,
    pub layers: Vec<Layer>,
}

#[must_use]
pub fn convert_collision(scene: &Scene, asset: &str, scale: f32) -> CollisionOutput {
    let context = ConversionContext::new(scene);
    let compacted = deduplicate(collect_collision_vertices(scene, scale));
    info!("{}: {} collision vertices, {} merged, {} kept", asset, context.vertex_total(), compacted.merges(), compacted.kept_count());
    CollisionOutput {
        text: write_collision(asset, &compacted, &context),
        kept_vertices: compacted.kept_count(),
        merged_vertices: compacted.merges(),
    }
}

#[must_use]
pub fn convert_display_lists(scene: &Scene, asset: &str, settings: &ConversionSettings, scale: f32) -> DisplayListOutput {
    let library = MaterialLibrary::new(scene.material_names());
    let buffers = build_vertex_buffers(scene, &library, scale, settings.buffer_size);

    let mut text = write_vertex_buffers(asset, &buffers, settings.export_format);
    let mut emitter = CommandStreamEmitter::new(asset, &library, settings);
    let mut layers = Vec::new();
    for layer in Layer::all().filter(|layer| buffers.iter().any(|buffer| buffer.has_layer(*layer))) {
        text.push_str(&emitter.emit_layer(layer, &buffers).render(settings.export_format));
        text.push('\n');
        layers.push(layer);
    }

    info!("{}: {} vertex buffers, {} layers", asset, buffers.len(), layers.len());
    DisplayListOutput { text, vertex_buffers: buffers.len(), layers }
}

/// The output folder name becomes the asset name of every label.
#[must_use]
pub fn asset_name(output_folder: &Path) -> String {
    output_folder.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_else(|| "model".to_string())
}

pub fn convert_file(source_file: &Path, output_folder: &Path, settings: &ConversionSettings, targets: ConversionTargets) -> Result<ConversionReport, ConversionError> {
    settings.validate()?;
    let scene = import_obj(source_file)?;
    let scale = f32::from(settings.scale) * source_scale_correction(source_file);
    let asset = asset_name(output_folder);
    info!("converting {} into {} as '{}' at scale {}", source_file.display(), output_folder.display(), asset, scale);

    ensure_folder_exists(&output_folder).map_err(|e| ConversionError::OutputError { what: e.to_string() })?;
    let mut report = ConversionReport { asset: asset.clone(), ..ConversionReport::default() };

    if targets.collision {
        let collision = convert_collision(&scene, &asset, scale);
        let target = output_folder.join(COLLISION_FILE_NAME);
        write_text_file(&target, &collision.text).map_err(|e| ConversionError::OutputError { what: e.to_string() })?;
        report.collision_vertices = collision.kept_vertices;
        report.merged_vertices = collision.merged_vertices;
        report.written_files.push(target);
    }

    if targets.display_lists {
        let display_lists = convert_display_lists(&scene, &asset, settings, scale);
        let target = output_folder.join(settings.export_format.model_file_name());
        write_text_file(&target, &display_lists.text).map_err(|e| ConversionError::OutputError { what: e.to_string() })?;
        report.vertex_buffers = display_lists.vertex_buffers;
        report.layers = display_lists.layers;
        report.written_files.push(target);
    }

    Ok(report)
}
