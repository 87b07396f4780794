use crate::geometry::alias::{Point, TextureCoordinate, Vector};
use crate::material::material_index::MaterialIndex;
use crate::scene::scene_graph::{Face, Mesh, MeshIndex, MeshVertex, Node, Scene};
use cgmath::Zero;
use log::{debug, warn};
use obj::ObjError;
use obj::raw::object::{Group, Polygon, RawObj, parse_obj};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub(crate) const DEFAULT_GROUP_NAME: &str = "default";
pub(crate) const DEFAULT_MATERIAL_NAME: &str = "default";

const ROOT_NODE_NAME: &str = "root";

#[derive(Error, Debug)]
pub enum MeshLoadError {
    #[error("io problem while loading scene: {what:?}")]
    IoError { what: String },
    #[error("format problem while loading scene: {what:?}")]
    FormatError { what: String },
    #[error("invalid scene content: {what:?}")]
    ContentError { what: String },
}

pub fn import_obj(source_file: &Path) -> Result<Scene, MeshLoadError> {
    let file = File::open(source_file).map_err(|e| MeshLoadError::IoError { what: e.to_string() })?;
    parse_obj_scene(BufReader::new(file))
}

pub fn parse_obj_scene(reader: impl BufRead) -> Result<Scene, MeshLoadError> {
    let raw = parse_obj(reader).map_err(|e| translate_error(e))?;
    if raw.polygons.is_empty() {
        return Err(MeshLoadError::ContentError { what: "no polygons".to_string() });
    }

    let material_of = polygon_owners(&raw.meshes, raw.polygons.len());
    let group_of = polygon_owners(&raw.groups, raw.polygons.len());

    let mut material_names: Vec<String> = Vec::new();
    let mut nodes: Vec<NodeBuilder> = Vec::new();

    for (polygon_index, polygon) in raw.polygons.iter().enumerate() {
        let corners = polygon_corners(polygon);
        if corners.len() < 3 {
            warn!("skipping polygon {} with {} corners", polygon_index, corners.len());
            continue;
        }

        let material_name = material_of[polygon_index].unwrap_or(DEFAULT_MATERIAL_NAME);
        let material = index_of_or_insert(&mut material_names, material_name, |name| name.as_str());
        let group_name = group_of[polygon_index].unwrap_or(DEFAULT_GROUP_NAME);
        let node = index_of_or_insert_with(&mut nodes, group_name, |node| node.name.as_str(), || NodeBuilder::new(group_name));

        let mesh = nodes[node].mesh_of(MaterialIndex(material));
        let mut indices = Vec::with_capacity(corners.len());
        for corner in corners {
            indices.push(mesh.vertex_index(corner, &raw)?);
        }
        for k in 1..indices.len() - 1 {
            mesh.faces.push(Face([indices[0], indices[k], indices[k + 1]]));
        }
    }

    if nodes.is_empty() {
        return Err(MeshLoadError::ContentError { what: "no triangulable polygons".to_string() });
    }

    let mut meshes: Vec<Mesh> = Vec::new();
    let mut root = Node::new(ROOT_NODE_NAME);
    for builder in nodes {
        let mut node = Node::new(builder.name);
        for (material, mesh) in builder.meshes {
            debug!("imported mesh with {} faces for material {}", mesh.faces.len(), material);
            meshes.push(Mesh::new(mesh.vertices, mesh.faces, material));
            node = node.with_mesh(MeshIndex(meshes.len() - 1));
        }
        root = root.with_child(node);
    }

    Ok(Scene::new(root, meshes, material_names))
}

#[must_use]
fn translate_error(from: ObjError) -> MeshLoadError {
    match from {
        ObjError::Io(_) => MeshLoadError::IoError { what: from.to_string() },
        ObjError::ParseInt(_) => MeshLoadError::FormatError { what: from.to_string() },
        ObjError::ParseFloat(_) => MeshLoadError::FormatError { what: from.to_string() },
        ObjError::Load(_) => MeshLoadError::FormatError { what: from.to_string() },
    }
}

/// Polygons before the first `usemtl` or `g` sit under an empty key; those stay unowned.
#[must_use]
fn polygon_owners(groups: &HashMap<String, Group>, polygon_count: usize) -> Vec<Option<&str>> {
    let mut owners = vec![None; polygon_count];
    for (name, group) in groups.iter().filter(|(name, _)| !name.is_empty()) {
        for range in &group.polygons {
            for polygon in range.start..range.end.min(polygon_count) {
                owners[polygon] = Some(name.as_str());
            }
        }
    }
    owners
}

type Corner = (usize, Option<usize>, Option<usize>);

#[must_use]
fn polygon_corners(polygon: &Polygon) -> Vec<Corner> {
    match polygon {
        Polygon::P(corners) => corners.iter().map(|&p| (p, None, None)).collect(),
        Polygon::PT(corners) => corners.iter().map(|&(p, t)| (p, Some(t), None)).collect(),
        Polygon::PN(corners) => corners.iter().map(|&(p, n)| (p, None, Some(n))).collect(),
        Polygon::PTN(corners) => corners.iter().map(|&(p, t, n)| (p, Some(t), Some(n))).collect(),
    }
}

fn index_of_or_insert<T: From<String>>(items: &mut Vec<T>, key: &str, key_of: impl Fn(&T) -> &str) -> usize {
    index_of_or_insert_with(items, key, key_of, || T::from(key.to_string()))
}

fn index_of_or_insert_with<T>(items: &mut Vec<T>, key: &str, key_of: impl Fn(&T) -> &str, make: impl FnOnce() -> T) -> usize {
    if let Some(found) = items.iter().position(|item| key_of(item) == key) {
        return found;
    }
    items.push(make());
    items.len() - 1
}

struct NodeBuilder {
    name: String,
    meshes: Vec<(MaterialIndex, MeshBuilder)>,
}

impl NodeBuilder {
    #[must_use]
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), meshes: Vec::new() }
    }

    fn mesh_of(&mut self, material: MaterialIndex) -> &mut MeshBuilder {
        let slot = match self.meshes.iter().position(|(owner, _)| *owner == material) {
            Some(found) => found,
            None => {
                self.meshes.push((material, MeshBuilder::default()));
                self.meshes.len() - 1
            }
        };
        &mut self.meshes[slot].1
    }
}

#[derive(Default)]
struct MeshBuilder {
    lookup: HashMap<Corner, u32>,
    vertices: Vec<MeshVertex>,
    faces: Vec<Face>,
}

impl MeshBuilder {
    fn vertex_index(&mut self, corner: Corner, raw: &RawObj) -> Result<u32, MeshLoadError> {
        if let Some(&known) = self.lookup.get(&corner) {
            return Ok(known);
        }

        let (position, texture_coordinate, normal) = corner;
        let &(x, y, z, _) = raw.positions.get(position).ok_or_else(|| dangling("position", position))?;
        let texture_coordinate = match texture_coordinate {
            Some(index) => {
                let &(u, v, _) = raw.tex_coords.get(index).ok_or_else(|| dangling("texture coordinate", index))?;
                TextureCoordinate::new(u, v)
            }
            None => TextureCoordinate::zero(),
        };
        let normal = match normal {
            Some(index) => {
                let &(x, y, z) = raw.normals.get(index).ok_or_else(|| dangling("normal", index))?;
                Vector::new(x, y, z)
            }
            None => Vector::zero(),
        };

        self.vertices.push(MeshVertex { position: Point::new(x, y, z), normal, texture_coordinate });
        let index = (self.vertices.len() - 1) as u32;
        self.lookup.insert(corner, index);
        Ok(index)
    }
}

#[must_use]
fn dangling(what: &str, index: usize) -> MeshLoadError {
    MeshLoadError::ContentError { what: format!("{what} index {index} is out of range") }
}
