use crate::geometry::alias::{Point, TextureCoordinate, Vector};
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::material::material_index::MaterialIndex;
use cgmath::Zero;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MeshIndex(pub usize);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Face(pub [u32; VERTICES_IN_TRIANGLE]);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Point,
    pub normal: Vector,
    pub texture_coordinate: TextureCoordinate,
}

impl MeshVertex {
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self { position, normal: Vector::zero(), texture_coordinate: TextureCoordinate::zero() }
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<MeshVertex>,
    faces: Vec<Face>,
    material: MaterialIndex,
}

impl Mesh {
    #[must_use]
    pub fn new(vertices: Vec<MeshVertex>, faces: Vec<Face>, material: MaterialIndex) -> Self {
        for face in &faces {
            for index in face.0 {
                assert!((index as usize) < vertices.len(), "face index {} is out of {} vertices", index, vertices.len());
            }
        }
        Self { vertices, faces, material }
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn material(&self) -> MaterialIndex {
        self.material
    }

    #[must_use]
    pub fn corners(&self, face: Face) -> [&MeshVertex; VERTICES_IN_TRIANGLE] {
        face.0.map(|index| &self.vertices[index as usize])
    }
}

#[derive(Clone, Debug, Default)]
pub struct Node {
    name: String,
    meshes: Vec<MeshIndex>,
    children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: MeshIndex) -> Self {
        self.meshes.push(mesh);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn meshes(&self) -> &[MeshIndex] {
        &self.meshes
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

pub struct Scene {
    root: Node,
    meshes: Vec<Mesh>,
    material_names: Vec<String>,
}

impl Scene {
    #[must_use]
    pub fn new(root: Node, meshes: Vec<Mesh>, material_names: Vec<String>) -> Self {
        for mesh in &meshes {
            assert!(mesh.material().0 < material_names.len(), "mesh references unknown material {}", mesh.material());
        }
        validate_references(&root, meshes.len());
        Self { root, meshes, material_names }
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[must_use]
    pub fn mesh(&self, index: MeshIndex) -> &Mesh {
        &self.meshes[index.0]
    }

    #[must_use]
    pub fn material_count(&self) -> usize {
        self.material_names.len()
    }

    #[must_use]
    pub fn material_name(&self, index: MaterialIndex) -> &str {
        &self.material_names[index.0]
    }

    #[must_use]
    pub fn material_names(&self) -> &[String] {
        &self.material_names
    }
}

fn validate_references(node: &Node, mesh_count: usize) {
    for mesh in node.meshes() {
        assert!(mesh.0 < mesh_count, "node '{}' references unknown mesh {}", node.name(), mesh.0);
    }
    for child in node.children() {
        validate_references(child, mesh_count);
    }
}
