use crate::display_list::grouping::{TriangleCursor, VertexGrouping};
use crate::display_list::layer::Layer;
use crate::geometry::fixed_point::{FixedPosition, FixedTextureCoordinate, Shade, normal_shade, to_fixed_position, to_fixed_texture_coordinate, unlit_shade};
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::material::material_index::MaterialIndex;
use crate::material::material_library::MaterialLibrary;
use crate::scene::flattener::visit_meshes;
use crate::scene::scene_graph::Scene;
use log::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DisplayVertex {
    pub position: FixedPosition,
    pub texture_coordinate: FixedTextureCoordinate,
    pub shade: Shade,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DisplayTriangle {
    pub material: MaterialIndex,
    pub layer: Layer,
    pub corners: [DisplayVertex; VERTICES_IN_TRIANGLE],
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct BufferTriangle {
    material: MaterialIndex,
    layer: Layer,
    corners: [u16; VERTICES_IN_TRIANGLE],
}

#[derive(Clone, Debug)]
pub struct VertexBuffer {
    slot: usize,
    capacity: usize,
    vertices: Vec<DisplayVertex>,
    triangles: Vec<BufferTriangle>,
}

impl VertexBuffer {
    #[must_use]
    fn new(slot: usize, capacity: usize) -> Self {
        Self { slot, capacity, vertices: Vec::new(), triangles: Vec::new() }
    }

    #[must_use]
    pub fn vertices(&self) -> &[DisplayVertex] {
        &self.vertices
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    fn missing_vertices(&self, corners: &[DisplayVertex; VERTICES_IN_TRIANGLE]) -> usize {
        let mut missing: Vec<&DisplayVertex> = Vec::with_capacity(VERTICES_IN_TRIANGLE);
        for corner in corners {
            if !self.vertices.contains(corner) && !missing.contains(&corner) {
                missing.push(corner);
            }
        }
        missing.len()
    }

    #[must_use]
    fn fits(&self, triangle: &DisplayTriangle) -> bool {
        self.vertices.len() + self.missing_vertices(&triangle.corners) <= self.capacity
    }

    fn push(&mut self, triangle: &DisplayTriangle) {
        debug_assert!(self.fits(triangle));
        let corners = triangle.corners.map(|corner| self.local_index(corner));
        self.triangles.push(BufferTriangle { material: triangle.material, layer: triangle.layer, corners });
    }

    fn local_index(&mut self, corner: DisplayVertex) -> u16 {
        let index = match self.vertices.iter().position(|known| *known == corner) {
            Some(found) => found,
            None => {
                self.vertices.push(corner);
                self.vertices.len() - 1
            }
        };
        index as u16
    }
}

impl VertexGrouping for VertexBuffer {
    type Cursor<'grouping> = LayerCursor<'grouping>;

    fn slot(&self) -> usize {
        self.slot
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn load_size(&self) -> usize {
        self.vertices.len()
    }

    fn has_layer(&self, layer: Layer) -> bool {
        self.triangles.iter().any(|triangle| triangle.layer == layer)
    }

    fn first_material(&self, layer: Layer) -> Option<MaterialIndex> {
        self.triangles.iter().find(|triangle| triangle.layer == layer).map(|triangle| triangle.material)
    }

    fn cursor(&self, layer: Layer) -> LayerCursor<'_> {
        LayerCursor::new(&self.triangles, layer)
    }
}

pub struct LayerCursor<'buffer> {
    triangles: &'buffer [BufferTriangle],
    layer: Layer,
    triangle: usize,
    corner: usize,
}

impl<'buffer> LayerCursor<'buffer> {
    #[must_use]
    fn new(triangles: &'buffer [BufferTriangle], layer: Layer) -> Self {
        let mut cursor = Self { triangles, layer, triangle: 0, corner: 0 };
        cursor.triangle = cursor.next_in_layer(0);
        cursor
    }

    #[must_use]
    fn next_in_layer(&self, from: usize) -> usize {
        (from..self.triangles.len()).find(|&index| self.triangles[index].layer == self.layer).unwrap_or(self.triangles.len())
    }

    #[must_use]
    fn current(&self) -> Option<&BufferTriangle> {
        self.triangles.get(self.triangle)
    }
}

impl TriangleCursor for LayerCursor<'_> {
    fn has_triangles(&self) -> bool {
        self.current().is_some()
    }

    fn pending_material(&self) -> Option<MaterialIndex> {
        self.current().map(|triangle| triangle.material)
    }

    fn can_pack_pair(&self) -> bool {
        let Some(current) = self.current() else {
            return false;
        };
        if self.corner != 0 {
            return false;
        }
        let following = self.next_in_layer(self.triangle + 1);
        self.triangles.get(following).is_some_and(|next| next.material == current.material)
    }

    fn next_index(&mut self) -> Option<u16> {
        let index = self.current()?.corners[self.corner];
        self.corner += 1;
        if self.corner == VERTICES_IN_TRIANGLE {
            self.corner = 0;
            self.triangle = self.next_in_layer(self.triangle + 1);
        }
        Some(index)
    }
}

#[must_use]
pub(crate) fn collect_display_triangles(scene: &Scene, library: &MaterialLibrary, scale: f32) -> Vec<DisplayTriangle> {
    let mut triangles = Vec::new();
    visit_meshes(scene.root(), scene, &mut |mesh| {
        let material = mesh.material();
        let lit = library.lit(material);
        for &face in mesh.faces() {
            let corners = mesh.corners(face).map(|corner| DisplayVertex {
                position: to_fixed_position(corner.position, scale),
                texture_coordinate: to_fixed_texture_coordinate(corner.texture_coordinate),
                shade: if lit { normal_shade(corner.normal) } else { unlit_shade() },
            });
            triangles.push(DisplayTriangle { material, layer: library.layer(material), corners });
        }
    });
    triangles
}

/// Greedy packing of (layer, material) ordered triangles. Capacity must hold one triangle.
#[must_use]
pub fn pack_vertex_buffers(mut triangles: Vec<DisplayTriangle>, capacity: usize) -> Vec<VertexBuffer> {
    assert!(capacity >= VERTICES_IN_TRIANGLE, "buffer capacity {} cannot hold a triangle", capacity);
    triangles.sort_by_key(|triangle| (triangle.layer, triangle.material));

    let mut buffers: Vec<VertexBuffer> = Vec::new();
    let mut current = VertexBuffer::new(0, capacity);
    for triangle in &triangles {
        if !current.fits(triangle) {
            let slot = current.slot + 1;
            buffers.push(std::mem::replace(&mut current, VertexBuffer::new(slot, capacity)));
        }
        current.push(triangle);
    }
    if !current.triangles.is_empty() {
        buffers.push(current);
    }

    debug!("packed {} triangles into {} vertex buffers of capacity {}", triangles.len(), buffers.len(), capacity);
    buffers
}

#[must_use]
pub fn build_vertex_buffers(scene: &Scene, library: &MaterialLibrary, scale: f32, capacity: usize) -> Vec<VertexBuffer> {
    pack_vertex_buffers(collect_display_triangles(scene, library, scale), capacity)
}
