use crate::display_list::layer::Layer;
use crate::material::material_index::MaterialIndex;

pub trait TriangleCursor {
    #[must_use]
    fn has_triangles(&self) -> bool;

    /// `None` when the pending triangle has no material in this layer.
    #[must_use]
    fn pending_material(&self) -> Option<MaterialIndex>;

    #[must_use]
    fn can_pack_pair(&self) -> bool;

    /// `None` once the grouping runs out of index data.
    fn next_index(&mut self) -> Option<u16>;
}

pub trait VertexGrouping {
    type Cursor<'grouping>: TriangleCursor
    where
        Self: 'grouping;

    #[must_use]
    fn slot(&self) -> usize;

    #[must_use]
    fn capacity(&self) -> usize;

    #[must_use]
    fn load_size(&self) -> usize;

    #[must_use]
    fn has_layer(&self, layer: Layer) -> bool;

    #[must_use]
    fn first_material(&self, layer: Layer) -> Option<MaterialIndex>;

    #[must_use]
    fn cursor(&self, layer: Layer) -> Self::Cursor<'_>;
}
