use crate::material::material_index::MaterialIndex;
use crate::material::surface::SurfaceTag;

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRecord {
    index: MaterialIndex,
    triangles: usize,
    surface: SurfaceTag,
}

impl MaterialRecord {
    #[must_use]
    pub(crate) fn new(index: MaterialIndex, surface: SurfaceTag) -> Self {
        Self { index, triangles: 0, surface }
    }

    pub(crate) fn register_triangles(&mut self, count: usize) {
        self.triangles += count;
    }

    #[must_use]
    pub fn index(&self) -> MaterialIndex {
        self.index
    }

    #[must_use]
    pub fn triangles(&self) -> usize {
        self.triangles
    }

    #[must_use]
    pub fn surface(&self) -> &SurfaceTag {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_triangles_accumulates() {
        let mut system_under_test = MaterialRecord::new(MaterialIndex(4), SurfaceTag("SURF_ICE".to_string()));

        system_under_test.register_triangles(3);
        system_under_test.register_triangles(5);

        assert_eq!(system_under_test.triangles(), 8);
        assert_eq!(system_under_test.index(), MaterialIndex(4));
    }
}
