pub(crate) const VERTICES_IN_TRIANGLE: usize = 3;
pub(crate) const TRIANGLES_IN_PAIR: usize = 2;

pub(crate) const COMPONENTS_IN_POSITION: usize = 3;
pub(crate) const COMPONENTS_IN_TEXTURE_COORDINATE: usize = 2;
pub(crate) const COMPONENTS_IN_SHADE: usize = 4;
