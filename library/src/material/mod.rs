pub mod geometry_mode;
pub mod material_index;
pub mod material_library;
pub mod material_record;
pub mod resolver;
pub mod surface;
