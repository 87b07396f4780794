pub mod flattener;
pub mod obj_import;
pub mod scene_graph;
