pub mod collision_vertex;
pub mod collision_writer;
pub mod deduplicator;
