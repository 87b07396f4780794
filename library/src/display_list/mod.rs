pub mod command;
pub mod emitter;
pub mod grouping;
pub mod layer;
pub mod vertex_buffer;
pub mod vertex_writer;
