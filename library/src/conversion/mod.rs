pub mod context;
pub mod pipeline;
