pub mod alias;
pub mod axis;
pub mod fixed_point;
pub(crate) mod fundamental_constants;
