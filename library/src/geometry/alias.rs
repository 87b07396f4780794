use cgmath::{Point3, Vector2, Vector3};

pub type Point = Point3<f32>;
pub type Vector = Vector3<f32>;
pub type TextureCoordinate = Vector2<f32>;
