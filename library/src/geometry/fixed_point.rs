use crate::geometry::alias::{Point, TextureCoordinate, Vector};
use crate::geometry::axis::Axis;
use crate::geometry::fundamental_constants::{COMPONENTS_IN_POSITION, COMPONENTS_IN_SHADE, COMPONENTS_IN_TEXTURE_COORDINATE};
use strum::IntoEnumIterator;

pub type FixedPosition = [i16; COMPONENTS_IN_POSITION];
pub type FixedTextureCoordinate = [i16; COMPONENTS_IN_TEXTURE_COORDINATE];
pub type Shade = [i16; COMPONENTS_IN_SHADE];

const TEXEL_EXTENT: f32 = 32.0;
const TEXTURE_COORDINATE_FRACTION_SCALE: f32 = 32.0;
const NORMAL_COMPONENT_SCALE: f32 = 127.0;
const OPAQUE_WHITE: Shade = [255, 255, 255, 255];
const NORMAL_SHADE_ALPHA: i16 = 255;

/// Scale, then truncate toward zero. Out of range values saturate to the `i16` limits.
#[must_use]
pub(crate) fn to_fixed_position(position: Point, scale: f32) -> FixedPosition {
    let mut result = [0; COMPONENTS_IN_POSITION];
    for axis in Axis::iter() {
        result[axis.index()] = (position[axis.index()] * scale) as i16;
    }
    result
}

#[must_use]
pub(crate) fn to_fixed_texture_coordinate(coordinate: TextureCoordinate) -> FixedTextureCoordinate {
    let scale = TEXEL_EXTENT * TEXTURE_COORDINATE_FRACTION_SCALE;
    [(coordinate.x * scale) as i16, (coordinate.y * scale) as i16]
}

#[must_use]
pub(crate) fn normal_shade(normal: Vector) -> Shade {
    let component = |value: f32| (value.clamp(-1.0, 1.0) * NORMAL_COMPONENT_SCALE) as i16;
    [component(normal.x), component(normal.y), component(normal.z), NORMAL_SHADE_ALPHA]
}

#[must_use]
pub(crate) const fn unlit_shade() -> Shade {
    OPAQUE_WHITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(1.0, -2.0, 0.5), 100.0, [100, -200, 50])]
    #[case(Point::new(0.019, -0.019, 0.0), 100.0, [1, -1, 0])]
    #[case(Point::new(1000.0, -1000.0, 0.0), 100.0, [i16::MAX, i16::MIN, 0])]
    fn test_to_fixed_position(#[case] position: Point, #[case] scale: f32, #[case] expected: FixedPosition) {
        assert_eq!(to_fixed_position(position, scale), expected);
    }

    #[test]
    fn test_to_fixed_texture_coordinate() {
        assert_eq!(to_fixed_texture_coordinate(TextureCoordinate::new(1.0, 0.5)), [1024, 512]);
    }

    #[test]
    fn test_normal_shade() {
        assert_eq!(normal_shade(Vector::new(0.0, 1.0, -1.0)), [0, 127, -127, 255]);
        assert_eq!(normal_shade(Vector::new(0.0, 2.0, 0.0)), [0, 127, 0, 255]);
    }
}
