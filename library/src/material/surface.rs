use crate::material::material_index::MaterialIndex;
use crate::material::material_record::MaterialRecord;
use derive_more::Display;
use log::info;

pub(crate) const SURFACE_MARKER: char = '!';
pub(crate) const SURFACE_TERMINATOR: char = ' ';
pub const DEFAULT_SURFACE: &str = "SURF_ENV_DEFAULT";

#[derive(Clone, Debug, Eq, PartialEq, Hash, Display)]
#[display("{}", _0)]
pub struct SurfaceTag(pub String);

impl SurfaceTag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Text right after the first `!` up to the next space. A trailing `!` gives an empty tag.
#[must_use]
pub fn classify_surface(material_name: &str) -> SurfaceTag {
    match material_name.split_once(SURFACE_MARKER) {
        Some((_, tail)) => {
            let tag = tail.split(SURFACE_TERMINATOR).next().unwrap_or_default();
            SurfaceTag(tag.to_string())
        }
        None => SurfaceTag(DEFAULT_SURFACE.to_string()),
    }
}

#[must_use]
pub(crate) fn configure_materials<Name: AsRef<str>>(material_names: &[Name]) -> Vec<MaterialRecord> {
    material_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let surface = classify_surface(name.as_ref());
            info!("material {} -> {}", name.as_ref(), surface);
            MaterialRecord::new(MaterialIndex(index), surface)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Wood !STONE extra", "STONE")]
    #[case("Wood!SURF_HARD", "SURF_HARD")]
    #[case("!SURF_ICE", "SURF_ICE")]
    #[case("Metal", DEFAULT_SURFACE)]
    #[case("Lava!", "")]
    #[case("Lava! hot", "")]
    #[case("A !first !second", "first")]
    #[case("Water !surf_water", "surf_water")]
    fn test_classify_surface(#[case] material_name: &str, #[case] expected: &str) {
        assert_eq!(classify_surface(material_name), SurfaceTag(expected.to_string()));
    }

    #[test]
    fn test_configure_materials_keeps_order() {
        let names = ["Grass !SURF_NOISE", "Plain"];

        let system_under_test = configure_materials(&names);

        assert_eq!(system_under_test.len(), 2);
        assert_eq!(system_under_test[0].index(), MaterialIndex(0));
        assert_eq!(system_under_test[0].surface().as_str(), "SURF_NOISE");
        assert_eq!(system_under_test[1].surface().as_str(), DEFAULT_SURFACE);
        assert_eq!(system_under_test[1].triangles(), 0);
    }
}
