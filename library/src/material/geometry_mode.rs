use bitflags::bitflags;

bitflags! {
    /// Flag names are the GBI constants they stand for.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct GeometryMode: u32 {
        const G_TEXTURE_GEN = 1 << 0;
        const G_TEXTURE_GEN_LINEAR = 1 << 1;
        const G_LIGHTING = 1 << 2;
        const G_SHADE = 1 << 3;
        const G_CULL_BACK = 1 << 4;
        const G_FOG = 1 << 5;
    }
}

impl GeometryMode {
    pub const TEXTURE_GENERATION: GeometryMode = GeometryMode::G_TEXTURE_GEN.union(GeometryMode::G_TEXTURE_GEN_LINEAR);
    pub const MATERIAL_MANAGED: GeometryMode = GeometryMode::TEXTURE_GENERATION
        .union(GeometryMode::G_LIGHTING)
        .union(GeometryMode::G_SHADE)
        .union(GeometryMode::G_CULL_BACK);

    #[must_use]
    pub fn gbi_expression(self) -> String {
        self.iter_names().map(|(name, _)| name).collect::<Vec<&str>>().join(" | ")
    }
}

/// Geometry bits turned on by material state during one layer's emission.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct GeometryModeState {
    active: GeometryMode,
}

impl GeometryModeState {
    #[must_use]
    pub fn active(&self) -> GeometryMode {
        self.active
    }

    #[must_use]
    pub fn contains(&self, bits: GeometryMode) -> bool {
        self.active.contains(bits)
    }

    pub fn apply(&mut self, set: GeometryMode, clear: GeometryMode) {
        self.active.remove(clear);
        self.active.insert(set & GeometryMode::MATERIAL_MANAGED);
    }

    #[must_use]
    pub fn texture_generation_to_clear(&self) -> GeometryMode {
        self.active & GeometryMode::TEXTURE_GENERATION
    }

    #[must_use]
    pub fn culling_to_clear(&self) -> bool {
        self.active.contains(GeometryMode::G_CULL_BACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbi_expression_joins_in_declaration_order() {
        let bits = GeometryMode::G_TEXTURE_GEN_LINEAR | GeometryMode::G_TEXTURE_GEN;
        assert_eq!(bits.gbi_expression(), "G_TEXTURE_GEN | G_TEXTURE_GEN_LINEAR");
        assert_eq!(GeometryMode::G_FOG.gbi_expression(), "G_FOG");
    }

    #[test]
    fn test_state_starts_empty() {
        let system_under_test = GeometryModeState::default();

        assert_eq!(system_under_test.active(), GeometryMode::empty());
        assert!(!system_under_test.culling_to_clear());
        assert!(system_under_test.texture_generation_to_clear().is_empty());
    }

    #[test]
    fn test_apply_tracks_bits_still_set() {
        let mut system_under_test = GeometryModeState::default();

        system_under_test.apply(GeometryMode::G_TEXTURE_GEN | GeometryMode::G_CULL_BACK, GeometryMode::empty());
        system_under_test.apply(GeometryMode::G_LIGHTING, GeometryMode::G_CULL_BACK);

        assert!(system_under_test.contains(GeometryMode::G_LIGHTING));
        assert!(!system_under_test.culling_to_clear());
        assert_eq!(system_under_test.texture_generation_to_clear(), GeometryMode::G_TEXTURE_GEN);
    }

    #[test]
    fn test_fog_is_not_material_state() {
        let mut system_under_test = GeometryModeState::default();

        system_under_test.apply(GeometryMode::G_FOG, GeometryMode::empty());

        assert!(system_under_test.active().is_empty());
    }
}
