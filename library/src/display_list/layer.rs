use derive_more::Display;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Display)]
#[display("{}", _0)]
pub struct Layer(u8);

impl Layer {
    pub const COUNT: u8 = 8;
    pub const OPAQUE: Layer = Layer(1);

    const LAST_OPAQUE: u8 = 1;

    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT { Some(Layer(index)) } else { None }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.0 > Self::LAST_OPAQUE
    }

    pub fn all() -> impl Iterator<Item = Layer> {
        (0..Self::COUNT).map(Layer)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::OPAQUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Layer::new(0).map(Layer::index), Some(0));
        assert_eq!(Layer::new(7).map(Layer::index), Some(7));
        assert_eq!(Layer::new(8), None);
    }

    #[test]
    fn test_transparency_tiers() {
        let transparent: Vec<bool> = Layer::all().map(Layer::is_transparent).collect();
        assert_eq!(transparent, vec![false, false, true, true, true, true, true, true]);
    }

    #[test]
    fn test_default_is_opaque() {
        assert_eq!(Layer::default(), Layer::OPAQUE);
        assert_eq!(format!("{}", Layer::default()), "1");
    }
}
