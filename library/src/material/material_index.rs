use derive_more::Display;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Display)]
#[display("{}", _0)]
pub struct MaterialIndex(pub usize);

impl From<usize> for MaterialIndex {
    #[must_use]
    fn from(value: usize) -> Self {
        MaterialIndex(value)
    }
}
