use quickcheck::{Arbitrary, Gen};

mod tree;

/// Keys are drawn from a narrow range so that repeats, and so ignored
/// duplicate inserts, are common.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SmallKey(i8);

impl Arbitrary for SmallKey {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallKey(i8::arbitrary(g) % 16)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(SmallKey))
    }
}
