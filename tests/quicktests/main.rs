use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Delete one copy of the value from the tree
    Delete(T),
    /// Remove the highest value
    PopMax,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).copied().unwrap_or(0) {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::PopMax,
            _ => unreachable!(),
        }
    }
}
