/// A key-value pair stored in a node. Entries are ordered by the comparator of the map that owns
/// them, so no ordering is defined on the entry itself.
#[derive(Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn into_pair(self) -> (T, U) {
        let Entry { key, value } = self;
        (key, value)
    }
}
