//! Opaque identifier for text fields held in an [`InputValueStore`](crate::InputValueStore).

/// Identifies one text field within a store.
///
/// The raw value carries no meaning here. Hosts map their own handles
/// (egui ids, DOM node ids, indices) onto it at the call boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}
