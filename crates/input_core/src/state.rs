//! Per-field state kept by the [`InputValueStore`](crate::InputValueStore).

#[derive(Clone, Debug, Default)]
pub(crate) struct FieldState {
    pub text: String,

    /// Bumped on every text change; hosts use it to invalidate cached layout.
    pub revision: u64,

    /// Caret as a byte index into `text`, always on a char boundary.
    pub caret: usize,

    /// When set, the selection spans `min(anchor, caret)..max(anchor, caret)`.
    pub anchor: Option<usize>,
}
