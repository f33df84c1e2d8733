use crate::AnchorId;

/// Errors that can occur when tracking plane anchors.
#[derive(Debug, thiserror::Error)]
pub enum AnchorError {
    /// An anchor with this id is already tracked.
    #[error("anchor {0} is already tracked")]
    DuplicateAnchor(AnchorId),

    /// No anchor with this id is tracked.
    #[error("anchor {0} is not tracked")]
    UnknownAnchor(AnchorId),
}
