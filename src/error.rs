use thiserror::Error;

/// Error cases of list operations.
///
/// Every failing operation leaves the list exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index argument is outside of the range accepted by the operation:
    /// `0..=len` for insertion and `0..len` for access and removal.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// A removal was requested on a list without elements.
    #[error("list is empty")]
    EmptyList,
}
