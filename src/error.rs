use thiserror::Error;

/// Errors returned by kernel and rotation generation.
///
/// Invalid parameters are rejected at the API boundary before any samples
/// are produced; a partial kernel is never returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The rotation square order must be positive.
    #[error("rotation square size must be positive, got {0}")]
    InvalidSize(usize),

    /// The sample kernel count must be positive.
    #[error("sample kernel count must be positive")]
    EmptyKernel,
}
