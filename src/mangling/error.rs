use thiserror::Error;

pub type MangleResult<T> = Result<T, MangleError>;

/// Failures raised by the mangling core.
///
/// None of these are user errors: they signal a defect in a candidate generator, a conflict
/// predicate or the export driver, and must abort export of the affected target instead of
/// producing a silent name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MangleError {
    #[error(
        "internal compiler error: no usable name for {symbol} after {attempts} candidate(s) \
         starting at `{preferred}`"
    )]
    CandidatesExhausted {
        symbol: String,
        preferred: String,
        attempts: usize,
    },
    #[error("internal compiler error: {symbol} carries {count} swift_name attributes")]
    DuplicateSwiftName { symbol: String, count: usize },
    #[error("internal compiler error: session mangling state is in use while naming {symbol}")]
    SessionBusy { symbol: String },
}

impl MangleError {
    /// Rendering of the declaration the failure refers to.
    pub fn symbol(&self) -> &str {
        match self {
            MangleError::CandidatesExhausted { symbol, .. }
            | MangleError::DuplicateSwiftName { symbol, .. }
            | MangleError::SessionBusy { symbol } => symbol,
        }
    }
}
