use thiserror::Error;

pub type EstimateResult<T> = Result<T, EstimateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// `plotSize` or `floors` absent, null or zero
    #[error("plotSize & floors required")]
    MissingRequiredInput,
}
