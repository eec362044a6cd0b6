use crate::model::Parameter;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ModelError {
    /// A model parameter is zero, negative or not finite.
    #[error("{parameter} must be positive and finite (got {value})")]
    InvalidParameter { parameter: Parameter, value: f64 },
    /// `t_max / dt` asks for more steps than a run may take.
    #[error("t_max / dt = {ratio} exceeds the limit of {limit} integration steps")]
    TooManySteps { ratio: f64, limit: u32 },
}
