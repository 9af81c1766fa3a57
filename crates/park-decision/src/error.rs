use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("{name} weight must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

pub type DecisionResult<T> = Result<T, DecisionError>;
