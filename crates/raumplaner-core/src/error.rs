use thiserror::Error;

/// Errors raised when DOM-facing identifiers don't map onto the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("unknown room function `{0}`")]
    UnknownRoom(String),
    #[error("unknown material preset `{0}`")]
    UnknownMaterial(String),
    #[error("unknown furniture item `{0}`")]
    UnknownFurniture(String),
    #[error("unknown control `{0}`")]
    UnknownControl(String),
    #[error("invalid numeric value `{0}`")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
