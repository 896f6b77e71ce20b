use thiserror::Error;

pub type InputResult<T> = Result<T, InputError>;

/// Renderer-side input problems. The engine itself never sees these: input is validated before
/// a run is started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter valid numbers: {token:?} (item {position}) is not a finite number")]
    InvalidNumber { token: String, position: usize },

    #[error("unknown algorithm {0:?}, expected one of: bubble, quick, selection, insertion")]
    UnknownAlgorithm(String),
}

impl InputError {
    pub fn invalid_number(token: impl Into<String>, position: usize) -> Self {
        InputError::InvalidNumber {
            token: token.into(),
            position,
        }
    }
}
