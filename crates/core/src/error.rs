use thiserror::Error;

use crate::model::{ParseIdError, SceneError, UnlockPolicyError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Policy(#[from] UnlockPolicyError),
    #[error("invalid catalog: {0}")]
    Catalog(String),
}
