use landmarks_core::{
    gateways::landmark_service::Error as ServiceError, usecases::Error as ParameterError,
    util::image::ImageError,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ParameterError),
    #[error(transparent)]
    Network(#[from] ServiceError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("Failed to read the image: {0}")]
    ImageSource(#[from] io::Error),
    #[error("The operation has been cancelled")]
    Cancelled,
}

impl AppError {
    /// The target landmark no longer exists remotely.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Network(ServiceError::NotFound))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_a_network_error() {
        let err = AppError::from(ServiceError::NotFound);
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert!(!AppError::from(ServiceError::Transport("timeout".into())).is_not_found());
        assert!(AppError::from(ParameterError::Title).is_validation());
    }
}
