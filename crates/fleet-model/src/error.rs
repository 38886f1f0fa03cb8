use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid driver id: {0:?}")]
    InvalidDriverId(String),
    #[error("invalid event id: {0:?}")]
    InvalidEventId(String),
    #[error("invalid vehicle id: {0:?}")]
    InvalidVehicleId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
