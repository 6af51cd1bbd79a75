use fd_city::CityError;
use fd_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("city error: {0}")]
    City(#[from] CityError),
}

pub type SimResult<T> = Result<T, SimError>;
