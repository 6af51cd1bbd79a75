use fd_city::CityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no firefighters available to dispatch")]
    NoFirefightersAvailable,

    #[error("invalid hire count: {0}")]
    InvalidHireCount(usize),

    #[error("city lookup failed: {0}")]
    City(#[from] CityError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
