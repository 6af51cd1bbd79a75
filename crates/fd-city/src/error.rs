//! City-subsystem error type.

use thiserror::Error;

use fd_core::GridPoint;

/// Errors produced by `fd-city`.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("no building at {0}")]
    UnknownLocation(GridPoint),

    #[error("{point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point:  GridPoint,
        width:  u32,
        height: u32,
    },

    #[error("building already registered at {0}")]
    DuplicateBuilding(GridPoint),

    #[error("no fire station set")]
    NoFireStation,
}

pub type CityResult<T> = Result<T, CityError>;
