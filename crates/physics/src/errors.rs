#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AabbError {
    #[error("Attempted to create an AABB which would have an invalid width or height")]
    AabbInvalidDims,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("Spatial grids must have at least one column and one row")]
    GridZeroDims,

    #[error("Spatial grids must cover a play area with positive width and height")]
    GridEmptyArea,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Aabb error: {}", _0)]
    Aabb(#[from] AabbError),

    #[error("Grid error: {}", _0)]
    Grid(#[from] GridError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
