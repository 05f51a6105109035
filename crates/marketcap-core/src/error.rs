// File: crates/marketcap-core/src/error.rs
// Summary: Error type for option validation, dataset lookups and the raster pipeline.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("invalid surface size {width}x{height}; both dimensions must be positive")]
    InvalidSize { width: i32, height: i32 },

    #[error("unknown company '{0}'")]
    UnknownCompany(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,
}
