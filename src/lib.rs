// Variance-retaining basis selection and projection

#![doc = include_str!("../README.md")]

mod basis;
mod covariance;
mod error;
mod project;

pub use basis::{select_basis, ReducedBasis};
pub use covariance::sample_covariance;
pub use error::ReductionError;
