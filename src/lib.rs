pub mod data;
pub mod error;
pub mod gaussian;
pub mod plot;

pub use data::LoadOptions;
pub use error::GaussianError;
pub use gaussian::Gaussian;
