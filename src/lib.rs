pub mod background;
pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod sampler;

pub use error::IconError;
pub use models::{EdgeColors, EdgePosition, IconSpec, SizeEntry};
