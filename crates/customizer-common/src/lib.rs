pub mod errors;
pub mod types;

pub use errors::{ConfigError, CustomizerError, DecodeError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, CustomizerError>;
