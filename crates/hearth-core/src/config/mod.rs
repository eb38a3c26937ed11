//! Configuration loading and validation shared by the Hearth crates.

pub mod traits;
pub mod validation;

pub use traits::{load_config_file, parse_config_str, ConfigFormat, ConfigValidation};
pub use validation::{parse_wall_clock, ConfigValidator, ValidationError, ValidationResult};
