pub mod model;

pub use model::{ConfigError, Engine, NotFound};
