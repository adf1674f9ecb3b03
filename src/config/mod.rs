/// Configuration layer: document location, parsing, defaults, validation.
pub mod errors;
pub mod loader;
pub mod model;
pub mod template;

pub use errors::ConfigError;
pub use loader::load_from_path;
pub use model::{Config, FolderEntry};
pub use template::{default_config_path, write_template};
