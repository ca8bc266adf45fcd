//! Configuration: type-safe structures with validation and YAML file
//! loading/discovery.
//!
//! Place a `.imagedash.yaml` in your project root or `~/.config/imagedash/`:
//!
//! ```yaml
//! api:
//!   base_url: https://tracker.example.com/api
//!   timeout_secs: 10
//! demo:
//!   dump_path: ./demo-dump.json
//! listing:
//!   page_size: 30
//! ```

mod file;
mod types;

pub use file::{discover_config_file, load_config_file, load_or_default, ConfigFileError};
pub use types::{
    ApiConfig, AppConfig, ConfigError, DemoConfig, ListingConfig, DEFAULT_API_BASE,
    DEFAULT_TIMEOUT_SECS,
};
