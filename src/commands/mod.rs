mod config;

pub use config::{handle_config_layout, handle_config_migrate, handle_config_show};
