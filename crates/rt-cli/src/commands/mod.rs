//! CLI command implementations

mod config;
mod describe;
mod units;

pub use config::{config_get, config_init, config_path, config_set, config_show, load_settings};
pub use describe::{describe, describe_command, DescribeArgs};
pub use units::units_command;
