use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::ui::router::{available_paths, Route};

#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Terminal tour of UI state patterns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Route to open at startup (/, /about, /contact)
    #[arg(short, long, value_name = "PATH")]
    pub route: Option<String>,

    /// Override the user name shared through the application context
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Write logs to this file (default: $SHOWCASE_LOG, otherwise off)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Read the config file, apply command-line overrides on top, then
    /// validate the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;

        if let Some(route) = &self.route {
            if Route::resolve(route).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Route '{}' not found. Available routes: {}",
                        route,
                        available_paths()
                    ),
                });
            }
            config.ui.initial_route = route.clone();
        }

        if let Some(user) = &self.user {
            config.context.user = user.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
