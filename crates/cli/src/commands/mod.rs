//! CLI definition and session setup
//!
//! The command line only configures the session; every operation is chosen
//! from the interactive menu. Each menu action lives in its own module.

use std::path::PathBuf;

use clap::Parser;
use sbm_core::{ColorMode, Config, ConfigManager};
use sbm_s3::{ClientOptions, S3Client};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

pub mod input;
pub mod menu;

mod get;
mod ls;
mod mb;
mod policy;
mod put;
mod rb;

#[cfg(test)]
pub(crate) mod test_support;

/// sbm - S3 Bucket Management
///
/// An interactive menu for creating, listing, filling, publishing and
/// removing S3 buckets. Credentials come from the standard AWS provider
/// chain (environment, shared profile, instance metadata).
#[derive(Parser, Debug)]
#[command(name = "sbm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.config/sbm/config.toml)
    #[arg(long, env = "SBM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Region for the client and the create-bucket default
    #[arg(long, env = "SBM_REGION")]
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible services
    #[arg(long, env = "SBM_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long, default_value = "false")]
    pub path_style: bool,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Disable progress spinners
    #[arg(long, default_value = "false")]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

impl Cli {
    /// Merge command-line overrides into the loaded configuration
    pub fn apply_overrides(&self, mut config: Config) -> sbm_core::Result<Config> {
        if let Some(region) = &self.region {
            config.defaults.region = region.clone();
        }

        if let Some(url) = &self.endpoint_url {
            let path_style = config.endpoint.as_ref().is_some_and(|e| e.path_style);
            config.endpoint = Some(sbm_core::EndpointConfig {
                url: url.clone(),
                path_style,
            });
        }

        if self.path_style
            && let Some(endpoint) = config.endpoint.as_mut()
        {
            endpoint.path_style = true;
        }

        if self.no_color {
            config.defaults.color = ColorMode::Never;
        }

        if self.no_progress {
            config.defaults.progress = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Resolve the output configuration for this terminal
pub fn output_config(config: &Config) -> OutputConfig {
    let color = match config.defaults.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => console::colors_enabled(),
    };

    OutputConfig {
        color,
        progress: config.defaults.progress,
    }
}

/// Client options derived from the configuration
pub fn client_options(config: &Config, force_path_style: bool) -> ClientOptions {
    ClientOptions {
        region: config.defaults.region.clone(),
        endpoint_url: config.endpoint.as_ref().map(|e| e.url.clone()),
        path_style: force_path_style || config.endpoint.as_ref().is_some_and(|e| e.path_style),
    }
}

fn load_config(cli: &Cli) -> sbm_core::Result<Config> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new()?,
    };
    cli.apply_overrides(manager.load()?)
}

/// Set up the session and run the menu, returning the process exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            Formatter::default().error(&format!("Failed to load configuration: {e}"));
            return ExitCode::from(&e);
        }
    };

    let formatter = Formatter::new(output_config(&config));
    let client = S3Client::new(client_options(&config, cli.path_style)).await;

    let menu = menu::Menu::new(&client, &formatter, config.defaults.region.clone());
    menu.run(&mut input::StdinReader).await
}
