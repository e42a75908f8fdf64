// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for Tracklet.
//!
//! This crate provides:
//! - Layered configuration from defaults, a TOML file and the environment
//! - Consistent environment variable naming (`TRACKLET_*`)
//! - [`Secret`] for the vendor API secret, loaded via `VAR` / `VAR_FILE`
//!
//! # Usage
//!
//! ```ignore
//! use tracklet_config::load_config;
//!
//! let config = load_config()?;
//! if let Some(sdk) = &config.sdk {
//!     println!("reporting to the {} environment", sdk.environment);
//! }
//! ```

pub mod env;
pub mod error;
pub mod layer;
pub mod secret;
pub mod sections;
pub mod sources;

pub use env::{load_secret_env, SecretEnvError};
pub use error::ConfigError;
pub use layer::TrackletConfigLayer;
pub use sections::*;
pub use secret::{Secret, SecretString, REDACTED};
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct TrackletConfig {
	/// `None` when no vendor API key is configured.
	pub sdk: Option<SdkConfig>,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`TRACKLET_*`)
/// 2. Config file (`/etc/tracklet/tracklet.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<TrackletConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<TrackletConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<TrackletConfig, ConfigError> {
	load_from_sources(vec![Box::new(EnvSource)])
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<TrackletConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = TrackletConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

fn finalize(layer: TrackletConfigLayer) -> Result<TrackletConfig, ConfigError> {
	let sdk = layer.sdk.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		sdk_configured = sdk.is_some(),
		environment = ?sdk.as_ref().map(|s| s.environment),
		log_level = %logging.level,
		"Tracklet configuration loaded"
	);

	Ok(TrackletConfig { sdk, logging })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	struct FixedSource(Precedence, TrackletConfigLayer);

	impl ConfigSource for FixedSource {
		fn name(&self) -> &'static str {
			"fixed"
		}

		fn precedence(&self) -> Precedence {
			self.0
		}

		fn load(&self) -> Result<TrackletConfigLayer, ConfigError> {
			Ok(self.1.clone())
		}
	}

	fn sdk_layer(api_key: &str) -> TrackletConfigLayer {
		TrackletConfigLayer {
			sdk: Some(SdkConfigLayer {
				api_key: Some(api_key.to_string()),
				api_secret: Some(SecretString::new("secret".to_string())),
				..Default::default()
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(FixedSource(Precedence::Environment, sdk_layer("from-env"))),
			Box::new(FixedSource(Precedence::ConfigFile, sdk_layer("from-file"))),
		])
		.unwrap();

		assert_eq!(config.sdk.unwrap().api_key, "from-env");
	}

	#[test]
	fn test_defaults_only() {
		let config = load_from_sources(vec![Box::new(DefaultsSource)]).unwrap();
		assert!(config.sdk.is_none());
		assert_eq!(config.logging, LoggingConfig::default());
	}

	#[test]
	fn test_file_source_with_secret_from_overlay() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[sdk]
api_key = "us1-file"
environment = "production"
proxy_app_delegate = false
"#
		)
		.unwrap();

		let secret_overlay = TrackletConfigLayer {
			sdk: Some(SdkConfigLayer {
				api_secret: Some(SecretString::new("from-env".to_string())),
				..Default::default()
			}),
			..Default::default()
		};

		let config = load_from_sources(vec![
			Box::new(TomlSource::new(file.path())),
			Box::new(FixedSource(Precedence::Environment, secret_overlay)),
		])
		.unwrap();

		let sdk = config.sdk.unwrap();
		assert_eq!(sdk.api_key, "us1-file");
		assert_eq!(sdk.api_secret.expose(), "from-env");
		assert_eq!(sdk.environment, tracklet_core::SdkEnvironment::Production);
		assert!(!sdk.proxy_app_delegate);
	}

	#[test]
	fn test_api_key_without_secret_fails() {
		let layer = TrackletConfigLayer {
			sdk: Some(SdkConfigLayer {
				api_key: Some("us1-abc".to_string()),
				..Default::default()
			}),
			..Default::default()
		};

		let err = load_from_sources(vec![Box::new(FixedSource(Precedence::ConfigFile, layer))])
			.unwrap_err();
		assert!(matches!(err, ConfigError::MissingField(_)));
	}
}
