// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and the environment.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::env::{env_bool, env_var, load_secret_env};
use crate::error::ConfigError;
use crate::layer::TrackletConfigLayer;
use crate::sections::{LoggingConfigLayer, SdkConfigLayer, API_SECRET_ENV};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<TrackletConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<TrackletConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(TrackletConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/tracklet/tracklet.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<TrackletConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(TrackletConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: TrackletConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `TRACKLET_<SECTION>_<FIELD>`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<TrackletConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(TrackletConfigLayer {
			sdk: Some(load_sdk_from_env()?),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_parse<T>(name: &str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	match env_var(name) {
		Some(v) => v
			.parse()
			.map(Some)
			.map_err(|e: T::Err| ConfigError::invalid_value(name, e.to_string())),
		None => Ok(None),
	}
}

fn load_sdk_from_env() -> Result<SdkConfigLayer, ConfigError> {
	Ok(SdkConfigLayer {
		api_key: env_var("TRACKLET_SDK_API_KEY"),
		api_secret: load_secret_env(API_SECRET_ENV).map_err(|e| ConfigError::Secret(e.to_string()))?,
		installation_type: env_parse("TRACKLET_SDK_INSTALLATION_TYPE")?,
		environment: env_parse("TRACKLET_SDK_ENVIRONMENT")?,
		proxy_app_delegate: env_bool("TRACKLET_SDK_PROXY_APP_DELEGATE"),
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("TRACKLET_LOG_LEVEL"),
	}
}
