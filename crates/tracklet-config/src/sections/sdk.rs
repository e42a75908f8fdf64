// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Vendor SDK configuration section.

use serde::Deserialize;
use tracklet_core::{InstallationType, SdkEnvironment};

use crate::error::ConfigError;
use crate::secret::SecretString;

/// Environment variable holding the vendor API secret (or `*_FILE` path).
pub const API_SECRET_ENV: &str = "TRACKLET_SDK_API_SECRET";

/// Vendor SDK configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct SdkConfig {
	pub api_key: String,
	pub api_secret: SecretString,
	pub installation_type: InstallationType,
	pub environment: SdkEnvironment,
	pub proxy_app_delegate: bool,
}

/// Vendor SDK configuration layer (partial, for merging).
///
/// The secret is never read from TOML; only the environment source fills it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SdkConfigLayer {
	#[serde(default)]
	pub api_key: Option<String>,
	#[serde(skip)]
	pub api_secret: Option<SecretString>,
	#[serde(default)]
	pub installation_type: Option<InstallationType>,
	#[serde(default)]
	pub environment: Option<SdkEnvironment>,
	#[serde(default)]
	pub proxy_app_delegate: Option<bool>,
}

impl SdkConfigLayer {
	pub fn merge(&mut self, other: SdkConfigLayer) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.api_secret.is_some() {
			self.api_secret = other.api_secret;
		}
		if other.installation_type.is_some() {
			self.installation_type = other.installation_type;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.proxy_app_delegate.is_some() {
			self.proxy_app_delegate = other.proxy_app_delegate;
		}
	}

	/// Resolves the layer. Returns `Ok(None)` when no API key is configured.
	pub fn finalize(self) -> Result<Option<SdkConfig>, ConfigError> {
		let Some(api_key) = self.api_key.filter(|k| !k.trim().is_empty()) else {
			return Ok(None);
		};

		let api_secret = self
			.api_secret
			.filter(|s| !s.expose().trim().is_empty())
			.ok_or_else(|| ConfigError::missing_field(API_SECRET_ENV))?;

		Ok(Some(SdkConfig {
			api_key,
			api_secret,
			installation_type: self.installation_type.unwrap_or_default(),
			environment: self.environment.unwrap_or_default(),
			proxy_app_delegate: self.proxy_app_delegate.unwrap_or(true),
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn complete_layer() -> SdkConfigLayer {
		SdkConfigLayer {
			api_key: Some("us1-abc".to_string()),
			api_secret: Some(SecretString::new("s3cr3t".to_string())),
			..Default::default()
		}
	}

	#[test]
	fn test_finalize_none_without_api_key() {
		assert!(SdkConfigLayer::default().finalize().unwrap().is_none());
	}

	#[test]
	fn test_finalize_none_with_blank_api_key() {
		let layer = SdkConfigLayer {
			api_key: Some("  ".to_string()),
			..Default::default()
		};
		assert!(layer.finalize().unwrap().is_none());
	}

	#[test]
	fn test_finalize_requires_secret() {
		let layer = SdkConfigLayer {
			api_key: Some("us1-abc".to_string()),
			..Default::default()
		};
		let err = layer.finalize().unwrap_err();
		assert!(matches!(err, ConfigError::MissingField(ref f) if f == API_SECRET_ENV));
	}

	#[test]
	fn test_finalize_rejects_blank_secret() {
		for secret in ["", "  \n"] {
			let layer = SdkConfigLayer {
				api_key: Some("us1-abc".to_string()),
				api_secret: Some(SecretString::new(secret.to_string())),
				..Default::default()
			};
			let err = layer.finalize().unwrap_err();
			assert!(matches!(err, ConfigError::MissingField(ref f) if f == API_SECRET_ENV));
		}
	}

	#[test]
	fn test_finalize_defaults() {
		let config = complete_layer().finalize().unwrap().unwrap();
		assert_eq!(config.api_key, "us1-abc");
		assert_eq!(config.api_secret.expose(), "s3cr3t");
		assert_eq!(config.installation_type, InstallationType::Autodetect);
		assert_eq!(config.environment, SdkEnvironment::AutoDetect);
		assert!(config.proxy_app_delegate);
	}

	#[test]
	fn test_merge_overwrites_and_preserves() {
		let mut base = complete_layer();
		base.merge(SdkConfigLayer {
			environment: Some(SdkEnvironment::Production),
			proxy_app_delegate: Some(false),
			..Default::default()
		});

		assert_eq!(base.api_key.as_deref(), Some("us1-abc"));
		assert_eq!(base.environment, Some(SdkEnvironment::Production));
		assert_eq!(base.proxy_app_delegate, Some(false));
	}

	#[test]
	fn test_deserialize_from_toml() {
		let layer: SdkConfigLayer = toml::from_str(
			r#"
api_key = "us1-abc"
installation_type = "knownUpgrade"
environment = "development"
proxy_app_delegate = false
"#,
		)
		.unwrap();

		assert_eq!(layer.api_key.as_deref(), Some("us1-abc"));
		assert!(layer.api_secret.is_none());
		assert_eq!(layer.installation_type, Some(InstallationType::KnownUpgrade));
		assert_eq!(layer.environment, Some(SdkEnvironment::Development));
		assert_eq!(layer.proxy_app_delegate, Some(false));
	}

	#[test]
	fn test_deserialize_empty() {
		let layer: SdkConfigLayer = toml::from_str("").unwrap();
		assert_eq!(layer, SdkConfigLayer::default());
	}
}
