// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Vendor SDK start-up options shared by configuration and the tracker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the SDK should classify the current launch of the host app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallationType {
	#[default]
	Autodetect,
	KnownInstall,
	KnownUpgrade,
	KnownSameVersion,
}

impl fmt::Display for InstallationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Autodetect => write!(f, "autodetect"),
			Self::KnownInstall => write!(f, "knownInstall"),
			Self::KnownUpgrade => write!(f, "knownUpgrade"),
			Self::KnownSameVersion => write!(f, "knownSameVersion"),
		}
	}
}

impl FromStr for InstallationType {
	type Err = UnknownOption;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"autodetect" => Ok(Self::Autodetect),
			"knownInstall" => Ok(Self::KnownInstall),
			"knownUpgrade" => Ok(Self::KnownUpgrade),
			"knownSameVersion" => Ok(Self::KnownSameVersion),
			_ => Err(UnknownOption {
				option: "installation type",
				value: s.to_string(),
			}),
		}
	}
}

/// Which vendor environment events are reported to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SdkEnvironment {
	#[default]
	AutoDetect,
	Development,
	Production,
}

impl fmt::Display for SdkEnvironment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::AutoDetect => write!(f, "autoDetect"),
			Self::Development => write!(f, "development"),
			Self::Production => write!(f, "production"),
		}
	}
}

impl FromStr for SdkEnvironment {
	type Err = UnknownOption;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"autoDetect" => Ok(Self::AutoDetect),
			"development" => Ok(Self::Development),
			"production" => Ok(Self::Production),
			_ => Err(UnknownOption {
				option: "environment",
				value: s.to_string(),
			}),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {option}: {value}")]
pub struct UnknownOption {
	pub option: &'static str,
	pub value: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		assert_eq!(InstallationType::default(), InstallationType::Autodetect);
		assert_eq!(SdkEnvironment::default(), SdkEnvironment::AutoDetect);
	}

	#[test]
	fn test_parse_matches_serde_names() {
		let parsed: InstallationType = "knownUpgrade".parse().unwrap();
		let deserialized: InstallationType = serde_json::from_str("\"knownUpgrade\"").unwrap();
		assert_eq!(parsed, deserialized);

		let parsed: SdkEnvironment = "autoDetect".parse().unwrap();
		let deserialized: SdkEnvironment = serde_json::from_str("\"autoDetect\"").unwrap();
		assert_eq!(parsed, deserialized);
	}

	#[test]
	fn test_unknown_values() {
		let err = "staging".parse::<SdkEnvironment>().unwrap_err();
		assert_eq!(err.to_string(), "unknown environment: staging");
		assert!("fresh".parse::<InstallationType>().is_err());
	}
}
