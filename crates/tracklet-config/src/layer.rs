// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by each source before merging.

use serde::Deserialize;

use crate::sections::{LoggingConfigLayer, SdkConfigLayer};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrackletConfigLayer {
	#[serde(default)]
	pub sdk: Option<SdkConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl TrackletConfigLayer {
	/// Merges `other` over `self`; set fields in `other` win.
	pub fn merge(&mut self, other: TrackletConfigLayer) {
		merge_section(&mut self.sdk, other.sdk, SdkConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T: Default>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	if let Some(other) = other {
		merge(base.get_or_insert_with(T::default), other);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_into_empty_section() {
		let mut base = TrackletConfigLayer::default();
		base.merge(TrackletConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			..Default::default()
		});

		assert_eq!(
			base.logging.and_then(|l| l.level).as_deref(),
			Some("debug")
		);
		assert!(base.sdk.is_none());
	}

	#[test]
	fn test_merge_field_by_field() {
		let mut base: TrackletConfigLayer = toml::from_str(
			r#"
[sdk]
api_key = "from-file"
environment = "development"
"#,
		)
		.unwrap();

		base.merge(TrackletConfigLayer {
			sdk: Some(SdkConfigLayer {
				api_key: Some("from-env".to_string()),
				..Default::default()
			}),
			..Default::default()
		});

		let sdk = base.sdk.unwrap();
		assert_eq!(sdk.api_key.as_deref(), Some("from-env"));
		assert_eq!(
			sdk.environment,
			Some(tracklet_core::SdkEnvironment::Development)
		);
	}
}
