// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The outbound contract with the vendor analytics SDK.
//!
//! The tracker depends only on these call shapes. Every call is synchronous
//! and fire-and-forget: the vendor reports nothing back, so the tracker
//! cannot observe delivery failures.

use std::sync::Arc;

use serde_json::Value;
use tracklet_config::SecretString;
use tracklet_core::{CommerceEvent, Event, InstallationType, PropertyBag, SdkEnvironment};

/// Start-up options passed to [`AnalyticsSdk::initialize`].
#[derive(Debug, Clone, PartialEq)]
pub struct SdkOptions {
	pub api_key: String,
	pub api_secret: SecretString,
	pub installation_type: InstallationType,
	pub environment: SdkEnvironment,
	/// Let the SDK intercept app delegate callbacks itself.
	pub proxy_app_delegate: bool,
}

/// A vendor analytics client.
///
/// Implementations must be internally thread-safe; the tracker calls them
/// from whichever thread the caller is on, without locking. Vendor objects
/// are passed by value and the tracker keeps no reference to them.
pub trait AnalyticsSdk: Send + Sync {
	fn initialize(&self, options: SdkOptions);

	fn log_commerce_event(&self, event: CommerceEvent);

	fn log_event(&self, event: Event);

	fn log_error(&self, message: &str, info: Option<PropertyBag>);

	fn log_screen(&self, name: &str, info: Option<PropertyBag>);

	fn log_ltv_increase(&self, amount: f64, name: &str, info: Option<PropertyBag>);

	fn set_user_attribute(&self, key: &str, value: Value);
}

impl<S> AnalyticsSdk for Arc<S>
where
	S: AnalyticsSdk + ?Sized,
{
	fn initialize(&self, options: SdkOptions) {
		(**self).initialize(options)
	}

	fn log_commerce_event(&self, event: CommerceEvent) {
		(**self).log_commerce_event(event)
	}

	fn log_event(&self, event: Event) {
		(**self).log_event(event)
	}

	fn log_error(&self, message: &str, info: Option<PropertyBag>) {
		(**self).log_error(message, info)
	}

	fn log_screen(&self, name: &str, info: Option<PropertyBag>) {
		(**self).log_screen(name, info)
	}

	fn log_ltv_increase(&self, amount: f64, name: &str, info: Option<PropertyBag>) {
		(**self).log_ltv_increase(amount, name, info)
	}

	fn set_user_attribute(&self, key: &str, value: Value) {
		(**self).set_user_attribute(key, value)
	}
}
