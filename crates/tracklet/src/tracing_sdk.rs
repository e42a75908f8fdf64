// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! An [`AnalyticsSdk`] that writes every call to the `tracing` subscriber.
//!
//! Useful during development and in environments without vendor credentials:
//! events are logged under the `tracklet::sdk` target instead of being sent.

use serde_json::Value;
use tracing::info;
use tracklet_core::{CommerceEvent, Event, PropertyBag};

use crate::sdk::{AnalyticsSdk, SdkOptions};

const TARGET: &str = "tracklet::sdk";

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSdk;

impl AnalyticsSdk for TracingSdk {
	fn initialize(&self, options: SdkOptions) {
		info!(
			target: TARGET,
			installation_type = %options.installation_type,
			environment = %options.environment,
			proxy_app_delegate = options.proxy_app_delegate,
			"initialize"
		);
	}

	fn log_commerce_event(&self, event: CommerceEvent) {
		info!(
			target: TARGET,
			action = %event.action,
			products = ?event.products,
			transaction = ?event.transaction_attributes,
			attributes = %event.custom_attributes.into_value(),
			"commerce event"
		);
	}

	fn log_event(&self, event: Event) {
		info!(
			target: TARGET,
			name = %event.name,
			event_type = %event.event_type,
			metadata = %event.metadata.into_value(),
			"event"
		);
	}

	fn log_error(&self, message: &str, info: Option<PropertyBag>) {
		info!(target: TARGET, error_message = message, info = ?info, "error");
	}

	fn log_screen(&self, name: &str, info: Option<PropertyBag>) {
		info!(target: TARGET, screen = name, info = ?info, "screen");
	}

	fn log_ltv_increase(&self, amount: f64, name: &str, info: Option<PropertyBag>) {
		info!(
			target: TARGET,
			amount,
			ltv_name = name,
			info = ?info,
			"lifetime value increase"
		);
	}

	fn set_user_attribute(&self, key: &str, value: Value) {
		info!(target: TARGET, key, value = %value, "user attribute");
	}
}
