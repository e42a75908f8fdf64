// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracklet::{
	AnalyticsSdk, CommerceEvent, Event, PropertyBag, SdkOptions, SdkTracker, SecretString,
};

#[derive(Debug, Clone)]
pub enum Call {
	Initialize(SdkOptions),
	Commerce(CommerceEvent),
	Event(Event),
	Error(String, Option<PropertyBag>),
	Screen(String, Option<PropertyBag>),
	LtvIncrease(f64, String, Option<PropertyBag>),
	UserAttribute(String, Value),
}

/// Vendor client double that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingSdk {
	calls: Mutex<Vec<Call>>,
}

impl RecordingSdk {
	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	/// Calls after `initialize`.
	pub fn tracked(&self) -> Vec<Call> {
		self
			.calls()
			.into_iter()
			.filter(|call| !matches!(call, Call::Initialize(_)))
			.collect()
	}

	pub fn single_commerce(&self) -> CommerceEvent {
		match self.tracked().as_slice() {
			[Call::Commerce(event)] => event.clone(),
			other => panic!("expected one commerce event, got {other:?}"),
		}
	}

	pub fn single_event(&self) -> Event {
		match self.tracked().as_slice() {
			[Call::Event(event)] => event.clone(),
			other => panic!("expected one event, got {other:?}"),
		}
	}

	fn record(&self, call: Call) {
		self.calls.lock().unwrap().push(call);
	}
}

impl AnalyticsSdk for RecordingSdk {
	fn initialize(&self, options: SdkOptions) {
		self.record(Call::Initialize(options));
	}

	fn log_commerce_event(&self, event: CommerceEvent) {
		self.record(Call::Commerce(event));
	}

	fn log_event(&self, event: Event) {
		self.record(Call::Event(event));
	}

	fn log_error(&self, message: &str, info: Option<PropertyBag>) {
		self.record(Call::Error(message.to_string(), info));
	}

	fn log_screen(&self, name: &str, info: Option<PropertyBag>) {
		self.record(Call::Screen(name.to_string(), info));
	}

	fn log_ltv_increase(&self, amount: f64, name: &str, info: Option<PropertyBag>) {
		self.record(Call::LtvIncrease(amount, name.to_string(), info));
	}

	fn set_user_attribute(&self, key: &str, value: Value) {
		self.record(Call::UserAttribute(key.to_string(), value));
	}
}

pub fn secret(value: &str) -> SecretString {
	SecretString::new(value.to_string())
}

/// A tracker over a fresh recording SDK, built with valid credentials.
pub fn tracker() -> (SdkTracker<Arc<RecordingSdk>>, Arc<RecordingSdk>) {
	let sdk = Arc::new(RecordingSdk::default());
	let tracker = SdkTracker::builder(Arc::clone(&sdk))
		.api_key("test-key")
		.api_secret(secret("test-secret"))
		.build()
		.unwrap();
	(tracker, sdk)
}

pub fn event_props(event_type: &str) -> PropertyBag {
	PropertyBag::new().insert("eventType", event_type)
}
