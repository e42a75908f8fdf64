// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Analytics tracking facade.
//!
//! [`SdkTracker`] implements a set of small capability traits (cart,
//! checkout, purchase, named events, locations and so on) and forwards each
//! call to a vendor client behind the [`AnalyticsSdk`] trait. Named events
//! are validated through [`Event::generate`]; everything else is
//! fire-and-forget.
//!
//! # Example
//!
//! ```
//! use tracklet::{EventTracking, PropertyBag, SdkTracker, SecretString, TracingSdk};
//!
//! let tracker = SdkTracker::builder(TracingSdk)
//!     .api_key("app-key")
//!     .api_secret(SecretString::new("app-secret".to_string()))
//!     .build()
//!     .unwrap();
//!
//! let props = PropertyBag::new()
//!     .insert("eventType", "navigation")
//!     .insert("screen", "home");
//! tracker.track_event("Button Tapped", Some(props)).unwrap();
//!
//! let err = tracker.track_event("Button Tapped", None).unwrap_err();
//! assert!(err.message().contains("properties are required"));
//! ```

pub mod capabilities;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod sdk;
pub mod tracing_sdk;
pub mod tracker;

pub use capabilities::{
	CartTracking, CheckoutTracking, ErrorLogging, EventTracking, LifetimeValueTracking,
	LocationTracking, PageViewTracking, ProductViewTracking, PurchaseTracking,
	UserAttributeTracking, WishListTracking,
};
pub use enrich::{PropertyEnricher, StaticProperties};
pub use error::{TrackerError, TrackingError, TrackingResult};
pub use logging::init_tracing;
pub use sdk::{AnalyticsSdk, SdkOptions};
pub use tracing_sdk::TracingSdk;
pub use tracker::{SdkTracker, TrackerBuilder, LOCATION_EVENT_NAME};

pub use tracklet_config::{LoggingConfig, SdkConfig, SecretString};
pub use tracklet_core::{
	CommerceAction, CommerceEvent, Event, EventType, GenerationError, InstallationType, Location,
	Product, PropertyBag, SdkEnvironment, TransactionAttributes,
};
