// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Tracklet analytics tracking.
//!
//! This crate holds everything that turns caller input into vendor objects
//! without touching the vendor itself:
//!
//! - [`PropertyBag`]: the string-keyed value bag passed with every call
//! - [`TransactionAttributeKey`] and [`EventKey`]: the closed sets of keys
//!   that are ever interpreted, each with the [`ValueKind`] it expects
//! - [`TransactionAttributes::from_properties`]: tolerant conversion that
//!   silently skips absent or mistyped keys
//! - [`Event::generate`]: validating builder for named events
//! - [`CommerceEvent`] and [`Product`] for structured commerce calls

pub mod commerce;
pub mod error;
pub mod event;
pub mod event_type;
pub mod keys;
pub mod options;
pub mod properties;
pub mod transaction;

pub use commerce::{CommerceAction, CommerceEvent, Location, Product};
pub use error::{GenerationError, Result};
pub use event::Event;
pub use event_type::{EventType, UnknownEventType};
pub use keys::{EventKey, PropertyKey, TransactionAttributeKey, ValueKind};
pub use options::{InstallationType, SdkEnvironment, UnknownOption};
pub use properties::PropertyBag;
pub use transaction::TransactionAttributes;
