//! # HOS Trip Planner
//!
//! Hours-of-Service (HOS) compliant trip planning engine for property-carrying
//! truck drivers.
//!
//! Given a resolved route profile (total distance, total duration, and an
//! ordered list of segments), a regulation profile, and the hours already
//! consumed in the current duty cycle, the crate computes a multi-day
//! itinerary: an ordered sequence of stops (start, pickup, rest breaks, fuel,
//! overnight rests, dropoff) and one daily log per calendar day with
//! duty-status activities and hour totals suitable for regulatory
//! record-keeping.
//!
//! ## Features
//!
//! - **Trip Validation**: structural checks on trip input before planning
//! - **Itinerary Engine**: segment-driven simulation applying break,
//!   shift-end, pickup/dropoff service, and refueling rules
//! - **Daily Logs**: per-day duty-status timelines covering 00:00-24:00 with
//!   aggregated hour totals
//! - **Compliance Check**: rolling cycle-hour summary for a generated log set
//! - **Configuration**: regulation profiles loaded from TOML with a built-in
//!   FMCSA property-carrying 70-hour/8-day default
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated public data types (DTOs) for callers
//! - [`models`]: Regulation, route, trip, and itinerary value objects
//! - [`services`]: Trip validator, itinerary engine, and compliance checker
//! - [`config`]: Regulation profile configuration loading
//! - [`error`]: Crate error type
//!
//! Route resolution (geocoding, distance/duration lookup) is strictly the
//! caller's concern: the engine consumes an already-resolved
//! [`api::RouteProfile`] and never performs I/O. Each invocation is an
//! independent, synchronous, pure computation, safely parallelizable across
//! trips.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
