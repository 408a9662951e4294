#![no_std]

//! A byte-at-a-time decoder for NMEA-0183 and Trimble binary guidance
//! telemetry.
//!
//! Furrow is fed one byte at a time from a serial link and publishes position,
//! velocity and cross-track error once a sentence has passed its checksum. The
//! core state machine in the [`sans`] module never allocates and does a
//! bounded amount of work per byte, so it can be driven from an interrupt
//! handler or a tight polling loop.
//!
//! Most users should begin with the drivers in the [`avec`] module, which feed
//! a [`Decoder`](sans::Decoder) from a slice or reader and publish committed
//! fixes to a receiver.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `gga`, `vtg`, `xte`, `rmc`: recognise the corresponding NMEA sentence
//!   family (default).
//! - `trimble`: recognise Trimble binary cross-track error frames (default).
//! - `stats`: count processed characters and checksum outcomes (default).
//! - `std`: enable the reader-based driver and the `Uptime` clock (default).
//! - `log`: emit diagnostics through the `log` facade.

pub mod avec;
pub mod geo;
pub mod sans;
