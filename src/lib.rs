//! # libmon - Debug monitor command surface for embedded modules
//!
//! A Rust library that gives any firmware module a uniform debug-shell
//! command surface (`once`, `monitor`, direct view names) without
//! reimplementing argument parsing, view resolution, or field printing.
//! This library is designed for embedded systems and supports `no_std`
//! environments.
//!
//! ## Features
//!
//! ### Command Grammar
//! - **`once [view]`**: print the selected view a single time
//! - **`monitor <time_ms> [interval_ms] [view]`**: blocking fixed-interval
//!   repeated printing bounded by a total duration
//! - **Direct view invocation**: a bare view name prints that view once
//! - Built-in usage text when invoked without arguments
//!
//! ### Field Engines
//! - **Live engine**: per-field callbacks read values straight from the
//!   owning module object, optionally bracketed by a lock/unlock pair
//! - **Structured engine**: a point-in-time snapshot of module state is
//!   captured once per print, then a declarative field table selects and
//!   formats each value
//!
//! ### Views
//! - Named subsets of a module's debuggable fields, resolved through a
//!   static name/id table and selected with a 32-bit mask
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libmon = "0.1.0"
//! ```
//!
//! ### Live Monitoring Example
//!
//! ```rust
//! use libmon::live::{LiveField, LiveProvider, run_live_command};
//! use libmon::platform::Platform;
//! use libmon::view::{ViewEntry, view_bit};
//! use libmon::{live_field_bool, live_field_f32};
//!
//! struct Console;
//!
//! impl Platform for Console {
//!     fn write(&mut self, text: &str) {
//!         print!("{}", text);
//!     }
//!     fn now_ms(&self) -> u64 {
//!         0
//!     }
//!     fn sleep_ms(&mut self, _duration_ms: u32) {}
//! }
//!
//! struct Motor {
//!     speed_rpm: f32,
//!     enabled: bool,
//! }
//!
//! const MOTOR_VIEWS: &[ViewEntry] = &[
//!     ViewEntry { name: "full", id: 0 },
//!     ViewEntry { name: "state", id: 1 },
//! ];
//!
//! static MOTOR_FIELDS: &[LiveField<Motor>] = &[
//!     live_field_f32!(Motor, "speed_rpm", view_bit(1), |m: &Motor| m.speed_rpm),
//!     live_field_bool!(Motor, "enabled", view_bit(1), |m: &Motor| m.enabled),
//! ];
//!
//! let motor = Motor { speed_rpm: 1200.0, enabled: true };
//! let provider = LiveProvider {
//!     module_name: "motor",
//!     view_help: "full|state",
//!     view_table: MOTOR_VIEWS,
//!     fields: MOTOR_FIELDS,
//!     lock: None,
//!     unlock: None,
//! };
//!
//! let mut console = Console;
//! // As invoked by the host shell: argv[0] is the module command name.
//! let args = ["motor", "once", "state"];
//! run_live_command(&mut console, &motor, &provider, &args, 0).unwrap();
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! The host command shell, the output device, and the time/sleep primitives
//! stay outside the crate and plug in through the [`platform::Platform`]
//! trait.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Command grammar parser shared by both field engines.
///
/// Classifies `argc/argv`-style input into usage, single-print, monitor-loop
/// and direct-view invocations, validating arguments before any printing.
pub mod command;

/// Error types for command dispatch.
pub mod error;

/// Reusable field-value printers and line formatting.
pub mod field;

/// Live field engine reading values directly from the owning module object.
pub mod live;

/// Platform seam supplying the text sink, monotonic clock and blocking sleep.
pub mod platform;

/// Structured field engine printing from a point-in-time state snapshot.
pub mod structured;

/// View name/id tables and mask derivation.
pub mod view;

/// Re-exports of common types.
pub mod prelude {
    pub use super::command::run_command;
    pub use super::error::Error;
    pub use super::live::{LiveField, LiveProvider, run_live_command};
    pub use super::platform::Platform;
    pub use super::structured::{Field, Provider, run_structured_command};
    pub use super::view::{ViewEntry, ViewId, ViewMask, parse_view_name, view_bit, view_name};
}
