//! # npemled Architecture
//!
//! npemled is the NPEM (Native PCIe Enclosure Management) backend of an
//! enclosure-LED control system, packaged as a library with a thin CLI. It
//! turns an IBPI pattern (Locate, Rebuild, FailedDrive, ...) into the LED
//! class attributes the kernel NPEM driver exposes, and reads them back.
//!
//! It does not decide *which* pattern a drive should show. That policy lives
//! upstream; this crate only converts and enforces what the hardware can
//! represent.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, slot.rs)                                │
//! │  - is_present / get_state / set_state / write_pattern       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Probe, translate, check, write; returns CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Register Layer (translate, probe, register, attributes)    │
//! │  over Storage (store/): SysfsBackend, MemBackend            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Virtual Register
//!
//! Each NPEM indicator is a separate LED class device:
//!
//! ```text
//! <enclosure>/leds/<basename(enclosure)>:enclosure:<name>/brightness
//! ```
//!
//! The register is the OR of the bits whose file exists and reads non-zero.
//! Which files exist is the enclosure's supported mask; it is re-probed on
//! every call because enclosures come and go.
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade and never prints. Rejected
//! patterns are logged at `info`, per-attribute problems at `warn`, probe
//! results at `debug`. User-facing outcomes also come back as
//! [`commands::CmdMessage`]s on the result.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Composed get/set/probe operations
//! - [`translate`]: IBPI pattern ↔ capability bit table
//! - [`attributes`]: Capability bit ↔ LED attribute table and path rules
//! - [`probe`]: Supported-mask discovery
//! - [`register`]: Reading and writing the virtual register
//! - [`store`]: Attribute I/O abstraction and implementations
//! - [`slot`]: Slot record for an NPEM controller
//! - [`model`]: `IbpiPattern`, `NpemCaps`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod probe;
pub mod register;
pub mod slot;
pub mod store;
pub mod translate;
