//! # greenhouse-app
//!
//! Application layer for the greenhouse control service.
//!
//! ## Responsibilities
//! - Hold the single shared [`greenhouse_domain::greenhouse::GreenhouseState`]
//!   behind one process-wide lock ([`shared::SharedGreenhouse`])
//! - Expose one service per domain component; every service operation holds
//!   the lock for its entire duration
//! - Parse the three bootstrap sources (soil history, ideal parameters,
//!   preconfigurations) into domain values
//! - Define ports (traits) for the IO the application needs, currently just
//!   the wall clock
//!
//! ## Dependency rule
//! Depends only on the domain crate. Adapters depend on this crate and
//! implement its ports.

pub mod bootstrap;
pub mod ports;
pub mod services;
pub mod shared;
