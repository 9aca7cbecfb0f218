//! # greenhouse-domain
//!
//! Pure domain model for the greenhouse control service.
//!
//! ## Responsibilities
//! - Define the seven **Settings** (setpoints) and their validation rules
//! - Define **Preconfigurations** (setpoint bundles) and the catalog that
//!   applies them atomically
//! - Define the **Soil history** and the crop-rotation suggestion algorithm
//! - Define the **Irrigation planner** (next watering time, water volume)
//! - Own the [`greenhouse::GreenhouseState`] aggregate and all invariant
//!   enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod greenhouse;
pub mod ideal;
pub mod irrigation;
pub mod preconfiguration;
pub mod rotation;
pub mod setting;
