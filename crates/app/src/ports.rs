//! Ports — traits the application needs adapters (or the composition root)
//! to provide.

pub mod clock;

pub use clock::{Clock, SystemClock};
