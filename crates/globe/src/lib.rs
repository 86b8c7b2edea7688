//! Pointer interaction kernel for the world-clock globe.
//!
//! One [`GlobeController`] per globe view owns all mutable interaction state:
//! rotation, drag tracking, the active tooltip, and the single pending resume
//! timer. Hosts feed it pointer events and animation ticks from one thread.

pub mod config;
pub mod controller;
pub mod pointer;
pub mod rotation;
pub mod tooltip;

pub use config::*;
pub use controller::*;
pub use pointer::*;
pub use rotation::*;
pub use tooltip::*;
