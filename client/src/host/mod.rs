//! Browser implementations of the overlay's host capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core asks for host effects through `HostSurface`, `Navigator`, and
//! `Scheduler`. Here they become writes to the stage signal, `window.open`,
//! and `gloo_timers` timeouts. Without the `csr` feature the DOM-touching
//! parts no-op so the crate still builds and tests natively.

pub mod dom;
pub mod navigator;
pub mod scheduler;
pub mod surface;

pub use navigator::BrowserNavigator;
pub use scheduler::TimeoutScheduler;
pub use surface::{SignalHost, StageActions};
