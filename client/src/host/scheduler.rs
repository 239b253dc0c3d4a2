//! `Scheduler` over `gloo_timers` one-shot timeouts.

use std::time::Duration;

use overlay::host::Scheduler;

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            // The controller cancels by sequence number, not by handle.
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no timer backend; dropping task scheduled in {delay:?}");
            drop(task);
        }
    }
}
