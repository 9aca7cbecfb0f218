//! The process-wide lock around the greenhouse aggregate.

use std::sync::{Arc, Mutex, PoisonError};

use greenhouse_domain::greenhouse::GreenhouseState;

/// Shared handle to the one [`GreenhouseState`] instance.
///
/// Cloning the handle shares the same aggregate. Every access goes through
/// [`SharedGreenhouse::with`], which holds the exclusive lock for the whole
/// closure — settings reads and writes, catalog operations, history appends
/// and scheduling computations are all mutually exclusive. The closures are
/// short and CPU-bound; nothing suspends while the lock is held.
#[derive(Debug, Clone, Default)]
pub struct SharedGreenhouse {
    inner: Arc<Mutex<GreenhouseState>>,
}

impl SharedGreenhouse {
    #[must_use]
    pub fn new(state: GreenhouseState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run `f` with exclusive access to the aggregate.
    ///
    /// A poisoned lock is recovered: domain operations never leave the
    /// aggregate partially written, so the poison flag carries no
    /// information here.
    pub fn with<R>(&self, f: impl FnOnce(&mut GreenhouseState) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenhouse_domain::setting::SettingName;

    #[test]
    fn should_share_state_between_clones() {
        let shared = SharedGreenhouse::default();
        let other = shared.clone();

        shared
            .with(|gh| gh.settings.set(SettingName::Humidity, "33"))
            .unwrap();

        assert_eq!(other.with(|gh| gh.settings.get(SettingName::Humidity)), "33");
    }

    #[test]
    fn should_serialize_concurrent_writers() {
        let shared = SharedGreenhouse::default();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        shared.with(|gh| gh.soil_history.push("wheat"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.with(|gh| gh.soil_history.entries().len()), 800);
    }
}
