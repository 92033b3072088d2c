//! Poison recovery for the std locks guarding per-field state

use std::sync::{Mutex, MutexGuard};

/// Extension trait for Mutex with poison recovery
pub trait MutexExt<T> {
    /// Lock the mutex, taking the inner guard back if a holder panicked
    fn lock_recovered(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_recovered(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(|poisoned| {
            log::warn!("Mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_lock_recovered_after_panic() {
        let shared = Arc::new(Mutex::new(1));
        let clone = Arc::clone(&shared);

        let _ = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(shared.is_poisoned());
        *shared.lock_recovered() += 1;
        assert_eq!(*shared.lock_recovered(), 2);
    }
}
