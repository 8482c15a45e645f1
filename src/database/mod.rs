pub mod activities_repo;
pub mod seed;

use std::sync::Arc;

use parking_lot::Mutex;

pub use activities_repo::ActivitiesRepo;

/// Shared handle to the process-wide registry.
///
/// Request handlers run in parallel, so the whole registry sits behind one
/// mutex that is held for exactly one registry operation at a time.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<Mutex<ActivitiesRepo>>,
}

impl ActivityStore {
    pub fn new(repo: ActivitiesRepo) -> Self {
        Self {
            inner: Arc::new(Mutex::new(repo)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ActivitiesRepo::seeded())
    }

    pub fn read<T>(&self, f: impl FnOnce(&ActivitiesRepo) -> T) -> T {
        f(&self.inner.lock())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut ActivitiesRepo) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
