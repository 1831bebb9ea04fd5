// ============================================================================
// RECOMMENDATION STORE - Persistencia del último resultado de matching
// ============================================================================
// Un solo productor (upload) y un solo consumidor (recommended jobs).
// El valor se guarda tal cual llegó de `/match_jobs`.
// ============================================================================

use crate::models::Job;
use crate::services::error::StoreError;
use crate::utils::constants::RECOMMENDED_JOBS_KEY;
use crate::utils::storage;

pub trait RecommendationStore {
    fn save_raw(&self, raw: &str) -> Result<(), StoreError>;

    fn load_raw(&self) -> Result<Option<String>, StoreError>;

    fn clear(&self) -> Result<(), StoreError>;

    /// `Ok(None)` = no hay nada guardado; `Malformed` = hay algo pero no decodifica
    fn load(&self) -> Result<Option<Vec<Job>>, StoreError> {
        match self.load_raw()? {
            None => Ok(None),
            Some(raw) => serde_json::from_str::<Vec<Job>>(&raw)
                .map(Some)
                .map_err(|e| StoreError::Malformed(e.to_string())),
        }
    }
}

/// sessionStorage del navegador, clave `recommendedJobs`
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionRecommendationStore;

impl RecommendationStore for SessionRecommendationStore {
    fn save_raw(&self, raw: &str) -> Result<(), StoreError> {
        storage::save_raw(RECOMMENDED_JOBS_KEY, raw)
    }

    fn load_raw(&self) -> Result<Option<String>, StoreError> {
        storage::load_raw(RECOMMENDED_JOBS_KEY)
    }

    fn clear(&self) -> Result<(), StoreError> {
        storage::remove_raw(RECOMMENDED_JOBS_KEY)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Store en memoria para tests
    #[derive(Default)]
    pub struct MemoryRecommendationStore {
        pub slot: RefCell<Option<String>>,
        pub writes: Cell<usize>,
        pub unavailable: bool,
    }

    impl MemoryRecommendationStore {
        pub fn with_raw(raw: &str) -> Self {
            Self {
                slot: RefCell::new(Some(raw.to_string())),
                ..Default::default()
            }
        }

        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Default::default()
            }
        }
    }

    impl RecommendationStore for MemoryRecommendationStore {
        fn save_raw(&self, raw: &str) -> Result<(), StoreError> {
            if self.unavailable {
                return Err(StoreError::Unavailable);
            }
            self.writes.set(self.writes.get() + 1);
            *self.slot.borrow_mut() = Some(raw.to_string());
            Ok(())
        }

        fn load_raw(&self) -> Result<Option<String>, StoreError> {
            if self.unavailable {
                return Err(StoreError::Unavailable);
            }
            Ok(self.slot.borrow().clone())
        }

        fn clear(&self) -> Result<(), StoreError> {
            if self.unavailable {
                return Err(StoreError::Unavailable);
            }
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }

    impl RecommendationStore for &MemoryRecommendationStore {
        fn save_raw(&self, raw: &str) -> Result<(), StoreError> {
            (**self).save_raw(raw)
        }

        fn load_raw(&self) -> Result<Option<String>, StoreError> {
            (**self).load_raw()
        }

        fn clear(&self) -> Result<(), StoreError> {
            (**self).clear()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryRecommendationStore;
    use super::*;

    #[test]
    fn empty_store_loads_none() {
        let store = MemoryRecommendationStore::default();
        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn stored_array_is_decoded() {
        let store = MemoryRecommendationStore::with_raw(
            r#"[{"job_title":"A","company":"B","location":"C","skills":[],"reason":""},{"job_title":"D","company":"E","location":"F","skills":["Rust"],"reason":"1 skill","score":40}]"#,
        );
        let jobs = store.load().unwrap().unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].score, Some(40.0));
    }

    #[test]
    fn garbage_is_malformed_not_absent() {
        let store = MemoryRecommendationStore::with_raw("{not json");
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn clear_removes_payload() {
        let store = MemoryRecommendationStore::with_raw("[]");
        store.clear().unwrap();
        assert_eq!(store.load_raw(), Ok(None));
    }
}
