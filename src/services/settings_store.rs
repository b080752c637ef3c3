use crate::models::{SettingsEntry, SettingsState};
use crate::repositories::SettingsRepository;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

pub const FETCH_SETTINGS_ERROR: &str = "Failed to fetch settings";
pub const UPDATE_SETTING_ERROR: &str = "Failed to update setting";

/// Process-wide cache of the `settings` table.
///
/// Reads are synchronous and never hit the repository. `fetch_settings` and
/// `update_setting` are not serialized against each other: whichever
/// completes last decides `is_loading` and `error`. An update only ever
/// merges its own key, so overlapping calls cannot drop unrelated settings.
pub struct SettingsStore {
    repository: Arc<dyn SettingsRepository>,
    state: RwLock<SettingsState>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SettingsStore")
            .field("settings_count", &state.settings.len())
            .field("is_loading", &state.is_loading)
            .field("error", &state.error)
            .finish()
    }
}

impl SettingsStore {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self {
            repository,
            state: RwLock::new(SettingsState::default()),
        }
    }

    /// Replace the whole local map with the rows currently stored remotely
    pub async fn fetch_settings(&self) {
        self.begin_request();

        match self.repository.find_all().await {
            Ok(entries) => {
                let settings: HashMap<String, Value> = entries
                    .into_iter()
                    .map(|entry| (entry.key, entry.value))
                    .collect();

                let mut state = self.state.write();
                tracing::debug!("Loaded {} settings", settings.len());
                state.settings = settings;
                state.is_loading = false;
            }
            Err(e) => {
                tracing::error!("Error fetching settings: {}", e);
                let mut state = self.state.write();
                state.error = Some(FETCH_SETTINGS_ERROR.to_string());
                state.is_loading = false;
            }
        }
    }

    /// Upsert one setting and merge it locally on success
    pub async fn update_setting(&self, key: &str, value: Value) -> bool {
        self.begin_request();

        let entry = SettingsEntry::new(key.to_string(), value);
        match self.repository.upsert(&entry).await {
            Ok(()) => {
                let mut state = self.state.write();
                state.settings.insert(entry.key, entry.value);
                state.is_loading = false;
                tracing::info!("Updated setting: {}", key);
                true
            }
            Err(e) => {
                tracing::error!("Error updating setting {}: {}", key, e);
                let mut state = self.state.write();
                state.error = Some(UPDATE_SETTING_ERROR.to_string());
                state.is_loading = false;
                false
            }
        }
    }

    pub fn get_setting(&self, key: &str) -> Option<Value> {
        self.state.read().settings.get(key).cloned()
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn snapshot(&self) -> SettingsState {
        self.state.read().clone()
    }

    fn begin_request(&self) {
        let mut state = self.state.write();
        state.is_loading = true;
        state.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct InMemorySettingsRepository {
        rows: parking_lot::Mutex<Vec<SettingsEntry>>,
        failing: AtomicBool,
    }

    impl InMemorySettingsRepository {
        fn with_rows(rows: &[(&str, Value)]) -> Self {
            let repo = Self::default();
            for (key, value) in rows {
                repo.rows
                    .lock()
                    .push(SettingsEntry::new(key.to_string(), value.clone()));
            }
            repo
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(ServiceError::DatabaseError("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl SettingsRepository for InMemorySettingsRepository {
        async fn find_all(&self) -> Result<Vec<SettingsEntry>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().clone())
        }

        async fn upsert(&self, entry: &SettingsEntry) -> Result<(), ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock();
            rows.retain(|row| row.key != entry.key);
            rows.push(entry.clone());
            Ok(())
        }
    }

    fn store_with(repo: Arc<InMemorySettingsRepository>) -> SettingsStore {
        SettingsStore::new(repo)
    }

    #[tokio::test]
    async fn fetch_replaces_local_map_entirely() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[
            ("site_name", json!("Harbour Lodge")),
            ("max_guests", json!(6)),
        ]));
        let store = store_with(repo.clone());

        store.fetch_settings().await;
        assert_eq!(store.get_setting("max_guests"), Some(json!(6)));

        // A key removed remotely must not survive the next fetch
        repo.rows.lock().retain(|row| row.key != "max_guests");
        store.fetch_settings().await;

        let state = store.snapshot();
        assert_eq!(
            state.settings,
            HashMap::from([("site_name".to_string(), json!("Harbour Lodge"))])
        );
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_settings_and_reports_generic_error() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[(
            "theme",
            json!("light"),
        )]));
        let store = store_with(repo.clone());
        store.fetch_settings().await;

        repo.set_failing(true);
        store.fetch_settings().await;

        assert_eq!(store.get_setting("theme"), Some(json!("light")));
        assert_eq!(store.error().as_deref(), Some(FETCH_SETTINGS_ERROR));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn update_merges_single_key() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[
            ("theme", json!("light")),
            ("currency", json!("EUR")),
        ]));
        let store = store_with(repo.clone());
        store.fetch_settings().await;

        let value = json!({ "enabled": true, "days": [1, 2, 3] });
        assert!(store.update_setting("booking_window", value.clone()).await);

        assert_eq!(store.get_setting("booking_window"), Some(value));
        assert_eq!(store.get_setting("theme"), Some(json!("light")));
        assert_eq!(store.get_setting("currency"), Some(json!("EUR")));
        assert_eq!(repo.rows.lock().len(), 3);
    }

    #[tokio::test]
    async fn update_overwrites_existing_key() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[(
            "theme",
            json!("light"),
        )]));
        let store = store_with(repo.clone());
        store.fetch_settings().await;

        assert!(store.update_setting("theme", json!("dark")).await);
        assert_eq!(store.get_setting("theme"), Some(json!("dark")));
        assert_eq!(repo.rows.lock().len(), 1);
    }

    #[tokio::test]
    async fn failed_update_leaves_settings_untouched() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[(
            "theme",
            json!("light"),
        )]));
        let store = store_with(repo.clone());
        store.fetch_settings().await;
        let before = store.snapshot().settings;

        repo.set_failing(true);
        assert!(!store.update_setting("theme", json!("dark")).await);

        let after = store.snapshot();
        assert_eq!(after.settings, before);
        assert_eq!(after.error.as_deref(), Some(UPDATE_SETTING_ERROR));
        assert!(!after.is_loading);
    }

    #[tokio::test]
    async fn next_operation_clears_previous_error() {
        let repo = Arc::new(InMemorySettingsRepository::default());
        let store = store_with(repo.clone());

        repo.set_failing(true);
        store.fetch_settings().await;
        assert!(store.error().is_some());

        repo.set_failing(false);
        assert!(store.update_setting("theme", json!("dark")).await);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn clear_error_resets_only_error() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[(
            "theme",
            json!("light"),
        )]));
        let store = store_with(repo.clone());
        store.fetch_settings().await;
        repo.set_failing(true);
        store.fetch_settings().await;

        store.clear_error();
        assert_eq!(store.error(), None);
        assert_eq!(store.get_setting("theme"), Some(json!("light")));

        // Idempotent on a clean store
        store.clear_error();
        assert_eq!(store.error(), None);
    }

    #[test]
    fn get_setting_never_loads() {
        let repo = Arc::new(InMemorySettingsRepository::with_rows(&[(
            "theme",
            json!("light"),
        )]));
        let store = store_with(repo);

        assert_eq!(store.get_setting("theme"), None);
        assert!(!store.is_loading());
    }

    /// Blocks `find_all` until released so two operations can overlap
    struct GatedSettingsRepository {
        inner: InMemorySettingsRepository,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl SettingsRepository for GatedSettingsRepository {
        async fn find_all(&self) -> Result<Vec<SettingsEntry>, ServiceError> {
            self.entered.notify_one();
            self.release.notified().await;
            self.inner.find_all().await
        }

        async fn upsert(&self, entry: &SettingsEntry) -> Result<(), ServiceError> {
            self.inner.upsert(entry).await
        }
    }

    // Overlapping operations are not serialized: the update finishing first
    // drops `is_loading` while the fetch is still outstanding.
    #[tokio::test]
    async fn overlapping_operations_race_on_loading_flag() {
        let repo = Arc::new(GatedSettingsRepository {
            inner: InMemorySettingsRepository::with_rows(&[("theme", json!("light"))]),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let store = Arc::new(SettingsStore::new(repo.clone()));

        let fetching = {
            let store = store.clone();
            tokio::spawn(async move { store.fetch_settings().await })
        };
        repo.entered.notified().await;
        assert!(store.is_loading());

        assert!(store.update_setting("currency", json!("GBP")).await);
        assert!(!store.is_loading());

        repo.release.notify_one();
        fetching.await.unwrap();

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.settings.get("theme"), Some(&json!("light")));
        assert_eq!(state.settings.get("currency"), Some(&json!("GBP")));
    }
}
