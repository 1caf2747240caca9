//! Current-user profile and its cached accessor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};
use crate::query::{QueryCache, QueryState};

/// Cache key for the current user's profile
pub const USER_INFO_KEY: &str = "userInfo";

/// How long a fetched profile is considered fresh
pub const USER_INFO_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Name shown when no profile is available
pub const ANONYMOUS_NAME: &str = "Guest";

/// Hosts and labels a user may operate on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    #[serde(default)]
    pub host_ids: Vec<u64>,
    #[serde(default)]
    pub label_ids: Vec<u64>,
}

/// Profile of the signed-in console user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
    pub role: String,
    pub email: String,
    pub is_enabled: bool,
    pub is_init: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub permissions: UserPermissions,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Source of the current user's profile
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_current_user(&self) -> ConsoleResult<UserInfo>;
}

/// Reads the current user from a JSON profile file
#[derive(Debug, Clone)]
pub struct FileUserService {
    path: PathBuf,
}

impl FileUserService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserService for FileUserService {
    async fn get_current_user(&self) -> ConsoleResult<UserInfo> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConsoleError::Fetch(format!("{}: {}", self.path.display(), e)))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Cached, coalesced access to the current user's profile
#[derive(Clone)]
pub struct UserInfoCache {
    service: Arc<dyn UserService>,
    cache: Arc<QueryCache<UserInfo>>,
}

impl UserInfoCache {
    pub fn new(service: Arc<dyn UserService>, stale_time: Option<Duration>) -> Self {
        Self {
            service,
            cache: Arc::new(QueryCache::new(stale_time)),
        }
    }

    /// Read the profile, fetching it if nothing fresh is cached
    pub async fn get(&self) -> QueryState<UserInfo> {
        let service = Arc::clone(&self.service);
        self.cache
            .fetch(USER_INFO_KEY, move || async move { service.get_current_user().await })
            .await
    }

    /// Current state without fetching
    pub fn state(&self) -> QueryState<UserInfo> {
        self.cache.state(USER_INFO_KEY)
    }

    /// Seed the cache, e.g. with the profile returned by sign-in
    pub fn set(&self, user: UserInfo) {
        self.cache.set_data(USER_INFO_KEY, user);
    }

    /// Forget the cached profile; the next read fetches again
    pub fn invalidate(&self) {
        self.cache.invalidate(USER_INFO_KEY);
    }
}

/// Name to show for a profile state, degrading to [`ANONYMOUS_NAME`]
pub fn display_name(state: &QueryState<UserInfo>) -> &str {
    match state {
        QueryState::Success(user) => &user.username,
        _ => ANONYMOUS_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_user() -> UserInfo {
        UserInfo {
            id: 1,
            username: "ops".to_string(),
            role: "admin".to_string(),
            email: "ops@example.com".to_string(),
            is_enabled: true,
            is_init: false,
            avatar: None,
            permissions: UserPermissions {
                host_ids: vec![1, 2],
                label_ids: vec![],
            },
        }
    }

    struct SlowService {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl UserService for SlowService {
        async fn get_current_user(&self) -> ConsoleResult<UserInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self.fail {
                Err(ConsoleError::Fetch("401 Unauthorized".to_string()))
            } else {
                Ok(sample_user())
            }
        }
    }

    fn cache(fail: bool) -> (UserInfoCache, Arc<SlowService>) {
        let service = Arc::new(SlowService {
            calls: AtomicUsize::new(0),
            fail,
        });
        (UserInfoCache::new(service.clone(), Some(USER_INFO_STALE_TIME)), service)
    }

    #[tokio::test(start_paused = true)]
    async fn simultaneous_reads_fetch_once() {
        let (users, service) = cache(false);

        let (a, b) = tokio::join!(users.get(), users.get());
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(a.data().unwrap(), b.data().unwrap()));
    }

    #[tokio::test(start_paused = true)]
    async fn simultaneous_reads_share_the_error() {
        let (users, service) = cache(true);

        let (a, b) = tokio::join!(users.get(), users.get());
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(a.error().unwrap(), b.error().unwrap()));
        assert_eq!(display_name(&a), ANONYMOUS_NAME);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_reads_never_refetch_while_fresh() {
        let (users, service) = cache(false);
        for _ in 0..10 {
            let state = users.get().await;
            assert_eq!(display_name(&state), "ops");
        }
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_then_read_refetches() {
        let (users, service) = cache(false);
        users.get().await;
        users.invalidate();
        assert_eq!(users.state().status(), "idle");
        users.get().await;
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn seeded_profile_skips_fetch() {
        let (users, service) = cache(true);
        users.set(sample_user());
        assert!(users.get().await.data().unwrap().is_admin());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn file_service_reads_camel_case_profile() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("me.json");
        std::fs::write(
            &path,
            r#"{"id":7,"username":"alice","role":"user","email":"a@b.c",
                "isEnabled":true,"isInit":true,"permissions":{"hostIds":[3],"labelIds":[4]}}"#,
        )
        .unwrap();

        let user = FileUserService::new(&path).get_current_user().await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.permissions.host_ids, vec![3]);
        assert!(!user.is_admin());

        let missing = FileUserService::new(dir.path().join("none.json"));
        assert!(matches!(
            missing.get_current_user().await,
            Err(ConsoleError::Fetch(_))
        ));
    }
}
