// tests/support/mocks.rs
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use recipe_hub_core::application::ports::{
    error_sink::{ErrorRecord, ErrorSink},
    time::Clock,
};
use recipe_hub_core::domain::user::{
    Email, NewUserProfile, UserProfile, UserRepository, UserStoreError, Username,
};
use recipe_hub_core::infrastructure::repositories::InMemoryUserRepository;
use std::sync::Mutex;
use std::time::Duration;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub const FIXED_TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}

/// 記録されたログを後から検査できるシンク
#[derive(Default)]
pub struct CapturingSink {
    records: Mutex<Vec<ErrorRecord>>,
}

impl CapturingSink {
    pub fn records(&self) -> Vec<ErrorRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ErrorSink for CapturingSink {
    fn record(&self, record: ErrorRecord) {
        self.records.lock().unwrap().push(record);
    }
}

/// Every call fails like an unreachable backing store.
pub struct BrokenUserRepo;

#[async_trait]
impl UserRepository for BrokenUserRepo {
    async fn insert(&self, _new_user: NewUserProfile) -> Result<UserProfile, UserStoreError> {
        Err(anyhow!("database connection refused at 10.0.0.12:5432").into())
    }

    async fn find_by_email(&self, _email: &Email) -> anyhow::Result<Option<UserProfile>> {
        Err(anyhow!("database connection refused at 10.0.0.12:5432"))
    }

    async fn find_by_username(&self, _username: &Username) -> anyhow::Result<Option<UserProfile>> {
        Err(anyhow!("database connection refused at 10.0.0.12:5432"))
    }
}

/// メール検索が遅いストア。重複チェックと挿入の間に他リクエストが割り込める。
#[derive(Default)]
pub struct SlowLookupUserRepo {
    inner: InMemoryUserRepository,
}

#[async_trait]
impl UserRepository for SlowLookupUserRepo {
    async fn insert(&self, new_user: NewUserProfile) -> Result<UserProfile, UserStoreError> {
        self.inner.insert(new_user).await
    }

    async fn find_by_email(&self, email: &Email) -> anyhow::Result<Option<UserProfile>> {
        let found = self.inner.find_by_email(email).await?;
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(found)
    }

    async fn find_by_username(&self, username: &Username) -> anyhow::Result<Option<UserProfile>> {
        self.inner.find_by_username(username).await
    }
}
