//! Test doubles for catalog service tests.

#![allow(dead_code)]

use asmo_core::{AsmoError, AsmoResult, NewProject, Project, RecordId};
use asmo_repository::CatalogStore;
use asmo_service::{CacheError, CacheInterface, CacheResult};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Project store held in a vector, counting every call.
#[derive(Default)]
pub struct InMemoryProjectStore {
    rows: Mutex<Vec<Project>>,
    pub find_all_calls: AtomicUsize,
    pub find_by_id_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_all_count(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_id_count(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogStore<Project> for InMemoryProjectStore {
    async fn find_all(&self) -> AsmoResult<Vec<Project>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: RecordId) -> AsmoResult<Option<Project>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id.get()).cloned())
    }

    async fn insert(&self, draft: &NewProject) -> AsmoResult<RecordId> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let id = i64::try_from(rows.len()).unwrap() + 1;
        let now = Utc::now();
        rows.push(Project {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            img: draft.img.clone(),
            price: draft.price,
            time_develop: draft.time_develop,
            created_at: now,
            update_at: now,
        });
        RecordId::new(id)
    }
}

/// Store whose every operation fails like a lost connection.
pub struct FailingStore;

#[async_trait]
impl CatalogStore<Project> for FailingStore {
    async fn find_all(&self) -> AsmoResult<Vec<Project>> {
        Err(AsmoError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: RecordId) -> AsmoResult<Option<Project>> {
        Err(AsmoError::Database("connection refused".to_string()))
    }

    async fn insert(&self, _draft: &NewProject) -> AsmoResult<RecordId> {
        Err(AsmoError::Database("connection refused".to_string()))
    }
}

/// Cache whose backend errors on every call while claiming to be connected.
pub struct BrokenCache;

#[async_trait]
impl CacheInterface for BrokenCache {
    async fn get_raw(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Backend("READONLY".to_string()))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Err(CacheError::Backend("READONLY".to_string()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::Backend("READONLY".to_string()))
    }

    async fn close(&self) {}

    fn is_connected(&self) -> bool {
        true
    }
}

pub fn bot_draft(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: "Answers customer questions on Telegram".to_string(),
        img: "https://cdn.example.com/bot.png".to_string(),
        price: 800.0,
        time_develop: 10,
    }
}
