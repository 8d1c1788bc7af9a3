use std::{collections::HashSet, sync::Arc, time::Duration};

use async_trait::async_trait;
use common::seed::SeedClient;
use models::{Student, StudentInput};
use tokio::sync::{OnceCell, RwLock};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;

/// Where the initial student list comes from.
/// The store calls `fetch` at most once per successful initialization.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Student>, ServiceError>;
}

/// Seed source backed by the remote placeholder API.
pub struct HttpSeedSource {
    client: SeedClient,
}

impl HttpSeedSource {
    pub fn new(client: SeedClient) -> Self { Self { client } }

    pub fn from_url(url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self::new(SeedClient::new(url, timeout)?))
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<Student>, ServiceError> {
        let students = self.client.fetch::<Vec<Student>>().await?;
        Ok(students)
    }
}

/// Fixed in-memory seed, for offline runs and tests.
#[derive(Clone, Default)]
pub struct StaticSeedSource {
    students: Vec<Student>,
}

impl StaticSeedSource {
    pub fn new(students: Vec<Student>) -> Self { Self { students } }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn fetch(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(self.students.clone())
    }
}

/// In-memory student collection, lazily seeded.
///
/// The cache is a `OnceCell`: every operation goes through [`StudentStore::loaded`],
/// so concurrent first requests share one in-flight fetch and a failed fetch
/// leaves the cell empty for the next caller to retry.
pub struct StudentStore {
    source: Arc<dyn SeedSource>,
    cache: OnceCell<RwLock<Vec<Student>>>,
}

impl StudentStore {
    pub fn new(source: Arc<dyn SeedSource>) -> Arc<Self> {
        Arc::new(Self { source, cache: OnceCell::new() })
    }

    /// Whether the seed fetch has completed.
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    async fn loaded(&self) -> Result<&RwLock<Vec<Student>>, ServiceError> {
        self.cache
            .get_or_try_init(|| async {
                info!(event = "seed_fetch_start", "loading seed students");
                let fetched = match self.source.fetch().await {
                    Ok(list) => list,
                    Err(e) => {
                        warn!(event = "seed_fetch_failed", error = %e, "seed fetch failed");
                        return Err(e);
                    }
                };
                let seed = dedup_by_id(fetched);
                info!(event = "seed_fetch_done", count = seed.len(), "seed students loaded");
                Ok(RwLock::new(seed))
            })
            .await
    }

    /// All students, seed order first then appended records.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        let cache = self.loaded().await?;
        Ok(cache.read().await.clone())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Option<Student>, ServiceError> {
        let cache = self.loaded().await?;
        let list = cache.read().await;
        Ok(list.iter().find(|s| s.id == id).cloned())
    }

    /// Validate and append a student. Invalid input never reaches the seed source.
    #[instrument(skip(self))]
    pub async fn add(&self, input: StudentInput) -> Result<Student, ServiceError> {
        let student = input.into_student()?;
        let cache = self.loaded().await?;
        let mut list = cache.write().await;
        if list.iter().any(|s| s.id == student.id) {
            return Err(ServiceError::Conflict(format!("student {} already exists", student.id)));
        }
        list.push(student.clone());
        info!(event = "student_created", id = student.id, total = list.len(), "student added");
        Ok(student)
    }

    /// Number of cached students; loads the seed like `list`.
    pub async fn len(&self) -> Result<usize, ServiceError> {
        let cache = self.loaded().await?;
        Ok(cache.read().await.len())
    }
}

/// Keep the first record for each id; ids must stay unique in the store.
fn dedup_by_id(list: Vec<Student>) -> Vec<Student> {
    let mut seen = HashSet::with_capacity(list.len());
    let total = list.len();
    let out: Vec<Student> = list.into_iter().filter(|s| seen.insert(s.id)).collect();
    if out.len() != total {
        warn!(dropped = total - out.len(), "seed contained duplicate ids");
    }
    out
}
