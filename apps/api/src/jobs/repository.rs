//! Job storage behind a trait, so a database-backed store can replace the
//! in-memory one without touching handlers.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{JobPatch, JobPosting, NewJob};

/// Carried in `AppState` as `Arc<dyn JobRepository>`.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// All postings in insertion order.
    async fn list(&self) -> Result<Vec<JobPosting>>;

    /// Postings with `is_active == true`, in insertion order.
    async fn list_active(&self) -> Result<Vec<JobPosting>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|job| job.is_active)
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<JobPosting>>;

    async fn create(&self, new_job: NewJob) -> Result<JobPosting>;

    /// Returns `None` when no posting has this id.
    async fn update(&self, id: Uuid, patch: JobPatch) -> Result<Option<JobPosting>>;

    /// Returns whether a posting was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Replaces every posting, e.g. on import.
    async fn replace_all(&self, jobs: Vec<JobPosting>) -> Result<()>;
}

/// First id that occurs more than once in `jobs`. Stores assume ids are unique.
pub fn find_duplicate_id(jobs: &[JobPosting]) -> Option<Uuid> {
    let mut seen = HashSet::new();
    jobs.iter().map(|j| j.id).find(|id| !seen.insert(*id))
}

/// Process-local store. Order is insertion order, which ranking relies on for ties.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<Vec<JobPosting>>,
}

impl InMemoryJobRepository {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self) -> Result<Vec<JobPosting>> {
        Ok(self.jobs.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<JobPosting>> {
        Ok(self.jobs.read().await.iter().find(|j| j.id == id).cloned())
    }

    async fn create(&self, new_job: NewJob) -> Result<JobPosting> {
        let job = new_job.into_posting();
        self.jobs.write().await.push(job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, patch: JobPatch) -> Result<Option<JobPosting>> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.iter_mut().find(|j| j.id == id).map(|job| {
            patch.apply(job);
            job.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() != before)
    }

    async fn replace_all(&self, jobs: Vec<JobPosting>) -> Result<()> {
        *self.jobs.write().await = jobs;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            required_skills: vec!["Rust".to_string()],
            min_experience: 3,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_keeps_order() {
        let repo = InMemoryJobRepository::default();
        let a = repo.create(new_job("A")).await.unwrap();
        let b = repo.create(new_job("B")).await.unwrap();
        assert_ne!(a.id, b.id);

        let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|j| j.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_list_active_skips_deactivated() {
        let repo = InMemoryJobRepository::default();
        let a = repo.create(new_job("A")).await.unwrap();
        repo.create(new_job("B")).await.unwrap();

        let patch = JobPatch {
            is_active: Some(false),
            ..Default::default()
        };
        repo.update(a.id, patch).await.unwrap();

        let active = repo.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "B");
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let repo = InMemoryJobRepository::default();
        let updated = repo.update(Uuid::new_v4(), JobPatch::default()).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let repo = InMemoryJobRepository::default();
        let job = repo.create(new_job("A")).await.unwrap();
        let patch = JobPatch {
            salary: Some("$1".to_string()),
            ..Default::default()
        };
        let updated = repo.update(job.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.salary.as_deref(), Some("$1"));
        assert_eq!(updated.min_experience, 3);
        assert_eq!(repo.get(job.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryJobRepository::default();
        let job = repo.create(new_job("A")).await.unwrap();
        assert!(repo.delete(job.id).await.unwrap());
        assert!(!repo.delete(job.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_find_duplicate_id() {
        let a = new_job("A").into_posting();
        let b = new_job("B").into_posting();
        assert_eq!(find_duplicate_id(&[a.clone(), b.clone()]), None);

        let mut copy = new_job("C").into_posting();
        copy.id = a.id;
        assert_eq!(find_duplicate_id(&[a.clone(), b, copy]), Some(a.id));
        assert_eq!(find_duplicate_id(&[]), None);
    }

    #[tokio::test]
    async fn test_replace_all() {
        let repo = InMemoryJobRepository::default();
        repo.create(new_job("Old")).await.unwrap();
        let replacement = vec![new_job("New").into_posting()];
        repo.replace_all(replacement.clone()).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), replacement);
    }
}
