//! In-memory storage backend
//!
//! Holds every entity in an id-keyed ordered map behind an async lock, so
//! list reads come back in insertion order and repeated reads are identical.
//! One atomic counter issues ids across all entity types. The process starts
//! empty; the seed routine fills it on boot.

use crate::error::AppError;
use crate::models::{
    Job, Lead, NewJob, NewLead, NewNews, NewProject, NewTestimonial, News, Project, Testimonial,
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

/// Thread-safe in-memory record store
pub struct MemoryStorage {
    projects: RwLock<BTreeMap<i32, Project>>,
    testimonials: RwLock<BTreeMap<i32, Testimonial>>,
    jobs: RwLock<BTreeMap<i32, Job>>,
    news: RwLock<BTreeMap<i32, News>>,
    leads: RwLock<BTreeMap<i32, Lead>>,
    next_id: AtomicI32,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(BTreeMap::new()),
            testimonials: RwLock::new(BTreeMap::new()),
            jobs: RwLock::new(BTreeMap::new()),
            news: RwLock::new(BTreeMap::new()),
            leads: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn allocate_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.projects.read().await;
        Ok(projects.values().cloned().collect())
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let projects = self.projects.read().await;
        Ok(projects.values().find(|p| p.slug == slug).cloned())
    }

    async fn create_project(&self, input: NewProject) -> Result<Project, AppError> {
        let project = input.into_project(self.allocate_id());
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = self.testimonials.read().await;
        Ok(testimonials.values().cloned().collect())
    }

    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, AppError> {
        let testimonial = input.into_testimonial(self.allocate_id());
        let mut testimonials = self.testimonials.write().await;
        testimonials.insert(testimonial.id, testimonial.clone());
        Ok(testimonial)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().cloned().collect())
    }

    async fn create_job(&self, input: NewJob) -> Result<Job, AppError> {
        let job = input.into_job(self.allocate_id());
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn list_news(&self) -> Result<Vec<News>, AppError> {
        let news = self.news.read().await;
        Ok(news.values().cloned().collect())
    }

    async fn create_news(&self, input: NewNews) -> Result<News, AppError> {
        let item = input.into_news(self.allocate_id());
        let mut news = self.news.write().await;
        news.insert(item.id, item.clone());
        Ok(item)
    }

    async fn create_lead(&self, input: NewLead) -> Result<Lead, AppError> {
        let lead = input.into_lead(self.allocate_id(), Utc::now());
        let mut leads = self.leads.write().await;
        leads.insert(lead.id, lead.clone());
        Ok(lead)
    }
}

#[cfg(test)]
impl MemoryStorage {
    /// Number of stored leads; leads are never exposed through the API, so
    /// tests count them here.
    pub async fn lead_count(&self) -> usize {
        self.leads.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;
    use pretty_assertions::assert_eq;

    fn sample_project(slug: &str) -> NewProject {
        serde_json::from_value(serde_json::json!({
            "title": "Sample Towers",
            "slug": slug,
            "status": "ongoing",
            "location": "Midtown",
            "address": "42 Sample Road",
            "landmark": "Central Park",
            "price": "Starts from ₹1.2 Cr",
            "pricePerSqft": "₹9,800/sqft",
            "type": "Residential",
            "description": "Sample description.",
            "coverImage": "https://example.com/cover.jpg",
            "reraId": "P51800000042",
            "reraQRCode": "https://example.com/qr.png"
        }))
        .unwrap()
    }

    fn sample_lead() -> NewLead {
        serde_json::from_value(serde_json::json!({
            "name": "A",
            "email": "a@example.com",
            "phone": "555"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_created_project_appears_in_list() {
        let store = MemoryStorage::new();
        assert!(store.list_projects().await.unwrap().is_empty());

        let created = store.create_project(sample_project("sample-towers")).await.unwrap();
        let listed = store.list_projects().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].status, ProjectStatus::Ongoing);
    }

    #[tokio::test]
    async fn test_slug_lookup_finds_created_project() {
        let store = MemoryStorage::new();
        store.create_project(sample_project("east-wing")).await.unwrap();

        let found = store.get_project_by_slug("east-wing").await.unwrap();
        assert_eq!(found.map(|p| p.slug), Some("east-wing".to_string()));

        let missing = store.get_project_by_slug("west-wing").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_omitted_list_fields_default_to_empty() {
        let store = MemoryStorage::new();
        store.create_project(sample_project("no-media")).await.unwrap();

        let fetched = store
            .get_project_by_slug("no-media")
            .await
            .unwrap()
            .unwrap();
        assert!(fetched.floor_plans.is_empty());
        assert!(fetched.certificates.is_empty());
        assert!(fetched.videos.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_entity_types() {
        let store = MemoryStorage::new();
        let project = store.create_project(sample_project("one")).await.unwrap();
        let lead = store.create_lead(sample_lead()).await.unwrap();

        assert_ne!(project.id, lead.id);
        assert_eq!(lead.id, project.id + 1);
    }

    #[tokio::test]
    async fn test_lead_gets_server_timestamp() {
        let store = MemoryStorage::new();
        let before = Utc::now();
        let lead = store.create_lead(sample_lead()).await.unwrap();

        assert!(lead.created_at >= before);
        assert_eq!(store.lead_count().await, 1);
    }

    #[tokio::test]
    async fn test_list_is_insertion_ordered_and_stable() {
        let store = MemoryStorage::new();
        store.create_project(sample_project("first")).await.unwrap();
        store.create_project(sample_project("second")).await.unwrap();
        store.create_project(sample_project("third")).await.unwrap();

        let first_read = store.list_projects().await.unwrap();
        let second_read = store.list_projects().await.unwrap();

        let slugs: Vec<_> = first_read.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
        assert_eq!(first_read, second_read);
    }
}
