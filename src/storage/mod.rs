//! Record storage
//!
//! The `Storage` trait is the single source of truth for all catalog and lead
//! records. Backends differ only in backing medium: an in-memory map store
//! for credential-less demo runs, and a PostgreSQL store for deployments.
//! Nothing is ever updated or deleted through this contract; every entity is
//! created once and read back whole.

mod memory;
mod postgres;
pub mod seed;

pub use memory::MemoryStorage;
pub use postgres::PostgresStorage;

use crate::error::AppError;
use crate::models::{
    Job, Lead, NewJob, NewLead, NewNews, NewProject, NewTestimonial, News, Project, Testimonial,
};
use async_trait::async_trait;

/// Storage contract shared by both backends.
///
/// Create operations assign identifiers (and for leads, the `created_at`
/// timestamp) and return the full stored record. The slug lookup is the only
/// operation with a structured absence outcome; everything else either
/// succeeds or propagates a backend fault.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, input: NewProject) -> Result<Project, AppError>;

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError>;
    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, AppError>;

    async fn list_jobs(&self) -> Result<Vec<Job>, AppError>;
    async fn create_job(&self, input: NewJob) -> Result<Job, AppError>;

    async fn list_news(&self) -> Result<Vec<News>, AppError>;
    async fn create_news(&self, input: NewNews) -> Result<News, AppError>;

    async fn create_lead(&self, input: NewLead) -> Result<Lead, AppError>;
}
