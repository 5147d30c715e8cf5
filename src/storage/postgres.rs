//! PostgreSQL storage backend
//!
//! Thin SQL mirror of the storage contract: one table per entity, `SERIAL`
//! ids, `JSONB` columns for the list-typed project fields, and `created_at`
//! defaulting at the database. Hosted providers that demand TLS (Neon, most
//! managed Postgres) are handled with a rustls connector.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::{
    Job, Lead, NewJob, NewLead, NewNews, NewProject, NewTestimonial, News, Project, Testimonial,
};
use crate::storage::Storage;
use async_trait::async_trait;
use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod, Runtime};
use serde::de::DeserializeOwned;
use tokio_postgres::Row;
use tracing::info;

/// PostgreSQL-backed record store
pub struct PostgresStorage {
    pool: Pool,
}

impl PostgresStorage {
    /// Build the connection pool and verify the database is reachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut cfg = Config::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.user = Some(config.user.clone());
        cfg.password = Some(config.password.clone());
        cfg.dbname = Some(config.database.clone());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let pool = if config.use_tls {
            let certs = rustls_native_certs::load_native_certs();
            let mut root_store = rustls::RootCertStore::empty();
            for cert in certs.certs {
                root_store.add(cert).ok();
            }

            let tls_config = rustls::ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth();

            let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);

            cfg.create_pool(Some(Runtime::Tokio1), tls)
                .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))?
        } else {
            cfg.create_pool(Some(Runtime::Tokio1), tokio_postgres::NoTls)
                .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))?
        };

        // Verify the connection before the server starts serving
        let client = pool.get().await?;
        client.query_one("SELECT 1 as ok", &[]).await?;

        info!("Database connection successful (TLS: {})", config.use_tls);
        Ok(Self { pool })
    }

    /// Create the entity tables if they don't exist.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id SERIAL PRIMARY KEY,
                    title TEXT NOT NULL,
                    slug TEXT NOT NULL UNIQUE,
                    status TEXT NOT NULL,
                    location TEXT NOT NULL,
                    address TEXT NOT NULL,
                    landmark TEXT NOT NULL,
                    price TEXT NOT NULL,
                    price_per_sqft TEXT NOT NULL,
                    project_type TEXT NOT NULL,
                    description TEXT NOT NULL,
                    amenities JSONB NOT NULL DEFAULT '[]',
                    images JSONB NOT NULL DEFAULT '[]',
                    cover_image TEXT NOT NULL,
                    rera_id TEXT NOT NULL,
                    rera_qr_code TEXT NOT NULL,
                    possession_date TEXT,
                    model_3d TEXT,
                    brochure TEXT,
                    floor_plans JSONB NOT NULL DEFAULT '[]',
                    certificates JSONB NOT NULL DEFAULT '[]',
                    videos JSONB NOT NULL DEFAULT '[]',
                    connectivity JSONB NOT NULL DEFAULT '[]',
                    configurations JSONB NOT NULL DEFAULT '[]',
                    tower_details JSONB NOT NULL DEFAULT '[]',
                    walkthrough_video TEXT
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS testimonials (
                    id SERIAL PRIMARY KEY,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    content TEXT NOT NULL,
                    rating INTEGER NOT NULL,
                    avatar TEXT,
                    video_url TEXT
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS jobs (
                    id SERIAL PRIMARY KEY,
                    title TEXT NOT NULL,
                    department TEXT NOT NULL,
                    location TEXT NOT NULL,
                    employment_type TEXT NOT NULL,
                    description TEXT NOT NULL
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS news (
                    id SERIAL PRIMARY KEY,
                    title TEXT NOT NULL,
                    date TEXT NOT NULL,
                    content TEXT NOT NULL,
                    category TEXT NOT NULL,
                    image TEXT NOT NULL
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS leads (
                    id SERIAL PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT NOT NULL,
                    message TEXT,
                    project_id INTEGER,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
                )",
                &[],
            )
            .await?;

        info!("Database tables initialized");
        Ok(())
    }
}

const PROJECT_COLUMNS: &str = "id, title, slug, status, location, address, landmark, price, \
     price_per_sqft, project_type, description, amenities, images, cover_image, rera_id, \
     rera_qr_code, possession_date, model_3d, brochure, floor_plans, certificates, videos, \
     connectivity, configurations, tower_details, walkthrough_video";

#[async_trait]
impl Storage for PostgresStorage {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let client = self.pool.get().await?;
        let query = format!("SELECT {} FROM projects ORDER BY id", PROJECT_COLUMNS);
        let rows = client.query(query.as_str(), &[]).await?;

        rows.iter().map(project_from_row).collect()
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let client = self.pool.get().await?;
        let query = format!("SELECT {} FROM projects WHERE slug = $1", PROJECT_COLUMNS);
        let row = client.query_opt(query.as_str(), &[&slug]).await?;

        row.as_ref().map(project_from_row).transpose()
    }

    async fn create_project(&self, input: NewProject) -> Result<Project, AppError> {
        let client = self.pool.get().await?;

        let amenities = to_json("amenities", &input.amenities)?;
        let images = to_json("images", &input.images)?;
        let floor_plans = to_json("floor_plans", &input.floor_plans)?;
        let certificates = to_json("certificates", &input.certificates)?;
        let videos = to_json("videos", &input.videos)?;
        let connectivity = to_json("connectivity", &input.connectivity)?;
        let configurations = to_json("configurations", &input.configurations)?;
        let tower_details = to_json("tower_details", &input.tower_details)?;

        let query = format!(
            "INSERT INTO projects (title, slug, status, location, address, landmark, \
             price, price_per_sqft, project_type, description, amenities, images, \
             cover_image, rera_id, rera_qr_code, possession_date, model_3d, brochure, \
             floor_plans, certificates, videos, connectivity, configurations, \
             tower_details, walkthrough_video)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
             $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
             RETURNING {}",
            PROJECT_COLUMNS
        );
        let row = client
            .query_one(
                query.as_str(),
                &[
                    &input.title,
                    &input.slug,
                    &input.status.as_str(),
                    &input.location,
                    &input.address,
                    &input.landmark,
                    &input.price,
                    &input.price_per_sqft,
                    &input.project_type.as_str(),
                    &input.description,
                    &amenities,
                    &images,
                    &input.cover_image,
                    &input.rera_id,
                    &input.rera_qr_code,
                    &input.possession_date,
                    &input.model_3d,
                    &input.brochure,
                    &floor_plans,
                    &certificates,
                    &videos,
                    &connectivity,
                    &configurations,
                    &tower_details,
                    &input.walkthrough_video,
                ],
            )
            .await?;

        project_from_row(&row)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, name, role, content, rating, avatar, video_url
                 FROM testimonials ORDER BY id",
                &[],
            )
            .await?;

        Ok(rows.iter().map(testimonial_from_row).collect())
    }

    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO testimonials (name, role, content, rating, avatar, video_url)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING id, name, role, content, rating, avatar, video_url",
                &[
                    &input.name,
                    &input.role,
                    &input.content,
                    &input.rating,
                    &input.avatar,
                    &input.video_url,
                ],
            )
            .await?;

        Ok(testimonial_from_row(&row))
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, title, department, location, employment_type, description
                 FROM jobs ORDER BY id",
                &[],
            )
            .await?;

        Ok(rows.iter().map(job_from_row).collect())
    }

    async fn create_job(&self, input: NewJob) -> Result<Job, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO jobs (title, department, location, employment_type, description)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, title, department, location, employment_type, description",
                &[
                    &input.title,
                    &input.department,
                    &input.location,
                    &input.employment_type,
                    &input.description,
                ],
            )
            .await?;

        Ok(job_from_row(&row))
    }

    async fn list_news(&self) -> Result<Vec<News>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, title, date, content, category, image FROM news ORDER BY id",
                &[],
            )
            .await?;

        Ok(rows.iter().map(news_from_row).collect())
    }

    async fn create_news(&self, input: NewNews) -> Result<News, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO news (title, date, content, category, image)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, title, date, content, category, image",
                &[
                    &input.title,
                    &input.date,
                    &input.content,
                    &input.category,
                    &input.image,
                ],
            )
            .await?;

        Ok(news_from_row(&row))
    }

    async fn create_lead(&self, input: NewLead) -> Result<Lead, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO leads (name, email, phone, message, project_id)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, name, email, phone, message, project_id, created_at",
                &[
                    &input.name,
                    &input.email,
                    &input.phone,
                    &input.message,
                    &input.project_id,
                ],
            )
            .await?;

        Ok(Lead {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            phone: row.get("phone"),
            message: row.get("message"),
            project_id: row.get("project_id"),
            created_at: row.get("created_at"),
        })
    }
}

fn project_from_row(row: &Row) -> Result<Project, AppError> {
    let status: String = row.get("status");
    let project_type: String = row.get("project_type");

    Ok(Project {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        status: status.parse().map_err(AppError::Internal)?,
        location: row.get("location"),
        address: row.get("address"),
        landmark: row.get("landmark"),
        price: row.get("price"),
        price_per_sqft: row.get("price_per_sqft"),
        project_type: project_type.parse().map_err(AppError::Internal)?,
        description: row.get("description"),
        amenities: json_column(row, "amenities")?,
        images: json_column(row, "images")?,
        cover_image: row.get("cover_image"),
        rera_id: row.get("rera_id"),
        rera_qr_code: row.get("rera_qr_code"),
        possession_date: row.get("possession_date"),
        model_3d: row.get("model_3d"),
        brochure: row.get("brochure"),
        floor_plans: json_column(row, "floor_plans")?,
        certificates: json_column(row, "certificates")?,
        videos: json_column(row, "videos")?,
        connectivity: json_column(row, "connectivity")?,
        configurations: json_column(row, "configurations")?,
        tower_details: json_column(row, "tower_details")?,
        walkthrough_video: row.get("walkthrough_video"),
    })
}

fn testimonial_from_row(row: &Row) -> Testimonial {
    Testimonial {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        content: row.get("content"),
        rating: row.get("rating"),
        avatar: row.get("avatar"),
        video_url: row.get("video_url"),
    }
}

fn job_from_row(row: &Row) -> Job {
    Job {
        id: row.get("id"),
        title: row.get("title"),
        department: row.get("department"),
        location: row.get("location"),
        employment_type: row.get("employment_type"),
        description: row.get("description"),
    }
}

fn news_from_row(row: &Row) -> News {
    News {
        id: row.get("id"),
        title: row.get("title"),
        date: row.get("date"),
        content: row.get("content"),
        category: row.get("category"),
        image: row.get("image"),
    }
}

fn to_json<T: serde::Serialize>(column: &str, value: &T) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::Internal(format!("Failed to encode {} column: {}", column, e)))
}

fn json_column<T: DeserializeOwned>(row: &Row, column: &str) -> Result<T, AppError> {
    let value: serde_json::Value = row.get(column);
    serde_json::from_value(value)
        .map_err(|e| AppError::Internal(format!("Invalid {} column: {}", column, e)))
}
