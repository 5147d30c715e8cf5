//! Testimonial, job, and news models
//!
//! Read-only catalog entries surfaced on the site's experience, careers, and
//! news pages. Created via the seed routine, never through the public API.

use serde::{Deserialize, Serialize};

/// Customer testimonial with an optional video review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub avatar: Option<String>,
    pub video_url: Option<String>,
}

/// Input for creating a testimonial
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl NewTestimonial {
    pub fn into_testimonial(self, id: i32) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            role: self.role,
            content: self.content,
            rating: self.rating,
            avatar: self.avatar,
            video_url: self.video_url,
        }
    }
}

/// Open position listed on the careers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
}

/// Input for creating a job listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
}

impl NewJob {
    pub fn into_job(self, id: i32) -> Job {
        Job {
            id,
            title: self.title,
            department: self.department,
            location: self.location,
            employment_type: self.employment_type,
            description: self.description,
        }
    }
}

/// News or event post; the date is display copy, not a parsed date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: i32,
    pub title: String,
    pub date: String,
    pub content: String,
    pub category: String,
    pub image: String,
}

/// Input for creating a news post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNews {
    pub title: String,
    pub date: String,
    pub content: String,
    pub category: String,
    pub image: String,
}

impl NewNews {
    pub fn into_news(self, id: i32) -> News {
        News {
            id,
            title: self.title,
            date: self.date,
            content: self.content,
            category: self.category,
            image: self.image,
        }
    }
}
