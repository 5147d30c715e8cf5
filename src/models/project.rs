//! Project catalog models
//!
//! A project is one real-estate development (building or complex) with the
//! marketing and regulatory metadata the site displays: pricing, RERA
//! registration, media galleries, connectivity, and tower data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Construction status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    Upcoming,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Upcoming => "upcoming",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(ProjectStatus::Ongoing),
            "completed" => Ok(ProjectStatus::Completed),
            "upcoming" => Ok(ProjectStatus::Upcoming),
            other => Err(format!("unknown project status: {}", other)),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usage category of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Residential,
    Commercial,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Residential" => Ok(ProjectType::Residential),
            "Commercial" => Ok(ProjectType::Commercial),
            other => Err(format!("unknown project type: {}", other)),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amenity entry shown in the amenities grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub name: String,
    pub image: String,
}

/// Nearby landmark with travel distance (e.g. "Airport" / "12 km")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
}

/// Unit configuration offered in a project (e.g. "3 BHK" / "1850 sqft")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    pub typology: String,
    pub area: String,
    pub price: String,
}

/// Per-tower breakdown of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerDetail {
    pub name: String,
    pub floors: i32,
    pub units: i32,
}

/// A real-estate development record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub status: ProjectStatus,
    pub location: String,
    pub address: String,
    pub landmark: String,
    pub price: String,
    pub price_per_sqft: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub description: String,
    pub amenities: Vec<Amenity>,
    pub images: Vec<String>,
    pub cover_image: String,
    pub rera_id: String,
    #[serde(rename = "reraQRCode")]
    pub rera_qr_code: String,
    pub possession_date: Option<String>,
    #[serde(rename = "model3D")]
    pub model_3d: Option<String>,
    pub brochure: Option<String>,
    pub floor_plans: Vec<String>,
    pub certificates: Vec<String>,
    pub videos: Vec<String>,
    pub connectivity: Vec<ConnectivityPoint>,
    pub configurations: Vec<ProjectConfiguration>,
    pub tower_details: Vec<TowerDetail>,
    pub walkthrough_video: Option<String>,
}

/// Input for creating a project; the id is assigned by storage and every
/// omitted list field defaults to an empty list, never null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub status: ProjectStatus,
    pub location: String,
    pub address: String,
    pub landmark: String,
    pub price: String,
    pub price_per_sqft: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub images: Vec<String>,
    pub cover_image: String,
    pub rera_id: String,
    #[serde(rename = "reraQRCode")]
    pub rera_qr_code: String,
    #[serde(default)]
    pub possession_date: Option<String>,
    #[serde(default, rename = "model3D")]
    pub model_3d: Option<String>,
    #[serde(default)]
    pub brochure: Option<String>,
    #[serde(default)]
    pub floor_plans: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub connectivity: Vec<ConnectivityPoint>,
    #[serde(default)]
    pub configurations: Vec<ProjectConfiguration>,
    #[serde(default)]
    pub tower_details: Vec<TowerDetail>,
    #[serde(default)]
    pub walkthrough_video: Option<String>,
}

impl NewProject {
    /// Materialize the stored record once storage has assigned an id.
    pub fn into_project(self, id: i32) -> Project {
        Project {
            id,
            title: self.title,
            slug: self.slug,
            status: self.status,
            location: self.location,
            address: self.address,
            landmark: self.landmark,
            price: self.price,
            price_per_sqft: self.price_per_sqft,
            project_type: self.project_type,
            description: self.description,
            amenities: self.amenities,
            images: self.images,
            cover_image: self.cover_image,
            rera_id: self.rera_id,
            rera_qr_code: self.rera_qr_code,
            possession_date: self.possession_date,
            model_3d: self.model_3d,
            brochure: self.brochure,
            floor_plans: self.floor_plans,
            certificates: self.certificates,
            videos: self.videos,
            connectivity: self.connectivity,
            configurations: self.configurations,
            tower_details: self.tower_details,
            walkthrough_video: self.walkthrough_video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ProjectStatus::Ongoing,
            ProjectStatus::Completed,
            ProjectStatus::Upcoming,
        ] {
            assert_eq!(status.as_str().parse::<ProjectStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
    }

    #[test]
    fn test_type_serializes_capitalized() {
        let json = serde_json::to_string(&ProjectType::Residential).unwrap();
        assert_eq!(json, "\"Residential\"");
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("underway".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_new_project_defaults_lists_to_empty() {
        let input: NewProject = serde_json::from_value(serde_json::json!({
            "title": "Skyline One",
            "slug": "skyline-one",
            "status": "upcoming",
            "location": "Harbor Front",
            "address": "1 Skyline Ave",
            "landmark": "Harbor Bridge",
            "price": "On request",
            "pricePerSqft": "On request",
            "type": "Commercial",
            "description": "Premium offices.",
            "coverImage": "https://example.com/cover.jpg",
            "reraId": "P51800000001",
            "reraQRCode": "https://example.com/qr.png"
        }))
        .unwrap();

        let project = input.into_project(7);
        assert_eq!(project.id, 7);
        assert!(project.amenities.is_empty());
        assert!(project.floor_plans.is_empty());
        assert!(project.certificates.is_empty());
        assert!(project.videos.is_empty());
        assert!(project.connectivity.is_empty());
        assert!(project.tower_details.is_empty());
        assert_eq!(project.possession_date, None);
        assert_eq!(project.walkthrough_video, None);
    }

    #[test]
    fn test_connectivity_wire_field_names() {
        let point = ConnectivityPoint {
            kind: "Airport".to_string(),
            distance: "12 km".to_string(),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], "Airport");
        assert_eq!(json["distance"], "12 km");
    }
}
