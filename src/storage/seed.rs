//! Startup seed routine
//!
//! Ensures baseline sample data exists so a fresh deployment renders a full
//! site. Runs once at boot, before the listener binds, so it never races
//! request handling. Each catalog is only filled when empty; restarting
//! against an already-seeded database inserts nothing.

use crate::error::AppError;
use crate::models::{
    Amenity, ConnectivityPoint, NewJob, NewNews, NewProject, NewTestimonial,
    ProjectConfiguration, ProjectStatus, ProjectType, TowerDetail,
};
use crate::storage::Storage;
use tracing::info;

/// Populate empty catalogs with the baseline sample records.
pub async fn ensure_seed_data(storage: &dyn Storage) -> Result<(), AppError> {
    if storage.list_projects().await?.is_empty() {
        for project in sample_projects() {
            storage.create_project(project).await?;
        }
        info!("Seeded project catalog");
    }

    if storage.list_testimonials().await?.is_empty() {
        for testimonial in sample_testimonials() {
            storage.create_testimonial(testimonial).await?;
        }
        info!("Seeded testimonials");
    }

    if storage.list_jobs().await?.is_empty() {
        for job in sample_jobs() {
            storage.create_job(job).await?;
        }
        info!("Seeded job listings");
    }

    if storage.list_news().await?.is_empty() {
        for item in sample_news() {
            storage.create_news(item).await?;
        }
        info!("Seeded news posts");
    }

    Ok(())
}

fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "The Grand Horizon".to_string(),
            slug: "grand-horizon".to_string(),
            status: ProjectStatus::Ongoing,
            location: "Downtown Skyline".to_string(),
            address: "1 Horizon Boulevard, Downtown Skyline".to_string(),
            landmark: "Opposite City Central Mall".to_string(),
            price: "Starts from ₹2.5 Cr".to_string(),
            price_per_sqft: "₹18,500/sqft".to_string(),
            project_type: ProjectType::Residential,
            description: "Experience the pinnacle of luxury living at The Grand Horizon. \
                          Offering panoramic views of the city skyline, these ultra-spacious \
                          3 & 4 BHK residences are designed for those who have arrived."
                .to_string(),
            amenities: vec![
                amenity("Infinity Pool", "https://images.unsplash.com/photo-1576013551627-0cc20b96c2a7?auto=format&fit=crop&q=80"),
                amenity("Sky Lounge", "https://images.unsplash.com/photo-1519974719765-e6559eac2575?auto=format&fit=crop&q=80"),
                amenity("Private Theatre", "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?auto=format&fit=crop&q=80"),
                amenity("Concierge Service", "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&q=80"),
                amenity("Spa & Wellness", "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?auto=format&fit=crop&q=80"),
            ],
            images: vec![
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&q=80".to_string(),
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=80".to_string(),
            ],
            cover_image: "https://images.unsplash.com/photo-1600596542815-2495db98dada?auto=format&fit=crop&q=80".to_string(),
            rera_id: "P51800001234".to_string(),
            rera_qr_code: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=P51800001234".to_string(),
            possession_date: Some("Dec 2026".to_string()),
            model_3d: None,
            brochure: None,
            floor_plans: vec![],
            certificates: vec!["ISO 9001:2015".to_string(), "IGBC Gold".to_string()],
            videos: vec![],
            connectivity: vec![
                connectivity("Airport", "18 km"),
                connectivity("Metro Station", "400 m"),
                connectivity("Business District", "2 km"),
            ],
            configurations: vec![
                configuration("3 BHK", "1850 sqft", "₹2.5 Cr onwards"),
                configuration("4 BHK", "2400 sqft", "₹3.4 Cr onwards"),
            ],
            tower_details: vec![
                tower("Tower A", 42, 164),
                tower("Tower B", 38, 148),
            ],
            walkthrough_video: None,
        },
        NewProject {
            title: "Emerald Gardens".to_string(),
            slug: "emerald-gardens".to_string(),
            status: ProjectStatus::Completed,
            location: "Green Valley".to_string(),
            address: "27 Garden Estate Road, Green Valley".to_string(),
            landmark: "Next to Green Valley Lake".to_string(),
            price: "Sold Out".to_string(),
            price_per_sqft: "₹11,200/sqft".to_string(),
            project_type: ProjectType::Residential,
            description: "A serene oasis in the middle of the bustling city. Emerald Gardens \
                          offers 2 BHK apartments surrounded by lush greenery and landscaped \
                          gardens."
                .to_string(),
            amenities: vec![
                amenity("Jogging Track", "https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?auto=format&fit=crop&q=80"),
                amenity("Children's Play Area", "https://images.unsplash.com/photo-1575783970733-1aaedde1db74?auto=format&fit=crop&q=80"),
                amenity("Clubhouse", "https://images.unsplash.com/photo-1571902943202-507ec2618e8f?auto=format&fit=crop&q=80"),
                amenity("Yoga Deck", "https://images.unsplash.com/photo-1545389336-cf090694435e?auto=format&fit=crop&q=80"),
            ],
            images: vec![
                "https://images.unsplash.com/photo-1580587771525-78b9dba3b91d?auto=format&fit=crop&q=80".to_string(),
                "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&q=80".to_string(),
            ],
            cover_image: "https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&q=80".to_string(),
            rera_id: "P51800005678".to_string(),
            rera_qr_code: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=P51800005678".to_string(),
            possession_date: Some("Ready to Move".to_string()),
            model_3d: None,
            brochure: None,
            floor_plans: vec![],
            certificates: vec!["IGBC Green Homes".to_string()],
            videos: vec![],
            connectivity: vec![
                connectivity("Airport", "32 km"),
                connectivity("Railway Station", "6 km"),
                connectivity("International School", "1.5 km"),
            ],
            configurations: vec![configuration("2 BHK", "1150 sqft", "Sold Out")],
            tower_details: vec![tower("Emerald Court", 14, 112)],
            walkthrough_video: None,
        },
        NewProject {
            title: "Tech Plaza".to_string(),
            slug: "tech-plaza".to_string(),
            status: ProjectStatus::Upcoming,
            location: "Business District".to_string(),
            address: "Plot 9, Innovation Avenue, Business District".to_string(),
            landmark: "Adjacent to Metro Line 3".to_string(),
            price: "Starts from ₹15,000/sqft".to_string(),
            price_per_sqft: "₹15,000/sqft".to_string(),
            project_type: ProjectType::Commercial,
            description: "Next-gen office spaces for the modern enterprise. Smart building \
                          features, high-speed elevators, and premium retail spaces."
                .to_string(),
            amenities: vec![
                amenity("24/7 Security", "https://images.unsplash.com/photo-1557597774-9d273605dfa9?auto=format&fit=crop&q=80"),
                amenity("High-speed Internet", "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?auto=format&fit=crop&q=80"),
                amenity("Conference Rooms", "https://images.unsplash.com/photo-1431540015161-0bf868a2d407?auto=format&fit=crop&q=80"),
                amenity("Food Court", "https://images.unsplash.com/photo-1567521464027-f127ff144326?auto=format&fit=crop&q=80"),
            ],
            images: vec![
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&q=80".to_string(),
            ],
            cover_image: "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80".to_string(),
            rera_id: "P51800009012".to_string(),
            rera_qr_code: "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=P51800009012".to_string(),
            possession_date: Some("Coming Soon".to_string()),
            model_3d: None,
            brochure: None,
            floor_plans: vec![],
            certificates: vec![],
            videos: vec![],
            connectivity: vec![
                connectivity("Airport", "12 km"),
                connectivity("Metro Station", "200 m"),
            ],
            configurations: vec![
                configuration("Office Suite", "800 sqft", "₹1.2 Cr onwards"),
                configuration("Retail Unit", "450 sqft", "₹95 L onwards"),
            ],
            tower_details: vec![tower("Plaza Tower", 28, 220)],
            walkthrough_video: None,
        },
    ]
}

fn sample_testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            name: "Rajesh Kumar".to_string(),
            role: "CEO, TechSolutions".to_string(),
            content: "Buying a home at Grand Horizon was the best decision. The amenities are \
                      world-class and the build quality is impeccable."
                .to_string(),
            rating: 5,
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80"
                    .to_string(),
            ),
            video_url: None,
        },
        NewTestimonial {
            name: "Priya Singh".to_string(),
            role: "Architect".to_string(),
            content: "As an architect myself, I appreciate the attention to detail in their \
                      designs. Truly luxurious."
                .to_string(),
            rating: 5,
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80"
                    .to_string(),
            ),
            video_url: None,
        },
    ]
}

fn sample_jobs() -> Vec<NewJob> {
    vec![
        NewJob {
            title: "Senior Sales Manager".to_string(),
            department: "Sales".to_string(),
            location: "Mumbai HQ".to_string(),
            employment_type: "Full-time".to_string(),
            description: "We are looking for an experienced sales manager to lead our luxury \
                          segment."
                .to_string(),
        },
        NewJob {
            title: "Site Engineer".to_string(),
            department: "Construction".to_string(),
            location: "Bangalore".to_string(),
            employment_type: "Full-time".to_string(),
            description: "Oversee construction activities and ensure quality compliance."
                .to_string(),
        },
    ]
}

fn sample_news() -> Vec<NewNews> {
    vec![
        NewNews {
            title: "Grand Horizon Launch Event".to_string(),
            date: "Oct 15, 2024".to_string(),
            content: "We successfully launched our flagship project with a gala dinner attended \
                      by industry leaders."
                .to_string(),
            category: "Events".to_string(),
            image: "https://images.unsplash.com/photo-1511578314322-379afb476865?auto=format&fit=crop&q=80"
                .to_string(),
        },
        NewNews {
            title: "Best Luxury Developer Award".to_string(),
            date: "Nov 20, 2024".to_string(),
            content: "We are honored to receive the Best Luxury Developer award at the National \
                      Real Estate Summit."
                .to_string(),
            category: "Awards".to_string(),
            image: "https://images.unsplash.com/photo-1531545514256-b1400bc00f31?auto=format&fit=crop&q=80"
                .to_string(),
        },
    ]
}

fn amenity(name: &str, image: &str) -> Amenity {
    Amenity {
        name: name.to_string(),
        image: image.to_string(),
    }
}

fn connectivity(kind: &str, distance: &str) -> ConnectivityPoint {
    ConnectivityPoint {
        kind: kind.to_string(),
        distance: distance.to_string(),
    }
}

fn configuration(typology: &str, area: &str, price: &str) -> ProjectConfiguration {
    ProjectConfiguration {
        typology: typology.to_string(),
        area: area.to_string(),
        price: price.to_string(),
    }
}

fn tower(name: &str, floors: i32, units: i32) -> TowerDetail {
    TowerDetail {
        name: name.to_string(),
        floors,
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_seed_fills_all_catalogs() {
        let store = MemoryStorage::new();
        ensure_seed_data(&store).await.unwrap();

        assert_eq!(store.list_projects().await.unwrap().len(), 3);
        assert_eq!(store.list_testimonials().await.unwrap().len(), 2);
        assert_eq!(store.list_jobs().await.unwrap().len(), 2);
        assert_eq!(store.list_news().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStorage::new();
        ensure_seed_data(&store).await.unwrap();
        ensure_seed_data(&store).await.unwrap();

        assert_eq!(store.list_projects().await.unwrap().len(), 3);
        assert_eq!(store.list_testimonials().await.unwrap().len(), 2);
        assert_eq!(store.list_jobs().await.unwrap().len(), 2);
        assert_eq!(store.list_news().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_slugs_resolve() {
        let store = MemoryStorage::new();
        ensure_seed_data(&store).await.unwrap();

        for slug in ["grand-horizon", "emerald-gardens", "tech-plaza"] {
            let project = store.get_project_by_slug(slug).await.unwrap();
            assert!(project.is_some(), "seeded project {} missing", slug);
        }
    }
}
