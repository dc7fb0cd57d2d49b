//! Shared setup for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p fyyur-server -- --ignored

#![allow(dead_code)]

use fyyur_server::db::create_pool;
use fyyur_server::models::{NewArtist, NewVenue};
use fyyur_server::Store;

pub async fn test_store() -> Store {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    let store = Store::new(pool);
    store.migrate().await.expect("migrations failed");
    store
}

/// Short random suffix so parallel tests never see each other's rows.
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}

pub fn venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string()],
        image_link: None,
        facebook_link: Some("https://fb.com/x".to_string()),
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        genres: vec!["Rock n Roll".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_venue: true,
        seeking_description: Some("Looking for shows".to_string()),
    }
}
