//! Repository behavior against a real PostgreSQL database

mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{artist, test_store, unique, venue};
use fyyur_server::models::NewShow;
use fyyur_server::DbError;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2090, 1, 1, 20, 0, 0).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn new_venue_has_no_shows() {
    let store = test_store().await;
    let created = store
        .venues()
        .create(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();

    let detail = store.venues().detail(created.id, Utc::now()).await.unwrap();
    assert_eq!(detail.venue.name, "The Musical Hop");
    assert_eq!(detail.shows.past_count(), 0);
    assert_eq!(detail.shows.upcoming_count(), 0);

    store.venues().delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn venues_bucket_by_state_and_city() {
    let store = test_store().await;
    let tag = unique("city");
    let boston = format!("Boston {tag}");
    let austin = format!("Austin {tag}");

    let a = store.venues().create(venue("Paradise Rock Club", &boston, "MA")).await.unwrap();
    let b = store.venues().create(venue("Middle East", &boston, "MA")).await.unwrap();
    let c = store.venues().create(venue("Mohawk", &austin, "TX")).await.unwrap();

    let locales = store.venues().list_by_locale(Utc::now()).await.unwrap();
    let ours: Vec<_> = locales.iter().filter(|l| l.city.ends_with(&tag)).collect();
    assert_eq!(ours.len(), 2);

    let boston_bucket = ours.iter().find(|l| l.city == boston).unwrap();
    assert_eq!(boston_bucket.state, "MA");
    let ids: Vec<i32> = boston_bucket.venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    let austin_bucket = ours.iter().find(|l| l.city == austin).unwrap();
    assert_eq!(austin_bucket.venues.len(), 1);
    assert_eq!(austin_bucket.venues[0].id, c.id);

    // Every venue lands in exactly one bucket
    for id in [a.id, b.id, c.id] {
        let hits = locales
            .iter()
            .flat_map(|l| &l.venues)
            .filter(|v| v.id == id)
            .count();
        assert_eq!(hits, 1);
    }

    for id in [a.id, b.id, c.id] {
        store.venues().delete(id).await.unwrap();
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn search_is_case_insensitive_substring() {
    let store = test_store().await;
    let name = format!("The Musical Hop {}", unique("v"));
    let created = store.venues().create(venue(&name, "San Francisco", "CA")).await.unwrap();

    let results = store.venues().search("hop", Utc::now()).await.unwrap();
    assert_eq!(results.count, results.data.len());
    assert!(results.data.iter().any(|v| v.id == created.id));

    let exact = store.venues().search(&name, Utc::now()).await.unwrap();
    assert_eq!(exact.count, 1);
    assert_eq!(exact.data[0].id, created.id);

    let none = store.venues().search(&unique("absent"), Utc::now()).await.unwrap();
    assert_eq!(none.count, 0);

    store.venues().delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn search_treats_wildcards_literally() {
    let store = test_store().await;
    let name = format!("100% Live {}", unique("v"));
    let created = store.venues().create(venue(&name, "Austin", "TX")).await.unwrap();

    let results = store.venues().search("100%", Utc::now()).await.unwrap();
    assert!(results.data.iter().any(|v| v.id == created.id));
    assert!(results.data.iter().all(|v| v.name.contains("100%")));

    store.venues().delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn upcoming_counts_and_detail_partition() {
    let store = test_store().await;
    let now = fixed_now();
    let hop = store
        .venues()
        .create(venue(&unique("Hop"), "San Francisco", "CA"))
        .await
        .unwrap();
    let guns = store.artists().create(artist(&unique("Guns N Petals"))).await.unwrap();

    for start_time in [now - Duration::days(30), now, now + Duration::hours(2), now + Duration::days(7)] {
        store
            .shows()
            .create(NewShow {
                artist_id: guns.id,
                venue_id: hop.id,
                start_time,
            })
            .await
            .unwrap();
    }

    // Listings count strictly later shows only
    let results = store.venues().search(&hop.name, now).await.unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 2);
    let results = store.artists().search(&guns.name, now).await.unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 2);

    // Detail pages treat a show starting right now as upcoming
    let detail = store.venues().detail(hop.id, now).await.unwrap();
    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.upcoming_count(), 3);
    assert_eq!(detail.shows.upcoming[0].counterpart_id, guns.id);
    assert_eq!(detail.shows.upcoming[0].start_time, now);

    let detail = store.artists().detail(guns.id, now).await.unwrap();
    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.past[0].counterpart_name, hop.name);

    store.venues().delete(hop.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn show_with_missing_references_is_not_created() {
    let store = test_store().await;
    let hop = store.venues().create(venue(&unique("Hop"), "Boston", "MA")).await.unwrap();
    let guns = store.artists().create(artist(&unique("Guns"))).await.unwrap();

    let missing_artist = store
        .shows()
        .create(NewShow {
            artist_id: i32::MAX,
            venue_id: hop.id,
            start_time: fixed_now(),
        })
        .await;
    assert!(matches!(missing_artist, Err(DbError::NotFound { resource: "artist", .. })));

    let missing_venue = store
        .shows()
        .create(NewShow {
            artist_id: guns.id,
            venue_id: i32::MAX,
            start_time: fixed_now(),
        })
        .await;
    assert!(matches!(missing_venue, Err(DbError::NotFound { resource: "venue", .. })));

    let detail = store.artists().detail(guns.id, fixed_now()).await.unwrap();
    assert_eq!(detail.shows.past_count() + detail.shows.upcoming_count(), 0);

    store.venues().delete(hop.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn double_booking_is_rejected() {
    let store = test_store().await;
    let hop = store.venues().create(venue(&unique("Hop"), "Boston", "MA")).await.unwrap();
    let guns = store.artists().create(artist(&unique("Guns"))).await.unwrap();
    let show = NewShow {
        artist_id: guns.id,
        venue_id: hop.id,
        start_time: fixed_now(),
    };

    store.shows().create(show).await.unwrap();
    let again = store.shows().create(show).await;
    assert!(matches!(again, Err(DbError::Duplicate { resource: "show", .. })));

    store.venues().delete(hop.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_venue_removes_its_shows() {
    let store = test_store().await;
    let hop = store.venues().create(venue(&unique("Hop"), "Boston", "MA")).await.unwrap();
    let guns = store.artists().create(artist(&unique("Guns"))).await.unwrap();
    store
        .shows()
        .create(NewShow {
            artist_id: guns.id,
            venue_id: hop.id,
            start_time: fixed_now(),
        })
        .await
        .unwrap();

    let deleted = store.venues().delete(hop.id).await.unwrap();
    assert_eq!(deleted.id, hop.id);

    assert!(matches!(store.venues().get(hop.id).await, Err(DbError::NotFound { .. })));
    let listing = store.shows().list().await.unwrap();
    assert!(listing.iter().all(|s| s.venue_id != hop.id));
    let detail = store.artists().detail(guns.id, fixed_now()).await.unwrap();
    assert_eq!(detail.shows.upcoming_count(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_missing_venue_is_not_found() {
    let store = test_store().await;
    let result = store.venues().delete(i32::MAX).await;
    assert!(matches!(result, Err(DbError::NotFound { resource: "venue", .. })));
}

#[tokio::test]
#[ignore = "requires database"]
async fn show_listing_is_ordered_by_venue_then_start() {
    let store = test_store().await;
    let first = store.venues().create(venue(&unique("First"), "Boston", "MA")).await.unwrap();
    let second = store.venues().create(venue(&unique("Second"), "Boston", "MA")).await.unwrap();
    let guns = store.artists().create(artist(&unique("Guns"))).await.unwrap();
    let now = fixed_now();

    for (venue_id, offset) in [(second.id, 1), (first.id, 3), (first.id, 2)] {
        store
            .shows()
            .create(NewShow {
                artist_id: guns.id,
                venue_id,
                start_time: now + Duration::hours(offset),
            })
            .await
            .unwrap();
    }

    let ours: Vec<_> = store
        .shows()
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.artist_id == guns.id)
        .map(|s| (s.venue_id, s.start_time))
        .collect();
    assert_eq!(
        ours,
        vec![
            (first.id, now + Duration::hours(2)),
            (first.id, now + Duration::hours(3)),
            (second.id, now + Duration::hours(1)),
        ]
    );

    store.venues().delete(first.id).await.unwrap();
    store.venues().delete(second.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn artists_list_in_id_order() {
    let store = test_store().await;
    let a = store.artists().create(artist(&unique("A"))).await.unwrap();
    let b = store.artists().create(artist(&unique("B"))).await.unwrap();

    let ids: Vec<i32> = store.artists().list().await.unwrap().iter().map(|a| a.id).collect();
    let pos_a = ids.iter().position(|id| *id == a.id).unwrap();
    let pos_b = ids.iter().position(|id| *id == b.id).unwrap();
    assert!(pos_a < pos_b);
}
