//! Derived views over venue, artist and show rows
//!
//! The repositories fetch flat, ordered rows; this module turns them into
//! the shapes the pages need:
//! - venues bucketed by (state, city), first-seen order preserved
//! - shows split into past / upcoming relative to the request time
//! - search terms turned into escaped `ILIKE` patterns
//! - timestamps formatted for display

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Detail pages show start times as `2019-05-21 21:30:00`.
pub const DETAIL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The show listing uses `2019-05-21T21:30:00Z`.
pub const LISTING_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Venue or artist as it appears in listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venue summary tagged with where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVenue {
    pub state: String,
    pub city: String,
    pub venue: Summary,
}

/// All venues sharing one (state, city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub state: String,
    pub city: String,
    pub venues: Vec<Summary>,
}

/// Group venues into (state, city) buckets.
///
/// Buckets appear in the order their first venue appears, and venues keep
/// their input order within a bucket. Every venue lands in exactly one
/// bucket.
pub fn group_by_locale(rows: impl IntoIterator<Item = LocatedVenue>) -> Vec<Locale> {
    let mut locales: Vec<Locale> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for row in rows {
        let key = (row.state, row.city);
        match index.get(&key) {
            Some(&slot) => locales[slot].venues.push(row.venue),
            None => {
                index.insert(key.clone(), locales.len());
                locales.push(Locale {
                    state: key.0,
                    city: key.1,
                    venues: vec![row.venue],
                });
            }
        }
    }

    locales
}

/// Search results: the matches and how many there are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

impl From<Vec<Summary>> for SearchResults {
    fn from(data: Vec<Summary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Build a case-insensitive "contains" pattern for `ILIKE`.
///
/// `%`, `_` and `\` in the term match literally. A blank term yields `%`,
/// which matches every name.
pub fn contains_pattern(term: &str) -> String {
    let term = term.trim();
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    if !term.is_empty() {
        pattern.push('%');
    }
    pattern
}

/// Shows split around a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// start_time < now
    pub past: Vec<T>,
    /// start_time >= now
    pub upcoming: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    /// Apply `f` to every entry, keeping the split.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Partition<U> {
        Partition {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

/// Split `items` into past and upcoming relative to `now`, keeping order.
pub fn partition_by_time<T>(
    items: impl IntoIterator<Item = T>,
    now: DateTime<Utc>,
    start_time: impl Fn(&T) -> DateTime<Utc>,
) -> Partition<T> {
    let (upcoming, past): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| start_time(item) >= now);
    Partition { past, upcoming }
}

/// Display styles for show times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    Medium,
}

/// Format a timestamp in one of the display styles.
pub fn format_datetime(value: DateTime<Utc>, style: DateStyle) -> String {
    let layout = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(layout).to_string()
}
