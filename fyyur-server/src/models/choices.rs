//! Allowed values for the select fields on the venue and artist forms

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// US state (and DC) postal codes accepted for `state`.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Genres offered on the venue and artist forms.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Swing",
    "Other",
];

/// http(s) scheme, a host, and no whitespace anywhere.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("invalid url regex"));

/// Check a state code against [`STATES`], normalising case.
pub fn state(value: &str) -> Result<String, ValidationError> {
    let code = value.trim().to_ascii_uppercase();
    if code.is_empty() {
        return Err(ValidationError::Empty { field: "state" });
    }
    if !STATES.contains(&code.as_str()) {
        return Err(ValidationError::InvalidChoice {
            field: "state",
            value: value.trim().to_owned(),
        });
    }
    Ok(code)
}

/// Check every submitted genre against [`GENRES`]. At least one is required
/// and duplicates are dropped, keeping the submitted order.
pub fn genres(values: &[String]) -> Result<Vec<String>, ValidationError> {
    let mut picked: Vec<String> = Vec::with_capacity(values.len());
    for raw in values {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        let Some(known) = GENRES.iter().find(|g| g.eq_ignore_ascii_case(value)) else {
            return Err(ValidationError::InvalidChoice {
                field: "genres",
                value: value.to_owned(),
            });
        };
        if !picked.iter().any(|p| p == known) {
            picked.push((*known).to_owned());
        }
    }
    if picked.is_empty() {
        return Err(ValidationError::Empty { field: "genres" });
    }
    Ok(picked)
}

/// Accept an optional link only if it looks like an http(s) URL.
pub fn link(field: &'static str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    match value {
        Some(url) if !URL_RE.is_match(&url) => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be an http:// or https:// URL",
        }),
        other => Ok(other),
    }
}

/// HTML checkboxes submit a value only when ticked.
pub fn checkbox(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("y" | "yes" | "on" | "true" | "1")
    )
}
