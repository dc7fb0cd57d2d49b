//! Show form parsing and validation

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use super::ValidationError;

/// Layout used to pre-fill and echo `start_time`.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive layouts accepted besides RFC 3339; interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    START_TIME_FORMAT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Raw show form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    /// Empty form with `start_time` pre-filled with `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format(START_TIME_FORMAT).to_string(),
            ..Default::default()
        }
    }
}

/// A booking that passed validation. Existence of the referenced artist and
/// venue is checked by the repository inside the insert transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl TryFrom<&ShowForm> for NewShow {
    type Error = ValidationError;

    fn try_from(form: &ShowForm) -> Result<Self, Self::Error> {
        Ok(Self {
            artist_id: parse_id("artist_id", &form.artist_id)?,
            venue_id: parse_id("venue_id", &form.venue_id)?,
            start_time: parse_start_time(&form.start_time)?,
        })
    }
}

fn parse_id(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a positive integer id",
        }),
    }
}

/// Parse a submitted start time.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "start_time" });
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "expected YYYY-MM-DD HH:MM:SS",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_all_layouts() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        for raw in [
            "2035-04-01 20:00:00",
            "2035-04-01 20:00",
            "2035-04-01T20:00:00",
            "2035-04-01T20:00",
            "2035-04-01T20:00:00Z",
            "2035-04-01T22:00:00+02:00",
        ] {
            assert_eq!(parse_start_time(raw).unwrap(), expected, "layout {raw}");
        }
    }

    #[test]
    fn rejects_garbage_time() {
        assert!(matches!(
            parse_start_time("next tuesday"),
            Err(ValidationError::InvalidFormat { field: "start_time", .. })
        ));
        assert!(matches!(
            parse_start_time(""),
            Err(ValidationError::Empty { field: "start_time" })
        ));
    }

    #[test]
    fn ids_must_be_positive_integers() {
        let form = ShowForm {
            artist_id: "4".into(),
            venue_id: "abc".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        assert!(matches!(
            NewShow::try_from(&form),
            Err(ValidationError::InvalidFormat { field: "venue_id", .. })
        ));

        let form = ShowForm {
            venue_id: "0".into(),
            ..form
        };
        assert!(NewShow::try_from(&form).is_err());
    }

    #[test]
    fn valid_form() {
        let form = ShowForm {
            artist_id: " 4 ".into(),
            venue_id: "1".into(),
            start_time: "2019-05-21T21:30:00.000Z".into(),
        };
        let show = NewShow::try_from(&form).unwrap();
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(
            show.start_time,
            Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap()
        );
    }

    #[test]
    fn starting_at_prefills_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        let form = ShowForm::starting_at(now);
        assert_eq!(form.start_time, "2026-10-19 09:05:00");
        assert!(form.artist_id.is_empty());
    }
}
