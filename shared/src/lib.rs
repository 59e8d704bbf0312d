use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Activity-type filter applied to a session query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// General use, lane swims and swimming lessons
    #[default]
    General,
    /// Aerobics, yoga and pilates classes
    Class,
    /// Team bookings
    Team,
    /// Every activity type
    All,
}

impl ActivityType {
    /// All filter types in the order the filter buttons are laid out
    pub const ALL: [ActivityType; 4] = [
        ActivityType::General,
        ActivityType::Class,
        ActivityType::Team,
        ActivityType::All,
    ];

    /// Lowercase name used in query keys and as the filter button id
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::General => "general",
            ActivityType::Class => "class",
            ActivityType::Team => "team",
            ActivityType::All => "all",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity type: {0:?}")]
pub struct UnknownActivityType(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|activity_type| activity_type.as_str() == s)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

/// Facilities the centre offers sessions in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facility {
    SwimmingPool,
    FitnessRoom,
    SquashCourts,
    SportsHall,
    ClimbingWall,
    Studio,
}

impl Facility {
    pub const ALL: [Facility; 6] = [
        Facility::SwimmingPool,
        Facility::FitnessRoom,
        Facility::SquashCourts,
        Facility::SportsHall,
        Facility::ClimbingWall,
        Facility::Studio,
    ];

    /// Display name, exactly as the session endpoint spells it
    pub fn name(&self) -> &'static str {
        match self {
            Facility::SwimmingPool => "Swimming Pool",
            Facility::FitnessRoom => "Fitness Room",
            Facility::SquashCourts => "Squash Courts",
            Facility::SportsHall => "Sports Hall",
            Facility::ClimbingWall => "Climbing Wall",
            Facility::Studio => "Studio",
        }
    }

    /// Look up a facility by its display name (exact match)
    pub fn from_name(name: &str) -> Option<Facility> {
        Facility::ALL.into_iter().find(|facility| facility.name() == name)
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One time-slot entry returned by the session listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBucket {
    /// Activity id on the server, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// ISO date the bucket belongs to, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub facility: String,
    pub activity: String,
    pub start_time: String,
    pub end_time: String,
    /// Bookable sessions in this slot. Only the count is consumed.
    pub sessions: Vec<serde_json::Value>,
}

impl SessionBucket {
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Composite key for a session query: `year-month-date-type`
///
/// `month` is 1-based as stored on the date cell, so padding cells borrowed
/// from adjacent months carry 0 or 13.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionQueryKey {
    pub year: i32,
    pub month: u32,
    pub date: u32,
    pub activity_type: ActivityType,
}

impl fmt::Display for SessionQueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.year, self.month, self.date, self.activity_type
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryKeyError {
    #[error("expected 4 '-' separated segments, found {0}")]
    SegmentCount(usize),
    #[error("invalid {field} segment: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    ActivityType(#[from] UnknownActivityType),
}

impl FromStr for SessionQueryKey {
    type Err = QueryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [year, month, date, activity_type]: [&str; 4] = parts
            .as_slice()
            .try_into()
            .map_err(|_| QueryKeyError::SegmentCount(parts.len()))?;

        Ok(SessionQueryKey {
            year: parse_segment("year", year)?,
            month: parse_segment("month", month)?,
            date: parse_segment("date", date)?,
            activity_type: activity_type.parse()?,
        })
    }
}

fn parse_segment<T: FromStr>(field: &'static str, value: &str) -> Result<T, QueryKeyError> {
    value.parse::<T>().map_err(|_| QueryKeyError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_round_trips_through_its_name() {
        for activity_type in ActivityType::ALL {
            assert_eq!(activity_type.as_str().parse::<ActivityType>(), Ok(activity_type));
        }

        assert_eq!(ActivityType::default(), ActivityType::General);
        assert_eq!(
            "swimming".parse::<ActivityType>(),
            Err(UnknownActivityType("swimming".to_string()))
        );
        // Names are case sensitive, like the button ids
        assert!("Team".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_activity_type_serializes_lowercase() {
        let json = serde_json::to_string(&ActivityType::Class).unwrap();
        assert_eq!(json, "\"class\"");

        let parsed: ActivityType = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, ActivityType::All);
    }

    #[test]
    fn test_facility_lookup_by_name() {
        assert_eq!(Facility::from_name("Swimming Pool"), Some(Facility::SwimmingPool));
        assert_eq!(Facility::from_name("Studio"), Some(Facility::Studio));
        assert_eq!(Facility::from_name("swimming pool"), None);
        assert_eq!(Facility::from_name("Sauna"), None);

        for facility in Facility::ALL {
            assert_eq!(Facility::from_name(facility.name()), Some(facility));
        }
    }

    #[test]
    fn test_query_key_format() {
        let key = SessionQueryKey {
            year: 2026,
            month: 10,
            date: 3,
            activity_type: ActivityType::Team,
        };
        assert_eq!(key.to_string(), "2026-10-3-team");

        let padding = SessionQueryKey {
            year: 2026,
            month: 13,
            date: 1,
            activity_type: ActivityType::General,
        };
        assert_eq!(padding.to_string(), "2026-13-1-general");
    }

    #[test]
    fn test_query_key_parse() {
        let key: SessionQueryKey = "2024-2-29-class".parse().unwrap();
        assert_eq!(key.year, 2024);
        assert_eq!(key.month, 2);
        assert_eq!(key.date, 29);
        assert_eq!(key.activity_type, ActivityType::Class);

        assert_eq!(
            "2024-2-29".parse::<SessionQueryKey>(),
            Err(QueryKeyError::SegmentCount(3))
        );
        assert_eq!(
            "2024-feb-29-class".parse::<SessionQueryKey>(),
            Err(QueryKeyError::InvalidNumber {
                field: "month",
                value: "feb".to_string()
            })
        );
        assert!(matches!(
            "2024-2-29-solo".parse::<SessionQueryKey>(),
            Err(QueryKeyError::ActivityType(_))
        ));
    }

    #[test]
    fn test_session_bucket_deserializes_endpoint_payload() {
        let payload = r#"[
            {
                "id": 4,
                "date": "2026-10-18",
                "activity": "Lane Swim",
                "facility": "Swimming Pool",
                "start_time": "08:00:00",
                "end_time": "10:00:00",
                "sessions": [
                    {"session_type": 1, "facility_id": 0, "start_time": "2026-10-18T08:00:00",
                     "end_time": "2026-10-18T09:00:00", "is_class": 0, "session_code": "1-0-x"},
                    {"session_type": 1, "facility_id": 0, "start_time": "2026-10-18T09:00:00",
                     "end_time": "2026-10-18T10:00:00", "is_class": 0, "session_code": "1-0-y"}
                ]
            },
            {
                "activity": "General Use",
                "facility": "Fitness Room",
                "start_time": "06:00",
                "end_time": "22:00",
                "sessions": []
            }
        ]"#;

        let buckets: Vec<SessionBucket> = serde_json::from_str(payload).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].id, Some(4));
        assert_eq!(buckets[0].session_count(), 2);
        assert_eq!(buckets[1].date, None);
        assert!(buckets[1].is_empty());
    }

    #[test]
    fn test_session_bucket_requires_sessions() {
        let payload = r#"{"activity": "Yoga Class", "facility": "Studio",
                          "start_time": "10:00", "end_time": "11:00"}"#;
        assert!(serde_json::from_str::<SessionBucket>(payload).is_err());
    }
}
