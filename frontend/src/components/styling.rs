//! Static lookup tables used when painting the dashboard.

use shared::{ActivityType, Facility};

/// Background and foreground classes of a count badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Badge colours keyed by the selected activity type
pub fn badge_style(activity_type: ActivityType) -> BadgeStyle {
    let (background, foreground) = match activity_type {
        ActivityType::General => ("bg-success", "text-white"),
        ActivityType::Class => ("bg-warning", "text-body-secondary"),
        ActivityType::Team => ("bg-danger", "text-white"),
        ActivityType::All => ("bg-primary", "text-white"),
    };
    BadgeStyle { background, foreground }
}

/// Boxicons glyph for a facility
pub fn facility_icon(facility: Facility) -> &'static str {
    match facility {
        Facility::SwimmingPool => "bx-swim",
        Facility::FitnessRoom => "bx-dumbbell",
        Facility::SquashCourts => "bx-baseball",
        Facility::SportsHall => "bxs-institution",
        Facility::ClimbingWall => "bx-body",
        Facility::Studio => "bx-street-view",
    }
}

/// Glyph for a facility name as sent by the server; `None` when the name is not a known facility
pub fn facility_icon_for_name(name: &str) -> Option<&'static str> {
    Facility::from_name(name).map(facility_icon)
}
