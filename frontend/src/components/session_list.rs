//! Session list panel.
//!
//! Buckets arrive in server order and are painted in that order. Empty
//! buckets are skipped. The count badge is coloured by the activity type
//! currently selected, not by anything inside the bucket.

use maud::{html, Markup};
use shared::{ActivityType, SessionBucket};
use tracing::debug;

use super::styling::{badge_style, facility_icon_for_name, BadgeStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub count: usize,
    pub style: BadgeStyle,
}

/// One painted time slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    /// Facility glyph, absent for facilities we have no icon for
    pub icon: Option<&'static str>,
    pub time_range: String,
    pub badge: Badge,
    pub facility: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionListView {
    pub rows: Vec<SessionRow>,
}

impl SessionListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// List-group markup for the session container
    pub fn to_markup(&self) -> Markup {
        html! {
            div class="list-group mb-4" {
                @for row in &self.rows {
                    div class="list-group-item d-sm-flex p-3 border border-solid" {
                        div class="d-flex gap-5 w-100" {
                            @if let Some(icon) = row.icon {
                                i class=(format!("bx {} bx-lg d-flex m-auto py-2", icon)) {}
                            }
                            div class="d-inline w-100" {
                                div {
                                    h5 class="d-flex justify-content-between mb-3 text-secondary" {
                                        (row.time_range)
                                        span class=(format!(
                                            "badge {} {} rounded-pill",
                                            row.badge.style.background,
                                            row.badge.style.foreground
                                        )) {
                                            (row.badge.count)
                                        }
                                    }
                                }
                                div {
                                    h5 class="m-0" { (row.facility) }
                                    p class="m-0 text-secondary" { (row.activity) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Build the session list for `buckets` under the selected `activity_type`
pub fn render_session_list(buckets: &[SessionBucket], activity_type: ActivityType) -> SessionListView {
    let style = badge_style(activity_type);

    let rows = buckets
        .iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| {
            let icon = facility_icon_for_name(&bucket.facility);
            if icon.is_none() {
                debug!(facility = %bucket.facility, "no icon for facility, omitting glyph");
            }
            SessionRow {
                icon,
                time_range: format!("{} to {}", bucket.start_time, bucket.end_time),
                badge: Badge {
                    count: bucket.session_count(),
                    style,
                },
                facility: bucket.facility.clone(),
                activity: bucket.activity.clone(),
            }
        })
        .collect();

    SessionListView { rows }
}
