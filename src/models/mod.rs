mod performance;
mod stage;
mod timetable;
mod venue;
mod view_mode;

pub use performance::{sort_chronologically, Performance};
pub use stage::{Stage, StageFilter};
pub use timetable::TimetableData;
pub use venue::{
    stage_css_class, venue_marker, VenueMarker, FIELD_OF_HEAVEN, GREEN_STAGE, OASIS, RED_MARQUEE,
    VENUE_MARKERS, WHITE_STAGE,
};
pub use view_mode::ViewMode;

#[cfg(test)]
pub(crate) use performance::test_support;
