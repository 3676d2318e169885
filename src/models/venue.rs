/// Map reference point for a stage or landmark on the festival site
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueMarker {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    /// Landmarks are drawn but never receive performance markers
    pub is_landmark: bool,
}

impl VenueMarker {
    /// First word of the name, used as the marker caption
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

pub const GREEN_STAGE: &str = "GREEN STAGE";
pub const WHITE_STAGE: &str = "WHITE STAGE";
pub const RED_MARQUEE: &str = "RED MARQUEE";
pub const FIELD_OF_HEAVEN: &str = "FIELD OF HEAVEN";
pub const OASIS: &str = "OASIS";

pub const VENUE_MARKERS: [VenueMarker; 5] = [
    VenueMarker { name: GREEN_STAGE, lat: 36.8475, lng: 138.7025, color: "#10b981", is_landmark: false },
    VenueMarker { name: WHITE_STAGE, lat: 36.8485, lng: 138.7035, color: "#ffffff", is_landmark: false },
    VenueMarker { name: RED_MARQUEE, lat: 36.8470, lng: 138.7015, color: "#ef4444", is_landmark: false },
    VenueMarker { name: FIELD_OF_HEAVEN, lat: 36.8490, lng: 138.7030, color: "#3b82f6", is_landmark: false },
    VenueMarker { name: OASIS, lat: 36.8475, lng: 138.7020, color: "#00bcd4", is_landmark: true },
];

#[must_use]
pub fn venue_marker(stage_name: &str) -> Option<&'static VenueMarker> {
    VENUE_MARKERS.iter().find(|m| m.name == stage_name)
}

/// CSS class carrying the stage colour; unknown stages get a neutral class
#[must_use]
pub fn stage_css_class(stage_name: &str) -> &'static str {
    match stage_name {
        GREEN_STAGE => "stage-green",
        WHITE_STAGE => "stage-white",
        RED_MARQUEE => "stage-red",
        FIELD_OF_HEAVEN => "stage-heaven",
        _ => "stage-other",
    }
}
