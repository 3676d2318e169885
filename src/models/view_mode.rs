/// Which top-level panel the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Timetable,
    MyTimetable,
    Map,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Timetable, Self::MyTimetable, Self::Map];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timetable => "Timetable",
            Self::MyTimetable => "My Timetable",
            Self::Map => "Venue Map",
        }
    }

    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Timetable => "fa-solid fa-calendar",
            Self::MyTimetable => "fa-solid fa-star",
            Self::Map => "fa-solid fa-location-dot",
        }
    }
}
