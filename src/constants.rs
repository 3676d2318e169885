use chrono::NaiveTime;

/// Wall-clock time at which every festival day's session starts
pub const DAY_ANCHOR: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
    Some(time) => time,
    None => panic!("Invalid day anchor"),
};

/// Hours before this value belong to the previous day's session (00:00 to 05:59)
pub const MIDNIGHT_CONTINUATION_END_HOUR: u32 = 6;

pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// Festival days as they appear in the dataset's `day` field
pub const FESTIVAL_DAYS: [u8; 3] = [1, 2, 3];

/// Walking time used for any stage pair missing from the walking table
pub const DEFAULT_WALKING_MINUTES: u32 = 10;

/// Walks at least this long get a warning unless the route is already marked hard
pub const LONG_WALK_MINUTES: u32 = 15;

/// Vertical scale of the timetable grid
pub const PIXELS_PER_HOUR: f64 = 120.0;

/// Short performances are never drawn shorter than this
pub const MIN_BLOCK_HEIGHT: f64 = 60.0;

/// Sentinel value of the stage selector meaning "no stage filter"
pub const STAGE_FILTER_ALL: &str = "all";

pub const DATASET_PATH: &str = "/timetable.json";
pub const SELECTION_STORAGE_KEY: &str = "fujirock2025-mytimetable";

pub const FESTIVAL_NAME: &str = "FUJI ROCK FESTIVAL 2025";
pub const EXPORT_FILE_NAME: &str = "fujirock2025_mytimetable.txt";
