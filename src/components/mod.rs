#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod day_tabs;
pub mod filter_bar;
pub mod loading;
pub mod my_timetable;
pub mod route_map;
pub mod timetable_grid;
pub mod toast;
