#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod logging;
pub mod constants;
pub mod config;
pub mod time;
pub mod models;
pub mod dataset;
pub mod filter;
pub mod conflict;
pub mod layout;
pub mod walking;
pub mod schedule;
pub mod export;
pub mod storage;
pub mod components;

pub use components::app::App;
