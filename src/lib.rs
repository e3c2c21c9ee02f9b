//! Desktop client for a workout-schedule backend: collects weekly
//! availability, posts it to `/api/generate-schedule` and renders the
//! returned plan.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod render;
pub mod routines;
pub mod submission;
