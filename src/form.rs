use chrono::NaiveTime;

use crate::models::{Availability, AvailabilityEntry, Gender, Goal, ScheduleRequest, DAYS};

pub const MAX_DURATION_HOURS: f64 = 8.0;
pub const DURATION_STEP_HOURS: f64 = 0.5;

/// One availability row: raw text as typed, plus the ids its widgets use.
#[derive(Clone, Debug, PartialEq)]
pub struct DayInput {
    pub day: &'static str,
    pub start: String,
    pub duration: String,
}

impl DayInput {
    pub fn new(day: &'static str) -> Self {
        DayInput {
            day,
            start: String::new(),
            duration: String::new(),
        }
    }

    pub fn start_id(&self) -> String {
        format!("{}-start", self.day)
    }

    pub fn duration_id(&self) -> String {
        format!("{}-duration", self.day)
    }

    pub fn entry(&self) -> AvailabilityEntry {
        AvailabilityEntry {
            start: parse_start_time(&self.start),
            duration: parse_duration(&self.duration),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleForm {
    pub days: Vec<DayInput>,
    pub gender: Gender,
    pub goal: Goal,
    pub target_weight: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleForm {
    pub fn new() -> Self {
        ScheduleForm {
            days: DAYS.into_iter().map(DayInput::new).collect(),
            gender: Gender::default(),
            goal: Goal::default(),
            target_weight: String::new(),
        }
    }

    pub fn collect(&self) -> ScheduleRequest {
        let mut availability = Availability::default();
        for input in &self.days {
            availability.insert(input.day, input.entry());
        }

        ScheduleRequest {
            availability,
            gender: self.gender,
            goal: self.goal,
            target_weight: parse_target_weight(&self.target_weight),
        }
    }
}

/// Empty or not a time of day -> `None`. Otherwise normalised to `HH:MM`.
pub fn parse_start_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
        .map(|t| t.format("%H:%M").to_string())
}

/// Unparseable or non-finite -> 0.
pub fn parse_duration(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .unwrap_or(0.0)
}

/// Unparseable, non-finite or zero -> `None`.
pub fn parse_target_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w != 0.0)
}
