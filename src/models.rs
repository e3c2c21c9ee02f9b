//models.rs
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Weekday names in display order.
pub const DAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvailabilityEntry {
    pub start: Option<String>,
    pub duration: f64,
}

/// Weekday to entry, serialised as a JSON object in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Availability {
    entries: Vec<(String, AvailabilityEntry)>,
}

impl Availability {
    pub fn insert(&mut self, day: &str, entry: AvailabilityEntry) {
        match self.entries.iter_mut().find(|(d, _)| d == day) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((day.to_string(), entry)),
        }
    }

    pub fn get(&self, day: &str) -> Option<&AvailabilityEntry> {
        self.entries.iter().find(|(d, _)| d == day).map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, entry) in &self.entries {
            map.serialize_entry(day, entry)?;
        }
        map.end()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Pria,
    Wanita,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Pria, Gender::Wanita];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Pria => "Pria",
            Gender::Wanita => "Wanita",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    MuscleBuilding,
    WeightLoss,
    Endurance,
    Strength,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::MuscleBuilding,
        Goal::WeightLoss,
        Goal::Endurance,
        Goal::Strength,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Goal::MuscleBuilding => "Membangun otot",
            Goal::WeightLoss => "Menurunkan berat badan",
            Goal::Endurance => "Daya tahan",
            Goal::Strength => "Kekuatan",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub availability: Availability,
    pub gender: Gender,
    pub goal: Goal,
    pub target_weight: Option<f64>,
}

#[derive(Deserialize)]
struct RawWorkout {
    #[serde(default)]
    name: Value,
    #[serde(rename = "type", default)]
    kind: Value,
    #[serde(default)]
    sets: Value,
    #[serde(default)]
    reps: Value,
    #[serde(default)]
    duration: Value,
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Whole non-negative numbers (`3`, `3.0`, `"3"`) only; anything else is absent.
fn count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).ok(),
            None => n
                .as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
                .map(|v| v as u32),
        },
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn hours(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|h| h.is_finite())
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawWorkout")]
pub enum Workout {
    Rest {
        name: String,
    },
    Exercise {
        name: String,
        muscle: String,
        sets: Option<u32>,
        reps: Option<u32>,
        /// Hours.
        duration: Option<f64>,
    },
}

impl From<RawWorkout> for Workout {
    fn from(raw: RawWorkout) -> Self {
        let kind = text(raw.kind);
        if kind == "rest" {
            Workout::Rest { name: text(raw.name) }
        } else {
            Workout::Exercise {
                name: text(raw.name),
                muscle: kind,
                sets: count(&raw.sets),
                reps: count(&raw.reps),
                duration: hours(&raw.duration),
            }
        }
    }
}

#[derive(Deserialize)]
struct RawDayPlan {
    #[serde(default)]
    day_type: Value,
    #[serde(default)]
    workouts: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawDayPlan")]
pub struct DayPlan {
    pub day_type: String,
    pub workouts: Vec<Workout>,
}

impl From<RawDayPlan> for DayPlan {
    fn from(raw: RawDayPlan) -> Self {
        let workouts = match raw.workouts {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<Workout>(item) {
                    Ok(workout) => Some(workout),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed workout entry");
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };
        DayPlan {
            day_type: text(raw.day_type),
            workouts,
        }
    }
}

/// Day name to plan, in the order the backend sent them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    pub days: Vec<(String, DayPlan)>,
}

impl Schedule {
    pub fn get(&self, day: &str) -> Option<&DayPlan> {
        self.days.iter().find(|(d, _)| d == day).map(|(_, p)| p)
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let days = raw
            .into_iter()
            .map(|(day, value)| {
                // a day that doesn't match the expected shape renders as an empty day
                let plan = serde_json::from_value::<DayPlan>(value).unwrap_or_else(|e| {
                    tracing::warn!(%day, error = %e, "malformed day entry in schedule");
                    DayPlan::default()
                });
                (day, plan)
            })
            .collect();
        Ok(Schedule { days })
    }
}
