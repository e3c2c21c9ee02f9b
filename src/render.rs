use std::fmt::Write;

use html_escape::encode_text;

use crate::models::{Schedule, Workout};

pub const SCHEDULE_TITLE: &str = "📋 Jadwal Latihan Anda";
pub const REST_CAPTION: &str = "Hari istirahat untuk pemulihan otot";

#[derive(Clone, Debug, PartialEq)]
pub enum WorkoutBlock {
    Rest {
        name: String,
    },
    Exercise {
        name: String,
        muscle: String,
        sets: String,
        reps: String,
        minutes: String,
    },
}

impl WorkoutBlock {
    pub fn title(&self) -> String {
        match self {
            WorkoutBlock::Rest { name } => format!("🛌 {name}"),
            WorkoutBlock::Exercise { name, .. } => format!("💪 {name}"),
        }
    }

    pub fn sets_reps(&self) -> Option<String> {
        match self {
            WorkoutBlock::Rest { .. } => None,
            WorkoutBlock::Exercise { sets, reps, .. } => Some(format!("{sets} set × {reps} rep")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayBlock {
    pub day: String,
    pub day_type: String,
    pub workouts: Vec<WorkoutBlock>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSchedule {
    pub title: &'static str,
    pub days: Vec<DayBlock>,
}

/// Hours to whole minutes, for display.
pub fn estimated_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn render_schedule(schedule: &Schedule) -> RenderedSchedule {
    let days = schedule
        .days
        .iter()
        .map(|(day, plan)| DayBlock {
            day: day.clone(),
            day_type: plan.day_type.clone(),
            workouts: plan
                .workouts
                .iter()
                .map(|workout| match workout {
                    Workout::Rest { name } => WorkoutBlock::Rest { name: name.clone() },
                    Workout::Exercise {
                        name,
                        muscle,
                        sets,
                        reps,
                        duration,
                    } => WorkoutBlock::Exercise {
                        name: name.clone(),
                        muscle: muscle.clone(),
                        sets: or_dash(*sets),
                        reps: or_dash(*reps),
                        minutes: or_dash(duration.map(estimated_minutes)),
                    },
                })
                .collect(),
        })
        .collect();

    RenderedSchedule {
        title: SCHEDULE_TITLE,
        days,
    }
}

impl RenderedSchedule {
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // writing into a String cannot fail
        let _ = self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, r#"<div class="schedule-result">"#)?;
        writeln!(out, "<h2>{}</h2>", encode_text(self.title))?;
        for day in &self.days {
            writeln!(out, r#"<div class="day-schedule">"#)?;
            writeln!(
                out,
                r#"<h3>{} <span class="day-type">{}</span></h3>"#,
                encode_text(&day.day),
                encode_text(&day.day_type)
            )?;
            for workout in &day.workouts {
                writeln!(out, r#"<div class="workout-item">"#)?;
                writeln!(
                    out,
                    r#"<div class="workout-name">{}</div>"#,
                    encode_text(&workout.title())
                )?;
                match workout {
                    WorkoutBlock::Rest { .. } => {
                        writeln!(out, r#"<div class="workout-details">{REST_CAPTION}</div>"#)?;
                    }
                    WorkoutBlock::Exercise {
                        muscle,
                        sets,
                        reps,
                        minutes,
                        ..
                    } => {
                        let muscle = encode_text(muscle);
                        writeln!(out, r#"<div class="workout-meta">"#)?;
                        writeln!(
                            out,
                            r#"<span class="sets-reps">{} set × {} rep</span>"#,
                            encode_text(sets),
                            encode_text(reps)
                        )?;
                        writeln!(out, r#"<span class="target-muscle">{muscle}</span>"#)?;
                        writeln!(out, "</div>")?;
                        writeln!(out, r#"<div class="workout-details">"#)?;
                        writeln!(out, "<strong>Target Otot:</strong> {muscle}<br>")?;
                        writeln!(
                            out,
                            "<strong>Repetisi per Set:</strong> {} kali<br>",
                            encode_text(reps)
                        )?;
                        writeln!(out, "<strong>Jumlah Set:</strong> {} set<br>", encode_text(sets))?;
                        writeln!(
                            out,
                            "<strong>Estimasi Waktu:</strong> {} menit",
                            encode_text(minutes)
                        )?;
                        writeln!(out, "</div>")?;
                    }
                }
                writeln!(out, "</div>")?;
            }
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")
    }
}

pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="error-message">❌ Error: {}</div>"#,
        encode_text(message)
    )
}
