use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use weekly_planner::client::ScheduleClient;
use weekly_planner::config::Config;
use weekly_planner::form::ScheduleForm;
use weekly_planner::models::Goal;
use weekly_planner::render::error_html;
use weekly_planner::submission::SubmissionHandler;

fn handler_for(server: &MockServer) -> SubmissionHandler {
    let config = Config {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
        ..Config::default()
    };
    SubmissionHandler::new(ScheduleClient::new(&config).expect("client"))
}

#[test]
fn filled_form_round_trips_to_rendered_html() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate-schedule")
            .json_body_partial(
                r#"{"availability": {"Senin": {"start": "07:00", "duration": 1.5}}, "goal": "strength", "targetWeight": 72.5}"#,
            );
        then.status(200).json_body(json!({
            "schedule": {
                "Senin": {
                    "day_type": "Workout Day (0.5h)",
                    "workouts": [
                        {"type": "upper chest", "name": "Incline Press", "sets": 5, "reps": 6, "duration": 0.5}
                    ],
                    "total_duration": 0.5
                },
                "Selasa": {
                    "day_type": "Rest Day",
                    "workouts": [{"type": "rest", "name": "Rest Day"}],
                    "total_duration": 0
                }
            }
        }));
    });

    let mut form = ScheduleForm::new();
    form.days[0].start = "07:00".into();
    form.days[0].duration = "1.5".into();
    form.goal = Goal::Strength;
    form.target_weight = "72.5".into();

    let mut handler = handler_for(&server);
    handler.submit(form.collect());
    assert!(handler.wait(Duration::from_secs(10)));
    mock.assert();

    let html = handler.result().expect("schedule rendered").to_html();
    assert!(html.contains("Incline Press"));
    assert!(html.contains("5 set × 6 rep"));
    assert!(html.contains("30 menit"));
    assert!(html.contains("Hari istirahat untuk pemulihan otot"));
    assert!(html.find("Senin").unwrap() < html.find("Selasa").unwrap());
}

#[test]
fn empty_week_is_rejected_by_backend_and_shown_as_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate-schedule");
        then.status(400).json_body(json!({
            "error": "Tidak ada hari dengan durasi latihan yang ditentukan"
        }));
    });

    let mut handler = handler_for(&server);
    handler.submit(ScheduleForm::new().collect());
    assert!(handler.wait(Duration::from_secs(10)));

    assert!(handler.result().is_none());
    let message = handler.error_message().expect("error shown");
    assert!(message.contains("Tidak ada hari"));
    assert_eq!(
        error_html("Tidak ada hari dengan durasi latihan yang ditentukan"),
        r#"<div class="error-message">❌ Error: Tidak ada hari dengan durasi latihan yang ditentukan</div>"#
    );
}
