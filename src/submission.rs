use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::client::ScheduleClient;
use crate::error::ScheduleResult;
use crate::models::{Schedule, ScheduleRequest};
use crate::render::{render_schedule, RenderedSchedule};

/// Runs schedule requests off the UI thread and holds what the error and
/// result regions currently show. Submissions are not serialised: whichever
/// response settles last is the one left on screen.
pub struct SubmissionHandler {
    client: ScheduleClient,
    tx: Sender<ScheduleResult<Schedule>>,
    rx: Receiver<ScheduleResult<Schedule>>,
    in_flight: usize,
    error_message: Option<String>,
    result: Option<RenderedSchedule>,
}

impl SubmissionHandler {
    pub fn new(client: ScheduleClient) -> Self {
        let (tx, rx) = mpsc::channel();
        SubmissionHandler {
            client,
            tx,
            rx,
            in_flight: 0,
            error_message: None,
            result: None,
        }
    }

    pub fn submit(&mut self, request: ScheduleRequest) {
        self.clear();

        match serde_json::to_string(&request) {
            Ok(body) => debug!(payload = %body, "sending payload"),
            Err(e) => debug!(error = %e, "payload not printable"),
        }

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            // receiver gone means the app closed
            let _ = tx.send(client.generate_schedule(&request));
        });
    }

    /// Applies every settled response. Returns true if a region changed.
    /// Each outcome replaces both regions, so only one of them is ever filled.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
            changed = true;
        }
        changed
    }

    /// Blocks until nothing is in flight or the timeout elapses.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(outcome) => self.apply(outcome),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return false
                }
            }
        }
        true
    }

    fn apply(&mut self, outcome: ScheduleResult<Schedule>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(schedule) => {
                self.error_message = None;
                self.result = Some(render_schedule(&schedule));
            }
            Err(e) => {
                error!(error = %e, "schedule request failed");
                self.result = None;
                self.error_message = Some(format!("❌ Error: {e}"));
            }
        }
    }

    pub fn clear(&mut self) {
        self.error_message = None;
        self.result = None;
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn result(&self) -> Option<&RenderedSchedule> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::form::ScheduleForm;
    use crate::models::Goal;
    use httpmock::prelude::*;
    use serde_json::json;

    const WAIT: Duration = Duration::from_secs(10);

    fn handler_for(server: &MockServer) -> SubmissionHandler {
        let config = Config {
            base_url: server.base_url(),
            timeout: Duration::from_secs(5),
            ..Config::default()
        };
        SubmissionHandler::new(ScheduleClient::new(&config).unwrap())
    }

    fn request_with_goal(goal: Goal) -> ScheduleRequest {
        let mut form = ScheduleForm::new();
        form.goal = goal;
        form.days[0].duration = "1".into();
        form.collect()
    }

    #[test]
    fn success_fills_result_region_only() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/generate-schedule");
            then.status(200).json_body(json!({
                "schedule": {"Senin": {"day_type": "Push", "workouts": [{"type": "rest", "name": "Rest Day"}]}}
            }));
        });

        let mut handler = handler_for(&server);
        handler.submit(request_with_goal(Goal::MuscleBuilding));
        assert!(handler.is_pending());
        assert!(handler.wait(WAIT));

        assert!(!handler.is_pending());
        assert_eq!(handler.error_message(), None);
        let result = handler.result().expect("rendered schedule");
        assert_eq!(result.days[0].day, "Senin");
    }

    #[test]
    fn failure_fills_error_region_and_leaves_result_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/generate-schedule");
            then.status(400).json_body(json!({"error": "Invalid goal"}));
        });

        let mut handler = handler_for(&server);
        handler.submit(request_with_goal(Goal::Endurance));
        assert!(handler.wait(WAIT));

        let message = handler.error_message().expect("error shown");
        assert!(message.contains("Invalid goal"));
        assert!(message.starts_with("❌ Error: "));
        assert!(handler.result().is_none());
    }

    #[test]
    fn resubmitting_clears_previous_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/generate-schedule");
            then.status(500).json_body(json!({"error": "Terjadi kesalahan: boom"}));
        });

        let mut handler = handler_for(&server);
        handler.submit(request_with_goal(Goal::Strength));
        assert!(handler.wait(WAIT));
        assert!(handler.error_message().is_some());

        handler.submit(request_with_goal(Goal::Strength));
        assert_eq!(handler.error_message(), None);
        assert!(handler.result().is_none());
        assert!(handler.wait(WAIT));
    }

    #[test]
    fn last_resolved_response_wins() {
        let server = MockServer::start();
        let slow = server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate-schedule")
                .body_contains(r#""goal":"strength""#);
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"schedule": {"Senin": {"day_type": "Slow", "workouts": []}}}));
        });
        let fast = server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate-schedule")
                .body_contains(r#""goal":"endurance""#);
            then.status(200)
                .json_body(json!({"schedule": {"Selasa": {"day_type": "Fast", "workouts": []}}}));
        });

        let mut handler = handler_for(&server);
        handler.submit(request_with_goal(Goal::Strength));
        handler.submit(request_with_goal(Goal::Endurance));
        assert!(handler.wait(WAIT));

        slow.assert();
        fast.assert();
        let result = handler.result().expect("rendered schedule");
        assert_eq!(result.days.len(), 1);
        assert_eq!(result.days[0].day_type, "Slow");
        assert_eq!(handler.error_message(), None);
    }

    #[test]
    fn late_failure_replaces_earlier_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate-schedule")
                .body_contains(r#""goal":"strength""#);
            then.status(500)
                .delay(Duration::from_millis(500))
                .json_body(json!({"error": "Terjadi kesalahan: timeout"}));
        });
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate-schedule")
                .body_contains(r#""goal":"endurance""#);
            then.status(200)
                .json_body(json!({"schedule": {"Selasa": {"day_type": "Fast", "workouts": []}}}));
        });

        let mut handler = handler_for(&server);
        handler.submit(request_with_goal(Goal::Strength));
        handler.submit(request_with_goal(Goal::Endurance));
        assert!(handler.wait(WAIT));

        assert!(handler.result().is_none());
        let message = handler.error_message().expect("error shown");
        assert!(message.contains("timeout"));
    }

    #[test]
    fn poll_is_a_no_op_when_nothing_settled() {
        let server = MockServer::start();
        let mut handler = handler_for(&server);
        assert!(!handler.poll());
        assert!(handler.wait(Duration::from_millis(10)));
    }
}
