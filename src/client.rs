use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Schedule, ScheduleRequest};

#[derive(Clone, Debug)]
pub struct ScheduleClient {
    http: Client,
    endpoint: String,
}

impl ScheduleClient {
    pub fn new(config: &Config) -> ScheduleResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(ScheduleClient {
            http,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, no retries. The body is parsed as JSON before the status is
    /// looked at, so a non-JSON error page surfaces as `InvalidJson`.
    pub fn generate_schedule(&self, request: &ScheduleRequest) -> ScheduleResult<Schedule> {
        debug!(endpoint = %self.endpoint, "sending schedule request");
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        let mut data: Value = serde_json::from_str(&body)?;

        if !status.is_success() {
            return Err(ScheduleError::server(
                status,
                data.get("error").and_then(Value::as_str),
            ));
        }

        let schedule = match data.get_mut("schedule").map(Value::take) {
            Some(raw @ Value::Object(_)) => serde_json::from_value::<Schedule>(raw)?,
            _ => return Err(ScheduleError::MissingSchedule),
        };
        info!(days = schedule.days.len(), "schedule received");
        Ok(schedule)
    }
}
