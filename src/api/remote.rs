use crate::libs::clocking::ClockingRecord;
use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

/// Clocking as served by the hosted backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteClocking {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    /// Derived locally from `end_time`; kept only for parsing.
    #[serde(default)]
    pub status: Option<String>,
}

impl RemoteClocking {
    /// Converts to a local record. Fails when the user id is not numeric.
    pub fn to_record(&self) -> Result<ClockingRecord> {
        let employee_id: i64 = self
            .user_id
            .trim()
            .parse()
            .map_err(|_| msg_error_anyhow!(Message::RemoteInvalidUserId(self.id.clone(), self.user_id.clone())))?;

        let mut record = ClockingRecord::new(employee_id, &self.user_name, self.start_time, self.description.clone());
        record.end_time = self.end_time;
        Ok(record)
    }
}

pub struct RemoteClockings {
    client: Client,
    config: ServerConfig,
}

impl RemoteClockings {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn clockings_url(&self) -> String {
        format!("{}/clockings", self.config.api_url.trim_end_matches('/'))
    }

    /// `GET {api_url}/clockings` with the configured bearer token.
    pub async fn fetch_clockings(&self) -> Result<Vec<RemoteClocking>> {
        let response = self
            .client
            .get(self.clockings_url())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.auth_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(msg_error_anyhow!(Message::RemoteRequestFailed(status.to_string())));
        }

        Ok(response.json::<Vec<RemoteClocking>>().await?)
    }
}
