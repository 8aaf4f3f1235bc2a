use serde::Deserialize;
use std::fmt;
use std::time::Duration;

// Response consumed by the control shell after starting a run.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSimulationResponse {
    pub message: String,
    #[serde(default)]
    pub run_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Debug)]
pub enum StartSimulationError {
    // The request never produced a response (refused, timed out, DNS).
    Transport(reqwest::Error),
    // The server answered with a non-2xx status.
    Status {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    // The body was not the expected JSON shape.
    Decode(reqwest::Error),
}

impl fmt::Display for StartSimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartSimulationError::Transport(e) => write!(f, "request failed: {e}"),
            StartSimulationError::Status { status, message } => match message {
                Some(message) => write!(f, "server returned {status}: {message}"),
                None => write!(f, "server returned {status}"),
            },
            StartSimulationError::Decode(e) => write!(f, "invalid response body: {e}"),
        }
    }
}

impl std::error::Error for StartSimulationError {}

// Thin reqwest client for the simulation server's start endpoint.
#[derive(Clone)]
pub struct SimulationClient {
    http: reqwest::Client,
    base_url: String,
}

impl SimulationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn start_simulation(
        &self,
    ) -> Result<StartSimulationResponse, StartSimulationError> {
        let url = format!("{}/start-simulation", self.base_url);
        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(StartSimulationError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // Surface the error envelope's message when the server sent one.
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|e| e.message);
            return Err(StartSimulationError::Status { status, message });
        }

        response
            .json::<StartSimulationResponse>()
            .await
            .map_err(StartSimulationError::Decode)
    }
}
