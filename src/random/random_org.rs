//! True-random source backed by random.org.
//!
//! Issues one blocking GET per draw against the plain-text decimal-fraction
//! endpoint. A slow or unreachable service surfaces as an error; no local
//! fallback is used.

use std::io;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::RandomConfig;
use crate::error::RandomError;
use crate::random::{parse_uniform, RandomSource};

/// Blocking random.org client.
#[derive(Debug, Clone)]
pub struct RandomOrgSource {
    agent: ureq::Agent,
    url: String,
}

impl RandomOrgSource {
    pub fn new(config: &RandomConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build();
        Self {
            agent,
            url: config.url.clone(),
        }
    }
}

impl RandomSource for RandomOrgSource {
    fn next_uniform(&mut self) -> Result<f64, RandomError> {
        debug!(url = %self.url, "Fetching random number");

        let response = self.agent.get(&self.url).call().map_err(|e| {
            let err = classify(e);
            warn!(error = %err, "Random number request failed");
            err
        })?;

        let body = response.into_string().map_err(|e| match e.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => RandomError::Timeout,
            _ => RandomError::Transport(e.to_string()),
        })?;

        parse_uniform(&body)
    }
}

fn classify(error: ureq::Error) -> RandomError {
    match error {
        ureq::Error::Status(code, _) => RandomError::Status { code },
        ureq::Error::Transport(transport) => {
            let timed_out = std::error::Error::source(&transport)
                .and_then(|source| source.downcast_ref::<io::Error>())
                .is_some_and(|io| {
                    matches!(io.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
                });
            if timed_out {
                RandomError::Timeout
            } else {
                RandomError::Transport(transport.to_string())
            }
        }
    }
}
