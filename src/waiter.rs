//! Poll-until-state loop used by the composite operations

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::transport::Response;

/// How long and how often to poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaiterConfig {
    /// Upper bound for the interval between polls; intervals start at one
    /// second and double up to this value
    pub max_interval_seconds: u64,
    /// Give up once this much time has passed since the first poll
    pub max_wait_seconds: u64,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            max_interval_seconds: 30,
            max_wait_seconds: 1200,
        }
    }
}

impl WaiterConfig {
    pub fn new(max_interval_seconds: u64, max_wait_seconds: u64) -> Self {
        Self {
            max_interval_seconds,
            max_wait_seconds,
        }
    }
}

/// How a wait ended
#[derive(Debug, Clone, PartialEq)]
pub enum WaitOutcome<T> {
    /// The last poll, whose state is one of the targets
    Reached(Response<T>),
    /// The resource disappeared while waiting for a deleted state
    NotFound,
}

/// Poll until the observed state matches one of `targets`.
///
/// `poll` is called once up front and then after every sleep; `state_of`
/// extracts the state string from the polled body. Matching ignores ASCII
/// case. When `succeed_on_not_found` is set a 404 from `poll` ends the wait
/// with [`WaitOutcome::NotFound`].
pub async fn wait_for_state<T, F, Fut, S>(
    config: &WaiterConfig,
    targets: &[String],
    succeed_on_not_found: bool,
    state_of: S,
    mut poll: F,
) -> Result<WaitOutcome<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Response<T>>>,
    S: Fn(&T) -> Option<&str>,
{
    let start = Instant::now();
    let max_wait = Duration::from_secs(config.max_wait_seconds);
    let max_interval = Duration::from_secs(config.max_interval_seconds.max(1));
    let mut interval = Duration::from_secs(1).min(max_interval);
    let mut polls: u32 = 0;

    loop {
        polls += 1;
        let response = match poll().await {
            Ok(response) => response,
            Err(e) if succeed_on_not_found && e.is_not_found() => {
                info!(polls, "Resource no longer exists, treating as reached");
                return Ok(WaitOutcome::NotFound);
            }
            Err(e) => return Err(e),
        };

        let state = state_of(&response.data).unwrap_or_default().to_string();
        debug!(polls, state = %state, "Polled resource state");
        if targets.iter().any(|t| t.eq_ignore_ascii_case(&state)) {
            return Ok(WaitOutcome::Reached(response));
        }

        let elapsed = start.elapsed();
        if elapsed >= max_wait {
            return Err(Error::MaxWaitExceeded {
                max_wait_seconds: config.max_wait_seconds,
                last_state: state,
            });
        }

        tokio::time::sleep(interval.min(max_wait - elapsed)).await;
        interval = (interval * 2).min(max_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn response(state: &str) -> Response<String> {
        Response {
            status: 200,
            headers: HashMap::new(),
            data: state.to_string(),
        }
    }

    fn targets(states: &[&str]) -> Vec<String> {
        states.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_at_first_matching_state() {
        let states = ["A", "B", "C", "D"];
        let calls = Cell::new(0usize);

        let outcome = wait_for_state(
            &WaiterConfig::default(),
            &targets(&["c"]),
            false,
            |s: &String| Some(s.as_str()),
            || {
                let i = calls.get();
                calls.set(i + 1);
                async move { Ok(response(states[i])) }
            },
        )
        .await
        .unwrap();

        assert_eq!(calls.get(), 3);
        assert!(matches!(outcome, WaitOutcome::Reached(r) if r.data == "C"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_after_max_wait() {
        let calls = Cell::new(0usize);
        let start = Instant::now();

        let err = wait_for_state(
            &WaiterConfig::new(30, 10),
            &targets(&["DONE"]),
            false,
            |s: &String| Some(s.as_str()),
            || {
                calls.set(calls.get() + 1);
                async { Ok(response("PENDING")) }
            },
        )
        .await
        .unwrap_err();

        // polls at t = 0, 1, 3, 7, 10
        assert_eq!(calls.get(), 5);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
        assert!(matches!(
            err,
            Error::MaxWaitExceeded { max_wait_seconds: 10, ref last_state } if last_state == "PENDING"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_counts_as_reached_when_allowed() {
        let not_found = || async {
            Err::<Response<String>, _>(Error::Api {
                status: 404,
                code: "NotAuthorizedOrNotFound".to_string(),
                message: "gone".to_string(),
                opc_request_id: None,
            })
        };

        let outcome = wait_for_state(
            &WaiterConfig::default(),
            &targets(&["DELETED"]),
            true,
            |s: &String| Some(s.as_str()),
            not_found,
        )
        .await
        .unwrap();
        assert_eq!(outcome, WaitOutcome::NotFound);

        let err = wait_for_state(
            &WaiterConfig::default(),
            &targets(&["DELETED"]),
            false,
            |s: &String| Some(s.as_str()),
            not_found,
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
