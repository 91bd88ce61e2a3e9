//! A simulated asynchronous user lookup.
//!
//! The "server" is an in-process directory behind a latency sleep: the lookup
//! produces a JSON body, parsing turns the body into a typed record, and a
//! timeout wrapper bounds the whole exchange. No real networking is involved.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::{sleep, timeout};

/// How long the simulated lookup takes before it answers.
pub const FETCH_LATENCY: Duration = Duration::from_millis(150);

/// The directory the lookup answers from.
const DIRECTORY: &[(u64, &str)] = &[(1, "Eric"), (2, "Ethan"), (3, "Léa")];

/// The record a successful lookup resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
}

/// Failure modes of the lookup pipeline.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no user with id {0} in the directory")]
    UnknownUser(u64),
    #[error("malformed user payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("user lookup timed out after {budget:?}")]
    TimedOut { budget: Duration },
}

/// Produces the raw JSON body for `id` after the simulated latency.
pub async fn fetch_user_response(id: u64) -> Result<String, FetchError> {
    sleep(FETCH_LATENCY).await;

    let (_, name) = DIRECTORY
        .iter()
        .copied()
        .find(|&(known, _)| known == id)
        .ok_or(FetchError::UnknownUser(id))?;

    let record = UserRecord {
        id,
        name: name.to_string(),
    };
    Ok(serde_json::to_string(&record)?)
}

/// Decodes a response body into a typed record.
pub fn parse_user(body: &str) -> Result<UserRecord, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Looks up a user: response first, then parse, errors propagating with `?`.
pub async fn fetch_user(id: u64) -> Result<UserRecord, FetchError> {
    let body = fetch_user_response(id).await?;
    let user = parse_user(&body)?;
    Ok(user)
}

/// Bounds the lookup with a time budget.
///
/// The lookup itself is untouched; a budget that elapses first turns into an
/// ordinary [`FetchError::TimedOut`] value.
pub async fn fetch_user_with_timeout(
    id: u64,
    budget: Duration,
) -> Result<UserRecord, FetchError> {
    match timeout(budget, fetch_user(id)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::TimedOut { budget }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_known_user_returns_the_record() {
        let user = fetch_user(1).await.expect("id 1 is in the directory");
        assert_eq!(
            user,
            UserRecord {
                id: 1,
                name: "Eric".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_is_an_error() {
        for missing in [0, 42] {
            match fetch_user(missing).await {
                Err(FetchError::UnknownUser(id)) => assert_eq!(id, missing),
                other => panic!("expected UnknownUser, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_accepts_a_directory_body() {
        let record = parse_user(r#"{"id":2,"name":"Ethan"}"#).expect("valid body");
        assert_eq!(record.id, 2);
        assert_eq!(record.name, "Ethan");
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert!(matches!(parse_user("not json"), Err(FetchError::Payload(_))));
    }

    #[tokio::test]
    async fn test_tight_budget_times_out() {
        let budget = Duration::from_millis(10);
        match fetch_user_with_timeout(1, budget).await {
            Err(FetchError::TimedOut { budget: reported }) => assert_eq!(reported, budget),
            other => panic!("expected TimedOut, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_budget_always_times_out() {
        // The budget elapses before the latency sleep yields, so the timeout
        // wins even when the directory could never answer the id.
        for id in [1, 404] {
            match fetch_user_with_timeout(id, Duration::ZERO).await {
                Err(FetchError::TimedOut { budget }) => assert_eq!(budget, Duration::ZERO),
                other => panic!("expected TimedOut, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_generous_budget_completes() {
        let user = fetch_user_with_timeout(2, FETCH_LATENCY * 4)
            .await
            .expect("well within budget");
        assert_eq!(user.name, "Ethan");
    }
}
