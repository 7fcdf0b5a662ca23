//! JSONL request/response loop.
//!
//! One JSON object per line in each direction. The loop owns nothing: the
//! engine, registry, and history logger are borrowed from the composition
//! root, and requests are served strictly one at a time, which is the
//! serialization rule the engine requires.

use chill_core::{BreakLogger, ChillState};
use chill_routines::Registry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// Reserved action name listing the catalog without touching the engine.
pub const LIST_ACTION: &str = "list_breaks";

/// Fatal transport errors. Per-request faults become error responses
/// instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("protocol io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("response encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One request line from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub action: String,
}

/// Machine-readable fault category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownAction,
    BadRequest,
}

/// One response line to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok { action: String, report: String },
    Error { code: ErrorCode, message: String },
}

/// Dispatch a single raw request line. Never touches the engine on a fault.
pub async fn handle_line(
    engine: &mut ChillState,
    registry: &Registry,
    logger: &mut BreakLogger,
    line: &str,
) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Response::Error {
                code: ErrorCode::BadRequest,
                message: format!("malformed request: {}", e),
            }
        }
    };

    if request.action == LIST_ACTION {
        return Response::Ok {
            action: request.action,
            report: registry.names().join("\n"),
        };
    }

    let Some(routine) = registry.get(&request.action) else {
        return Response::Error {
            code: ErrorCode::UnknownAction,
            message: format!("unknown action '{}'", request.action),
        };
    };

    let report = engine.perform_break(routine).await;
    if let Err(e) = logger.log(&report) {
        tracing::warn!("failed to record break history: {}", e);
    }

    Response::Ok {
        action: request.action,
        report: report.render(),
    }
}

/// Serve requests until the reader reaches EOF.
pub async fn serve<R, W>(
    reader: R,
    mut writer: W,
    engine: &mut ChillState,
    registry: &Registry,
    logger: &mut BreakLogger,
) -> Result<(), ServerError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(engine, registry, logger, line).await;
        let payload = serde_json::to_string(&response)?;
        writer.write_all(payload.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Serve over stdin/stdout. Logging goes to stderr, so the protocol
/// channel stays clean.
pub async fn run_stdio(
    engine: &mut ChillState,
    registry: &Registry,
    logger: &mut BreakLogger,
) -> Result<(), ServerError> {
    serve(
        tokio::io::stdin(),
        tokio::io::stdout(),
        engine,
        registry,
        logger,
    )
    .await
}

#[cfg(test)]
mod tests {
    use chill_core::clock::fixtures::{recording_sleep, ManualClock};
    use chill_core::{BreakLogger, ChillState, EngineConfig};

    use super::*;

    fn test_engine(seed: u64) -> ChillState {
        let clock = ManualClock::new(0.0);
        let (sleep, _) = recording_sleep();
        let config = EngineConfig {
            boss_alertness: 0,
            boss_alertness_cooldown: 120,
            stress_increase_rate: 1.0,
            rng_seed: Some(seed),
        };
        ChillState::with_clock_and_sleep(config, Box::new(clock), sleep)
    }

    #[tokio::test]
    async fn test_known_action_returns_report() {
        let mut engine = test_engine(1);
        let registry = Registry::builtin();
        let mut logger = BreakLogger::null();

        let response = handle_line(
            &mut engine,
            &registry,
            &mut logger,
            r#"{"action":"take_a_break"}"#,
        )
        .await;

        match response {
            Response::Ok { action, report } => {
                assert_eq!(action, "take_a_break");
                assert!(report.contains("Stress Level: "));
                assert!(report.contains("Boss Alert Level: "));
            }
            Response::Error { .. } => panic!("expected ok response"),
        }
        assert_eq!(logger.record_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_action_leaves_engine_untouched() {
        let mut engine = test_engine(1);
        let registry = Registry::builtin();
        let mut logger = BreakLogger::null();
        let before = engine.snapshot();

        let response = handle_line(
            &mut engine,
            &registry,
            &mut logger,
            r#"{"action":"actually_do_work"}"#,
        )
        .await;

        match response {
            Response::Error { code, message } => {
                assert_eq!(code, ErrorCode::UnknownAction);
                assert!(message.contains("actually_do_work"));
            }
            Response::Ok { .. } => panic!("expected error response"),
        }
        assert_eq!(engine.snapshot(), before);
        assert_eq!(logger.record_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_request_is_bad_request() {
        let mut engine = test_engine(1);
        let registry = Registry::builtin();
        let mut logger = BreakLogger::null();

        let response = handle_line(&mut engine, &registry, &mut logger, "not json at all").await;

        assert!(matches!(
            response,
            Response::Error {
                code: ErrorCode::BadRequest,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_list_breaks_reports_catalog() {
        let mut engine = test_engine(1);
        let registry = Registry::builtin();
        let mut logger = BreakLogger::null();
        let before = engine.snapshot();

        let response = handle_line(
            &mut engine,
            &registry,
            &mut logger,
            r#"{"action":"list_breaks"}"#,
        )
        .await;

        match response {
            Response::Ok { report, .. } => {
                assert!(report.lines().any(|line| line == "take_a_break"));
                assert!(report.lines().any(|line| line == "emergency_clockout"));
            }
            Response::Error { .. } => panic!("expected ok response"),
        }
        // Listing is metadata only.
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_response_wire_shape() {
        let ok = Response::Ok {
            action: "take_a_break".to_string(),
            report: "Break Summary: x\nStress Level: 1\nBoss Alert Level: 0".to_string(),
        };
        let json = serde_json::to_string(&ok).unwrap();
        assert!(json.starts_with(r#"{"status":"ok""#));

        let err = Response::Error {
            code: ErrorCode::UnknownAction,
            message: "unknown action 'nap'".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""code":"unknown_action""#));
    }
}
