use crate::builder::RgCommand;
use rgbridge_core::config::consts::exec::{DEFAULT_MAX_OUTPUT_BYTES, READ_CHUNK_BYTES};
use rgbridge_core::{Result, RgBridgeError, ServerConfig};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

/// Resource limits applied to one engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecLimits {
    /// Stdout byte ceiling; the child is killed once it is reached
    pub max_output_bytes: usize,
    pub timeout: Option<Duration>,
}

impl Default for ExecLimits {
    fn default() -> Self {
        Self {
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            timeout: None,
        }
    }
}

impl From<&ServerConfig> for ExecLimits {
    fn from(config: &ServerConfig) -> Self {
        Self {
            max_output_bytes: config.max_output_bytes,
            timeout: config.timeout,
        }
    }
}

/// Result of an engine run that ended with exit code 0 or 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Stdout hit the byte ceiling and the rest was discarded
    pub truncated_by_limit: bool,
    pub duration_ms: u64,
}

struct Captured {
    stdout: Vec<u8>,
    hit_limit: bool,
    status: ExitStatus,
}

/// Run the engine and capture its output.
///
/// Exit code 0 (matches) and 1 (no matches) are both success. Anything else
/// is an [`RgBridgeError::ExitFailure`] and partial stdout is dropped.
pub async fn execute(command: &RgCommand, limits: &ExecLimits) -> Result<ExecResult> {
    let started = Instant::now();
    let program = command.program_name();
    debug!(command = %command, "spawning engine");

    let mut child = Command::new(command.program())
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| RgBridgeError::SpawnFailed {
            program: program.clone(),
            reason: e.to_string(),
        })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("stdout was not captured"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("stderr was not captured"))?;

    // stderr は別タスクで読み切る（パイプが詰まって子プロセスが止まるのを防ぐ）
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr.read_to_end(&mut buf).await.map(|_| buf)
    });

    let run = capture(&mut child, stdout, limits.max_output_bytes);
    let captured = match limits.timeout {
        Some(limit) => match tokio::time::timeout(limit, run).await {
            Ok(result) => result,
            Err(_) => {
                kill(&mut child);
                stderr_task.abort();
                warn!(program = %program, seconds = limit.as_secs(), "engine timed out");
                return Err(RgBridgeError::Timeout {
                    program,
                    seconds: limit.as_secs(),
                });
            }
        },
        None => run.await,
    };

    let captured = match captured {
        Ok(captured) => captured,
        Err(e) => {
            stderr_task.abort();
            return Err(e.into());
        }
    };

    let stderr_bytes = stderr_task.await.map_err(std::io::Error::other)??;
    let stdout = String::from_utf8_lossy(&captured.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_bytes).into_owned();
    let duration_ms = started.elapsed().as_millis() as u64;

    let exit_code = if captured.hit_limit {
        0
    } else {
        match captured.status.code() {
            Some(code) => code,
            None => {
                warn!(program = %program, status = %captured.status, "engine terminated by signal");
                1
            }
        }
    };

    debug!(
        exit_code,
        stdout_bytes = captured.stdout.len(),
        truncated_by_limit = captured.hit_limit,
        duration_ms,
        "engine finished"
    );

    if !matches!(exit_code, 0 | 1) {
        let trimmed = stderr.trim();
        let message = if trimmed.is_empty() {
            format!("{} exited with code {}", program, exit_code)
        } else {
            trimmed.to_string()
        };
        return Err(RgBridgeError::ExitFailure {
            code: exit_code,
            message,
        });
    }

    Ok(ExecResult {
        stdout,
        stderr,
        exit_code,
        truncated_by_limit: captured.hit_limit,
        duration_ms,
    })
}

async fn capture(
    child: &mut Child,
    stdout: impl AsyncRead + Unpin,
    max_bytes: usize,
) -> std::io::Result<Captured> {
    let (stdout, hit_limit) = read_bounded(stdout, max_bytes).await?;
    if hit_limit {
        kill(child);
    }
    let status = child.wait().await?;
    Ok(Captured {
        stdout,
        hit_limit,
        status,
    })
}

/// Read until EOF or until `max_bytes` would be exceeded.
///
/// On the ceiling the tail is trimmed back to the last complete line, or to a
/// whole UTF-8 character when no newline was captured.
async fn read_bounded(
    mut reader: impl AsyncRead + Unpin,
    max_bytes: usize,
) -> std::io::Result<(Vec<u8>, bool)> {
    let mut captured = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK_BYTES];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Ok((captured, false));
        }
        let room = max_bytes - captured.len();
        if n > room {
            captured.extend_from_slice(&chunk[..room]);
            trim_partial_tail(&mut captured);
            return Ok((captured, true));
        }
        captured.extend_from_slice(&chunk[..n]);
    }
}

fn trim_partial_tail(buf: &mut Vec<u8>) {
    if let Some(pos) = buf.iter().rposition(|&b| b == b'\n') {
        buf.truncate(pos);
        return;
    }

    // A UTF-8 character is at most 4 bytes; find where the last one starts
    let floor = buf.len().saturating_sub(4);
    let Some(start) = (floor..buf.len()).rev().find(|&i| buf[i] & 0xC0 != 0x80) else {
        return;
    };
    if let Err(e) = std::str::from_utf8(&buf[start..]) {
        // Incomplete sequence at the end, as opposed to bytes that were never valid
        if e.error_len().is_none() {
            buf.truncate(start + e.valid_up_to());
        }
    }
}

fn kill(child: &mut Child) {
    if let Err(e) = child.start_kill() {
        debug!(error = %e, "failed to kill engine process");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_bounded_under_limit() {
        let data: &[u8] = b"hello\nworld\n";
        let (out, hit) = read_bounded(data, 100).await.unwrap();
        assert_eq!(out, data);
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_read_bounded_exact_limit_is_not_truncation() {
        let data: &[u8] = b"12345";
        let (out, hit) = read_bounded(data, 5).await.unwrap();
        assert_eq!(out, b"12345");
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_read_bounded_stops_at_ceiling() {
        let data = vec![b'x'; READ_CHUNK_BYTES * 3];
        let (out, hit) = read_bounded(&data[..], 10_000).await.unwrap();
        assert_eq!(out.len(), 10_000);
        assert!(hit);
    }

    #[tokio::test]
    async fn test_read_bounded_ceiling_drops_partial_line() {
        let data: &[u8] = b"first\nsecond\nthird line\n";
        let (out, hit) = read_bounded(data, 16).await.unwrap();
        assert_eq!(out, b"first\nsecond");
        assert!(hit);
    }

    #[tokio::test]
    async fn test_read_bounded_ceiling_never_splits_a_character() {
        let data = "aéb".as_bytes();
        let (out, hit) = read_bounded(data, 2).await.unwrap();
        assert_eq!(out, b"a");
        assert!(hit);
        assert_eq!(String::from_utf8_lossy(&out), "a");
    }

    #[test]
    fn test_trim_keeps_complete_multibyte_tail() {
        let mut buf = "abc日".as_bytes().to_vec();
        trim_partial_tail(&mut buf);
        assert_eq!(buf, "abc日".as_bytes());

        let mut cut = "abc日".as_bytes()[..4].to_vec();
        trim_partial_tail(&mut cut);
        assert_eq!(cut, b"abc");
    }

    #[test]
    fn test_trim_leaves_invalid_bytes_alone() {
        // 0xFF is not a truncated sequence; the lossy decode reports it as is
        let mut buf = vec![b'a', 0xFF];
        trim_partial_tail(&mut buf);
        assert_eq!(buf, vec![b'a', 0xFF]);
    }

    #[test]
    fn test_limits_follow_server_config() {
        let config = ServerConfig {
            max_output_bytes: 42,
            timeout: Some(Duration::from_secs(3)),
            ..Default::default()
        };
        let limits = ExecLimits::from(&config);
        assert_eq!(limits.max_output_bytes, 42);
        assert_eq!(limits.timeout, Some(Duration::from_secs(3)));
    }
}
