//! The interpreter child process and its frame protocol.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::{ExecValue, HostError};

const DRIVER: &str = include_str!("../py/driver.py");

/// Grace period for the child to exit once its stdin closes.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// A running interpreter process.
///
/// One frame in flight at a time; callers serialize access (see
/// [`EngineHandle`](crate::EngineHandle)).
#[derive(Debug)]
pub struct PyChild {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl PyChild {
    /// Spawn the interpreter and load the execution driver.
    ///
    /// The child's stderr is inherited so user-level prints and
    /// interpreter noise land on the host's stderr, away from the
    /// frame channel.
    pub fn spawn(python_bin: &str) -> Result<Self, HostError> {
        debug!(python_bin, "spawning interpreter");
        let mut child = Command::new(python_bin)
            .arg("-u")
            .arg("-c")
            .arg(DRIVER)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(HostError::Spawn)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| HostError::Protocol("stdin was not piped".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| HostError::Protocol("stdout was not piped".to_string()))?;

        Ok(Self {
            child,
            stdin: Some(stdin),
            stdout: BufReader::new(stdout),
        })
    }

    /// Execute one frame of source text in the persistent namespace.
    ///
    /// Returns the string form of the trailing expression's value, or
    /// `None` when the source ends in a statement. Interpreter syntax
    /// and runtime failures come back as [`HostError::Runtime`] with
    /// the interpreter's own diagnostic text.
    pub fn execute(&mut self, source: &str) -> Result<ExecValue, HostError> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| HostError::Protocol("interpreter stdin closed".to_string()))?;

        stdin
            .write_all(format!("RUN {}\n", source.len()).as_bytes())
            .and_then(|()| stdin.write_all(source.as_bytes()))
            .and_then(|()| stdin.flush())
            .map_err(HostError::Channel)?;

        let mut header = String::new();
        self.stdout
            .read_line(&mut header)
            .map_err(HostError::Channel)?;
        if header.is_empty() {
            return Err(HostError::Protocol("interpreter exited".to_string()));
        }

        let mut parts = header.split_whitespace();
        let status = parts
            .next()
            .ok_or_else(|| HostError::Protocol(format!("bad response header {header:?}")))?
            .to_string();
        let len: usize = parts
            .next()
            .and_then(|raw| raw.parse().ok())
            .filter(|_| parts.next().is_none())
            .ok_or_else(|| HostError::Protocol(format!("bad response header {header:?}")))?;

        let mut payload = vec![0u8; len];
        std::io::Read::read_exact(&mut self.stdout, &mut payload).map_err(HostError::Channel)?;
        let text = String::from_utf8(payload)
            .map_err(|_| HostError::Protocol("non-UTF-8 response payload".to_string()))?;

        match status.as_str() {
            "VAL" => Ok(Some(text)),
            "NONE" => Ok(None),
            "ERR" => Err(HostError::Runtime(text)),
            other => Err(HostError::Protocol(format!("unknown status {other:?}"))),
        }
    }
}

impl Drop for PyChild {
    fn drop(&mut self) {
        // Closing stdin ends the driver loop; give the child a moment
        // before resorting to kill.
        drop(self.stdin.take());
        match self.child.wait_timeout(SHUTDOWN_GRACE) {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!("interpreter did not exit in time, killing");
                self.child.kill().ok();
                self.child.wait().ok();
            }
            Err(err) => {
                warn!(%err, "wait for interpreter failed, killing");
                self.child.kill().ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python_available() -> bool {
        Command::new("python3")
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    macro_rules! require_python {
        () => {
            if !python_available() {
                eprintln!("python3 not available, skipping");
                return;
            }
        };
    }

    #[test]
    fn trailing_expression_value_is_returned() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        let value = child.execute("1+1").expect("execute");
        assert_eq!(value.as_deref(), Some("2"));
    }

    #[test]
    fn statement_only_source_has_no_value() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        let value = child.execute("x = 5").expect("execute");
        assert_eq!(value, None);
    }

    #[test]
    fn namespace_persists_across_frames() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        child.execute("greeting = 'hello'").expect("assign");
        let value = child.execute("greeting + ' world'").expect("read back");
        assert_eq!(value.as_deref(), Some("hello world"));
    }

    #[test]
    fn multiline_values_survive_framing() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        let value = child.execute("'a\\nb\\nc'").expect("execute");
        assert_eq!(value.as_deref(), Some("a\nb\nc"));
    }

    #[test]
    fn runtime_failure_carries_diagnostic() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        let err = child.execute("missing_name").expect_err("should raise");
        match err {
            HostError::Runtime(message) => assert!(message.contains("NameError")),
            other => panic!("expected runtime error, got {other:?}"),
        }
    }

    #[test]
    fn syntax_failure_carries_diagnostic() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        let err = child.execute("def = 1").expect_err("should raise");
        match err {
            HostError::Runtime(message) => assert!(message.contains("SyntaxError")),
            other => panic!("expected runtime error, got {other:?}"),
        }
    }

    #[test]
    fn child_survives_a_failed_frame() {
        require_python!();
        let mut child = PyChild::spawn("python3").expect("spawn");
        child.execute("boom(").expect_err("syntax error");
        let value = child.execute("'still alive'").expect("next frame works");
        assert_eq!(value.as_deref(), Some("still alive"));
    }
}
