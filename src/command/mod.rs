//! Running the discovered helper as a subprocess.
//!
//! The helper is executed directly, argv only, with no shell anywhere in
//! the chain: a file path containing spaces or shell metacharacters reaches
//! the helper as one literal argument. Its stderr is merged into stdout and
//! both are captured together with the exit status.

use std::path::Path;
use std::time::{Duration, Instant};

/// How often a bounded wait re-checks the helper for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Why a helper invocation produced no usable result.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("failed to run helper: {0}")]
    Io(#[from] std::io::Error),
    #[error("helper did not finish within {0:?}")]
    TimedOut(Duration),
}

/// The observable result of a finished helper: exit code plus the combined
/// stdout/stderr text.
#[derive(Debug)]
pub(crate) struct HelperRun {
    pub exit_code: i32,
    pub output: String,
}

impl HelperRun {
    fn from_output(output: &std::process::Output) -> Self {
        HelperRun {
            // A signal-killed helper has no code; report it as a failure.
            exit_code: output.status.code().unwrap_or(-1),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        }
    }
}

/// Run `helper` with `args`, waiting for completion.
///
/// With `timeout` set, the helper is polled until the deadline and killed on
/// expiry. A non-zero helper exit is a normal result, not an error.
pub(crate) fn invoke(
    helper: &Path,
    args: &[&str],
    timeout: Option<Duration>,
) -> Result<HelperRun, InvokeError> {
    let expr = duct::cmd(helper, args.iter().copied())
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked();

    let Some(timeout) = timeout else {
        let output = expr.run()?;
        return Ok(HelperRun::from_output(&output));
    };

    let handle = expr.start()?;
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(output) = handle.try_wait()? {
            return Ok(HelperRun::from_output(output));
        }
        if Instant::now() >= deadline {
            handle.kill()?;
            return Err(InvokeError::TimedOut(timeout));
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
