use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Environment variable naming the interpreter executable.
pub const INTERPRETER_ENV: &str = "BASH";

/// Interpreter used when neither `$BASH` nor the config names one.
pub const DEFAULT_INTERPRETER: &str = "bash";

/// Shell exit code for "command not found".
pub const EXIT_NOT_FOUND: i32 = 127;

/// Shell exit code for "found but could not be executed".
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// The interpreter could not be started.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InvokeError {
    #[error("failed to run {interpreter}")]
    #[diagnostic(help("set BASH to the interpreter that should run fishook.sh"))]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },
}

impl InvokeError {
    /// Exit code the shell would report for the same failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            InvokeError::Spawn { source, .. } if source.kind() == ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            InvokeError::Spawn { .. } => EXIT_CANNOT_EXECUTE,
        }
    }
}

/// Pick the interpreter: `$BASH`, then the configured one, then `bash`.
///
/// An empty `$BASH` counts as unset.
pub fn select_interpreter(env_value: Option<OsString>, configured: Option<&str>) -> OsString {
    match env_value {
        Some(value) if !value.is_empty() => value,
        _ => OsString::from(configured.unwrap_or(DEFAULT_INTERPRETER)),
    }
}

/// [`select_interpreter`] reading `$BASH` from the process environment.
pub fn interpreter_from_env(configured: Option<&str>) -> OsString {
    select_interpreter(std::env::var_os(INTERPRETER_ENV), configured)
}

/// Run `<interpreter> <script> <args...>` with inherited stdio and wait for it.
///
/// Returns the child's exit code (see [`exit_code`]).
pub fn run_script(
    interpreter: &OsStr,
    script: &Path,
    args: &[OsString],
) -> Result<i32, InvokeError> {
    tracing::debug!(
        interpreter = %interpreter.to_string_lossy(),
        script = %script.display(),
        argc = args.len(),
        "spawning hook script"
    );

    let status = Command::new(interpreter)
        .arg(script)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| InvokeError::Spawn {
            interpreter: interpreter.to_string_lossy().into_owned(),
            source,
        })?;

    let code = exit_code(status);
    tracing::debug!(code, "hook script exited");
    Ok(code)
}

/// Map a child's status to our own exit code.
///
/// Normal exit → its code. Killed by signal N → `128 + N`, as shells report it.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
