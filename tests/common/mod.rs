// Shared test helpers for integration tests.
// Every test gets its own scratch directory holding a stand-in fishook.sh
// that echoes its arguments, one per line, and exits with $FISHOOK_TEST_EXIT.
#![allow(dead_code)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub const ECHO_SCRIPT: &str = r#"for arg in "$@"; do printf '%s\n' "$arg"; done
exit "${FISHOOK_TEST_EXIT:-0}"
"#;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_fishook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A scratch directory with a script and a config pointing at it.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_script(ECHO_SCRIPT)
    }

    pub fn with_script(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("fishook.sh"), body).expect("failed to write script");
        std::fs::write(
            dir.path().join("fishook.kdl"),
            r#"script "fishook.sh""#,
        )
        .expect("failed to write config");
        Sandbox { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("fishook.kdl")
    }

    /// Write an executable file into the sandbox and return its path.
    pub fn write_executable(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, body).expect("failed to write executable");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod");
        path
    }

    /// A command for the fishook binary wired to this sandbox's config.
    ///
    /// `BASH` is pinned to `sh` so tests do not depend on the caller's shell.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(binary_path());
        cmd.env("FISHOOK_CONFIG", self.config_path())
            .env("BASH", "sh")
            .env_remove("FISHOOK_LOG")
            .env_remove("FISHOOK_TEST_EXIT");
        cmd
    }

    /// Same as [`Sandbox::command`] but started under another program name.
    pub fn command_as(&self, program: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg0(program);
        cmd
    }
}

/// Runs the command with the given stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run(mut cmd: Command, stdin_input: &str) -> (String, String, i32) {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let output = spawn_retrying(&mut cmd)
        .and_then(|mut child| {
            use std::io::ErrorKind;
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Spawn, retrying while the binary is still open for writing elsewhere
/// (ETXTBSY from a freshly copied executable racing a parallel fork).
fn spawn_retrying(cmd: &mut Command) -> std::io::Result<std::process::Child> {
    const ETXTBSY: i32 = 26;
    let mut attempts = 0;
    loop {
        match cmd.spawn() {
            Err(e) if e.raw_os_error() == Some(ETXTBSY) && attempts < 20 => {
                attempts += 1;
                std::thread::sleep(std::time::Duration::from_millis(50));
            }
            result => return result,
        }
    }
}

/// Split the echo script's output back into the arguments it received.
pub fn received_args(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}
