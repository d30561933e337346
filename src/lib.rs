//! Dispatcher that runs `fishook.sh` for git hooks.
//!
//! The binary forwards its arguments to the script through an interpreter and
//! exits with the script's status. Started under a hook's name
//! (`pre-commit`, `fishook-pre-commit`, ...) it puts that name in front of the
//! arguments first.

pub mod config;
pub mod domain;
pub mod invoke;
pub mod logging;
pub mod script;

pub(crate) mod cli;

pub use cli::Entry;
pub use domain::HookName;

/// Dispatch one invocation and return the exit code to finish with.
///
/// `program` is the name the binary was started as (`argv[0]`); `args` are
/// the remaining arguments, forwarded untouched.
pub fn run<I>(program: &str, args: I) -> i32
where
    I: IntoIterator<Item = std::ffi::OsString>,
{
    cli::dispatch::run(program, args)
}
