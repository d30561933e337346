use std::ffi::OsString;

use crate::cli::Entry;
use crate::config::Config;
use crate::invoke;
use crate::script;

/// Exit code when the config file cannot be loaded.
pub const EXIT_CONFIG_ERROR: i32 = 1;

/// Run one dispatch: classify the entry, build the argument list, locate the
/// script and run it. Returns the exit code the process should finish with.
///
/// Errors are reported on stderr as diagnostics; they never turn into a
/// zero exit.
pub fn run<I>(program: &str, args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let entry = Entry::from_program(program);
    let script_args = entry.script_args(args);
    tracing::debug!(?entry, program, "dispatching");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            report(e);
            return EXIT_CONFIG_ERROR;
        }
    };

    let script = config.script.unwrap_or_else(script::resolve);
    let interpreter = invoke::interpreter_from_env(config.interpreter.as_deref());

    match invoke::run_script(&interpreter, &script, &script_args) {
        Ok(code) => code,
        Err(e) => {
            let code = e.exit_code();
            report(e);
            code
        }
    }
}

fn report<E>(error: E)
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(error));
}
