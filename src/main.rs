use std::env;

fn main() {
    // Logging is best-effort; it must not change the exit code.
    let _ = fishook::logging::init_tracing();

    let mut argv = env::args_os();
    let program = argv
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    std::process::exit(fishook::run(&program, argv));
}
