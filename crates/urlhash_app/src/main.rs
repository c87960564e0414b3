mod app;
mod output;

use std::process::ExitCode;

fn main() -> ExitCode {
    engine_logging::initialize_stderr(engine_logging::level_from_env());

    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(app::run(
        &args,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr(),
    ))
}
