use std::io::Write;

use anyhow::Context;
use engine_logging::engine_info;
use urlhash_core::{parse_args, ArgsError};
use urlhash_engine::{EngineConfig, EngineHandle};

use crate::output::write_results;

/// Parses `args`, hashes every URL and prints the results to `out`.
///
/// Argument errors are printed to `out` like results are; anything else goes
/// to `diag`. Per-URL failures are part of the output, not an exit failure.
/// Returns the process exit status.
pub fn run<W: Write, D: Write>(args: &[String], out: &mut W, diag: &mut D) -> u8 {
    match execute(args, out) {
        Ok(()) => 0,
        Err(err) => {
            report_failure(&err, out, diag);
            1
        }
    }
}

fn report_failure<W: Write, D: Write>(err: &anyhow::Error, out: &mut W, diag: &mut D) {
    let _ = match err.downcast_ref::<ArgsError>() {
        Some(args_err) => writeln!(out, "{args_err}"),
        None => writeln!(diag, "urlhash: {err:#}"),
    };
}

fn execute<W: Write>(args: &[String], out: &mut W) -> anyhow::Result<()> {
    let invocation = parse_args(args)?;
    engine_info!(
        "hashing {} urls with {} workers",
        invocation.urls.len(),
        invocation.workers
    );

    let engine = EngineHandle::new(EngineConfig::default()).context("starting engine")?;
    let entries = engine
        .run(invocation.urls, invocation.workers.get())
        .context("running fetch pool")?;

    write_results(out, &entries).context("writing results")?;
    Ok(())
}
