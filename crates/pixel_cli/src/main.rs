//! wm-pixel binary.
//!
//! Evaluates a single pixel geometry transform and prints the result on
//! stdout. Logs go to stderr, filtered by `WAYMARK_LOG`.

mod cli;

use clap::Parser;
use cli::Cli;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	debug!(command = ?cli.command, format = ?cli.format, "evaluating transform");
	let outcome = cli.command.evaluate();
	debug!(%outcome, "transform evaluated");

	println!("{}", outcome.render(cli.format)?);
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("WAYMARK_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("wm_pixel=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
