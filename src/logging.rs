use anyhow::{Context, Result};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::{self, format::FmtSpan};

use crate::Args;

/// Install the global subscriber. Events go to stderr so stdout only ever
/// carries the descriptor.
pub fn setup_logging(args: &Args) -> Result<()> {
    let filter_level = if args.quiet {
        Level::ERROR
    } else if args.verbose >= 2 {
        Level::TRACE
    } else if args.verbose == 1 {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(format!("gluster_repo_resolver={filter_level}"))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .without_time();

    let subscriber: Box<dyn Subscriber + Send + Sync> = if args.json {
        Box::new(builder.json().flatten_event(true).finish())
    } else {
        Box::new(builder.finish())
    };

    tracing::subscriber::set_global_default(subscriber).context("set tracing subscriber")
}
