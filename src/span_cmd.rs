//! Span command: reconcile a start/end pair and print the triple.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use orrery_span::reconcile;

use crate::cli::SpanArgs;
use crate::config::OrreryConfig;

/// Run the span reconciliation command.
pub fn run(args: SpanArgs) -> Result<()> {
    let _cmd = info_span!("span").entered();

    let config = OrreryConfig::load(&args.config)?;
    let span_config = config.span.to_config();

    let reconciled = reconcile(&args.start, &args.end, &span_config)
        .context("failed to reconcile date span")?;
    let span = reconciled.span;

    info!(start = %span.start(), end = %span.end(), days = span.days(), "span reconciled");

    println!("start  {}", span.start());
    println!("end    {}", span.end());
    println!("days   {}", span.days());
    if reconciled.refetch_needed {
        println!("ephemerides for any previous span are stale; fetch this span");
    }

    Ok(())
}
