use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ShiftArgs;
use crate::config::WorkcalConfig;
use crate::convert;

/// Run the `shift` subcommand.
pub fn run(args: ShiftArgs, config: &WorkcalConfig) -> Result<()> {
    let selection = convert::resolve(&args.calendar, config)?;
    let calendar = selection.calendar();

    let shifted = if args.back {
        calendar.days_before(args.date, args.days)
    } else {
        calendar.days_after(args.date, args.days)
    }
    .with_context(|| {
        let direction = if args.back { "before" } else { "after" };
        format!("cannot shift {} working days {direction} {}", args.days, args.date)
    })?;

    info!(origin = %args.date, days = args.days, back = args.back, result = %shifted, "shifted");
    println!("{shifted}");
    Ok(())
}
