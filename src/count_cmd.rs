use anyhow::Result;
use tracing::info;

use crate::cli::CountArgs;
use crate::config::WorkcalConfig;
use crate::convert;

/// Run the `count` subcommand.
pub fn run(args: CountArgs, config: &WorkcalConfig) -> Result<()> {
    let selection = convert::resolve(&args.calendar, config)?;
    let calendar = selection.calendar();

    let count = calendar.workdays_between(args.start, args.end);
    info!(start = %args.start, end = %args.end, count, "counted working days");
    println!("{count}");
    Ok(())
}
