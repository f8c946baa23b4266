use anyhow::Result;
use tracing::info;

use crate::cli::CheckArgs;
use crate::config::WorkcalConfig;
use crate::convert;

/// Run the `check` subcommand.
pub fn run(args: CheckArgs, config: &WorkcalConfig) -> Result<()> {
    let selection = convert::resolve(&args.calendar, config)?;
    let calendar = selection.calendar();
    let date = args.date;

    info!(%date, "checking working-day status");
    if calendar.is_working_day(date) {
        println!("{date} is a working day");
    } else if calendar.is_holiday(date) {
        println!("{date} is a holiday");
    } else {
        println!("{date} is a rest day");
    }
    Ok(())
}
