use color_eyre::Result;
use macbridge::calendar::{self, create_reminder, ReminderRequest};
use macbridge::Config;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    macbridge::logging::init(&config.log_level)?;

    // Usage errors must surface before the calendar service is touched.
    let args = macbridge::cli_args();
    let request = ReminderRequest::from_args(&args)?;

    let backend = calendar::system_backend()?;
    let saved = create_reminder(&backend, &request, &config.reminder)?;
    tracing::debug!(id = %saved.id, "reminder stored");

    println!("Event created successfully");
    Ok(())
}
