use color_eyre::Result;
use macbridge::music::{search_song, SystemLauncher};
use macbridge::Config;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    macbridge::logging::init(&config.log_level)?;

    let args = macbridge::cli_args();
    let launcher = SystemLauncher::new(&config.music.opener);
    let query = search_song(&args, &config.music, &launcher)?;

    println!("Opened Apple Music with search: {query}");
    Ok(())
}
