pub mod launcher;
pub mod search;

pub use launcher::{Launcher, SystemLauncher};
pub use search::{encode_query, search_url, SearchRequest};

use crate::config::MusicConfig;
use crate::error::Result;

/// Parse `<song> [artist]`, open the search URL and return the unencoded
/// query for the confirmation line.
pub fn search_song<L: Launcher>(args: &[String], config: &MusicConfig, launcher: &L) -> Result<String> {
    let request = SearchRequest::from_args(args)?;
    let url = search_url(&request, &config.storefront)?;
    tracing::info!(%url, "opening Apple Music search");
    launcher.open(&url)?;
    Ok(request.query())
}
