use crate::error::{Error, Result};

const USAGE: &str = "Usage: searchsong <song> [artist]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub song: String,
    pub artist: Option<String>,
}

impl SearchRequest {
    /// Build from the arguments after the program name.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let song = args
            .first()
            .cloned()
            .ok_or_else(|| Error::Usage(USAGE.to_string()))?;
        let artist = args.get(1).cloned();

        if args.len() > 2 {
            tracing::warn!(extra = args.len() - 2, "ignoring extra arguments");
        }

        Ok(Self { song, artist })
    }

    pub fn query(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} {}", self.song, artist),
            None => self.song.clone(),
        }
    }
}

/// Percent-encode a query for use as a URL query value.
///
/// Anything outside the unreserved set is escaped, so `&`, `=` and `#` in a
/// title cannot break the URL. The output must decode back to the input.
pub fn encode_query(query: &str) -> Result<String> {
    let encoded = urlencoding::encode(query).into_owned();
    match urlencoding::decode(&encoded) {
        Ok(decoded) if decoded == query => Ok(encoded),
        Ok(_) => Err(Error::Encoding(format!("{query:?} does not round-trip"))),
        Err(e) => Err(Error::Encoding(e.to_string())),
    }
}

pub fn search_url(request: &SearchRequest, storefront: &str) -> Result<String> {
    let term = encode_query(&request.query())?;
    Ok(format!(
        "music://music.apple.com/{storefront}/search?term={term}"
    ))
}
