use std::cell::RefCell;

use macbridge::config::MusicConfig;
use macbridge::music::{search_song, Launcher};
use macbridge::Error;

#[derive(Default)]
struct RecordingLauncher {
    fail: bool,
    opened: RefCell<Vec<String>>,
}

impl Launcher for RecordingLauncher {
    fn open(&self, url: &str) -> macbridge::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(Error::Launch("open exited with exit status: 1".to_string()));
        }
        Ok(())
    }
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn opens_search_url_and_returns_plain_query() {
    let launcher = RecordingLauncher::default();
    let query = search_song(
        &args(&["Bohemian Rhapsody", "Queen"]),
        &MusicConfig::default(),
        &launcher,
    )
    .unwrap();

    assert_eq!(query, "Bohemian Rhapsody Queen");
    assert_eq!(
        *launcher.opened.borrow(),
        vec!["music://music.apple.com/us/search?term=Bohemian%20Rhapsody%20Queen".to_string()]
    );
}

#[test]
fn storefront_comes_from_config() {
    let launcher = RecordingLauncher::default();
    let config = MusicConfig {
        storefront: "fi".to_string(),
        ..MusicConfig::default()
    };
    search_song(&args(&["Sandstorm"]), &config, &launcher).unwrap();

    assert_eq!(
        launcher.opened.borrow()[0],
        "music://music.apple.com/fi/search?term=Sandstorm"
    );
}

#[test]
fn no_arguments_launches_nothing() {
    let launcher = RecordingLauncher::default();
    let err = search_song(&[], &MusicConfig::default(), &launcher).unwrap_err();

    assert!(matches!(err, Error::Usage(_)));
    assert!(launcher.opened.borrow().is_empty());
}

#[test]
fn launch_failure_propagates() {
    let launcher = RecordingLauncher {
        fail: true,
        ..Default::default()
    };
    let err = search_song(&args(&["Song"]), &MusicConfig::default(), &launcher).unwrap_err();
    assert!(matches!(err, Error::Launch(_)));
}

#[test]
fn encoded_term_decodes_to_query() {
    let launcher = RecordingLauncher::default();
    let query = search_song(&args(&["AC/DC: T.N.T.", "100% Live"]), &MusicConfig::default(), &launcher)
        .unwrap();

    let url = launcher.opened.borrow()[0].clone();
    let term = url.split_once("?term=").unwrap().1;
    assert_eq!(urlencoding::decode(term).unwrap(), query);
}
