// src/fetch.rs
//
// Blocking HTTPS GET for the three sheet exports. One worker thread per
// source; results come back on a channel as each one finishes.

use std::{
    fmt, thread,
    sync::{mpsc, Arc},
};

use reqwest::blocking::Client;

use crate::{
    config::{consts::USER_AGENT, options::AppOptions},
    progress::Progress,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    Standings,
    TeamStats,
    Games,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Standings, Source::TeamStats, Source::Games];

    pub fn label(self) -> &'static str {
        match self {
            Source::Standings => "standings",
            Source::TeamStats => "team_stats",
            Source::Games     => "games",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {code} from {url}")]
    Status { code: u16, url: String },
    #[error("client setup failed: {0}")]
    Setup(String),
}

/// One finished download.
pub struct Fetched {
    pub source: Source,
    pub result: Result<String, FetchError>,
}

pub fn client(opts: &AppOptions) -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(opts.net.timeout())
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` and return the body as text. Non-2xx is an error.
pub fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { code: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Start one worker per requested source and return the receiving end.
/// Exactly one `Fetched` arrives per entry in `sources`.
/// `notify` runs after each send (the GUI uses it to request a repaint).
pub fn spawn_all(
    opts: &AppOptions,
    sources: &[Source],
    notify: Option<Notify>,
) -> mpsc::Receiver<Fetched> {
    let (tx, rx) = mpsc::channel::<Fetched>();

    let client = match client(opts) {
        Ok(c) => c,
        Err(e) => {
            loge!("Fetch: could not build client: {e}");
            for &source in sources {
                let err = FetchError::Setup(e.to_string());
                let _ = tx.send(Fetched { source, result: Err(err) });
            }
            if let Some(n) = &notify { n(); }
            return rx;
        }
    };

    for &source in sources {
        let tx = tx.clone();
        let client = client.clone();
        let url = s!(opts.url(source));
        let notify = notify.clone();

        thread::spawn(move || {
            logd!("Fetch: begin {source} {url}");
            let result = fetch_text(&client, &url);
            match &result {
                Ok(text) => logf!("Fetch: OK {source} ({} bytes)", text.len()),
                Err(e) => loge!("Fetch: {source} failed: {e}"),
            }
            let _ = tx.send(Fetched { source, result });
            if let Some(n) = notify { n(); }
        });
    }

    rx
}

/// Blocking variant: wait for every requested source, reporting as they land.
pub fn fetch_all(
    opts: &AppOptions,
    sources: &[Source],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<Fetched> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    let rx = spawn_all(opts, sources, None);
    let mut out = Vec::with_capacity(sources.len());

    for fetched in rx.iter().take(sources.len()) {
        if let Some(p) = progress.as_deref_mut() {
            match &fetched.result {
                Ok(_) => p.item_done(fetched.source),
                Err(e) => p.item_failed(fetched.source, &e.to_string()),
            }
        }
        out.push(fetched);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}
