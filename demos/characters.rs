//! Walks a character and their related collections.
//!
//! Looks up a character by name, then lists their comics, events and series,
//! and finally shows conditional fetching with the returned `etag`.
//!
//! Requires `MARVEL_PUBLIC_KEY` and `MARVEL_PRIVATE_KEY`. Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example characters --features client,tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=characters.log RUST_LOG=info cargo run --example characters --features client,tracing
//! ```

use std::fs::File;

use marvel_client_sdk::characters::Character;
use marvel_client_sdk::characters::types::request::CharacterParameter;
use marvel_client_sdk::client::Client;
use marvel_client_sdk::comics::Comic;
use marvel_client_sdk::comics::types::request::{ComicOrder, ComicParameter, ComicRelation};
use marvel_client_sdk::error::{Kind, Status};
use marvel_client_sdk::events::Event;
use marvel_client_sdk::events::types::request::{EventParameter, EventRelation};
use marvel_client_sdk::request::Filter;
use marvel_client_sdk::series::Series;
use marvel_client_sdk::series::types::request::{SeriesParameter, SeriesRelation};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::from_env()?;
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Spider-Man".to_owned());

    let request = client
        .request::<Character>()
        .with_parameters(&[CharacterParameter::Name(name.clone())]);
    let response = client.send(request).await?;

    if let Some(text) = &response.attribution_text {
        info!(attribution = %text);
    }

    let Some(id) = response.results().first().and_then(|c| c.id) else {
        warn!(name = %name, "character not found");
        return Ok(());
    };
    info!(name = %name, id, "found character");

    let comics = client
        .request_filtered::<Comic>(Filter::new(ComicRelation::Character, id))
        .with_parameters(&[
            ComicParameter::NoVariants(true),
            ComicParameter::OrderBy(vec![ComicOrder::OnsaleDateDescending]),
            ComicParameter::Limit(5),
        ]);
    match client.send(comics).await {
        Ok(page) => {
            for comic in page.results() {
                info!(endpoint = "comics", title = ?comic.title, issue = ?comic.issue_number);
            }
        }
        Err(e) => error!(endpoint = "comics", error = %e),
    }

    let events = client
        .request_filtered::<Event>(Filter::new(EventRelation::Character, id))
        .with_parameters(&[EventParameter::Limit(5)]);
    match client.send(events).await {
        Ok(page) => {
            for event in page.results() {
                info!(endpoint = "events", title = ?event.title, start = ?event.start);
            }
        }
        Err(e) => error!(endpoint = "events", error = %e),
    }

    let series = client
        .request_filtered::<Series>(Filter::new(SeriesRelation::Character, id))
        .with_parameters(&[SeriesParameter::Limit(5)]);
    match client.send(series).await {
        Ok(page) => {
            for series in page.results() {
                info!(endpoint = "series", title = ?series.title, start_year = ?series.start_year);
            }
        }
        Err(e) => error!(endpoint = "series", error = %e),
    }

    // Unchanged content comes back as 304 with an empty body.
    if let Some(etag) = &response.etag {
        let again = client
            .request::<Character>()
            .with_parameters(&[CharacterParameter::Name(name.clone())]);
        match client.send_if_none_match(again, etag).await {
            Ok(page) => info!(endpoint = "character", etag = ?page.etag, "content changed"),
            Err(e)
                if e.kind() == Kind::Status
                    && e.downcast_ref::<Status>().map(|s| s.status_code) == Some(304) =>
            {
                info!(endpoint = "character", "not modified");
            }
            Err(e) => error!(endpoint = "character", error = %e),
        }
    }

    Ok(())
}
