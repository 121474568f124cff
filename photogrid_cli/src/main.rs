mod output;

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use photogrid_lib::render::Render;
use photogrid_lib::session::{Outcome, PendingRequest, SearchPrefs, Session, SessionError};
use photogrid_lib::{Client, PhotoSize, SortOrder};

use crate::output::{JsonRenderer, OutputFormat, TableRenderer};

#[derive(Parser)]
#[command(name = "photogrid")]
#[command(about = "Search a public photo API and browse results page by page")]
struct Cli {
    /// Search term
    term: Option<String>,

    /// Results per page
    #[arg(long, default_value = "25")]
    per_page: i64,

    /// Sort order: relevance, date-posted-desc, date-posted-asc,
    /// interestingness-desc, interestingness-asc
    #[arg(long, default_value = "relevance")]
    sort: String,

    /// Image size: square, thumbnail, small, medium, medium640, large
    #[arg(long, default_value = "medium")]
    size: String,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    output: String,

    /// Keep the session open: n/next, p/prev, q/quit, or a new search term
    #[arg(short, long)]
    interactive: bool,

    /// API key (falls back to the FLICKR_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("photogrid=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .or_else(|| std::env::var("FLICKR_API_KEY").ok())
        .ok_or_else(|| anyhow!("no API key: pass --api-key or set FLICKR_API_KEY"))?;

    let sort = cli
        .sort
        .parse::<SortOrder>()
        .map_err(|()| anyhow!("unknown sort order: {}", cli.sort))?;
    let size = cli
        .size
        .parse::<PhotoSize>()
        .map_err(|()| anyhow!("unknown image size: {}", cli.size))?;
    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::new(&api_key);
    let mut session = Session::new(SearchPrefs {
        per_page: cli.per_page,
        sort,
    });
    let mut renderer: Box<dyn Render> = match format {
        OutputFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
        OutputFormat::Table => Box::new(TableRenderer::new(io::stdout())),
    };

    let term = cli.term.unwrap_or_default();
    let attempt = session.search(&term);
    dispatch(&mut session, &client, renderer.as_mut(), size, attempt).await;

    if cli.interactive {
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let attempt = match line.trim() {
                "q" | "quit" => break,
                "n" | "next" => session.next_page(),
                "p" | "prev" => session.previous_page(),
                other => session.search(other),
            };
            dispatch(&mut session, &client, renderer.as_mut(), size, attempt).await;
        }
    }

    Ok(())
}

/// Executes a pending request (if the user action produced one) and feeds
/// the result back through the session, rendering whatever comes out.
async fn dispatch(
    session: &mut Session,
    client: &Client,
    renderer: &mut dyn Render,
    size: PhotoSize,
    attempt: Result<PendingRequest, SessionError>,
) {
    let pending = match attempt {
        Ok(pending) => pending,
        Err(e) => {
            renderer.status(&e.to_string());
            return;
        }
    };

    let result = client.search(&pending.query).await;
    match session.complete(pending.seq, result) {
        Some(Outcome::Display { decision, page }) => {
            let urls: Vec<String> = page.photo.iter().map(|p| p.source_url(size)).collect();
            renderer.render(&decision, &urls);
        }
        Some(Outcome::Failed { message }) => renderer.status(&message),
        None => {}
    }
}
