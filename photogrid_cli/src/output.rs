use std::io::Write;

use photogrid_lib::pagination::NavigationDecision;
use photogrid_lib::render::Render;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct PhotoRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "URL")]
    url: String,
}

fn build_photo_rows(photo_urls: &[String]) -> Vec<PhotoRow> {
    photo_urls
        .iter()
        .enumerate()
        .map(|(i, url)| PhotoRow {
            index: i + 1,
            url: url.clone(),
        })
        .collect()
}

fn navigation_hint(decision: &NavigationDecision) -> String {
    format!(
        "[prev: {}] [next: {}]",
        if decision.previous_enabled { "p" } else { "-" },
        if decision.next_enabled { "n" } else { "-" },
    )
}

/// Prints results as a table followed by the status line and, when
/// navigation applies, a prev/next hint.
pub struct TableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Render for TableRenderer<W> {
    fn render(&mut self, decision: &NavigationDecision, photo_urls: &[String]) {
        if !photo_urls.is_empty() {
            let table = Table::new(build_photo_rows(photo_urls))
                .with(Style::sharp())
                .to_string();
            let _ = writeln!(self.out, "{}", table);
        }
        let _ = writeln!(self.out, "{}", decision.status_text);
        if decision.show_nav {
            let _ = writeln!(self.out, "{}", navigation_hint(decision));
        }
    }

    fn status(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }
}

/// Prints one JSON document per rendered page or status message.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Render for JsonRenderer<W> {
    fn render(&mut self, decision: &NavigationDecision, photo_urls: &[String]) {
        let doc = serde_json::json!({
            "navigation": decision,
            "photos": photo_urls,
        });
        let _ = writeln!(self.out, "{}", doc);
    }

    fn status(&mut self, message: &str) {
        let doc = serde_json::json!({ "status": message });
        let _ = writeln!(self.out, "{}", doc);
    }
}
