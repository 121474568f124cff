//! Search query builder and the [`SortOrder`] enum.

use std::str::FromStr;

use url::Url;

/// Parameters for a photo search request.
///
/// Built with chained `with_*` methods, then serialized onto the endpoint URL
/// by [`SearchQuery::add_to_url`]. The API key, response format, and method
/// name are appended by the client, not here.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    /// Free-text search term.
    pub text: String,
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. Defaults to 25.
    pub per_page: i64,
    /// Result ordering. Defaults to relevance.
    pub sort: SortOrder,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            page: 1,
            per_page: 25,
            sort: SortOrder::default(),
        }
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the result ordering.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("text", self.text.as_str())
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &self.page.to_string())
            .append_pair("sort", &self.sort.to_string());
        url
    }
}

/// Result ordering accepted by the search endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Best match first. This is the default.
    #[default]
    Relevance,
    DatePostedDesc,
    DatePostedAsc,
    InterestingnessDesc,
    InterestingnessAsc,
}
impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Relevance => "relevance",
                SortOrder::DatePostedDesc => "date-posted-desc",
                SortOrder::DatePostedAsc => "date-posted-asc",
                SortOrder::InterestingnessDesc => "interestingness-desc",
                SortOrder::InterestingnessAsc => "interestingness-asc",
            }
        )?;
        Ok(())
    }
}
impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOrder::Relevance),
            "date-posted-desc" => Ok(SortOrder::DatePostedDesc),
            "date-posted-asc" => Ok(SortOrder::DatePostedAsc),
            "interestingness-desc" => Ok(SortOrder::InterestingnessDesc),
            "interestingness-asc" => Ok(SortOrder::InterestingnessAsc),
            _ => Err(()),
        }
    }
}
