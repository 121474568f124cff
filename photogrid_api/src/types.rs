//! Response types returned by the search endpoint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host serving the image files referenced by search results.
const IMAGE_BASE_URL: &str = "https://live.staticflickr.com";

/// Top-level response envelope, discriminated by the `stat` field.
#[derive(Serialize, Deserialize)]
#[serde(tag = "stat")]
pub enum SearchResponse {
    /// Successful search with one page of results.
    #[serde(rename = "ok")]
    Ok { photos: PhotoPage },

    /// API-reported failure. The message is meant for the user.
    #[serde(rename = "fail")]
    Fail {
        message: String,
        #[serde(default)]
        code: i64,
    },
}

/// One page of search results together with the server's paging counts.
///
/// The counts describe the whole result set: `pages == ceil(total / perpage)`
/// and `page <= pages` whenever `pages > 0`. That invariant originates on the
/// server and is assumed here, not enforced.
#[derive(Serialize, Deserialize, Clone)]
pub struct PhotoPage {
    /// Page this response covers (1-indexed).
    pub page: i64,
    /// Total number of pages in the result set.
    pub pages: i64,
    /// Results per page the server applied.
    pub perpage: i64,
    /// Total number of matching photos.
    pub total: i64,
    /// Photos on this page.
    pub photo: Vec<Photo>,
}

/// A single search result. Carries just enough to derive the image URL.
#[derive(Serialize, Deserialize, Clone)]
pub struct Photo {
    pub id: String,
    pub secret: String,
    pub server: String,
    /// Title as entered by the uploader. Not always present.
    #[serde(default)]
    pub title: Option<String>,
}

impl Photo {
    /// Derives the image URL for this photo at the requested size:
    /// `https://<image-host>/<server>/<id>_<secret><suffix>.jpg`.
    pub fn source_url(&self, size: PhotoSize) -> String {
        format!(
            "{}/{}/{}_{}{}.jpg",
            IMAGE_BASE_URL,
            self.server,
            self.id,
            self.secret,
            size.suffix()
        )
    }
}

/// Image size variant, selecting the filename suffix in derived URLs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoSize {
    /// 75x75 crop (`_s`).
    Square,
    /// 100px longest side (`_t`).
    Thumbnail,
    /// 240px longest side (`_m`).
    Small,
    /// 500px longest side, no suffix. This is the default.
    #[default]
    Medium,
    /// 640px longest side (`_z`).
    Medium640,
    /// 1024px longest side (`_b`).
    Large,
}

impl PhotoSize {
    /// Filename suffix for this size. Empty for the default size.
    pub fn suffix(&self) -> &'static str {
        match self {
            PhotoSize::Square => "_s",
            PhotoSize::Thumbnail => "_t",
            PhotoSize::Small => "_m",
            PhotoSize::Medium => "",
            PhotoSize::Medium640 => "_z",
            PhotoSize::Large => "_b",
        }
    }
}
impl std::fmt::Display for PhotoSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PhotoSize::Square => "square",
                PhotoSize::Thumbnail => "thumbnail",
                PhotoSize::Small => "small",
                PhotoSize::Medium => "medium",
                PhotoSize::Medium640 => "medium640",
                PhotoSize::Large => "large",
            }
        )
    }
}
impl FromStr for PhotoSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(PhotoSize::Square),
            "thumbnail" => Ok(PhotoSize::Thumbnail),
            "small" => Ok(PhotoSize::Small),
            "medium" => Ok(PhotoSize::Medium),
            "medium640" => Ok(PhotoSize::Medium640),
            "large" => Ok(PhotoSize::Large),
            _ => Err(()),
        }
    }
}
