//! Page-number pagination for list views.
//!
//! A list request arrives with three untrusted query parameters: `page`,
//! `size` and `count` (how many page links the pager shows). They are
//! normalized into a [`PageRequest`] before anything touches the database,
//! which is enough to compute the row offset. Once the row-count query has
//! run, [`PageRequest::with_total`] produces the full [`Pagination`] that
//! the view renders: total pages, the page-link window and link URIs.
//!
//! Nothing in here fails. Missing, blank or non-numeric parameters fall
//! back to the configured defaults and out-of-range values are clamped.

use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};
use ts_rs::TS;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_SIZE: u64 = 10;
pub const DEFAULT_COUNT: u64 = 10;
pub const MAX_SIZE: u64 = 100;
pub const MAX_COUNT: u64 = 50;

/// What to do when the requested page lies past the last page.
///
/// The page is only known to be out of range after the count query has
/// run, so this decides whether the bounded fetch is issued for a clamped
/// page or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Move `page` down to the last page and fetch that page.
    #[default]
    Clamp,
    /// Keep the requested page and return no rows.
    Empty,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "empty" => Ok(Self::Empty),
            other => Err(format!(
                "unknown overflow policy '{}', expected 'clamp' or 'empty'",
                other
            )),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => f.write_str("clamp"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

/// Paging defaults and limits, loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Rows per page when `size` is missing or unparseable
    pub default_size: u64,

    /// Page links shown when `count` is missing or unparseable
    pub default_count: u64,

    /// Upper bound for `size`
    pub max_size: u64,

    /// Upper bound for `count`
    pub max_count: u64,

    pub overflow: OverflowPolicy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            default_count: DEFAULT_COUNT,
            max_size: MAX_SIZE,
            max_count: MAX_COUNT,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl PageConfig {
    /// Turns raw query parameters into a bounded [`PageRequest`].
    ///
    /// Each value is clamped to at least 1; `size` and `count` are also
    /// capped at `max_size` and `max_count`. Absent, blank and non-numeric
    /// values use the defaults.
    pub fn normalize(&self, raw: &RawPageParams) -> PageRequest {
        let max_size = self.max_size.max(1);
        let max_count = self.max_count.max(1);

        let page = parse_param(raw.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let size = parse_param(raw.size.as_deref())
            .unwrap_or(self.default_size)
            .clamp(1, max_size);
        let count = parse_param(raw.count.as_deref())
            .unwrap_or(self.default_count)
            .clamp(1, max_count);

        PageRequest { page, size, count }
    }
}

/// Parses one query value; `None` means "use the default".
fn parse_param(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i128>().ok())
        .map(|v| v.clamp(1, u64::MAX as i128) as u64)
}

/// Paging query parameters exactly as the client sent them.
///
/// Kept as strings so that a malformed value degrades to a default instead
/// of rejecting the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPageParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub count: Option<String>,
}

impl RawPageParams {
    /// Collects paging values from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins and unrelated keys are
    /// ignored, so no query string can make this fail.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut raw.page,
                "size" => &mut raw.size,
                "count" => &mut raw.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

/// A normalized page request. The total row count is not known yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub count: u64,
}

impl PageRequest {
    /// Rows to skip before the requested page: `(page - 1) * size`.
    pub fn offset(&self) -> u64 {
        compute_offset(self.page, self.size)
    }

    /// Maximum rows to fetch.
    pub fn limit(&self) -> u64 {
        self.size
    }

    /// Query parameters that normalize back to this request.
    pub fn to_raw(&self) -> RawPageParams {
        RawPageParams {
            page: Some(self.page.to_string()),
            size: Some(self.size.to_string()),
            count: Some(self.count.to_string()),
        }
    }

    /// Link template without `page`; see [`build_page_uri`].
    pub fn page_uri(&self, base_path: &str) -> String {
        build_page_uri(base_path, self.size, self.count)
    }

    /// Enriches the request with the result of the count query.
    pub fn with_total(self, total_count: u64, policy: OverflowPolicy) -> Pagination {
        let total_page = total_count.div_ceil(self.size);

        let page = match policy {
            OverflowPolicy::Clamp if total_page >= 1 && self.page > total_page => total_page,
            _ => self.page,
        };

        let window = page_window(page, self.count, total_page);

        Pagination {
            page,
            size: self.size,
            count: self.count,
            total_count,
            total_page,
            offset: compute_offset(page, self.size),
            start_page: window.map(|w| w.start_page),
            end_page: window.map(|w| w.end_page),
        }
    }
}

fn compute_offset(page: u64, size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(size)
}

/// Pagination state handed to the view once the total is known.
///
/// `start_page`/`end_page` are `None` when there are no pages to link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Pagination {
    pub page: u64,
    pub size: u64,
    pub count: u64,
    pub total_count: u64,
    pub total_page: u64,
    pub offset: u64,
    pub start_page: Option<u64>,
    pub end_page: Option<u64>,
}

impl Pagination {
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.size
    }

    /// True when `page` lies past the last page, which includes every page
    /// of an empty result. No rows exist there, so the fetch can be skipped.
    pub fn is_beyond_last_page(&self) -> bool {
        self.page > self.total_page
    }

    pub fn window(&self) -> Option<PageWindow> {
        match (self.start_page, self.end_page) {
            (Some(start_page), Some(end_page)) => Some(PageWindow {
                start_page,
                end_page,
            }),
            _ => None,
        }
    }

    pub fn page_uri(&self, base_path: &str) -> String {
        build_page_uri(base_path, self.size, self.count)
    }

    /// Per-page links for the window plus first/prev/next/last shortcuts.
    pub fn links(&self, base_path: &str) -> PageLinks {
        let template = self.page_uri(base_path);
        let link = |page: u64| format!("{}&page={}", template, page);

        if self.total_page == 0 {
            return PageLinks::default();
        }

        let pages = self
            .window()
            .map(|w| {
                w.pages()
                    .map(|page| PageLink {
                        page,
                        uri: link(page),
                        current: page == self.page,
                    })
                    .collect()
            })
            .unwrap_or_default();

        PageLinks {
            first: Some(link(1)),
            prev: (self.page > 1).then(|| link((self.page - 1).min(self.total_page))),
            next: (self.page < self.total_page).then(|| link(self.page + 1)),
            last: Some(link(self.total_page)),
            pages,
        }
    }
}

/// Inclusive range of page numbers shown as links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_page: u64,
    pub end_page: u64,
}

impl PageWindow {
    pub fn pages(&self) -> RangeInclusive<u64> {
        self.start_page..=self.end_page
    }

    pub fn width(&self) -> u64 {
        self.end_page - self.start_page + 1
    }

    pub fn contains(&self, page: u64) -> bool {
        self.pages().contains(&page)
    }
}

/// Centers a window of `count` links on `page`, kept inside `[1, total_page]`.
///
/// A window that would run past the last page is shifted back so it keeps
/// its width. Pages past the end anchor the window on the last page.
pub fn page_window(page: u64, count: u64, total_page: u64) -> Option<PageWindow> {
    if total_page == 0 {
        return None;
    }

    let count = count.max(1);
    let anchor = page.clamp(1, total_page);

    let mut start_page = anchor.saturating_sub(count / 2).max(1);
    let mut end_page = start_page.saturating_add(count - 1);
    if end_page > total_page {
        end_page = total_page;
        start_page = end_page.saturating_sub(count - 1).max(1);
    }

    Some(PageWindow {
        start_page,
        end_page,
    })
}

/// Builds `<base_path>?size=<size>&count=<count>`.
///
/// `page` is left out on purpose; the pager appends `&page=N` per link.
pub fn build_page_uri(base_path: &str, size: u64, count: u64) -> String {
    format!("{}?size={}&count={}", base_path, size, count)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PageLink {
    pub page: u64,
    pub uri: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PageLinks {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
    pub pages: Vec<PageLink>,
}
