// Rust guideline compliant 2026-02-09

//! Page bookkeeping for paginated listings.

/// One entry of an RFC 8288 `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHeader {
    /// Target URL.
    pub url: String,
    /// Relation type (`next`, `last`, ...).
    pub rel: String,
}

/// Parses a `Link` header value into its entries.
///
/// Malformed entries are skipped.
#[must_use]
pub fn parse_link_header(header: &str) -> Vec<LinkHeader> {
    header
        .split(',')
        .filter_map(|part| {
            let mut url = None;
            let mut rel = None;
            for piece in part.trim().split(';') {
                let piece = piece.trim();
                if piece.starts_with('<') && piece.ends_with('>') {
                    url = Some(piece.trim_matches(&['<', '>'][..]).to_string());
                } else if let Some(value) = piece.strip_prefix("rel=") {
                    rel = Some(value.trim_matches('"').to_string());
                }
            }
            match (url, rel) {
                (Some(url), Some(rel)) => Some(LinkHeader { url, rel }),
                _ => None,
            }
        })
        .collect()
}

/// Returns whether a `Link` header advertises a next page.
#[must_use]
pub fn has_next_page(header: Option<&str>) -> bool {
    header
        .map(|value| parse_link_header(value).iter().any(|link| link.rel == "next"))
        .unwrap_or(false)
}

/// Tracks progress through a page-numbered listing.
#[derive(Debug, Clone)]
pub struct Pager {
    per_page: u32,
    max_pages: u32,
    page: u32,
    done: bool,
}

impl Pager {
    /// Creates a pager starting at page 1.
    #[must_use]
    pub fn new(per_page: u32, max_pages: u32) -> Self {
        Self {
            per_page: per_page.max(1),
            max_pages: max_pages.max(1),
            page: 1,
            done: false,
        }
    }

    /// Returns the page to request next, or `None` when the listing is exhausted.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        if self.done || self.page > self.max_pages {
            None
        } else {
            Some(self.page)
        }
    }

    /// Returns the page size.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Records a fetched page.
    ///
    /// The listing ends on a short page, or when the server sent a `Link`
    /// header without a `next` relation.
    pub fn record(&mut self, items: usize, link: Option<&str>) {
        let short_page = items < self.per_page as usize;
        let link_says_last = link.is_some() && !has_next_page(link);
        if short_page || link_says_last {
            self.done = true;
        }
        self.page += 1;
    }
}
