//! Windowed page-number lists for the image listing.
//!
//! Given 1-based pagination metadata, produces up to 9 display entries: a
//! window of pages around the current one, with the outermost slots replaced
//! by the first/last page plus an ellipsis when the window is clipped.

use serde::Serialize;

/// One entry in the page-link strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    /// A clickable page number
    Page {
        /// 1-based display label
        label: String,
        /// 0-based page index
        index: usize,
        current: bool,
        /// Query-string href preserving all other parameters
        href: String,
    },
    /// A non-clickable gap marker
    Ellipsis,
}

impl PageLink {
    /// Display label (`"..."` for the ellipsis).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Page { label, .. } => label,
            Self::Ellipsis => "...",
        }
    }
}

/// Build the page-link strip for a listing with `total` items of `size` per
/// page, currently showing 1-based page `page`.
///
/// `base_params` are the current query parameters; each href keeps them all
/// and overwrites only the `page` parameter (1-based on the wire).
#[must_use]
pub fn page_links(
    total: usize,
    page: usize,
    size: usize,
    base_params: &[(String, String)],
) -> Vec<PageLink> {
    if size == 0 || total == 0 {
        return Vec::new();
    }
    let total_pages = (total + size - 1) / size;
    let page_index = page.saturating_sub(1);

    // Aim for 4 pages before and 5 at/after the current one, shifting the
    // window instead of shrinking it at either boundary.
    let mut start = page_index as isize - 4;
    let mut end = page_index as isize + 5;
    if start < 0 {
        end -= start;
        start = 0;
    }
    if end > total_pages as isize {
        start -= end - total_pages as isize;
        end = total_pages as isize;
        start = start.max(0);
    }

    let make_page = |index: usize| PageLink::Page {
        label: (index + 1).to_string(),
        index,
        current: index == page_index,
        href: href_for(base_params, index + 1),
    };

    let mut links: Vec<PageLink> = (start as usize..end as usize).map(make_page).collect();

    // Clipped at the tail: the 8th slot becomes an ellipsis and the 9th is
    // forced to the final page.
    let last_index = end as usize - 1;
    if last_index != total_pages - 1 && links.len() == 9 {
        links[7] = PageLink::Ellipsis;
        links[8] = make_page(total_pages - 1);
    }

    // Clipped at the head: the 2nd slot becomes an ellipsis and the 1st is
    // forced to page one.
    if start > 0 && links.len() >= 2 {
        links[1] = PageLink::Ellipsis;
        links[0] = make_page(0);
    }

    links
}

/// Query-string href with `page` overwritten and every other parameter kept.
fn href_for(base_params: &[(String, String)], wire_page: usize) -> String {
    let mut pairs: Vec<(String, String)> = base_params
        .iter()
        .filter(|(key, _)| key != "page")
        .cloned()
        .collect();
    pairs.push(("page".to_string(), wire_page.to_string()));

    let query: Vec<String> = pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();
    format!("?{}", query.join("&"))
}
