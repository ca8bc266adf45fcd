//! `list` and `tags` command handlers.

use crate::client::{ApiClient, ImageQuery};
use crate::error::Result;
use crate::model::reference;
use crate::pagination::page_links;
use crate::time::format_relative_time_to;

/// List tracked images with filtering, sorting and pagination.
pub fn run_list(client: &dyn ApiClient, query: &ImageQuery) -> Result<()> {
    let page = client.get_images(query)?;

    if page.images.is_empty() {
        println!("No images match.");
        return Ok(());
    }

    for image in &page.images {
        let mut line = format!(
            "{:<50} {}",
            reference::name(&image.reference),
            reference::version(&image.reference)
        );
        if !image.tags.is_empty() {
            line.push_str(&format!("  [{}]", image.tags.join(", ")));
        }
        if let Some(bumped) = image.bumped_at {
            line.push_str(&format!("  bumped {}", format_relative_time_to(bumped)));
        }
        println!("{line}");
    }

    let links = page_links(page.total, page.page, page.size, &query.to_query_pairs());
    if links.len() > 1 {
        let strip: Vec<String> = links
            .iter()
            .map(|link| {
                if link.label() == page.page.to_string() {
                    format!("[{}]", link.label())
                } else {
                    link.label().to_string()
                }
            })
            .collect();
        println!();
        println!("Page {} of {} images: {}", page.page, page.total, strip.join(" "));
    }

    Ok(())
}

/// Print the distinct tag vocabulary.
pub fn run_tags(client: &dyn ApiClient) -> Result<()> {
    let tags = client.get_tags()?;
    if tags.is_empty() {
        println!("No tags recorded.");
        return Ok(());
    }
    for tag in tags {
        println!("{tag}");
    }
    Ok(())
}
