//! `show` and `scan` command handlers.

use crate::client::ApiClient;
use crate::error::Result;
use crate::model::{
    full_version, name, normalized_severity, parse_purl, purl_link, SeverityCounts,
};
use crate::time::{format_duration, format_relative_time_to};

/// Show everything the tracker knows about one image.
pub fn run_show(client: &dyn ApiClient, reference: &str) -> Result<()> {
    let Some(image) = client.get_image(reference)? else {
        println!("Image {reference:?} is not tracked.");
        return Ok(());
    };

    println!("{}", name(&image.reference));
    println!("  version:  {}", full_version(&image.reference));
    if !image.tags.is_empty() {
        println!("  tags:     {}", image.tags.join(", "));
    }
    if let Some(bumped) = image.bumped_at {
        println!("  bumped:   {}", format_relative_time_to(bumped));
    }
    if let Some(logo) = client.get_logo_url(reference) {
        println!("  logo:     {logo}");
    }

    if let Some(description) = client.get_image_description(reference)? {
        println!();
        println!("{description}");
    }

    if let Some(notes) = client.get_image_release_notes(reference)? {
        if let Some(title) = notes.title {
            println!();
            println!("Release notes: {title}");
        }
    }

    if let Some(mut vulnerabilities) = client.get_image_vulnerabilities(reference)? {
        let counts = SeverityCounts::tally(&vulnerabilities);
        println!();
        println!(
            "Vulnerabilities: {} total ({} critical, {} high, {} medium, {} low)",
            counts.total(),
            counts.critical,
            counts.high,
            counts.medium,
            counts.low
        );

        vulnerabilities
            .sort_by(|a, b| normalized_severity(a).cmp(&normalized_severity(b)));
        for vulnerability in &vulnerabilities {
            let severity = normalized_severity(vulnerability);
            let mut line = format!("  {:<12} {}", severity.to_string(), vulnerability.id);
            if let Some(link) = vulnerability
                .purl
                .as_deref()
                .and_then(parse_purl)
                .as_ref()
                .and_then(purl_link)
            {
                line.push_str(&format!("  ({link})"));
            }
            println!("{line}");
        }
    }

    if let Some(scorecard) = client.get_image_scorecard(reference)? {
        if let Some(score) = scorecard.score {
            println!();
            println!("Scorecard: {score:.1}/10 ({} checks)", scorecard.checks.len());
        }
    }

    if let Some(provenance) = client.get_image_provenance(reference)? {
        println!();
        println!("Provenance:");
        if let Some(builder) = provenance.builder_id {
            println!("  builder:  {builder}");
        }
        if let Some(source) = provenance.source_uri {
            println!("  source:   {source}");
        }
    }

    if let Some(workflow) = client.get_latest_image_workflow(reference)? {
        println!();
        let conclusion = workflow.conclusion.as_deref().unwrap_or("unknown");
        match workflow.duration_secs() {
            Some(secs) => println!(
                "Latest workflow: {conclusion} in {} ({} jobs)",
                format_duration(secs),
                workflow.jobs.len()
            ),
            None => println!("Latest workflow: {conclusion} ({} jobs)", workflow.jobs.len()),
        }
    }

    Ok(())
}

/// Ask the backend to rescan an image.
pub fn run_scan(client: &dyn ApiClient, reference: &str) -> Result<()> {
    client.schedule_image_scan(reference)?;
    println!("Scan scheduled for {reference}.");
    Ok(())
}
