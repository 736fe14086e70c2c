use super::Site;
use crate::output::{print_field, print_json};
use anyhow::Context;
use folio_core::error::FolioError;
use folio_core::image::ImageResolver;
use folio_core::narrative::{self, NarrativeItem, CHILD_MARKER};
use folio_core::project::{validate_slug, ImageSlot, Project};

/// `folio project <slug>`: one case study as text or JSON.
pub fn run(site: &Site, slug: &str, json: bool) -> anyhow::Result<()> {
    validate_slug(slug)?;
    let config = site.config()?;
    let content = site.content(&config)?;
    let project = content
        .project_by_slug(slug)
        .context("failed to load project")?
        .ok_or_else(|| FolioError::ProjectNotFound(slug.to_string()))?;

    if json {
        return print_json(&project);
    }

    let images = ImageResolver::new(&config.content.project_id, &config.content.dataset);
    print_project(&project, &images, &config);
    Ok(())
}

fn print_project(p: &Project, images: &ImageResolver, config: &folio_core::config::Config) {
    println!("{}", p.nav_label());
    print_field("subtitle", p.project_subtitle.as_deref());
    print_field("status", p.status.as_deref());
    if !p.tags.is_empty() {
        print_field("tags", Some(p.tags.join(", ").as_str()));
    }
    if !p.role.is_empty() {
        print_field("role", Some(p.role.join(", ").as_str()));
    }
    print_field("duration", p.duration.as_deref());
    print_field("team", p.team.as_deref());
    print_field("read more", p.read_more.as_deref());
    print_field("visit", p.outcome_url.as_deref());
    print_field("embed", p.iframe_content.as_deref());

    for (heading, text) in [
        ("Overview", &p.overview),
        ("Problem statement", &p.problem_statement),
        ("Outcome", &p.outcome),
        ("Challenges", &p.challenges_content),
        ("Solution", &p.solution_content),
        ("Usage research", &p.usage_research),
        ("Usability testing", &p.usability_testing),
    ] {
        if let Some(text) = text {
            println!();
            println!("{heading}");
            print_narrative(text);
        }
    }

    let slots: Vec<ImageSlot> = ImageSlot::all()
        .iter()
        .copied()
        .filter(|slot| !p.images(*slot).is_empty())
        .collect();
    if !slots.is_empty() {
        println!();
        println!("Images");
        for slot in slots {
            for entry in p.images(slot) {
                let url = images
                    .url_for(entry, config.images.modal_quality, config.images.fit)
                    .unwrap_or_else(|| format!("<invalid: {}>", entry.reference()));
                println!("  {:<15} {url}", slot.as_str());
            }
        }
    }
}

fn print_narrative(text: &str) {
    for item in narrative::format(text) {
        match item {
            NarrativeItem::Bullet(line) => println!("  - {line}"),
            NarrativeItem::SubList(children) => {
                for child in children {
                    println!("    {CHILD_MARKER} {child}");
                }
            }
        }
    }
}
