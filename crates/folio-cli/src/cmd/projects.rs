use super::Site;
use crate::output::{print_json, print_table};
use anyhow::Context;
use folio_core::ordering::order_projects;
use folio_core::project::Project;

/// `folio projects`: the home-page listing, in display order.
pub fn run(site: &Site, json: bool) -> anyhow::Result<()> {
    let config = site.config()?;
    let content = site.content(&config)?;
    let projects = content
        .list_projects()
        .context("failed to load projects")?;
    let projects = order_projects(projects, &config.work.display_order);

    if json {
        let summaries: Vec<_> = projects.iter().map(Project::summary).collect();
        return print_json(&summaries);
    }

    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    let rows = projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.nav_label().to_string(),
                p.slug().unwrap_or("-").to_string(),
                p.status.clone().unwrap_or_else(|| "-".to_string()),
                p.tags.join(", "),
            ]
        })
        .collect();
    print_table(&["#", "NAME", "SLUG", "STATUS", "TAGS"], rows);
    Ok(())
}
