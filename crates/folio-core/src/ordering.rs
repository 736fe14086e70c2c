use crate::project::Project;

/// Rank of `name` against a priority list: the lowest index whose trimmed,
/// lower-cased entry equals the trimmed, lower-cased name or is contained in
/// it. `None` means unranked.
pub fn priority_rank(name: &str, priority: &[String]) -> Option<usize> {
    let name = name.trim().to_lowercase();
    priority.iter().position(|candidate| {
        let candidate = candidate.trim().to_lowercase();
        name == candidate || name.contains(&candidate)
    })
}

/// Order `items` by a name priority list. Ranked items come first in
/// priority order; unranked ones follow in their input order.
pub fn order_by_priority<T, F>(mut items: Vec<T>, priority: &[String], name_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if priority.is_empty() {
        return items;
    }
    // sort_by_key is stable: ties keep input order.
    items.sort_by_key(|item| priority_rank(name_of(item), priority).unwrap_or(usize::MAX));
    items
}

/// Display order for the work showcase.
pub fn order_projects(projects: Vec<Project>, priority: &[String]) -> Vec<Project> {
    order_by_priority(projects, priority, |p| p.name())
}
