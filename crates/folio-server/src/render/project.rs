use super::{chips, html_escape};
use crate::view::ViewParams;
use folio_core::config::Config;
use folio_core::gallery::ModalGallery;
use folio_core::image::ImageResolver;
use folio_core::narrative::{self, NarrativeItem, CHILD_MARKER};
use folio_core::pager::Pager;
use folio_core::project::{ImageSlot, Project};
use std::collections::BTreeMap;

pub struct ProjectView<'a> {
    pub config: &'a Config,
    pub images: &'a ImageResolver,
    pub project: &'a Project,
    pub params: &'a ViewParams,
    pub path: &'a str,
    /// Inline carousel per image slot.
    pub carousels: &'a BTreeMap<ImageSlot, Pager>,
    /// Enlarged-image overlay, when one is open.
    pub modal: Option<(ImageSlot, &'a ModalGallery)>,
}

/// Case-study page body.
pub fn render(view: &ProjectView<'_>) -> String {
    let p = view.project;
    let mut out = String::from(r#"<main class="project">"#);

    out.push_str(r#"<div class="project-head">"#);
    out.push_str(&format!("<h1>{}</h1>", html_escape(p.name())));
    if let Some(subtitle) = &p.project_subtitle {
        out.push_str(&format!(
            r#"<p class="subtitle">{}</p>"#,
            html_escape(subtitle)
        ));
    }
    out.push_str(&chips(p.status.as_deref(), &p.tags));
    out.push_str("</div>");

    if let Some(url) = p.cover().and_then(|img| {
        view.images
            .url_for(img, view.config.images.gallery_quality, view.config.images.fit)
    }) {
        out.push_str(&format!(
            r#"<div class="hero-image"><img src="{}" alt="{}"></div>"#,
            html_escape(&url),
            html_escape(p.name())
        ));
    }

    out.push_str(r#"<div class="facts">"#);
    if !p.role.is_empty() {
        let roles: String = p
            .role
            .iter()
            .map(|r| format!("<div>{}</div>", html_escape(r)))
            .collect();
        out.push_str(&format!("<section><h2>Role</h2>{roles}</section>"));
    }
    for (heading, value) in [("Duration", &p.duration), ("Team", &p.team)] {
        if let Some(value) = value {
            out.push_str(&format!(
                "<section><h2>{heading}</h2><div>{}</div></section>",
                html_escape(value)
            ));
        }
    }
    out.push_str("</div>");

    out.push_str(&text_section("Overview", p.overview.as_deref()));
    out.push_str(&text_section(
        "Problem statement",
        p.problem_statement.as_deref(),
    ));

    out.push_str(&text_section("Outcome", p.outcome.as_deref()));
    if let Some(src) = &p.iframe_content {
        out.push_str(&format!(
            r#"<section class="embed"><iframe src="{}" width="800" height="450" allowfullscreen></iframe></section>"#,
            html_escape(src)
        ));
    }
    out.push_str(&gallery(view, ImageSlot::Outcome));

    out.push_str(&text_section("Challenges", p.challenges_content.as_deref()));
    out.push_str(&gallery(view, ImageSlot::Challenges));

    out.push_str(&text_section("Solution", p.solution_content.as_deref()));
    out.push_str(&gallery(view, ImageSlot::Solution));

    if !p.ideation.is_empty() {
        out.push_str("<section><h2>Ideation</h2></section>");
    }
    out.push_str(&gallery(view, ImageSlot::Ideation));

    out.push_str(&text_section("Usage research", p.usage_research.as_deref()));
    out.push_str(&gallery(view, ImageSlot::UsageResearch));

    out.push_str(&text_section(
        "Usability testing",
        p.usability_testing.as_deref(),
    ));

    out.push_str(&links(p));
    out.push_str("</main>");

    if let Some((slot, modal)) = view.modal {
        out.push_str(&modal_overlay(view, slot, modal));
    }
    out
}

fn text_section(heading: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!(
            "<section><h2>{heading}</h2>{}</section>",
            narrative_list(text)
        ),
        None => String::new(),
    }
}

/// Render delimited narrative text as a nested list. Sub-list children
/// carry the marker glyph and have no heading bullet.
pub fn narrative_list(text: &str) -> String {
    let mut out = String::from(r#"<ul class="narrative">"#);
    for item in narrative::format(text) {
        match item {
            NarrativeItem::Bullet(line) => {
                out.push_str(&format!("<li>{}</li>", html_escape(&line)));
            }
            NarrativeItem::SubList(children) => {
                out.push_str(r#"<li class="sub"><ul>"#);
                for child in children {
                    out.push_str(&format!(
                        r#"<li><span class="marker">{CHILD_MARKER}</span> {}</li>"#,
                        html_escape(&child)
                    ));
                }
                out.push_str("</ul></li>");
            }
        }
    }
    out.push_str("</ul>");
    out
}

/// Inline carousel for one slot. Arrows and indicator dots only appear when
/// the slot has more than one image.
fn gallery(view: &ProjectView<'_>, slot: ImageSlot) -> String {
    let entries = view.project.images(slot);
    if entries.is_empty() {
        return String::new();
    }
    let pager = view
        .carousels
        .get(&slot)
        .cloned()
        .unwrap_or_else(|| Pager::ring(entries.len()));
    let index = pager.index();
    let Some(current) = entries.get(index) else {
        return String::new();
    };

    let anchor = slot.as_str();
    let link = |params: ViewParams| format!("{}#{anchor}", html_escape(&params.href(view.path)));

    let image = view
        .images
        .url_for(
            current,
            view.config.images.gallery_quality,
            view.config.images.fit,
        )
        .map(|url| {
            format!(
                r#"<a class="enlarge" href="{}"><img src="{}" alt="{}"></a>"#,
                link(view.params.with_modal(Some((slot, index)))),
                html_escape(&url),
                html_escape(current.alt_or(slot.label()))
            )
        })
        .unwrap_or_default();

    let mut out = format!(r#"<div class="gallery" id="{anchor}">{image}"#);
    if pager.total() > 1 {
        out.push_str(&format!(
            r#"<a class="arrow prev" href="{}" aria-label="Previous image">&larr;</a><a class="arrow next" href="{}" aria-label="Next image">&rarr;</a>"#,
            link(view.params.with_slide(slot, pager.peek_previous())),
            link(view.params.with_slide(slot, pager.peek_next())),
        ));
        out.push_str(r#"<div class="dots">"#);
        for i in 0..pager.total() {
            let class = if i == index { "dot active" } else { "dot" };
            out.push_str(&format!(
                r#"<a class="{class}" href="{}" aria-label="Go to image {}"></a>"#,
                link(view.params.with_slide(slot, i)),
                i + 1
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn modal_overlay(view: &ProjectView<'_>, slot: ImageSlot, modal: &ModalGallery) -> String {
    let Some(index) = modal.index() else {
        return String::new();
    };
    let Some(entry) = view.project.images(slot).get(index) else {
        return String::new();
    };
    let href = |modal: Option<(ImageSlot, usize)>| {
        html_escape(&view.params.with_modal(modal).href(view.path))
    };
    let close = href(None);

    let image = view
        .images
        .url_for(
            entry,
            view.config.images.modal_quality,
            view.config.images.fit,
        )
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                html_escape(&url),
                html_escape(entry.alt_or("Enlarged image"))
            )
        })
        .unwrap_or_default();

    let (prev, next) = match (modal.peek_previous(), modal.peek_next()) {
        (Some(p), Some(n)) if modal.has_multiple() => (
            format!(
                r#"<a class="arrow prev" href="{}" data-key="ArrowLeft" aria-label="Previous image">&larr;</a>"#,
                href(Some((slot, p)))
            ),
            format!(
                r#"<a class="arrow next" href="{}" data-key="ArrowRight" aria-label="Next image">&rarr;</a>"#,
                href(Some((slot, n)))
            ),
        ),
        _ => (String::new(), String::new()),
    };

    let mut caption = String::new();
    if let Some(alt) = entry.alt.as_deref().filter(|a| !a.trim().is_empty()) {
        caption.push_str(&format!("<p>{}</p>", html_escape(alt)));
    }
    if modal.has_multiple() {
        caption.push_str(&format!(
            r#"<p class="count">{} of {}</p>"#,
            index + 1,
            modal.total()
        ));
    }

    format!(
        r#"<div class="overlay modal">
<a class="backdrop" href="{close}" aria-label="Close modal"></a>
<div class="modal-content">
<a class="close" href="{close}" data-key="Escape" aria-label="Close modal">&#x2715;</a>
<div class="modal-image">{prev}{image}{next}</div>
<div class="caption">{caption}</div>
</div>
</div>"#
    )
}

fn links(p: &Project) -> String {
    let mut out = String::new();
    if let Some(url) = &p.read_more {
        out.push_str(&format!(
            r#"<a class="button" href="{}" target="_blank" rel="noreferrer">Case Study</a>"#,
            html_escape(url)
        ));
    }
    if let Some(url) = &p.outcome_url {
        out.push_str(&format!(
            r#"<a class="button primary" href="{}" target="_blank" rel="noreferrer">Visit project</a>"#,
            html_escape(url)
        ));
    }
    if out.is_empty() {
        return out;
    }
    format!(r#"<div class="links">{out}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::keyboard::KeyboardScope;
    use folio_core::project::{ImageEntry, Slug};

    fn project() -> Project {
        Project {
            id: "p1".into(),
            slug: Some(Slug {
                current: "mito-health".into(),
            }),
            project_name: Some("Mito Health".into()),
            overview: Some("Did research;Built prototype?Tested with 5 users?Iterated".into()),
            solution_image: vec![
                ImageEntry::new("image-s0-10x10-png", Some("Home screen")),
                ImageEntry::new("image-s1-10x10-png", None),
                ImageEntry::new("image-s2-10x10-png", None),
            ],
            ..Default::default()
        }
    }

    fn render_project(
        project: &Project,
        params: &ViewParams,
        carousels: &BTreeMap<ImageSlot, Pager>,
        modal: Option<(ImageSlot, &ModalGallery)>,
    ) -> String {
        let config = Config::default();
        let images = ImageResolver::new("p", "production");
        render(&ProjectView {
            config: &config,
            images: &images,
            project,
            params,
            path: "/projects/mito-health",
            carousels,
            modal,
        })
    }

    #[test]
    fn narrative_drops_sublist_heading() {
        let html = narrative_list("Did research;Built prototype?Tested with 5 users?Iterated");
        assert!(html.contains("<li>Did research</li>"));
        assert!(!html.contains("Built prototype"));
        assert!(html.contains(r#"<span class="marker">→</span> Tested with 5 users"#));
        assert!(html.contains(r#"<span class="marker">→</span> Iterated"#));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let p = Project {
            id: "bare".into(),
            ..Default::default()
        };
        let html = render_project(&p, &ViewParams::default(), &BTreeMap::new(), None);
        assert!(!html.contains("<h2>Overview</h2>"));
        assert!(!html.contains("gallery"));
        assert!(!html.contains("Visit project"));
    }

    #[test]
    fn carousel_shows_current_slide_and_wraps() {
        let p = project();
        let params = ViewParams::default();
        let mut carousels = BTreeMap::new();
        let mut pager = Pager::ring(3);
        pager.go_to(2);
        carousels.insert(ImageSlot::Solution, pager);
        let html = render_project(&p, &params, &carousels, None);
        assert!(html.contains("s2-10x10.png?q=90"));
        assert!(!html.contains("s0-10x10.png"));
        assert!(html.contains(r#"href="/projects/mito-health?solution=1#solution" aria-label="Previous image""#));
        assert!(html.contains(r#"href="/projects/mito-health#solution" aria-label="Next image""#));
        assert!(html.contains(r#"aria-label="Go to image 3""#));
    }

    #[test]
    fn modal_renders_with_key_bindings() {
        let p = project();
        let params = ViewParams::default().with_modal(Some((ImageSlot::Solution, 0)));
        let mut modal = ModalGallery::new(3, KeyboardScope::new());
        assert!(modal.open(0));
        let html = render_project(&p, &params, &BTreeMap::new(), Some((ImageSlot::Solution, &modal)));
        assert!(html.contains("s0-10x10.png?q=95"));
        assert!(html.contains(r#"href="/projects/mito-health?view=solution:2" data-key="ArrowLeft""#));
        assert!(html.contains(r#"href="/projects/mito-health?view=solution:1" data-key="ArrowRight""#));
        assert!(html.contains(r#"href="/projects/mito-health" data-key="Escape""#));
        assert!(html.contains("<p>Home screen</p>"));
        assert!(html.contains("1 of 3"));
    }

    #[test]
    fn modal_navigation_keeps_carousel_position() {
        let p = project();
        let params = ViewParams::default()
            .with_slide(ImageSlot::Solution, 1)
            .with_modal(Some((ImageSlot::Solution, 0)));
        let mut modal = ModalGallery::new(3, KeyboardScope::new());
        modal.open(0);
        let html = render_project(&p, &params, &BTreeMap::new(), Some((ImageSlot::Solution, &modal)));
        assert!(html.contains(r#"href="/projects/mito-health?solution=1&amp;view=solution:1" data-key="ArrowRight""#));
    }
}
