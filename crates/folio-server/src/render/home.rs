use super::{chips, html_escape};
use crate::view::ViewParams;
use folio_core::config::Config;
use folio_core::image::ImageResolver;
use folio_core::lifecycle::PageState;
use folio_core::pager::Pager;
use folio_core::project::{project_path, Project};

pub struct HomeView<'a> {
    pub config: &'a Config,
    pub images: &'a ImageResolver,
    pub work: &'a PageState<Vec<Project>>,
    pub pager: &'a Pager,
    pub params: &'a ViewParams,
}

/// Main content of the home page: hero, work showcase and about teaser.
pub fn render(view: &HomeView<'_>) -> String {
    format!(
        "<main>\n{}\n{}\n{}\n</main>",
        hero(view.config),
        work(view),
        about_teaser(view.config)
    )
}

fn hero(config: &Config) -> String {
    let badges: String = config
        .site
        .badges
        .iter()
        .map(|b| format!(r#"<span class="badge">{}</span>"#, html_escape(b)))
        .collect();
    format!(
        r#"<section class="hero"><p class="tagline">{}</p><div class="badges">{badges}</div></section>"#,
        html_escape(&config.site.tagline)
    )
}

fn about_teaser(config: &Config) -> String {
    format!(
        r#"<section id="about" class="about-teaser"><p>{}</p><a href="/about">More about me</a></section>"#,
        html_escape(&config.site.about_teaser)
    )
}

fn work(view: &HomeView<'_>) -> String {
    let inner = match view.work {
        PageState::Loading => String::new(),
        PageState::Failed(message) => {
            format!(r#"<div class="notice error">{}</div>"#, html_escape(message))
        }
        PageState::Empty | PageState::NotFound => {
            r#"<div class="notice">No projects found</div>"#.to_string()
        }
        PageState::Loaded(projects) => {
            let visible = view.pager.visible();
            let cards: String = projects
                .iter()
                .skip(visible.start)
                .take(visible.len())
                .map(|p| card(view, p))
                .collect();
            format!(
                r#"<div class="cards">{cards}</div>{}"#,
                pager_controls(view.pager, view.params)
            )
        }
    };
    format!(r#"<section id="work" class="work">{inner}</section>"#)
}

fn card(view: &HomeView<'_>, project: &Project) -> String {
    let images = &view.config.images;
    let cover = project
        .cover()
        .and_then(|img| view.images.url_for(img, images.card_quality, images.fit))
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                html_escape(&url),
                html_escape(project.name())
            )
        })
        .unwrap_or_default();

    let name = project
        .project_name
        .as_deref()
        .map(|n| format!("<h3>{}</h3>", html_escape(n)))
        .unwrap_or_default();
    let subtitle = project
        .project_subtitle
        .as_deref()
        .map(|s| format!(r#"<div class="subtitle">{}</div>"#, html_escape(s)))
        .unwrap_or_default();

    format!(
        r#"<a class="card" href="{href}"><div class="cover">{cover}</div>{name}{subtitle}{chips}</a>"#,
        href = html_escape(&project_path(project.slug().unwrap_or_default())),
        chips = chips(project.status.as_deref(), &project.tags),
    )
}

/// Previous/next controls. At either end the control stays on screen but is
/// disabled.
fn pager_controls(pager: &Pager, params: &ViewParams) -> String {
    let control = |label: &str, enabled: bool, target: usize| {
        if enabled {
            format!(
                r#"<a class="pager-btn" href="{}#work">{label}</a>"#,
                html_escape(&params.with_start(target).href("/"))
            )
        } else {
            format!(r#"<span class="pager-btn" aria-disabled="true">{label}</span>"#)
        }
    };
    format!(
        r#"<nav class="pager">{}{}</nav>"#,
        control("Previous", pager.can_go_previous(), pager.peek_previous()),
        control("Next", pager.can_go_next(), pager.peek_next()),
    )
}
