use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use folio_core::gallery::ModalGallery;
use folio_core::keyboard::KeyboardScope;
use folio_core::lifecycle::{PageController, PageState};
use folio_core::menu::MenuOverlay;
use folio_core::ordering::order_projects;
use folio_core::pager::Pager;
use folio_core::project::{project_path, validate_slug, ImageSlot, Project};
use std::collections::{BTreeMap, HashMap};

use super::blocking;
use crate::render::{self, home::HomeView, project::ProjectView};
use crate::state::AppState;
use crate::view::ViewParams;

/// Per-request view: parsed query state, the keyboard scope shared by the
/// overlays, and the menu overlay.
struct Chrome {
    params: ViewParams,
    path: String,
    keyboard: KeyboardScope,
    menu: MenuOverlay,
}

impl Chrome {
    async fn mount(app: &AppState, query: &HashMap<String, String>, path: String) -> Self {
        let params = ViewParams::parse(query);
        let keyboard = KeyboardScope::new();
        let mut menu = MenuOverlay::new(keyboard.clone());
        if params.menu {
            let ticket = menu.open();
            let content = app.content.clone();
            let result = blocking(move || content.list_projects()).await;
            menu.finish_load(&ticket, result);
        }
        Self {
            params,
            path,
            keyboard,
            menu,
        }
    }

    /// Wrap `main` in the document, header, menu and contact footer.
    fn page(&self, app: &AppState, title: &str, main: &str) -> String {
        let site = &app.config.site;
        let content = format!(
            "{}\n{}\n{}\n{}",
            render::header(site, &self.params, &self.path),
            render::menu_panel(site, &self.menu, &self.params, &self.path),
            main,
            render::contact(site),
        );
        render::layout(title, self.keyboard.active_listeners(), &content)
    }
}

/// GET /: hero, work showcase, about teaser, contact.
pub async fn home(
    State(app): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Html<String> {
    let chrome = Chrome::mount(&app, &query, "/".to_string()).await;

    let mut work: PageController<Vec<Project>> = PageController::new();
    let ticket = work.begin("projects");
    let content = app.content.clone();
    let order = app.config.work.display_order.clone();
    let result = blocking(move || {
        let projects = content.list_projects()?;
        Ok(order_projects(projects, &order))
    })
    .await;
    work.complete(&ticket, PageState::from_list(result));
    let work = work.into_state();

    if let Some(projects) = work.data() {
        tracing::debug!(count = projects.len(), "rendering work showcase");
    }
    let pager = work_pager(
        work.data().map_or(0, Vec::len),
        &chrome.params,
        app.config.work.page_size,
    );

    let main = render::home::render(&HomeView {
        config: &app.config,
        images: &app.images,
        work: &work,
        pager: &pager,
        params: &chrome.params,
    });
    Html(chrome.page(&app, &app.config.site.owner, &main))
}

/// Windowed pager for the work cards. The requested start is applied at a
/// page size of one, then the real page size clamps it.
fn work_pager(total: usize, params: &ViewParams, default_page_size: usize) -> Pager {
    let mut pager = Pager::windowed(total, 1);
    if let Some(start) = params.start {
        pager.go_to(start);
    }
    pager.set_page_size(params.per.unwrap_or(default_page_size));
    pager
}

/// GET /about
pub async fn about(
    State(app): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Html<String> {
    let chrome = Chrome::mount(&app, &query, "/about".to_string()).await;
    let main = render::about::render(&app.config.site);
    let title = format!("About · {}", app.config.site.owner);
    Html(chrome.page(&app, &title, &main))
}

/// GET /projects/{slug}: case study. Unknown slugs get the not-found view
/// with 404; content-store failures get the failed view with 502.
pub async fn project(
    State(app): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut page: PageController<Project> = PageController::new();
    let ticket = page.begin(slug.clone());
    let state = match validate_slug(&slug) {
        Ok(()) => {
            let content = app.content.clone();
            let key = slug.clone();
            PageState::from_record(blocking(move || content.project_by_slug(&key)).await)
        }
        Err(e) => {
            tracing::debug!("{e}");
            PageState::NotFound
        }
    };
    page.complete(&ticket, state);

    let project = match page.into_state() {
        PageState::Loaded(project) => project,
        PageState::Failed(message) => {
            return notice_page(&app, StatusCode::BAD_GATEWAY, &message, true);
        }
        PageState::NotFound | PageState::Empty | PageState::Loading => {
            return notice_page(&app, StatusCode::NOT_FOUND, "Project not found", false);
        }
    };

    let chrome = Chrome::mount(&app, &query, project_path(&slug)).await;

    let carousels: BTreeMap<ImageSlot, Pager> = ImageSlot::all()
        .iter()
        .filter(|slot| !project.images(**slot).is_empty())
        .map(|slot| {
            let mut pager = Pager::ring(project.images(*slot).len());
            pager.go_to(chrome.params.slide(*slot));
            (*slot, pager)
        })
        .collect();

    let modal = chrome.params.modal.and_then(|(slot, start)| {
        let mut modal = ModalGallery::new(project.images(slot).len(), chrome.keyboard.clone());
        modal.open(start).then_some((slot, modal))
    });

    let main = render::project::render(&ProjectView {
        config: &app.config,
        images: &app.images,
        project: &project,
        params: &chrome.params,
        path: &chrome.path,
        carousels: &carousels,
        modal: modal.as_ref().map(|(slot, modal)| (*slot, modal)),
    });

    let title = match project.name() {
        "" => app.config.site.owner.clone(),
        name => format!("{name} · {}", app.config.site.owner),
    };
    Html(chrome.page(&app, &title, &main)).into_response()
}

/// Bare page with a message and a link home.
fn notice_page(app: &AppState, status: StatusCode, message: &str, error: bool) -> Response {
    let html = render::layout(&app.config.site.owner, 0, &render::notice(message, error));
    (status, Html(html)).into_response()
}

/// Fallback for unknown paths.
pub async fn not_found(State(app): State<AppState>) -> Response {
    notice_page(&app, StatusCode::NOT_FOUND, "Page not found", false)
}
