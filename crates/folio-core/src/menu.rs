use crate::error::FolioError;
use crate::gallery::ClickTarget;
use crate::keyboard::{Key, KeyListener, KeyboardScope};
use crate::lifecycle::{FetchTicket, PageController, PageState};
use crate::project::{project_path, Project};
use serde::Serialize;

/// One link in the menu's work list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: String,
    pub href: String,
}

impl MenuEntry {
    pub fn from_project(project: &Project) -> Self {
        Self {
            label: project.nav_label().to_string(),
            href: project_path(project.slug().unwrap_or_default()),
        }
    }
}

/// Slide-out navigation panel.
///
/// Opening starts a project-list load; closing cancels it. Load failures
/// leave the list empty rather than surfacing an error. Escape and backdrop
/// clicks close the panel, and the key listener only exists while open.
#[derive(Debug)]
pub struct MenuOverlay {
    open: bool,
    loader: PageController<Vec<MenuEntry>>,
    keyboard: KeyboardScope,
    listener: Option<KeyListener>,
}

impl MenuOverlay {
    pub fn new(keyboard: KeyboardScope) -> Self {
        Self {
            open: false,
            loader: PageController::new(),
            keyboard,
            listener: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel and return the ticket for its project-list fetch.
    pub fn open(&mut self) -> FetchTicket {
        self.open = true;
        if self.listener.is_none() {
            self.listener = Some(self.keyboard.attach());
        }
        self.loader.begin("menu")
    }

    pub fn close(&mut self) {
        self.open = false;
        self.listener = None;
        self.loader.teardown();
    }

    /// Apply the project-list fetch. Results for a closed or reopened
    /// panel are ignored.
    pub fn finish_load(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Project>, FolioError>,
    ) -> bool {
        let state = match result {
            Ok(projects) => {
                PageState::Loaded(projects.iter().map(MenuEntry::from_project).collect())
            }
            Err(e) => {
                tracing::debug!("menu project list unavailable: {e}");
                PageState::Loaded(Vec::new())
            }
        };
        self.loader.complete(ticket, state)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        self.loader
            .state()
            .data()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.listener.is_some() && key == Key::Escape {
            self.close();
            return true;
        }
        false
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Slug;

    fn project(slug: &str, name: Option<&str>) -> Project {
        Project {
            id: slug.into(),
            slug: Some(Slug {
                current: slug.into(),
            }),
            project_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn open_load_close() {
        let scope = KeyboardScope::new();
        let mut menu = MenuOverlay::new(scope.clone());
        let ticket = menu.open();
        assert_eq!(scope.active_listeners(), 1);
        assert!(menu.finish_load(
            &ticket,
            Ok(vec![project("rum", Some("Huli Jaggery Rum")), project("jiopay", None)])
        ));
        assert_eq!(
            menu.entries(),
            &[
                MenuEntry {
                    label: "Huli Jaggery Rum".into(),
                    href: "/projects/rum".into()
                },
                MenuEntry {
                    label: "jiopay".into(),
                    href: "/projects/jiopay".into()
                },
            ]
        );
        assert!(menu.handle_key(Key::Escape));
        assert!(!menu.is_open());
        assert_eq!(scope.active_listeners(), 0);
    }

    #[test]
    fn load_after_close_is_ignored() {
        let mut menu = MenuOverlay::new(KeyboardScope::new());
        let ticket = menu.open();
        menu.close();
        assert!(!menu.finish_load(&ticket, Ok(vec![project("rum", None)])));
        assert!(menu.entries().is_empty());
    }

    #[test]
    fn reopen_supersedes_first_load() {
        let mut menu = MenuOverlay::new(KeyboardScope::new());
        let first = menu.open();
        menu.close();
        let second = menu.open();
        assert!(menu.finish_load(&second, Ok(vec![project("b", None)])));
        assert!(!menu.finish_load(&first, Ok(vec![project("a", None)])));
        assert_eq!(menu.entries()[0].label, "b");
    }

    #[test]
    fn load_errors_are_swallowed() {
        let mut menu = MenuOverlay::new(KeyboardScope::new());
        let ticket = menu.open();
        assert!(menu.finish_load(
            &ticket,
            Err(FolioError::ContentTransport("offline".into()))
        ));
        assert!(menu.entries().is_empty());
        assert!(menu.is_open());
    }

    #[test]
    fn backdrop_closes_and_escape_ignored_when_closed() {
        let mut menu = MenuOverlay::new(KeyboardScope::new());
        assert!(!menu.handle_key(Key::Escape));
        menu.open();
        menu.click(ClickTarget::Content);
        assert!(menu.is_open());
        menu.click(ClickTarget::Backdrop);
        assert!(!menu.is_open());
    }
}
