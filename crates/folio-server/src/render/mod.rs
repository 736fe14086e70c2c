//! Server-side HTML. Pages are assembled from small `format!` fragments;
//! every piece of content-store or config text goes through [`html_escape`].

pub mod about;
pub mod home;
pub mod project;

use crate::view::ViewParams;
use folio_core::config::SiteConfig;
use folio_core::menu::MenuOverlay;

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full document. `key_listeners` is the number of overlays holding a
/// keyboard listener for this view; the script only binds keys when it is
/// non-zero.
pub fn layout(title: &str, key_listeners: usize, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/folio.css">
<script src="/assets/folio.js" defer></script>
</head>
<body data-key-listeners="{key_listeners}">
{content}
</body>
</html>
"#,
        title = html_escape(title),
    )
}

/// Fixed header with the owner's name and the menu toggle.
pub fn header(site: &SiteConfig, params: &ViewParams, path: &str) -> String {
    format!(
        r#"<header class="site-header">
<a class="site-owner" href="/">{owner}</a>
<a class="menu-toggle" href="{menu}" aria-label="Open menu">Menu</a>
</header>"#,
        owner = html_escape(&site.owner),
        menu = html_escape(&params.with_menu(true).href(path)),
    )
}

/// Slide-out navigation. Renders nothing while the overlay is closed.
pub fn menu_panel(
    site: &SiteConfig,
    menu: &MenuOverlay,
    params: &ViewParams,
    path: &str,
) -> String {
    if !menu.is_open() {
        return String::new();
    }
    let close = html_escape(&params.with_menu(false).href(path));

    let work: String = menu
        .entries()
        .iter()
        .map(|entry| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&entry.href),
                html_escape(&entry.label)
            )
        })
        .collect();

    format!(
        r#"<div class="overlay menu-overlay">
<a class="backdrop" href="{close}" aria-label="Close menu"></a>
<div class="menu-panel">
<a class="close" href="{close}" data-key="Escape" aria-label="Close">&#x2715;</a>
<nav>
<a class="menu-link" href="/about">About Me</a>
<a class="menu-link" href="/#contact">Get in touch</a>
<div class="menu-group"><div class="menu-heading">Work</div><ul>{work}</ul></div>
<div class="menu-group"><div class="menu-heading">Follow</div><ul class="inline">{social}</ul></div>
</nav>
</div>
</div>"#,
        social = social_list(site),
    )
}

fn social_list(site: &SiteConfig) -> String {
    site.social
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                html_escape(&link.url),
                html_escape(&link.name)
            )
        })
        .collect()
}

/// Contact call-to-action and footer, shared by every page.
pub fn contact(site: &SiteConfig) -> String {
    format!(
        r#"<section id="contact" class="contact">
<div class="contact-card">
<h3>Question about my work?</h3>
<h3><a href="mailto:{email}">Let's chat.</a></h3>
</div>
<footer class="site-footer">
<p>{owner} &middot; {note}</p>
<ul class="inline">{social}</ul>
</footer>
</section>"#,
        email = html_escape(&site.contact_email),
        owner = html_escape(&site.owner),
        note = html_escape(&site.footer_note),
        social = social_list(site),
    )
}

/// Centered message with a link home, used for the not-found and failed
/// states of the detail page.
pub fn notice(message: &str, error: bool) -> String {
    let class = if error { "notice error" } else { "notice" };
    format!(
        r#"<main class="{class} full"><div>{}</div><a href="/">Go back</a></main>"#,
        html_escape(message)
    )
}

/// Chip list (status first, then tags). Empty when both are absent.
pub fn chips(status: Option<&str>, tags: &[String]) -> String {
    if status.is_none() && tags.is_empty() {
        return String::new();
    }
    let mut out = String::from(r#"<div class="chips">"#);
    if let Some(status) = status {
        out.push_str(&format!(
            r#"<span class="chip status">{}</span>"#,
            html_escape(status)
        ));
    }
    for tag in tags {
        out.push_str(&format!(r#"<span class="chip">{}</span>"#, html_escape(tag)));
    }
    out.push_str("</div>");
    out
}
