use super::html_escape;
use folio_core::config::SiteConfig;

/// About page body: headline, copy, experience and writing lists.
pub fn render(site: &SiteConfig) -> String {
    let copy: String = site
        .about
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();

    let experience: String = site
        .experience
        .iter()
        .map(|e| {
            format!(
                r#"<li><span class="when">{}</span><span>{}</span></li>"#,
                html_escape(&e.duration),
                html_escape(&e.title)
            )
        })
        .collect();

    let writing: String = site
        .writing
        .iter()
        .map(|w| {
            format!(
                r#"<li><span class="when">{} &middot; {}</span><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                w.year,
                html_escape(&w.medium),
                html_escape(&w.url),
                html_escape(&w.title)
            )
        })
        .collect();

    format!(
        r#"<main class="about">
<h1>{headline}</h1>
<section class="about-copy">{copy}</section>
<section class="experience"><h2>Experience</h2><ul>{experience}</ul></section>
<section class="writing"><h2>Writing</h2><ul>{writing}</ul></section>
</main>"#,
        headline = html_escape(&site.about_headline),
    )
}
