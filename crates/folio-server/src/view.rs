//! Per-request view state carried in the query string.
//!
//! Every interactive control on the site is a plain link that rewrites one of
//! these parameters, so navigation works without scripts:
//!
//! - `menu=open`: menu overlay is open
//! - `start=N` / `per=N`: windowed work pager position and page size
//! - `{slot}=N`: ring pager position of a detail-page gallery
//! - `view={slot}:N`: modal gallery open on image `N` of `slot`

use folio_core::project::ImageSlot;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub menu: bool,
    pub start: Option<usize>,
    pub per: Option<usize>,
    pub slides: BTreeMap<ImageSlot, usize>,
    pub modal: Option<(ImageSlot, usize)>,
}

impl ViewParams {
    /// Parse from raw query pairs. Malformed values are ignored, not errors.
    pub fn parse(query: &HashMap<String, String>) -> Self {
        let number = |key: &str| query.get(key).and_then(|v| v.parse::<usize>().ok());

        let slides = ImageSlot::all()
            .iter()
            .filter_map(|slot| number(slot.as_str()).map(|i| (*slot, i)))
            .collect();

        let modal = query.get("view").and_then(|v| {
            let (slot, index) = v.split_once(':')?;
            Some((slot.parse::<ImageSlot>().ok()?, index.parse::<usize>().ok()?))
        });

        Self {
            menu: query.get("menu").is_some_and(|v| v == "open"),
            start: number("start"),
            per: number("per"),
            slides,
            modal,
        }
    }

    pub fn slide(&self, slot: ImageSlot) -> usize {
        self.slides.get(&slot).copied().unwrap_or(0)
    }

    pub fn with_menu(&self, open: bool) -> Self {
        Self {
            menu: open,
            ..self.clone()
        }
    }

    pub fn with_start(&self, start: usize) -> Self {
        Self {
            start: Some(start),
            ..self.clone()
        }
    }

    pub fn with_slide(&self, slot: ImageSlot, index: usize) -> Self {
        let mut next = self.clone();
        next.slides.insert(slot, index);
        next
    }

    pub fn with_modal(&self, modal: Option<(ImageSlot, usize)>) -> Self {
        Self {
            modal,
            ..self.clone()
        }
    }

    /// Link to `path` carrying this state. Defaults are left out so the
    /// canonical URL of a page stays bare.
    pub fn href(&self, path: &str) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if self.menu {
            pairs.push("menu=open".to_string());
        }
        if let Some(start) = self.start.filter(|s| *s > 0) {
            pairs.push(format!("start={start}"));
        }
        if let Some(per) = self.per {
            pairs.push(format!("per={per}"));
        }
        for (slot, index) in &self.slides {
            if *index > 0 {
                pairs.push(format!("{}={index}", slot.as_str()));
            }
        }
        if let Some((slot, index)) = self.modal {
            pairs.push(format!("view={}:{index}", slot.as_str()));
        }

        if pairs.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_all_parameters() {
        let params = ViewParams::parse(&query(&[
            ("menu", "open"),
            ("start", "2"),
            ("per", "1"),
            ("solution", "3"),
            ("view", "usage_research:1"),
        ]));
        assert!(params.menu);
        assert_eq!(params.start, Some(2));
        assert_eq!(params.per, Some(1));
        assert_eq!(params.slide(ImageSlot::Solution), 3);
        assert_eq!(params.slide(ImageSlot::Outcome), 0);
        assert_eq!(params.modal, Some((ImageSlot::UsageResearch, 1)));
    }

    #[test]
    fn malformed_values_are_ignored() {
        let params = ViewParams::parse(&query(&[
            ("menu", "yes"),
            ("start", "-1"),
            ("view", "nowhere:1"),
            ("outcome", "x"),
        ]));
        assert_eq!(params, ViewParams::default());

        let params = ViewParams::parse(&query(&[("view", "outcome")]));
        assert_eq!(params.modal, None);
    }

    #[test]
    fn href_omits_defaults() {
        assert_eq!(ViewParams::default().href("/"), "/");
        assert_eq!(ViewParams::default().with_start(0).href("/"), "/");
        assert_eq!(
            ViewParams::default()
                .with_slide(ImageSlot::Outcome, 0)
                .href("/projects/a"),
            "/projects/a"
        );
    }

    #[test]
    fn href_round_trips_through_parse() {
        let params = ViewParams::default()
            .with_menu(true)
            .with_start(3)
            .with_slide(ImageSlot::Challenges, 2)
            .with_modal(Some((ImageSlot::Ideation, 4)));
        let href = params.href("/projects/mito-health");
        let (_, qs) = href.split_once('?').unwrap();
        let parsed = ViewParams::parse(
            &qs.split('&')
                .filter_map(|kv| kv.split_once('='))
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        assert_eq!(parsed, params);
    }

    #[test]
    fn builders_leave_other_fields_alone() {
        let base = ViewParams::default().with_start(2).with_slide(ImageSlot::Outcome, 1);
        let modal = base.with_modal(Some((ImageSlot::Outcome, 0)));
        assert_eq!(modal.start, Some(2));
        assert_eq!(modal.slide(ImageSlot::Outcome), 1);
        assert!(!modal.with_menu(false).menu);
    }
}
