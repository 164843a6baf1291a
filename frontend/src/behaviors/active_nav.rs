use log::debug;
use urlencoding::decode;

use crate::config::SiteConfig;
use crate::dom::ElementHandle;
use crate::page::NavLink;

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

fn decoded_lower(raw: &str) -> String {
    decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
        .to_lowercase()
}

/// Lower-cased last segment of the location pathname, `default_page` when
/// the path ends in a slash.
pub fn current_filename(pathname: &str, default_page: &str) -> String {
    let path = decoded_lower(pathname);
    match last_segment(&path) {
        "" => default_page.to_string(),
        name => name.to_string(),
    }
}

/// Filename a nav link points at. Empty and fragment-only targets have none.
pub fn link_filename(href: &str) -> Option<String> {
    let href = decoded_lower(href.trim());
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    match last_segment(&href) {
        "" => None,
        name => Some(name.to_string()),
    }
}

/// Either filename containing the other, extension stripped. This is a
/// loose match: `ai.html` also lights up on `course-generative-ai-llms.html`.
pub fn is_active(current: &str, link: &str, extension: &str) -> bool {
    current.contains(&link.replacen(extension, "", 1))
        || link.contains(&current.replacen(extension, "", 1))
}

pub fn highlight<E: ElementHandle>(current: &str, link: &E, href: &str, config: &SiteConfig) -> bool {
    let Some(file) = link_filename(href) else {
        return false;
    };
    let active = is_active(current, &file, &config.effects.page_extension);
    if active {
        link.set_marker(&config.markers.active, true);
    }
    active
}

/// Runs once at startup; there is nothing to listen for.
pub fn attach(pathname: &str, links: &[NavLink], config: &SiteConfig) -> usize {
    let current = current_filename(pathname, &config.effects.default_page);
    let highlighted = links
        .iter()
        .filter(|link| highlight(&current, &link.element, &link.href, config))
        .count();

    debug!("Active nav: {} of {} links match '{}'", highlighted, links.len(), current);
    highlighted
}
