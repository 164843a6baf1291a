use std::fmt::Display;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{AddEventListenerOptions, Document, Window};

mod config;
mod dom;
mod error;
mod page;
mod routes;
mod behaviors {
    pub mod accordion;
    pub mod active_nav;
    pub mod course_links;
    pub mod glow;
    pub mod header;
    pub mod menu;
    pub mod reveal;
    pub mod tabs;
}

use behaviors::{accordion, active_nav, course_links, glow, header, menu, reveal, tabs};
use config::SiteConfig;
use dom::listen_with;
use error::BehaviorError;
use page::Page;

fn report<T: Display>(behavior: &str, result: Result<T, BehaviorError>) {
    match result {
        Ok(attached) => debug!("{}: {}", behavior, attached),
        Err(e) => warn!("{} skipped: {}", behavior, e),
    }
}

/// Builds the page view and wires every behavior onto it. A behavior that
/// fails to attach is logged and the rest carry on.
fn attach_all(window: &Window, document: &Document) {
    let config = Rc::new(SiteConfig::from_page(document));
    let routes = config.course_routes();
    debug!("{} course routes loaded", routes.len());
    let page = Page::attach(document, &config);
    let open = &config.markers.open;

    report("FAQ accordion", accordion::attach_single(&page.faq, open));
    report("Scroll reveal", reveal::attach(&page.reveal, config.clone()));
    report("Card glow", glow::attach(&page.cards, config.clone()));
    report("Week accordion", accordion::attach_multi(&page.weeks, open));
    report("Tabs", tabs::attach(document, &page.tabs, config.clone()));

    let pathname = window.location().pathname().unwrap_or_default();
    active_nav::attach(&pathname, &page.nav_links, &config);

    report("Header shadow", header::attach(window, page.header.as_ref(), config.clone()));
    report(
        "Mobile menu",
        menu::attach(page.menu_toggle.as_ref(), page.nav.as_ref(), config.clone()),
    );
    report("Course links", course_links::attach(window, &page.cards, &routes));

    info!("Page behaviors attached");
}

/// `document.readyState` is only "loading" before the markup is parsed;
/// "interactive" and "complete" both mean the elements are there.
fn should_attach_now(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Attaches now, or on `DOMContentLoaded` while the document is still
/// loading.
fn start() -> Result<(), BehaviorError> {
    let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;
    let document = window.document().ok_or(BehaviorError::NoDocument)?;

    if should_attach_now(&document.ready_state()) {
        attach_all(&window, &document);
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let target = document.clone();
    listen_with(&target, "DOMContentLoaded", &options, move |_| {
        attach_all(&window, &document);
    })
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behaviors");
    if let Err(e) = start() {
        warn!("Page behaviors not attached: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_document_waits_for_content_loaded() {
        assert!(!should_attach_now("loading"));
    }

    #[test]
    fn parsed_document_attaches_immediately() {
        assert!(should_attach_now("interactive"));
        assert!(should_attach_now("complete"));
    }
}
