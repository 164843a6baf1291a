use std::rc::Rc;

use log::debug;
use web_sys::{AddEventListenerOptions, Element, Window};

use crate::config::SiteConfig;
use crate::dom::{listen_with, ElementHandle};
use crate::error::BehaviorError;

pub fn shadow_for<'a>(scroll_y: f64, threshold: f64, shadow: &'a str) -> &'a str {
    if scroll_y > threshold {
        shadow
    } else {
        "none"
    }
}

pub fn apply<E: ElementHandle>(header: &E, scroll_y: f64, config: &SiteConfig) {
    let effects = &config.effects;
    header.set_style(
        "box-shadow",
        shadow_for(scroll_y, effects.header_scroll_threshold, &effects.header_shadow),
    );
}

pub fn attach(window: &Window, header: Option<&Element>, config: Rc<SiteConfig>) -> Result<bool, BehaviorError> {
    let Some(header) = header.cloned() else {
        debug!("Header shadow: no header");
        return Ok(false);
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let scroll_window = window.clone();
    listen_with(window, "scroll", &options, move |_| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        apply(&header, scroll_y, &config);
    })?;

    debug!("Header shadow: attached");
    Ok(true)
}
