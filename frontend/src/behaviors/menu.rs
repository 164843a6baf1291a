use std::rc::Rc;

use log::debug;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::dom::{listen, ElementHandle};
use crate::error::BehaviorError;
use crate::page::NavBar;

/// Flips the nav panel and shows the matching glyph on the toggle.
/// Returns whether the panel is now open.
pub fn toggle<E: ElementHandle>(nav: &E, control: &E, config: &SiteConfig) -> bool {
    let open = nav.toggle_marker(&config.markers.open);
    let effects = &config.effects;
    control.set_text(if open {
        &effects.menu_open_glyph
    } else {
        &effects.menu_closed_glyph
    });
    open
}

pub fn close<E: ElementHandle>(nav: &E, control: &E, config: &SiteConfig) {
    nav.set_marker(&config.markers.open, false);
    control.set_text(&config.effects.menu_closed_glyph);
}

pub fn attach(control: Option<&Element>, nav: Option<&NavBar>, config: Rc<SiteConfig>) -> Result<bool, BehaviorError> {
    let (Some(control), Some(nav)) = (control, nav) else {
        debug!("Mobile menu: toggle or nav missing");
        return Ok(false);
    };

    {
        let panel = nav.root.clone();
        let button = control.clone();
        let config = config.clone();
        listen(control, "click", move |_| {
            toggle(&panel, &button, &config);
        })?;
    }

    for link in &nav.links {
        let panel = nav.root.clone();
        let button = control.clone();
        let config = config.clone();
        listen(&link.element, "click", move |_| {
            close(&panel, &button, &config);
        })?;
    }

    debug!("Mobile menu: attached with {} links", nav.links.len());
    Ok(true)
}
