use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::dom::{listen, ElementHandle};
use crate::error::{describe, BehaviorError};
use crate::page::Card;
use crate::routes::CourseRoutes;

/// Page a card opens, if it has both a heading and a "know more" control
/// and the heading is in the routing table.
pub fn route_for<'a>(routes: &'a CourseRoutes, heading: Option<&str>, has_control: bool) -> Option<&'a str> {
    if !has_control {
        return None;
    }
    routes.lookup(heading?)
}

/// A click anywhere on the card navigates, except on the control itself,
/// which has its own listener.
pub fn navigates_on_card_click<E: PartialEq>(target: Option<&E>, control: &E) -> bool {
    target != Some(control)
}

/// Marks a routed card as clickable.
pub fn mark_clickable<E: ElementHandle>(card: &E) {
    card.set_style("cursor", "pointer");
}

fn navigate(window: &Window, page: &str) {
    if let Err(e) = window.location().set_href(page) {
        warn!("Navigation to {} failed: {}", page, describe(&e));
    }
}

pub fn attach(window: &Window, cards: &[Card], routes: &CourseRoutes) -> Result<usize, BehaviorError> {
    let mut routed = 0;

    for card in cards {
        let Some(page) = route_for(routes, card.heading.as_deref(), card.know_more.is_some()) else {
            continue;
        };
        let Some(control) = card.know_more.clone() else {
            continue;
        };

        {
            let window = window.clone();
            let page = page.to_string();
            listen(&control, "click", move |_| navigate(&window, &page))?;
        }

        mark_clickable(&card.root);
        {
            let window = window.clone();
            let page = page.to_string();
            listen(&card.root, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
                if navigates_on_card_click(target.as_ref(), &control) {
                    navigate(&window, &page);
                }
            })?;
        }
        routed += 1;
    }

    debug!("Course links: {} of {} cards routed", routed, cards.len());
    Ok(routed)
}
