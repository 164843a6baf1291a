use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config::SiteConfig;
use crate::dom::{listen, ElementHandle};
use crate::error::BehaviorError;
use crate::page::Card;

/// Bounding box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position as percentages of the box. `None` for a collapsed box.
pub fn pointer_percent(client_x: f64, client_y: f64, rect: Rect) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width * 100.0;
    let y = (client_y - rect.top) / rect.height * 100.0;
    Some((x, y))
}

pub fn glow_gradient(x: f64, y: f64, color: &str) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, {}, transparent 60%)",
        x, y, color
    )
}

pub fn follow_pointer<E: ElementHandle>(glow: &E, client_x: f64, client_y: f64, rect: Rect, color: &str) {
    if let Some((x, y)) = pointer_percent(client_x, client_y, rect) {
        glow.set_style("background", &glow_gradient(x, y, color));
    }
}

pub fn attach(cards: &[Card], config: Rc<SiteConfig>) -> Result<usize, BehaviorError> {
    let mut attached = 0;

    for card in cards {
        let Some(glow) = card.glow.clone() else {
            continue;
        };
        let root = card.root.clone();
        let config = config.clone();

        listen(&card.root, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = root.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            follow_pointer(
                &glow,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect,
                &config.effects.glow_color,
            );
        })?;
        attached += 1;
    }

    debug!("Card glow: {} of {} cards", attached, cards.len());
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn centre_of_the_card_is_fifty_fifty() {
        assert_eq!(pointer_percent(200.0, 100.0, CARD), Some((50.0, 50.0)));
    }

    #[test]
    fn corners_map_to_zero_and_hundred() {
        assert_eq!(pointer_percent(100.0, 50.0, CARD), Some((0.0, 0.0)));
        assert_eq!(pointer_percent(300.0, 150.0, CARD), Some((100.0, 100.0)));
    }

    #[test]
    fn collapsed_card_has_no_position() {
        let flat = Rect { height: 0.0, ..CARD };
        assert_eq!(pointer_percent(150.0, 50.0, flat), None);
    }

    #[test]
    fn gradient_is_centred_on_the_pointer() {
        assert_eq!(
            glow_gradient(25.0, 75.5, "rgba(245,158,11,0.1)"),
            "radial-gradient(circle at 25% 75.5%, rgba(245,158,11,0.1), transparent 60%)"
        );
    }

    #[test]
    fn follow_pointer_updates_background_only_for_real_boxes() {
        let glow = FakeElement::default();
        follow_pointer(&glow, 150.0, 75.0, Rect { width: 0.0, ..CARD }, "red");
        assert_eq!(glow.style("background"), None);

        follow_pointer(&glow, 150.0, 75.0, CARD, "red");
        assert_eq!(
            glow.style("background").as_deref(),
            Some("radial-gradient(circle at 25% 25%, red, transparent 60%)")
        );
    }
}
