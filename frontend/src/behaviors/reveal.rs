use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom::ElementHandle;
use crate::error::BehaviorError;
use crate::page::RevealTarget;

pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(step_ms))
}

/// Marks `target` visible and reveals its card-like descendants with a
/// per-index transition delay. Nothing here is ever undone.
pub fn reveal<E: ElementHandle>(target: &E, staggered: &[E], config: &SiteConfig) {
    let markers = &config.markers;
    target.set_marker(&markers.visible, true);

    for (i, child) in staggered.iter().enumerate() {
        child.set_style(
            "transition-delay",
            &stagger_delay(i, config.effects.stagger_step_ms),
        );
        child.set_marker(&markers.reveal, true);
        child.set_marker(&markers.visible, true);
    }
}

/// Observes every reveal target. Hosts without `IntersectionObserver` get
/// everything revealed up front.
pub fn attach(targets: &[RevealTarget], config: Rc<SiteConfig>) -> Result<usize, BehaviorError> {
    if targets.is_empty() {
        return Ok(0);
    }

    let observer = match build_observer(targets, config.clone()) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("{}; revealing {} targets immediately", e, targets.len());
            for target in targets {
                reveal(&target.element, &target.staggered, &config);
            }
            return Ok(targets.len());
        }
    };

    for target in targets {
        observer.observe(&target.element);
    }

    debug!("Scroll reveal: observing {} targets", targets.len());
    Ok(targets.len())
}

fn build_observer(
    targets: &[RevealTarget],
    config: Rc<SiteConfig>,
) -> Result<IntersectionObserver, BehaviorError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.effects.reveal_threshold));

    let targets: Vec<RevealTarget> = targets.to_vec();
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let element = entry.target();
            match targets.iter().find(|t| t.element == element) {
                Some(target) => reveal(&target.element, &target.staggered, &config),
                None => element.set_marker(&config.markers.visible, true),
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(BehaviorError::observer)?;
    callback.forget();
    Ok(observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    #[test]
    fn delay_grows_by_step_per_index() {
        assert_eq!(stagger_delay(0, 60), "0ms");
        assert_eq!(stagger_delay(1, 60), "60ms");
        assert_eq!(stagger_delay(5, 60), "300ms");
        assert_eq!(stagger_delay(3, 0), "0ms");
    }

    #[test]
    fn reveal_marks_target_and_staggers_children() {
        let config = SiteConfig::default();
        let target = FakeElement::with_markers(&["reveal"]);
        let children: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();

        reveal(&target, &children, &config);

        assert!(target.has_marker("visible"));
        for (i, child) in children.iter().enumerate() {
            assert!(child.has_marker("reveal"));
            assert!(child.has_marker("visible"));
            assert_eq!(child.style("transition-delay"), Some(format!("{}ms", i * 60)));
        }
    }

    #[test]
    fn revealing_twice_keeps_the_marker() {
        let config = SiteConfig::default();
        let target = FakeElement::default();
        reveal(&target, &[], &config);
        reveal(&target, &[], &config);
        assert!(target.has_marker("visible"));
    }

    #[test]
    fn target_without_children_only_gets_visible() {
        let config = SiteConfig::default();
        let target = FakeElement::default();
        reveal::<FakeElement>(&target, &[], &config);
        assert!(target.has_marker("visible"));
        assert!(!target.has_marker("reveal"));
        assert_eq!(target.style("transition-delay"), None);
    }
}
