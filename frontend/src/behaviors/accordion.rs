use std::rc::Rc;

use log::debug;
use web_sys::Element;

use crate::dom::{listen, ElementHandle};
use crate::error::BehaviorError;
use crate::page::{AccordionGroup, AccordionToggle};

/// Single-open policy: collapse every item in the group, then expand `item`
/// unless it was already expanded.
pub fn activate_single<E: ElementHandle>(group: &[E], item: &E, open: &str) {
    let was_open = item.has_marker(open);
    for other in group {
        other.set_marker(open, false);
    }
    if !was_open {
        item.set_marker(open, true);
    }
}

/// Multi-open policy: only the clicked item changes.
pub fn activate_multi<E: ElementHandle>(item: &E, open: &str) -> bool {
    item.toggle_marker(open)
}

/// FAQ accordion, one answer open at a time.
pub fn attach_single(group: &AccordionGroup, open: &str) -> Result<usize, BehaviorError> {
    let items: Rc<Vec<Element>> = Rc::new(group.items.clone());

    for AccordionToggle { control, item } in &group.toggles {
        let items = items.clone();
        let item = item.clone();
        let open = open.to_string();
        listen(control, "click", move |_| {
            activate_single(items.as_slice(), &item, &open);
        })?;
    }

    debug!("FAQ accordion: {} toggles over {} items", group.toggles.len(), items.len());
    Ok(group.toggles.len())
}

/// Curriculum weeks, any number open.
pub fn attach_multi(toggles: &[AccordionToggle], open: &str) -> Result<usize, BehaviorError> {
    for AccordionToggle { control, item } in toggles {
        let item = item.clone();
        let open = open.to_string();
        listen(control, "click", move |_| {
            activate_multi(&item, &open);
        })?;
    }

    debug!("Week accordion: {} toggles", toggles.len());
    Ok(toggles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{count_with, FakeElement};
    use proptest::prelude::*;

    fn group(n: usize) -> Vec<FakeElement> {
        (0..n).map(|_| FakeElement::default()).collect()
    }

    #[test]
    fn opening_an_item_closes_its_siblings() {
        let items = group(3);
        activate_single(&items, &items[0], "open");
        activate_single(&items, &items[2], "open");

        assert!(!items[0].has_marker("open"));
        assert!(!items[1].has_marker("open"));
        assert!(items[2].has_marker("open"));
    }

    #[test]
    fn activating_the_open_item_collapses_everything() {
        let items = group(3);
        activate_single(&items, &items[1], "open");
        activate_single(&items, &items[1], "open");
        assert_eq!(count_with(&items, "open"), 0);
    }

    #[test]
    fn item_outside_the_group_still_toggles() {
        let items = group(2);
        items[0].set_marker("open", true);
        let stray = FakeElement::default();

        activate_single(&items, &stray, "open");
        assert!(stray.has_marker("open"));
        assert_eq!(count_with(&items, "open"), 0);
    }

    #[test]
    fn multi_open_only_touches_the_clicked_item() {
        let items = group(3);
        assert!(activate_multi(&items[0], "open"));
        assert!(activate_multi(&items[2], "open"));
        assert_eq!(count_with(&items, "open"), 2);

        assert!(!activate_multi(&items[0], "open"));
        assert!(!items[0].has_marker("open"));
        assert!(items[2].has_marker("open"));
    }

    proptest! {
        #[test]
        fn single_open_never_leaves_more_than_one_open(
            n in 1usize..8,
            clicks in prop::collection::vec(0usize..8, 1..20),
        ) {
            let items = group(n);
            for click in clicks {
                let idx = click % n;
                let was_open = items[idx].has_marker("open");
                activate_single(&items, &items[idx], "open");

                prop_assert_eq!(items[idx].has_marker("open"), !was_open);
                prop_assert_eq!(count_with(&items, "open"), usize::from(!was_open));
            }
        }

        #[test]
        fn multi_open_leaves_siblings_alone(
            initial in prop::collection::vec(any::<bool>(), 1..8),
            pick in 0usize..8,
        ) {
            let items: Vec<FakeElement> = initial
                .iter()
                .map(|&on| if on { FakeElement::with_markers(&["open"]) } else { FakeElement::default() })
                .collect();
            let idx = pick % items.len();
            activate_multi(&items[idx], "open");

            for (i, item) in items.iter().enumerate() {
                let expected = if i == idx { !initial[i] } else { initial[i] };
                prop_assert_eq!(item.has_marker("open"), expected);
            }
        }
    }
}
