use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::dom::{listen, ElementHandle, Query};
use crate::error::BehaviorError;
use crate::page::TabSet;

pub fn panel_id(prefix: &str, target: &str) -> String {
    format!("{}{}", prefix, target)
}

/// Deactivates every control and panel, then activates `selected` and
/// `panel` (when the target has one). Reveal elements inside the shown panel
/// are marked visible straight away: a hidden panel never intersected the
/// viewport, so the observer has not revealed them.
pub fn activate<E: ElementHandle>(
    controls: &[E],
    panels: &[E],
    selected: &E,
    panel: Option<&E>,
    panel_reveals: &[E],
    config: &SiteConfig,
) {
    let active = &config.markers.active;
    for control in controls {
        control.set_marker(active, false);
    }
    selected.set_marker(active, true);

    for p in panels {
        p.set_marker(active, false);
    }
    if let Some(panel) = panel {
        panel.set_marker(active, true);
    }

    for el in panel_reveals {
        el.set_marker(&config.markers.visible, true);
    }
}

pub fn attach(document: &Document, tabs: &TabSet, config: Rc<SiteConfig>) -> Result<usize, BehaviorError> {
    if tabs.controls.is_empty() {
        return Ok(0);
    }

    let controls: Rc<Vec<Element>> = Rc::new(tabs.controls.iter().map(|c| c.element.clone()).collect());
    let panels: Rc<Vec<Element>> = Rc::new(tabs.panels.clone());

    for control in &tabs.controls {
        let document = document.clone();
        let controls = controls.clone();
        let panels = panels.clone();
        let config = config.clone();
        let selected = control.element.clone();
        let id = panel_id(&config.effects.tab_panel_prefix, &control.target);

        listen(&control.element, "click", move |_| {
            // Looked up on click so panels that are not tagged as panels
            // still switch in.
            let panel = document.get_element_by_id(&id);
            let reveals = panel
                .as_ref()
                .map(|p| p.query_all(&config.selectors.reveal))
                .unwrap_or_default();
            activate(controls.as_slice(), panels.as_slice(), &selected, panel.as_ref(), &reveals, &config);
        })?;
    }

    debug!("Tabs: {} controls, {} panels", tabs.controls.len(), tabs.panels.len());
    Ok(tabs.controls.len())
}
