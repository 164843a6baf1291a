//! Typed view of the page markup, built once when behaviors attach.
//!
//! Each behavior receives the handles it needs from here instead of querying
//! the document itself. Missing regions are empty vectors or `None`.

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::dom::Query;

/// A toggle control and the item it expands.
#[derive(Debug, Clone)]
pub struct AccordionToggle {
    pub control: Element,
    pub item: Element,
}

#[derive(Debug, Clone, Default)]
pub struct AccordionGroup {
    /// Every item that collapses when another one opens.
    pub items: Vec<Element>,
    pub toggles: Vec<AccordionToggle>,
}

#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub element: Element,
    /// Card-like descendants revealed with a stagger.
    pub staggered: Vec<Element>,
}

#[derive(Debug, Clone)]
pub struct Card {
    pub root: Element,
    pub glow: Option<Element>,
    pub heading: Option<String>,
    pub know_more: Option<Element>,
}

#[derive(Debug, Clone)]
pub struct TabControl {
    pub element: Element,
    pub target: String,
}

#[derive(Debug, Clone, Default)]
pub struct TabSet {
    pub controls: Vec<TabControl>,
    pub panels: Vec<Element>,
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub element: Element,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct NavBar {
    pub root: Element,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub faq: AccordionGroup,
    pub weeks: Vec<AccordionToggle>,
    pub reveal: Vec<RevealTarget>,
    pub cards: Vec<Card>,
    pub tabs: TabSet,
    pub nav: Option<NavBar>,
    /// Links of every nav on the page, for highlighting.
    pub nav_links: Vec<NavLink>,
    pub menu_toggle: Option<Element>,
    pub header: Option<Element>,
}

impl Page {
    pub fn attach(document: &Document, config: &SiteConfig) -> Self {
        let sel = &config.selectors;

        let faq = AccordionGroup {
            items: document.query_all(&sel.faq_item),
            toggles: toggles(document, &sel.faq_toggle),
        };

        let reveal = document
            .query_all(&sel.reveal)
            .into_iter()
            .map(|element| RevealTarget {
                // Captured once: the pages are static, so the set cannot change before it intersects.
                staggered: element.query_all(&sel.staggered),
                element,
            })
            .collect();

        let cards = document
            .query_all(&sel.card)
            .into_iter()
            .map(|root| Card {
                glow: root.query_one(&sel.card_glow),
                heading: root
                    .query_one(&sel.card_heading)
                    .and_then(|h| h.text_content()),
                know_more: root.query_one(&sel.know_more),
                root,
            })
            .collect();

        let target_attr = &config.effects.tab_target_attribute;
        let tabs = TabSet {
            controls: document
                .query_all(&sel.tab_control)
                .into_iter()
                .filter_map(|element| {
                    let target = element.get_attribute(target_attr)?;
                    Some(TabControl { element, target })
                })
                .collect(),
            panels: document.query_all(&sel.tab_panel),
        };

        let nav = document.query_one(&sel.nav).map(|root| NavBar {
            links: nav_links(root.query_all(&sel.nav_link)),
            root,
        });
        let all_links = nav_links(descendants_of_all(document.query_all(&sel.nav), |root| {
            root.query_all(&sel.nav_link)
        }));

        Page {
            faq,
            weeks: toggles(document, &sel.week_toggle),
            reveal,
            cards,
            tabs,
            nav,
            nav_links: all_links,
            menu_toggle: document.query_one(&sel.menu_toggle),
            header: document.query_one(&sel.header),
        }
    }
}

/// Controls matching `selector`, paired with their parent element.
/// Controls without a parent are dropped.
fn toggles(document: &Document, selector: &str) -> Vec<AccordionToggle> {
    document
        .query_all(selector)
        .into_iter()
        .filter_map(|control| {
            let item = control.parent_element()?;
            Some(AccordionToggle { control, item })
        })
        .collect()
}

/// Results of `query` under each of `roots`, each once and in root order.
/// Querying per root keeps comma-list root selectors intact.
fn descendants_of_all<R, E, F>(roots: Vec<R>, query: F) -> Vec<E>
where
    E: PartialEq,
    F: Fn(&R) -> Vec<E>,
{
    let mut found: Vec<E> = Vec::new();
    for root in &roots {
        for el in query(root) {
            if !found.contains(&el) {
                found.push(el);
            }
        }
    }
    found
}

fn nav_links(elements: Vec<Element>) -> Vec<NavLink> {
    elements
        .into_iter()
        .map(|element| NavLink {
            href: element.get_attribute("href").unwrap_or_default(),
            element,
        })
        .collect()
}
