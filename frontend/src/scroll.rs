//! Smooth scrolling for same-page anchor links.
//!
//! Every `<a href="#...">` on the page gets a click listener that cancels the
//! browser's jump and animates the matching section into view instead.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Section id an anchor href points at. `"#"` and non-fragment hrefs have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// The part of the document smooth scrolling needs.
pub trait SectionLookup {
    type Section;

    fn find(&self, id: &str) -> Option<Self::Section>;
    fn scroll_into_view(&self, section: &Self::Section);
}

/// Scrolls to the section named by `href`. Returns false when there is
/// nothing to scroll to, which is never an error.
pub fn follow_anchor<L: SectionLookup>(href: Option<&str>, lookup: &L) -> bool {
    let Some(id) = href.and_then(fragment_target) else {
        return false;
    };
    match lookup.find(id) {
        Some(section) => {
            lookup.scroll_into_view(&section);
            true
        }
        None => {
            debug!("No section with id '{}', ignoring anchor click", id);
            false
        }
    }
}

pub struct DocumentSections {
    document: Document,
}

impl DocumentSections {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl SectionLookup for DocumentSections {
    type Section = Element;

    fn find(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, section: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Click listeners registered on the page's fragment anchors. Dropping this
/// removes exactly the closures it added.
pub struct AnchorListeners {
    bindings: Vec<(Element, Closure<dyn FnMut(Event)>)>,
}

impl AnchorListeners {
    pub fn attach(document: &Document) -> Self {
        let mut bindings = Vec::new();

        let anchors = match document.query_selector_all(ANCHOR_SELECTOR) {
            Ok(anchors) => anchors,
            Err(err) => {
                warn!("Could not query anchors for smooth scroll: {:?}", err);
                return Self { bindings };
            }
        };

        for index in 0..anchors.length() {
            let Some(anchor) = anchors
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };

            let target = anchor.clone();
            let sections = DocumentSections::new(document.clone());
            let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                let href = target.get_attribute("href");
                follow_anchor(href.as_deref(), &sections);
            });

            if let Err(err) = anchor
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                warn!("Could not attach smooth scroll listener: {:?}", err);
                continue;
            }
            bindings.push((anchor, listener));
        }

        debug!("Smooth scroll attached to {} anchors", bindings.len());
        Self { bindings }
    }
}

impl Drop for AnchorListeners {
    fn drop(&mut self) {
        for (anchor, listener) in self.bindings.drain(..) {
            let _ = anchor
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

/// Attaches smooth scrolling when the calling component mounts and detaches
/// it on unmount.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(|_| {
        let listeners = window()
            .and_then(|window| window.document())
            .map(|document| AnchorListeners::attach(&document));
        move || drop(listeners)
    }, ());
}
