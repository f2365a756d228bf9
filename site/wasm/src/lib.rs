//! Browser bindings for the Digital Tech 101 page.
//!
//! Drives the [`NavigationController`] from real `window` scroll events and
//! clicks, paints its state back onto the server-rendered markup, and runs
//! the one-shot fade-up through an `IntersectionObserver`.
//!
//! Everything attached here is owned by a single [`Page`] value; dropping it
//! (via [`unmount`]) removes every listener and observer it added.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use digitech_site::hooks::{
    BACK_TO_TOP_ID, CLOSE_MENU_ATTR, MENU_TOGGLE_ID, MOBILE_MENU_ID, REVEAL_ATTR,
    REVEAL_READY_CLASS, REVEALED_CLASS, SCROLL_THRESHOLD_ATTR,
};
use digitech_site::navigation::{
    ListenerId, NavigationController, SCROLL_THRESHOLD_PX, ScrollListener, ScrollSignal, UiState,
    Viewport,
};
use digitech_site::reveal::{FADE_UP, Reveal};

/// Per-element index into the reveal table.
const REVEAL_SLOT_ATTR: &str = "data-reveal-slot";

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Initialize panic hook and wire the page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount()
}

/// Attach listeners to the current document. Mounting twice replaces the
/// previous wiring.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    unmount();
    let page = Page::attach()?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Remove every listener and observer added by [`mount`].
#[wasm_bindgen]
pub fn unmount() {
    // Dropped outside the borrow: teardown may re-enter through callbacks.
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(page);
}

/// Current flags as JSON, for debugging from the console.
#[wasm_bindgen]
pub fn ui_state() -> Option<String> {
    PAGE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|page| serde_json::to_string(&page.controller.state()).ok())
    })
}

// ============================================================================
// Scroll signal and viewport over `window`
// ============================================================================

struct WindowListener {
    listener: ScrollListener,
    closure: Closure<dyn FnMut()>,
}

/// `window` scroll events as a [`ScrollSignal`].
pub struct WindowScroll {
    window: Window,
    listeners: RefCell<HashMap<ListenerId, WindowListener>>,
    next_id: Cell<u64>,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    fn offset(window: &Window) -> f64 {
        window.scroll_y().unwrap_or(0.0)
    }

    /// Feed the current offset to every listener without waiting for a
    /// scroll event (page restored mid-scroll).
    pub fn notify(&self) {
        let offset = Self::offset(&self.window);
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .values()
            .map(|l| Rc::clone(&l.listener))
            .collect();
        for listener in listeners {
            listener(offset);
        }
    }

    fn detach(&self, entry: &WindowListener) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", entry.closure.as_ref().unchecked_ref());
    }
}

impl ScrollSignal for WindowScroll {
    fn subscribe(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let window = self.window.clone();
        let forward = Rc::clone(&listener);
        let closure = Closure::wrap(Box::new(move || {
            forward(WindowScroll::offset(&window));
        }) as Box<dyn FnMut()>);

        if let Err(e) = self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            web_sys::console::warn_2(&JsValue::from_str("[digitech] scroll listener:"), &e);
        }
        self.listeners
            .borrow_mut()
            .insert(id, WindowListener { listener, closure });
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let removed = self.listeners.borrow_mut().remove(&id);
        if let Some(entry) = removed {
            self.detach(&entry);
        }
    }
}

impl Drop for WindowScroll {
    fn drop(&mut self) {
        for (_, entry) in self.listeners.borrow_mut().drain() {
            self.detach(&entry);
        }
    }
}

/// Smooth scrolling on `window`.
pub struct WindowViewport {
    window: Window,
}

impl Viewport for WindowViewport {
    fn smooth_scroll_to(&self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

// ============================================================================
// DOM wiring
// ============================================================================

/// An event listener removed again on drop.
struct DomListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Fade-up observer. Each `[data-reveal]` element is revealed at most once.
struct RevealObserver {
    observer: IntersectionObserver,
    root: Element,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(root) = document.document_element() else {
            return Ok(None);
        };
        let nodes = document.query_selector_all(&format!("[{REVEAL_ATTR}]"))?;
        let mut targets = Vec::new();
        for index in 0..nodes.length() {
            if let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                element.set_attribute(REVEAL_SLOT_ATTR, &targets.len().to_string())?;
                targets.push(element);
            }
        }

        let mut reveals = vec![Reveal::default(); targets.len()];
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(slot) = parse_slot(target.get_attribute(REVEAL_SLOT_ATTR)) else {
                        continue;
                    };
                    let fired = reveals
                        .get_mut(slot)
                        .is_some_and(|r| r.observe(entry.is_intersecting()));
                    if fired {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(FADE_UP.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in &targets {
            observer.observe(target);
        }
        // Hidden-until-revealed styling only applies once the observer runs.
        root.class_list().add_1(REVEAL_READY_CLASS)?;

        Ok(Some(Self {
            observer,
            root,
            _callback: callback,
        }))
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        let _ = self.root.class_list().remove_1(REVEAL_READY_CLASS);
    }
}

/// Everything attached to one document. Field order is teardown order.
pub struct Page {
    _clicks: Vec<DomListener>,
    controller: Rc<NavigationController>,
    _reveal: Option<RevealObserver>,
}

impl Page {
    fn attach() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let threshold = parse_threshold(
            document
                .body()
                .and_then(|body| body.get_attribute(SCROLL_THRESHOLD_ATTR)),
        );
        let scroll = Rc::new(WindowScroll::new(window.clone()));
        let viewport = Rc::new(WindowViewport {
            window: window.clone(),
        });

        let mut controller = NavigationController::with_threshold(viewport, threshold);
        let painter = Painter {
            toggle: document.get_element_by_id(MENU_TOGGLE_ID),
            menu: document.get_element_by_id(MOBILE_MENU_ID),
            back_to_top: document.get_element_by_id(BACK_TO_TOP_ID),
        };
        painter.paint(controller.state());
        controller.on_change(move |state| painter.paint(state));
        controller.mount(scroll.clone());
        scroll.notify();
        let controller = Rc::new(controller);

        let mut clicks = Vec::new();
        if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
            let nav = Rc::clone(&controller);
            clicks.push(DomListener::new(&toggle, "click", move |_| nav.toggle_menu())?);
        }
        let links = document.query_selector_all(&format!("[{CLOSE_MENU_ATTR}]"))?;
        for index in 0..links.length() {
            if let Some(link) = links.get(index) {
                let nav = Rc::clone(&controller);
                clicks.push(DomListener::new(&link, "click", move |_| nav.close_menu())?);
            }
        }
        if let Some(button) = document.get_element_by_id(BACK_TO_TOP_ID) {
            let nav = Rc::clone(&controller);
            clicks.push(DomListener::new(&button, "click", move |_| nav.scroll_to_top())?);
        }

        let reveal = RevealObserver::attach(&document)?;

        Ok(Self {
            _clicks: clicks,
            controller,
            _reveal: reveal,
        })
    }
}

/// Writes [`UiState`] onto the server-rendered elements.
struct Painter {
    toggle: Option<Element>,
    menu: Option<Element>,
    back_to_top: Option<Element>,
}

impl Painter {
    fn paint(&self, state: UiState) {
        if let Some(menu) = &self.menu {
            let _ = menu.toggle_attribute_with_force("hidden", !state.show_mobile_menu());
        }
        if let Some(toggle) = &self.toggle {
            let _ = toggle.set_attribute("aria-expanded", aria_bool(state.show_mobile_menu()));
        }
        if let Some(button) = &self.back_to_top {
            let _ = button.toggle_attribute_with_force("hidden", !state.show_back_to_top());
        }
    }
}

// ============================================================================
// Attribute parsing
// ============================================================================

/// Threshold from the body attribute; anything unusable falls back to the
/// default.
fn parse_threshold(raw: Option<String>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .unwrap_or(SCROLL_THRESHOLD_PX)
}

fn parse_slot(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.parse().ok())
}

fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
