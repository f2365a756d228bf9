//! Navigation controller - the only mutable state on the page.
//!
//! Two independent flags:
//!
//! - `menu_open`: closed/open, flipped by [`NavigationController::toggle_menu`],
//!   forced closed by [`NavigationController::close_menu`]
//! - `scrolled_past_threshold`: below/above, driven only by the scroll signal
//!   compared against a fixed pixel threshold (strictly greater than, no
//!   hysteresis, no debounce)
//!
//! The browser side is abstracted behind [`ScrollSignal`] and [`Viewport`] so
//! the same controller runs in the wasm module and in plain unit tests (see
//! [`sim`]).
//!
//! ```rust
//! use std::rc::Rc;
//! use digitech_site::navigation::{NavigationController, sim::{ScrollBus, RecordingViewport}};
//!
//! let bus = Rc::new(ScrollBus::default());
//! let mut nav = NavigationController::new(Rc::new(RecordingViewport::default()));
//! nav.mount(bus.clone());
//!
//! bus.emit(500.0);
//! assert!(nav.state().show_back_to_top());
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Vertical offset, in CSS pixels, past which "back to top" shows.
pub const SCROLL_THRESHOLD_PX: f64 = 400.0;

/// Snapshot of the two UI flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Mobile menu expanded
    pub menu_open: bool,
    /// Last reported scroll offset was above the threshold
    pub scrolled_past_threshold: bool,
}

impl UiState {
    /// Whether the mobile menu panel is shown.
    pub fn show_mobile_menu(self) -> bool {
        self.menu_open
    }

    /// Whether the floating "back to top" control is shown.
    pub fn show_back_to_top(self) -> bool {
        self.scrolled_past_threshold
    }
}

/// Threshold rule: strictly greater than.
pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Callback invoked with the current vertical scroll offset.
pub type ScrollListener = Rc<dyn Fn(f64)>;

/// Handle returned by [`ScrollSignal::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Source of "scroll position changed" notifications.
pub trait ScrollSignal {
    /// Register a listener. It is called with the offset on every event.
    fn subscribe(&self, listener: ScrollListener) -> ListenerId;
    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// Programmatic scrolling.
pub trait Viewport {
    /// Request a smooth scroll to `offset`. Fire-and-forget.
    fn smooth_scroll_to(&self, offset: f64);
}

/// A live subscription. Dropping it unsubscribes, so the listener can never
/// outlive its owner, panics and early returns included.
pub struct ScrollSubscription {
    signal: Rc<dyn ScrollSignal>,
    id: Option<ListenerId>,
}

impl ScrollSubscription {
    /// Subscribe `listener` to `signal`.
    pub fn new(signal: Rc<dyn ScrollSignal>, listener: ScrollListener) -> Self {
        let id = signal.subscribe(listener);
        Self {
            signal,
            id: Some(id),
        }
    }

    /// Id of the underlying listener while still subscribed.
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Unsubscribe now. Calling it again is a no-op.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.signal.unsubscribe(id);
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription").field("id", &self.id).finish()
    }
}

type ChangeHook = Box<dyn Fn(UiState)>;

struct Shared {
    state: Cell<UiState>,
    threshold: f64,
    on_change: RefCell<Option<ChangeHook>>,
}

impl Shared {
    fn update(&self, apply: impl FnOnce(&mut UiState)) {
        let before = self.state.get();
        let mut after = before;
        apply(&mut after);
        if after == before {
            return;
        }
        self.state.set(after);
        trace!(?before, ?after, "ui state changed");
        if let Some(hook) = self.on_change.borrow().as_ref() {
            hook(after);
        }
    }

    fn on_scroll(&self, offset: f64) {
        let above = is_past_threshold(offset, self.threshold);
        self.update(|s| s.scrolled_past_threshold = above);
    }
}

/// Owns [`UiState`] and the scroll subscription.
///
/// Created unmounted with both flags false. [`mount`](Self::mount)
/// subscribes to a scroll signal; [`unmount`](Self::unmount) or dropping the
/// controller releases it.
pub struct NavigationController {
    shared: Rc<Shared>,
    viewport: Rc<dyn Viewport>,
    subscription: Option<ScrollSubscription>,
}

impl NavigationController {
    /// Unmounted controller using [`SCROLL_THRESHOLD_PX`].
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self::with_threshold(viewport, SCROLL_THRESHOLD_PX)
    }

    /// Unmounted controller with a custom threshold.
    pub fn with_threshold(viewport: Rc<dyn Viewport>, threshold: f64) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: Cell::new(UiState::default()),
                threshold,
                on_change: RefCell::new(None),
            }),
            viewport,
            subscription: None,
        }
    }

    /// Threshold in pixels.
    pub fn threshold(&self) -> f64 {
        self.shared.threshold
    }

    /// Current flags.
    pub fn state(&self) -> UiState {
        self.shared.state.get()
    }

    /// Register the hook called after every state change (replaces any
    /// previous one). Not called when an action leaves the state unchanged.
    pub fn on_change(&self, hook: impl Fn(UiState) + 'static) {
        *self.shared.on_change.borrow_mut() = Some(Box::new(hook));
    }

    /// Subscribe to `signal`. Mounting again first releases the previous
    /// subscription.
    pub fn mount(&mut self, signal: Rc<dyn ScrollSignal>) {
        self.unmount();
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let listener: ScrollListener = Rc::new(move |offset: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.on_scroll(offset);
            }
        });
        self.subscription = Some(ScrollSubscription::new(signal, listener));
    }

    /// Release the scroll subscription. State is kept as-is.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
    }

    /// Whether a scroll subscription is live.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Flip `menu_open`.
    pub fn toggle_menu(&self) {
        self.shared.update(|s| s.menu_open = !s.menu_open);
    }

    /// Force `menu_open` to false. Called on every navigation choice.
    pub fn close_menu(&self) {
        self.shared.update(|s| s.menu_open = false);
    }

    /// Ask the viewport to smooth-scroll to the top. The flag follows later,
    /// through the scroll signal.
    pub fn scroll_to_top(&self) {
        self.viewport.smooth_scroll_to(0.0);
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state())
            .field("threshold", &self.threshold())
            .field("subscription", &self.subscription)
            .finish()
    }
}

/// In-memory stand-ins for the browser: a scroll signal that can be driven
/// by hand and a viewport that records scroll requests.
pub mod sim {
    use super::*;

    /// Scroll signal fed through [`ScrollBus::emit`].
    #[derive(Default)]
    pub struct ScrollBus {
        listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
        next_id: Cell<u64>,
    }

    impl ScrollBus {
        /// Deliver one scroll event to every current listener.
        pub fn emit(&self, offset: f64) {
            // Snapshot first: a listener may unsubscribe while being called.
            let listeners: Vec<ScrollListener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, l)| Rc::clone(l))
                .collect();
            for listener in listeners {
                listener(offset);
            }
        }

        /// Number of live listeners.
        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSignal for ScrollBus {
        fn subscribe(&self, listener: ScrollListener) -> ListenerId {
            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.listeners.borrow_mut().push((id, listener));
            id
        }

        fn unsubscribe(&self, id: ListenerId) {
            self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
        }
    }

    /// Viewport that only remembers what it was asked to do.
    #[derive(Default)]
    pub struct RecordingViewport {
        requests: RefCell<Vec<f64>>,
    }

    impl RecordingViewport {
        /// Offsets requested so far, oldest first.
        pub fn requests(&self) -> Vec<f64> {
            self.requests.borrow().clone()
        }
    }

    impl Viewport for RecordingViewport {
        fn smooth_scroll_to(&self, offset: f64) {
            self.requests.borrow_mut().push(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sim::{RecordingViewport, ScrollBus};
    use super::*;
    use pretty_assertions::assert_eq;

    fn mounted() -> (NavigationController, Rc<ScrollBus>, Rc<RecordingViewport>) {
        let bus = Rc::new(ScrollBus::default());
        let viewport = Rc::new(RecordingViewport::default());
        let mut nav = NavigationController::new(viewport.clone());
        nav.mount(bus.clone());
        (nav, bus, viewport)
    }

    #[test]
    fn starts_closed_and_below() {
        let (nav, _, _) = mounted();
        assert_eq!(nav.state(), UiState::default());
        assert!(!nav.state().show_mobile_menu());
        assert!(!nav.state().show_back_to_top());
    }

    #[test]
    fn toggle_strictly_alternates() {
        let (nav, _, _) = mounted();
        for calls in 1..=9 {
            nav.toggle_menu();
            assert_eq!(nav.state().menu_open, calls % 2 == 1, "after {calls} toggles");
        }
    }

    #[test]
    fn close_menu_always_closes() {
        let (nav, _, _) = mounted();
        nav.close_menu();
        assert!(!nav.state().menu_open);
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.state().menu_open);
        nav.close_menu();
        assert!(!nav.state().menu_open);
    }

    #[test]
    fn threshold_is_strict_without_hysteresis() {
        let (nav, bus, _) = mounted();
        let flags: Vec<bool> = [0.0, 399.0, 400.0, 401.0, 399.0]
            .into_iter()
            .map(|offset| {
                bus.emit(offset);
                nav.state().scrolled_past_threshold
            })
            .collect();
        assert_eq!(flags, vec![false, false, false, true, false]);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let bus = Rc::new(ScrollBus::default());
        let mut nav =
            NavigationController::with_threshold(Rc::new(RecordingViewport::default()), 100.0);
        nav.mount(bus.clone());
        bus.emit(150.0);
        assert!(nav.state().scrolled_past_threshold);
        assert_eq!(nav.threshold(), 100.0);
    }

    #[test]
    fn flags_are_independent() {
        let (nav, bus, _) = mounted();
        nav.toggle_menu();
        bus.emit(800.0);
        nav.close_menu();
        assert_eq!(
            nav.state(),
            UiState {
                menu_open: false,
                scrolled_past_threshold: true,
            }
        );
    }

    #[test]
    fn unmount_stops_scroll_updates() {
        let (mut nav, bus, _) = mounted();
        assert_eq!(bus.listener_count(), 1);
        nav.unmount();
        assert_eq!(bus.listener_count(), 0);
        assert!(!nav.is_mounted());

        bus.emit(1000.0);
        assert!(!nav.state().scrolled_past_threshold);
    }

    #[test]
    fn drop_releases_listener() {
        let (nav, bus, _) = mounted();
        drop(nav);
        assert_eq!(bus.listener_count(), 0);
        bus.emit(1000.0);
    }

    #[test]
    fn remount_keeps_a_single_listener() {
        let (mut nav, bus, _) = mounted();
        nav.mount(bus.clone());
        nav.mount(bus.clone());
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn scroll_to_top_requests_offset_zero_without_touching_state() {
        let (nav, bus, viewport) = mounted();
        bus.emit(900.0);
        nav.scroll_to_top();
        assert_eq!(viewport.requests(), vec![0.0]);
        assert!(nav.state().scrolled_past_threshold);
    }

    #[test]
    fn on_change_fires_only_on_real_changes() {
        let (nav, bus, _) = mounted();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        nav.on_change(move |s| sink.borrow_mut().push(s));

        bus.emit(10.0);
        bus.emit(500.0);
        bus.emit(600.0);
        nav.close_menu();
        nav.toggle_menu();

        assert_eq!(
            *seen.borrow(),
            vec![
                UiState {
                    menu_open: false,
                    scrolled_past_threshold: true,
                },
                UiState {
                    menu_open: true,
                    scrolled_past_threshold: true,
                },
            ]
        );
    }

    #[test]
    fn subscription_release_is_idempotent() {
        let bus = Rc::new(ScrollBus::default());
        let mut sub = ScrollSubscription::new(bus.clone(), Rc::new(|_: f64| {}));
        assert!(sub.id().is_some());
        sub.release();
        sub.release();
        assert_eq!(sub.id(), None);
        assert_eq!(bus.listener_count(), 0);
    }
}
