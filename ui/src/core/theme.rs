//! Theme marker observation.
//!
//! The theme authority (the navbar toggle, or whatever restored the settings at
//! launch) writes a `dark` class on a shared root node. Components never inspect
//! that node directly; they receive a [`ThemeRoot`] through context and either
//! query it or [`watch`](ThemeRoot::watch) it for class mutations.
//!
//! Two roots exist:
//! - [`MemoryRoot`]: an in-process class set with push notifications. Used on
//!   desktop/mobile and in tests.
//! - the document root (wasm only): `<html>`'s `classList`, observed with a
//!   `MutationObserver` filtered on the `class` attribute.
//!
//! A root that has no backing node (see [`ThemeRoot::detached`]) reports every
//! class as absent and never notifies.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;

/// Class marker whose presence on the root means dark mode.
pub const DARK_MARKER: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Opposite theme, used by the toggle.
    pub fn flipped(self) -> Self {
        Self::from_dark_flag(!self.is_dark())
    }
}

/// A node carrying a class set that can be watched for mutations.
pub trait ClassRoot {
    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class`. Every call counts as a mutation, even if the set
    /// already had the requested shape.
    fn set_class(&self, class: &str, present: bool);

    /// Subscribe to class mutations. The subscription lives as long as the
    /// returned handle.
    fn watch(&self, on_mutation: Rc<dyn Fn()>) -> WatchHandle;
}

/// Scoped subscription. Dropping the handle (or calling [`release`](Self::release))
/// unsubscribes; no notification is delivered afterwards.
#[must_use = "dropping a WatchHandle releases the subscription immediately"]
pub struct WatchHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl WatchHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Handle for a watch that never delivers anything.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for WatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Default)]
struct MemoryState {
    classes: BTreeSet<String>,
    watchers: Vec<(u64, Rc<dyn Fn()>)>,
    next_watcher: u64,
}

/// In-process class set with synchronous push notifications.
#[derive(Clone, Default)]
pub struct MemoryRoot {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root = Self::new();
        root.state
            .borrow_mut()
            .classes
            .extend(classes.into_iter().map(Into::into));
        root
    }

    pub fn watcher_count(&self) -> usize {
        self.state.borrow().watchers.len()
    }

    fn notify(&self) {
        // Snapshot first so watchers may touch the root from their callback.
        let watchers: Vec<Rc<dyn Fn()>> = self
            .state
            .borrow()
            .watchers
            .iter()
            .map(|(_, watcher)| Rc::clone(watcher))
            .collect();
        for watcher in watchers {
            watcher();
        }
    }
}

impl ClassRoot for MemoryRoot {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        {
            let mut state = self.state.borrow_mut();
            if present {
                state.classes.insert(class.to_string());
            } else {
                state.classes.remove(class);
            }
        }
        self.notify();
    }

    fn watch(&self, on_mutation: Rc<dyn Fn()>) -> WatchHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_watcher;
            state.next_watcher += 1;
            state.watchers.push((id, on_mutation));
            id
        };
        let state: Weak<RefCell<MemoryState>> = Rc::downgrade(&self.state);
        WatchHandle::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().watchers.retain(|(watcher, _)| *watcher != id);
            }
        })
    }
}

/// Root with no backing node.
struct DetachedRoot;

impl ClassRoot for DetachedRoot {
    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn set_class(&self, _class: &str, _present: bool) {}

    fn watch(&self, _on_mutation: Rc<dyn Fn()>) -> WatchHandle {
        WatchHandle::inert()
    }
}

/// Shared handle to whichever root carries the theme marker.
#[derive(Clone)]
pub struct ThemeRoot(Rc<dyn ClassRoot>);

impl ThemeRoot {
    pub fn new(root: impl ClassRoot + 'static) -> Self {
        Self(Rc::new(root))
    }

    pub fn memory(root: MemoryRoot) -> Self {
        Self::new(root)
    }

    pub fn detached() -> Self {
        Self::new(DetachedRoot)
    }

    /// `<html>` of the current document.
    #[cfg(target_arch = "wasm32")]
    pub fn document() -> Self {
        Self::new(dom::DocumentRoot)
    }

    /// Root a launcher should use when nothing more specific is configured.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::document()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::memory(MemoryRoot::new())
        }
    }

    pub fn is_dark(&self) -> bool {
        self.0.has_class(DARK_MARKER)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_flag(self.is_dark())
    }

    pub fn set_theme(&self, theme: Theme) {
        self.0.set_class(DARK_MARKER, theme.is_dark());
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().flipped();
        self.set_theme(next);
        next
    }

    pub fn watch(&self, on_mutation: Rc<dyn Fn()>) -> WatchHandle {
        self.0.watch(on_mutation)
    }
}

impl fmt::Debug for ThemeRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeRoot").field(&self.theme()).finish()
    }
}

/// Mirrors the root's dark marker for as long as it is alive.
///
/// Mounting reads the marker synchronously; every later mutation notification
/// re-reads it and forwards the result to `on_change`, even when unchanged.
/// Dropping the observer (or calling [`unmount`](Self::unmount)) releases the
/// watch.
pub struct ThemeObserver {
    current: Rc<Cell<bool>>,
    watch: WatchHandle,
}

impl ThemeObserver {
    pub fn mount<F>(root: &ThemeRoot, on_change: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        let current = Rc::new(Cell::new(root.is_dark()));
        let source = root.clone();
        let cell = Rc::clone(&current);
        let watch = root.watch(Rc::new(move || {
            let is_dark = source.is_dark();
            cell.set(is_dark);
            on_change(is_dark);
        }));
        Self { current, watch }
    }

    pub fn is_dark(&self) -> bool {
        self.current.get()
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_active()
    }

    pub fn unmount(self) {
        self.watch.release();
    }
}

/// Root from context, or the platform default when no launcher provided one.
pub fn use_theme_root() -> ThemeRoot {
    use_hook(|| try_consume_context::<ThemeRoot>().unwrap_or_else(ThemeRoot::platform_default))
}

/// Reactive dark flag observed from the context root.
pub fn use_theme_flag() -> ReadOnlySignal<bool> {
    let root = use_theme_root();
    use_theme_flag_for(root)
}

/// Reactive dark flag observed from `root`. The watch is released when the
/// calling component unmounts.
pub fn use_theme_flag_for(root: ThemeRoot) -> ReadOnlySignal<bool> {
    let (flag, observer) = use_hook(move || {
        // Seeded from a synchronous read so the first render is already correct.
        let flag = Signal::new(root.is_dark());
        let observer = ThemeObserver::mount(&root, move |is_dark| {
            let mut flag = flag;
            flag.set(is_dark);
        });
        (flag, Rc::new(RefCell::new(Some(observer))))
    });

    use_drop(move || {
        if let Some(observer) = observer.borrow_mut().take() {
            observer.unmount();
        }
    });

    flag.into()
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{ClassRoot, WatchHandle};

    pub(super) struct DocumentRoot;

    fn document_element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }

    impl ClassRoot for DocumentRoot {
        fn has_class(&self, class: &str) -> bool {
            document_element()
                .map(|el| el.class_list().contains(class))
                .unwrap_or(false)
        }

        fn set_class(&self, class: &str, present: bool) {
            let Some(el) = document_element() else {
                return;
            };
            let list = el.class_list();
            let result = if present {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
            if result.is_err() {
                tracing::warn!(class, "could not update root class list");
            }
        }

        fn watch(&self, on_mutation: Rc<dyn Fn()>) -> WatchHandle {
            let Some(el) = document_element() else {
                return WatchHandle::inert();
            };
            let callback = Closure::<dyn FnMut()>::new(move || on_mutation());
            let observer = match web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer,
                Err(_) => return WatchHandle::inert(),
            };

            let options = web_sys::MutationObserverInit::new();
            options.set_attributes(true);
            options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
            if observer.observe_with_options(&el, &options).is_err() {
                return WatchHandle::inert();
            }

            WatchHandle::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
    }
}
