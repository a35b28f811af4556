//! Scroll event subscriptions with scoped lifetimes.
//!
//! A [`Subscription`] releases its handler when dropped, so a torn-down
//! controller can never be called again, whichever way it was torn down.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::anchor::SectionRegistry;
use crate::config::NavConfig;
use crate::controller::{NavController, NavUIState};
use crate::error::Result;
use crate::geometry::PageGeometry;

type Handler = Rc<RefCell<dyn FnMut(&dyn PageGeometry)>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: BTreeMap<u64, Handler>,
}

/// Single-threaded source of scroll events.
///
/// Cloning shares the same listener set.
#[derive(Clone, Default)]
pub struct ScrollEvents {
    inner: Rc<RefCell<Listeners>>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&dyn PageGeometry) + 'static) -> Subscription {
        let handler: Handler = Rc::new(RefCell::new(handler));
        let id = {
            let mut listeners = self.inner.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.handlers.insert(id, handler);
            id
        };

        let listeners = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().handlers.remove(&id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    /// Deliver one scroll event to every live handler, in subscription order.
    ///
    /// A handler released by an earlier handler during the same emit is not
    /// called. A handler that re-enters `emit` on itself is skipped for the
    /// nested event.
    pub fn emit(&self, geometry: &dyn PageGeometry) {
        let ids: Vec<u64> = self.inner.borrow().handlers.keys().copied().collect();
        for id in ids {
            let handler = self.inner.borrow().handlers.get(&id).cloned();
            let Some(handler) = handler else {
                continue;
            };
            let Ok(mut handler) = handler.try_borrow_mut() else {
                continue;
            };
            (&mut *handler)(geometry);
        }
    }
}

/// Handle to a registered scroll handler. Dropping it unsubscribes.
#[must_use]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}

/// A [`NavController`] attached to a scroll event source.
///
/// The subscription is acquired last, after everything that can fail, and is
/// released when this value is dropped.
pub struct MountedNav {
    // Dropped before the controller.
    _subscription: Subscription,
    controller: Rc<RefCell<NavController>>,
}

impl MountedNav {
    pub fn mount(
        events: &ScrollEvents,
        registry: SectionRegistry,
        config: NavConfig,
        geometry: &dyn PageGeometry,
    ) -> Result<Self> {
        let controller = Rc::new(RefCell::new(NavController::new(registry, config, geometry)?));

        let weak = Rc::downgrade(&controller);
        let subscription = events.subscribe(move |geometry| {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().on_scroll(geometry);
            }
        });
        debug!(listeners = events.listener_count(), "Scroll handler attached");

        Ok(Self {
            _subscription: subscription,
            controller,
        })
    }

    /// Borrow the controller. Do not hold the borrow across an emit.
    pub fn controller(&self) -> Ref<'_, NavController> {
        self.controller.borrow()
    }

    pub fn controller_mut(&self) -> RefMut<'_, NavController> {
        self.controller.borrow_mut()
    }

    pub fn state(&self) -> NavUIState {
        self.controller.borrow().state().clone()
    }

    /// Detach from the event source. Equivalent to dropping.
    pub fn unmount(self) {
        debug!("Scroll handler released");
    }
}
