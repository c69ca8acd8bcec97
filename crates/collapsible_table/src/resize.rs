//! Viewport resize events.
//!
//! [`ResizeBus`] is an in-process broadcaster of viewport sizes, standing in
//! for a window's resize notifications. Listeners hold a
//! [`ResizeSubscription`]; dropping it unsubscribes, so a table can never
//! outlive its registration.
//!
//! # Example
//!
//! ```rust
//! use collapsible_table::resize::{ResizeBus, ViewportSize};
//!
//! let bus = ResizeBus::new();
//! let subscription = bus.subscribe();
//! assert_eq!(bus.listener_count(), 1);
//!
//! bus.publish(ViewportSize::window(1024));
//! bus.publish(ViewportSize::window(640));
//! assert_eq!(subscription.latest(), Some(ViewportSize::window(640)));
//!
//! drop(subscription);
//! assert_eq!(bus.listener_count(), 0);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// Size information carried by a resize event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Width of the whole window.
    pub window_width: u32,
    /// Width of the element containing the table, when it can be measured.
    pub container_width: Option<u32>,
}

impl ViewportSize {
    /// A size with only the window width known.
    #[must_use]
    pub fn window(width: u32) -> Self {
        Self {
            window_width: width,
            container_width: None,
        }
    }

    /// A size with both window and container widths known.
    #[must_use]
    pub fn with_container(window_width: u32, container_width: u32) -> Self {
        Self {
            window_width,
            container_width: Some(container_width),
        }
    }

    /// Width the layout should fit into.
    ///
    /// Uses the container width when tracking it is enabled and it has been
    /// measured, the window width otherwise.
    #[must_use]
    pub fn effective_width(&self, use_container_width: bool) -> u32 {
        match self.container_width {
            Some(width) if use_container_width => width,
            _ => self.window_width,
        }
    }
}

#[derive(Debug, Default)]
struct BusInner {
    next_id: u64,
    listeners: BTreeMap<u64, Sender<ViewportSize>>,
    last: Option<ViewportSize>,
}

/// Broadcasts viewport sizes to every live subscription.
#[derive(Debug, Clone, Default)]
pub struct ResizeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ResizeBus {
    /// Creates a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener.
    #[must_use]
    pub fn subscribe(&self) -> ResizeSubscription {
        let (tx, rx) = mpsc::channel();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, tx);
        tracing::debug!(id, "resize listener subscribed");

        ResizeSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
            events: rx,
        }
    }

    /// Sends `size` to every listener.
    pub fn publish(&self, size: ViewportSize) {
        let mut inner = self.inner.borrow_mut();
        inner.last = Some(size);
        inner.listeners.retain(|_, tx| tx.send(size).is_ok());
    }

    /// Most recently published size.
    #[must_use]
    pub fn current(&self) -> Option<ViewportSize> {
        self.inner.borrow().last
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// A live registration on a [`ResizeBus`]. Unsubscribes on drop.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
    events: Receiver<ViewportSize>,
}

impl ResizeSubscription {
    /// Drains queued events and returns the newest one.
    #[must_use]
    pub fn latest(&self) -> Option<ViewportSize> {
        self.events.try_iter().last()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().listeners.remove(&self.id);
            tracing::debug!(id = self.id, "resize listener unsubscribed");
        }
    }
}
