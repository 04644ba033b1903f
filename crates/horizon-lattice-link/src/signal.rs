//! Signals for link label notifications.
//!
//! A [`Signal`] holds any number of connected slots (closures) and invokes
//! all of them each time it is emitted. Link labels use signals
//! to report link activation, focus movement and text changes to whatever
//! native binding drives them.
//!
//! Slots run synchronously on the emitting thread. The connection table is
//! not locked while slots run, so a slot may connect or disconnect slots on
//! the same signal.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_link::Signal;
//!
//! let activated = Signal::<String>::new();
//! let id = activated.connect(|href| println!("open {href}"));
//! activated.emit("https://example.com".to_string());
//! activated.disconnect(id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets::SIGNAL as TARGET;

new_key_type! {
    /// Identifies one signal-slot connection.
    ///
    /// Returned by [`Signal::connect`] and accepted by [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A type-safe notification with any number of connected slots.
pub struct Signal<Args> {
    slots: Arc<SlotTable<Args>>,
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

impl<Args> Signal<Args> {
    /// Create a signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot. It stays connected until [`disconnect`](Self::disconnect)ed.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that is disconnected when the returned guard drops.
    ///
    /// The guard may outlive the signal; dropping it then does nothing.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            slots: Arc::downgrade(&self.slots),
            id,
        }
    }

    /// Remove a connection. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Remove every connection.
    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Suppress (or re-enable) emission.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is currently suppressed.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Invoke every connected slot with `args`.
    ///
    /// Returns the number of slots invoked (zero while blocked).
    pub fn emit(&self, args: Args) -> usize {
        if self.is_blocked() {
            tracing::trace!(target: TARGET, "signal blocked, skipping emit");
            return 0;
        }

        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: TARGET, connection_count = slots.len(), "emitting signal");
        for slot in &slots {
            slot(&args);
        }
        slots.len()
    }
}

/// Disconnects its slot when dropped. Created by [`Signal::connect_scoped`].
pub struct ConnectionGuard<Args> {
    slots: Weak<SlotTable<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The id of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.lock().remove(self.id);
        }
    }
}
