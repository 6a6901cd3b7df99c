use std::sync::{Arc, Mutex, PoisonError, Weak};

pub type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

///
/// Listeners called after notifications change
///
#[derive(Default)]
pub struct ChangeListeners {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn len(&self) -> usize {
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Calls every listener.
    /// Listeners are called without holding the lock, so they may
    /// subscribe, unsubscribe or read the store themselves.
    ///
    pub fn notify(&self) {
        let listeners = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect::<Vec<_>>()
        };

        tracing::trace!(count = listeners.len(), "notifying listeners");
        for listener in listeners {
            listener();
        }
    }
}

///
/// Keeps listener subscribed until dropped or [Subscription::unsubscribe] is called
///
#[must_use = "listener is unsubscribed when subscription is dropped"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.listeners.retain(|(id, _)| *id != self.id);
    }
}
