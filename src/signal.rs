//! Payload-less change signal for the panel's render subscribers
//!
//! Single writer (the controller), any number of readers. Everything runs on
//! the host's event loop thread, so subscribers are plain `FnMut` closures.

/// Handle returned by [`ChangeSignal::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Listener = Box<dyn FnMut()>;

/// "Data changed" signal with no payload
#[derive(Default)]
pub struct ChangeSignal {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    fired: u64,
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called on every fire
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Notify every listener once
    pub fn fire(&mut self) {
        self.fired += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total number of fires since creation
    pub fn fire_count(&self) -> u64 {
        self.fired
    }
}

impl std::fmt::Debug for ChangeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("listeners", &self.listeners.len())
            .field("fired", &self.fired)
            .finish()
    }
}
