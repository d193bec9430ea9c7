//! Attach/detach bookkeeping so subscriptions are never doubled or
//! released twice.

use std::collections::HashSet;

use super::host::{Listener, TableHost};

#[derive(Debug, Default)]
pub struct ListenerSet {
    attached: HashSet<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.attached.contains(&listener)
    }

    /// Attach unless already attached
    pub fn attach(&mut self, listener: Listener, host: &mut dyn TableHost) {
        if self.attached.insert(listener) {
            host.attach(listener);
        }
    }

    /// Detach if attached; a no-op otherwise
    pub fn detach(&mut self, listener: Listener, host: &mut dyn TableHost) {
        if self.attached.remove(&listener) {
            host.detach(listener);
        }
    }

    /// Attach or detach to match `wanted`
    pub fn set(&mut self, listener: Listener, wanted: bool, host: &mut dyn TableHost) {
        if wanted {
            self.attach(listener, host);
        } else {
            self.detach(listener, host);
        }
    }

    /// Detach everything
    pub fn detach_all(&mut self, host: &mut dyn TableHost) {
        for listener in self.attached.drain() {
            host.detach(listener);
        }
    }
}
