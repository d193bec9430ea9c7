//! Scroll and resize synchronization.
//!
//! This module provides `TableLayout`, the per-table context that:
//! - Coalesces structural changes into one deferred recompute per turn
//! - Updates scroll shadows and the affixed header on content scroll
//! - Re-measures on viewport resize
//! - Holds listener subscriptions only while fixed behavior needs them

mod host;
mod listeners;
mod scroll;
mod state;
mod table;

pub use host::{Listener, TableHost, TaskHandle};
pub use listeners::ListenerSet;
pub use scroll::{ScrollPassthrough, SCROLL_EVENTS};
pub use state::{PendingWork, SyncState};
pub use table::{HeaderPosition, TableLayout};
