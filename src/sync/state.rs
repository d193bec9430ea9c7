//! Deferred recompute state.
//!
//! DOM-dependent work runs on the next turn so the DOM reflects the latest
//! structure before it is measured. Triggers arriving before that turn are
//! merged into the pending work; the pending handle is cancelled and
//! rescheduled, never stacked.

use super::host::TaskHandle;

/// Work items waiting for the next turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingWork {
    /// Rebuild the position index
    pub rebuild: bool,
    /// Re-read overflow flags and the content position
    pub fixed_header: bool,
    /// Re-read header cell widths (affixed header / virtual scroll)
    pub header_widths: bool,
    /// Recompute the usable table width
    pub table_width: bool,
    /// Recompute scroll shadows
    pub shadow: bool,
}

impl PendingWork {
    pub const REBUILD: Self = Self {
        rebuild: true,
        fixed_header: false,
        header_widths: false,
        table_width: false,
        shadow: false,
    };

    /// Everything
    pub const ALL: Self = Self {
        rebuild: true,
        fixed_header: true,
        header_widths: true,
        table_width: true,
        shadow: true,
    };

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            rebuild: self.rebuild || other.rebuild,
            fixed_header: self.fixed_header || other.fixed_header,
            header_widths: self.header_widths || other.header_widths,
            table_width: self.table_width || other.table_width,
            shadow: self.shadow || other.shadow,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Recompute state of one table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    /// A turn is scheduled and will run `work`
    PendingRecompute {
        handle: TaskHandle,
        work: PendingWork,
    },
}

impl SyncState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingRecompute { .. })
    }

    /// Work waiting for the next turn
    pub fn pending_work(&self) -> PendingWork {
        match self {
            Self::Idle => PendingWork::default(),
            Self::PendingRecompute { work, .. } => *work,
        }
    }
}
