//! Effect view capability flag.
//!
//! Older toolkit versions do not ship an effect view type. Whether it exists
//! is probed once and cached for the lifetime of the process; every
//! translucency operation checks the cached flag and becomes a no-op when it
//! is false.
//!
//! # Design
//!
//! - The flag lives in a `OnceLock<bool>`: first read probes, later reads are
//!   plain loads and the value never changes afterwards.
//! - [`PROCESS_EFFECT_VIEW_SUPPORT`] is the process-wide instance. Windows
//!   use it unless another `&'static EffectViewSupport` is injected.

use std::sync::OnceLock;

use tracing::debug;

use crate::toolkit::Toolkit;

/// Init-once cache of the effect view probe result.
#[derive(Debug)]
pub struct EffectViewSupport {
    cell: OnceLock<bool>,
}

/// Process-wide capability flag.
pub static PROCESS_EFFECT_VIEW_SUPPORT: EffectViewSupport = EffectViewSupport::new();

impl EffectViewSupport {
    /// Create an unresolved flag.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Create a flag that is already resolved to `supported`.
    pub fn resolved(supported: bool) -> Self {
        let support = Self::new();
        let _ = support.cell.set(supported);
        support
    }

    /// Return the cached value, running `probe` on first use only.
    pub fn resolve(&self, probe: impl FnOnce() -> bool) -> bool {
        *self.cell.get_or_init(|| {
            let supported = probe();
            debug!(supported, "effect view capability resolved");
            supported
        })
    }

    /// Cached value, or `None` if nothing has probed yet.
    pub fn get(&self) -> Option<bool> {
        self.cell.get().copied()
    }
}

impl Default for EffectViewSupport {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the process-wide flag using `toolkit`'s runtime probe.
pub fn supports_effect_views<T: Toolkit>(toolkit: &T) -> bool {
    PROCESS_EFFECT_VIEW_SUPPORT.resolve(|| toolkit.has_effect_view_type())
}
