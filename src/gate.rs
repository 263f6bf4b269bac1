//! Access gate: one decision shared by three navigation triggers

use crate::clock::{Clock, SystemClock};
use crate::config::{GateConfig, GateConfigOverlay};
use crate::redirect::{self, NavigationSink};
use crate::tokens::{check_expiry, TokenSource};

/// Gates entry to protected destinations on token validity.
///
/// One shared instance serves every navigation event. The navigation
/// system binds each trigger kind to its own entry operation (`on_enter`,
/// `on_enter_child`, `on_load`); all three reduce to the same decision:
/// read the stored token, check its expiry against the configured
/// tolerance, and on deny redirect to login carrying the requested
/// destination. The destination is threaded through each decision as a
/// local value, so interleaved decisions cannot observe each other's
/// destination.
pub struct AccessGate<S, N, C = SystemClock> {
    tokens: S,
    nav: N,
    config: GateConfig,
    clock: C,
}

impl<S: TokenSource, N: NavigationSink> AccessGate<S, N> {
    /// Build a gate over the wall clock. Never fails: config fields left
    /// unset in the overlay fall back to their defaults.
    pub fn new(tokens: S, nav: N, overlay: GateConfigOverlay) -> Self {
        Self::with_clock(tokens, nav, overlay, SystemClock)
    }
}

impl<S: TokenSource, N: NavigationSink, C: Clock> AccessGate<S, N, C> {
    /// Build a gate over an explicit clock.
    pub fn with_clock(tokens: S, nav: N, overlay: GateConfigOverlay, clock: C) -> Self {
        Self {
            tokens,
            nav,
            config: GateConfig::merged(overlay),
            clock,
        }
    }

    /// Effective configuration after the default overlay.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Gate a lazy module load. The destination may be absent when the
    /// module has no URL-based path. On `false` the caller must not load
    /// the module.
    pub fn on_load(&self, path: Option<&str>) -> bool {
        self.decide(path)
    }

    /// Gate entry into a child route of an already-active parent.
    pub fn on_enter_child(&self, url: &str) -> bool {
        self.decide(Some(url))
    }

    /// Gate a top-level route entry. Same decision as `on_enter_child`,
    /// kept separate because the surrounding navigation system binds each
    /// trigger kind individually.
    pub fn on_enter(&self, url: &str) -> bool {
        self.decide(Some(url))
    }

    fn decide(&self, destination: Option<&str>) -> bool {
        let record = self.tokens.get();
        let now = self.clock.now();
        let allowed = check_expiry(record.as_ref(), self.config.token_exp_offset, now);
        if !allowed {
            redirect::to_login(&self.nav, &self.config, destination);
        }
        allowed
    }
}
