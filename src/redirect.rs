//! Redirect trigger: adapting a denied decision into a login navigation

use crate::config::GateConfig;

/// Navigation sink capability: move the client to the login destination.
///
/// `return_to` is the destination the client was trying to reach, attached
/// so a later successful authentication can resume it; it is absent for
/// triggers that carry no URL-based destination. The gate does not inspect
/// or await the outcome of the call, and it performs no deduplication --
/// that belongs to the sink, if anywhere.
pub trait NavigationSink {
    fn redirect_to_login(&self, config: &GateConfig, return_to: Option<&str>);
}

/// Fire the login redirect for a denied decision.
pub(crate) fn to_login(sink: &impl NavigationSink, config: &GateConfig, return_to: Option<&str>) {
    tracing::debug!(
        "Access denied for {:?}, redirecting to {}",
        return_to,
        config.login_url
    );
    sink.redirect_to_login(config, return_to);
}
