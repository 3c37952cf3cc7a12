//! Login gate fronting every commerce action.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::frontend::toast::Toasts;
use crate::state::{GateAction, LOGIN_REDIRECT_DELAY_MS, LOGIN_ROUTE};

/// Notify the user what they tried to do, then send them to the buyer login
/// page after a fixed delay. Unconditional: there is no branching on
/// authentication state.
pub fn redirect_to_login(toasts: Toasts, action: GateAction) {
    toasts.info(action.notice());

    spawn_local(async move {
        TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
        leptos_router::use_navigate()(LOGIN_ROUTE, Default::default());
    });
}
