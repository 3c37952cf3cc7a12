//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use crate::config::AppConfig;
use crate::frontend::home::HomePage;
use crate::frontend::toast::{ToastHost, Toasts};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_env());
    Toasts::provide();

    view! {
        <Router>
            <ToastHost/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/buyerlogin" view=BuyerLoginPage/>
            </Routes>
        </Router>
    }
}

/// Placeholder for the buyer login flow (owned by the auth feature).
#[component]
fn BuyerLoginPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="bg-white rounded-lg shadow-md border border-gray-200 p-8 text-center max-w-md">
                <h1 class="text-2xl font-bold text-gray-800 mb-2">"Buyer Login"</h1>
                <p class="text-gray-500">
                    "Sign in to add items to your cart, buy products and browse the full catalog."
                </p>
            </div>
        </div>
    }
}
