//! Product card and skeleton placeholder views.

use leptos::*;
use web_sys::MouseEvent;

use shoplane_catalog::Product;

use crate::config::AppConfig;
use crate::frontend::api::PLACEHOLDER_IMAGE_URL;
use crate::frontend::gate::redirect_to_login;
use crate::frontend::toast::Toasts;
use crate::state::{GateAction, RevealPhase};

/// Every card carries the same fixed rating until reviews ship.
const RATING_STARS: u32 = 4;
const RATING_COUNT: u32 = 42;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// Populated product card with gated actions.
#[component]
pub fn ProductCard(
    product: Product,
    /// Per-card transition stagger in milliseconds.
    delay_ms: u32,
    phase: ReadSignal<RevealPhase>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<Toasts>();

    let name = product.name.clone();
    let alt = product.name.clone();
    let price_label = format!("₹{}", product.cost);

    // Swapped to the placeholder if the backend image fails to load.
    let (image_src, set_image_src) = create_signal(config.product_image_url(product.id));

    let on_card = move |_| redirect_to_login(toasts, GateAction::ViewDetails);
    let on_buy = move |ev: MouseEvent| {
        ev.stop_propagation();
        redirect_to_login(toasts, GateAction::BuyNow);
    };
    let on_add = move |ev: MouseEvent| {
        ev.stop_propagation();
        redirect_to_login(toasts, GateAction::AddToCart);
    };

    view! {
        <div
            class=move || {
                format!(
                    "bg-white rounded-lg overflow-hidden shadow-md border border-gray-200 \
                     hover:shadow-lg transition-all duration-300 {}",
                    if phase.get().cards_visible() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-4"
                    },
                )
            }
            style=format!("transition-delay: {delay_ms}ms;")
            on:click=on_card
        >
            <div class="relative h-48 bg-gray-100 cursor-pointer">
                {move || {
                    if phase.get().images_live() {
                        view! {
                            <img
                                src=image_src
                                alt=alt.clone()
                                class="w-full h-full object-contain"
                                on:error=move |_| {
                                    set_image_src.set(PLACEHOLDER_IMAGE_URL.to_string())
                                }
                            />
                        }
                            .into_view()
                    } else {
                        view! {
                            <div class="w-full h-full flex items-center justify-center">
                                <div class="text-gray-400 animate-pulse">
                                    <svg
                                        xmlns="http://www.w3.org/2000/svg"
                                        class="h-12 w-12"
                                        fill="none"
                                        viewBox="0 0 24 24"
                                        stroke="currentColor"
                                    >
                                        <path
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                            stroke-width="2"
                                            d="M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z"
                                        />
                                    </svg>
                                </div>
                            </div>
                        }
                            .into_view()
                    }
                }}

                <div class="absolute bottom-2 left-2 bg-gray-900 text-white text-sm font-bold px-2 py-1 rounded-md">
                    {price_label}
                </div>
            </div>

            <div class="p-4">
                <h3 class="font-medium text-gray-800 text-lg truncate" title=name.clone()>
                    {name.clone()}
                </h3>
                <div class="flex items-center mt-1 mb-3">
                    <StarRating/>
                    <span class="text-gray-500 text-xs ml-1">{format!("({RATING_COUNT})")}</span>
                </div>

                <div class="mt-4 space-y-2">
                    <button
                        on:click=on_buy
                        class="w-full bg-gray-900 text-white py-2 rounded font-medium hover:bg-black transition-colors"
                    >
                        "Buy Now"
                    </button>

                    <button
                        on:click=on_add
                        class="w-full bg-white text-gray-900 py-2 rounded font-medium border border-gray-900 hover:bg-gray-100 transition-colors"
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Fixed 4-of-5 star row (not derived from data).
#[component]
fn StarRating() -> impl IntoView {
    view! {
        <div class="flex items-center">
            {(0..5)
                .map(|i| {
                    let tone = if i < RATING_STARS { "text-yellow-400" } else { "text-gray-300" };
                    view! {
                        <svg
                            class=format!("w-4 h-4 {tone}")
                            fill="currentColor"
                            viewBox="0 0 20 20"
                        >
                            <path d=STAR_PATH></path>
                        </svg>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Skeleton placeholder shown while the listing loads.
#[component]
pub fn SkeletonCard(index: usize) -> impl IntoView {
    view! {
        <div
            class="bg-white rounded-lg overflow-hidden shadow-md border border-gray-200 animate-pulse"
            style=format!("animation-delay: {}ms;", index * 100)
        >
            <div class="h-48 bg-gray-200 skeleton-loading"></div>

            <div class="p-4">
                <div class="h-6 bg-gray-200 rounded skeleton-loading mb-3"></div>
                <div class="h-4 bg-gray-200 rounded skeleton-loading mb-4 w-3/4"></div>
                <div class="h-8 bg-gray-200 rounded skeleton-loading mb-2"></div>
                <div class="h-8 bg-gray-200 rounded skeleton-loading"></div>
            </div>
        </div>
    }
}
