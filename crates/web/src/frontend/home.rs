//! Storefront landing page.
//!
//! One catalog fetch on mount, a shuffled featured/general split, a staged
//! reveal (skeletons, then text cards, then images), and the login gate on
//! every commerce action.

use gloo_storage::{SessionStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use shoplane_catalog::{Product, Showcase};

use crate::config::AppConfig;
use crate::frontend::api;
use crate::frontend::cards::{ProductCard, SkeletonCard};
use crate::frontend::gate::redirect_to_login;
use crate::frontend::toast::Toasts;
use crate::state::{
    CARD_REVEAL_DELAY_MS, FEATURED_SKELETONS, FILTER_RESET_KEYS, GRID_SKELETONS, GateAction,
    IMAGE_REVEAL_DELAY_MS, RevealPhase,
};

/// Quick-navigation category entry.
struct Category {
    name: &'static str,
    icon: &'static str,
}

static CATEGORIES: [Category; 5] = [
    Category { name: "Mobiles", icon: "📱" },
    Category { name: "Electronics", icon: "💻" },
    Category { name: "Fashion", icon: "👕" },
    Category { name: "Appliances", icon: "🏠" },
    Category { name: "Audio", icon: "🎧" },
];

/// Flash-deal banner entry.
struct Deal {
    title: &'static str,
    discount: &'static str,
    accent: &'static str,
}

static DEALS: [Deal; 3] = [
    Deal {
        title: "Limited Time Offer",
        discount: "50% OFF",
        accent: "bg-red-500",
    },
    Deal {
        title: "Weekend Special",
        discount: "BUY 1 GET 1",
        accent: "bg-yellow-500",
    },
    Deal {
        title: "Flash Sale",
        discount: "FLAT ₹1000 OFF",
        accent: "bg-green-500",
    },
];

const PAGE_CSS: &str = "
.hide-scrollbar::-webkit-scrollbar {
  display: none;
}
.hide-scrollbar {
  -ms-overflow-style: none;
  scrollbar-width: none;
}

@keyframes shimmer {
  0% { background-position: -1000px 0; }
  100% { background-position: 1000px 0; }
}

.skeleton-loading {
  background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%);
  background-size: 1000px 100%;
  animation: shimmer 2s infinite linear;
}
";

/// Storefront landing page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<Toasts>();

    let (featured, set_featured) = create_signal(Vec::<Product>::new());
    let (general, set_general) = create_signal(Vec::<Product>::new());
    let (phase, set_phase) = create_signal(RevealPhase::Loading);
    let (error, set_error) = create_signal(String::new());

    let fetch_products = move || {
        let config = config.clone();

        set_phase.set(RevealPhase::Loading);
        set_error.set(String::new());
        set_featured.set(Vec::new());
        set_general.set(Vec::new());

        spawn_local(async move {
            match api::fetch_products(&config).await {
                Ok(listing) => {
                    let showcase = Showcase::from_listing(listing, &mut rand::thread_rng());
                    set_featured.set(showcase.featured);
                    set_general.set(showcase.general);

                    // First phase: cards without images, text content only.
                    TimeoutFuture::new(CARD_REVEAL_DELAY_MS).await;
                    set_phase.update(|p| *p = p.advance());

                    // Second phase: images become eligible to load.
                    TimeoutFuture::new(IMAGE_REVEAL_DELAY_MS).await;
                    set_phase.update(|p| *p = p.advance());
                }
                Err(err) => {
                    logging::error!("failed to fetch products: {err}");
                    set_error.set(format!("Failed to fetch products: {err}"));
                    // No reveal sequence on failure; leave skeleton state now.
                    set_phase.update(|p| *p = p.advance());
                }
            }
        });
    };

    create_effect(move |_| {
        fetch_products();

        // Reset filter state the catalog browser may have left behind.
        for key in FILTER_RESET_KEYS {
            SessionStorage::delete(key);
        }
    });

    view! {
        <div class="bg-gray-100 min-h-screen">
            <div class="container mx-auto px-4 py-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                    {DEALS
                        .iter()
                        .map(|deal| {
                            view! {
                                <div class=format!(
                                    "{} text-white rounded-lg p-4 shadow-md",
                                    deal.accent,
                                )>
                                    <p class="font-medium">{deal.title}</p>
                                    <p class="text-2xl font-bold">{deal.discount}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mb-8">
                    <h2 class="text-xl font-bold text-gray-800 mb-4">"Shop by Category"</h2>
                    <div class="flex gap-4 overflow-x-auto hide-scrollbar">
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <button
                                        class="flex flex-col items-center bg-white rounded-lg shadow-md border border-gray-200 px-6 py-4 hover:shadow-lg transition-shadow"
                                        on:click=move |_| {
                                            redirect_to_login(toasts, GateAction::BrowseCategories)
                                        }
                                    >
                                        <span class="text-2xl mb-1">{category.icon}</span>
                                        <span class="text-sm font-medium text-gray-800">
                                            {category.name}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mb-8">
                    <h2 class="text-xl font-bold text-gray-800 mb-4">"Featured Products"</h2>

                    {move || {
                        let message = error.get();
                        (!message.is_empty())
                            .then(|| {
                                view! {
                                    <div class="bg-red-50 border-l-4 border-red-500 p-4 mb-6 rounded shadow-md">
                                        <p class="text-red-700 font-medium">{message}</p>
                                    </div>
                                }
                            })
                    }}

                    {move || {
                        if phase.get().is_loading() {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                                    {(0..FEATURED_SKELETONS)
                                        .map(|index| view! { <SkeletonCard index=index/> })
                                        .collect_view()}
                                </div>
                            }
                                .into_view()
                        } else if !featured.get().is_empty() {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                                    {featured
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, product)| {
                                            view! {
                                                <ProductCard
                                                    product=product
                                                    delay_ms={index as u32 * 100}
                                                    phase=phase
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_view()
                        } else {
                            ().into_view()
                        }
                    }}
                </div>

                <div class="mb-8">
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-xl font-bold text-gray-800">"All Products"</h2>
                        <button
                            class="text-gray-900 text-sm font-medium hover:underline"
                            on:click=move |_| redirect_to_login(toasts, GateAction::ViewAll)
                        >
                            "View All"
                        </button>
                    </div>

                    {move || {
                        if phase.get().is_loading() {
                            view! {
                                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                                    {(0..GRID_SKELETONS)
                                        .map(|index| view! { <SkeletonCard index=index/> })
                                        .collect_view()}
                                </div>
                            }
                                .into_view()
                        } else if general.get().is_empty() {
                            view! {
                                <div class="flex flex-col items-center justify-center h-64 bg-gray-50 rounded-lg border-2 border-dashed border-gray-300">
                                    <p class="text-gray-500 mb-4">"No products found."</p>
                                </div>
                            }
                                .into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                                    {general
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, product)| {
                                            view! {
                                                <ProductCard
                                                    product=product
                                                    delay_ms={index as u32 * 50}
                                                    phase=phase
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_view()
                        }
                    }}
                </div>
            </div>

            <style>{PAGE_CSS}</style>
        </div>
    }
}
