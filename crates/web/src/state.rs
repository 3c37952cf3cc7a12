//! View-state policy for the landing page (WASM-compatible).
//!
//! These types must not depend on browser-only dependencies so the reveal
//! sequence and the gate rules stay testable on the host.

/// Delay before product cards become visible after a successful fetch.
pub const CARD_REVEAL_DELAY_MS: u32 = 1_500;

/// Further delay before card images start loading.
pub const IMAGE_REVEAL_DELAY_MS: u32 = 1_000;

/// Delay between the gate notice and the login redirect.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_000;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Route every gated action lands on.
pub const LOGIN_ROUTE: &str = "/buyerlogin";

/// Skeleton placeholders shown in the featured section while loading.
pub const FEATURED_SKELETONS: usize = 4;

/// Skeleton placeholders shown in the general grid while loading.
pub const GRID_SKELETONS: usize = 8;

/// Session-scoped filter keys reset when the landing page mounts. Owned by
/// the catalog browser; clearing them here keeps its filters from leaking
/// into a fresh visit.
pub const FILTER_RESET_KEYS: [&str; 3] = ["selectedCategory", "priceRange", "sortBy"];

/// Staged rendering of one fetch cycle.
///
/// The phases are strictly ordered: images can only go live after the cards
/// are visible, because the image step is scheduled from within the card
/// step. The enum makes the out-of-order states unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Fetch in flight, skeleton placeholders shown.
    Loading,
    /// Cards visible, text content only.
    Cards,
    /// Images eligible to load.
    Images,
}

impl RevealPhase {
    /// Move to the next phase; saturates at [`RevealPhase::Images`].
    pub fn advance(self) -> Self {
        match self {
            RevealPhase::Loading => RevealPhase::Cards,
            RevealPhase::Cards | RevealPhase::Images => RevealPhase::Images,
        }
    }

    pub fn is_loading(self) -> bool {
        matches!(self, RevealPhase::Loading)
    }

    pub fn cards_visible(self) -> bool {
        matches!(self, RevealPhase::Cards | RevealPhase::Images)
    }

    pub fn images_live(self) -> bool {
        matches!(self, RevealPhase::Images)
    }
}

/// A commerce action intercepted by the login gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    AddToCart,
    BuyNow,
    BrowseCategories,
    ViewAll,
    ViewDetails,
}

impl GateAction {
    /// What the user was trying to do, as named in the gate notice.
    pub fn intent(self) -> &'static str {
        match self {
            GateAction::AddToCart => "add items to cart",
            GateAction::BuyNow => "buy products",
            GateAction::BrowseCategories => "browse categories",
            GateAction::ViewAll => "view all products",
            GateAction::ViewDetails => "view product details",
        }
    }

    /// Toast message shown before the login redirect.
    pub fn notice(self) -> String {
        format!("Please login to {}", self.intent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PHASES: [RevealPhase; 3] =
        [RevealPhase::Loading, RevealPhase::Cards, RevealPhase::Images];

    const ALL_ACTIONS: [GateAction; 5] = [
        GateAction::AddToCart,
        GateAction::BuyNow,
        GateAction::BrowseCategories,
        GateAction::ViewAll,
        GateAction::ViewDetails,
    ];

    #[test]
    fn advance_walks_the_reveal_sequence() {
        let phase = RevealPhase::Loading;
        let phase = phase.advance();
        assert_eq!(phase, RevealPhase::Cards);
        let phase = phase.advance();
        assert_eq!(phase, RevealPhase::Images);
        // Saturates.
        assert_eq!(phase.advance(), RevealPhase::Images);
    }

    #[test]
    fn loading_shows_neither_cards_nor_images() {
        assert!(RevealPhase::Loading.is_loading());
        assert!(!RevealPhase::Loading.cards_visible());
        assert!(!RevealPhase::Loading.images_live());
    }

    #[test]
    fn cards_phase_is_text_only() {
        assert!(!RevealPhase::Cards.is_loading());
        assert!(RevealPhase::Cards.cards_visible());
        assert!(!RevealPhase::Cards.images_live());
    }

    #[test]
    fn images_never_live_before_cards_are_visible() {
        for phase in ALL_PHASES {
            if phase.images_live() {
                assert!(phase.cards_visible());
            }
        }
    }

    #[test]
    fn every_action_names_its_intent() {
        for action in ALL_ACTIONS {
            let notice = action.notice();
            assert!(notice.starts_with("Please login to "));
            assert!(notice.ends_with(action.intent()));
        }
    }

    #[test]
    fn cart_and_buy_notices_match_the_storefront_copy() {
        assert_eq!(
            GateAction::AddToCart.notice(),
            "Please login to add items to cart"
        );
        assert_eq!(GateAction::BuyNow.notice(), "Please login to buy products");
        assert_eq!(
            GateAction::ViewAll.notice(),
            "Please login to view all products"
        );
    }

    #[test]
    fn featured_skeletons_match_the_featured_limit() {
        assert_eq!(FEATURED_SKELETONS, shoplane_catalog::FEATURED_LIMIT);
        assert_eq!(GRID_SKELETONS, 8);
    }
}
