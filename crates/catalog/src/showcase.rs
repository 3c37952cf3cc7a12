use rand::Rng;
use rand::seq::SliceRandom;

use crate::product::Product;

/// Number of records set aside for the featured section.
pub const FEATURED_LIMIT: usize = 4;

/// A shuffled, partitioned view of one catalog listing.
///
/// `featured` holds at most [`FEATURED_LIMIT`] records, `general` the rest.
/// Together they are always a permutation of the input listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Showcase {
    pub featured: Vec<Product>,
    pub general: Vec<Product>,
}

impl Showcase {
    /// Uniformly shuffle `listing` (Fisher–Yates) and split off the first
    /// [`FEATURED_LIMIT`] records as featured.
    ///
    /// The RNG is injected so tests can seed it.
    pub fn from_listing<R: Rng>(mut listing: Vec<Product>, rng: &mut R) -> Self {
        listing.shuffle(rng);
        let split = listing.len().min(FEATURED_LIMIT);
        let general = listing.split_off(split);

        Self {
            featured: listing,
            general,
        }
    }

    /// Total number of records across both sections.
    pub fn len(&self) -> usize {
        self.featured.len() + self.general.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.general.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            cost: id as f64 * 10.0,
            category: None,
            description: None,
        }
    }

    fn listing(n: i64) -> Vec<Product> {
        (0..n).map(product).collect()
    }

    fn sorted_ids(showcase: &Showcase) -> Vec<i64> {
        let mut ids: Vec<i64> = showcase
            .featured
            .iter()
            .chain(&showcase.general)
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn empty_listing_yields_empty_sections() {
        let showcase = Showcase::from_listing(vec![], &mut StdRng::seed_from_u64(1));
        assert!(showcase.featured.is_empty());
        assert!(showcase.general.is_empty());
        assert!(showcase.is_empty());
    }

    #[test]
    fn short_listing_is_all_featured() {
        let showcase = Showcase::from_listing(listing(3), &mut StdRng::seed_from_u64(1));
        assert_eq!(showcase.featured.len(), 3);
        assert!(showcase.general.is_empty());
    }

    #[test]
    fn exact_limit_fills_featured_only() {
        let showcase = Showcase::from_listing(listing(4), &mut StdRng::seed_from_u64(1));
        assert_eq!(showcase.featured.len(), 4);
        assert!(showcase.general.is_empty());
    }

    #[test]
    fn long_listing_splits_after_limit() {
        let showcase = Showcase::from_listing(listing(10), &mut StdRng::seed_from_u64(1));
        assert_eq!(showcase.featured.len(), 4);
        assert_eq!(showcase.general.len(), 6);
        assert_eq!(showcase.len(), 10);
    }

    #[test]
    fn split_preserves_every_record() {
        let showcase = Showcase::from_listing(listing(10), &mut StdRng::seed_from_u64(7));
        assert_eq!(sorted_ids(&showcase), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_reproduces_the_same_order() {
        let a = Showcase::from_listing(listing(20), &mut StdRng::seed_from_u64(42));
        let b = Showcase::from_listing(listing(20), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_reorders_a_long_listing() {
        let showcase = Showcase::from_listing(listing(20), &mut StdRng::seed_from_u64(42));
        let order: Vec<i64> = showcase
            .featured
            .iter()
            .chain(&showcase.general)
            .map(|p| p.id)
            .collect();
        assert_ne!(order, (0..20).collect::<Vec<_>>());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: featured/general sizes follow min(N,4) / N-4.
            #[test]
            fn partition_sizes(n in 0i64..64, seed in any::<u64>()) {
                let showcase =
                    Showcase::from_listing(listing(n), &mut StdRng::seed_from_u64(seed));

                prop_assert_eq!(showcase.featured.len(), (n as usize).min(FEATURED_LIMIT));
                prop_assert_eq!(
                    showcase.general.len(),
                    (n as usize).saturating_sub(FEATURED_LIMIT)
                );
            }

            /// Property: the shuffle is a true permutation (same id multiset
            /// before and after, duplicates included).
            #[test]
            fn permutation_preserves_multiset(
                ids in proptest::collection::vec(any::<i64>(), 0..64),
                seed in any::<u64>(),
            ) {
                let input: Vec<Product> = ids.iter().copied().map(product).collect();
                let showcase =
                    Showcase::from_listing(input, &mut StdRng::seed_from_u64(seed));

                let mut expected = ids;
                expected.sort_unstable();
                prop_assert_eq!(sorted_ids(&showcase), expected);
            }
        }
    }
}
