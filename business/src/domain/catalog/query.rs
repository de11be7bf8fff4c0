use super::model::Product;
use super::value_objects::{Category, PriceRange, SortKey};

/// The combined filter + sort specification driving a catalog view.
///
/// Every field has a neutral value that skips its pipeline stage:
/// an empty search term, `None` for category and price, `0` for the
/// rating threshold.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: String,
    pub category: Option<Category>,
    pub price: Option<PriceRange>,
    pub min_rating: u8,
    pub sort: SortKey,
}

/// Runs the fixed filter/sort pipeline over the product collection.
///
/// Stages apply in order: search, category, price, rating, sort. The
/// input is never mutated; the result is a fresh ordered view and may
/// be empty. All sorts are stable, so products that compare equal under
/// the sort key keep their collection order.
pub fn apply(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let search = query.search.trim().to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
        .filter(|p| query.category.is_none_or(|c| p.category == c))
        .filter(|p| query.price.is_none_or(|range| range.contains(p.price)))
        .filter(|p| query.min_rating == 0 || p.rounded_rating() >= query.min_rating)
        .cloned()
        .collect();

    match query.sort {
        // Stable partition: trending first, everything else untouched.
        SortKey::Trending => view.sort_by_key(|p| !p.is_trending),
        SortKey::Rating => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::PriceAsc => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    view
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::shared::value_objects::ProductId;

    fn product(id: &str, name: &str, price: f64, rating: f64, trending: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: Category::Fashion,
            price,
            stock: 10,
            rating,
            reviews: 12,
            images: vec!["img-1".to_string()],
            is_trending: trending,
            is_eco_friendly: false,
            description: String::new(),
        }
    }

    fn ids(view: &[Product]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn should_return_whole_collection_for_neutral_query() {
        let catalog = vec![
            product("a", "Hoodie", 40.0, 4.0, false),
            product("b", "Sneakers", 90.0, 4.5, false),
        ];

        let view = apply(
            &catalog,
            &CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            },
        );

        assert_eq!(ids(&view), vec!["a", "b"]);
    }

    #[test]
    fn should_match_search_term_case_insensitively() {
        let catalog = vec![
            product("a", "Running Shoe", 60.0, 4.2, false),
            product("b", "Backpack", 45.0, 4.0, false),
        ];

        let view = apply(
            &catalog,
            &CatalogQuery {
                search: "shoe".to_string(),
                ..CatalogQuery::default()
            },
        );

        assert_eq!(ids(&view), vec!["a"]);
    }

    #[test]
    fn should_filter_by_category() {
        let mut catalog = vec![
            product("a", "Hoodie", 40.0, 4.0, false),
            product("b", "Earbuds", 80.0, 4.4, false),
        ];
        catalog[1].category = Category::TechGadgets;

        let view = apply(
            &catalog,
            &CatalogQuery {
                category: Some(Category::TechGadgets),
                ..CatalogQuery::default()
            },
        );

        assert_eq!(ids(&view), vec!["b"]);
    }

    #[test]
    fn should_filter_price_inclusively_with_open_upper_bound() {
        let catalog = vec![
            product("a", "Socks", 9.99, 4.0, false),
            product("b", "Jacket", 200.0, 4.0, false),
            product("c", "Watch", 450.0, 4.0, false),
        ];

        let view = apply(
            &catalog,
            &CatalogQuery {
                price: Some(PriceRange { min: 200.0, max: None }),
                ..CatalogQuery::default()
            },
        );

        assert_eq!(ids(&view), vec!["b", "c"]);
    }

    #[test]
    fn should_compare_rounded_rating_against_threshold() {
        let catalog = vec![
            product("a", "Lamp", 30.0, 3.6, false),
            product("b", "Rug", 60.0, 3.4, false),
        ];

        let view = apply(
            &catalog,
            &CatalogQuery {
                min_rating: 4,
                ..CatalogQuery::default()
            },
        );

        // 3.6 rounds to 4 and passes; 3.4 rounds to 3 and is dropped.
        assert_eq!(ids(&view), vec!["a"]);
    }

    #[test]
    fn should_put_trending_products_first_keeping_ties_in_order() {
        let catalog = vec![
            product("a", "Tote Bag", 10.0, 4.6, false),
            product("b", "Desk Light", 50.0, 3.2, true),
        ];

        let view = apply(&catalog, &CatalogQuery::default());

        assert_eq!(ids(&view), vec!["b", "a"]);
    }

    #[test]
    fn should_keep_collection_order_among_equal_trending_flags() {
        let catalog = vec![
            product("a", "One", 1.0, 4.0, true),
            product("b", "Two", 2.0, 4.0, false),
            product("c", "Three", 3.0, 4.0, true),
            product("d", "Four", 4.0, 4.0, false),
        ];

        let view = apply(&catalog, &CatalogQuery::default());

        assert_eq!(ids(&view), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn should_sort_by_rating_descending() {
        let catalog = vec![
            product("a", "One", 1.0, 3.1, false),
            product("b", "Two", 2.0, 4.9, false),
            product("c", "Three", 3.0, 4.0, false),
        ];

        let view = apply(
            &catalog,
            &CatalogQuery {
                sort: SortKey::Rating,
                ..CatalogQuery::default()
            },
        );

        assert_eq!(ids(&view), vec!["b", "c", "a"]);
    }

    #[test]
    fn should_preserve_input_order_among_price_ties() {
        let catalog = vec![
            product("a", "One", 25.0, 4.0, false),
            product("b", "Two", 25.0, 4.0, false),
            product("c", "Three", 10.0, 4.0, false),
        ];

        let asc = apply(
            &catalog,
            &CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            },
        );
        let desc = apply(
            &catalog,
            &CatalogQuery {
                sort: SortKey::PriceDesc,
                ..CatalogQuery::default()
            },
        );

        // Tied elements keep collection order under both directions.
        assert_eq!(ids(&asc), vec!["c", "a", "b"]);
        assert_eq!(ids(&desc), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_return_empty_view_when_nothing_matches() {
        let catalog = vec![product("a", "Hoodie", 40.0, 4.0, false)];

        let view = apply(
            &catalog,
            &CatalogQuery {
                search: "telescope".to_string(),
                ..CatalogQuery::default()
            },
        );

        assert!(view.is_empty());
    }

    /// Catalogs with position-derived ids, so an id never appears twice.
    fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
        proptest::collection::vec((0.0f64..500.0, 0.0f64..=5.0, any::<bool>()), 0..24).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(n, (price, rating, trending))| {
                        product(&format!("p-{n}"), &format!("Item {n}"), price, rating, trending)
                    })
                    .collect()
            },
        )
    }

    fn arb_query() -> impl Strategy<Value = CatalogQuery> {
        (
            prop_oneof![Just(String::new()), Just("item".to_string())],
            proptest::option::of(0.0f64..300.0),
            0u8..=5,
        )
            .prop_map(|(search, min, min_rating)| CatalogQuery {
                search,
                category: None,
                price: min.map(|min| PriceRange { min, max: Some(min + 100.0) }),
                min_rating,
                sort: SortKey::default(),
            })
    }

    proptest! {
        #[test]
        fn view_is_always_a_subset_of_the_collection(
            catalog in arb_catalog(),
            query in arb_query(),
        ) {
            let view = apply(&catalog, &query);
            prop_assert!(view.len() <= catalog.len());
            for item in &view {
                prop_assert!(catalog.iter().any(|p| p.id == item.id));
            }
        }

        #[test]
        fn pipelined_filters_match_independent_intersection(
            catalog in arb_catalog(),
            query in arb_query(),
        ) {
            let view = apply(&catalog, &query);

            let search_only = apply(&catalog, &CatalogQuery {
                search: query.search.clone(),
                ..CatalogQuery::default()
            });
            let price_only = apply(&catalog, &CatalogQuery {
                price: query.price,
                ..CatalogQuery::default()
            });
            let rating_only = apply(&catalog, &CatalogQuery {
                min_rating: query.min_rating,
                ..CatalogQuery::default()
            });

            for p in &catalog {
                let in_all = [&search_only, &price_only, &rating_only]
                    .iter()
                    .all(|set| set.iter().any(|q| q.id == p.id));
                let in_view = view.iter().any(|q| q.id == p.id);
                prop_assert_eq!(in_all, in_view);
            }
        }

        #[test]
        fn price_sorts_are_reverses_without_ties(
            catalog in arb_catalog(),
        ) {
            let asc = apply(&catalog, &CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            });

            let mut prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
            prices.dedup();
            prop_assume!(prices.len() == asc.len());

            let desc = apply(&catalog, &CatalogQuery {
                sort: SortKey::PriceDesc,
                ..CatalogQuery::default()
            });
            let reversed: Vec<&str> = asc.iter().rev().map(|p| p.id.as_str()).collect();
            let desc_ids: Vec<&str> = desc.iter().map(|p| p.id.as_str()).collect();
            prop_assert_eq!(reversed, desc_ids);
        }
    }
}
