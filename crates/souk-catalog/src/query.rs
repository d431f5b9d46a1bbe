use souk_types::Item;

use crate::sort::SortKey;

/// Run a catalog query over `items`.
///
/// Filters to items whose name contains `search_term` (case-insensitive; an
/// empty term keeps everything), then applies a stable sort by `sort_key`.
/// Items that compare equal under the key keep their relative listing order,
/// and the input slice itself is left untouched.
pub fn query(items: &[Item], search_term: &str, sort_key: SortKey) -> Vec<Item> {
    let term = search_term.to_lowercase();
    let mut matches: Vec<Item> = items
        .iter()
        .filter(|item| term.is_empty() || item.name.to_lowercase().contains(&term))
        .cloned()
        .collect();

    match sort_key {
        SortKey::NameAsc => matches.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => matches.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::PriceAsc => matches.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => matches.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Unsorted => {}
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<Item> {
        vec![
            Item::new("Pen", 5, 10),
            Item::new("pen case", 3, 4),
            Item::new("Mug", 7, 2),
        ]
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_term_keeps_everything() {
        let items = listing();
        let result = query(&items, "", SortKey::Unsorted);
        assert_eq!(result, items);
    }

    #[test]
    fn filter_matches_substrings_case_insensitively() {
        let items = listing();
        let result = query(&items, "pen", SortKey::PriceAsc);
        assert_eq!(names(&result), ["pen case", "Pen"]);
        assert_eq!(result[0].price, 3);
        assert_eq!(result[1].price, 5);
    }

    #[test]
    fn query_leaves_the_input_in_listing_order() {
        let items = listing();
        let _ = query(&items, "", SortKey::NameAsc);
        assert_eq!(names(&items), ["Pen", "pen case", "Mug"]);
    }

    #[test]
    fn unsorted_preserves_listing_order() {
        let items = listing();
        let result = query(&items, "e", SortKey::Unsorted);
        assert_eq!(names(&result), ["Pen", "pen case"]);
    }

    #[test]
    fn name_orderings_compare_bytewise() {
        let items = listing();
        // Uppercase sorts before lowercase under byte comparison.
        let asc = query(&items, "", SortKey::NameAsc);
        assert_eq!(names(&asc), ["Mug", "Pen", "pen case"]);
        let desc = query(&items, "", SortKey::NameDesc);
        assert_eq!(names(&desc), ["pen case", "Pen", "Mug"]);
    }

    #[test]
    fn price_desc_orders_most_expensive_first() {
        let items = listing();
        let result = query(&items, "", SortKey::PriceDesc);
        assert_eq!(names(&result), ["Mug", "Pen", "pen case"]);
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let items = vec![
            Item::new("second", 5, 1),
            Item::new("first", 5, 1),
            Item::new("cheap", 1, 1),
        ];
        let result = query(&items, "", SortKey::PriceAsc);
        assert_eq!(names(&result), ["cheap", "second", "first"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_items() -> impl Strategy<Value = Vec<Item>> {
            proptest::collection::vec(
                ("[a-zA-Z]{0,8}", 0u64..100, 0u32..10)
                    .prop_map(|(name, price, quantity)| Item::new(&name, price, quantity)),
                0..20,
            )
        }

        proptest! {
            #[test]
            fn results_match_the_term_and_ascend_by_price(
                items in arb_items(),
                term in "[a-zA-Z]{0,3}",
            ) {
                let result = query(&items, &term, SortKey::PriceAsc);

                let needle = term.to_lowercase();
                let expected = items
                    .iter()
                    .filter(|i| i.name.to_lowercase().contains(&needle))
                    .count();
                prop_assert_eq!(result.len(), expected);
                for item in &result {
                    prop_assert!(item.name.to_lowercase().contains(&needle));
                }
                for pair in result.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                }
            }
        }
    }
}
