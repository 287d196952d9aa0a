use std::sync::Arc;

use cart_core::{Cart, Price, Product, ProductId};
use proptest::prelude::*;

fn product(id: u32, price_paise: u64) -> Arc<Product> {
    Arc::new(Product::new(id, format!("Product {id}"), Price::from_paise(price_paise)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: repeated adds of one product collapse into one row holding the sum.
    #[test]
    fn repeated_adds_accumulate(quantities in prop::collection::vec(1i64..1_000, 1..20)) {
        let book = product(1, 10_000);
        let mut cart = Cart::new();

        for q in &quantities {
            cart.add(&book, *q).unwrap();
        }

        prop_assert_eq!(cart.len(), 1);
        let expected: i64 = quantities.iter().sum();
        prop_assert_eq!(i64::from(cart.get(ProductId(1)).unwrap().quantity()), expected);
    }

    /// Property: non-positive quantities are rejected without touching the cart.
    #[test]
    fn non_positive_adds_are_rejected(existing in 1i64..100, bad in i64::MIN..=0) {
        let pen = product(2, 1_000);
        let mut cart = Cart::new();
        cart.add(&pen, existing).unwrap();

        prop_assert!(cart.add(&pen, bad).is_err());
        prop_assert!(cart.add(&product(3, 5_000), bad).is_err());
        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(i64::from(cart.line_items()[0].quantity()), existing);
    }

    /// Property: total is the sum of price × quantity over line items.
    #[test]
    fn total_matches_line_items(
        adds in prop::collection::vec((0u32..6, 1i64..50), 0..30),
    ) {
        let products: Vec<_> = (0u32..6).map(|id| product(id, u64::from(id) * 275 + 50)).collect();
        let mut cart = Cart::new();

        for (id, q) in &adds {
            cart.add(&products[*id as usize], *q).unwrap();
        }

        let expected: u64 = cart
            .line_items()
            .iter()
            .map(|i| i.product().price.amount * u64::from(i.quantity()))
            .sum();
        prop_assert_eq!(cart.total(), Price::from_paise(expected));

        let mut ids: Vec<_> = cart.line_items().iter().map(|i| i.product_id()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), cart.len());
    }

    /// Property: removing twice is the same as removing once.
    #[test]
    fn remove_is_idempotent(
        adds in prop::collection::vec((0u32..4, 1i64..10), 0..10),
        target in 0u32..6,
    ) {
        let mut cart = Cart::new();
        for (id, q) in &adds {
            cart.add(&product(*id, 100), *q).unwrap();
        }

        cart.remove(ProductId(target));
        let after_first: Vec<_> = cart.line_items().to_vec();

        prop_assert!(cart.remove(ProductId(target)).is_none());
        prop_assert_eq!(cart.line_items(), &after_first[..]);
        prop_assert!(cart.get(ProductId(target)).is_none());
    }
}
