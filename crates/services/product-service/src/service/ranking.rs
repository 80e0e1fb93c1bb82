//! Hot product selection.

use domain::{Product, HOT_PRODUCTS_LIMIT};

/// Single-pass hot product selection over the catalog in insertion order.
///
/// The first `HOT_PRODUCTS_LIMIT` products fill the working set. Each later
/// product replaces the first slot whose amount is less than or equal to its
/// own, or is dropped when no slot qualifies. The evicted slot is not
/// necessarily the minimum, so the result is not a strict top five.
pub fn rank_hot<I>(products: I) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    let mut hot: Vec<Product> = Vec::with_capacity(HOT_PRODUCTS_LIMIT);

    for product in products {
        if hot.len() < HOT_PRODUCTS_LIMIT {
            hot.push(product);
            continue;
        }

        if let Some(slot) = hot.iter_mut().find(|slot| slot.amount <= product.amount) {
            *slot = product;
        }
    }

    hot
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn product(name: &str, amount: i32) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            product_type: "tool".to_string(),
            description: String::new(),
            amount,
            price_in_cents: 100,
            owner_user_id: Uuid::nil(),
            created_at: Utc::now(),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_fewer_than_limit_kept_in_order() {
        let hot = rank_hot(vec![product("a", 1), product("b", 9), product("c", 4)]);
        assert_eq!(names(&hot), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(rank_hot(Vec::new()).is_empty());
    }

    #[test]
    fn test_replaces_first_qualifying_slot_not_minimum() {
        let catalog = vec![
            product("a", 5),
            product("b", 1),
            product("c", 7),
            product("d", 2),
            product("e", 9),
            product("f", 6),
        ];

        let hot = rank_hot(catalog);

        // "a" (5) is the first slot <= 6, even though "b" (1) is smaller
        assert_eq!(names(&hot), ["f", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_equal_amount_qualifies() {
        let catalog = vec![
            product("a", 3),
            product("b", 3),
            product("c", 3),
            product("d", 3),
            product("e", 3),
            product("f", 3),
        ];

        let hot = rank_hot(catalog);
        assert_eq!(names(&hot), ["f", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_dropped_when_no_slot_qualifies() {
        let catalog = vec![
            product("a", 10),
            product("b", 20),
            product("c", 30),
            product("d", 40),
            product("e", 50),
            product("small", 9),
        ];

        let hot = rank_hot(catalog);

        assert_eq!(hot.len(), HOT_PRODUCTS_LIMIT);
        assert_eq!(names(&hot), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_never_exceeds_limit() {
        let catalog: Vec<_> = (0..50).map(|i| product(&i.to_string(), i)).collect();
        assert_eq!(rank_hot(catalog).len(), HOT_PRODUCTS_LIMIT);
    }
}
