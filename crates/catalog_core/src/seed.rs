//! Demo products shown on first launch.
//!
//! IDs are fixed so UI snapshots and tests can refer to them.

use crate::model::product::Product;
use uuid::Uuid;

/// Returns the six demo products in display order.
pub fn sample_products() -> Vec<Product> {
    [
        (
            1,
            "Premium Wireless Headphones",
            "High-quality sound with noise cancellation and long battery life.",
            15999.0,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=1000&auto=format&fit=crop",
        ),
        (
            2,
            "Smartwatch Pro",
            "Track your fitness, receive notifications, and monitor your health with this sleek smartwatch.",
            12499.0,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?q=80&w=989&auto=format&fit=crop",
        ),
        (
            3,
            "Ultra-Thin Laptop",
            "Powerful performance in a lightweight design with all-day battery life.",
            65999.0,
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?q=80&w=1171&auto=format&fit=crop",
        ),
        (
            4,
            "Digital Camera",
            "Capture stunning photos and videos with this professional-grade camera.",
            43999.0,
            "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?q=80&w=1170&auto=format&fit=crop",
        ),
        (
            5,
            "Portable Bluetooth Speaker",
            "Take your music anywhere with this waterproof, durable speaker.",
            5999.0,
            "https://images.unsplash.com/photo-1572536147248-ac59a8abfa4b?q=80&w=1160&auto=format&fit=crop",
        ),
        (
            6,
            "Designer Sunglasses",
            "Stylish UV protection with premium materials and comfortable fit.",
            7999.0,
            "https://images.unsplash.com/photo-1577803645773-f96470509666?q=80&w=1170&auto=format&fit=crop",
        ),
    ]
    .into_iter()
    .map(|(n, name, description, price, image_url)| Product {
        id: Uuid::from_u128(n),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: Some(image_url.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_products;
    use std::collections::HashSet;

    #[test]
    fn samples_are_valid_and_unique() {
        let products = sample_products();
        assert_eq!(products.len(), 6);
        for product in &products {
            product.validate().unwrap();
        }
        let ids = products.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), products.len());
    }
}
