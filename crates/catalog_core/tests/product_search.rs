use catalog_core::{
    filter_by_name, sample_products, InMemoryProductRepository, Product, ProductDraft,
    ProductService,
};

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|product| product.name.as_str()).collect()
}

fn service_with(names: &[&str]) -> ProductService<InMemoryProductRepository> {
    let mut service = ProductService::new(InMemoryProductRepository::new());
    for name in names {
        service.add_product(&ProductDraft::new(*name, 100.0)).unwrap();
    }
    service
}

#[test]
fn search_matches_case_insensitive_substring() {
    let service = service_with(&["Digital Camera", "Smartwatch Pro"]);

    let hits = service.search("cam").unwrap();
    assert_eq!(names(&hits), ["Digital Camera"]);

    let hits = service.search("CAMERA").unwrap();
    assert_eq!(names(&hits), ["Digital Camera"]);
}

#[test]
fn empty_query_returns_all_in_original_order() {
    let service = service_with(&["Digital Camera", "Smartwatch Pro"]);

    let hits = service.search("").unwrap();
    assert_eq!(names(&hits), ["Digital Camera", "Smartwatch Pro"]);
}

#[test]
fn blank_query_is_treated_as_empty() {
    let service = ProductService::with_samples().unwrap();

    assert_eq!(service.search("   ").unwrap(), sample_products());
    assert_eq!(service.search_summary("  ").unwrap(), None);
}

#[test]
fn search_keeps_relative_order_of_hits() {
    let service = ProductService::with_samples().unwrap();

    let hits = service.search("e").unwrap();
    assert_eq!(
        names(&hits),
        [
            "Premium Wireless Headphones",
            "Digital Camera",
            "Portable Bluetooth Speaker",
            "Designer Sunglasses",
        ]
    );
}

#[test]
fn search_matches_name_only() {
    let service = ProductService::with_samples().unwrap();

    // "waterproof" appears only in the speaker description.
    assert!(service.search("waterproof").unwrap().is_empty());
}

#[test]
fn search_reflects_updates_and_deletes() {
    let mut service = service_with(&["Digital Camera", "Smartwatch Pro"]);
    let mut watch = service.search("watch").unwrap().remove(0);

    watch.name = "Action Cam".to_string();
    service.update_product(&watch).unwrap();
    assert_eq!(
        names(&service.search("cam").unwrap()),
        ["Digital Camera", "Action Cam"]
    );

    let camera = service.search("digital").unwrap().remove(0);
    service.delete_product(camera.id).unwrap();
    assert_eq!(names(&service.search("cam").unwrap()), ["Action Cam"]);
}

#[test]
fn search_summary_reports_hit_count() {
    let service = ProductService::with_samples().unwrap();

    assert_eq!(
        service.search_summary(" cam ").unwrap().as_deref(),
        Some("Found 1 product for \"cam\"")
    );
    assert_eq!(
        service.search_summary("zzz").unwrap().as_deref(),
        Some("No products found for \"zzz\"")
    );
    assert_eq!(
        service.search_summary("l").unwrap().as_deref(),
        Some("Found 5 products for \"l\"")
    );
}

#[test]
fn filter_by_name_does_not_trim_query() {
    let products = sample_products();
    assert!(filter_by_name(products, " cam ").is_empty());
}
