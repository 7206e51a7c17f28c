use produtos_core::{Product, ProductValidationError};

#[test]
fn new_product_carries_no_id_until_saved() {
    let product = Product::new("Monitor 4K", 1800.00, 10, "Eletrônicos");

    assert_eq!(product.id, None);
    assert!(!product.is_saved());
    assert_eq!(product.name, "Monitor 4K");
    assert_eq!(product.price, 1800.00);
    assert_eq!(product.quantity, 10);
    assert_eq!(product.category, "Eletrônicos");
}

#[test]
fn validate_rejects_negative_price() {
    let product = Product::new("Mouse", -50.00, 5, "Periféricos");

    let err = product.validate().unwrap_err();
    assert_eq!(err, ProductValidationError::NegativePrice { price: -50.00 });
}

#[test]
fn validate_accepts_zero_and_positive_prices() {
    assert!(Product::new("Brinde", 0.0, 1, "Promoção").validate().is_ok());
    assert!(Product::new("Teclado", 150.00, 20, "Periféricos")
        .validate()
        .is_ok());
}

#[test]
fn serialization_uses_external_schema_field_names() {
    let mut product = Product::new("Webcam", 400.00, 5, "Eletrônicos");
    product.id = Some(7);

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["nome"], "Webcam");
    assert_eq!(json["preco"], 400.00);
    assert_eq!(json["quantidade"], 5);
    assert_eq!(json["categoria"], "Eletrônicos");

    let decoded: Product = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, product);
}

#[test]
fn unsaved_product_serializes_null_id() {
    let json = serde_json::to_value(Product::new("Cabo", 40.00, 30, "Acessórios")).unwrap();
    assert!(json["id"].is_null());
}
