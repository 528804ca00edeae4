//! Black-box tests for loading catalog files from disk.

use std::io::Write;
use std::sync::{Arc, Mutex};

use catalog_core::DomainError;
use catalog_infra::{read_json, LoadError};
use catalog_products::{CatalogObserver, CatalogRegistry, Category, CounterSnapshot, Product};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write catalog");
    file
}

fn sample_catalog() -> Value {
    json!([
        {
            "name": "Смартфоны",
            "description": "Смартфоны, как средство не только коммуникации, но и получения дополнительных функций для удобства жизни",
            "products": [
                {
                    "name": "Samsung Galaxy C23 Ultra",
                    "description": "256GB, Серый цвет, 200MP камера",
                    "price": 180000.0,
                    "quantity": 5
                },
                {
                    "name": "Iphone 15",
                    "description": "512GB, Gray space",
                    "price": 210000.0,
                    "quantity": 8
                },
                {
                    "name": "Xiaomi Redmi Note 11",
                    "description": "1024GB, Синий",
                    "price": 31000.0,
                    "quantity": 14
                }
            ]
        },
        {
            "name": "Телевизоры",
            "description": "Современный телевизор, который позволяет наслаждаться просмотром, станет вашим другом и помощником",
            "products": [
                {
                    "name": "55\" QLED 4K",
                    "description": "Фоновая подсветка",
                    "price": 123000.0,
                    "quantity": 7
                }
            ]
        }
    ])
}

#[test]
fn missing_file_loads_empty() {
    let registry = Arc::new(CatalogRegistry::new());
    let dir = tempfile::tempdir().unwrap();
    let categories = read_json(dir.path().join("absent.json"), &registry).unwrap();
    assert!(categories.is_empty());
    assert_eq!(registry.snapshot(), CounterSnapshot::default());
}

#[test]
fn malformed_file_loads_empty() {
    let registry = Arc::new(CatalogRegistry::new());
    let file = write_catalog("[{\"name\": \"C\", ");
    assert!(read_json(file.path(), &registry).unwrap().is_empty());
}

#[test]
fn non_utf8_file_loads_empty() {
    let registry = Arc::new(CatalogRegistry::new());
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
    assert!(read_json(file.path(), &registry).unwrap().is_empty());
}

#[test]
fn well_formed_catalog_round_trips_in_order() {
    let registry = Arc::new(CatalogRegistry::new());
    let source = sample_catalog();
    let file = write_catalog(&source.to_string());

    let categories = read_json(file.path(), &registry).unwrap();
    let source = source.as_array().unwrap();
    assert_eq!(categories.len(), source.len());

    for (category, record) in categories.iter().zip(source) {
        assert_eq!(category.name(), record["name"]);
        assert_eq!(category.description(), record["description"]);

        let products = record["products"].as_array().unwrap();
        assert_eq!(category.len(), products.len());
        for (product, product_record) in category.iter().zip(products) {
            assert_eq!(
                product,
                &Product::from_record(product_record.as_object().unwrap()).unwrap()
            );
        }
        assert_eq!(&Value::Object(category.to_record()), record);
    }

    assert_eq!(
        registry.snapshot(),
        CounterSnapshot { category_count: 2, product_count: 4 }
    );
}

#[test]
fn loaded_categories_support_aggregates() {
    let registry = Arc::new(CatalogRegistry::new());
    let file = write_catalog(&sample_catalog().to_string());
    let mut categories = read_json(file.path(), &registry).unwrap();

    let phones: &mut Category = &mut categories[0];
    assert_eq!(phones.to_string(), "Смартфоны, quantity: 27 units");

    phones
        .add_product(Product::new("Iphone 15", "512GB, Gray space", 200000.0, 2).unwrap())
        .unwrap();
    assert_eq!(phones.get("Iphone 15").unwrap().quantity(), 10);
    assert_eq!(phones.get("Iphone 15").unwrap().price(), 210000.0);
    assert_eq!(registry.product_count(), 4);
}

#[test]
fn malformed_record_in_parsed_file_is_reported() {
    let registry = Arc::new(CatalogRegistry::new());
    let file = write_catalog(
        &json!([
            { "name": "C", "description": "d", "products": [
                { "name": "A", "price": 1.0, "quantity": 1 }
            ]}
        ])
        .to_string(),
    );

    let err = read_json(file.path(), &registry).unwrap_err();
    assert_eq!(
        err,
        LoadError::Record {
            path: "categories[0].products[0]".into(),
            source: DomainError::missing_field("description"),
        }
    );
}

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<String>>,
}

impl CatalogObserver for Recorder {
    fn product_created(&self, product: &Product) {
        self.seen.lock().unwrap().push(format!("product:{}", product.name()));
    }

    fn category_created(&self, category: &Category) {
        self.seen.lock().unwrap().push(format!("category:{}", category.name()));
    }
}

#[test]
fn loading_notifies_observer_products_before_their_category() {
    let recorder = Arc::new(Recorder::default());
    let registry = Arc::new(CatalogRegistry::with_observer(recorder.clone()));
    let file = write_catalog(&sample_catalog().to_string());

    read_json(file.path(), &registry).unwrap();

    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![
            "product:Samsung Galaxy C23 Ultra",
            "product:Iphone 15",
            "product:Xiaomi Redmi Note 11",
            "category:Смартфоны",
            "product:55\" QLED 4K",
            "category:Телевизоры",
        ]
    );
}

#[test]
fn overflowing_duplicate_quantities_are_reported() {
    let registry = Arc::new(CatalogRegistry::new());
    let file = write_catalog(
        &json!([
            { "name": "C", "description": "d", "products": [
                { "name": "A", "description": "d", "price": 1.0, "quantity": i64::MAX },
                { "name": "A", "description": "d", "price": 2.0, "quantity": 1 }
            ]}
        ])
        .to_string(),
    );

    let err = read_json(file.path(), &registry).unwrap_err();
    assert_eq!(
        err,
        LoadError::Record {
            path: "categories[0]".into(),
            source: DomainError::QuantityOverflow("A".into()),
        }
    );
    assert_eq!(registry.category_count(), 0);
}
