use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_products::{CatalogRegistry, Category, Product};

fn products(count: usize, distinct: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            Product::new(
                format!("P{}", i % distinct),
                "bench product",
                (i % 97) as f64 + 0.5,
                (i % 13) as i64 + 1,
            )
            .expect("positive quantity")
        })
        .collect()
}

fn bench_add_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_product");

    for &(count, distinct) in &[(1_000, 1_000), (1_000, 10), (10_000, 100)] {
        let input = products(count, distinct);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("distinct_{distinct}"), count),
            &input,
            |b, input| {
                b.iter(|| {
                    let registry = Arc::new(CatalogRegistry::new());
                    let mut category = Category::new(&registry, "bench", "bench", Vec::new())
                        .expect("empty category");
                    for p in input.iter().cloned() {
                        category.add_product(p).expect("bench quantities fit");
                    }
                    black_box(category.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_average_price(c: &mut Criterion) {
    let registry = Arc::new(CatalogRegistry::new());
    let category = Category::new(&registry, "bench", "bench", products(10_000, 10_000))
        .expect("bench quantities fit");

    c.bench_function("average_price_10k", |b| {
        b.iter(|| black_box(category.average_price()))
    });
}

criterion_group!(benches, bench_add_product, bench_average_price);
criterion_main!(benches);
