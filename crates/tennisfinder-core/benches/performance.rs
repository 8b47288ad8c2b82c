// Rust guideline compliant 2026-10-15

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use serde_json::{json, Map, Value};
use tempfile::TempDir;
use tennisfinder_core::{IndexValue, JsonlStore, MemoryStore, Order, RecordStore};

fn listing_fields(i: usize) -> Map<String, Value> {
    let value = json!({
        "owner_id": format!("usr_{}", i % 50),
        "status": if i % 3 == 0 { "Sold" } else { "Available" },
        "created_at": i as i64,
        "title": format!("Listing {}", i),
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn populated_memory(count: usize) -> MemoryStore {
    let store = MemoryStore::new();
    for i in 0..count {
        store
            .insert("listings", listing_fields(i))
            .expect("Failed to insert listing");
    }
    store
}

fn bench_list_available(c: &mut Criterion) {
    let store = populated_memory(1000);
    let prefix = [IndexValue::from("Available")];
    c.bench_function("list_available_1000", |b| {
        b.iter(|| {
            black_box(store.query_by_index(
                "listings",
                "by_status_and_created_at",
                &prefix,
                Order::Desc,
            ))
        })
    });
}

fn bench_list_by_owner(c: &mut Criterion) {
    let store = populated_memory(1000);
    let prefix = [IndexValue::from("usr_7")];
    c.bench_function("list_by_owner_1000", |b| {
        b.iter(|| black_box(store.query_by_index("listings", "by_owner", &prefix, Order::Desc)))
    });
}

fn bench_jsonl_load(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = JsonlStore::open_in(temp_dir.path()).expect("Failed to open store");
    store
        .transaction(|tables| {
            for i in 0..1000 {
                tables.insert("listings", listing_fields(i))?;
            }
            Ok::<_, tennisfinder_core::Error>(())
        })
        .expect("Failed to populate store");

    c.bench_function("jsonl_load_1000", |b| b.iter(|| black_box(store.load())));
}

fn bench_jsonl_insert(c: &mut Criterion) {
    c.bench_function("jsonl_insert", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().expect("Failed to create temp dir");
                let store = JsonlStore::open_in(temp_dir.path()).expect("Failed to open store");
                (temp_dir, store)
            },
            |(_temp_dir, store)| {
                black_box(store.insert("listings", listing_fields(1))).expect("Failed to insert");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_list_available,
    bench_list_by_owner,
    bench_jsonl_load,
    bench_jsonl_insert
);
criterion_main!(benches);
