use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gilded_rose_inventory::{RawItem, Shop};

fn stock(size: usize) -> Vec<RawItem> {
    const NAMES: [&str; 5] = [
        "+5 Dexterity Vest",
        "Aged Brie",
        "Sulfuras, Hand of Ragnaros",
        "Backstage passes to a TAFKAL80ETC concert",
        "Conjured Mana Cake",
    ];

    (0..size)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let quality = if name.starts_with("Sulfuras") { 80 } else { (i % 51) as i32 };
            RawItem::new(name, (i % 30) as i32 - 5, quality)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for size in [100usize, 10_000] {
        let raw = stock(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| Shop::new(black_box(raw.clone())))
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_quality");
    for size in [100usize, 10_000] {
        let shop = Shop::new(stock(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &shop, |b, shop| {
            b.iter_batched(
                || shop.clone(),
                |mut shop| {
                    shop.update_quality();
                    shop
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_tick);
criterion_main!(benches);
