use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use depot_core::BillCode;
use depot_infra::listing::{ListRequest, ListingService};
use depot_infra::repository::InMemoryRepository;
use depot_inventory::InStockInfo;

fn seeded_service(rows: usize) -> ListingService<InStockInfo, InMemoryRepository<InStockInfo>> {
    let handlers = ["Zhang Wei", "Li Na", "Wang Fang", "Chen Jie"];
    let repo = InMemoryRepository::with_records((0..rows).map(|n| InStockInfo {
        handler: Some(handlers[n % handlers.len()].to_string()),
        ..InStockInfo::new(BillCode::new(format!("IN-{n:08}")).expect("valid bill code"))
    }))
    .expect("unique bill codes");
    ListingService::new(repo)
}

fn bench_listing(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    let mut group = c.benchmark_group("listing");
    for rows in [1_000usize, 10_000, 50_000] {
        let svc = seeded_service(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered_last_page", rows), &rows, |b, &rows| {
            let last = (rows / 25) as i64;
            b.iter(|| {
                let page = rt
                    .block_on(svc.list(ListRequest::new(None, last + 1, 25)))
                    .expect("list");
                black_box(page.rows.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("filtered_first_page", rows), &rows, |b, _| {
            b.iter(|| {
                let page = rt
                    .block_on(svc.list(ListRequest::new(Some("Wang".to_string()), 1, 25)))
                    .expect("search");
                black_box(page.rowcount)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
