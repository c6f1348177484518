use atrium_core::navigation::{QueryStringSource, decorate_navigation_url};
use criterion::{Criterion, criterion_group, criterion_main};
use url::Url;

struct BenchFragment;

impl QueryStringSource for BenchFragment {
    fn query_string(&self, _url: &Url) -> String {
        "source=bench&deviceId=0000".to_string()
    }
}

fn bench_decorate_navigation_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorate_navigation_url");

    group.bench_function("bare_url", |b| {
        b.iter(|| {
            let decorated =
                decorate_navigation_url(std::hint::black_box("https://example.com"), &BenchFragment);
            std::hint::black_box(decorated)
        });
    });

    group.bench_function("existing_query", |b| {
        b.iter(|| {
            let decorated = decorate_navigation_url(
                std::hint::black_box("https://example.com/docs?page=2&lang=en"),
                &BenchFragment,
            );
            std::hint::black_box(decorated)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decorate_navigation_url);
criterion_main!(benches);
