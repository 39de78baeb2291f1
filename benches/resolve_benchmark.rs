use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rugeo::{Dictionary, GeoResolver, MemoryStore};

fn benchmark_resolve(c: &mut Criterion) {
    let resolver = GeoResolver::new(MemoryStore::embedded());

    c.bench_function("resolve_city", |b| {
        b.iter(|| resolver.resolve(black_box("проживаю в г. Севастополь, ул. Ленина 1")))
    });

    c.bench_function("resolve_region_only", |b| {
        b.iter(|| resolver.resolve(black_box("живу в Адыгее")))
    });

    c.bench_function("resolve_not_found", |b| {
        b.iter(|| resolver.resolve(black_box("12345 !!! ничего нет")))
    });

    c.bench_function("resolve_markup", |b| {
        b.iter(|| resolver.resolve(black_box("<p>г.&nbsp;Казань,&nbsp;ул. Баумана</p>")))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let resolver = GeoResolver::new(MemoryStore::embedded());
    let texts: Vec<&str> = vec![
        "г Москва, ул. Тверская",
        "Санкт-Петербург, Невский пр.",
        "проживаю в г Севастополь",
        "живу в Адыгее",
        "Московская область, г. Химки",
        "Екб",
        "Владивосток",
        "Кубань",
        "Нижний Новгород",
        "просто текст",
    ];

    c.bench_function("resolve_batch_10", |b| {
        b.iter(|| resolver.resolve_batch(black_box(&texts)))
    });
}

fn benchmark_init(c: &mut Criterion) {
    let store = MemoryStore::embedded();

    c.bench_function("dictionary_build", |b| {
        b.iter(|| Dictionary::load(black_box(&store)))
    });

    c.bench_function("store_init", |b| b.iter(MemoryStore::embedded));
}

criterion_group!(benches, benchmark_resolve, benchmark_batch, benchmark_init);
criterion_main!(benches);
