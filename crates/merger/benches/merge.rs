use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rankmerge::{Item, Merger, SortedList};

fn lists(n_lists: usize, per_list: usize) -> Vec<SortedList<Item>> {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut index = 0u32;
    (0..n_lists)
        .map(|_| {
            (0..per_list)
                .map(|_| {
                    index += 1;
                    Item::new("benchmark item", index, rng.gen_range(0..1000))
                })
                .collect()
        })
        .collect()
}

fn merge(c: &mut Criterion) {
    let lists = lists(16, 10_000);

    c.bench_function("merge first page", |bench| {
        bench.iter(|| {
            let merger = Merger::new(&lists, true);
            merger.window(0, 50).len()
        });
    });

    c.bench_function("merge all", |bench| {
        bench.iter(|| {
            let merger = Merger::new(&lists, true);
            merger.get(merger.len() - 1);
        });
    });

    c.bench_function("scroll merged", |bench| {
        let merger = Merger::new(&lists, true);
        merger.get(merger.len() - 1);

        bench.iter(|| {
            // Everything is merged, only cache reads
            let mut i = 0;
            while i < merger.len() {
                merger.get(i);
                i += 97;
            }
        });
    });

    c.bench_function("concat", |bench| {
        let merger = Merger::new(&lists, false);
        bench.iter(|| merger.get(merger.len() / 2).index());
    });
}

criterion_group!(benches, merge);
criterion_main!(benches);
