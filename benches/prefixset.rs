use prefixset::trie::{Trie, TrieAtom, TrieString};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{
    distributions::{Alphanumeric, Uniform},
    thread_rng, Rng,
};

fn get_words(population: usize, max_len: usize) -> Vec<String> {
    (0..population)
        .map(|_| {
            thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=max_len))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn make_trie(words: &[String]) -> TrieString {
    TrieString::from_keys(words.iter().map(|w| w.chars()))
}

fn trie_insert(b: &mut Criterion) {
    let words = get_words(5000, 12);
    b.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_contains(b: &mut Criterion) {
    let words = get_words(5000, 12);
    let trie = make_trie(&words);
    b.bench_function("trie contains", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| trie.contains(w.chars()))
                .count()
        })
    });
}

fn trie_insert_remove(b: &mut Criterion) {
    let words = get_words(5000, 12);

    b.bench_function("trie remove", |b| {
        b.iter(|| {
            let mut trie = make_trie(&words);
            for w in &words {
                trie.remove(w.chars());
            }
        });
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut trie = TrieString::new();
    c.bench_function("inserting: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(thread_rng().gen_range(1..=512))
                    .map(char::from)
            },
            |input| insert_trie(&mut trie, input),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("contains: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(thread_rng().gen_range(1..=512))
                    .map(char::from)
            },
            |input| contains_trie(&trie, input),
            BatchSize::SmallInput,
        )
    });
    trie.clear();
}

fn prefix_queries(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 10000;

    let words = get_words(POPULATION_SIZE, 16);
    let trie = make_trie(&words);
    let mut group = c.benchmark_group("prefix");
    for len in [0usize, 1, 2, 3].iter() {
        group.bench_with_input(BenchmarkId::new("count_prefix", len), len, |b, &len| {
            b.iter_batched(
                || {
                    thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(len)
                        .map(char::from)
                        .collect::<Vec<char>>()
                },
                |prefix| trie.count_prefix(prefix),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(
            BenchmarkId::new("get_all_with_prefix", len),
            len,
            |b, &len| {
                b.iter_batched(
                    || {
                        thread_rng()
                            .sample_iter(&Alphanumeric)
                            .take(len)
                            .map(char::from)
                            .collect::<Vec<char>>()
                    },
                    |prefix| trie.get_all_with_prefix::<String, _>(prefix),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn iterate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("iterate");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let trie = make_trie(&get_words(POPULATION_SIZE, *size));
        group.bench_with_input(
            BenchmarkId::new("consuming iteration (char)", size),
            &trie,
            |b, trie| b.iter_batched(|| trie.clone(), iterate_trie, BatchSize::SmallInput),
        );
        group.bench_with_input(
            BenchmarkId::new("reference iteration (char)", size),
            &trie,
            |b, trie| b.iter(|| iterate_trie_ref(trie)),
        );
    }
    group.finish();
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        let range = Uniform::new_inclusive(1, *size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("always find (usize)", size),
            size,
            |b, &size| {
                let mut trie = Trie::<usize>::new();
                let mut searches: Vec<Vec<usize>> = vec![];
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<usize> = thread_rng()
                        .sample_iter(range)
                        .take(thread_rng().gen_range(1..=size))
                        .collect();
                    searches.push(entry.clone());
                    trie.insert(entry);
                }
                b.iter_batched(
                    || searches[thread_rng().gen_range(0..POPULATION_SIZE)].clone(),
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("random find (char)", size),
            size,
            |b, &size| {
                let trie = make_trie(&get_words(POPULATION_SIZE, size));
                b.iter_batched(
                    || {
                        thread_rng()
                            .sample_iter(&Alphanumeric)
                            .take(thread_rng().gen_range(1..=size))
                            .map(char::from)
                    },
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    trie_insert,
    trie_contains,
    trie_insert_remove,
    criterion_benchmark,
    prefix_queries,
    search,
    iterate
);
criterion_main!(benches);

fn insert_trie<S: IntoIterator<Item = A>, A: TrieAtom>(trie: &mut Trie<A>, input: S) {
    trie.insert(input);
}

fn contains_trie<S: IntoIterator<Item = A>, A: TrieAtom>(trie: &Trie<A>, input: S) {
    trie.contains(input);
}

fn iterate_trie<A: TrieAtom>(trie: Trie<A>) {
    trie.into_iter().for_each(|_x| ());
}

fn iterate_trie_ref<A: TrieAtom>(trie: &Trie<A>) {
    trie.iter().for_each(|_x| ());
}
