use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_core::collection::RawDocument;
use tfidf_core::tokenizer::tokenize;
use tfidf_core::{EnglishStemmer, Index, SearchEngine, DEFAULT_TOP_K};

const WORDS: &[&str] = &[
    "hurricane", "philadelphia", "storms", "flooding", "mayor's", "council", "voted,", "schools",
    "river", "bridges", "closed!", "residents", "evacuated", "winds", "reached", "miles",
];

fn fragments(seed: usize, n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            (0..12)
                .map(|j| WORDS[(seed * 7 + i * 3 + j) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let frags = fragments(1, 200);
    c.bench_function("tokenize_200_fragments", |b| b.iter(|| tokenize(&frags)));
}

fn bench_query(c: &mut Criterion) {
    let docs: Vec<RawDocument> = (0..500)
        .map(|i| RawDocument { id: format!("DOC_{i:04}"), fragments: fragments(i, 8) })
        .collect();
    let index = Index::from_documents(&docs, &EnglishStemmer::new()).expect("index builds");
    let engine = SearchEngine::with_index(index, Box::new(EnglishStemmer::new()), DEFAULT_TOP_K).expect("engine builds");
    c.bench_function("query_500_docs", |b| b.iter(|| engine.execute_query(&["hurricane", "philadelphia"])));
}

criterion_group!(benches, bench_tokenize, bench_query);
criterion_main!(benches);
