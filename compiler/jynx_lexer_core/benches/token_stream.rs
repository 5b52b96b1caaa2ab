//! Tokenizer benchmarks for `jynx_lexer_core`.
//!
//! Measures pure tokenization throughput: no comment or string handling,
//! no allocation, no diagnostics.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jynx_lexer_core::{Token, TokenStream};

/// Generate N small struct declarations for scaling benchmarks.
fn generate_n_decls(n: usize) -> String {
    (0..n)
        .map(|i| format!("const Vec{i} = struct {{ x: f32, y: f32 }};\nv{i} <<= 0x{i:X} + {i}.5"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_core/throughput");

    for num_decls in [10, 100, 1000, 5000] {
        let source = generate_n_decls(num_decls);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(num_decls), &source, |b, src| {
            b.iter(|| {
                let mut stream = TokenStream::new(src);
                loop {
                    let tok = stream.next_token();
                    if tok.is_terminal() {
                        break;
                    }
                    black_box(stream.token_str());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
