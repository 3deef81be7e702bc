use std::hint::black_box;

use checkfile::{check_text, validate_document};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate test content with specific validation scenarios
fn generate_validation_content(lines: usize, scenario: &str) -> String {
    let mut content = Vec::with_capacity(lines);

    match scenario {
        "all_valid" => {
            for i in 0..lines {
                content.push(format!("{} {}", i, -(i as i64)));
            }
        }
        "not_numbers" => {
            for i in 0..lines {
                if i % 2 == 0 {
                    content.push(format!("x{} {}", i, i)); // Bad first field
                } else {
                    content.push(format!("{}.5 y", i)); // Both fields bad
                }
            }
        }
        "mixed_errors" => {
            for i in 0..lines {
                match i % 5 {
                    0 | 1 => content.push(format!("{} {}", i, i * 2)), // Valid
                    2 => content.push(String::new()),                   // Empty
                    3 => content.push(format!("{} {} {}", i, i, i)),   // Field count
                    4 => content.push(format!("# comment {}", i)),      // Comment
                    _ => unreachable!(),
                }
            }
        }
        _ => {
            for i in 0..lines {
                content.push(format!("{} {}", i, i));
            }
        }
    }

    content.join("\n")
}

/// Benchmark validation with different error densities
fn bench_validation_error_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_error_density");

    for scenario in ["all_valid", "not_numbers", "mixed_errors"] {
        let content = generate_validation_content(1_000, scenario);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(scenario), &content, |b, content| {
            b.iter(|| black_box(validate_document(black_box(content))))
        });
    }

    group.finish();
}

/// Benchmark scalability with document size
fn bench_validation_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_scalability");

    for size in [100, 1_000, 10_000, 100_000] {
        let content = generate_validation_content(size, "mixed_errors");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(validate_document(black_box(content))))
        });
    }

    group.finish();
}

/// Benchmark the streaming path, writing findings into a reused buffer
fn bench_streaming_output(c: &mut Criterion) {
    let content = generate_validation_content(20_000, "not_numbers");
    let mut out = Vec::with_capacity(1 << 20);

    c.bench_function("streaming_not_numbers", |b| {
        b.iter(|| {
            out.clear();
            let summary = check_text(black_box(&content), &mut out).expect("write to Vec");
            black_box(summary)
        })
    });
}

criterion_group!(
    validation_benches,
    bench_validation_error_density,
    bench_validation_scalability,
    bench_streaming_output
);

criterion_main!(validation_benches);
