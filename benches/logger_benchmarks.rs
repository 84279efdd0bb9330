//! Criterion benchmarks for leveled_syslog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_syslog::prelude::*;
use std::sync::Arc;

/// Accepts every record and keeps nothing
struct NullTransport;

impl Transport for NullTransport {
    fn open(&mut self, _ident: &str, _options: LogOptions, _facility: Facility) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        black_box(record);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(threshold: Severity) -> Logger {
    Logger::with_transport("bench", threshold, Facility::Local0, NullTransport)
        .expect("valid logger")
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_transport", |b| {
        b.iter(|| black_box(null_logger(Severity::Info)));
    });

    group.bench_function("builder_by_name", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .app_name("bench")
                .severity(black_box("warning"))
                .facility(black_box("local0"))
                .transport(NullTransport)
                .build()
                .expect("valid logger");
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emit Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let quiet = null_logger(Severity::Err);
    let loud = null_logger(Severity::Debug);

    group.bench_function("suppressed", |b| {
        b.iter(|| quiet.debug(black_box("Debug message")));
    });

    group.bench_function("written", |b| {
        b.iter(|| loud.debug(black_box("Debug message")));
    });

    group.bench_function("suppressed_lazy", |b| {
        b.iter(|| quiet.log_with(Severity::Debug, || format!("expensive {}", black_box(42))));
    });

    group.bench_function("timed", |b| {
        b.iter(|| loud.info_timed(black_box("Timed message"), || black_box(())));
    });

    group.finish();
}

fn bench_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter");
    group.throughput(Throughput::Elements(1));

    let logger = StdLogger::with_transport("bench", StdLevel::Info, Facility::Local0, NullTransport)
        .expect("valid logger");

    group.bench_function("named", |b| {
        b.iter(|| logger.warn(black_box("Warning message")));
    });

    group.bench_function("by_code", |b| {
        b.iter(|| logger.add(black_box(2), "Warning message"));
    });

    group.bench_function("by_unknown_code", |b| {
        b.iter(|| logger.add(black_box(99), "Mystery message"));
    });

    group.finish();
}

// ============================================================================
// Contention Benchmarks
// ============================================================================

fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(null_logger(Severity::Info));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for _ in 0..100 {
                                let _ = logger.info("Concurrent message");
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emit,
    bench_adapter,
    bench_concurrent
);
criterion_main!(benches);
