//! Benchmarks for unarc-zip extraction.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use unarc_zip::ExtractOptions;
use unarc_zip::extract_zip;
use unarc_zip::test_utils::ZipTestBuilder;

/// Creates a ZIP archive with many small files.
fn create_many_small_files_zip(file_count: usize) -> Vec<u8> {
    let mut builder = ZipTestBuilder::new();
    for i in 0..file_count {
        let name = format!("file{i:04}.txt");
        let content = format!("content{i}");
        builder = builder.add_file(&name, content.as_bytes());
    }
    builder.build()
}

/// Creates a ZIP archive with a single large file.
fn create_large_file_zip(size_bytes: usize) -> Vec<u8> {
    let data = vec![0xAB_u8; size_bytes];
    ZipTestBuilder::new().add_file("large_file.bin", &data).build()
}

fn write_fixture(dir: &TempDir, data: &[u8]) -> PathBuf {
    let path = dir.path().join("bench.zip");
    fs::write(&path, data).unwrap();
    path
}

fn bench_many_small_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_many_small_files");

    for file_count in [10usize, 100, 500] {
        let fixture_dir = TempDir::new().unwrap();
        let archive = write_fixture(&fixture_dir, &create_many_small_files_zip(file_count));

        group.throughput(Throughput::Elements(file_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &archive,
            |b, archive| {
                b.iter_batched(
                    || TempDir::new().unwrap(),
                    |out| {
                        let report =
                            extract_zip(archive, out.path(), &ExtractOptions::default()).unwrap();
                        assert_eq!(report.files_extracted, file_count);
                        out
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_large_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_large_file");

    for size in [64 * 1024usize, 1024 * 1024, 8 * 1024 * 1024] {
        let fixture_dir = TempDir::new().unwrap();
        let archive = write_fixture(&fixture_dir, &create_large_file_zip(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &archive, |b, archive| {
            b.iter_batched(
                || TempDir::new().unwrap(),
                |out| {
                    extract_zip(archive, out.path(), &ExtractOptions::default()).unwrap();
                    out
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_idempotent_re_extraction(c: &mut Criterion) {
    let fixture_dir = TempDir::new().unwrap();
    let archive = write_fixture(&fixture_dir, &create_many_small_files_zip(100));
    let out = TempDir::new().unwrap();
    let options = ExtractOptions::default().with_overwrite(false);

    // Prime the destination; the measured runs only hit the skip path.
    extract_zip(&archive, out.path(), &options).unwrap();

    c.bench_function("re_extract_unchanged_tree", |b| {
        b.iter(|| {
            let report = extract_zip(&archive, out.path(), &options).unwrap();
            assert_eq!(report.files_extracted, 0);
        });
    });
}

criterion_group!(
    benches,
    bench_many_small_files,
    bench_large_file,
    bench_idempotent_re_extraction
);
criterion_main!(benches);
