//! Benchmark suite for `AnimData.d2` and COF decoding
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use d2cof_benches::{TYPICAL_RECORDS_PER_BUCKET, generate_animdata, generate_cof};
use d2cof_types::file::{AnimDataFile, CofFile};
use std::hint::black_box;

/// Benchmark AnimData decoding at several table densities
fn bench_animdata_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("animdata_decode");

	for per_bucket in [1, TYPICAL_RECORDS_PER_BUCKET, 67] {
		let data = generate_animdata(per_bucket);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(per_bucket), &data, |b, data| {
			b.iter(|| black_box(AnimDataFile::from_bytes(black_box(data))));
		});
	}

	group.finish();
}

/// Benchmark name lookups and the hash placement check on a decoded table
fn bench_animdata_lookup(c: &mut Criterion) {
	let Ok(animdata) = AnimDataFile::from_bytes(&generate_animdata(TYPICAL_RECORDS_PER_BUCKET))
	else {
		eprintln!("Warning: Could not decode generated AnimData table");
		return;
	};

	let mut group = c.benchmark_group("animdata_lookup");
	group.bench_function("record", |b| {
		b.iter(|| black_box(animdata.record(black_box("R12807"))));
	});
	group.bench_function("misplaced_records", |b| {
		b.iter(|| black_box(animdata.misplaced_records()));
	});
	group.finish();
}

/// Benchmark COF decoding and encoding
fn bench_cof(c: &mut Criterion) {
	let mut group = c.benchmark_group("cof");

	// (directions, frames, layers): monster, player attack, large overlay
	for (directions, frames, layers) in [(8, 8, 4), (16, 20, 16), (32, 64, 16)] {
		let data = generate_cof(directions, frames, layers);
		let id = format!("{directions}x{frames}x{layers}");
		group.throughput(Throughput::Bytes(data.len() as u64));

		group.bench_with_input(BenchmarkId::new("decode", &id), &data, |b, data| {
			b.iter(|| black_box(CofFile::from_bytes(black_box(data))));
		});

		if let Ok(cof) = CofFile::from_bytes(&data) {
			group.bench_with_input(BenchmarkId::new("encode", &id), &cof, |b, cof| {
				b.iter(|| black_box(cof.to_bytes()));
			});
		}
	}

	group.finish();
}

criterion_group!(benches, bench_animdata_decode, bench_animdata_lookup, bench_cof);
criterion_main!(benches);
