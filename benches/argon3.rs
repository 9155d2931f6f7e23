use argon3::{Argon3Params, argon3d, argon3i, argon3id};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn params(time: u32, mem_kib: u32, lanes: u32) -> Argon3Params {
    Argon3Params {
        mem_kib,
        time,
        lanes,
        tag_len: 32,
        secret: None,
        associated_data: None,
    }
}

pub fn bench_argon3(c: &mut Criterion) {
    let salt = b"choosing random salts is hard";

    c.bench_function("argon3i time=3 mem=32MiB lanes=1", |b| {
        let p = params(3, 32 * 1024, 1);
        b.iter(|| argon3i(black_box(b"password"), black_box(salt), &p))
    });

    c.bench_function("argon3d time=3 mem=32MiB lanes=1", |b| {
        let p = params(3, 32 * 1024, 1);
        b.iter(|| argon3d(black_box(b"password"), black_box(salt), &p))
    });

    c.bench_function("argon3id time=3 mem=32MiB lanes=1", |b| {
        let p = params(3, 32 * 1024, 1);
        b.iter(|| argon3id(black_box(b"password"), black_box(salt), &p))
    });

    c.bench_function("argon3id time=1 mem=64MiB lanes=4", |b| {
        let p = params(1, 64 * 1024, 4);
        b.iter(|| argon3id(black_box(b"password"), black_box(salt), &p))
    });
}

criterion_group!(benches, bench_argon3);
criterion_main!(benches);
