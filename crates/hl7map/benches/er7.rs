use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hl7map::parse;

const ADT_A01: &str = include_str!("../tests/fixtures/valid/adt_a01.hl7");
const HEADER: &str = "MSH|^~\\&|LAB|HOSP|EHR|HOSP|202501151030||ORU^R01^ORU_R01|LAB0042|P|2.5.1";

fn observation_message(count: usize) -> String {
    let mut raw = String::from(HEADER);
    for i in 1..=count {
        raw.push_str(&format!(
            "\rOBX|{i}|CE|CODE{i}^Observation {i}^L||VAL{i}^Value&Sub&Parts^L||||||F"
        ));
    }
    raw
}

fn bench_adt(c: &mut Criterion) {
    c.bench_function("er7_adt_a01", |b| b.iter(|| parse(black_box(ADT_A01))));
}

fn bench_many_observations(c: &mut Criterion) {
    let raw = observation_message(500);
    c.bench_function("er7_oru_500_obx", |b| b.iter(|| parse(black_box(&raw))));
}

criterion_group!(benches, bench_adt, bench_many_observations);
criterion_main!(benches);
