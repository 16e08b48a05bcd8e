//! Benchmarks for the identifier codec.
//!
//! Measures the three stages a recorded identifier goes through:
//! - Repair of historical identifiers
//! - Parsing of current identifiers (types and members)
//! - Anonymization and hashing

extern crate dotnames;

use criterion::{criterion_group, criterion_main, Criterion};
use dotnames::{
    anonymize::{to_hash, Anonymize},
    naming::{parse_method, parse_type},
    repair::repair,
};
use std::hint::black_box;

const SIMPLE_TYPE: &str = "n.C, P";
const GENERIC_TYPE: &str = "System.Collections.Generic.Dictionary`2[[TKey -> p:string],[TValue -> System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0";
const NESTED_TYPE: &str = "n.Outer`1[[T -> p:int]]+Middle+Inner`1[[U -> p:string]], P";
const METHOD: &str = "static [T] [n.Repo`1[[T]], P].Find`1[[TKey -> p:int]]([TKey] key, out [p:bool] found, params [p:object[]] args)";
const LEGACY_TYPE: &str = "System.Collections.Generic.List`1[[T -> System.Nullable`1[[System.Int32, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0";
const LEGACY_NESTED: &str = "n.T1`1+T2`2+T3`1[[G1 -> P1,P],[G2 -> P2,P],[G3 -> P3, P],[G4 -> P4, P]], P";

/// Benchmark repairing an identifier that is already current.
fn bench_repair_current(c: &mut Criterion) {
    c.bench_function("repair_current", |b| {
        b.iter(|| black_box(repair(black_box(GENERIC_TYPE))));
    });
}

/// Benchmark repairing nested predefined and nullable types.
fn bench_repair_legacy_predefined(c: &mut Criterion) {
    c.bench_function("repair_legacy_predefined", |b| {
        b.iter(|| black_box(repair(black_box(LEGACY_TYPE))));
    });
}

/// Benchmark hoisting a trailing type-argument list onto nested types.
fn bench_repair_legacy_nesting(c: &mut Criterion) {
    c.bench_function("repair_legacy_nesting", |b| {
        b.iter(|| black_box(repair(black_box(LEGACY_NESTED))));
    });
}

/// Benchmark the factory on a type without generics.
fn bench_parse_simple_type(c: &mut Criterion) {
    c.bench_function("parse_simple_type", |b| {
        b.iter(|| black_box(parse_type(black_box(SIMPLE_TYPE))));
    });
}

/// Benchmark the factory on a type with nested type arguments.
fn bench_parse_generic_type(c: &mut Criterion) {
    c.bench_function("parse_generic_type", |b| {
        b.iter(|| black_box(parse_type(black_box(GENERIC_TYPE))));
    });
}

/// Benchmark the factory on a nested generic type, including the declaring type lookup.
fn bench_parse_nested_type(c: &mut Criterion) {
    c.bench_function("parse_nested_type", |b| {
        b.iter(|| {
            let t = parse_type(black_box(NESTED_TYPE));
            black_box(t.declaring_type())
        });
    });
}

/// Benchmark the factory on a generic method with modifiers.
fn bench_parse_method(c: &mut Criterion) {
    c.bench_function("parse_method", |b| {
        b.iter(|| black_box(parse_method(black_box(METHOD))));
    });
}

/// Benchmark hashing a short name.
fn bench_to_hash(c: &mut Criterion) {
    c.bench_function("to_hash", |b| {
        b.iter(|| black_box(to_hash(black_box("SomeLocalTypeName"))));
    });
}

/// Benchmark anonymizing a method declared in the enclosing project.
fn bench_anonymize_local_method(c: &mut Criterion) {
    let method = parse_method(METHOD);
    c.bench_function("anonymize_local_method", |b| {
        b.iter(|| black_box(black_box(&method).anonymize()));
    });
}

/// Benchmark anonymizing an external type, which keeps its identifier.
fn bench_anonymize_external_type(c: &mut Criterion) {
    let t = parse_type(GENERIC_TYPE);
    c.bench_function("anonymize_external_type", |b| {
        b.iter(|| black_box(black_box(&t).anonymize()));
    });
}

criterion_group!(
    benches,
    // Repair
    bench_repair_current,
    bench_repair_legacy_predefined,
    bench_repair_legacy_nesting,
    // Parsing
    bench_parse_simple_type,
    bench_parse_generic_type,
    bench_parse_nested_type,
    bench_parse_method,
    // Anonymization
    bench_to_hash,
    bench_anonymize_local_method,
    bench_anonymize_external_type,
);
criterion_main!(benches);
