// SPDX-License-Identifier: MPL-2.0
use contact_page::domain::contact::{is_valid_email, validate, FormState, Purpose};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn filled_form() -> FormState {
    FormState {
        name: "Jane Doe".into(),
        email: "jane.doe@example.com".into(),
        phone: "+8801306654467".into(),
        purpose: Some(Purpose::Collaboration),
        message: "Hello! I'd like to talk about a project.".repeat(20),
    }
}

fn validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let valid = filled_form();
    let empty = FormState::default();

    group.bench_function("validate_complete_form", |b| {
        b.iter(|| black_box(validate(black_box(&valid))));
    });

    group.bench_function("validate_empty_form", |b| {
        b.iter(|| black_box(validate(black_box(&empty))));
    });

    group.bench_function("is_valid_email", |b| {
        b.iter(|| {
            black_box(is_valid_email(black_box("jane.doe@example.com")));
            black_box(is_valid_email(black_box("not an email")));
        });
    });

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
