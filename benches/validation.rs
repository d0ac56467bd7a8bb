//! Benchmarks for form validation.
//!
//! These benchmarks measure the email pattern and the full rule chain that
//! runs on every submit.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use welcome_form::state::{FormState, Gender, ToastNotifier, ToastPosition};
use welcome_form::utils::email::is_valid_email;
use welcome_form::validation::{submit, validate};

fn complete_form() -> FormState {
    FormState {
        email: "jane.doe@example.com".to_string(),
        name: "Jane Doe".to_string(),
        gender: Some(Gender::Female),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
        date_picker_open: false,
    }
}

fn bench_email_valid(c: &mut Criterion) {
    c.bench_function("email_valid", |b| {
        b.iter(|| is_valid_email(black_box("jane.doe@mail.example.com")))
    });
}

fn bench_email_invalid(c: &mut Criterion) {
    c.bench_function("email_invalid", |b| {
        b.iter(|| is_valid_email(black_box("jane.doe@@example")))
    });
}

fn bench_validate_complete_form(c: &mut Criterion) {
    let form = complete_form();
    c.bench_function("validate_complete_form", |b| {
        b.iter(|| validate(black_box(&form)))
    });
}

fn bench_validate_empty_form(c: &mut Criterion) {
    let form = FormState::default();
    c.bench_function("validate_empty_form", |b| {
        b.iter(|| validate(black_box(&form)))
    });
}

fn bench_submit(c: &mut Criterion) {
    let form = complete_form();
    let mut notifier = ToastNotifier::default();
    c.bench_function("submit_complete_form", |b| {
        b.iter(|| submit(black_box(&form), &mut notifier, ToastPosition::Bottom))
    });
}

criterion_group!(
    benches,
    bench_email_valid,
    bench_email_invalid,
    bench_validate_complete_form,
    bench_validate_empty_form,
    bench_submit
);
criterion_main!(benches);
