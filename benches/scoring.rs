//! Benchmarks for market evaluation

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poly_scalper::market::Market;
use poly_scalper::orderbook::{OrderBookSnapshot, PriceLevel};
use poly_scalper::scoring::ScoringEngine;
use rust_decimal_macros::dec;

fn sample_market() -> Market {
    Market {
        id: "bench-1".to_string(),
        question: "Will it rain in London tomorrow?".to_string(),
        slug: "bench-rain-london".to_string(),
        end_date: Some(Utc::now() + Duration::days(21)),
        tick_size: dec!(0.01),
        fees_enabled: false,
        liquidity: 50_000.0,
        volume_24h: 6_000.0,
        volume_1wk: 42_000.0,
        one_week_price_change: 0.02,
        outcome_prices: vec![0.52, 0.48],
        outcomes: vec!["Yes".to_string(), "No".to_string()],
        clob_token_ids: vec!["tok-bench".to_string()],
    }
}

fn sample_book() -> OrderBookSnapshot {
    let mut book = OrderBookSnapshot::new("tok-bench");
    book.bids = vec![
        PriceLevel {
            price: dec!(0.52),
            size: dec!(150),
        },
        PriceLevel {
            price: dec!(0.51),
            size: dec!(200),
        },
        PriceLevel {
            price: dec!(0.48),
            size: dec!(300),
        },
    ];
    book.asks = vec![
        PriceLevel {
            price: dec!(0.53),
            size: dec!(140),
        },
        PriceLevel {
            price: dec!(0.54),
            size: dec!(180),
        },
        PriceLevel {
            price: dec!(0.57),
            size: dec!(250),
        },
    ];
    book
}

fn benchmark_eligible_evaluation(c: &mut Criterion) {
    let engine = ScoringEngine::new();
    let market = sample_market();
    let book = sample_book();
    let now = Utc::now();

    c.bench_function("evaluate_eligible", |b| {
        b.iter(|| engine.evaluate(black_box(&market), black_box(Some(&book)), now))
    });
}

fn benchmark_excluded_evaluation(c: &mut Criterion) {
    let engine = ScoringEngine::new();
    let mut market = sample_market();
    market.question = "Will the Fed cut rates in March?".to_string();
    let book = sample_book();
    let now = Utc::now();

    c.bench_function("evaluate_keyword_excluded", |b| {
        b.iter(|| engine.evaluate(black_box(&market), black_box(Some(&book)), now))
    });
}

criterion_group!(
    benches,
    benchmark_eligible_evaluation,
    benchmark_excluded_evaluation
);
criterion_main!(benches);
