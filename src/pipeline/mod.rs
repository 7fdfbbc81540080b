//! Ranking pipeline
//!
//! Fetches a market universe, runs every market through the scoring engine,
//! and emits a descending-score result set. Evaluation is embarrassingly
//! parallel: all order book fetches fan out concurrently and each market is
//! scored in isolation, so one slow or failing request never blocks or aborts
//! the batch.

use crate::market::{Market, MarketSource};
use crate::orderbook::{BookAnalyzer, BookSource, BookSummary, OrderBookSnapshot};
use crate::scoring::{EvaluationResult, ScoringEngine};
use crate::telemetry::{set_gauge, GaugeMetric};
use chrono::Utc;
use futures_util::future::join_all;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;

/// Universe oversampling factor relative to the requested result count,
/// compensating for hard exclusions
const OVERSAMPLE_FACTOR: usize = 2;

/// Per-market summary for the fill-likelihood view
///
/// Uses a simpler heuristic than the scoring engine: log10-scaled ratio of
/// hourly volume to average top-of-book depth, penalized by spread width.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    /// Market identifier
    pub market_id: String,
    /// Question text
    pub question: String,
    /// Best bid price, when the book had one
    pub best_bid: Option<Decimal>,
    /// Best ask price, when the book had one
    pub best_ask: Option<Decimal>,
    /// Best ask minus best bid
    pub spread: Option<Decimal>,
    /// Fill-likelihood score, unavailable without a two-sided book
    pub fill_score: Option<f64>,
}

/// Stateless ranking pass over the market universe
pub struct RankingPipeline<M, B> {
    markets: M,
    books: B,
    engine: ScoringEngine,
    analyzer: BookAnalyzer,
}

impl<M: MarketSource, B: BookSource> RankingPipeline<M, B> {
    /// Create a pipeline over the given sources with a default engine
    pub fn new(markets: M, books: B) -> Self {
        Self::with_engine(markets, books, ScoringEngine::new())
    }

    /// Create a pipeline with a custom scoring engine
    pub fn with_engine(markets: M, books: B, engine: ScoringEngine) -> Self {
        Self {
            markets,
            books,
            engine,
            analyzer: BookAnalyzer::new(),
        }
    }

    /// Rank markets by scalping tradability, best first
    ///
    /// Oversamples the universe 2x the requested count, evaluates every
    /// candidate, sorts by descending score (excluded markets carry 0 and
    /// sort last), and truncates to `limit`.
    pub async fn rank_markets(&self, limit: usize) -> anyhow::Result<Vec<EvaluationResult>> {
        let pool_size = limit.saturating_mul(OVERSAMPLE_FACTOR).max(1);
        let universe = self.markets.fetch_markets(pool_size).await?;

        tracing::info!(
            candidates = universe.len(),
            limit,
            "Starting ranking pass"
        );

        let books = join_all(universe.iter().map(|m| self.fetch_primary_book(m))).await;

        let now = Utc::now();
        let mut results: Vec<EvaluationResult> = universe
            .iter()
            .zip(books.iter())
            .map(|(market, book)| self.engine.evaluate(market, book.as_ref(), now))
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let excluded = results.iter().filter(|r| r.is_excluded()).count();
        set_gauge(GaugeMetric::CandidateMarkets, results.len() as f64);
        set_gauge(GaugeMetric::ExcludedMarkets, excluded as f64);

        tracing::info!(
            evaluated = results.len(),
            excluded,
            "Ranking pass complete"
        );

        results.truncate(limit);
        Ok(results)
    }

    /// Summarize the busiest markets with best bid/ask and fill likelihood
    pub async fn top_markets(&self, limit: usize) -> anyhow::Result<Vec<MarketSummary>> {
        let universe = self.markets.fetch_markets(limit.max(1)).await?;

        let books = join_all(universe.iter().map(|m| self.fetch_primary_book(m))).await;

        let summaries = universe
            .iter()
            .zip(books.iter())
            .map(|(market, book)| {
                let summary = book
                    .as_ref()
                    .map(|b| self.analyzer.summarize(b, market.tick_size))
                    .unwrap_or_else(BookSummary::unavailable);

                MarketSummary {
                    market_id: market.id.clone(),
                    question: market.question.clone(),
                    best_bid: summary.best_bid,
                    best_ask: summary.best_ask,
                    spread: summary.spread,
                    fill_score: fill_score(market, &summary),
                }
            })
            .collect();

        Ok(summaries)
    }

    /// Fetch the primary outcome's book; failures degrade to `None`
    async fn fetch_primary_book(&self, market: &Market) -> Option<OrderBookSnapshot> {
        let token_id = market.primary_token_id()?;
        match self.books.fetch_book(token_id).await {
            Ok(book) => Some(book),
            Err(e) => {
                tracing::warn!(
                    market_id = %market.id,
                    token_id = %token_id,
                    error = %e,
                    "Order book fetch failed, scoring without book"
                );
                None
            }
        }
    }
}

/// Fill-likelihood heuristic for the top-markets view
fn fill_score(market: &Market, summary: &BookSummary) -> Option<f64> {
    let bid_top = summary.depth.bid_top?.to_f64()?;
    let ask_top = summary.depth.ask_top?.to_f64()?;
    let avg_top = (bid_top + ask_top) / 2.0;
    if avg_top <= 0.0 {
        return None;
    }

    let hourly_volume = market.volume_24h / 24.0;
    let spread_ticks = summary.spread_in_ticks(market.tick_size).unwrap_or(0.0);

    let base = (1.0 + hourly_volume / avg_top).log10() * 50.0;
    let score = (base - spread_ticks.max(0.0) * 10.0).clamp(0.0, 100.0);
    Some((score * 100.0).round() / 100.0)
}
