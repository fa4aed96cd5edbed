use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;

use surebet::{BookmakerQuote, Market, MatchType, OutcomeSet};

pub fn make_market(quotes: &[(&str, &[Decimal])], budget: Decimal) -> Market {
    let outcomes = match quotes.first().map(|(_, odds)| odds.len()) {
        Some(3) => OutcomeSet::from(MatchType::ThreeWay),
        Some(2) | None => OutcomeSet::from(MatchType::WinLose),
        Some(n) => OutcomeSet::custom((1..=n).map(|i| format!("Outcome {i}"))),
    };
    let quotes = quotes
        .iter()
        .map(|(name, odds)| BookmakerQuote::new(*name, odds.to_vec()))
        .collect();
    Market::try_new(outcomes, quotes, budget).expect("valid market")
}

/// Odds in `[low, high]` hundredths.
pub fn random_odds(rng: &mut StdRng, low: i64, high: i64) -> Decimal {
    Decimal::new(rng.gen_range(low..=high), 2)
}

/// A market priced around fair, so a share of draws are arbitrages.
pub fn random_market(rng: &mut StdRng) -> Market {
    let outcomes = rng.gen_range(2..=5_i64);
    let bookmakers = rng.gen_range(1..=6);
    // Fair odds for n equally likely outcomes are n.
    let (low, high) = (outcomes * 70, outcomes * 130);

    let labels = OutcomeSet::custom((1..=outcomes).map(|i| format!("Outcome {i}")));
    let quotes = (0..bookmakers)
        .map(|b| {
            let odds = (0..outcomes).map(|_| random_odds(rng, low, high)).collect();
            BookmakerQuote::new(format!("Bookmaker {b}"), odds)
        })
        .collect();
    let budget = Decimal::new(rng.gen_range(100..=10_000_000), 2);

    Market::try_new(labels, quotes, budget).expect("generated market is valid")
}

/// A market where several bookmakers quote identical best prices.
pub fn tied_market(rng: &mut StdRng) -> Market {
    let shared = vec![random_odds(rng, 150, 300), random_odds(rng, 150, 300)];
    let quotes = (0..rng.gen_range(2..=5))
        .map(|b| {
            let odds = if rng.gen_bool(0.6) {
                shared.clone()
            } else {
                vec![random_odds(rng, 110, 300), random_odds(rng, 110, 300)]
            };
            BookmakerQuote::new(format!("Bookmaker {b}"), odds)
        })
        .collect();

    Market::try_new(OutcomeSet::from(MatchType::WinLose), quotes, Decimal::ONE_HUNDRED)
        .expect("generated market is valid")
}
