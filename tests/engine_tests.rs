mod support;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use support::assertions::{assert_decimal_near, assert_equal_payouts};
use support::market::{make_market, random_market, tied_market};
use surebet::{
    evaluate, ArbitrageEngine, BookmakerId, BookmakerQuote, EngineSettings, InvalidMarketError,
    Market, MatchType, OutcomeSet,
};

const ROUNDS: usize = 500;

fn tolerance() -> Decimal {
    Decimal::new(1, 15)
}

#[test]
fn scenario_three_bookmakers_no_arbitrage() {
    let market = make_market(
        &[
            ("A", &[dec!(2.10), dec!(1.75)]),
            ("B", &[dec!(2.05), dec!(1.80)]),
            ("C", &[dec!(2.08), dec!(1.78)]),
        ],
        dec!(100),
    );

    let report = evaluate(&market);

    assert_eq!(report.best_odds(), &[dec!(2.10), dec!(1.80)]);
    assert_eq!(
        report.best_bookmakers(),
        &[BookmakerId::new("A"), BookmakerId::new("B")]
    );
    assert_decimal_near(report.total_implied_probability(), dec!(1.0317), dec!(0.0001));
    assert!(!report.has_arbitrage());
    assert!(report.stakes().is_empty());
}

#[test]
fn scenario_two_bookmakers_with_arbitrage() {
    let market = make_market(
        &[
            ("A", &[dec!(2.20), dec!(1.80)]),
            ("B", &[dec!(1.90), dec!(2.30)]),
        ],
        dec!(100),
    );

    let report = evaluate(&market);

    assert!(report.has_arbitrage());
    assert_decimal_near(report.total_implied_probability(), dec!(0.8893), dec!(0.0001));
    assert_decimal_near(report.stakes()[0], dec!(51.11), dec!(0.01));
    assert_decimal_near(report.stakes()[1], dec!(48.89), dec!(0.01));
    assert_decimal_near(report.expected_profit().unwrap(), dec!(12.45), dec!(0.01));
}

#[test]
fn stakes_sum_to_budget_whenever_arbitrage() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut arbitrages = 0;

    for _ in 0..ROUNDS {
        let market = random_market(&mut rng);
        let report = evaluate(&market);
        if !report.has_arbitrage() {
            continue;
        }
        arbitrages += 1;

        let total: Decimal = report.stakes().iter().sum();
        assert_decimal_near(total, market.stake_budget(), tolerance());
    }

    assert!(arbitrages > 0, "generator produced no arbitrage markets");
}

#[test]
fn every_outcome_pays_the_same() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..ROUNDS {
        let market = random_market(&mut rng);
        let report = evaluate(&market);
        let Some(payout) = report.payout() else {
            continue;
        };

        assert_equal_payouts(&report, tolerance());
        assert_decimal_near(
            report.expected_profit().unwrap(),
            payout - market.stake_budget(),
            Decimal::ZERO,
        );
    }
}

#[test]
fn arbitrage_iff_total_below_one() {
    let mut rng = StdRng::seed_from_u64(42);
    let (mut with, mut without) = (0, 0);

    for _ in 0..ROUNDS {
        let market = random_market(&mut rng);
        let report = evaluate(&market);

        let total = report.total_implied_probability();
        assert_eq!(report.has_arbitrage(), total < Decimal::ONE);
        assert_eq!(report.has_arbitrage(), report.allocation().is_some());
        assert_eq!(report.has_arbitrage(), report.minimum_required_stake().is_some());

        // Independent recomputation from the raw quotes.
        let recomputed: Decimal = (0..market.outcome_count())
            .map(|i| {
                let best = market
                    .quotes()
                    .iter()
                    .filter_map(|q| q.odds_at(i))
                    .max()
                    .unwrap();
                Decimal::ONE / best
            })
            .sum();
        assert_decimal_near(total, recomputed, dec!(0.00000000000000000001));

        if report.has_arbitrage() {
            with += 1;
        } else {
            without += 1;
        }
    }

    assert!(with > 0 && without > 0, "generator must cover both cases");
}

#[test]
fn ties_go_to_the_first_bookmaker_in_market_order() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ROUNDS {
        let market = tied_market(&mut rng);
        let report = evaluate(&market);

        for i in 0..market.outcome_count() {
            let best = report.best_odds()[i];
            let first = market
                .quotes()
                .iter()
                .find(|q| q.odds_at(i) == Some(best))
                .unwrap();
            assert_eq!(&report.best_bookmakers()[i], first.bookmaker());
            assert!(market
                .quotes()
                .iter()
                .all(|q| q.odds_at(i).unwrap() <= best));
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let engine = ArbitrageEngine::new(EngineSettings {
        reference_stake: dec!(250),
    });

    for _ in 0..100 {
        let market = random_market(&mut rng);
        let copy = market.clone();

        assert_eq!(engine.evaluate(&market), engine.evaluate(&copy));
        assert_eq!(engine.evaluate(&market), engine.evaluate(&market));
    }
}

#[test]
fn payout_rates_cover_every_bookmaker_in_order() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let market = random_market(&mut rng);
        let report = evaluate(&market);

        let reported: Vec<_> = report.payout_rates().iter().map(|r| r.bookmaker()).collect();
        let quoted: Vec<_> = market.quotes().iter().map(BookmakerQuote::bookmaker).collect();
        assert_eq!(reported, quoted);
    }
}

#[test]
fn minimum_stake_scales_with_reference() {
    let market = make_market(
        &[
            ("A", &[dec!(2.50), dec!(1.50)]),
            ("B", &[dec!(2.00), dec!(2.50)]),
        ],
        dec!(100),
    );

    let report = ArbitrageEngine::new(EngineSettings {
        reference_stake: dec!(40),
    })
    .evaluate(&market);

    assert_eq!(report.minimum_required_stake(), Some(dec!(200)));
    assert!(report.is_below_minimum_stake());
    // Advisory only: the budget is still allocated.
    assert_eq!(report.stakes(), &[dec!(50), dec!(50)]);
}

#[test]
fn odds_of_exactly_one_are_rejected() {
    let result = ArbitrageEngine::default().evaluate_quotes(
        OutcomeSet::from(MatchType::WinLose),
        vec![BookmakerQuote::new("A", vec![dec!(1.0), dec!(3.0)])],
        dec!(100),
    );

    assert!(matches!(
        result,
        Err(InvalidMarketError::OddsNotAboveOne { ref bookmaker, ref outcome, .. })
            if bookmaker == "A" && outcome == "Home win"
    ));
}

#[test]
fn odds_below_one_are_rejected() {
    let result = Market::try_new(
        OutcomeSet::from(MatchType::ThreeWay),
        vec![
            BookmakerQuote::new("A", vec![dec!(2.0), dec!(3.0), dec!(4.0)]),
            BookmakerQuote::new("B", vec![dec!(2.0), dec!(0.9), dec!(4.0)]),
        ],
        dec!(100),
    );

    assert!(matches!(
        result,
        Err(InvalidMarketError::OddsNotAboveOne { ref bookmaker, ref outcome, value })
            if bookmaker == "B" && outcome == "Draw" && value == dec!(0.9)
    ));
}

#[test]
fn zero_quotes_are_rejected() {
    let result = ArbitrageEngine::default().evaluate_quotes(
        OutcomeSet::from(MatchType::WinLose),
        Vec::new(),
        dec!(100),
    );

    assert_eq!(result, Err(InvalidMarketError::NoQuotes));
}

#[test]
fn report_serializes_without_allocation_when_no_arbitrage() {
    let market = make_market(&[("A", &[dec!(1.90), dec!(1.90)])], dec!(100));

    let json = serde_json::to_value(evaluate(&market)).unwrap();

    assert_eq!(json["has_arbitrage"], false);
    assert!(json["allocation"].is_null());
    assert!(json["minimum_required_stake"].is_null());
    assert_eq!(json["best_bookmakers"][0], "A");
    assert_eq!(json["outcomes"][1], "Away win");
}
