use rust_decimal::Decimal;

use surebet::ArbitrageReport;

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Every winning outcome returns the report's payout.
pub fn assert_equal_payouts(report: &ArbitrageReport, tolerance: Decimal) {
    let payout = report.payout().expect("report carries an allocation");
    for (i, (stake, odds)) in report.stakes().iter().zip(report.best_odds()).enumerate() {
        let returned = stake * odds;
        assert!(
            (returned - payout).abs() <= tolerance,
            "outcome {i}: {stake} × {odds} = {returned}, payout {payout}"
        );
    }
}
