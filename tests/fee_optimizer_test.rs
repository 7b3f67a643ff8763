// tests/fee_optimizer_test.rs
use momo_fee_optimizer::{
    calculate_fee, calculate_fees_savings, calculate_total_fee, optimize_transactions, Amount,
    FeeError, FeeSavings, TransactionOptimizer, STANDARD_SCHEDULE,
};

const MAX_AMOUNT: Amount = 10_000_000;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Amounts across the whole valid range, including both sides of every bracket edge
fn sample_amounts() -> Vec<Amount> {
    let mut amounts: Vec<Amount> = (1..=MAX_AMOUNT).step_by(7_919).collect();

    for bracket in STANDARD_SCHEDULE.brackets() {
        for edge in [bracket.low, bracket.high] {
            amounts.extend([edge - 1, edge, edge + 1]);
        }
    }

    amounts.retain(|&amount| (1..=MAX_AMOUNT).contains(&amount));
    amounts.sort_unstable();
    amounts.dedup();
    amounts
}

#[test]
fn test_fee_brackets() {
    let brackets: [(Amount, Amount, u64); 6] = [
        (1, 1_000, 20),
        (1_001, 10_000, 100),
        (10_001, 150_000, 250),
        (150_001, 2_000_000, 1_500),
        (2_000_001, 5_000_000, 3_000),
        (5_000_001, 10_000_000, 5_000),
    ];

    for (low, high, fee) in brackets {
        let middle = low + (high - low) / 2;
        for amount in [low, middle, high] {
            assert_eq!(calculate_fee(amount), Ok(fee), "amount {}", amount);
        }
    }
}

#[test]
fn test_invalid_fee() {
    for amount in [0, -1, -1_000, 10_000_001, 15_000_000] {
        let error = calculate_fee(amount).unwrap_err();
        assert!(error.is_invalid_amount());
    }
}

#[test]
fn test_plan_sums_to_total() {
    init_logger();

    for total in sample_amounts() {
        let plan = optimize_transactions(total);
        assert!(!plan.is_empty(), "empty plan for {}", total);
        assert_eq!(plan.iter().sum::<Amount>(), total, "total {}", total);
        assert!(plan.iter().all(|&chunk| chunk >= 1));
    }
}

#[test]
fn test_splitting_never_increases_fee() {
    init_logger();

    for total in sample_amounts() {
        let single_fee = calculate_fee(total).unwrap();
        let split_fee = calculate_total_fee(&optimize_transactions(total)).unwrap();
        assert!(
            split_fee <= single_fee,
            "total {}: split fee {} > single fee {}",
            total,
            split_fee,
            single_fee
        );

        let savings = calculate_fees_savings(total).unwrap();
        assert!(savings.savings >= 0);
    }
}

#[test]
fn test_invalid_totals_are_not_optimized() {
    for total in [i64::MIN, -500, -1, 0, 10_000_001, 15_000_000, i64::MAX] {
        assert!(optimize_transactions(total).is_empty());
        assert!(calculate_fees_savings(total).is_err());
    }
}

#[test]
fn test_concrete_plans() {
    assert_eq!(optimize_transactions(500), vec![500]);
    assert_eq!(optimize_transactions(2_000), vec![1_000, 1_000]);

    let plan = optimize_transactions(11_000);
    assert_eq!(plan.len(), 2);
    assert!(plan.contains(&10_000));
    assert!(plan.contains(&1_000));

    let plan = optimize_transactions(160_000);
    assert_eq!(plan.iter().sum::<Amount>(), 160_000);
    assert!(calculate_total_fee(&plan).unwrap() < calculate_fee(160_000).unwrap());
}

#[test]
fn test_total_fee() {
    assert_eq!(calculate_total_fee(&[]), Ok(0));
    assert_eq!(calculate_total_fee(&[5_000, 50_000, 500_000]), Ok(1_850));
    assert_eq!(
        calculate_total_fee(&[500, -100, 1_000]),
        Err(FeeError::InvalidTransaction { index: 1, amount: -100 })
    );
}

#[test]
fn test_concrete_savings() {
    assert_eq!(
        calculate_fees_savings(500),
        Ok(FeeSavings {
            savings: 0,
            original_fee: 20,
            optimized_fee: 20,
        })
    );

    let savings = calculate_fees_savings(11_000).unwrap();
    assert_eq!(savings.original_fee, 250);
    assert!(savings.optimized_fee < 250);
    assert!(savings.savings > 0);

    assert!(matches!(
        calculate_fees_savings(15_000_000),
        Err(FeeError::AmountOutOfRange { amount: 15_000_000, .. })
    ));
}

#[test]
fn test_benchmark_optimization() {
    init_logger();
    let optimizer = TransactionOptimizer::new();

    for amount in [1_000, 10_000, 100_000, 1_000_000, 5_000_000, 10_000_000] {
        let report = optimizer.benchmark_optimization(amount).unwrap();
        log::debug!("{}", report);

        assert_eq!(report.transactions_sum(), amount);
        assert!(report.total_fee <= report.default_fee);
        assert_eq!(report.transaction_fees.len(), report.optimized_transactions.len());
    }
}

#[test]
fn test_custom_schedule_with_oversized_fee_is_rejected() {
    let result = TransactionOptimizer::from_json(
        r#"{"brackets": [
            {"low": 1, "high": 10, "fee": 1},
            {"low": 11, "high": 1000, "fee": 9223372036854775808}
        ]}"#,
    );
    assert!(matches!(result, Err(FeeError::InvalidSchedule(_))));
}

#[test]
fn test_custom_schedule_fee_overflow_is_an_error() {
    let optimizer = TransactionOptimizer::from_json(
        r#"{"brackets": [{"low": 1, "high": 1000, "fee": 9223372036854775807}]}"#,
    )
    .unwrap();

    assert!(matches!(
        optimizer.calculate_total_fee(&[1, 1, 1]),
        Err(FeeError::Arithmetic(_))
    ));
    assert_eq!(
        optimizer.calculate_fees_savings(500),
        Ok(FeeSavings {
            savings: 0,
            original_fee: 9_223_372_036_854_775_807,
            optimized_fee: 9_223_372_036_854_775_807,
        })
    );
}

#[test]
fn test_custom_schedule_with_unit_bound_stays_bounded() {
    init_logger();
    let optimizer = TransactionOptimizer::from_json(
        r#"{"brackets": [
            {"low": 1, "high": 1, "fee": 1},
            {"low": 2, "high": 1000000000000, "fee": 2}
        ]}"#,
    )
    .unwrap();

    let total = 999_999_999_999;
    assert_eq!(optimizer.optimize_transactions(total), vec![total]);

    let savings = optimizer.calculate_fees_savings(total).unwrap();
    assert_eq!(savings.savings, 0);
    assert_eq!(optimizer.optimize_transactions(2), vec![1, 1]);
}
