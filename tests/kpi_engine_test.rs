// ==========================================
// KpiEngine 引擎集成测试
// ==========================================
// 测试目标: 验证 KPI 公式、恒等关系与零除数处理
// ==========================================

mod helpers;

use helpers::test_data_builder::RecordBuilder;
use oee_kpi::engine::{ComputationError, Denominator, KpiEngine};
use oee_kpi::ProductionRecord;

const EPS: f64 = 1e-9;

fn sample_records() -> Vec<ProductionRecord> {
    vec![
        RecordBuilder::new().build(),
        RecordBuilder::new().planned(450.0).downtime(15.5).counts(820, 801).cycle_time(0.5).build(),
        RecordBuilder::new().planned(600.0).downtime(0.0).counts(1500, 1500).cycle_time(0.35).build(),
        RecordBuilder::new().planned(240.0).downtime(120.0).counts(100, 0).cycle_time(1.2).build(),
    ]
}

#[test]
fn test_reference_scenario() {
    let results = KpiEngine::new()
        .compute_batch(&[RecordBuilder::new().build()])
        .expect("reference record should compute");
    let r = &results[0];

    assert!((r.run_time - 420.0).abs() < EPS);
    assert!((r.availability - 0.875).abs() < EPS);
    assert!((r.performance - 0.9524).abs() < 1e-4);
    assert!((r.quality - 0.95).abs() < EPS);
    assert!((r.oee - 0.7917).abs() < 1e-4);
    assert!((r.scrap_rate_pct - 5.0).abs() < EPS);
    assert!((r.planned_output - 1200.0).abs() < EPS);
    assert!((r.yield_pct - 79.17).abs() < 1e-2);
}

#[test]
fn test_oee_is_product_of_factors() {
    let results = KpiEngine::new().compute_batch(&sample_records()).unwrap();
    for r in &results {
        assert!((r.oee - r.availability * r.performance * r.quality).abs() < EPS);
    }
}

#[test]
fn test_scrap_plus_good_equals_total() {
    let results = KpiEngine::new().compute_batch(&sample_records()).unwrap();
    for r in &results {
        assert_eq!(r.scrap_count + r.record.good_count, r.record.total_count);
    }
}

#[test]
fn test_order_and_length_preserved() {
    let records = sample_records();
    let results = KpiEngine::new().compute_batch(&records).unwrap();

    assert_eq!(results.len(), records.len());
    for (result, record) in results.iter().zip(&records) {
        assert_eq!(&result.record, record);
    }
}

#[test]
fn test_idempotent() {
    let engine = KpiEngine::new();
    let first = engine.compute_batch(&sample_records()).unwrap();
    let second = engine.compute_batch(&sample_records()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_all_good_boundary() {
    let record = RecordBuilder::new().counts(500, 500).build();
    let r = KpiEngine::new().compute_record(&record, 1).unwrap();

    assert_eq!(r.quality, 1.0);
    assert_eq!(r.scrap_rate_pct, 0.0);
    assert_eq!(r.scrap_count, 0);
}

#[test]
fn test_zero_downtime_boundary() {
    let record = RecordBuilder::new().downtime(0.0).build();
    let r = KpiEngine::new().compute_record(&record, 1).unwrap();
    assert_eq!(r.availability, 1.0);
}

#[test]
fn test_zero_denominators() {
    let engine = KpiEngine::new();
    let cases = [
        (RecordBuilder::new().planned(0.0).downtime(0.0).build(), Denominator::PlannedProductionTime),
        (RecordBuilder::new().counts(0, 0).build(), Denominator::TotalCount),
        (RecordBuilder::new().downtime(480.0).build(), Denominator::RunTime),
        (RecordBuilder::new().cycle_time(0.0).build(), Denominator::IdealCycleTime),
    ];

    for (record, expected) in cases {
        let err = engine.compute_record(&record, 1).unwrap_err();
        assert_eq!(
            err,
            ComputationError::ZeroDenominator {
                record: 1,
                denominator: expected
            }
        );
    }
}

#[test]
fn test_zero_denominator_reports_record_number() {
    let records = vec![
        RecordBuilder::new().build(),
        RecordBuilder::new().build(),
        RecordBuilder::new().counts(0, 0).build(),
    ];
    let err = KpiEngine::new().compute_batch(&records).unwrap_err();
    assert!(matches!(err, ComputationError::ZeroDenominator { record: 3, .. }));
}

#[test]
fn test_scrap_count_overflow_is_error() {
    let record = RecordBuilder::new().counts(i64::MAX, -1).build();
    let err = KpiEngine::new().compute_record(&record, 4).unwrap_err();
    assert_eq!(err, ComputationError::CountOverflow { record: 4 });
}

#[test]
fn test_extreme_counts_within_range_unclamped() {
    let record = RecordBuilder::new().counts(i64::MAX, 0).build();
    let r = KpiEngine::new().compute_record(&record, 1).unwrap();
    assert_eq!(r.scrap_count, i64::MAX);
    assert_eq!(r.quality, 0.0);
}

#[test]
fn test_non_finite_inputs_rejected() {
    let engine = KpiEngine::new();
    let cases = [
        (RecordBuilder::new().planned(f64::NAN).build(), "planned_production_time"),
        (RecordBuilder::new().downtime(f64::INFINITY).build(), "downtime"),
        (RecordBuilder::new().cycle_time(f64::NEG_INFINITY).build(), "ideal_cycle_time"),
    ];

    for (record, expected) in cases {
        match engine.compute_record(&record, 1).unwrap_err() {
            ComputationError::NonFiniteValue { field, .. } => assert_eq!(field, expected),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_overflowing_intermediate_rejected() {
    // 理想节拍极大: performance 溢出为 inf
    let record = RecordBuilder::new().cycle_time(f64::MAX).build();
    let err = KpiEngine::new().compute_record(&record, 1).unwrap_err();
    assert!(matches!(err, ComputationError::NonFiniteValue { .. }));
}
