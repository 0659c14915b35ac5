//! End-to-end pipeline: history plus auxiliary signals in, ranked
//! recommendation out.

use chrono::NaiveDate;

use paycast_core::config::{ModelType, WeightProfile};
use paycast_core::errors::RankError;
use paycast_core::types::{AttendanceSummary, HistoricalSalaryRecord, PerformanceReview};
use paycast_engine::analyzers::trend::estimate_trend;
use paycast_engine::factors::{blend_factors, correlate, FactorData};
use paycast_engine::models::{forecast, JitterSource};
use paycast_engine::scenario::{Assumption, ScenarioEngine, ScenarioSpec};

fn history() -> Vec<HistoricalSalaryRecord> {
    let months = [
        "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
    ];
    let totals = [30000.0, 30500.0, 31000.0, 31200.0, 31500.0, 32000.0];
    months
        .iter()
        .zip(totals)
        .map(|(month, total)| HistoricalSalaryRecord {
            month: month.to_string(),
            base_salary: total - 3500.0,
            overtime_pay: 2000.0,
            bonus_amount: 1500.0,
            total_salary: total,
            attendance_rate: 0.96,
            performance_score: 4.0,
        })
        .collect()
}

fn reviews() -> Vec<PerformanceReview> {
    [(1, 3.8), (3, 4.0), (5, 4.2)]
        .iter()
        .map(|&(month, score)| PerformanceReview {
            review_date: NaiveDate::from_ymd_opt(2025, month, 15).unwrap(),
            overall_score: score,
            category_scores: None,
        })
        .collect()
}

fn attendance() -> Vec<AttendanceSummary> {
    ["2025-04", "2025-05", "2025-06"]
        .iter()
        .map(|month| AttendanceSummary {
            month: month.to_string(),
            on_time_rate: 0.96,
            absent_days: 0,
            late_count: 1,
        })
        .collect()
}

#[test]
fn single_forecast_end_to_end() {
    let history = history();
    let reviews = reviews();
    let attendance = attendance();
    let factors = FactorData {
        reviews: &reviews,
        attendance: &attendance,
        tenure_years: 3.0,
        current_month: 5,
    };

    let base_series: Vec<f64> = history.iter().map(|r| r.base_salary).collect();
    let base_trend = estimate_trend(&base_series);
    assert!(base_trend > 0.0);

    let blended = blend_factors(&factors, WeightProfile::BALANCED, base_trend);
    assert!(blended.growth_rate > 0.0);

    let result = forecast(&history, &blended, 3, 0.85, &mut JitterSource::new(0, 0.05))
        .unwrap();

    assert_eq!(result.predicted_salaries.len(), 3);
    assert_eq!(result.month_labels, vec!["2025-07", "2025-08", "2025-09"]);
    assert!(result.total_increase > 0.0);
    assert_eq!(result.accuracy, 0.85);
    assert!(!result.key_factors.is_empty() && result.key_factors.len() <= 3);
    for i in 0..3 {
        assert!(result.confidence_upper[i] >= result.predicted_salaries[i]);
        assert!(result.predicted_salaries[i] >= result.confidence_lower[i]);
        let parts = result.base_salaries[i] + result.overtime_pays[i] + result.bonus_amounts[i];
        assert!((parts - result.predicted_salaries[i]).abs() < 1e-6);
    }
}

#[test]
fn rerun_is_bit_identical() {
    let history = history();
    let reviews = reviews();
    let attendance = attendance();
    let factors = FactorData {
        reviews: &reviews,
        attendance: &attendance,
        tenure_years: 3.0,
        current_month: 5,
    };

    let mut engine = ScenarioEngine::with_defaults();
    let id = engine
        .add_scenario(ScenarioSpec::new("emp-1", "store-1", 6))
        .unwrap();
    let first = engine.run_scenario(&id, &history, &factors).unwrap();
    let second = engine.run_scenario(&id, &history, &factors).unwrap();
    assert_eq!(first, second);
}

#[test]
fn optimistic_outranks_neutral_with_positive_factors() {
    let history = history();
    let reviews = reviews();
    let attendance = attendance();
    let factors = FactorData {
        reviews: &reviews,
        attendance: &attendance,
        tenure_years: 3.0,
        current_month: 5,
    };

    let mut engine = ScenarioEngine::with_defaults();
    let neutral = engine
        .add_scenario(ScenarioSpec::new("emp-1", "store-1", 6).with_name("neutral"))
        .unwrap();
    let optimistic = engine
        .add_scenario(
            ScenarioSpec::new("emp-1", "store-1", 6)
                .with_name("optimistic")
                .with_assumption(Assumption::Optimistic),
        )
        .unwrap();

    let n = engine.run_scenario(&neutral, &history, &factors).unwrap();
    let o = engine.run_scenario(&optimistic, &history, &factors).unwrap();
    assert!(o.accuracy >= n.accuracy);

    let ranked = engine.rank().unwrap();
    assert_eq!(ranked[0].id, optimistic);
    assert!(ranked[0].recommendation_score >= ranked[1].recommendation_score);
}

#[test]
fn comparison_cycle_across_models() {
    let history = history();
    let reviews = reviews();
    let attendance = attendance();
    let factors = FactorData {
        reviews: &reviews,
        attendance: &attendance,
        tenure_years: 3.0,
        current_month: 5,
    };

    let mut engine = ScenarioEngine::with_defaults();
    let ids = vec![
        engine
            .add_scenario(ScenarioSpec::new("emp-1", "store-1", 6))
            .unwrap(),
        engine
            .add_scenario(
                ScenarioSpec::new("emp-1", "store-1", 6)
                    .with_profile("performance")
                    .with_assumption(Assumption::Pessimistic),
            )
            .unwrap(),
        engine
            .add_scenario(
                ScenarioSpec::new("emp-1", "store-1", 6).with_model(ModelType::MovingAverage),
            )
            .unwrap(),
        engine
            .add_scenario(
                ScenarioSpec::new("emp-1", "store-1", 6).with_model(ModelType::Seasonal),
            )
            .unwrap(),
    ];

    for id in &ids {
        engine.run_scenario(id, &history, &factors).unwrap();
    }

    let ranked = engine.rank().unwrap();
    assert_eq!(ranked.len(), 4);
    for entry in &ranked {
        assert!((0.0..=1.0).contains(&entry.recommendation_score));
        assert_eq!(
            engine.result(&entry.id).unwrap().recommendation_score,
            Some(entry.recommendation_score)
        );
    }
    assert!(ranked
        .windows(2)
        .all(|w| w[0].recommendation_score >= w[1].recommendation_score));

    // Dropping below two computed results makes the comparison refuse
    engine.remove_scenario(&ids[0]);
    engine.remove_scenario(&ids[1]);
    engine.remove_scenario(&ids[2]);
    assert!(matches!(
        engine.rank(),
        Err(RankError::InsufficientScenarios { got: 1, .. })
    ));
}

#[test]
fn correlation_pairs_attendance_with_reviews() {
    let points = correlate(&attendance(), &reviews());
    assert_eq!(points.len(), 3);
    // The May review (4.2) is nearest to every late-spring month
    assert!(points.iter().all(|p| p.x == 0.96));
    assert_eq!(points[2].y, 4.2);
}
