use laptime_studio::aggregator::{round_time, summarize_by_compound, CompoundSummary};
use laptime_studio::parser::LapRecord;

fn lap(compound: &str, number: f64, time: Option<f64>) -> LapRecord {
    LapRecord {
        meeting_name: "Monza".to_string(),
        driver_number: "44".to_string(),
        driver_name: "Hamilton".to_string(),
        session_key: "9001".to_string(),
        compound: compound.to_string(),
        lap_number: Some(number),
        lap_time_seconds: time,
    }
}

#[test]
fn test_summarize_by_compound() {
    let laps = vec![
        lap("SOFT", 1.0, Some(90.1)),
        lap("SOFT", 2.0, Some(90.3)),
        lap("HARD", 3.0, Some(91.0)),
    ];

    let summary = summarize_by_compound(&laps);

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].compound, "HARD");
    assert_eq!(summary[1].compound, "SOFT");
    assert_eq!(summary[1].average, Some(90.2));
}

#[test]
fn test_summary_rounding() {
    let laps = vec![
        lap("SOFT", 1.0, Some(90.1111)),
        lap("SOFT", 2.0, Some(90.2222)),
    ];

    let summary = summarize_by_compound(&laps);

    assert_eq!(summary[0].best_lap, Some(90.111));
    assert_eq!(summary[0].worst_lap, Some(90.222));
    assert_eq!(summary[0].average, Some(round_time((90.1111 + 90.2222) / 2.0)));
}

#[test]
fn test_friendly_serde_labels() {
    let row = CompoundSummary {
        compound: "SOFT".to_string(),
        laps: 2,
        best_lap: Some(90.1),
        average: Some(90.2),
        worst_lap: Some(90.3),
    };

    let json = serde_json::to_value(&row).unwrap();

    assert_eq!(json["compound"], "SOFT");
    assert_eq!(json["Laps"], 2);
    assert_eq!(json["Best Lap"], 90.1);
    assert_eq!(json["Average"], 90.2);
    assert_eq!(json["Worst Lap"], 90.3);
}
