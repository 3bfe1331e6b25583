mod support;

use dispatch_experiments::{
    export_queue_series_csv, export_summary_csv, export_to_json, run_sweep, SweepConfig,
};
use support::init_logging;
use tempfile::tempdir;

#[test]
fn sweep_results_export_to_every_format() {
    init_logging();
    let config = SweepConfig::default().with_driver_counts(vec![2, 4]);
    let results = run_sweep(&config, false).unwrap();
    let dir = tempdir().unwrap();

    let summary = dir.path().join("summary.csv");
    export_summary_csv(&results, &summary).unwrap();
    let mut reader = csv::Reader::from_path(&summary).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "driver_sweep");
    assert_eq!((&rows[0][1], &rows[0][2]), ("0", "2"));
    assert_eq!((&rows[1][1], &rows[1][2]), ("1", "4"));

    let series = dir.path().join("queue.csv");
    export_queue_series_csv(&results, &series).unwrap();
    let sample_rows = csv::Reader::from_path(&series).unwrap().records().count();
    let expected: usize = results.iter().map(|r| r.queue_samples.len()).sum();
    assert_eq!(sample_rows, expected);

    let json_path = dir.path().join("results.json");
    export_to_json(&results, &json_path).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[1]["num_drivers"], 4);
    assert_eq!(
        array[0]["queue_samples"].as_array().unwrap().len(),
        results[0].queue_samples.len()
    );
}
