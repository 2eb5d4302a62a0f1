// tests/csv_loader_test.rs

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use voltage_series_analyzer::data_input::csv_loader::{
    estimate_sample_interval_secs, load_sample_file, LoadError,
};

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_sorts_rows_by_timestamp() {
        let dir = TempDir::new().unwrap();
        // Header carries stray spaces; rows arrive out of order and include a
        // duplicate timestamp to exercise sort stability.
        let path = write_csv(
            &dir,
            "input.csv",
            " Timestamp , Values \n\
             01-03-2024 10:05:00, 30.0\n\
             01-03-2024 10:01:00,25.0\n\
             01-03-2024 10:06:00,15.0\n\
             01-03-2024 10:06:00,18.5\n\
             01-03-2024 10:03:00,10.0\n",
        );

        let series = load_sample_file(&path).unwrap();
        assert_eq!(series.len(), 5);

        let voltages: Vec<f64> = series.iter().map(|row| row.voltage).collect();
        assert_eq!(voltages, vec![25.0, 10.0, 30.0, 15.0, 18.5]);

        for pair in series.windows(2) {
            assert!(
                pair[0].timestamp <= pair[1].timestamp,
                "series must be sorted by timestamp"
            );
        }
        // The two 10:06:00 rows keep their file order.
        assert_eq!(series[3].voltage, 15.0);
        assert_eq!(series[4].voltage, 18.5);

        // Freshly loaded rows carry no derived statistics yet.
        assert!(series.iter().all(|row| row.ma_1000.is_none()
            && row.ma_5000.is_none()
            && row.slope.is_none()
            && row.slope_change.is_none()));
    }

    #[test]
    fn accepts_voltage_as_value_column_name() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "renamed.csv",
            "Timestamp,Voltage\n01-03-2024 08:00:00,21.5\n",
        );

        let series = load_sample_file(&path).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].voltage, 21.5);
    }

    #[test]
    fn missing_file_is_reported_as_its_own_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_file.csv");

        let err = load_sample_file(&path).unwrap_err();
        match err {
            LoadError::MissingFile(reported) => {
                assert!(reported.contains("no_such_file.csv"));
            }
            other => panic!("expected MissingFile, got {:?}", other),
        }
    }

    #[test]
    fn malformed_timestamp_names_the_offending_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "bad_time.csv",
            "Timestamp,Values\n\
             01-03-2024 10:00:00,25.0\n\
             2024/03/01 10:00:01,26.0\n",
        );

        let err = load_sample_file(&path).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        match err {
            LoadError::MalformedTimestamp { row, ref value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "2024/03/01 10:00:01");
            }
            other => panic!("expected MalformedTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn malformed_value_names_the_offending_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "bad_value.csv",
            "Timestamp,Values\n01-03-2024 10:00:00,not-a-number\n",
        );

        let err = load_sample_file(&path).unwrap_err();
        match err {
            LoadError::MalformedValue { row, ref value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected MalformedValue, got {:?}", other),
        }
    }

    #[test]
    fn missing_value_column_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "no_values.csv",
            "Timestamp,Reading\n01-03-2024 10:00:00,25.0\n",
        );

        let err = load_sample_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Values")));
    }

    #[test]
    fn sample_interval_estimate_skips_duplicate_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "gaps.csv",
            "Timestamp,Values\n\
             01-03-2024 10:00:00,1.0\n\
             01-03-2024 10:00:00,2.0\n\
             01-03-2024 10:00:04,3.0\n",
        );

        let series = load_sample_file(&path).unwrap();
        assert_eq!(estimate_sample_interval_secs(&series), Some(4.0));

        assert_eq!(estimate_sample_interval_secs(&series[..1]), None);
        assert_eq!(estimate_sample_interval_secs(&series[..2]), None);
    }
}
