//! Integration tests for fd-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AssignmentRow, WaveSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn assignment_row(wave: u64, firefighter_id: u32) -> AssignmentRow {
        AssignmentRow {
            wave,
            firefighter_id,
            fire_x:   3,
            fire_y:   -1,
            distance: 4,
        }
    }

    fn summary_row(wave: u64) -> WaveSummaryRow {
        WaveSummaryRow {
            wave,
            fires:          2,
            wave_distance:  7,
            fleet_distance: 7 * (wave + 1),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("assignments.csv").exists());
        assert!(dir.path().join("wave_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["wave", "firefighter_id", "fire_x", "fire_y", "distance"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("wave_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["wave", "fires", "wave_distance", "fleet_distance"]);
    }

    #[test]
    fn csv_assignment_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![assignment_row(0, 0), assignment_row(0, 1), assignment_row(1, 0)];
        w.write_assignments(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][1], "0"); // firefighter_id
        assert_eq!(&read_rows[1][1], "1");
        assert_eq!(&read_rows[2][0], "1"); // wave
        assert_eq!(&read_rows[0][3], "-1"); // fire_y
    }

    #[test]
    fn csv_wave_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_wave_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("wave_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");  // wave
        assert_eq!(&read_rows[0][2], "7");  // wave_distance
        assert_eq!(&read_rows[0][3], "28"); // fleet_distance
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_assignments_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_assignments(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use fd_city::CityGridBuilder;
        use fd_core::GridPoint;
        use fd_dispatch::FireDispatch;
        use fd_sim::{SimBuilder, SimConfig};

        use crate::observer::SimOutputObserver;

        let mut b = CityGridBuilder::new(6, 6);
        b.fire_station(GridPoint::new(0, 0));
        for x in 0..6 {
            b.add_building(GridPoint::new(x, 5));
        }
        let city = b.build().unwrap();

        let config = SimConfig {
            waves:          4,
            fires_per_wave: 2,
            seed:           1,
        };
        let mut sim = SimBuilder::new(config, city, 2).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4 * 2);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("wave_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 4);

        // The last summary's fleet total matches the roster's running sum.
        let fleet_total: u64 = sim
            .dispatch
            .roster()
            .iter()
            .map(|f| f.distance_traveled())
            .sum();
        assert_eq!(summaries[3][3], fleet_total.to_string());
    }
}
