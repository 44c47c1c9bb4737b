//! Integration tests for the decode → filter → export pipeline
//!
//! Covers:
//! - Day ranges that straddle a file boundary
//! - Single-day selection vs. equal start/end range
//! - Partial trailing packets across several files
//! - Header/data column alignment for every flag combination

use resmart_parser::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Packets for one day, one every `step` minutes starting at 00:00
fn day_packets(month: u8, day: u8, count: usize, step: u8) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..count {
        let mut fields = vec![0u16; FIELD_COUNT];
        fields[KnownField::Reslex.index()] = 2;
        fields[KnownField::Ipap.index()] = 140;
        fields[KnownField::Epap.index()] = 60 + i as u16;
        fields[KnownField::TidalVolume.index()] = 480;
        fields[KnownField::RepRate.index()] = day as u16;
        let minutes = i as u32 * step as u32;
        let ts = Timestamp {
            year: 2021,
            month,
            day,
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
            second: 0,
            reserved: 0,
        };
        data.extend_from_slice(&encode_packet(&Record::new(ts, fields).unwrap()));
    }
    data
}

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).expect("Failed to write fixture");
    path
}

fn two_file_fixture(dir: &TempDir) -> Vec<PathBuf> {
    vec![
        write_file(
            dir,
            "RESmart.001",
            &[day_packets(1, 1, 3, 20), day_packets(1, 2, 3, 20)].concat(),
        ),
        write_file(
            dir,
            "RESmart.002",
            &[day_packets(1, 3, 3, 20), day_packets(1, 4, 3, 20)].concat(),
        ),
    ]
}

fn export(set: &RecordSet, dates: &[&str], options: ExportOptions) -> (ExportReport, String) {
    let selection = DateSelection::from_args(dates).expect("dates should parse");
    let report = export_to_csv(set, &selection, &options, &mut Silent).expect("export failed");
    let text = fs::read_to_string(&report.output_path).expect("Failed to read CSV");
    (report, text)
}

#[test]
fn test_range_spanning_file_boundary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths = two_file_fixture(&temp_dir);
    let set = parse_resmart_files(&paths, &ParseOptions::default(), &mut Silent).unwrap();
    assert_eq!(set.len(), 12);

    let options = ExportOptions {
        output_path: temp_dir.path().join("range.csv"),
        include_ymd: true,
        ..Default::default()
    };
    let (report, text) = export(&set, &["2021-01-02", "2021-01-03"], options);

    assert_eq!(report.rows_written, 6);
    let days: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap())
        .collect();
    assert_eq!(days, vec!["2", "2", "2", "3", "3", "3"]);
}

#[test]
fn test_single_date_equals_same_day_range() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths = two_file_fixture(&temp_dir);
    let set = parse_resmart_files(&paths, &ParseOptions::default(), &mut Silent).unwrap();

    let single = ExportOptions {
        output_path: temp_dir.path().join("single.csv"),
        ..Default::default()
    };
    let pair = ExportOptions {
        output_path: temp_dir.path().join("pair.csv"),
        ..Default::default()
    };
    let (_, single_text) = export(&set, &["2021-01-03"], single);
    let (_, pair_text) = export(&set, &["2021-01-03", "2021-01-03"], pair);

    assert_eq!(single_text, pair_text);
    assert_eq!(single_text.lines().count(), 4);
}

#[test]
fn test_no_dates_exports_everything_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths = two_file_fixture(&temp_dir);
    let set = parse_resmart_files(&paths, &ParseOptions::default(), &mut Silent).unwrap();

    let options = ExportOptions {
        output_path: temp_dir.path().join("all.csv"),
        include_seconds: true,
        ..Default::default()
    };
    let (report, text) = export(&set, &[], options);

    assert_eq!(report.rows_written, set.len());
    let seconds: Vec<i64> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap().parse().unwrap())
        .collect();
    let expected: Vec<i64> = set.records.iter().map(Record::seconds).collect();
    assert_eq!(seconds, expected);
    assert!(seconds.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_partial_packets_in_every_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut paths = Vec::new();
    for (index, extra) in [17usize, 255, 1].into_iter().enumerate() {
        let mut data = day_packets(2, index as u8 + 1, 4, 5);
        data.extend(std::iter::repeat(0x5A).take(extra));
        paths.push(write_file(&temp_dir, &format!("RESmart.{index:03}"), &data));
    }

    let set = parse_resmart_files(&paths, &ParseOptions::default(), &mut Silent).unwrap();
    assert_eq!(set.len(), 12);
    for (summary, extra) in set.files.iter().zip([17usize, 255, 1]) {
        assert_eq!(summary.packets, 4);
        assert_eq!(summary.trailing_bytes, extra);
    }
}

#[test]
fn test_header_and_rows_align_for_all_flag_combinations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths = two_file_fixture(&temp_dir);
    let set = parse_resmart_files(&paths, &ParseOptions::default(), &mut Silent).unwrap();

    for (include_seconds, include_ymd) in [(false, false), (true, false), (false, true), (true, true)] {
        let options = ExportOptions {
            output_path: temp_dir.path().join("flags.csv"),
            include_seconds,
            include_ymd,
        };
        let (_, text) = export(&set, &[], options.clone());
        let (_, again) = export(&set, &[], options.clone());
        assert_eq!(text, again, "output should be stable across runs");

        let mut lines = text.lines();
        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(header, csv_header(&options));
        assert_eq!(&header[header.len() - 5..], header_row().as_slice());

        for line in lines {
            let cells: Vec<&str> = line.split(',').collect();
            assert_eq!(cells.len(), header.len(), "row: {line}");
            assert!(cells.iter().all(|cell| cell.parse::<i64>().is_ok()));
            let epap = header.iter().position(|h| *h == "EPAP").unwrap();
            assert!(cells[epap].parse::<u16>().unwrap() >= 60);
        }
    }
}

#[test]
fn test_corrupt_file_aborts_or_skips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut bad = day_packets(1, 2, 2, 10);
    bad[PACKET_SIZE + DATE_OFFSET + 2] = 0; // month 0
    let paths = vec![
        write_file(&temp_dir, "RESmart.001", &day_packets(1, 1, 2, 10)),
        write_file(&temp_dir, "RESmart.002", &bad),
        write_file(&temp_dir, "RESmart.003", &day_packets(1, 3, 2, 10)),
    ];

    let err = parse_resmart_files(&paths, &ParseOptions::default(), &mut Silent).unwrap_err();
    assert!(matches!(err, ResmartError::MalformedPacket { .. }));

    let options = ParseOptions {
        corrupt_policy: CorruptPolicy::SkipFile,
        ..Default::default()
    };
    let set = parse_resmart_files(&paths, &options, &mut Silent).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.files_read(), 2);
}

#[test]
fn test_find_data_files_feeds_parser() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    two_file_fixture(&temp_dir);
    write_file(&temp_dir, "RESmart.csv", b"not raw data");

    let files = find_data_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    let set = parse_resmart_files(&files, &ParseOptions::default(), &mut Silent).unwrap();
    assert_eq!(set.first_date(), Some(jiff::civil::date(2021, 1, 1)));
    assert_eq!(set.last_date(), Some(jiff::civil::date(2021, 1, 4)));
}
