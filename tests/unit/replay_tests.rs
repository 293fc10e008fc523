//! Replay of market-by-order CSV text into MBP-10 output

use mbp_rs::feed::{EmitMode, LedgerKey, OutputFormat};
use mbp_rs::{ReplayConfig, replay, replay_file};

const HEADER: &str = "ts_recv,ts_event,rtype,publisher_id,instrument_id,action,side,price,size,channel_id,order_id,flags,ts_in_delta,sequence,symbol";

fn feed(lines: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}

fn run(text: &str, config: &ReplayConfig) -> (mbp_rs::ReplaySummary, Vec<String>) {
    let mut out = Vec::new();
    let summary = replay(text.as_bytes(), &mut out, config).expect("replay should succeed");
    let rows = String::from_utf8(out)
        .expect("output is UTF-8")
        .lines()
        .map(str::to_string)
        .collect();
    (summary, rows)
}

fn fields(row: &str) -> Vec<&str> {
    row.split(',').collect()
}

#[cfg(test)]
mod replay_tests {
    use super::*;

    const SESSION: &[&str] = &[
        "2024-01-02T14:30:00.000000010Z,2024-01-02T14:30:00.000000000Z,160,2,1108,R,N,,0,0,0,8,0,1,ARL",
        "2024-01-02T14:30:01.000000010Z,2024-01-02T14:30:01.000000000Z,160,2,1108,A,B,100.00,100,0,11,130,10,2,ARL",
        "2024-01-02T14:30:02.000000010Z,2024-01-02T14:30:02.000000000Z,160,2,1108,A,A,100.50,100,0,12,130,10,3,ARL",
        "2024-01-02T14:30:03.000000010Z,2024-01-02T14:30:03.000000000Z,160,2,2200,A,B,55.25,7,0,21,130,10,4,XYZ",
        "2024-01-02T14:30:04.000000010Z,2024-01-02T14:30:04.000000000Z,160,2,1108,T,B,100.50,40,0,12,0,10,5,ARL",
        "2024-01-02T14:30:04.000000020Z,2024-01-02T14:30:04.000000000Z,160,2,1108,F,A,100.50,40,0,12,0,10,6,ARL",
        "2024-01-02T14:30:04.000000030Z,2024-01-02T14:30:04.000000000Z,160,2,1108,C,A,100.50,40,0,12,128,10,7,ARL",
        "not,a,record",
        "2024-01-02T14:30:05.000000010Z,2024-01-02T14:30:05.000000000Z,160,2,2200,C,B,55.25,7,0,21,128,12,8,XYZ",
    ];

    #[test]
    fn test_final_snapshot_per_instrument() {
        let (summary, rows) = run(&feed(SESSION), &ReplayConfig::default());

        assert!(summary.initial_refresh_dropped);
        assert_eq!(summary.lines, 9);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.applied, 7);
        assert_eq!(summary.ledgers, 2);
        assert_eq!(summary.snapshots, 1);

        assert_eq!(rows.len(), 2, "header plus one non-empty instrument");
        assert!(rows[0].starts_with("ts_recv,ts_event,rtype,publisher_id,instrument_id,action,side,depth"));

        let row = fields(&rows[1]);
        assert_eq!(row.len(), 73);
        assert_eq!(&row[..11], &[
            "2024-01-02T14:30:04.000000030Z",
            "2024-01-02T14:30:04.000000000Z",
            "160",
            "2",
            "1108",
            "T",
            "N",
            "10",
            "128",
            "10",
            "7",
        ]);
        assert_eq!(&row[11..17], &["100.00", "100", "1", "100.50", "60", "1"]);
        assert_eq!(&row[17..23], &["0.00", "0", "0", "0.00", "0", "0"]);
        assert_eq!(row[71], "ARL");
        assert_eq!(row[72], "0");
    }

    #[test]
    fn test_every_event_emission() {
        let config = ReplayConfig {
            emit: EmitMode::EveryEvent,
            ..ReplayConfig::default()
        };
        let (summary, rows) = run(&feed(SESSION), &config);

        assert_eq!(summary.snapshots, 7);
        assert_eq!(rows.len(), 8);
        // After the XYZ add, its own book is the one rendered
        let xyz = fields(&rows[3]);
        assert_eq!(xyz[4], "2200");
        assert_eq!(&xyz[11..14], &["55.25", "7", "1"]);
        // The closing XYZ cancel renders an empty book
        let last = fields(&rows[7]);
        assert_eq!(last[4], "2200");
        assert_eq!(&last[11..14], &["0.00", "0", "0"]);
    }

    #[test]
    fn test_initial_refresh_applied_when_not_skipped() {
        let config = ReplayConfig {
            skip_initial_refresh: false,
            ..ReplayConfig::default()
        };
        let (summary, _) = run(&feed(SESSION), &config);

        assert!(!summary.initial_refresh_dropped);
        assert_eq!(summary.applied, 8);
    }

    #[test]
    fn test_json_lines_output() {
        let config = ReplayConfig {
            format: OutputFormat::JsonLines,
            ..ReplayConfig::default()
        };
        let (_, rows) = run(&feed(SESSION), &config);

        assert_eq!(rows.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&rows[0]).unwrap();
        assert_eq!(value["instrument_id"], 1108);
        assert_eq!(value["symbol"], "ARL");
        assert_eq!(value["asks"][0]["size"], 60);
    }

    #[test]
    fn test_order_id_keying() {
        let config = ReplayConfig {
            ledger_key: LedgerKey::OrderId,
            ..ReplayConfig::default()
        };
        let (summary, rows) = run(&feed(SESSION), &config);

        // Each order id gets its own single-order ledger
        assert_eq!(summary.ledgers, 3);
        let keys: Vec<String> = rows[1..].iter().map(|row| fields(row)[4].to_string()).collect();
        assert_eq!(keys, vec!["11", "12"]);
    }

    #[test]
    fn test_empty_feed_writes_header_only() {
        let (summary, rows) = run(&feed(&[]), &ReplayConfig::default());
        assert_eq!(summary, mbp_rs::ReplaySummary::default());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_fully_executed_book_writes_header_only() {
        let text = feed(&[
            "1,1,160,2,7,A,A,100.50,100,0,1,0,0,1,X",
            "2,2,160,2,7,T,B,100.50,100,0,1,0,0,2,X",
            "3,3,160,2,7,F,A,100.50,100,0,1,0,0,3,X",
            "4,4,160,2,7,C,A,100.50,100,0,1,0,0,4,X",
        ]);
        let (summary, rows) = run(&text, &ReplayConfig::default());

        assert_eq!(summary.applied, 4);
        assert_eq!(summary.ledgers, 1);
        assert_eq!(summary.snapshots, 0);
        assert_eq!(rows.len(), 1, "only the header is written");
    }

    #[test]
    fn test_replay_file_missing_source_fails() {
        let mut out = Vec::new();
        let result = replay_file("/nonexistent/mbo.csv", &mut out, &ReplayConfig::default());
        assert!(result.is_err());
        assert!(out.is_empty(), "nothing is written before the source opens");
    }

    #[test]
    fn test_replay_file() {
        let path = std::env::temp_dir().join(format!("mbp-rs-replay-{}.csv", std::process::id()));
        std::fs::write(&path, feed(SESSION)).unwrap();

        let mut out = Vec::new();
        let summary = replay_file(&path, &mut out, &ReplayConfig::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(summary.snapshots, 1);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
