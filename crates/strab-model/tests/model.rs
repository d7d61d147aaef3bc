use strab_model::{
    MatchStats, MatcherOptions, MissingSignal, SignalRecord, StatsReport, StrabError,
};

#[test]
fn records_parse_with_extra_fields() {
    let json = r#"[
        {"kurzzeichen": "F 0", "bezeichnung": "Halt", "kategorie": "Fahrsignal", "id": 7},
        {"kurzzeichen": "W 12"}
    ]"#;
    let records = SignalRecord::list_from_json(json).expect("parse records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kurzzeichen, "F 0");
    assert_eq!(records[0].extra.get("id"), Some(&serde_json::json!(7)));
    assert_eq!(records[1].bezeichnung, "");
    assert_eq!(records[1].kategorie, "");
}

#[test]
fn records_without_shorthand_are_rejected() {
    let err = SignalRecord::list_from_json(r#"[{"bezeichnung": "Halt"}]"#)
        .expect_err("missing kurzzeichen");
    assert!(matches!(err, StrabError::Json(_)));
}

#[test]
fn missing_signal_copies_reporting_fields() {
    let record = SignalRecord::new("St 7", "Streckensignal 7", "Strecke");
    let missing = MissingSignal::from(&record);
    assert_eq!(missing.kurzzeichen, "St 7");
    assert_eq!(missing.bezeichnung, "Streckensignal 7");
    assert_eq!(missing.kategorie, "Strecke");
}

#[test]
fn options_default_to_image_extensions() {
    let options = MatcherOptions::from_json("{}").expect("parse options");
    assert_eq!(options.image_extensions, vec!["svg", "png", "jpg", "jpeg"]);
}

#[test]
fn options_reject_dotted_extension() {
    let err = MatcherOptions::from_json(r#"{"image_extensions": [".svg"]}"#)
        .expect_err("dotted extension");
    assert!(matches!(
        err,
        StrabError::InvalidOption {
            field: "image_extensions",
            ..
        }
    ));
}

#[test]
fn report_omits_coverage_without_records() {
    let report = StatsReport::from_stats(&MatchStats::default());
    let value = serde_json::to_value(&report).expect("serialize report");
    assert!(value.get("total").is_none());
    assert_eq!(value["cache_hit_rate"], "0%");
}
