use budget_allocator::ledger::{AllocationLedger, LastEdited, RowField, Snapshot};
use rust_decimal_macros::dec;

const BROWSER_BLOB: &str = r#"{
    "totalBudget": "2000",
    "allocations": [
        {"tag": "Rent", "amount": "800", "percentage": "53.33", "lastUsed": "amount"},
        {"tag": "Food", "amount": "150.00", "percentage": "10", "lastUsed": "percentage"},
        {"tag": "", "amount": "", "percentage": "", "lastUsed": ""}
    ],
    "darkMode": true
}"#;

#[test]
fn browser_blob_hydrates_and_recomputes() {
    let snapshot = Snapshot::from_json(BROWSER_BLOB).unwrap();
    assert!(snapshot.dark_mode);

    let ledger = AllocationLedger::from_snapshot(&snapshot);
    assert_eq!(ledger.total_budget().raw(), "2000");
    assert_eq!(ledger.len(), 3);

    // Stale derived values are refreshed against the stored budget.
    assert_eq!(ledger.rows()[0].percentage().raw(), "40.00");
    assert_eq!(ledger.rows()[1].amount().raw(), "200.00");
    assert_eq!(ledger.rows()[2].last_edited(), LastEdited::None);
    assert!(ledger.rows()[2].amount().is_empty());
    assert_eq!(ledger.summary().total_allocated, dec!(1000));
}

#[test]
fn serialized_snapshot_uses_browser_keys() {
    let mut ledger = AllocationLedger::seeded();
    ledger.set_total_budget("1000");
    ledger.edit_field(0, RowField::Tag, "Travel").unwrap();
    ledger.edit_field(0, RowField::Amount, "250").unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&ledger.to_snapshot(false).to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "totalBudget": "1000",
            "allocations": [
                {"tag": "Travel", "amount": "250", "percentage": "25.00", "lastUsed": "amount"}
            ],
            "darkMode": false
        })
    );
}

#[test]
fn snapshot_round_trip_preserves_user_text() {
    let mut ledger = AllocationLedger::seeded();
    ledger.set_total_budget("1,000");
    ledger.edit_field(0, RowField::Amount, "12.5 ").unwrap();

    let json = ledger.to_snapshot(true).to_json().unwrap();
    let restored = AllocationLedger::from_snapshot(&Snapshot::from_json(&json).unwrap());
    assert_eq!(restored, ledger);
    assert_eq!(restored.total_budget().raw(), "1,000");
    assert_eq!(restored.total_budget().value(), dec!(1));
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let snapshot = Snapshot::from_json(r#"{"allocations": [{"amount": 40}]}"#).unwrap();
    assert!(!snapshot.dark_mode);
    assert!(snapshot.total_budget.is_empty());

    let ledger = AllocationLedger::from_snapshot(&snapshot);
    assert_eq!(ledger.rows()[0].tag(), "");
    assert_eq!(ledger.rows()[0].amount().raw(), "40");
    assert_eq!(ledger.summary().allocated_percentage, None);
}

#[test]
fn malformed_blobs_are_rejected() {
    for blob in [
        "",
        "{",
        r#"{"allocations": "rent"}"#,
        r#"{"darkMode": "yes"}"#,
        r#"[1, 2, 3]"#,
    ] {
        assert!(Snapshot::from_json(blob).is_err(), "accepted {blob:?}");
    }
}
