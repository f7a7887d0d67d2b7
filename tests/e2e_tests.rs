//! End-to-end integration tests
//!
//! These tests drive full command sequences through the invocation
//! router against real ledger backends, checking the externally
//! observable contract: what `read` returns, what the persisted index
//! sequences contain, and which errors surface. Each sequence runs
//! against both the in-memory backend and the file backend (reopened
//! between steps where persistence matters).

use rstest::rstest;
use smartpay_ledger::core::codec;
use smartpay_ledger::{
    dispatch, FileLedger, IndexedKind, KeyIndex, LedgerError, MemoryLedger, PaymentTransaction,
    RecordStore, SmartPayTransaction,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::tempdir;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn payment_args(id: &str) -> Vec<String> {
    args(&[id, "alice", "bob", "35.50", "usd"])
}

fn smart_pay_args(id: &str) -> Vec<String> {
    args(&[
        "pay1", "alice", "bob", "35.50", "usd", // payment
        "rem1", "alice", "usd", "carol", "eur", "100", "0.92", // remittance
        "loan1", "dave", "erin", "250", "usd", "0.05", "2026-12-31", // lending
        id, // composite id
    ])
}

fn index_of<L: smartpay_ledger::KeyValueLedger>(
    store: &RecordStore<L>,
    kind: IndexedKind,
) -> Vec<String> {
    KeyIndex::load(store.ledger(), kind)
        .unwrap()
        .keys()
        .to_vec()
}

#[test]
fn create_then_read_round_trips_supplied_fields() {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "init", &args(&["100"])).unwrap();
    dispatch(
        &mut store,
        "create-payment",
        &args(&["tx1", "alice", "bob", "35.50", "USD"]),
    )
    .unwrap();

    let bytes = dispatch(&mut store, "read", &args(&["tx1"])).unwrap().unwrap();
    let record: PaymentTransaction = codec::decode("tx1", &bytes).unwrap();

    assert_eq!(record.amount, Decimal::from_str("35.5").unwrap());
    assert_eq!(record.currency, "usd");
    assert_eq!(index_of(&store, IndexedKind::Payment), ["tx1"]);
}

#[test]
fn duplicate_create_fails_and_changes_nothing() {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap();
    let original = dispatch(&mut store, "read", &args(&["tx1"])).unwrap();

    let err = dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap_err();

    assert_eq!(err, LedgerError::already_exists("tx1"));
    assert_eq!(dispatch(&mut store, "read", &args(&["tx1"])).unwrap(), original);
    assert_eq!(index_of(&store, IndexedKind::Payment), ["tx1"]);
}

#[test]
fn delete_removes_record_and_shrinks_index_by_one() {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap();
    dispatch(&mut store, "create-payment", &payment_args("tx2")).unwrap();
    assert_eq!(index_of(&store, IndexedKind::Payment).len(), 2);

    dispatch(&mut store, "delete", &args(&["tx1"])).unwrap();

    let err = dispatch(&mut store, "read", &args(&["tx1"])).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound { .. }));
    assert_eq!(index_of(&store, IndexedKind::Payment), ["tx2"]);
}

#[test]
fn delete_of_nonexistent_id_succeeds_and_leaves_index() {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap();

    dispatch(&mut store, "delete", &args(&["tx9"])).unwrap();
    assert_eq!(index_of(&store, IndexedKind::Payment), ["tx1"]);
}

#[test]
fn smart_pay_create_indexes_composite_id_only() {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "create-smart-pay", &smart_pay_args("sp1")).unwrap();

    let bytes = dispatch(&mut store, "read", &args(&["sp1"])).unwrap().unwrap();
    let record: SmartPayTransaction = codec::decode("sp1", &bytes).unwrap();

    // The nested payment id matches the first argument
    assert_eq!(record.payment.payment_id, "pay1");
    assert_eq!(index_of(&store, IndexedKind::SmartPay), ["sp1"]);
    assert!(index_of(&store, IndexedKind::Payment).is_empty());
}

#[test]
fn smart_pay_delete_unindexes_composite_id() {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "create-smart-pay", &smart_pay_args("sp1")).unwrap();

    dispatch(&mut store, "delete", &args(&["sp1"])).unwrap();
    assert!(index_of(&store, IndexedKind::SmartPay).is_empty());
}

#[test]
fn create_with_empty_currency_reports_position_5_and_writes_nothing() {
    let mut store = RecordStore::new(MemoryLedger::new());
    let err = dispatch(
        &mut store,
        "create-payment",
        &args(&["tx1", "alice", "bob", "35.50", ""]),
    )
    .unwrap_err();

    assert!(matches!(err, LedgerError::EmptyField { position: 5, .. }));
    assert!(matches!(
        dispatch(&mut store, "read", &args(&["tx1"])).unwrap_err(),
        LedgerError::NotFound { .. }
    ));
    assert!(index_of(&store, IndexedKind::Payment).is_empty());
}

#[rstest]
#[case::payment(IndexedKind::Payment)]
#[case::smart_pay(IndexedKind::SmartPay)]
fn init_resets_index_to_a_recoverable_zero_length_encoding(#[case] kind: IndexedKind) {
    let mut store = RecordStore::new(MemoryLedger::new());
    dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap();
    dispatch(&mut store, "create-smart-pay", &smart_pay_args("sp1")).unwrap();

    dispatch(&mut store, "init", &args(&["0"])).unwrap();

    // The persisted encoding is syntactically valid and decodes to the
    // empty sequence
    let bytes = dispatch(&mut store, "read", &args(&[kind.index_key()]))
        .unwrap()
        .unwrap();
    assert_eq!(codec::decode_index(kind.index_key(), &bytes).unwrap(), Vec::<String>::new());
}

#[test]
fn state_survives_file_ledger_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    {
        let mut store = RecordStore::new(FileLedger::open(&path).unwrap());
        dispatch(&mut store, "init", &args(&["100"])).unwrap();
        dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap();
    }

    let mut store = RecordStore::new(FileLedger::open(&path).unwrap());
    let bytes = dispatch(&mut store, "read", &args(&["tx1"])).unwrap().unwrap();
    let record: PaymentTransaction = codec::decode("tx1", &bytes).unwrap();

    assert_eq!(record.payment_id, "tx1");
    assert_eq!(index_of(&store, IndexedKind::Payment), ["tx1"]);

    // A second create of the same id fails even across processes
    let err = dispatch(&mut store, "create-payment", &payment_args("tx1")).unwrap_err();
    assert_eq!(err, LedgerError::already_exists("tx1"));
}

#[test]
fn batch_script_applies_rows_and_skips_failures() {
    use smartpay_ledger::BatchReader;
    use std::io::Write;

    let dir = tempdir().unwrap();
    let script_path = dir.path().join("script.csv");
    let mut script = std::fs::File::create(&script_path).unwrap();
    write!(
        script,
        "init,100\n\
         create-payment,tx1,alice,bob,35.50,usd\n\
         create-payment,tx1,alice,bob,35.50,usd\n\
         create-payment,tx2,carol,dave,1.25,eur\n\
         frobnicate,tx3\n\
         delete,tx2\n"
    )
    .unwrap();
    drop(script);

    let mut store = RecordStore::new(MemoryLedger::new());
    let mut failures = Vec::new();
    for row in BatchReader::new(&script_path).unwrap() {
        let line = row.unwrap();
        if let Err(e) = dispatch(&mut store, &line.command, &line.args) {
            failures.push(e);
        }
    }

    // The duplicate create and the unknown command failed; the rest applied
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0], LedgerError::already_exists("tx1"));
    assert_eq!(failures[1], LedgerError::unknown_command("frobnicate"));
    assert_eq!(index_of(&store, IndexedKind::Payment), ["tx1"]);
}

#[test]
fn raw_and_tagged_writes_pass_through() {
    let mut store = RecordStore::new(MemoryLedger::new());

    dispatch(&mut store, "write", &args(&["k1", "plain"])).unwrap();
    dispatch(&mut store, "write-tagged", &args(&["k2", "marked"])).unwrap();

    assert_eq!(
        dispatch(&mut store, "read", &args(&["k1"])).unwrap(),
        Some(b"plain".to_vec())
    );
    assert_eq!(
        dispatch(&mut store, "read", &args(&["k2"])).unwrap(),
        Some(b"tagged:marked".to_vec())
    );
}
