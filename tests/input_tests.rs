mod common;
use common::at;
use fittracker::core::input::{parse_quantity, submit_raw_value};
use fittracker::core::{EntryStore, ManualClock};
use fittracker::ui::dialog::{DialogOutcome, InputDialog};
use fittracker::utils::colors::strip_ansi;
use std::io::Cursor;

fn store() -> EntryStore {
    EntryStore::with_clock(ManualClock::new(at(2024, 6, 5, 12, 0, 0)))
}

#[test]
fn test_parse_quantity_accepts_plain_integers() {
    assert_eq!(parse_quantity("42"), Some(42));
    assert_eq!(parse_quantity("0"), Some(0));
    assert_eq!(parse_quantity(" 7 \n"), Some(7));
}

#[test]
fn test_parse_quantity_rejects_everything_else() {
    for raw in ["abc", "", "   ", "4.5", "-5", "10 reps", "99999999999"] {
        assert_eq!(parse_quantity(raw), None, "input {raw:?}");
    }
}

#[test]
fn test_non_numeric_input_leaves_store_untouched() {
    let mut store = store();
    store.add_entry("Squats", 10);

    assert!(submit_raw_value(&mut store, "Squats", "abc").is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_numeric_input_is_recorded() {
    let mut store = store();
    let entry = submit_raw_value(&mut store, "Calorie Intake", "650").expect("entry");
    assert_eq!(entry.kind, "Calorie Intake");
    assert_eq!(entry.value, 650);
    assert_eq!(entry.id, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_dialog_ignores_bad_lines_until_a_number() {
    let mut store = store();
    let mut input = Cursor::new("x\n\n20\n");
    let mut out = Vec::new();

    let outcome = InputDialog::new("Push-ups")
        .run(&mut store, &mut input, &mut out)
        .unwrap();

    match outcome {
        DialogOutcome::Confirmed(entry) => {
            assert_eq!(entry.kind, "Push-ups");
            assert_eq!(entry.value, 20);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(store.len(), 1);

    let text = strip_ansi(&String::from_utf8(out).unwrap());
    assert!(text.contains("Enter Push-ups count"));
    assert_eq!(text.matches("Number of Push-ups: ").count(), 3);
}

#[test]
fn test_calorie_dialog_wording() {
    let mut store = store();
    let mut out = Vec::new();

    InputDialog::new("Calorie Intake")
        .run(&mut store, &mut Cursor::new("500\n"), &mut out)
        .unwrap();

    let text = strip_ansi(&String::from_utf8(out).unwrap());
    assert!(text.contains("Enter calorie intake"));
    assert!(text.contains("Calories: "));
    assert_eq!(store.entries()[0].value_with_unit(), "500 calories");
}

#[test]
fn test_dialog_cancel_and_end_of_input_dismiss() {
    let mut store = store();

    let cancelled = InputDialog::new("Lunges")
        .run(&mut store, &mut Cursor::new("abc\nCANCEL\n25\n"), &mut Vec::<u8>::new())
        .unwrap();
    assert_eq!(cancelled, DialogOutcome::Dismissed);

    let closed = InputDialog::new("Lunges")
        .run(&mut store, &mut Cursor::new("oops\n"), &mut Vec::<u8>::new())
        .unwrap();
    assert_eq!(closed, DialogOutcome::Dismissed);

    assert!(store.is_empty());
}
