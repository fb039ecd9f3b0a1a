mod common;
use chrono::Duration;
use common::at;
use fittracker::core::{EntryStore, ManualClock, group_by_date};
use fittracker::models::{FitnessEntry, GroupedEntries};
use fittracker::utils::date::TIMESTAMP_FORMAT;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

fn store_at(clock: &ManualClock) -> EntryStore {
    EntryStore::with_clock(clock.clone())
}

#[test]
fn test_new_store_is_empty() {
    let store = EntryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.grouped_by_date().is_empty());
    assert!(store.snapshot().is_empty());
}

#[test]
fn test_ids_are_previous_count_plus_one() {
    let clock = ManualClock::new(at(2024, 6, 5, 9, 0, 0));
    let mut store = store_at(&clock);

    for expected in 1..=5u32 {
        let entry = store.add_entry("Squats", expected * 3);
        assert_eq!(entry.id, expected);
        clock.advance(Duration::minutes(7));
    }
    let ids: Vec<u32> = store.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_entry_is_stamped_with_clock_time() {
    let clock = ManualClock::new(at(2024, 6, 5, 9, 30, 15));
    let mut store = store_at(&clock);

    let entry = store.add_entry("Plank", 60);
    assert_eq!(entry.date, "2024-06-05 09:30:15");
    assert_eq!(entry.date_key(), "2024-06-05");
    assert_eq!(entry.time_str(), "09:30:15");
    assert_eq!(store.entries()[0], entry);
}

#[test]
fn test_system_clock_timestamp_format() {
    let mut store = EntryStore::new();
    let entry = store.add_entry("Lunges", 12);
    assert!(chrono::NaiveDateTime::parse_from_str(&entry.date, TIMESTAMP_FORMAT).is_ok());
    assert_eq!(entry.date.len(), 19);
}

#[test]
fn test_same_day_entries_share_one_bucket_in_order() {
    let clock = ManualClock::new(at(2024, 6, 5, 8, 0, 0));
    let mut store = store_at(&clock);

    store.add_entry("Push-ups", 10);
    clock.advance(Duration::hours(4));
    store.add_entry("Calorie Intake", 500);

    let grouped = store.grouped_by_date();
    assert_eq!(grouped.len(), 1);

    let bucket = &grouped["2024-06-05"];
    assert_eq!(bucket.len(), 2);
    assert_eq!((bucket[0].kind.as_str(), bucket[0].value), ("Push-ups", 10));
    assert_eq!((bucket[1].kind.as_str(), bucket[1].value), ("Calorie Intake", 500));
}

#[test]
fn test_different_days_land_in_different_buckets() {
    let clock = ManualClock::new(at(2024, 6, 5, 23, 59, 0));
    let mut store = store_at(&clock);

    store.add_entry("Burpees", 20);
    clock.advance(Duration::minutes(2)); // past midnight
    store.add_entry("Burpees", 25);

    let grouped = store.grouped_by_date();
    let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["2024-06-05", "2024-06-06"]);
    assert_eq!(grouped["2024-06-05"][0].value, 20);
    assert_eq!(grouped["2024-06-06"][0].value, 25);
}

#[test]
fn test_keys_keep_first_occurrence_order() {
    let clock = ManualClock::new(at(2024, 6, 10, 10, 0, 0));
    let mut store = store_at(&clock);

    store.add_entry("Curls", 8);
    clock.set(at(2024, 6, 1, 10, 0, 0));
    store.add_entry("Curls", 9);
    clock.set(at(2024, 6, 10, 18, 0, 0));
    store.add_entry("Curls", 10);

    let grouped = store.grouped_by_date();
    let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["2024-06-10", "2024-06-01"]);

    let ids: Vec<u32> = grouped["2024-06-10"].iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_grouping_partitions_every_entry_once() {
    let clock = ManualClock::new(at(2024, 3, 1, 7, 0, 0));
    let mut store = store_at(&clock);

    for i in 0..17u32 {
        store.add_entry(if i % 3 == 0 { "Calorie Intake" } else { "Sit Ups" }, i);
        clock.advance(Duration::hours(5));
    }

    let grouped = store.grouped_by_date();
    let mut ids: Vec<u32> = grouped.values().flatten().map(|e| e.id).collect();
    assert_eq!(ids.len(), store.len());
    ids.sort();
    assert_eq!(ids, (1..=17).collect::<Vec<u32>>());

    for (key, bucket) in &grouped {
        assert!(bucket.iter().all(|e| e.date_key() == key.as_str()));
    }
}

#[test]
fn test_grouped_view_is_stable_between_appends() {
    let clock = ManualClock::new(at(2024, 6, 5, 9, 0, 0));
    let mut store = store_at(&clock);
    store.add_entry("Squats", 30);
    store.add_entry("Chin Ups", 5);

    assert_eq!(store.grouped_by_date(), store.grouped_by_date());
}

#[test]
fn test_group_by_date_on_plain_entries() {
    let entries = vec![
        FitnessEntry::new(1, "Push-ups", 10, "2024-06-05 08:00:00".into()),
        FitnessEntry::new(2, "Squats", 20, "2024-06-04 08:00:00".into()),
        FitnessEntry::new(3, "Push-ups", 15, "2024-06-05 19:00:00".into()),
    ];
    let grouped = group_by_date(&entries);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["2024-06-05"], vec![entries[0].clone(), entries[2].clone()]);
    assert_eq!(grouped["2024-06-04"], vec![entries[1].clone()]);
}

#[test]
fn test_subscribers_receive_one_snapshot_per_append() {
    let clock = ManualClock::new(at(2024, 6, 5, 9, 0, 0));
    let mut store = store_at(&clock);

    let received: Rc<RefCell<Vec<Arc<GroupedEntries>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    store.subscribe(move |snapshot| sink.borrow_mut().push(Arc::clone(snapshot)));

    store.add_entry("Push-ups", 10);
    store.add_entry("Calorie Intake", 500);

    let received = received.borrow();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0]["2024-06-05"].len(), 1);
    assert_eq!(*received[1], store.grouped_by_date());
    assert!(Arc::ptr_eq(&received[1], &store.snapshot()));
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut store = store_at(&ManualClock::new(at(2024, 6, 5, 9, 0, 0)));

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| counter.set(counter.get() + 1));

    store.add_entry("Plank", 45);
    assert!(store.unsubscribe(id));
    store.add_entry("Plank", 50);

    assert_eq!(calls.get(), 1);
    assert!(!store.unsubscribe(id));
}

#[test]
fn test_published_snapshot_is_not_mutated_by_later_appends() {
    let mut store = store_at(&ManualClock::new(at(2024, 6, 5, 9, 0, 0)));

    store.add_entry("Crunches", 25);
    let before = store.snapshot();
    store.add_entry("Crunches", 30);

    assert_eq!(before["2024-06-05"].len(), 1);
    assert_eq!(store.snapshot()["2024-06-05"].len(), 2);
}
