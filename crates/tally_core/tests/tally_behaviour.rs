use pretty_assertions::assert_eq;
use tally_core::{tally, RecordHolder, Tally};

fn init_logging() {
    tally_logging::initialize_for_tests();
}

fn naive_count(items: &[&str], needle: &str) -> u64 {
    items.iter().filter(|&&item| item == needle).count() as u64
}

#[test]
fn fruit_sequence_counts_exactly() {
    init_logging();
    let counts = tally(["apple", "banana", "apple", "cherry"]);

    assert_eq!(counts.len(), 3);
    assert_eq!(counts["apple"], 2);
    assert_eq!(counts["banana"], 1);
    assert_eq!(counts["cherry"], 1);
    assert_eq!(counts.get("durian"), None);
}

#[test]
fn empty_sequence_gives_empty_tally() {
    let counts = tally(Vec::<String>::new());
    assert!(counts.is_empty());
    assert_eq!(counts.total(), 0);
    assert_eq!(counts.to_string(), "{}");
}

#[test]
fn every_distinct_item_counted_once_with_its_occurrences() {
    let sequences: &[&[&str]] = &[
        &["a"],
        &["a", "a", "a"],
        &["b", "a", "b", "c", "a", "b"],
        &["", " ", "", "x"],
        &["Apple", "apple", "APPLE", "apple"],
    ];

    for items in sequences {
        let counts = tally(items.iter().copied());
        for (item, count) in counts.iter() {
            assert!(count > 0, "zero count for {item:?}");
            assert_eq!(count, naive_count(items, item), "count for {item:?}");
        }
        for item in items.iter() {
            assert!(counts.get(item).is_some(), "missing {item:?}");
        }
        assert_eq!(counts.total(), items.len() as u64);
    }
}

#[test]
fn keys_follow_first_occurrence() {
    let counts = tally(["cherry", "apple", "cherry", "banana"]);
    let keys: Vec<_> = counts.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["cherry", "apple", "banana"]);
}

#[test]
fn display_lists_counts_in_order() {
    let counts = tally(["apple", "banana", "apple", "cherry"]);
    assert_eq!(
        counts.to_string(),
        r#"{"apple": 2, "banana": 1, "cherry": 1}"#
    );
}

#[test]
fn equality_ignores_key_order() {
    let a = tally(["x", "y", "x"]);
    let b = tally(["y", "x", "x"]);
    assert_eq!(a, b);
}

#[test]
fn holder_tally_does_not_touch_data() {
    let holder = RecordHolder::with_entries("test", [("count", 42)]);
    let counts = holder.tally(vec!["count".to_string(), "count".to_string()]);

    assert_eq!(counts["count"], 2);
    assert_eq!(holder.data.len(), 1);
    assert_eq!(holder.data["count"].as_int(), Some(42));
}

#[test]
fn tally_accepts_owned_and_borrowed_items() {
    let owned: Tally = vec![String::from("a"), String::from("b")].into_iter().collect();
    let borrowed = tally(["a", "b"]);
    assert_eq!(owned, borrowed);
}
