//! Editing Cycle Tests
//!
//! Buffer behavior observed through the `EditingCycle` boundary.
//!
//! ## Scenarios Covered
//!
//! 1. Insert adds exactly one entry
//! 2. Duplicate keys are rejected without mutation
//! 3. Update may keep its own key, and may rename it
//! 4. Replace of a vanished entry is a non-fatal NotFound
//! 5. Remove / batch remove skip absent keys
//! 6. Resequence renumbers in ascending-order rank
//! 7. Commit and cancel never touch the source list
//! 8. End-to-end: insert, batch remove, resequence, commit
//! 9. Unusable order steps fail before any mutation
//! 10. A repeated source key is staged once

mod common;

use std::collections::BTreeSet;

use common::{editable_cycle, entry, keys, sample_source};
use dictedit_core::{
    CycleOptions, DictEditError, DictionaryValue, EditingCycle, EntryField, QueryParams,
};

fn key_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_insert_adds_exactly_one_entry() {
    // GIVEN a cycle over three entries
    let mut cycle = editable_cycle(&sample_source());
    let new_entry = entry("D", "delta", 40.0);

    // WHEN inserting a valid entry
    cycle.submit_create(new_entry.clone()).unwrap();

    // THEN the query contains it exactly once and the count grew by one
    let response = cycle.query(&QueryParams::new());
    assert_eq!(response.data.iter().filter(|e| **e == new_entry).count(), 1);
    assert_eq!(cycle.count(), 4);
}

#[test]
fn test_insert_appends_at_end_of_buffer() {
    let mut cycle = editable_cycle(&sample_source());

    cycle.submit_create(entry("D", "delta", 1.0)).unwrap();

    assert_eq!(keys(cycle.buffer().entries()), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_insert_duplicate_key_rejected() {
    // GIVEN a cycle containing key "A"
    let mut cycle = editable_cycle(&sample_source());
    let before = cycle.buffer().clone();

    // WHEN inserting another entry keyed "A"
    let result = cycle.submit_create(entry("A", "again", 99.0));

    // THEN it fails with DuplicateKey and nothing changes
    assert_eq!(
        result,
        Err(DictEditError::DuplicateKey {
            key: "A".to_string()
        })
    );
    assert_eq!(cycle.buffer(), &before);
}

#[test]
fn test_insert_invalid_candidate_rejected() {
    let mut cycle = editable_cycle(&sample_source());

    let result = cycle.submit_create(DictionaryValue::new("", "no key"));

    assert_eq!(
        result,
        Err(DictEditError::FieldRequired {
            field: EntryField::Key
        })
    );
    assert_eq!(cycle.count(), 3);
}

#[test]
fn test_update_keeping_own_key_is_not_duplicate() {
    // GIVEN entry "A"
    let mut cycle = editable_cycle(&sample_source());

    // WHEN replacing it with a candidate that keeps key "A"
    let result = cycle.submit_update("A", entry("A", "alpha v2", 20.0));

    // THEN the update succeeds in place
    assert!(result.is_ok());
    assert_eq!(cycle.buffer().entries()[0].value, "alpha v2");
    assert_eq!(cycle.count(), 3);
}

#[test]
fn test_update_to_another_existing_key_rejected() {
    let mut cycle = editable_cycle(&sample_source());

    let result = cycle.submit_update("A", entry("B", "clash", 20.0));

    assert!(matches!(result, Err(DictEditError::DuplicateKey { .. })));
    assert_eq!(keys(cycle.buffer().entries()), vec!["A", "B", "C"]);
}

#[test]
fn test_update_rename_keeps_position() {
    let mut cycle = editable_cycle(&sample_source());

    cycle
        .submit_update("B", entry("B2", "beta", 10.0).with_enabled(false))
        .unwrap();

    assert_eq!(keys(cycle.buffer().entries()), vec!["A", "B2", "C"]);
}

#[test]
fn test_update_vanished_target_is_not_found() {
    // GIVEN entry "A" was removed
    let mut cycle = editable_cycle(&sample_source());
    cycle.remove("A").unwrap();

    // WHEN an update still targets "A"
    let result = cycle.submit_update("A", entry("A", "late", 20.0));

    // THEN it reports NotFound and the buffer is unchanged
    assert_eq!(
        result,
        Err(DictEditError::NotFound {
            key: "A".to_string()
        })
    );
    assert_eq!(keys(cycle.buffer().entries()), vec!["B", "C"]);
}

#[test]
fn test_remove_absent_key_is_noop() {
    let mut cycle = editable_cycle(&sample_source());

    assert!(cycle.remove("missing").is_ok());
    assert_eq!(cycle.count(), 3);
}

#[test]
fn test_batch_remove_skips_absent_keys() {
    let mut cycle = editable_cycle(&sample_source());

    cycle.batch_remove(&key_set(&["A", "C", "Z"])).unwrap();

    assert_eq!(keys(cycle.buffer().entries()), vec!["B"]);

    // Repeating the same batch changes nothing further
    cycle.batch_remove(&key_set(&["A", "C", "Z"])).unwrap();
    assert_eq!(cycle.count(), 1);
}

#[test]
fn test_resequence_assigns_multiples_of_five_by_rank() {
    // GIVEN entries with orders 20, 10 and none
    let mut cycle = editable_cycle(&sample_source());

    // WHEN resequencing
    cycle.resequence().unwrap();

    // THEN the default query yields 5, 10, 15 in pre-resequence rank
    let response = cycle.query(&QueryParams::new());
    assert_eq!(keys(&response.data), vec!["B", "A", "C"]);
    let orders: Vec<_> = response.data.iter().map(|e| e.order).collect();
    assert_eq!(orders, vec![Some(5.0), Some(10.0), Some(15.0)]);
}

#[test]
fn test_resequence_ties_keep_buffer_order() {
    let source = vec![
        entry("X", "x", 7.0),
        entry("Y", "y", 3.0),
        entry("Z", "z", 7.0),
    ];
    let mut cycle = editable_cycle(&source);

    cycle.resequence().unwrap();

    let committed = cycle.commit();
    assert_eq!(keys(&committed), vec!["Y", "X", "Z"]);
    assert_eq!(committed[2].order, Some(15.0));
}

#[test]
fn test_suggested_order_after_resequence() {
    let mut cycle = editable_cycle(&sample_source());
    cycle.resequence().unwrap();

    let draft = cycle.open_create().unwrap();

    assert_eq!(draft.order, Some(20.0));
}

#[test]
fn test_source_list_never_mutated() {
    // GIVEN a source list
    let source = sample_source();
    let snapshot = source.clone();

    // WHEN the cycle mutates and commits
    let mut cycle = editable_cycle(&source);
    cycle.remove("A").unwrap();
    cycle.submit_update("B", entry("B", "changed", 1.0)).unwrap();
    cycle.resequence().unwrap();
    let committed = cycle.commit();

    // THEN only the committed list reflects the changes
    assert_eq!(source, snapshot);
    assert_ne!(committed, snapshot);
}

#[test]
fn test_cancel_leaves_next_cycle_unaffected() {
    let source = sample_source();

    let mut first = editable_cycle(&source);
    first.batch_remove(&key_set(&["A", "B", "C"])).unwrap();
    first.cancel();

    let second = editable_cycle(&source);
    assert_eq!(second.count(), 3);
    assert_eq!(second.commit(), source);
}

#[test]
fn test_empty_source_gives_empty_buffer() {
    let mut cycle = EditingCycle::initialize(&[], CycleOptions::default());

    assert_eq!(cycle.count(), 0);
    assert_eq!(cycle.open_create().unwrap().order, Some(5.0));
    cycle.close_editor().unwrap();
    cycle.resequence().unwrap();
    assert!(cycle.commit().is_empty());
}

#[test]
fn test_end_to_end_insert_batch_remove_resequence_commit() {
    // GIVEN [{A, "1", 5, enabled}]
    let source = vec![entry("A", "1", 5.0)];
    let mut cycle = editable_cycle(&source);

    // WHEN inserting B(order 10, disabled), removing {A}, resequencing
    cycle
        .submit_create(entry("B", "2", 10.0).with_enabled(false))
        .unwrap();
    cycle.batch_remove(&key_set(&["A"])).unwrap();
    cycle.resequence().unwrap();

    // THEN commit yields [{B, "2", 5, disabled}]
    assert_eq!(
        cycle.commit(),
        vec![entry("B", "2", 5.0).with_enabled(false)]
    );
}

#[test]
fn test_unusable_order_step_rejected_before_mutation() {
    for step in [f64::INFINITY, -5.0, 0.0] {
        // GIVEN a cycle opened with an unusable order step
        let source = sample_source();
        let mut cycle =
            EditingCycle::initialize(&source, CycleOptions::default().with_order_step(step));

        // WHEN resequencing or opening the create editor
        let resequenced = cycle.resequence();
        let opened = cycle.open_create();

        // THEN both fail with InvalidOrderStep and nothing changes
        assert!(matches!(
            resequenced,
            Err(DictEditError::InvalidOrderStep { .. })
        ));
        assert!(matches!(opened, Err(DictEditError::InvalidOrderStep { .. })));
        assert!(!cycle.editor().is_active());
        assert_eq!(cycle.commit(), source);
    }
}

#[test]
fn test_custom_order_step_draft_passes_validation() {
    let options = CycleOptions::default().try_with_order_step(0.5).unwrap();
    let mut cycle = EditingCycle::initialize(&sample_source(), options);

    let draft = cycle.open_create().unwrap();
    let candidate = DictionaryValue {
        key: "D".to_string(),
        value: "delta".to_string(),
        ..draft
    };

    assert!(cycle.submit_draft(candidate).is_ok());
    assert_eq!(cycle.buffer().get("D").unwrap().order, Some(20.5));
}

#[test]
fn test_repeated_source_key_staged_once() {
    // GIVEN a source list that repeats key "A"
    let source = vec![
        entry("A", "first", 10.0),
        entry("B", "beta", 20.0),
        entry("A", "second", 30.0),
    ];

    // WHEN a cycle stages it
    let mut cycle = editable_cycle(&source);

    // THEN only the first "A" is staged
    assert_eq!(cycle.count(), 2);
    assert_eq!(cycle.buffer().get("A").unwrap().value, "first");

    // AND single and batch removal both leave no "A" behind
    let mut batch = editable_cycle(&source);
    cycle.remove("A").unwrap();
    batch.batch_remove(&key_set(&["A"])).unwrap();
    assert_eq!(keys(&cycle.commit()), vec!["B"]);
    assert_eq!(keys(&batch.commit()), vec!["B"]);
}
