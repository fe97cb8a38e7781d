//! Editing Cycle Demonstration
//!
//! This example walks one editing cycle over a small status dictionary.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Staged edits that stay invisible to the source until commit
//! 2. The entry editor (open, submit, validation failure)
//! 3. Confirmed removal through a gate
//! 4. Resequencing orders

use dictedit_core::{
    CycleOptions, DictEditError, DictionaryValue, EditingCycle, ExError, QueryParams,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DictEdit Editing Cycle Demo ===\n");

    let source = vec![
        DictionaryValue::new("open", "Open").with_order(10.0),
        DictionaryValue::new("closed", "Closed").with_order(30.0),
        DictionaryValue::new("draft", "Draft")
            .with_order(20.0)
            .with_enabled(false),
    ];

    let mut cycle = EditingCycle::initialize(&source, CycleOptions::default());
    println!("Started cycle {} with {} entries", cycle.id(), cycle.count());

    // ===== Part 1: Create through the entry editor =====
    println!("\n## Part 1: Entry Editor\n");

    let draft = cycle.open_create()?;
    println!("Suggested order for new entry: {:?}", draft.order);

    let bad = DictionaryValue::new("in review", "In review");
    match cycle.submit_draft(bad) {
        Err(err @ DictEditError::FieldPattern { .. }) => {
            println!("✗ Rejected: {}", ExError::from(err));
        }
        other => println!("unexpected: {:?}", other),
    }

    let good = DictionaryValue::new("in_review", "In review").with_order(draft.order.unwrap_or(0.0));
    cycle.submit_draft(good)?;
    println!("✓ Added 'in_review'");

    // ===== Part 2: Confirmed removal =====
    println!("\n## Part 2: Confirmed Removal\n");

    let removed = cycle.remove_confirmed("draft", &|request: &dictedit_core::ConfirmationRequest| {
        println!("Prompt: {}", request.message());
        true
    })?;
    println!("Removed: {}", removed);

    // ===== Part 3: Resequence and query =====
    println!("\n## Part 3: Resequence\n");

    cycle.resequence()?;
    let response = cycle.query(&QueryParams::new().enabled(["1"]));
    for entry in &response.data {
        println!("  {:>4} {} = {}", entry.order.unwrap_or_default(), entry.key, entry.value);
    }

    let committed = cycle.commit();
    println!("\nCommitted {} entries; source still has {}", committed.len(), source.len());

    Ok(())
}
