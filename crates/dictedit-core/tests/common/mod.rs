use dictedit_core::{CycleOptions, DictionaryValue, EditingCycle};

/// Entry with a key, value and order
#[allow(dead_code)]
pub fn entry(key: &str, value: &str, order: f64) -> DictionaryValue {
    DictionaryValue::new(key, value).with_order(order)
}

/// Three entries deliberately stored out of order
///
/// Buffer order is `A(20) B(10, disabled) C(no order)`.
#[allow(dead_code)]
pub fn sample_source() -> Vec<DictionaryValue> {
    vec![
        entry("A", "alpha", 20.0),
        entry("B", "beta", 10.0).with_enabled(false),
        DictionaryValue::new("C", "gamma"),
    ]
}

/// Editable cycle over `source` with default options
#[allow(dead_code)]
pub fn editable_cycle(source: &[DictionaryValue]) -> EditingCycle {
    EditingCycle::initialize(source, CycleOptions::default())
}

/// Keys of `entries` in their current order
#[allow(dead_code)]
pub fn keys(entries: &[DictionaryValue]) -> Vec<&str> {
    entries.iter().map(|e| e.key.as_str()).collect()
}
