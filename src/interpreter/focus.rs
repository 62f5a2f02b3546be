use crate::value::Value;
use compact_str::{CompactString, ToCompactString};
use std::collections::HashMap;

/// Private per-item storage. The core never reads it; commands decide what
/// goes in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Storage {
    slots: HashMap<CompactString, Value>,
}

impl Storage {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.slots.insert(name.to_compact_string(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.slots.remove(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusItem {
    pub input: Value,
    pub working: Value,
    pub storage: Storage,
}

impl FocusItem {
    pub fn new(input: Value) -> Self {
        Self {
            working: input.clone(),
            input,
            storage: Storage::default(),
        }
    }
}

/// The ordered working set commands act on. Never empty.
#[derive(Debug, Clone)]
pub struct Focus {
    items: Vec<FocusItem>,
}

impl Focus {
    pub fn new(input: Value) -> Self {
        Self {
            items: vec![FocusItem::new(input)],
        }
    }

    pub fn items(&self) -> &[FocusItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [FocusItem] {
        &mut self.items
    }

    pub fn to_value(&self) -> Value {
        Value::List(self.items.iter().cloned().map(Value::from).collect())
    }
}
