use serde::{Deserialize, Serialize};

use super::GestureCode;
use crate::core::ActionKind;

/// One gesture-to-action binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub gesture: GestureCode,
    pub action: ActionKind,
}

impl MappingRule {
    pub fn new(gesture: GestureCode, action: ActionKind) -> Self {
        Self { gesture, action }
    }
}

/// First rule whose gesture equals `code`, in table order
pub fn find_action(rules: &[MappingRule], code: GestureCode) -> Option<ActionKind> {
    rules
        .iter()
        .find(|rule| rule.gesture == code)
        .map(|rule| rule.action)
}

/// Ordered rule list, read-only for the duration of a run.
///
/// Duplicate gestures are allowed; only the first one is ever consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    rules: Vec<MappingRule>,
}

impl MappingTable {
    pub fn new(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }

    pub fn find_action(&self, code: GestureCode) -> Option<ActionKind> {
        find_action(&self.rules, code)
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<MappingRule> for MappingTable {
    fn from_iter<I: IntoIterator<Item = MappingRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
