//! Knowledge-base model
//!
//! The structured view of a spreadsheet the model is asked to produce:
//! table definitions, business rules and test scenarios. All fields are
//! tolerant of omission since completions routinely drop empty sections.

use serde::{Deserialize, Serialize};

/// Everything extracted from one workbook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Table definitions discovered in the sheets
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
    /// Business rules stated or implied by the data
    #[serde(default)]
    pub rules: Vec<BusinessRule>,
    /// Test scenarios derivable from the data
    #[serde(default)]
    pub scenarios: Vec<TestScenario>,
}

impl KnowledgeBase {
    /// Check whether nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.rules.is_empty() && self.scenarios.is_empty()
    }
}

/// One table definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

/// One column within a table definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub description: String,
}

/// One business rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRule {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One test scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expected: String,
}

/// One model-generated SQL query with its explanation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQuery {
    pub title: String,
    pub sql: String,
    #[serde(default)]
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_missing_sections() {
        let kb: KnowledgeBase = serde_json::from_str(
            r#"{"tables": [{"name": "orders", "columns": [{"name": "id"}]}]}"#,
        )
        .unwrap();

        assert_eq!(kb.tables.len(), 1);
        assert_eq!(kb.tables[0].columns[0].name, "id");
        assert!(kb.rules.is_empty());
        assert!(kb.scenarios.is_empty());
        assert!(!kb.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let kb = KnowledgeBase {
            tables: vec![TableDefinition {
                name: "orders".into(),
                description: "sales orders".into(),
                columns: vec![ColumnDefinition {
                    name: "total".into(),
                    data_type: "decimal".into(),
                    description: String::new(),
                }],
            }],
            rules: vec![BusinessRule {
                name: "no-negative-totals".into(),
                description: "order totals are never negative".into(),
            }],
            scenarios: vec![],
        };

        let json = serde_json::to_string(&kb).unwrap();
        let back: KnowledgeBase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kb);
    }
}
