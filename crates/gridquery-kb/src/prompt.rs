//! Prompt construction
//!
//! System prompts state the task and the output contract (one JSON object in
//! a fenced block); user prompts carry the serialized sheet text or the
//! knowledge base plus the question.

use crate::knowledge::KnowledgeBase;

/// System prompt for knowledge-base extraction
pub const KNOWLEDGE_SYSTEM_PROMPT: &str = r#"You are a data analyst. You are given the contents of spreadsheet sheets as tab-separated text, one block per sheet. Extract a knowledge base describing the data.

Respond with exactly one JSON object inside a ```json fenced block, and nothing else. The object has this shape:

{
  "tables": [
    {
      "name": "table_name",
      "description": "what the table holds",
      "columns": [
        {"name": "column_name", "data_type": "text|integer|decimal|boolean|date", "description": "what the column means"}
      ]
    }
  ],
  "rules": [
    {"name": "rule_name", "description": "a business rule stated or implied by the data"}
  ],
  "scenarios": [
    {"name": "scenario_name", "description": "a test scenario for the data", "expected": "the expected outcome"}
  ]
}

Use snake_case names. Infer column types from the values. Leave a section as an empty array when the sheets give no evidence for it."#;

/// System prompt for SQL generation
pub const SQL_SYSTEM_PROMPT: &str = r#"You are a SQL assistant. You are given a knowledge base of table definitions, business rules and test scenarios, plus a user question. Write SQL queries (standard SQL) that answer the question using only the tables and columns in the knowledge base.

Respond with exactly one JSON object inside a ```json fenced block, and nothing else:

{
  "queries": [
    {"title": "short name", "sql": "SELECT ...", "explanation": "what the query does and why it answers the question"}
  ]
}

Prefer one focused query; add alternatives only when the question is genuinely ambiguous."#;

/// Build the user message for knowledge extraction
///
/// `sheets` pairs each sheet name with its serialized text.
pub fn knowledge_user_prompt(sheets: &[(String, String)]) -> String {
    let mut prompt = String::from("Extract the knowledge base from these sheets.\n");

    for (name, text) in sheets {
        prompt.push_str("\n## Sheet: ");
        prompt.push_str(name);
        prompt.push('\n');
        prompt.push_str(text);
    }

    prompt
}

/// Build the user message for SQL generation
pub fn sql_user_prompt(kb: &KnowledgeBase, question: &str) -> String {
    // The knowledge base is already a JSON-shaped model; embed it verbatim
    let kb_json = serde_json::to_string_pretty(kb).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Knowledge base:\n```json\n{}\n```\n\nQuestion: {}",
        kb_json, question
    )
}
