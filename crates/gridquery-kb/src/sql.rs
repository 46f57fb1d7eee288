//! SQL generation service

use crate::error::{KbError, KbResult};
use crate::knowledge::{GeneratedQuery, KnowledgeBase};
use crate::prompt::{sql_user_prompt, SQL_SYSTEM_PROMPT};
use gridquery_llm::{ChatClient, ChatMessage};
use serde::Deserialize;

#[derive(Deserialize)]
struct QueriesPayload {
    #[serde(default)]
    queries: Vec<GeneratedQuery>,
}

/// Generates SQL queries from a knowledge base with one completion request
pub struct SqlGenerator<C> {
    client: C,
}

impl<C: ChatClient> SqlGenerator<C> {
    /// Create a generator around a chat client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ask the model for SQL answering `question` over the knowledge base
    ///
    /// The model is instructed to answer `{"queries": [...]}`; a bare
    /// top-level array is accepted too since models drop the wrapper often
    /// enough.
    pub async fn generate(
        &self,
        kb: &KnowledgeBase,
        question: &str,
    ) -> KbResult<Vec<GeneratedQuery>> {
        tracing::info!(tables = kb.tables.len(), "Generating SQL");

        let messages = [
            ChatMessage::system(SQL_SYSTEM_PROMPT),
            ChatMessage::user(sql_user_prompt(kb, question)),
        ];

        let completion = self.client.complete(&messages).await?;
        let value = gridquery_core::extract_json(&completion)?;

        let queries = if value.is_array() {
            serde_json::from_value::<Vec<GeneratedQuery>>(value)?
        } else {
            serde_json::from_value::<QueriesPayload>(value)?.queries
        };

        tracing::debug!(queries = queries.len(), "SQL generated");
        Ok(queries)
    }
}
