//! Knowledge-base extraction service

use crate::error::{KbError, KbResult};
use crate::knowledge::KnowledgeBase;
use crate::prompt::{knowledge_user_prompt, KNOWLEDGE_SYSTEM_PROMPT};
use gridquery_core::{serialize_used_range, Workbook};
use gridquery_llm::{ChatClient, ChatMessage};
use serde::de::DeserializeOwned;

/// Decode a typed payload out of raw completion text
///
/// Layers schema decoding over the tolerant JSON extraction, so fenced or
/// prose-wrapped completions still decode.
pub fn extract_payload<T: DeserializeOwned>(completion: &str) -> KbResult<T> {
    let value = gridquery_core::extract_json(completion)?;
    Ok(serde_json::from_value(value)?)
}

/// Extracts a [`KnowledgeBase`] from a workbook with one completion request
pub struct KnowledgeExtractor<C> {
    client: C,
}

impl<C: ChatClient> KnowledgeExtractor<C> {
    /// Create an extractor around a chat client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Serialize the workbook's sheets, ask the model for a knowledge base,
    /// and decode the response
    ///
    /// Sheets with no cells are skipped; a workbook with no cell data at all
    /// is [`KbError::EmptyWorkbook`].
    pub async fn extract(&self, workbook: &Workbook) -> KbResult<KnowledgeBase> {
        let mut sheets = Vec::new();
        for sheet in workbook.sheets() {
            if let Some(text) = serialize_used_range(sheet)? {
                sheets.push((sheet.name().to_string(), text));
            }
        }

        if sheets.is_empty() {
            return Err(KbError::EmptyWorkbook);
        }

        tracing::info!(sheets = sheets.len(), "Extracting knowledge base");

        let messages = [
            ChatMessage::system(KNOWLEDGE_SYSTEM_PROMPT),
            ChatMessage::user(knowledge_user_prompt(&sheets)),
        ];

        let completion = self.client.complete(&messages).await?;
        let kb: KnowledgeBase = extract_payload(&completion)?;

        tracing::debug!(
            tables = kb.tables.len(),
            rules = kb.rules.len(),
            scenarios = kb.scenarios.len(),
            "Knowledge base extracted"
        );

        Ok(kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gridquery_core::Sheet;
    use gridquery_llm::LlmResult;
    use std::sync::Mutex;

    /// Test double that replays a canned completion and records the request
    struct ScriptedClient {
        completion: String,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl ScriptedClient {
        fn new<S: Into<String>>(completion: S) -> Self {
            Self {
                completion: completion.into(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatClient for ScriptedClient {
        async fn complete(&self, messages: &[ChatMessage]) -> LlmResult<String> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            Ok(self.completion.clone())
        }
    }

    fn workbook_with_orders() -> Workbook {
        let mut sheet = Sheet::new("Orders");
        sheet.set_a1("A1", "id").unwrap();
        sheet.set_a1("B1", "total").unwrap();
        sheet.set_a1("A2", 1.0).unwrap();
        sheet.set_a1("B2", 10.5).unwrap();

        let mut wb = Workbook::new();
        wb.add_sheet(sheet).unwrap();
        wb.add_sheet(Sheet::new("Blank")).unwrap();
        wb
    }

    #[tokio::test]
    async fn extracts_from_fenced_completion() {
        let client = ScriptedClient::new(
            "```json\n{\"tables\": [{\"name\": \"orders\", \"columns\": []}]}\n```",
        );
        let extractor = KnowledgeExtractor::new(client);

        let kb = extractor.extract(&workbook_with_orders()).await.unwrap();
        assert_eq!(kb.tables.len(), 1);
        assert_eq!(kb.tables[0].name, "orders");

        // The prompt carried the serialized sheet, and skipped the blank one
        let seen = extractor.client.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].content.contains("## Sheet: Orders"));
        assert!(seen[1].content.contains("id\ttotal\t\n"));
        assert!(!seen[1].content.contains("Blank"));
    }

    #[tokio::test]
    async fn extracts_from_prose_wrapped_completion() {
        let client =
            ScriptedClient::new("Here is what I found: {\"rules\": [{\"name\": \"r1\"}]} hope it helps");
        let extractor = KnowledgeExtractor::new(client);

        let kb = extractor.extract(&workbook_with_orders()).await.unwrap();
        assert_eq!(kb.rules.len(), 1);
    }

    #[tokio::test]
    async fn malformed_completion_is_a_typed_error() {
        let client = ScriptedClient::new("I could not produce JSON, sorry.");
        let extractor = KnowledgeExtractor::new(client);

        assert!(matches!(
            extractor.extract(&workbook_with_orders()).await,
            Err(KbError::Core(
                gridquery_core::Error::MalformedPayload { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn empty_workbook_is_rejected_before_any_request() {
        let client = ScriptedClient::new("{}");
        let extractor = KnowledgeExtractor::new(client);

        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Blank")).unwrap();

        assert!(matches!(
            extractor.extract(&wb).await,
            Err(KbError::EmptyWorkbook)
        ));
        assert!(extractor.client.seen.lock().unwrap().is_empty());
    }
}
