use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::extract::extract_json;
use crate::llm::LlmBackend;

/// How many trailing turns of history go into the planning prompt.
const HISTORY_WINDOW: usize = 6;

/// One entry in the running conversation, customer or agent side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

/// Structured reading of a customer query, parsed out of the model's
/// intent-analysis reply. Missing fields take the same defaults the
/// fallback record uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    #[serde(default = "unknown")]
    pub primary_intent: String,
    #[serde(default = "unknown")]
    pub intent_type: String,
    #[serde(default = "neutral")]
    pub emotional_tone: String,
    #[serde(default)]
    pub mentioned_products: Vec<String>,
    #[serde(default = "medium")]
    pub priority_level: String,
    #[serde(default)]
    pub key_details: String,
}

fn unknown() -> String {
    "unknown".to_string()
}

fn neutral() -> String {
    "neutral".to_string()
}

fn medium() -> String {
    "medium".to_string()
}

impl IntentAnalysis {
    /// Fixed record used when the reply holds no parseable JSON. The raw
    /// reply text is preserved in `key_details`.
    pub fn fallback(raw: &str) -> Self {
        Self {
            primary_intent: unknown(),
            intent_type: unknown(),
            emotional_tone: neutral(),
            mentioned_products: Vec::new(),
            priority_level: medium(),
            key_details: raw.to_string(),
        }
    }
}

/// Everything produced by one pass through the pipeline.
#[derive(Debug, Clone)]
pub struct SupportReply {
    pub response: String,
    pub intent_analysis: IntentAnalysis,
    pub response_plan: String,
}

/// Customer service agent: a three-stage pipeline (intent analysis,
/// response planning, response generation) threaded through plain data.
/// Each stage feeds the next; a backend failure at any stage aborts the
/// whole pass.
pub struct CustomerServiceAgent {
    llm: Arc<dyn LlmBackend>,
    history: Vec<ConversationTurn>,
    customer_context: Option<Value>,
}

impl CustomerServiceAgent {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        info!("CustomerServiceAgent initialized.");
        Self {
            llm,
            history: Vec::new(),
            customer_context: None,
        }
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Run a customer query through the full pipeline. `customer_data`,
    /// when given, replaces the stored customer context before anything
    /// else happens.
    pub async fn process_query(
        &mut self,
        customer_id: &str,
        query: &str,
        customer_data: Option<Value>,
    ) -> Result<SupportReply> {
        debug!("Processing query for customer {}", customer_id);

        if let Some(data) = customer_data {
            self.customer_context = Some(data);
        }

        self.history.push(ConversationTurn {
            role: "customer".to_string(),
            content: query.to_string(),
        });

        let intent_analysis = self.analyze_intent(query).await?;
        let response_plan = self.plan_response(&intent_analysis, query).await?;
        let response = self.generate_response(&response_plan).await?;

        self.history.push(ConversationTurn {
            role: "agent".to_string(),
            content: response.clone(),
        });

        Ok(SupportReply {
            response,
            intent_analysis,
            response_plan,
        })
    }

    /// Stage one: ask for a JSON intent analysis; degrade to the fallback
    /// record when the reply does not parse.
    async fn analyze_intent(&self, query: &str) -> Result<IntentAnalysis> {
        let prompt = format!(
            "Analyze the customer service query below to understand the customer's intent:\n\
             \n\
             CUSTOMER QUERY: \"{query}\"\n\
             \n\
             Think through this step-by-step:\n\
             1. Identify the primary issue or request in the query\n\
             2. Determine if this is a question, complaint, request for assistance, or feedback\n\
             3. Identify any emotional tones (frustrated, confused, angry, satisfied)\n\
             4. Extract key products, services, or account details mentioned\n\
             5. Determine the priority level (low, medium, high)\n\
             \n\
             Provide your analysis in JSON format with these fields:\n\
             - primary_intent\n\
             - intent_type (question/complaint/request/feedback)\n\
             - emotional_tone\n\
             - mentioned_products\n\
             - priority_level\n\
             - key_details\n"
        );

        let reply = self.llm.generate(&prompt).await?;
        Ok(extract_json(&reply).unwrap_or_else(|| IntentAnalysis::fallback(&reply)))
    }

    /// Stage two: plan the response from the intent analysis, the raw
    /// query, the customer context, and the trailing history window.
    async fn plan_response(&self, intent: &IntentAnalysis, query: &str) -> Result<String> {
        let intent_json = serde_json::to_string_pretty(intent)?;
        let context_str = match &self.customer_context {
            Some(context) => serde_json::to_string_pretty(context)?,
            None => "No customer context available".to_string(),
        };
        let history_str = self.history_context();

        let prompt = format!(
            "Plan a response to this customer service interaction:\n\
             \n\
             INTENT ANALYSIS:\n\
             {intent_json}\n\
             \n\
             CUSTOMER QUERY:\n\
             \"{query}\"\n\
             \n\
             CUSTOMER CONTEXT:\n\
             {context_str}\n\
             \n\
             CONVERSATION HISTORY:\n\
             {history_str}\n\
             \n\
             Create a detailed plan for the response by:\n\
             1. Determining what information is needed to address the query\n\
             2. Identifying appropriate actions to resolve the issue\n\
             3. Planning acknowledgment of customer emotions (especially if negative)\n\
             4. Considering follow-up questions or options to present\n\
             5. Structuring the response for clarity and empathy\n\
             \n\
             Provide your response plan in detail, outlining main points to address.\n"
        );

        Ok(self.llm.generate(&prompt).await?)
    }

    /// Stage three: turn the plan into the message sent to the customer.
    async fn generate_response(&self, response_plan: &str) -> Result<String> {
        let prompt = format!(
            "Based on this response plan, generate a compassionate, clear, and helpful customer service message:\n\
             \n\
             RESPONSE PLAN:\n\
             {response_plan}\n\
             \n\
             Generate a natural-sounding customer service response that addresses all points in the plan\n\
             while maintaining a supportive, professional tone. The response should be easy to understand\n\
             and show genuine concern for the customer's needs.\n"
        );

        Ok(self.llm.generate(&prompt).await?)
    }

    /// Last `HISTORY_WINDOW` turns, oldest first, one `role: content`
    /// line each. Truncation happens here at read time only; the stored
    /// history itself keeps growing.
    fn history_context(&self) -> String {
        let start = self.history.len().saturating_sub(HISTORY_WINDOW);
        self.history[start..]
            .iter()
            .map(|turn| format!("{}: {}", turn.role, turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
