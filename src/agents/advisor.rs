use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::llm::LlmBackend;

/// Structured description of the client, rendered into the prompt as
/// pretty-printed JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ClientProfile {
    pub age: u32,
    pub income: u64,
    pub savings: u64,
    pub debt: u64,
    pub dependents: u32,
    pub existing_investments: BTreeMap<String, u64>,
    pub risk_tolerance: String,
}

/// One-shot investment advice from a client profile and free-text goals.
pub struct FinancialAdvisor {
    llm: Arc<dyn LlmBackend>,
}

impl FinancialAdvisor {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        info!("FinancialAdvisor initialized.");
        Self { llm }
    }

    pub async fn advise(&self, profile: &ClientProfile, goals: &str) -> Result<String> {
        let profile_json = serde_json::to_string_pretty(profile)?;
        let prompt = format!(
            "As a financial advisor, provide investment recommendations for this client:\n\
             \n\
             CLIENT PROFILE:\n\
             {profile_json}\n\
             \n\
             INVESTMENT GOALS:\n\
             {goals}\n\
             \n\
             Let's think through this step-by-step:\n\
             1. Analyze the client's risk tolerance based on age, financial situation, and goals\n\
             2. Consider current market conditions and economic factors\n\
             3. Evaluate appropriate asset allocation (stocks, bonds, alternatives)\n\
             4. Recommend specific investment vehicles and explain the rationale\n\
             5. Address potential concerns and provide risk mitigation strategies\n"
        );
        Ok(self.llm.generate(&prompt).await?)
    }
}
