use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::llm::LlmBackend;

/// Returned by `evaluate_purchase` when no plan has been created yet.
/// This path issues no model call.
pub const NO_BUDGET_PLAN: &str = "No budget plan exists. Please create a budget plan first.";

/// Session record written by `create_budget_plan` and read back verbatim
/// by `evaluate_purchase`. Lives as long as the agent; never persisted.
#[derive(Debug, Clone)]
pub struct BudgetState {
    pub income: u64,
    pub expenses: Vec<(String, u64)>,
    pub savings_goal: u64,
    pub timeline_months: u32,
    pub budget_plan: String,
}

/// Budgeting agent with two entry points sharing one session record.
pub struct PersonalFinanceAgent {
    llm: Arc<dyn LlmBackend>,
    state: Option<BudgetState>,
}

impl PersonalFinanceAgent {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        info!("PersonalFinanceAgent initialized.");
        Self { llm, state: None }
    }

    pub fn budget_state(&self) -> Option<&BudgetState> {
        self.state.as_ref()
    }

    /// Format expenses for readability in prompts, one line per category.
    fn summarize_expenses(expenses: &[(String, u64)]) -> String {
        let mut summary = String::new();
        for (category, amount) in expenses {
            summary.push_str(&format!("- {}: ${}\n", category, amount));
        }
        summary
    }

    /// Create a budget plan and store it, with its inputs, in the session
    /// record for later purchase evaluations.
    pub async fn create_budget_plan(
        &mut self,
        income: u64,
        expenses: Vec<(String, u64)>,
        savings_goal: u64,
        timeline_months: u32,
    ) -> Result<String> {
        let expenses_summary = Self::summarize_expenses(&expenses);
        let prompt = format!(
            "Create a detailed budget plan based on the following information:\n\
             \n\
             MONTHLY INCOME: ${income}\n\
             \n\
             CURRENT EXPENSES:\n\
             {expenses_summary}\n\
             SAVINGS GOAL: ${savings_goal} in {timeline_months} months\n\
             \n\
             Think through this step-by-step:\n\
             1. Calculate the monthly savings required to reach the goal\n\
             2. Analyze current spending patterns to identify areas for reduction\n\
             3. Create a recommended monthly budget with specific allocations\n\
             4. Suggest concrete actions to reduce expenses in key categories\n\
             5. Develop a contingency plan for unexpected expenses\n\
             \n\
             Provide the complete budget plan with clear category allocations and actionable recommendations.\n"
        );

        let budget_plan = self.llm.generate(&prompt).await?;

        self.state = Some(BudgetState {
            income,
            expenses,
            savings_goal,
            timeline_months,
            budget_plan: budget_plan.clone(),
        });

        Ok(budget_plan)
    }

    /// Evaluate whether a purchase fits the stored budget plan. The stored
    /// fields are interpolated as-is; there is no revalidation.
    pub async fn evaluate_purchase(
        &self,
        amount: u64,
        category: &str,
        description: &str,
    ) -> Result<String> {
        let Some(state) = &self.state else {
            return Ok(NO_BUDGET_PLAN.to_string());
        };

        let prompt = format!(
            "Evaluate if this purchase decision aligns with the user's budget plan:\n\
             \n\
             PROPOSED PURCHASE:\n\
             - Amount: ${amount}\n\
             - Category: {category}\n\
             - Description: {description}\n\
             \n\
             USER'S BUDGET CONTEXT:\n\
             - Monthly Income: ${income}\n\
             - Savings Goal: ${savings_goal} in {timeline_months} months\n\
             \n\
             CURRENT BUDGET PLAN:\n\
             {budget_plan}\n\
             \n\
             Think through this decision step-by-step:\n\
             1. Identify which budget category this purchase falls under\n\
             2. Determine if this purchase exceeds the allocated amount for that category\n\
             3. Assess the necessity and value of this purchase\n\
             4. Consider alternatives or postponement options\n\
             5. Provide a clear recommendation with justification\n\
             \n\
             Should the user proceed with this purchase? Why or why not?\n",
            income = state.income,
            savings_goal = state.savings_goal,
            timeline_months = state.timeline_months,
            budget_plan = state.budget_plan,
        );

        Ok(self.llm.generate(&prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedBackend;

    fn sample_expenses() -> Vec<(String, u64)> {
        vec![
            ("Housing".to_string(), 1800),
            ("Utilities".to_string(), 350),
            ("Groceries".to_string(), 600),
            ("Transportation".to_string(), 400),
            ("Entertainment".to_string(), 450),
            ("Dining Out".to_string(), 500),
            ("Shopping".to_string(), 600),
            ("Subscriptions".to_string(), 120),
            ("Miscellaneous".to_string(), 300),
        ]
    }

    #[tokio::test]
    async fn evaluate_before_plan_returns_sentinel_without_calling() {
        let backend = Arc::new(ScriptedBackend::new(Vec::<String>::new()));
        let agent = PersonalFinanceAgent::new(backend.clone());

        let verdict = agent
            .evaluate_purchase(899, "Electronics", "New smartphone")
            .await
            .unwrap();

        assert_eq!(verdict, NO_BUDGET_PLAN);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn create_budget_plan_populates_session_state() {
        let backend = Arc::new(ScriptedBackend::new(["Spend less on dining out."]));
        let mut agent = PersonalFinanceAgent::new(backend.clone());

        let plan = agent
            .create_budget_plan(5800, sample_expenses(), 12_000, 12)
            .await
            .unwrap();

        assert_eq!(plan, "Spend less on dining out.");
        let state = agent.budget_state().unwrap();
        assert_eq!(state.income, 5800);
        assert_eq!(state.savings_goal, 12_000);
        assert_eq!(state.timeline_months, 12);
        assert_eq!(state.budget_plan, "Spend less on dining out.");

        let prompts = backend.prompts();
        assert!(prompts[0].contains("MONTHLY INCOME: $5800"));
        assert!(prompts[0].contains("- Housing: $1800"));
        assert!(prompts[0].contains("SAVINGS GOAL: $12000 in 12 months"));
    }

    #[tokio::test]
    async fn evaluation_prompt_reads_back_stored_state() {
        let backend = Arc::new(ScriptedBackend::new([
            "THE PLAN",
            "Postpone the purchase.",
        ]));
        let mut agent = PersonalFinanceAgent::new(backend.clone());

        agent
            .create_budget_plan(5800, sample_expenses(), 12_000, 12)
            .await
            .unwrap();
        let verdict = agent
            .evaluate_purchase(899, "Electronics", "New smartphone to replace a cracked one")
            .await
            .unwrap();

        assert_eq!(verdict, "Postpone the purchase.");
        let prompts = backend.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("- Amount: $899"));
        assert!(prompts[1].contains("- Category: Electronics"));
        assert!(prompts[1].contains("THE PLAN"));
        assert!(prompts[1].contains("- Monthly Income: $5800"));
        assert!(prompts[1].contains("- Savings Goal: $12000 in 12 months"));
    }
}
