use std::collections::BTreeMap;

use anyhow::Result;

use reasoning_agents::agents::advisor::{ClientProfile, FinancialAdvisor};
use reasoning_agents::config::Config;
use reasoning_agents::llm::backend_from_config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reasoning_agents=info")
        .init();

    let config = Config::resolve()?;
    let advisor = FinancialAdvisor::new(backend_from_config(&config.llm)?);

    let profile = ClientProfile {
        age: 42,
        income: 120_000,
        savings: 180_000,
        debt: 220_000, // Mortgage
        dependents: 2,
        existing_investments: BTreeMap::from([
            ("stocks".to_string(), 50_000),
            ("bonds".to_string(), 30_000),
            ("retirement_accounts".to_string(), 210_000),
        ]),
        risk_tolerance: "moderate".to_string(),
    };

    let goals = "I want to save for my children's college education (ages 8 and 10) while also \
                 growing my retirement fund. I'm concerned about market volatility but want to \
                 balance growth with reasonable risk. I can invest $1,500 monthly.";

    let advice = advisor.advise(&profile, goals).await?;
    println!("{advice}");

    Ok(())
}
