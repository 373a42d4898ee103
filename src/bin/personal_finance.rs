use anyhow::Result;

use reasoning_agents::agents::finance::PersonalFinanceAgent;
use reasoning_agents::config::Config;
use reasoning_agents::llm::backend_from_config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reasoning_agents=info")
        .init();

    let config = Config::resolve()?;
    let mut agent = PersonalFinanceAgent::new(backend_from_config(&config.llm)?);

    let expenses = vec![
        ("Housing".to_string(), 1800),
        ("Utilities".to_string(), 350),
        ("Groceries".to_string(), 600),
        ("Transportation".to_string(), 400),
        ("Entertainment".to_string(), 450),
        ("Dining Out".to_string(), 500),
        ("Shopping".to_string(), 600),
        ("Subscriptions".to_string(), 120),
        ("Miscellaneous".to_string(), 300),
    ];

    let budget_plan = agent.create_budget_plan(5800, expenses, 12_000, 12).await?;
    println!("BUDGET PLAN:\n{budget_plan}");

    let purchase_evaluation = agent
        .evaluate_purchase(
            899,
            "Electronics",
            "New smartphone to replace 3-year old device with cracked screen",
        )
        .await?;
    println!("\nPURCHASE EVALUATION:\n{purchase_evaluation}");

    Ok(())
}
