use anyhow::Result;
use serde_json::json;

use reasoning_agents::agents::support::CustomerServiceAgent;
use reasoning_agents::config::Config;
use reasoning_agents::llm::backend_from_config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reasoning_agents=info")
        .init();

    let config = Config::resolve()?;
    let mut agent = CustomerServiceAgent::new(backend_from_config(&config.llm)?);

    let customer_data = json!({
        "customer_id": "C1234567",
        "name": "Sarah Johnson",
        "account_type": "Premium",
        "subscription_status": "Active",
        "billing_cycle": "Monthly",
        "last_payment_date": "2025-03-15",
        "account_creation_date": "2023-07-22",
        "recent_support_issues": [
            {"date": "2025-02-10", "topic": "Login Problems", "resolved": true},
            {"date": "2025-01-05", "topic": "Billing Question", "resolved": true}
        ]
    });

    let query = "I've been charged twice for my April subscription and I'm really frustrated \
                 because this happened last month too. Can you please fix this and make sure it \
                 doesn't happen again?";

    let reply = agent
        .process_query("C1234567", query, Some(customer_data))
        .await?;

    println!(
        "INTENT ANALYSIS:\n{}",
        serde_json::to_string_pretty(&reply.intent_analysis)?
    );
    println!("\nRESPONSE PLAN:\n{}", reply.response_plan);
    println!("\nFINAL RESPONSE:\n{}", reply.response);

    Ok(())
}
