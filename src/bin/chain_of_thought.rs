use anyhow::Result;

use reasoning_agents::agents::reasoning::chain_of_thought;
use reasoning_agents::config::Config;
use reasoning_agents::llm::backend_from_config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reasoning_agents=info")
        .init();

    let config = Config::resolve()?;
    let backend = backend_from_config(&config.llm)?;

    let math_problem = "If John has 5 apples and gives 2 to Mary, then buys 3 more and gives \
                        half of his apples to Tom, how many apples does John have left?";
    let logical_problem = "If all A are B, and some B are C, can we conclude that some A are C? \
                           Why or why not?";

    println!(
        "Math Problem:\n{}",
        chain_of_thought(backend.as_ref(), math_problem).await?
    );
    println!(
        "\nLogical Problem:\n{}",
        chain_of_thought(backend.as_ref(), logical_problem).await?
    );

    Ok(())
}
