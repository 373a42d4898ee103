use crate::llm::{BackendError, LlmBackend};

/// Basic chain-of-thought prompting: ask the model to reason in explicit
/// steps before answering. Single call, raw text back.
pub async fn chain_of_thought(
    backend: &dyn LlmBackend,
    question: &str,
) -> Result<String, BackendError> {
    let prompt = format!(
        "Question: {question}\n\n\
         Let's think about this step by step to find the correct answer.\n"
    );
    backend.generate(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedBackend;

    #[tokio::test]
    async fn prompt_embeds_the_question_verbatim() {
        let backend = ScriptedBackend::new(["John has 4 apples left."]);
        let question = "If John has 5 apples and gives 2 to Mary, how many are left?";

        let answer = chain_of_thought(&backend, question).await.unwrap();

        assert_eq!(answer, "John has 4 apples left.");
        let prompts = backend.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(question));
        assert!(prompts[0].contains("step by step"));
    }
}
