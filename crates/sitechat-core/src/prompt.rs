//! Prompt construction for answer generation.
//!
//! A prompt embeds, in order: the assistant framing, the flattened
//! conversation history, the context block, the user's question, a
//! detail instruction chosen by [`DetailLevel`], and fixed formatting
//! instructions.

use crate::models::{DetailLevel, HistoryEntry};

/// Flatten history into `User: …` / `Assistant: …` lines, oldest first.
pub fn format_history(history: &[HistoryEntry]) -> String {
    history
        .iter()
        .map(|entry| format!("{}: {}", entry.role.speaker(), entry.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detail instruction for each [`DetailLevel`].
pub fn detail_instruction(level: DetailLevel) -> &'static str {
    match level {
        DetailLevel::Low => "Provide a brief but complete answer to the question.",
        DetailLevel::Medium => {
            "Provide a moderately detailed answer with key points and explanations."
        }
        DetailLevel::High => {
            "Provide a comprehensive, thorough answer with detailed explanations, examples, and multiple perspectives where relevant."
        }
    }
}

const RESPONSE_INSTRUCTIONS: &str = "\
Instructions for responding:
1. Provide a comprehensive answer that thoroughly addresses all aspects of the question
2. Include specific details, examples, and explanations where appropriate
3. Structure your response with clear sections using markdown formatting
4. Use **bold** for key terms and concepts
5. When relevant, include bullet points or numbered lists to organize information
6. If the context contains multiple relevant pieces of information, synthesize them into a cohesive response
7. If context is limited or partial, still provide the most complete answer possible using your general knowledge
8. Do NOT be overly brief - aim for thoroughness and completeness
9. Include relevant background information that helps understand the topic

Format your response with:
- A clear introductory paragraph
- Well-organized body sections with appropriate headings
- A brief conclusion when appropriate";

/// Build the single instructional prompt sent to the generator.
pub fn build_prompt(context: &str, history: &str, question: &str, level: DetailLevel) -> String {
    format!(
        "You are a knowledgeable and thorough assistant providing comprehensive information.\n\
         Your goal is to give detailed, well-structured answers that fully address the user's question.\n\
         \n\
         Conversation so far:\n\
         {history}\n\
         \n\
         Relevant context from the knowledge base:\n\
         {context}\n\
         \n\
         User's latest question:\n\
         {question}\n\
         \n\
         Detail instruction: {detail}\n\
         \n\
         {instructions}\n",
        history = history,
        context = context,
        question = question,
        detail = detail_instruction(level),
        instructions = RESPONSE_INSTRUCTIONS,
    )
}
