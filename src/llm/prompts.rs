//! System instruction for Hinglish translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Register of the translated text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationTone {
    #[default]
    Casual,
    Formal,
}

impl TranslationTone {
    pub fn directive(&self) -> &'static str {
        match self {
            TranslationTone::Casual => "Casual, friendly, and spoken",
            TranslationTone::Formal => "Formal, respectful, and professional",
        }
    }
}

impl fmt::Display for TranslationTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationTone::Casual => write!(f, "casual"),
            TranslationTone::Formal => write!(f, "formal"),
        }
    }
}

impl FromStr for TranslationTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(TranslationTone::Casual),
            "formal" => Ok(TranslationTone::Formal),
            _ => Err(format!("Invalid tone: {}. Supported: casual, formal", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system_instruction: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_system_instruction(&self, tone: TranslationTone) -> String {
        self.system_instruction.replace("{tone}", tone.directive())
    }
}

const SYSTEM_INSTRUCTION_TEMPLATE: &str = r#"You are an expert Hinglish translator. Hinglish is Hindi written using English (Latin) alphabets.
Your goal is to translate the input text (which could be English or Hindi Devanagari) into natural, conversational, and culturally relevant Hinglish.

RULES:
1. Tone: {tone}.
2. Maintain natural flow: Do not do word-for-word translation. Use phrases that a native speaker would use in a chat or conversation.
3. Retain technical terms: Keep English words like "AI", "Internet", "Software", "Startup", "Meeting", "Email", "Phone" as they are if they are commonly used in daily Hindi conversations.
4. Script: Use ONLY English alphabets (Latin script).
5. Formatting: Preserve paragraphs and line breaks.

EXAMPLES:
Input: "How are you doing today?"
Output (Casual): "Aap kaise ho aaj?"

Input: "This meeting is very important for our startup."
Output (Formal): "Yeh meeting hamare startup ke liye bahut important hai."

Input: "मुझे कल दिल्ली जाना है।"
Output: "Mujhe kal Delhi jaana hai.""#;
