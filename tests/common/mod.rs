use std::collections::VecDeque;

use tline_zin::views::Prompt;

/// Answers confirmations from a script and records everything shown.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<bool>,
    pub questions: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
