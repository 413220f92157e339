use alloc::string::String;

/// How far a clue has been revealed to the players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion(String),
    ShowAnswer(String),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion(_) => true,
            ShowAnswer(_) => true,
        }
    }

    pub fn text(&self) -> Option<&str> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            ShowQuestion(text) | ShowAnswer(text) => Some(text.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// Advances the clue one step and returns the text to display for the new state.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;

        match self.showing {
            Hidden => {
                self.showing = Question;
                RevealOutcome::ShowQuestion(self.question.clone())
            }
            Question => {
                self.showing = Answer;
                RevealOutcome::ShowAnswer(self.answer.clone())
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}
