use crate::error::ContentError;
use crate::models::{Card, GlossaryTerm, Introduction, Poet, Question, Summary, Verse};
use serde::Deserialize;

const EMBEDDED_CONTENT: &str = include_str!("../assets/poem.json");

/// Everything the app shows: the poem, its commentary and the quiz bank.
#[derive(Debug, Clone, Deserialize)]
pub struct PoemContent {
    pub introduction: Introduction,
    pub poet: Poet,
    pub summary: Summary,
    pub poem: Vec<Verse>,
    pub glossary: Vec<GlossaryTerm>,
    pub questions: Vec<Question>,
}

impl PoemContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: PoemContent = serde_json::from_str(json)?;
        content.validate()?;
        tracing::info!(
            verses = content.poem.len(),
            glossary = content.glossary.len(),
            questions = content.questions.len(),
            "poem content loaded"
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::EmptyQuizBank);
        }
        for (index, question) in self.questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(())
    }

    pub fn introduction_card(&self) -> Card {
        Card {
            title: self.introduction.title.clone(),
            content: format!(
                "{}\n\n\"{}\"",
                self.introduction.content, self.introduction.quote
            ),
            source: Some(self.introduction.quote_source.clone()),
        }
    }

    pub fn poet_card(&self) -> Card {
        Card {
            title: self.poet.card_title.clone(),
            content: self.poet.bio.clone(),
            source: Some(self.poet.source.clone()),
        }
    }
}
