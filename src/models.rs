use crate::error::ContentError;
use serde::Deserialize;
use std::collections::HashSet;

/// One multiple-choice question. `correct_option` must be one of `options`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_option: String,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], correct_option: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct_option.to_string(),
        }
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }

    pub fn validate(&self, index: usize) -> Result<(), ContentError> {
        let invalid = |reason: &str| ContentError::InvalidQuestion {
            index,
            reason: reason.to_string(),
        };

        if self.options.len() < 2 {
            return Err(invalid("needs at least two options"));
        }
        let unique: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        if unique.len() != self.options.len() {
            return Err(invalid("options contain duplicates"));
        }
        if !self.options.iter().any(|o| o == &self.correct_option) {
            return Err(invalid("answer is not among the options"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerseExplanation {
    pub meaning: String,
    pub imagery: Option<String>,
    pub rhetoric: Option<String>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

/// A verse is two hemistichs plus its commentary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Verse {
    pub part1: String,
    pub part2: String,
    pub explanation: VerseExplanation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Introduction {
    pub title: String,
    pub content: String,
    pub quote: String,
    pub quote_source: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poet {
    pub name: String,
    pub bio: String,
    pub source: String,
    pub card_title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Idea {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtisticFeature {
    pub feature: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub title: String,
    pub poet_summary: String,
    pub general_idea: String,
    pub detailed_ideas: Vec<Idea>,
    pub artistic_features: Vec<ArtisticFeature>,
    pub vocabulary: Vec<VocabularyEntry>,
}

/// Title/body/source triple shown in the card popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub content: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Introduction,
    Poem,
    Poet,
    Glossary,
    Summary,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Introduction,
        Tab::Poem,
        Tab::Poet,
        Tab::Glossary,
        Tab::Summary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Introduction => "Introduction",
            Tab::Poem => "Poem",
            Tab::Poet => "Poet",
            Tab::Glossary => "Glossary",
            Tab::Summary => "Summary",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Introduction,
    Poet,
}

/// Which popup, if any, sits on top of the tab view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Card(CardKind),
    VerseViewer,
    Quiz,
    Wheel,
}
