use crate::error::ContentError;
use crate::models::GlossaryTerm;
use regex::Regex;

/// A piece of a hemistich: either plain text or a glossary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    Plain(&'a str),
    Term { word: &'a str, definition: &'a str },
}

/// Marks glossary terms inside verse text by exact substring match.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
    glossary: Vec<GlossaryTerm>,
}

impl Highlighter {
    pub fn new(glossary: &[GlossaryTerm]) -> Result<Self, ContentError> {
        let alternatives: Vec<String> = glossary
            .iter()
            .filter(|g| !g.term.is_empty())
            .map(|g| regex::escape(&g.term))
            .collect();
        let pattern = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&alternatives.join("|"))?)
        };
        Ok(Self {
            pattern,
            glossary: glossary.to_vec(),
        })
    }

    pub fn split<'a>(&'a self, text: &'a str) -> Vec<Fragment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![Fragment::Plain(text)];
        };

        let mut fragments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                fragments.push(Fragment::Plain(&text[last..m.start()]));
            }
            match self.definition_of(m.as_str()) {
                Some(definition) => fragments.push(Fragment::Term {
                    word: m.as_str(),
                    definition,
                }),
                None => fragments.push(Fragment::Plain(m.as_str())),
            }
            last = m.end();
        }
        if last < text.len() {
            fragments.push(Fragment::Plain(&text[last..]));
        }
        fragments
    }

    /// Glossary entries that occur in `text`, in order of first appearance.
    pub fn terms_in<'a>(&'a self, text: &'a str) -> Vec<&'a GlossaryTerm> {
        let mut found: Vec<&GlossaryTerm> = Vec::new();
        for fragment in self.split(text) {
            if let Fragment::Term { word, .. } = fragment
                && let Some(term) = self.glossary.iter().find(|g| g.term == word)
                && !found.iter().any(|f| f.term == term.term)
            {
                found.push(term);
            }
        }
        found
    }

    fn definition_of(&self, word: &str) -> Option<&str> {
        self.glossary
            .iter()
            .find(|g| g.term == word)
            .map(|g| g.definition.as_str())
    }
}
