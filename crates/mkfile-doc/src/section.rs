//! Sections: banner-delimited groups of paragraphs.

use serde::Serialize;

use crate::paragraph::Paragraph;

/// An optionally named, ordered group of paragraphs.
///
/// Only a [`Document`](crate::Document) creates sections. The leading
/// section of every document is unnamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    name: Option<String>,
    paragraphs: Vec<Paragraph>,
}

impl Section {
    pub(crate) fn unnamed() -> Self {
        Self::default()
    }

    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            paragraphs: Vec::new(),
        }
    }

    /// Banner title, or `None` for the leading section.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub(crate) fn paragraphs_mut(&mut self) -> &mut Vec<Paragraph> {
        &mut self.paragraphs
    }
}
