//! Sectioned Makefile document

use std::fmt;

use crate::banner;
use crate::diff::{self, RenderDiff};
use crate::edit::{Edit, EditKind, ParagraphLocation};
use crate::error::{Error, Result};
use crate::lines;
use crate::paragraph::{self, Paragraph};
use crate::section::Section;

/// A Makefile split into sections of paragraphs.
///
/// The document exclusively owns its sections and paragraphs. Callers read
/// them through the accessors and change them through the index-qualified
/// edit operations, each of which returns an [`Edit`] for rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source as provided to `parse`, kept for `is_modified` and diffs
    original: String,
    /// Never empty; the first section is always unnamed
    sections: Vec<Section>,
}

impl Document {
    /// Parse Makefile text.
    ///
    /// Never fails: text that is not a banner header is an ordinary
    /// paragraph. Empty input yields a single empty unnamed section.
    ///
    /// # Examples
    ///
    /// ```
    /// use mkfile_doc::Document;
    ///
    /// let doc = Document::parse("FOO = 1\n\nall: build\n");
    /// assert_eq!(doc.sections().len(), 1);
    /// assert_eq!(doc.sections()[0].len(), 2);
    /// ```
    pub fn parse(source: &str) -> Self {
        let paragraphs = split_paragraphs(source);
        let paragraph_count = paragraphs.len();

        let mut sections = Vec::new();
        let mut current = Section::unnamed();
        for paragraph in paragraphs {
            if let Some(name) = banner::parse_banner(paragraph.contents()) {
                sections.push(std::mem::replace(&mut current, Section::named(name)));
                continue;
            }
            if banner::resembles_banner(paragraph.contents()) {
                tracing::warn!(
                    section = sections.len(),
                    "Paragraph looks like a section banner but does not match exactly; keeping it as text"
                );
            }
            current.paragraphs_mut().push(paragraph);
        }
        sections.push(current);

        tracing::debug!(
            paragraphs = paragraph_count,
            sections = sections.len(),
            "Parsed makefile"
        );

        Self {
            original: source.to_string(),
            sections,
        }
    }

    /// Source text as originally parsed.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Index and section of the first section named `name`.
    pub fn section_by_name(&self, name: &str) -> Option<(usize, &Section)> {
        self.sections
            .iter()
            .enumerate()
            .find(|(_, section)| section.name() == Some(name))
    }

    /// Names of the named sections, in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().filter_map(Section::name).collect()
    }

    pub fn paragraph(&self, location: ParagraphLocation) -> Option<&Paragraph> {
        self.section(location.section)?.paragraph(location.paragraph)
    }

    /// Every paragraph with its location, in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = (ParagraphLocation, &Paragraph)> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(section_index, section)| {
                section
                    .paragraphs()
                    .iter()
                    .enumerate()
                    .map(move |(index, paragraph)| {
                        (ParagraphLocation::new(section_index, index), paragraph)
                    })
            })
    }

    /// Locations of paragraphs assigning `name`, in document order.
    ///
    /// A paragraph may hold other statements as well; it matches if any of
    /// its logical lines assigns `name`.
    pub fn find_assigns(&self, name: &str) -> Vec<ParagraphLocation> {
        self.find_paragraphs(|paragraph| paragraph.assigns(name))
    }

    /// Locations of paragraphs defining target `name`, in document order.
    ///
    /// The target must be written `name:` with the colon fused to the name;
    /// `name : deps` is not found.
    pub fn find_targets(&self, name: &str) -> Vec<ParagraphLocation> {
        self.find_paragraphs(|paragraph| paragraph.defines_target(name))
    }

    fn find_paragraphs(&self, matches: impl Fn(&Paragraph) -> bool) -> Vec<ParagraphLocation> {
        self.paragraphs()
            .filter(|&(_, paragraph)| matches(paragraph))
            .map(|(location, _)| location)
            .collect()
    }

    /// Regenerate Makefile text from the current state.
    ///
    /// Named sections get a banner preceded by two newlines. Entries within
    /// a section (banner or paragraph) are separated by one blank line and
    /// every paragraph ends with a newline. The result is structurally
    /// equivalent to the parsed text, not necessarily byte-identical, and
    /// parsing it again renders the same text.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.original.len());
        for section in &self.sections {
            let mut wrote_entry = false;
            if let Some(name) = section.name() {
                output.push_str("\n\n");
                output.push_str(&banner::render_banner(name));
                wrote_entry = true;
            }
            for paragraph in section.paragraphs() {
                if wrote_entry {
                    output.push('\n');
                }
                output.push_str(paragraph.contents());
                output.push('\n');
                wrote_entry = true;
            }
        }
        output
    }

    /// Check if the rendered text differs from the original source.
    pub fn is_modified(&self) -> bool {
        self.render() != self.original
    }

    /// Line diff from the original source to the rendered text.
    pub fn diff_from_original(&self) -> RenderDiff {
        RenderDiff::compute(&self.original, &self.render())
    }

    /// Unified diff from the original source to the rendered text.
    pub fn unified_diff_from_original(&self) -> String {
        diff::unified_diff(&self.original, &self.render())
    }

    /// Replace the contents of the paragraph at `location`.
    ///
    /// # Errors
    ///
    /// Returns `SectionOutOfRange`/`ParagraphOutOfRange` for a bad location,
    /// or the `Paragraph::new` errors for invalid contents.
    pub fn replace_paragraph(
        &mut self,
        location: ParagraphLocation,
        contents: impl Into<String>,
    ) -> Result<Edit> {
        let paragraph = Paragraph::new(contents)?;
        let slot = self.paragraph_mut(location)?;
        let old = std::mem::replace(slot, paragraph);

        tracing::debug!(%location, "Replaced paragraph");
        Ok(Edit::replace(
            location,
            old.into_contents(),
            slot.contents().to_string(),
        ))
    }

    /// Insert a paragraph before the one at `location`.
    ///
    /// A paragraph index equal to the section length appends.
    pub fn insert_paragraph(
        &mut self,
        location: ParagraphLocation,
        contents: impl Into<String>,
    ) -> Result<Edit> {
        let paragraph = Paragraph::new(contents)?;
        let section = self.section_mut(location.section)?;
        if location.paragraph > section.len() {
            return Err(Error::ParagraphOutOfRange {
                section: location.section,
                paragraph: location.paragraph,
                len: section.len(),
            });
        }
        let edit = Edit::insert(location, paragraph.contents());
        section.paragraphs_mut().insert(location.paragraph, paragraph);

        tracing::debug!(%location, "Inserted paragraph");
        Ok(edit)
    }

    /// Append a paragraph to the end of section `section`.
    pub fn push_paragraph(&mut self, section: usize, contents: impl Into<String>) -> Result<Edit> {
        let len = self
            .section(section)
            .map(Section::len)
            .ok_or(Error::SectionOutOfRange {
                index: section,
                len: self.sections.len(),
            })?;
        self.insert_paragraph(ParagraphLocation::new(section, len), contents)
    }

    /// Remove the paragraph at `location`.
    pub fn remove_paragraph(&mut self, location: ParagraphLocation) -> Result<Edit> {
        // Validates the paragraph index before removing.
        self.paragraph_mut(location)?;
        let removed = self
            .section_mut(location.section)?
            .paragraphs_mut()
            .remove(location.paragraph);

        tracing::debug!(%location, "Removed paragraph");
        Ok(Edit::remove(location, removed.into_contents()))
    }

    /// Append a new, empty named section and return its index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSectionName` if `name` would not survive a banner
    /// round trip (too long, multi-line, or padded with whitespace).
    pub fn add_section(&mut self, name: &str) -> Result<usize> {
        banner::validate_section_name(name)?;
        self.sections.push(Section::named(name));
        let index = self.sections.len() - 1;

        tracing::debug!(section = index, name, "Added section");
        Ok(index)
    }

    /// Replay a recorded edit.
    ///
    /// Replace and remove edits check that the paragraph still holds
    /// `old_content`, so an inverse edit only rolls back the change it
    /// was derived from.
    ///
    /// # Errors
    ///
    /// Returns `EditMismatch` if the paragraph at the edit location no
    /// longer holds `old_content`, plus the errors of the underlying
    /// operation.
    pub fn apply(&mut self, edit: &Edit) -> Result<()> {
        match edit.kind {
            EditKind::Insert => {
                self.insert_paragraph(edit.location, edit.new_content.as_str())?;
            }
            EditKind::Replace => {
                self.expect_contents(edit.location, &edit.old_content)?;
                self.replace_paragraph(edit.location, edit.new_content.as_str())?;
            }
            EditKind::Remove => {
                self.expect_contents(edit.location, &edit.old_content)?;
                self.remove_paragraph(edit.location)?;
            }
        }
        Ok(())
    }

    /// Rewrite the first assignment to `name` as `name = value`.
    ///
    /// Only the assignment's own physical lines (including its continuation
    /// lines) change; the rest of the paragraph is kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use mkfile_doc::Document;
    ///
    /// let mut doc = Document::parse("# versions\nVERSION = 1.0\nNAME = app\n");
    /// doc.set_assign("VERSION", "1.1").unwrap();
    /// assert_eq!(doc.render(), "# versions\nVERSION = 1.1\nNAME = app\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AssignNotFound` if no paragraph assigns `name`.
    pub fn set_assign(&mut self, name: &str, value: &str) -> Result<Edit> {
        let not_found = || Error::AssignNotFound {
            name: name.to_string(),
        };
        let location = self.find_assigns(name).into_iter().next().ok_or_else(not_found)?;
        let current = self.paragraph(location).ok_or_else(not_found)?;
        let rewritten =
            paragraph::rewrite_assign(current.contents(), name, &format!("{name} = {value}"))
                .ok_or_else(not_found)?;
        self.replace_paragraph(location, rewritten)
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section> {
        let len = self.sections.len();
        self.sections
            .get_mut(index)
            .ok_or(Error::SectionOutOfRange { index, len })
    }

    fn paragraph_mut(&mut self, location: ParagraphLocation) -> Result<&mut Paragraph> {
        let section = self.section_mut(location.section)?;
        let len = section.len();
        section
            .paragraphs_mut()
            .get_mut(location.paragraph)
            .ok_or(Error::ParagraphOutOfRange {
                section: location.section,
                paragraph: location.paragraph,
                len,
            })
    }

    /// Range errors are left to the operation that follows the check.
    fn expect_contents(&self, location: ParagraphLocation, expected: &str) -> Result<()> {
        match self.paragraph(location) {
            Some(paragraph) if paragraph.contents() != expected => Err(Error::EditMismatch {
                location,
                expected: expected.to_string(),
                actual: paragraph.contents().to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Split text into maximal runs of non-blank lines.
fn split_paragraphs(source: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in lines::split_lines(source) {
        if line.trim().is_empty() {
            if !pending.is_empty() {
                paragraphs.push(Paragraph::from_parsed(pending.join("\n")));
                pending.clear();
            }
            continue;
        }
        pending.push(line);
    }
    if !pending.is_empty() {
        paragraphs.push(Paragraph::from_parsed(pending.join("\n")));
    }

    paragraphs
}
