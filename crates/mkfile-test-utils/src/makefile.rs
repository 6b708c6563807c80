//! Makefile source fixtures.

/// A banner header for `name`, five lines without a trailing newline.
///
/// Odd padding goes on the right.
pub fn banner(name: &str) -> String {
    let rule = "#".repeat(80);
    let empty = format!("#{}#", " ".repeat(78));
    let padding = 78 - name.chars().count();
    let left = " ".repeat(padding / 2);
    let right = " ".repeat(padding - padding / 2);
    format!("{rule}\n{empty}\n#{left}{name}{right}#\n{empty}\n{rule}")
}

/// A small Makefile in canonical form: rendering its parsed document gives
/// back exactly this text.
pub const SAMPLE_MAKEFILE: &str = r#"# Copyright (c) Example Authors
# Build entry points.

PREFAB_TARGETS = prefab-debug \
  prefab-release
SOURCES = main.c util.c


################################################################################
#                                                                              #
#                                    Prefab                                    #
#                                                                              #
################################################################################

prefab-debug: env
	tools/pcommand build debug

prefab-release: env
	tools/pcommand build release


################################################################################
#                                                                              #
#                                  Formatting                                  #
#                                                                              #
################################################################################

format:
	tools/pcommand formatcode

check : format
	tools/pcommand check
"#;

/// Builder for Makefile sources with paragraphs and banner sections.
///
/// # Example
///
/// ```rust
/// use mkfile_test_utils::MakefileBuilder;
///
/// let text = MakefileBuilder::new()
///     .paragraph("FOO = 1")
///     .section("Targets")
///     .paragraph("all: build")
///     .build();
/// assert!(text.starts_with("FOO = 1\n\n#"));
/// ```
#[derive(Debug, Clone)]
pub struct MakefileBuilder {
    entries: Vec<String>,
    separator: String,
}

impl Default for MakefileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MakefileBuilder {
    /// Entries separated by a single blank line.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            separator: "\n\n".to_string(),
        }
    }

    /// Separate entries with `count` blank lines instead of one.
    pub fn blank_lines(mut self, count: usize) -> Self {
        self.separator = "\n".repeat(count + 1);
        self
    }

    pub fn paragraph(mut self, contents: &str) -> Self {
        self.entries.push(contents.to_string());
        self
    }

    pub fn section(mut self, name: &str) -> Self {
        self.entries.push(banner(name));
        self
    }

    /// Join the entries, ending with a newline when there are any.
    pub fn build(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let mut text = self.entries.join(&self.separator);
        text.push('\n');
        text
    }
}
