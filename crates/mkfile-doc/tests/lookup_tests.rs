//! Tests for assignment and target lookup

use mkfile_doc::{Document, ParagraphLocation};
use mkfile_test_utils::{MakefileBuilder, SAMPLE_MAKEFILE};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn at(section: usize, paragraph: usize) -> ParagraphLocation {
    ParagraphLocation::new(section, paragraph)
}

#[test]
fn test_find_assigns_single_hit() {
    let doc = Document::parse("FOO = 1\nBAR = 2");
    assert_eq!(doc.find_assigns("FOO"), vec![at(0, 0)]);
    assert_eq!(doc.find_assigns("BAR"), vec![at(0, 0)]);
    assert!(doc.find_assigns("BAZ").is_empty());
}

#[test]
fn test_find_targets_requires_exact_name() {
    let doc = Document::parse("build: dep1 dep2");
    assert_eq!(doc.find_targets("build"), vec![at(0, 0)]);
    assert!(doc.find_targets("buil").is_empty());
    assert!(doc.find_targets("dep1").is_empty());
}

#[test]
fn test_find_targets_space_before_colon_is_not_a_target() {
    // `build : dep1` is valid make syntax, but lookup only recognises the
    // colon fused to the name. Pinned so a change here is deliberate.
    let doc = Document::parse("build : dep1");
    assert!(doc.find_targets("build").is_empty());
    assert!(doc.find_targets("build :").is_empty());
}

#[rstest]
#[case::continued_assign("PREFAB_TARGETS", vec![(0, 1)])]
#[case::second_statement("SOURCES", vec![(0, 1)])]
#[case::missing("CFLAGS", vec![])]
fn test_find_assigns_in_sample(#[case] name: &str, #[case] expected: Vec<(usize, usize)>) {
    let doc = Document::parse(SAMPLE_MAKEFILE);
    let expected: Vec<ParagraphLocation> = expected.into_iter().map(|(s, p)| at(s, p)).collect();
    assert_eq!(doc.find_assigns(name), expected);
}

#[rstest]
#[case::first_section("prefab-debug", vec![(1, 0)])]
#[case::second_paragraph("prefab-release", vec![(1, 1)])]
#[case::later_section("format", vec![(2, 0)])]
#[case::spaced_colon("check", vec![])]
#[case::prerequisite_only("env", vec![])]
fn test_find_targets_in_sample(#[case] name: &str, #[case] expected: Vec<(usize, usize)>) {
    let doc = Document::parse(SAMPLE_MAKEFILE);
    let expected: Vec<ParagraphLocation> = expected.into_iter().map(|(s, p)| at(s, p)).collect();
    assert_eq!(doc.find_targets(name), expected);
}

#[test]
fn test_hits_are_in_document_order() {
    let source = MakefileBuilder::new()
        .paragraph("VERSION = 1")
        .section("Release")
        .paragraph("notes: VERSION")
        .paragraph("VERSION = 2\nrelease: notes")
        .section("Debug")
        .paragraph("VERSION ?= 3")
        .paragraph("VERSION= 4")
        .build();
    let doc = Document::parse(&source);

    // `VERSION ?= 3` leaves `VERSION ?` before the `=`
    assert_eq!(doc.find_assigns("VERSION"), vec![at(0, 0), at(1, 1), at(2, 1)]);
    assert_eq!(doc.find_targets("release"), vec![at(1, 1)]);
}

#[test]
fn test_continuation_joins_assignment_name() {
    // The name is split across a continuation; the logical line rejoins it.
    let doc = Document::parse("LONG_\\\nNAME = value");
    assert_eq!(doc.find_assigns("LONG_NAME"), vec![at(0, 0)]);
}

#[test]
fn test_target_on_continued_line_is_part_of_previous_line() {
    let doc = Document::parse("X = a \\\nall: b");
    assert!(doc.find_targets("all").is_empty());
    assert_eq!(doc.find_assigns("X"), vec![at(0, 0)]);
}

#[test]
fn test_recipe_lines_are_tokenised_like_any_line() {
    let doc = Document::parse("all:\n\tinstall: stuff");
    assert_eq!(doc.find_targets("all"), vec![at(0, 0)]);
    // Leading whitespace is skipped when tokenising, so this matches too.
    assert_eq!(doc.find_targets("install"), vec![at(0, 0)]);
}

#[test]
fn test_empty_document_has_no_hits() {
    let doc = Document::parse("");
    assert!(doc.find_assigns("A").is_empty());
    assert!(doc.find_targets("a").is_empty());
}
