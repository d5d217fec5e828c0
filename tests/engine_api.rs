//! The evaluation pipeline driven through the library's public surface.

use regex_trainer::content::Catalog;
use regex_trainer::engine::{
    compile, enumerate, evaluate, render, Controller, EvalState, FlagSet, PatternSpec,
};
use rstest::rstest;

fn spec(source: &str, flags: &str) -> PatternSpec {
    PatternSpec::new(source, FlagSet::parse(flags).expect("valid flags"))
}

#[test]
fn pipeline_stages_compose() {
    let subject = r#"She said "hello" and he replied "goodbye"."#;
    let pattern = spec(r#""([^"]*)""#, "g");
    let matcher = compile(&pattern).expect("pattern compiles");

    let records = enumerate(&matcher, subject, pattern.flags.is_global());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].byte_range(), 9..16);
    assert_eq!(records[1].utf16_len(), 9);
    assert!(records.iter().all(|r| !r.is_empty()));

    let segments = render(subject, &records);
    let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, subject);
    assert_eq!(segments.iter().filter(|s| s.is_match).count(), 2);

    assert_eq!(evaluate(&pattern, subject).expect("evaluates").matches, records);
}

#[test]
fn flag_set_edits() {
    let mut flags = FlagSet::default();
    assert!(flags.is_empty());
    flags.insert(regex_trainer::engine::Flag::IgnoreCase);
    flags.insert(regex_trainer::engine::Flag::Global);
    let codes: String = flags.iter().map(|f| f.code()).collect();
    assert_eq!(codes, "ig");
}

#[rstest]
#[case("", "abc")]
#[case("   ", "abc")]
#[case("\t", "")]
fn blank_pattern_leaves_controller_idle(#[case] pattern: &str, #[case] subject: &str) {
    let mut controller = Controller::new(FlagSet::parse("g").expect("valid flags"));
    controller.set_pattern("(");
    assert!(controller.error().is_some());

    controller.load_example(pattern, subject);
    assert!(controller.state().is_idle());
    assert_eq!(controller.pattern(), pattern);
    assert_eq!(controller.subject(), subject);
}

#[test]
fn controller_setters_recompute() {
    let mut controller = Controller::new(FlagSet::default());
    controller.set_subject("b B b");
    controller.set_pattern("b");
    assert_eq!(controller.result().map(|r| r.matches.len()), Some(1));

    controller.set_flags(FlagSet::parse("gi").expect("valid flags"));
    assert_eq!(controller.result().map(|r| r.matches.len()), Some(3));

    controller.set_pattern("(");
    assert!(matches!(controller.state(), EvalState::Failed(_)));
}

#[test]
fn builtin_catalog_is_default() {
    let catalog = Catalog::default();
    assert_eq!(catalog.lessons().len(), Catalog::builtin().lessons().len());
    assert!(!catalog.challenges().is_empty());
}
