//! End-to-end evaluation of hand-built verbs

use dybo_core::{
    Accent, AllomorphyKind, CausativePrefix, EvaluationConfig, FormSlot, HypothesisSearch, Method, Preparation,
    SearchOutcome, StressRule, VerbEntry, VerbOutcome, FORM_COUNT,
};

fn verb(forms: [(&str, &str); FORM_COUNT], template: &str, causative: bool) -> VerbEntry {
    VerbEntry {
        forms: forms.map(|(phon, gloss)| FormSlot::new("", phon, gloss)),
        template: template.to_string(),
        causative,
        label: "test".to_string(),
    }
}

fn evaluated(outcome: VerbOutcome) -> SearchOutcome {
    match outcome {
        VerbOutcome::Evaluated(outcome) => outcome,
        other => panic!("expected evaluation, got {other:?}"),
    }
}

/// Single-element root, stressed on whatever precedes it
fn pre_stressed_verb() -> VerbEntry {
    verb(
        [
            ("A-Ca-Ca", "DEF-R-INF"),
            ("G-Ca-Ca-Cg", "C1-R-DYN-DYN.FIN"),
            ("G-Ca-Ca-C", "C1-R-DYN-NEG"),
            ("G-Ca", "C1-R"),
            ("g-CY-Ca-Cy", "C1-NEG-R-DYN.IMP"),
            ("G-Ca-Ca", "C1-R-ABS"),
            ("g-CY-Ca-Ca", "C1-NEG-R-NEG.ABS"),
        ],
        "C1-R",
        false,
    )
}

#[test]
fn test_pre_stress_accounts_for_unaccented_single_element_root() {
    let outcome = evaluated(HypothesisSearch::default().evaluate_entry(&pre_stressed_verb()).unwrap());

    assert!(outcome.evaluation.is_complete());
    assert_eq!(outcome.scored, 1);
    let hypothesis = outcome.hypothesis.unwrap();
    assert_eq!(hypothesis.root.to_vec(), vec![Accent::Unaccented]);
    assert_eq!(hypothesis.to_string(), "R(U)");
    assert!(outcome.evaluation.methods.iter().all(|m| *m == Method::Exception));
}

#[test]
fn test_word_initial_baseline_keeps_method_tags() {
    let config = EvaluationConfig::default().with_stress_rule(StressRule::WordInitial);
    let outcome = evaluated(HypothesisSearch::new(config).evaluate_entry(&pre_stressed_verb()).unwrap());

    // Negative imperative and negative absolutive put stress on the prefix
    assert_eq!(outcome.evaluation.score(), 5);
    assert!(!outcome.evaluation.correct[4]);
    assert!(!outcome.evaluation.correct[6]);
    assert_eq!(outcome.evaluation.methods[0], Method::Exception);
}

#[test]
fn test_root_allomorphy_excludes_verb() {
    let entry = verb(
        [
            ("a-CVCa-Ca", "DEF-R-INF"),
            ("C-CVCa-Ca-Cg", "C1-R-DYN-DYN.FIN"),
            ("C-CVCa-Ca-C", "C1-R-DYN-NEG"),
            ("C-CV", "C1-R"),
            ("C-Cy-CVCa-Cy", "C1-NEG-R-DYN.IMP"),
            ("C-CVCa-Ca", "C1-R-ABS"),
            ("C-Cy-CVCa-Ca", "C1-NEG-R-NEG.ABS"),
        ],
        "C1-R",
        false,
    );

    let outcome = HypothesisSearch::default().evaluate_entry(&entry).unwrap();
    assert_eq!(outcome, VerbOutcome::Excluded(AllomorphyKind::Root));
}

#[test]
fn test_causative_policy_changes_element_count() {
    let entry = verb(
        [
            ("a-CyCA-Ca", "DEF-R-INF"),
            ("C-CyCA-Ca-Cg", "C1-R-DYN-DYN.FIN"),
            ("C-CyCA-Ca-C", "C1-R-DYN-NEG"),
            ("C-CyCA", "C1-R"),
            ("C-Cy-CyCA-Cy", "C1-NEG-R-DYN.IMP"),
            ("C-CyCA-Ca", "C1-R-ABS"),
            ("C-Cy-CyCA-Ca", "C1-NEG-R-NEG.ABS"),
        ],
        "C1-R",
        true,
    );

    let root_elements = |policy| match entry.prepare(policy).unwrap() {
        Preparation::Ready(verb) => verb.root_elements,
        other => panic!("expected a prepared verb, got {other:?}"),
    };

    assert_eq!(root_elements(CausativePrefix::Unsegmented), 2);
    assert_eq!(root_elements(CausativePrefix::LeadingElement), 3);

    let carved = HypothesisSearch::new(EvaluationConfig::default().with_causative_prefix(CausativePrefix::LeadingElement));
    if let Some(hypothesis) = evaluated(carved.evaluate_entry(&entry).unwrap()).hypothesis {
        assert_eq!(hypothesis.root.len(), 3);
        assert!(hypothesis.is_causative_symmetric());
    }
}
