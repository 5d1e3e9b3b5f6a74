#![allow(clippy::missing_panics_doc, clippy::float_cmp)]
//! Integration tests for the full digestion and prediction flow
use std::collections::HashSet;

use mzdigest::prelude::*;
use mzdigest::protease::known_proteases;
use mzdigest::{mascot, predict};

const HEMOGLOBIN_BETA: &str = "MVHLTPEEKSAVTALWGKVNVDEVGGEALGRLLVVYPWTQRFFESFGDLSTPDAVMGNPKVKAHGKKVLGAFSDGLAHLDNLKGTFATLSELHCDKLHVDPENFRLLGNVLVCVLAHHFGKEFTPPVQAAYQKVVAGVANALAHKYH";

fn hemoglobin() -> Peptide {
    HEMOGLOBIN_BETA.parse().unwrap()
}

/// A single tryptic pass partitions the sequence and starts with the
/// well-known MVHLTPEEK peptide
#[test]
fn tryptic_digest_of_hemoglobin() {
    let fragments = known_proteases::TRYPSIN.cleave(&hemoglobin());

    assert_eq!(fragments[0].to_string(), "MVHLTPEEK");
    let total: usize = fragments.iter().map(Peptide::len).sum();
    assert_eq!(total, HEMOGLOBIN_BETA.len());
}

/// Simulated digestion respects the length floor, excludes the root and is
/// reproducible
#[test]
fn simulated_digestion_of_hemoglobin() {
    let rules = vec![known_proteases::TRYPSIN.clone()];
    let parameters = DigestionParameters::default();

    let tree = DigestionTree::build(hemoglobin(), &rules, &parameters);
    let unique = tree.unique_peptides();

    assert!(!unique.is_empty());
    assert!(!unique.contains(&hemoglobin()));
    assert!(
        unique
            .iter()
            .all(|peptide| peptide.len() > parameters.min_peptide_length)
    );

    let again = DigestionTree::build(hemoglobin(), &rules, &parameters);
    assert_eq!(unique, again.unique_peptides());
}

/// Every drawn fragment sits exactly under its occurrence in the reference
#[test]
fn drawing_aligns_fragments_with_the_reference() {
    let rules = vec![known_proteases::TRYPSIN.clone()];
    let reference = hemoglobin();
    let tree = DigestionTree::build(hemoglobin(), &rules, &DigestionParameters::default());

    let drawing = tree.draw(&reference, 5);
    let mut lines = drawing.lines();
    assert_eq!(lines.next(), Some(HEMOGLOBIN_BETA));

    for line in lines {
        let line = line
            .trim_start_matches("\u{1b}[31m")
            .trim_end_matches("\u{1b}[0m");
        let offset = line.len() - line.trim_start_matches(' ').len();
        let fragment = &line[offset..];
        assert_eq!(
            &HEMOGLOBIN_BETA[offset..offset + fragment.len()],
            fragment,
            "misaligned line: {line:?}"
        );
    }
}

/// The protease that actually produced the observations ranks first with a
/// perfect score, strictly above every combination carrying a bystander
#[test]
fn prediction_recovers_the_digesting_protease() {
    let trypsin_tree = DigestionTree::build(
        hemoglobin(),
        &[known_proteases::TRYPSIN.clone()],
        &DigestionParameters::default(),
    );
    let observed: Vec<Peptide> = trypsin_tree.unique_peptides().into_iter().collect();

    let candidates = [
        known_proteases::TRYPSIN.clone(),
        known_proteases::PEPSIN.clone(),
    ];
    let ranking = predict::predict(
        &hemoglobin(),
        &candidates,
        &observed,
        &PredictionParameters::default(),
    )
    .unwrap();

    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking[0].combined_name(), "Trypsin");
    assert_eq!(ranking[0].score, 1.0);
    assert!(ranking[1].score < 1.0);
    assert!(ranking[2].score < 1.0);
}

/// The quick screen agrees with the flat digest
#[test]
fn single_protease_screen_of_hemoglobin() {
    let observed = known_proteases::TRYPSIN.cleave(&hemoglobin());
    let rankings = screen_single_proteases(
        &hemoglobin(),
        &[
            known_proteases::TRYPSIN.clone(),
            known_proteases::CHYMOTRYPSIN.clone(),
        ],
        &observed,
    );

    assert_eq!(rankings[0].protease, "Trypsin");
    assert_eq!(rankings[0].matched, observed.len());
    assert!(rankings[0].site_fraction > 0.0);
    assert!(rankings[0].matched > rankings[1].matched);
}

/// Digested peptides survive the round through the export format
#[test]
fn exported_peptides_keep_their_sequences() {
    let tree = DigestionTree::build(
        hemoglobin(),
        &[known_proteases::TRYPSIN.clone()],
        &DigestionParameters::default(),
    );
    let peptides = tree.unique_peptides_by_length();

    let mut output = Vec::new();
    mascot::write_peptide_hits(&mut output, &peptides, "HBB_HUMAN").unwrap();
    let text = String::from_utf8(output).unwrap();

    let exported: HashSet<&str> = text
        .lines()
        .filter(|line| line.ends_with(",B"))
        .filter_map(|line| line.rsplit(',').nth(1))
        .collect();
    for peptide in &peptides {
        assert!(exported.contains(peptide.to_string().as_str()));
    }
}
