//! Display of a digestion tree as a position-aligned text diagram and
//! flattening of the tree into its unique peptide set.

use std::collections::HashSet;

use crate::sequence::Peptide;
use crate::tree::{DigestionTree, PeptideNode};

/// Wraps a rendered line in the terminal escape for red text.
const EMPHASIS_START: &str = "\u{1b}[31m";
const EMPHASIS_END: &str = "\u{1b}[0m";

impl DigestionTree {
    /// Lay the tree out under `reference` as a text diagram: the first line
    /// is the reference itself, every further line is one fragment indented
    /// to the position where it occurs in the reference. Occurrences are
    /// found by exact, possibly overlapping, substring search starting at
    /// the position where the fragment's parent was last anchored. A
    /// fragment is drawn at most once per distinct parent peptide, even when
    /// it recurs at several positions under different ancestors. Fragments
    /// shorter than `highlight_below_length` are wrapped in a terminal
    /// colour escape to stand out.
    ///
    /// The output is display-only text, nothing in this crate parses it
    /// back.
    pub fn draw(&self, reference: &Peptide, highlight_below_length: usize) -> String {
        let mut output = reference.to_string();
        output.push('\n');
        let mut drawn = HashSet::new();
        draw_node(
            self.root(),
            reference,
            0,
            highlight_below_length,
            &mut drawn,
            &mut output,
        );
        output
    }

    /// Every distinct peptide in this tree, the root sequence excluded.
    /// Fragments reachable through several cleavage routes collapse to a
    /// single entry.
    pub fn unique_peptides(&self) -> HashSet<Peptide> {
        let mut peptides = HashSet::new();
        collect(self.root(), &mut peptides);
        peptides
    }

    /// The unique peptides sorted by ascending length, ties by content, the
    /// order the peptide list is usually displayed in
    pub fn unique_peptides_by_length(&self) -> Vec<Peptide> {
        let mut peptides: Vec<Peptide> = self.unique_peptides().into_iter().collect();
        peptides.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        peptides
    }
}

fn draw_node(
    node: &PeptideNode,
    reference: &Peptide,
    anchor: usize,
    highlight_below_length: usize,
    drawn: &mut HashSet<(Peptide, Peptide)>,
    output: &mut String,
) {
    for child in node.children() {
        let mut search_start = anchor;
        while let Some(position) = reference.find_from(child.peptide(), search_start) {
            let key = (child.peptide().clone(), node.peptide().clone());
            if !drawn.contains(&key) {
                drawn.insert(key);
                let emphasised = child.peptide().len() < highlight_below_length;
                if emphasised {
                    output.push_str(EMPHASIS_START);
                }
                for _ in 0..position {
                    output.push(' ');
                }
                output.push_str(&child.peptide().to_string());
                if emphasised {
                    output.push_str(EMPHASIS_END);
                }
                output.push('\n');
            }
            draw_node(
                child,
                reference,
                position + 1,
                highlight_below_length,
                drawn,
                output,
            );
            search_start = position + 1;
        }
    }
}

fn collect(node: &PeptideNode, peptides: &mut HashSet<Peptide>) {
    for child in node.children() {
        collect(child, peptides);
        peptides.insert(child.peptide().clone());
    }
}
