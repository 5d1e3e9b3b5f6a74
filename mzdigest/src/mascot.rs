//! Mascot-flavoured CSV export of peptide lists.
//!
//! The layout is fixed by the consuming pipelines: 18 named columns, two
//! literal section headers and CRLF row endings. Only the hit number,
//! accession and peptide sequence carry real data, every other column is
//! filled with the sentinel values those pipelines expect.

use std::io::{self, Write};

use crate::sequence::Peptide;

/// The column names of the peptide hit table, in table order.
pub const COLUMNS: [&str; 18] = [
    "prot_hit_num",
    "prot_acc",
    "prot_mass",
    "pep_query",
    "pep_rank",
    "pep_isbold",
    "pep_isunique",
    "pep_exp_mz",
    "pep_exp_mr",
    "pep_exp_z",
    "pep_calc_mr",
    "pep_delta",
    "pep_miss",
    "pep_score",
    "pep_expect",
    "pep_res_before",
    "pep_seq",
    "pep_res_after",
];

const SECTION_RULE: &str = "--------------------------------------------------------";

/// Write the given peptides as a Mascot-style protein hit table, one row per
/// peptide in input order, numbered from 1, all under the single accession
/// `accession`.
///
/// # Errors
/// Any error of the underlying writer.
pub fn write_peptide_hits<W: Write>(
    writer: &mut W,
    peptides: &[Peptide],
    accession: &str,
) -> io::Result<()> {
    write!(writer, "\r\n")?;
    write!(writer, "Protein hits,{SECTION_RULE}\r\n")?;
    write!(writer, "\r\n")?;
    write!(writer, "{}\r\n", COLUMNS.join(","))?;
    for (index, peptide) in peptides.iter().enumerate() {
        write!(
            writer,
            "{},{accession},0,-1,-1,-1,0,-1,-1,-1,-1,-1,-1,-1,-1,B,{peptide},B\r\n",
            index + 1
        )?;
    }
    write!(writer, "\r\n")?;
    write!(
        writer,
        "Peptide matches not assigned to protein hits,{SECTION_RULE}\r\n"
    )?;
    write!(writer, "\r\n")?;
    Ok(())
}
