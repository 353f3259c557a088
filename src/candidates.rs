//! # Candidate Parsing
//!
//! Row parsing for the bundled candidate data file.
//!
//! The file is a comma-delimited dump with a header line. Two column orders
//! exist in the wild: the district may come before or after the composite
//! constituency field (`"29-Runnisaidpur"`). Each row is sniffed for which of
//! its first two fields carries the leading `<number>-` prefix and the rest of
//! the columns are read positionally from the matching layout.
//!
//! The data is uncurated, so malformed rows (too few fields, no parseable
//! constituency number, duplicate constituency number) are dropped without
//! failing the parse. A file where every row is dropped parses to an empty set.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

pub const FIELD_DELIMITER: char = ',';

/// One entry on the simulated ballot.
///
/// Wire names follow the frontend contract, hence the renames. Localized
/// fields hold the Hindi duplicates of their primary-language counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(rename = "sNo")]
    pub serial: u32,
    pub district: String,
    #[serde(rename = "acNumber")]
    pub constituency_number: u32,
    #[serde(rename = "acName")]
    pub constituency_name: String,
    pub candidate_name: String,
    pub election_phase: String,
    #[serde(rename = "ballotNumber")]
    pub ballot_position: u32,
    #[serde(rename = "districtHindi")]
    pub district_localized: String,
    #[serde(rename = "acNameHindi")]
    pub constituency_name_localized: String,
    #[serde(rename = "candidateNameHindi")]
    pub candidate_name_localized: String,
}

/// Column indices for one source-file variant.
struct ColumnLayout {
    constituency: usize,
    district: usize,
    candidate: usize,
    phase: usize,
    ballot: usize,
    district_localized: usize,
    constituency_localized: usize,
    candidate_localized: usize,
}

/// The original export: district first, column 5 unused (party symbol).
const DISTRICT_FIRST: ColumnLayout = ColumnLayout {
    constituency: 1,
    district: 0,
    candidate: 2,
    phase: 3,
    ballot: 4,
    district_localized: 6,
    constituency_localized: 7,
    candidate_localized: 8,
};

/// Later exports lead with the composite constituency field.
const CONSTITUENCY_FIRST: ColumnLayout = ColumnLayout {
    constituency: 0,
    district: 1,
    candidate: 2,
    phase: 3,
    ballot: 4,
    district_localized: 7,
    constituency_localized: 6,
    candidate_localized: 8,
};

/// Parses the full file text into the ordered candidate set.
///
/// The first line is always treated as the header. Blank lines and repeated
/// header lines embedded mid-file are skipped. The result is deduplicated by
/// constituency number (first occurrence wins) and sorted ascending by it.
pub fn parse_records(content: &str) -> Vec<CandidateRecord> {
    let mut records: Vec<CandidateRecord> = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();
    let mut skipped: usize = 0;

    for line in content.trim().lines().skip(1) {
        let line = line.trim();
        if line.is_empty() || is_header_marker(line) {
            continue;
        }

        let columns: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let Some((layout, number)) = detect_layout(&columns) else {
            skipped += 1;
            continue;
        };

        if !seen.insert(number) {
            skipped += 1;
            continue;
        }

        let serial = records.len() as u32 + 1;
        records.push(build_record(serial, number, layout, &columns));
    }

    if skipped > 0 {
        debug!("Skipped {skipped} malformed or duplicate rows");
    }

    records.sort_by_key(|record| record.constituency_number);
    records
}

/// Picks the layout whose constituency column bears a `<number>-` prefix.
/// Rows with fewer than two fields or no such prefix are unusable.
fn detect_layout(columns: &[&str]) -> Option<(&'static ColumnLayout, u32)> {
    if columns.len() < 2 {
        return None;
    }

    if let Some(number) = leading_constituency_number(columns[0]) {
        return Some((&CONSTITUENCY_FIRST, number));
    }

    leading_constituency_number(columns[1]).map(|number| (&DISTRICT_FIRST, number))
}

/// Extracts the positive integer from a `"<digits>-<name>"` composite field.
fn leading_constituency_number(field: &str) -> Option<u32> {
    let end = field.find(|c: char| !c.is_ascii_digit())?;
    if end == 0 || field.as_bytes()[end] != b'-' {
        return None;
    }

    field[..end].parse().ok().filter(|&number| number > 0)
}

fn is_header_marker(line: &str) -> bool {
    let mut fields = line.split(FIELD_DELIMITER);

    fields
        .next()
        .into_iter()
        .chain(fields.next())
        .any(|field| {
            let field = field.trim();
            field.eq_ignore_ascii_case("district")
                || field.eq_ignore_ascii_case("assembly")
                || field.eq_ignore_ascii_case("s.no")
        })
}

fn build_record(
    serial: u32,
    constituency_number: u32,
    layout: &ColumnLayout,
    columns: &[&str],
) -> CandidateRecord {
    // Columns past the end of a short row default to empty / zero.
    let text = |index: usize| columns.get(index).copied().unwrap_or_default().to_string();
    let number = |index: usize| {
        columns
            .get(index)
            .and_then(|field| field.trim().parse().ok())
            .unwrap_or(0)
    };

    CandidateRecord {
        serial,
        district: text(layout.district),
        constituency_number,
        constituency_name: text(layout.constituency),
        candidate_name: text(layout.candidate),
        election_phase: text(layout.phase),
        ballot_position: number(layout.ballot),
        district_localized: text(layout.district_localized),
        constituency_name_localized: text(layout.constituency_localized),
        candidate_name_localized: text(layout.candidate_localized),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{leading_constituency_number, parse_records};

    const HEADER: &str = "District,Assembly,Candidate Name,Election Phase,Ballot Number,Party Symbol,District (Hindi),Assembly (Hindi),Candidate Name (Hindi)";

    fn file(rows: &[&str]) -> String {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content
    }

    #[test]
    fn parses_district_first_rows() {
        let content = file(&[
            "Sitamarhi,29-Runnisaidpur,Amar Kumar Singh,Phase 1,1,Bag,सीतामढ़ी,२९-रुन्नीसैदपुर,अमर कुमार सिंह",
        ]);

        let records = parse_records(&content);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.serial, 1);
        assert_eq!(record.district, "Sitamarhi");
        assert_eq!(record.constituency_number, 29);
        assert_eq!(record.constituency_name, "29-Runnisaidpur");
        assert_eq!(record.candidate_name, "Amar Kumar Singh");
        assert_eq!(record.election_phase, "Phase 1");
        assert_eq!(record.ballot_position, 1);
        assert_eq!(record.district_localized, "सीतामढ़ी");
        assert_eq!(record.constituency_name_localized, "२९-रुन्नीसैदपुर");
        assert_eq!(record.candidate_name_localized, "अमर कुमार सिंह");
    }

    #[test]
    fn parses_constituency_first_rows() {
        let content = file(&[
            "29-Runnisaidpur,Sitamarhi,Amar Kumar Singh,Phase 1,1,Bag,२९-रुन्नीसैदपुर,सीतामढ़ी,अमर कुमार सिंह",
        ]);

        let records = parse_records(&content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].district, "Sitamarhi");
        assert_eq!(records[0].constituency_name, "29-Runnisaidpur");
        assert_eq!(records[0].constituency_name_localized, "२९-रुन्नीसैदपुर");
        assert_eq!(records[0].district_localized, "सीतामढ़ी");
    }

    #[test]
    fn short_rows_default_trailing_fields() {
        let content = file(&["Patna,5-Laurea,Ravi Prakash"]);

        let records = parse_records(&content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].constituency_number, 5);
        assert_eq!(records[0].election_phase, "");
        assert_eq!(records[0].ballot_position, 0);
        assert_eq!(records[0].candidate_name_localized, "");
    }

    #[test]
    fn parse_is_idempotent() {
        let content = file(&[
            "Sitamarhi,29-Runnisaidpur,A,Phase 1,1",
            "Patna,5-Laurea,B,Phase 2,1",
        ]);

        assert_eq!(parse_records(&content), parse_records(&content));
    }

    #[test]
    fn records_are_sorted_and_unique_by_constituency_number() {
        let content = file(&[
            "Patna,182-Bankipur,A,Phase 3,1",
            "Sitamarhi,29-Runnisaidpur,B,Phase 1,1",
            "Patna,5-Laurea,C,Phase 2,1",
        ]);

        let records = parse_records(&content);

        let numbers: Vec<u32> = records
            .iter()
            .map(|record| record.constituency_number)
            .collect();
        assert_eq!(numbers, vec![5, 29, 182]);
    }

    #[test]
    fn duplicate_constituency_number_keeps_first_row() {
        let content = file(&["7-A,D,C,P,1", "7-A,D2,C2,P2,2"]);

        let records = parse_records(&content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].candidate_name, "C");
        assert_eq!(records[0].ballot_position, 1);
    }

    #[test]
    fn rows_without_constituency_number_are_skipped() {
        let content = file(&[
            "NoNumber,D,C,P,1",
            "Patna,AlsoNoNumber,C,P,1",
            "Patna,5-Laurea,C,P,1",
        ]);

        let records = parse_records(&content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].constituency_number, 5);
    }

    #[test]
    fn blank_and_repeated_header_lines_are_skipped() {
        let content = format!(
            "{HEADER}\nSitamarhi,29-Runnisaidpur,A,Phase 1,1\n\n{HEADER}\nPatna,5-Laurea,B,Phase 2,1\n"
        );

        let records = parse_records(&content);

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn empty_and_header_only_files_parse_to_empty() {
        assert_eq!(parse_records(""), vec![]);
        assert_eq!(parse_records(HEADER), vec![]);
    }

    #[test]
    fn leading_number_requires_digits_then_dash() {
        assert_eq!(leading_constituency_number("29-Runnisaidpur"), Some(29));
        assert_eq!(leading_constituency_number("29"), None);
        assert_eq!(leading_constituency_number("-Runnisaidpur"), None);
        assert_eq!(leading_constituency_number("Runnisaidpur"), None);
        assert_eq!(leading_constituency_number("0-Nowhere"), None);
        assert_eq!(leading_constituency_number(""), None);
    }
}
