//! CSV export of ranked matches.

use std::io::Write;

use serde::Serialize;

use super::ranking::ScoredPosting;

#[derive(Debug, Serialize)]
struct MatchRow<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    salary: &'a str,
    source: &'a str,
    match_score: f64,
    strength: &'a str,
    priority: &'a str,
}

/// Write ranked matches as CSV, one row per posting, highest score first.
pub fn write_matches<W: Write>(writer: W, ranked: &[ScoredPosting]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in ranked {
        csv_writer.serialize(MatchRow {
            title: entry.posting.display_title(),
            company: entry.posting.display_company(),
            location: entry.posting.display_location(),
            salary: entry.posting.display_salary(),
            source: entry.posting.display_source(),
            match_score: entry.result.overall_score,
            strength: entry.result.strength.label(),
            priority: entry.result.priority.label(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::posting::JobPosting;
    use crate::matching::scoring::{ApplicationPriority, MatchResult, MatchStrength};
    use std::collections::BTreeMap;

    fn entry(title: &str, score: f64) -> ScoredPosting {
        ScoredPosting {
            posting: JobPosting {
                title: Some(title.to_string()),
                company: Some("Acme".to_string()),
                ..JobPosting::default()
            },
            result: MatchResult {
                overall_score: score,
                breakdown: BTreeMap::new(),
                strength: MatchStrength::from_score(score),
                priority: ApplicationPriority::Medium,
                matching_keywords: Vec::new(),
                missing_keywords: Vec::new(),
                recommendations: Vec::new(),
            },
        }
    }

    #[test]
    fn writes_header_and_one_row_per_match() {
        let ranked = vec![entry("Platform Engineer", 0.62), entry("Analyst", 0.31)];
        let mut buffer = Vec::new();
        write_matches(&mut buffer, &ranked).expect("csv writes");

        let text = String::from_utf8(buffer).expect("utf8 csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("title,company,location"));
        assert!(lines[1].contains("Platform Engineer"));
        assert!(lines[1].contains("Strong"));
    }
}
