/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::eml::Eml;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One finding inside a verdict
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDetail {
    /// What the finding is about (rule name, URL, hash)
    pub key: String,
    /// Score assigned by the analyzer
    #[serde(default)]
    pub score: Option<f64>,
    /// Human-readable explanation
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the analyzer's report
    #[serde(default)]
    pub reference_link: Option<String>,
}

/// Judgement of one analyzer (SpamAssassin, VirusTotal, urlscan.io, ...)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Verdict {
    /// Analyzer name
    pub name: String,
    /// Whether the analyzer flagged the email
    pub malicious: bool,
    /// Overall score, when the analyzer produces one
    #[serde(default)]
    pub score: Option<f64>,
    /// Individual findings
    pub details: Vec<VerdictDetail>,
}

/// Analysis result returned by the analyze and lookup endpoints
#[derive(DebugPretty, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Response {
    /// SHA-256 of the analyzed file, the key for later lookups
    pub id: String,
    /// Parsed email
    pub eml: Eml,
    /// Verdicts of every analyzer that ran
    pub verdicts: Vec<Verdict>,
}

impl Response {
    /// True when at least one analyzer flagged the email
    #[must_use]
    pub fn is_malicious(&self) -> bool {
        self.verdicts.iter().any(|v| v.malicious)
    }

    /// Verdicts that flagged the email
    pub fn malicious_verdicts(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.malicious)
    }

    /// Verdict of the analyzer named `name`
    #[must_use]
    pub fn verdict(&self, name: &str) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.name == name)
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("ANALYZER"),
            Cell::new("MALICIOUS"),
            Cell::new("SCORE"),
            Cell::new("DETAILS"),
        ]));

        for verdict in &self.verdicts {
            let score = verdict
                .score
                .map(|s| format!("{s:.2}"))
                .unwrap_or_else(|| "-".to_string());

            table.add_row(Row::new(vec![
                Cell::new(&verdict.name),
                Cell::new(if verdict.malicious { "yes" } else { "no" }),
                Cell::new(&score),
                Cell::new(&verdict.details.len().to_string()),
            ]));
        }

        let subject = self.eml.header.subject.as_deref().unwrap_or("-");
        writeln!(f, "{} ({})", subject, self.id)?;
        write!(f, "{}", table)
    }
}
