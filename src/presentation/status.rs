use pretty_simple_display::DebugPretty;
use serde::{Deserialize, Serialize};

/// Integrations enabled on the backend
///
/// Every flag defaults to `false` when the backend omits it.
#[derive(DebugPretty, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Status {
    /// Redis cache
    pub cache: bool,
    /// VirusTotal
    pub vt: bool,
    /// InQuest
    pub inquest: bool,
    /// urlscan.io
    pub urlscan: bool,
    /// EmailRep
    pub email_rep: bool,
    /// OpenAI chat proxy
    pub openai: bool,
}

impl Status {
    fn flags(&self) -> [(&'static str, bool); 6] {
        [
            ("cache", self.cache),
            ("vt", self.vt),
            ("inquest", self.inquest),
            ("urlscan", self.urlscan),
            ("emailRep", self.email_rep),
            ("openai", self.openai),
        ]
    }

    /// Names of the enabled integrations, in wire-key form
    #[must_use]
    pub fn enabled_integrations(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![Cell::new("INTEGRATION"), Cell::new("ENABLED")]));
        for (name, on) in self.flags() {
            table.add_row(Row::new(vec![
                Cell::new(name),
                Cell::new(if on { "yes" } else { "no" }),
            ]));
        }
        write!(f, "{}", table)
    }
}
