//! Rendering of match results.

use std::io::{self, Write};

use capgroup::Groups;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for match results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Group N: [start-end]: text` lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// One reported group.
#[derive(Debug, Serialize)]
pub struct GroupReport<'h> {
    /// Group number.
    pub index: usize,
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
    /// Matched text.
    pub text: &'h str,
}

/// The whole outcome of one invocation.
#[derive(Debug, Serialize)]
pub struct MatchReport<'h> {
    /// Pattern as given.
    pub pattern: &'h str,
    /// Input as given.
    pub input: &'h str,
    /// Whether the pattern matched.
    pub matched: bool,
    /// Number of group slots.
    pub nmatch: usize,
    /// The groups that participated.
    pub groups: Vec<GroupReport<'h>>,
}

impl<'h> MatchReport<'h> {
    /// Report for a successful match.
    #[must_use]
    pub fn matched(pattern: &'h str, groups: &Groups<'_, 'h>) -> Self {
        let input = groups.input();
        Self {
            pattern,
            input,
            matched: true,
            nmatch: groups.len(),
            groups: groups
                .iter()
                .filter_map(|(index, span)| {
                    span.map(|span| GroupReport {
                        index,
                        start: span.start,
                        end: span.end,
                        text: span.as_str(input),
                    })
                })
                .collect(),
        }
    }

    /// Report for an input that did not match.
    #[must_use]
    pub const fn unmatched(pattern: &'h str, input: &'h str, nmatch: usize) -> Self {
        Self {
            pattern,
            input,
            matched: false,
            nmatch,
            groups: Vec::new(),
        }
    }

    /// Write the report in the requested format.
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.matched {
            return writeln!(out, "matching failed");
        }
        writeln!(out, "nmatch: {}", self.nmatch)?;
        for group in &self.groups {
            writeln!(
                out,
                "Group {}: [{:2}-{:2}]: {}",
                group.index, group.start, group.end, group.text
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use capgroup::CaptureMatcher;

    use super::*;

    fn render(report: &MatchReport<'_>, format: OutputFormat) -> String {
        let mut out = Vec::new();
        report.write(&mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_lists_set_groups() {
        let pattern = r"^(g\.)?([0-9]*)$";
        let mut matcher = CaptureMatcher::new(pattern).unwrap();
        let groups = matcher.matches("g.123456").unwrap();
        let report = MatchReport::matched(pattern, &groups);

        assert_eq!(
            render(&report, OutputFormat::Text),
            "nmatch: 3\n\
             Group 0: [ 0- 8]: g.123456\n\
             Group 1: [ 0- 2]: g.\n\
             Group 2: [ 2- 8]: 123456\n"
        );
    }

    #[test]
    fn text_output_keeps_empty_groups() {
        let pattern = r"^(g\.)?([0-9]+)(_([0-9]+))?(dup([acgt]*))?$";
        let mut matcher = CaptureMatcher::with_max_groups(pattern, 20).unwrap();
        let groups = matcher.matches("g.123456_3432dup").unwrap();
        let report = MatchReport::matched(pattern, &groups);
        let text = render(&report, OutputFormat::Text);

        assert!(text.starts_with("nmatch: 20\n"));
        assert!(text.contains("Group 5: [13-16]: dup\n"));
        assert!(text.ends_with("Group 6: [16-16]: \n"));
    }

    #[test]
    fn text_output_for_no_match() {
        let report = MatchReport::unmatched("^a$", "b", 1);
        assert_eq!(render(&report, OutputFormat::Text), "matching failed\n");
    }

    #[test]
    fn json_output() {
        let pattern = "^a(b)?c$";
        let mut matcher = CaptureMatcher::new(pattern).unwrap();
        let groups = matcher.matches("ac").unwrap();
        let report = MatchReport::matched(pattern, &groups);
        let json: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();

        assert_eq!(json["matched"], true);
        assert_eq!(json["nmatch"], 2);
        assert_eq!(json["groups"].as_array().unwrap().len(), 1);
        assert_eq!(json["groups"][0]["text"], "ac");
    }
}
