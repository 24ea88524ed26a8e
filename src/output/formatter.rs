//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::{AnalysisReport, MatchVerdict};
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn verdict_color(verdict: MatchVerdict) -> Color {
        match verdict {
            MatchVerdict::Strong => Color::Green,
            MatchVerdict::Moderate => Color::Cyan,
            MatchVerdict::Weak => Color::Yellow,
            MatchVerdict::Poor => Color::Red,
        }
    }

    fn write_skills(&self, out: &mut String, title: &str, skills: &BTreeSet<String>, color: Color) -> std::fmt::Result {
        writeln!(out, "\n{} ({})", self.paint(title, color), skills.len())?;
        if skills.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for skill in skills {
            writeln!(out, "  • {}", skill)?;
        }
        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        self.write_report(&mut out, report)
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl ConsoleFormatter {
    fn write_report(&self, out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let result = &report.result;
        let score = format!("{:.2}%", result.match_score);

        writeln!(out, "Resume match report: {}", report.metadata.resume_name)?;
        writeln!(
            out,
            "\nMatch score: {} ({})",
            self.paint(&score, Self::verdict_color(report.verdict)),
            report.verdict
        )?;
        self.write_skills(out, "Found skills", &result.found_skills, Color::Green)?;
        self.write_skills(out, "Missing skills", &result.missing_skills, Color::Red)?;

        if self.detailed {
            writeln!(
                out,
                "\nGenerated {} by resume-matcher {}",
                report.metadata.generated_at.to_rfc3339(),
                report.metadata.tool_version
            )?;
        }
        Ok(())
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn skills_section(out: &mut String, title: &str, skills: &BTreeSet<String>) -> std::fmt::Result {
        writeln!(out, "\n## {}\n", title)?;
        if skills.is_empty() {
            writeln!(out, "_None_")?;
        }
        for skill in skills {
            writeln!(out, "- `{}`", skill)?;
        }
        Ok(())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        self.write_report(&mut out, report)
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl MarkdownFormatter {
    fn write_report(&self, out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let result = &report.result;

        writeln!(out, "# Resume Match Report\n")?;
        writeln!(out, "**Resume:** {}  ", report.metadata.resume_name)?;
        writeln!(out, "**Match score:** {:.2}% ({})", result.match_score, report.verdict)?;
        Self::skills_section(out, "Found Skills", &result.found_skills)?;
        Self::skills_section(out, "Missing Skills", &result.missing_skills)?;

        if self.include_metadata {
            writeln!(
                out,
                "\n---\n_Generated {} by resume-matcher {}_",
                report.metadata.generated_at.to_rfc3339(),
                report.metadata.tool_version
            )?;
        }
        Ok(())
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn render(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), format);

        formatter.format_report(report)
    }
}
