use colored::*;
use std::io::Write;

use crate::core::{ConfidenceStats, ScanReport, ScanStatus, Severity};
use crate::formatting::FormattingConfig;
use crate::session::SessionOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_session(&mut self, output: &SessionOutput) -> anyhow::Result<()>;
}

/// Confidence values render as percentages with one decimal place
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_session(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(output)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_session(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        self.write_header(output)?;
        for (idx, report) in output.scans.iter().enumerate() {
            self.write_scan(idx + 1, report)?;
        }
        self.write_history(output)?;
        self.write_trend(output)?;
        self.write_session_metrics(output)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "# Sentryx Scan Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", output.generated_at)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scan(&mut self, number: usize, report: &ScanReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(
            self.writer,
            "## Scan {}: {}",
            number,
            summary.status.display_name()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Timestamp: {}", summary.timestamp)?;
        writeln!(self.writer, "- Detections: {}", summary.detection_count)?;
        writeln!(
            self.writer,
            "- Confidence threshold: {}",
            percent(summary.confidence_threshold)
        )?;
        writeln!(self.writer)?;

        if report.rows.is_empty() {
            writeln!(self.writer, "No defects detected.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| ID | Type | Confidence | Severity |")?;
        writeln!(self.writer, "|----|------|------------|----------|")?;
        for row in &report.rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.id,
                row.class_name,
                percent(row.confidence),
                row.severity.display_name()
            )?;
        }
        writeln!(self.writer)?;

        // A single-class scan has nothing to break down
        if report.distinct_classes() > 1 {
            writeln!(self.writer, "### Defect Types")?;
            writeln!(self.writer)?;
            let mut counts: Vec<_> = report.class_counts.iter().collect();
            counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (class_name, count) in counts {
                writeln!(self.writer, "- {class_name}: {count}")?;
            }
            writeln!(self.writer)?;
        }

        if let Some(stats) = &report.confidence_stats {
            self.write_confidence_stats(stats)?;
        }

        Ok(())
    }

    fn write_confidence_stats(&mut self, stats: &ConfidenceStats) -> anyhow::Result<()> {
        writeln!(self.writer, "### Confidence Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Average | Highest | Lowest | Std Deviation |")?;
        writeln!(self.writer, "|---------|---------|--------|---------------|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            percent(stats.mean),
            percent(stats.max),
            percent(stats.min),
            percent(stats.std_dev)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_history(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        if output.history.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Recent Detection History")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Timestamp | Detections | Status |")?;
        writeln!(self.writer, "|-----------|------------|--------|")?;
        for entry in &output.history {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                entry.timestamp,
                entry.detection_count,
                entry.status.display_name()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trend(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        let Some(trend) = &output.trend else {
            return Ok(());
        };

        writeln!(self.writer, "## Detection Trend")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Total historical detections: {}",
            trend.total_detections
        )?;
        writeln!(
            self.writer,
            "- Average per scan: {:.1}",
            trend.average_per_scan
        )?;
        writeln!(
            self.writer,
            "- Scans with defects: {}",
            trend.defect_ratio_label()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Scan | Timestamp | Detections |")?;
        writeln!(self.writer, "|------|-----------|------------|")?;
        for point in &trend.points {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                point.scan_number, point.timestamp, point.detection_count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_session_metrics(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "## Session Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Total scans: {}", output.session.total_scans)?;
        writeln!(
            self.writer,
            "- Defects found: {}",
            output.session.total_defects
        )?;
        if let Some(rate) = output.session.detection_rate {
            writeln!(self.writer, "- Detection rate: {rate:.1} per scan")?;
        }
        Ok(())
    }
}

pub struct TerminalWriter {
    formatting: FormattingConfig,
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new(FormattingConfig::default())
    }
}

impl TerminalWriter {
    pub fn new(formatting: FormattingConfig) -> Self {
        formatting.apply();
        Self { formatting }
    }
}

impl OutputWriter for TerminalWriter {
    fn write_session(&mut self, output: &SessionOutput) -> anyhow::Result<()> {
        print_header(&self.formatting);
        for (idx, report) in output.scans.iter().enumerate() {
            print_scan(&self.formatting, idx + 1, report);
        }
        print_history(&self.formatting, output);
        print_trend(&self.formatting, output);
        print_session_metrics(&self.formatting, output);
        Ok(())
    }
}

fn print_header(fmt: &FormattingConfig) {
    println!(
        "{} {}",
        fmt.emoji("🛡️", "**"),
        "Sentryx Scan Report".bold().blue()
    );
    println!("{}", "======================".blue());
    println!();
}

fn print_scan(fmt: &FormattingConfig, number: usize, report: &ScanReport) {
    let summary = &report.summary;
    match summary.status {
        ScanStatus::Critical => {
            println!(
                "{} Scan {}: {}, {} potential defect(s) identified",
                fmt.emoji("⚠️", "!"),
                number,
                "CRITICAL".red().bold(),
                summary.detection_count
            );
        }
        ScanStatus::Safe => {
            println!(
                "{} Scan {}: {}, no defects detected",
                fmt.emoji("✅", "+"),
                number,
                "SAFE".green().bold()
            );
        }
    }
    println!("  Timestamp: {}", summary.timestamp);
    println!(
        "  Confidence threshold: {}",
        percent(summary.confidence_threshold)
    );

    if !report.rows.is_empty() {
        println!();
        println!("  {:<4} {:<20} {:>10}  {}", "ID", "Type", "Confidence", "Severity");
        for row in &report.rows {
            println!(
                "  {:<4} {:<20} {:>10}  {}",
                row.id,
                row.class_name,
                percent(row.confidence),
                severity_label(row.severity)
            );
        }
    }

    if report.distinct_classes() > 1 {
        println!();
        println!("  {} Defect types:", fmt.emoji("🏷️", "-"));
        let mut counts: Vec<_> = report.class_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (class_name, count) in counts {
            println!("    {class_name}: {count}");
        }
    }

    if let Some(stats) = &report.confidence_stats {
        println!();
        println!(
            "  {} Confidence: avg {} / max {} / min {} / std {}",
            fmt.emoji("📈", "~"),
            percent(stats.mean),
            percent(stats.max),
            percent(stats.min),
            percent(stats.std_dev)
        );
    }
    println!();
}

fn print_history(fmt: &FormattingConfig, output: &SessionOutput) {
    if output.history.is_empty() {
        return;
    }

    println!(
        "{} Recent Detection History ({} entries):",
        fmt.emoji("📜", "#"),
        output.history.len()
    );
    for entry in &output.history {
        println!(
            "  {}  detections: {:<3} {}",
            entry.timestamp,
            entry.detection_count,
            status_label(entry.status)
        );
    }
    println!();
}

fn print_trend(fmt: &FormattingConfig, output: &SessionOutput) {
    let Some(trend) = &output.trend else {
        return;
    };

    println!("{} Detection Trend:", fmt.emoji("📈", "~"));
    println!(
        "  Total historical detections: {}",
        trend.total_detections
    );
    println!("  Average per scan: {:.1}", trend.average_per_scan);
    println!("  Scans with defects: {}", trend.defect_ratio_label());
    println!();
}

fn print_session_metrics(fmt: &FormattingConfig, output: &SessionOutput) {
    println!("{} Session:", fmt.emoji("📊", "="));
    println!("  Total scans: {}", output.session.total_scans);
    println!("  Defects found: {}", output.session.total_defects);
    if let Some(rate) = output.session.detection_rate {
        println!("  Detection rate: {rate:.1} per scan");
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => severity.display_name().red(),
        Severity::Medium => severity.display_name().yellow(),
        Severity::Low => severity.display_name().green(),
    }
}

fn status_label(status: ScanStatus) -> ColoredString {
    match status {
        ScanStatus::Critical => status.display_name().red().bold(),
        ScanStatus::Safe => status.display_name().green().bold(),
    }
}

pub fn create_writer(format: OutputFormat, formatting: FormattingConfig) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(formatting)),
    }
}

/// Writer for `--output <file>`. Terminal formatting makes no sense in a
/// file, so it degrades to markdown.
pub fn create_file_writer(
    format: OutputFormat,
    path: &std::path::Path,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = std::fs::File::create(path)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown | OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
    })
}
