use crate::core::{RoundRef, WrappedSummary};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &WrappedSummary) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
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
    fn write_summary(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
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
    fn write_summary(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        self.write_header(summary)?;
        self.write_season(summary)?;
        self.write_metric("Strokes", &summary.strokes)?;
        self.write_metric("Score", &summary.score)?;
        self.write_scoring_mix(summary)?;
        self.write_courses(summary)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "# Golf Wrapped")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", summary.generated_at)?;
        writeln!(self.writer, "Schema version: {}", summary.schema_version)?;
        if let Some(name) = &summary.profile.user_name {
            writeln!(self.writer, "Player: {name}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_season(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Season")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Rounds included | {} |",
            summary.rounds.total_included
        )?;
        if let Some(total) = summary.rounds.total_from_archive {
            writeln!(self.writer, "| Rounds in archive | {total} |")?;
        }
        writeln!(
            self.writer,
            "| First round | {} |",
            summary.rounds.first_round_at.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            self.writer,
            "| Last round | {} |",
            summary.rounds.last_round_at.as_deref().unwrap_or("n/a")
        )?;
        if let Some((month, count)) = busiest_month(summary) {
            writeln!(self.writer, "| Busiest month | {month} ({count} rounds) |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metric(
        &mut self,
        label: &str,
        stats: &crate::core::ScoreStats,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## {label}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Average: {}", fmt_avg(stats.average))?;
        writeln!(
            self.writer,
            "- Best: {}",
            fmt_round(stats.best_round.as_ref(), label)
        )?;
        writeln!(
            self.writer,
            "- Worst: {}",
            fmt_round(stats.worst_round.as_ref(), label)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scoring_mix(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        let totals = &summary.stats_totals;
        writeln!(self.writer, "## Scoring mix")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Birdies | {} |", totals.birdies)?;
        writeln!(self.writer, "| Pars | {} |", totals.pars)?;
        writeln!(self.writer, "| Bogeys | {} |", totals.bogeys)?;
        writeln!(
            self.writer,
            "| Double bogey or worse | {} |",
            totals.double_bogey_or_worse
        )?;
        writeln!(self.writer, "| Putts | {} |", totals.putts)?;
        writeln!(
            self.writer,
            "| Putts per round | {} |",
            fmt_avg(totals.putts_avg_per_round_with_putts)
        )?;
        writeln!(
            self.writer,
            "| Fairway hit rate | {} |",
            fmt_rate(totals.fairway_hit_rate)
        )?;
        writeln!(self.writer, "| GIR rate | {} |", fmt_rate(totals.gir_rate))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_courses(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Courses")?;
        writeln!(self.writer)?;
        match &summary.courses.most_played {
            Some(most) => writeln!(
                self.writer,
                "Most played: {} ({} rounds)",
                most.name.as_deref().unwrap_or("Unknown"),
                most.rounds_played
            )?,
            None => writeln!(self.writer, "Most played: n/a")?,
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Course | Rounds | Avg strokes | Avg score |")?;
        writeln!(self.writer, "|--------|--------|-------------|-----------|")?;
        for course in &summary.courses.items {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                course.name.as_deref().unwrap_or("Unknown"),
                course.rounds_played,
                fmt_avg(course.avg_strokes),
                fmt_avg(course.avg_score)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_summary(&mut self, summary: &WrappedSummary) -> anyhow::Result<()> {
        print_header(summary);
        print_season(summary);
        print_metric("STROKES", &summary.strokes, "strokes");
        print_metric("SCORE", &summary.score, "score");
        print_scoring_mix(summary);
        print_courses(summary);
        Ok(())
    }
}

fn print_header(summary: &WrappedSummary) {
    println!();
    println!("{}", "═══════════════════════════════════════════".blue());
    println!("{}", "              GOLF WRAPPED".bold().blue());
    println!("{}", "═══════════════════════════════════════════".blue());
    if let Some(name) = &summary.profile.user_name {
        println!("{}", format!("Season recap for {name}").bold());
    }
    println!();
}

fn print_season(summary: &WrappedSummary) {
    println!("⛳ {} Rounds", "SEASON".bold());
    println!("───────────────────────────────────────────");
    println!(
        "Rounds included: {}",
        summary.rounds.total_included.to_string().green()
    );
    if let Some(first) = &summary.rounds.first_round_at {
        println!("First round: {first}");
    }
    if let Some(last) = &summary.rounds.last_round_at {
        println!("Last round: {last}");
    }
    if let Some((month, count)) = busiest_month(summary) {
        println!("Busiest month: {} ({count} rounds)", month.cyan());
    }
    println!();
}

fn print_metric(label: &str, stats: &crate::core::ScoreStats, unit: &str) {
    println!("🏌  {} ", label.bold());
    println!("───────────────────────────────────────────");
    println!("Average: {}", fmt_avg(stats.average).bold());
    println!("Best: {}", fmt_round(stats.best_round.as_ref(), unit));
    println!("Worst: {}", fmt_round(stats.worst_round.as_ref(), unit));
    println!();
}

fn print_scoring_mix(summary: &WrappedSummary) {
    let totals = &summary.stats_totals;
    println!("🎯 {} Totals", "SCORING MIX".bold());
    println!("───────────────────────────────────────────");
    println!(
        "Birdies: {}  Pars: {}  Bogeys: {}  Double+: {}",
        totals.birdies.to_string().green(),
        totals.pars,
        totals.bogeys.to_string().yellow(),
        totals.double_bogey_or_worse.to_string().red()
    );
    println!(
        "Putts: {} (avg {} per round with putts)",
        totals.putts,
        fmt_avg(totals.putts_avg_per_round_with_putts)
    );
    println!(
        "Fairways: {}  GIR: {}",
        fmt_rate(totals.fairway_hit_rate),
        fmt_rate(totals.gir_rate)
    );
    println!();
}

fn print_courses(summary: &WrappedSummary) {
    println!("🗺  {} ", "COURSES".bold());
    println!("───────────────────────────────────────────");
    match &summary.courses.most_played {
        Some(most) => println!(
            "Most played: {} ({} rounds)",
            most.name.as_deref().unwrap_or("Unknown").bold(),
            most.rounds_played
        ),
        None => println!("Most played: n/a"),
    }

    if summary.courses.items.is_empty() {
        println!();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Course", "Rounds", "Avg strokes", "Avg score"]);
    for course in &summary.courses.items {
        table.add_row(vec![
            course.name.as_deref().unwrap_or("Unknown").to_string(),
            course.rounds_played.to_string(),
            fmt_avg(course.avg_strokes),
            fmt_avg(course.avg_score),
        ]);
    }
    println!("{table}");
    println!();
}

fn busiest_month(summary: &WrappedSummary) -> Option<(String, u64)> {
    summary
        .rounds
        .by_month_utc
        .iter()
        .max_by_key(|(_, &count)| count)
        .map(|(month, &count)| (month.clone(), count))
}

fn fmt_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}

fn fmt_rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

fn fmt_round(round: Option<&RoundRef>, unit: &str) -> String {
    match round {
        Some(r) => {
            let value = match unit.eq_ignore_ascii_case("score") {
                true => r.score,
                false => r.strokes,
            };
            format!(
                "{} at {} ({})",
                value.map_or_else(|| "n/a".to_string(), |v| v.to_string()),
                r.club_name.as_deref().unwrap_or("Unknown"),
                &r.timestamp_iso[..10.min(r.timestamp_iso.len())]
            )
        }
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Courses, Profile, RoundTotals, ScoreStats, StatsTotals};

    fn sample_summary() -> WrappedSummary {
        WrappedSummary {
            schema_version: "1".to_string(),
            generated_at: "2026-01-01T00:00:00.000Z".to_string(),
            profile: Profile {
                user_id: Some("u1".into()),
                user_name: Some("Sam".into()),
            },
            rounds: RoundTotals {
                total_from_archive: Some(3),
                total_included: 2,
                by_month_utc: [("2025-06".to_string(), 2u64)].into_iter().collect(),
                first_round_at: Some("2025-06-01T09:00:00.000Z".into()),
                last_round_at: Some("2025-06-20T09:00:00.000Z".into()),
            },
            strokes: ScoreStats {
                average: Some(88.5),
                best_round: None,
                worst_round: None,
            },
            score: ScoreStats::default(),
            stats_totals: StatsTotals {
                birdies: 3,
                fairway_hit_rate: Some(0.375),
                ..StatsTotals::default()
            },
            courses: Courses::default(),
        }
    }

    #[test]
    fn json_writer_emits_schema_versioned_camel_case() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_summary(&sample_summary())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains(r#""schemaVersion": "1""#));
        assert!(text.contains(r#""byMonthUtc""#));
        assert!(text.contains(r#""fairwayHitRate": 0.375"#));
    }

    #[test]
    fn markdown_writer_renders_report_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_summary(&sample_summary())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Golf Wrapped"));
        assert!(text.contains("| Rounds included | 2 |"));
        assert!(text.contains("| Fairway hit rate | 37.5% |"));
        assert!(text.contains("| Busiest month | 2025-06 (2 rounds) |"));
    }

    #[test]
    fn formatting_helpers_render_absent_values_as_na() {
        assert_eq!(fmt_avg(None), "n/a");
        assert_eq!(fmt_avg(Some(32.0)), "32.0");
        assert_eq!(fmt_rate(None), "n/a");
        assert_eq!(fmt_rate(Some(0.42857)), "42.9%");
        assert_eq!(fmt_round(None, "strokes"), "n/a");
    }
}
