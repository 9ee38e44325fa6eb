//! Console output formatter for council verdicts

use colored::Colorize;
use council_domain::{
    CouncilVerdict, Deliberation, FusionStatus, LineageOutcome, OutputFormat, RoundRecord,
};

/// Width of the probability bars in the full output
const BAR_WIDTH: u32 = 30;

/// Formats council verdicts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to the selected output format
    pub fn render(verdict: &CouncilVerdict, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(verdict),
            OutputFormat::Verdict => Self::format_verdict_only(verdict),
            OutputFormat::Json => Self::format_json(verdict),
        }
    }

    /// Format the complete verdict envelope
    pub fn format(verdict: &CouncilVerdict) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Sovereign Council Verdict"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), verdict.query));
        output.push_str(&format!("{} {}\n", "Domain:".cyan().bold(), verdict.domain));
        output.push_str(&format!(
            "{} {} ({}, U={:.2}) {}\n",
            "Urgency:".cyan().bold(),
            verdict.urgency.class,
            verdict.urgency.color,
            verdict.urgency.weight,
            verdict.urgency.label.dimmed()
        ));

        output.push_str(&Self::section_header("Classification"));
        output.push_str(&format!("{} {}\n", "Efficiency:".bold(), verdict.efficiency.equation));
        output.push_str(&format!(
            "{} {} (load {:.2}, credit {:.2})\n",
            "Rest:".bold(),
            verdict.rest.status(),
            verdict.rest.load,
            verdict.rest.credit
        ));
        output.push_str(&format!("{} {:.4}\n", "SCF:".bold(), verdict.scf));
        output.push_str(&format!("{} {}\n", "Plan:".bold(), verdict.audit.deliberation));

        match &verdict.deliberation {
            None => {
                let message = verdict.message.as_deref().unwrap_or_default();
                output.push_str(&format!("\n{}\n", message.yellow().bold()));
            }
            Some(deliberation) => Self::push_deliberation(&mut output, deliberation),
        }

        output.push_str(&Self::section_header("Audit"));
        output.push_str(&format!("  efficiency   {}\n", verdict.audit.efficiency));
        output.push_str(&format!("  rest         {}\n", verdict.audit.rest));
        output.push_str(&format!("  deliberation {}\n", verdict.audit.deliberation));
        if let Some(proof) = &verdict.audit.proof {
            output.push_str(&format!("  proof        {}\n", proof));
        }

        output.push_str(&Self::footer());

        output
    }

    fn push_deliberation(output: &mut String, deliberation: &Deliberation) {
        for record in &deliberation.rounds {
            output.push_str(&Self::round_section(record));
        }
        if deliberation.cut_short {
            output.push_str(&format!(
                "\n{}\n",
                "Remaining rounds abandoned (deadline or cancellation)".yellow()
            ));
        }

        let fusion = &deliberation.fusion;
        output.push_str(&Self::section_header("Fusion"));
        output.push_str(&format!(
            "{} {}  {} {:.3}  {} {}/4\n",
            "Status:".bold(),
            Self::status_label(fusion.status),
            "Confidence:".bold(),
            fusion.confidence,
            "Active:".bold(),
            fusion.active_count
        ));
        if !fusion.agreements.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Agreements:".bold(),
                fusion.agreements.join(", ")
            ));
        }
        output.push_str(&format!("\n{}\n", fusion.verdict));

        output.push_str(&Self::section_header("Probability Landscape"));
        for entry in deliberation.landscape.entries() {
            let filled = (entry.probability * BAR_WIDTH / 100) as usize;
            output.push_str(&format!(
                "  {:<16} {:>3}% {}\n",
                entry.option,
                entry.probability,
                "#".repeat(filled).green()
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Session:".dimmed(),
            deliberation.proof.session_id
        ));
    }

    fn round_section(record: &RoundRecord) -> String {
        let mut section = Self::section_header(&format!("Round {}", record.round));
        for (lineage, outcome) in record.responses.iter() {
            match outcome {
                LineageOutcome::Answered(text) => section.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", lineage).yellow().bold(),
                    text
                )),
                LineageOutcome::Failed(_) => section.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", lineage).red().bold(),
                    outcome.render(lineage)
                )),
            }
        }
        section
    }

    /// Format as JSON
    pub fn format_json(verdict: &CouncilVerdict) -> String {
        serde_json::to_string_pretty(verdict).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict_only(verdict: &CouncilVerdict) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Council Verdict ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), verdict.query));

        match verdict.fusion() {
            None => {
                let message = verdict.message.as_deref().unwrap_or_default();
                output.push_str(message);
                output.push('\n');
            }
            Some(fusion) => {
                output.push_str(&format!(
                    "{} {} {:.3} ({} rounds)\n\n",
                    Self::status_label(fusion.status),
                    "confidence".dimmed(),
                    fusion.confidence,
                    verdict.rounds_completed
                ));
                output.push_str(&fusion.verdict);
                output.push('\n');
            }
        }

        output
    }

    fn status_label(status: FusionStatus) -> String {
        match status {
            FusionStatus::Unified | FusionStatus::Consensus => {
                status.as_str().green().bold().to_string()
            }
            FusionStatus::Partial => status.as_str().yellow().bold().to_string(),
            FusionStatus::Insufficient => status.as_str().red().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{
        AdvisoryDomain, Classification, FusionAssessment, FusionResult, Lineage, LineageResponses,
        LoadSignals, ProbabilityLandscape, ProofStamp,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn classify(query: &str, load: f64) -> Classification {
        Classification::classify(&LoadSignals {
            query,
            urgency_override: None,
            load,
            price: 0.14,
            tier: 4,
            domain: AdvisoryDomain::Wealth,
        })
    }

    fn deliberated() -> CouncilVerdict {
        let responses = LineageResponses::from_outcomes([
            (Lineage::Alethea, LineageOutcome::answered("Sell the losers.")),
            (Lineage::Sophia, LineageOutcome::answered("Hold steady.")),
            (Lineage::Eirene, LineageOutcome::failed("Timeout")),
            (Lineage::Kairos, LineageOutcome::answered("Hold and monitor.")),
        ]);
        let weights = AdvisoryDomain::Wealth.weights();
        let fusion = FusionResult::new(
            FusionAssessment::assess(&responses, &weights, 1.0),
            "Hold, then review in a week.",
        );
        let landscape = ProbabilityLandscape::build(
            &responses,
            None,
            &mut StdRng::seed_from_u64(7),
        );
        let deliberation = Deliberation {
            rounds: vec![RoundRecord {
                round: 1,
                responses: responses.clone(),
            }],
            proof: ProofStamp::issue_at(&responses, fusion.status, 1_700_000_000_000),
            final_responses: responses,
            fusion,
            landscape,
            cut_short: true,
        };
        let query = "emergency: portfolio crashed";
        CouncilVerdict::deliberated(query, AdvisoryDomain::Wealth, classify(query, 0.85), deliberation)
    }

    #[test]
    fn test_full_output_sections() {
        let output = ConsoleFormatter::format(&deliberated());

        assert!(output.contains("emergency: portfolio crashed"));
        assert!(output.contains("Round 1"));
        assert!(output.contains("Hold steady."));
        assert!(output.contains("Eirene unavailable: Timeout"));
        assert!(output.contains("Remaining rounds abandoned"));
        assert!(output.contains("Hold, then review in a week."));
        assert!(output.contains("Probability Landscape"));
        assert!(output.contains("SO-1700000000-"));
    }

    #[test]
    fn test_deferred_output_shows_message() {
        let query = "what about bonds?";
        let verdict =
            CouncilVerdict::deferred(query, AdvisoryDomain::General, classify(query, 0.9));

        let full = ConsoleFormatter::format(&verdict);
        assert!(full.contains("Inference deferred: rest mode active."));
        assert!(!full.contains("Probability Landscape"));

        let short = ConsoleFormatter::format_verdict_only(&verdict);
        assert!(short.contains("Inference deferred: rest mode active."));
    }

    #[test]
    fn test_verdict_only_output() {
        let output = ConsoleFormatter::render(&deliberated(), OutputFormat::Verdict);
        assert!(output.contains("Hold, then review in a week."));
        assert!(output.contains("(1 rounds)"));
        assert!(!output.contains("Round 1"));
    }

    #[test]
    fn test_json_output_is_envelope() {
        let output = ConsoleFormatter::render(&deliberated(), OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["query"], "emergency: portfolio crashed");
        assert_eq!(json["rounds_completed"], 1);
        assert_eq!(json["inference_deferred"], false);
        assert_eq!(json["deliberation"]["fusion"]["active_count"], 3);
    }
}
