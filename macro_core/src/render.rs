//! Plan rendering for terminal, JSON and CSV output.

use crate::{Error, Goal, PlanReport, PlanRequest, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::Validation(format!(
                "format must be text, json or csv, got {:?}",
                other
            ))),
        }
    }
}

/// Render a generated plan
pub fn render(report: &PlanReport, request: &PlanRequest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, request)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.summary())? + "\n"),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_text(report: &PlanReport, request: &PlanRequest) -> String {
    let summary = report.summary();
    let profile = &request.profile;
    let mut out = String::new();

    let goal_line = match (request.goal, request.intensity) {
        (Goal::FatLoss, Some(intensity)) => {
            format!("{} ({})", request.goal.label(), intensity.label())
        }
        (goal, _) => goal.label().to_string(),
    };

    // Writing to a String cannot fail
    let _ = writeln!(out, "╭─────────────────────────────────────────╮");
    let _ = writeln!(out, "│  YOUR PERSONALIZED PLAN");
    let _ = writeln!(out, "╰─────────────────────────────────────────╯");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} kg, {:.1} cm, {} years, {}",
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender.as_str()
    );
    let _ = writeln!(out, "  Activity: {}", request.activity.label());
    let _ = writeln!(out, "  Goal: {}", goal_line);
    let _ = writeln!(out);
    let _ = writeln!(out, "  BMR: {} kcal", summary.bmr);
    let _ = writeln!(out, "  TDEE: {} kcal", summary.tdee);
    let _ = writeln!(out, "  Target Calories: {} kcal", summary.target_calories);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Protein: {} g", summary.protein_g);
    let _ = writeln!(out, "  Fats: {} g", summary.fat_g);
    let _ = writeln!(out, "  Carbs: {} g", summary.carbs_g);

    out
}

fn render_csv(report: &PlanReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.serialize(report.summary())?;

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
