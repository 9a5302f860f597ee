use chrono::NaiveDateTime;
use liferisk_core::constants::VERSION;
use liferisk_core::models::UserProfile;
use liferisk_scoring::Assessment;

pub const DISCLAIMER: &str = "This report is for informational purposes only and should not replace professional medical advice.";

/// Everything the report shows.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub profile: &'a UserProfile,
    /// Free-text occupation from the form. Shown as `-` when absent.
    pub occupation: Option<&'a str>,
    /// Extra `(label, value)` answers that do not affect scoring.
    pub details: &'a [(&'static str, String)],
    pub assessment: &'a Assessment,
    pub analysis: &'a str,
    pub generated_at: NaiveDateTime,
}

fn heading(out: &mut Vec<String>, title: &str, underline: usize) {
    out.push(String::new());
    out.push(title.to_string());
    out.push("=".repeat(underline));
}

fn join_or<'a>(items: impl IntoIterator<Item = &'a String>, empty: &str) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}

/// Rupee amount with comma thousands separators, e.g. `₹1,250,000`.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

/// Render the full report.
///
/// Diseases are sorted by descending risk with percentages to four decimals;
/// life expectancy and years remaining are rounded to whole years.
pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let profile = ctx.profile;
    let assessment = ctx.assessment;
    let recs = &assessment.recommendations;

    let mut out = vec![
        format!("LifeRisk {VERSION} - Comprehensive Health Risk Report"),
        format!(
            "Generated on: {}",
            ctx.generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
    ];

    heading(&mut out, "PERSONAL INFORMATION", 20);
    out.push(format!("Age: {}", profile.age));
    out.push(format!("Gender: {}", profile.gender));
    out.push(format!("BMI: {:.1}", profile.bmi));
    out.push(format!("City: {}", profile.city));
    out.push(format!("Occupation: {}", ctx.occupation.unwrap_or("-")));

    heading(&mut out, "HEALTH PROFILE", 14);
    out.push(format!(
        "Current Health Conditions: {}",
        join_or(&profile.health_conditions, "None reported")
    ));
    out.push(format!(
        "Family History: {}",
        join_or(&profile.family_history, "None reported")
    ));
    out.push(format!("Smoking Status: {}", profile.smoking_status));
    out.push(format!("Alcohol Consumption: {}", profile.alcohol_consumption));
    out.push(format!("Exercise Frequency: {}", profile.exercise_frequency));
    out.push(format!("Sleep Hours: {}", profile.sleep_hours));
    out.push(format!("Stress Level: {}/10", profile.stress_level));

    if !ctx.details.is_empty() {
        heading(&mut out, "LIFESTYLE DETAILS", 17);
        out.extend(
            ctx.details
                .iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );
    }

    heading(&mut out, "DISEASE-SPECIFIC RISK ASSESSMENT", 31);
    out.extend(assessment.risks.sorted_descending().iter().map(|risk| {
        format!(
            "{}: {:.4}% annual mortality risk",
            risk.display_name(),
            risk.percent()
        )
    }));

    heading(&mut out, "LIFE EXPECTANCY", 15);
    out.push(format!(
        "Predicted Life Expectancy: {:.0} years",
        assessment.life_expectancy.years
    ));
    out.push(format!(
        "Years Remaining: {:.0} years",
        assessment.years_remaining
    ));

    heading(&mut out, "AI ANALYSIS", 11);
    out.push(ctx.analysis.trim_end().to_string());

    heading(&mut out, "INSURANCE RECOMMENDATIONS", 24);
    out.push(format!(
        "1. Term Life Insurance: {} coverage",
        format_rupees(recs.term_life_cover)
    ));
    out.push(format!(
        "2. Health Insurance: ₹{} lakhs",
        recs.health_insurance.lakhs
    ));
    out.push(format!(
        "3. Critical Illness: ₹{} lakhs",
        recs.critical_illness.lakhs
    ));

    out.push(String::new());
    out.push(DISCLAIMER.to_string());
    out.push(String::new());

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_are_grouped_in_thousands() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(500_000), "₹500,000");
        assert_eq!(format_rupees(1_250_000), "₹1,250,000");
    }
}
