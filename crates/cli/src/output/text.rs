use anyhow::Result;
use colored::{ColoredString, Colorize};
use scanboard::finding::{Finding, StatusCode};
use scanboard::report::ScoreRating;

use super::DashboardView;

const REFERENCE_LIMIT: usize = 2;
const COMPLIANCE_LIMIT: usize = 4;
const BAR_WIDTH: usize = 30;

pub fn print(view: &DashboardView<'_>, quiet: bool, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }
    let stats = view.stats;

    if !quiet {
        println!();
        println!("{}", "  scanboard - Security Assessment Report".bold());
        println!("  Account:       {}", stats.account_id);
        if !view.criteria.is_empty() {
            println!(
                "  Filters:       framework={} region={} status={}",
                or_dash(&view.criteria.framework),
                or_dash(&view.criteria.region),
                view.criteria.status
            );
        }
        println!();

        println!("{}", "  Summary".bold().underline());
        println!(
            "    Security score: {}",
            rating_paint(stats.rating, &format!("{}% {}", stats.security_score, stats.rating.as_str()))
        );
        println!("    Total checks:   {}", stats.total);
        println!("    Failed:         {}", stats.failed.to_string().red().bold());
        println!("    Passed:         {}", stats.passed.to_string().green().bold());
        println!("    Manual:         {}", stats.manual.to_string().yellow());
        println!("    Critical/High:  {}", stats.critical_high.to_string().red().bold());
        println!();

        print_charts(view);
        print_options(view);
    }

    if view.findings.is_empty() {
        println!("  {} No findings match your filters.", "✓".green().bold());
        println!();
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "  Findings (showing {} of {})",
            view.findings.len().min(view.limit),
            view.findings.len()
        )
        .bold()
        .underline()
    );
    println!();
    for finding in view.findings.iter().take(view.limit) {
        print_finding(finding);
    }

    Ok(())
}

fn print_charts(view: &DashboardView<'_>) {
    let charts = view.charts;

    println!("{}", "  Severity".bold().underline());
    let max = charts.severity.iter().map(|s| s.value).max().unwrap_or(0);
    for slice in &charts.severity {
        println!(
            "    {:<10} {:>6}  {}",
            slice.name,
            slice.value,
            severity_paint(&slice.name, &bar(slice.value, max))
        );
    }
    println!();

    println!("{}", "  Services".bold().underline());
    let max = charts.services.iter().map(|s| s.value).max().unwrap_or(0);
    for service in &charts.services {
        println!(
            "    {:<20} {:>6}  {}",
            service.name,
            service.value,
            bar(service.value, max).blue()
        );
    }
    println!();

    if !charts.regions.is_empty() {
        println!("{}", "  Regions (all findings)".bold().underline());
        println!("    {:<16} {:>7} {:>7} {:>7}", "Region", "Failed", "Passed", "Total");
        for region in &charts.regions {
            println!(
                "    {:<16} {:>7} {:>7} {:>7}",
                region.name,
                format!("{:>7}", region.failed).red(),
                format!("{:>7}", region.passed).green(),
                region.total
            );
        }
        println!();
    }
}

fn print_options(view: &DashboardView<'_>) {
    let stats = view.stats;

    if !stats.compliance_frameworks.is_empty() {
        println!(
            "{}",
            format!("  Compliance frameworks ({})", stats.compliance_frameworks.len())
                .bold()
                .underline()
        );
        for (framework, count) in stats.compliance_frameworks.iter() {
            println!("    {framework} ({count})");
        }
        println!();
    }

    let counts: Vec<String> = view
        .button_counts()
        .into_iter()
        .map(|(filter, count)| format!("{filter}: {count}"))
        .collect();
    println!("  {} {}", "Quick filters".bold(), counts.join("  "));
    println!("  {} {}", "Regions".bold(), stats.regions.join(", "));
    println!();
}

fn print_finding(finding: &Finding) {
    let status = finding.status_code.as_ref().map_or("-", StatusCode::as_str);
    let status_label = match finding.status_code {
        Some(StatusCode::Fail) => status.red().bold(),
        Some(StatusCode::Pass) => status.green().bold(),
        _ => status.yellow().bold(),
    };
    let severity = finding.severity.as_ref().map_or("", |s| s.as_str());

    println!(
        "  [{}] [{}] {}",
        status_label,
        severity_paint(severity, severity),
        finding.title.as_deref().unwrap_or("(untitled)")
    );
    println!(
        "    {} {}  {} {}  {} {}",
        "Region:".dimmed(),
        finding.region().unwrap_or("-"),
        "Service:".dimmed(),
        finding.service_name.as_deref().unwrap_or("N/A"),
        "Check:".dimmed(),
        finding.check_id.as_deref().unwrap_or("N/A"),
    );
    if let Some(risk) = finding.risk_summary() {
        println!("    {}", risk);
    }

    if let Some(remediation) = &finding.remediation {
        if let Some(desc) = &remediation.description {
            println!("    {} {}", "Fix:".green(), desc);
        }
        for reference in remediation.references.iter().take(REFERENCE_LIMIT) {
            println!("    {} {}", "-->".dimmed(), reference);
        }
    }

    let compliance = finding.compliance_entries();
    if !compliance.is_empty() {
        let shown: Vec<String> = compliance
            .iter()
            .take(COMPLIANCE_LIMIT)
            .map(ToString::to_string)
            .collect();
        println!("    {} {}", "Compliance:".dimmed(), shown.join(" | "));
    }
    println!();
}

fn rating_paint(rating: ScoreRating, text: &str) -> ColoredString {
    match rating {
        ScoreRating::Good => text.green().bold(),
        ScoreRating::Fair => text.yellow().bold(),
        ScoreRating::Poor => text.red().bold(),
    }
}

fn severity_paint(severity: &str, text: &str) -> ColoredString {
    match severity {
        "Critical" | "High" => text.red().bold(),
        "Medium" => text.yellow(),
        "Low" => text.blue(),
        "Info" => text.cyan(),
        _ => text.dimmed(),
    }
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "█".repeat((value * BAR_WIDTH).div_ceil(max))
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
