use anyhow::Result;
use serde_json::json;

use super::DashboardView;

/// Print the full dashboard as JSON. Unlike the text view, the findings list
/// is not truncated.
pub fn print(view: &DashboardView<'_>) -> Result<()> {
    let json = render(view)?;
    println!("{json}");
    Ok(())
}

fn render(view: &DashboardView<'_>) -> Result<String> {
    let buttons: Vec<serde_json::Value> = view
        .button_counts()
        .into_iter()
        .map(|(filter, count)| json!({ "filter": filter, "count": count }))
        .collect();

    let doc = json!({
        "filters": {
            "framework": view.criteria.framework,
            "region": view.criteria.region,
            "status": view.criteria.status.as_str(),
        },
        "stats": view.stats,
        "charts": view.charts,
        "status_counts": buttons,
        "findings": view.findings,
    });

    Ok(serde_json::to_string_pretty(&doc)?)
}
