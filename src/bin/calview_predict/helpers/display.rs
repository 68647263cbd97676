// ABOUTME: Output formatting helpers for calview-predict
// ABOUTME: Provides consistent text rendering for prediction summaries and pipeline explanations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calview_trends::{PredictionSummary, SampleWindow, TrendAnalysis, TrendLine, WeightTrend};

/// Display a prediction summary
pub fn display_summary(summary: &PredictionSummary) {
    println!("\nWeight Prediction");
    println!("{}", "=".repeat(60));

    if !summary.has_enough_data {
        println!("Not enough data yet. Log your weight on a few different days.");
        return;
    }

    println!("   Current weight:    {:.1} kg", summary.current_weight);
    println!("   Goal weight:       {:.1} kg", summary.goal_weight);
    println!("   In 30 days:        {:.1} kg", summary.predicted_weight_30_days);
    println!("   Weekly change:     {:+.2} kg", summary.weekly_change_kg);
    println!("   Trend:             {}", trend_label(summary.trend));

    match (&summary.projected_date, summary.days_to_goal) {
        (Some(date), Some(days)) => println!("   Goal reached:      {date} ({days} days)"),
        _ => println!("   Goal reached:      not projected at the current trend"),
    }
}

/// Display every stage of the trend pipeline
pub fn display_analysis(analysis: &TrendAnalysis) {
    println!("\nTrend Pipeline");
    println!("{}", "=".repeat(60));
    println!(
        "   Window:            {} ({} samples, span {:.0} days)",
        match analysis.window {
            SampleWindow::Recent => "recent",
            SampleWindow::FullHistory => "full history",
        },
        analysis.samples_used,
        analysis.span_days
    );
    println!("   Days until now:    {:.0}", analysis.days_until_now);
    println!("   Latest weight:     {:.1} kg", analysis.last_weight);

    match analysis.fit {
        Some(fit) => println!(
            "   Fitted:            {}  (r² {:.3})",
            line_label(fit.line),
            fit.r_squared
        ),
        None => println!("   Fitted:            degenerate (all samples on one day)"),
    }
    println!(
        "   Damped:            {}  (factor {:.2})",
        line_label(analysis.damped.line),
        analysis.damped.factor
    );
    println!(
        "   Capped:            {}  ({:+.2} kg/week{})",
        line_label(analysis.capped.line),
        analysis.capped.weekly_change_kg,
        if analysis.capped.was_capped { ", capped" } else { "" }
    );
    println!(
        "   Anchored:          {}  (drift {:+.2} kg{})",
        line_label(analysis.anchored.line),
        analysis.anchored.deviation_kg,
        if analysis.anchored.was_anchored {
            ", re-anchored"
        } else {
            ""
        }
    );
}

fn line_label(line: TrendLine) -> String {
    format!("{:+.4} kg/day, {:.2} kg at day 0", line.slope, line.intercept)
}

const fn trend_label(trend: WeightTrend) -> &'static str {
    match trend {
        WeightTrend::Losing => "losing",
        WeightTrend::Gaining => "gaining",
        WeightTrend::Stable => "stable",
        WeightTrend::InsufficientData => "insufficient data",
    }
}
