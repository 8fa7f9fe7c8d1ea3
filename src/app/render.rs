use crate::fixtures;
use crate::session::SessionContext;
use crate::ui::style as ui;

/// Five-slot star row; filled count is the floor of the score, like the
/// dashboard's star icons.
fn star_row(vibe: f32) -> String {
    let filled = (vibe.floor() as usize).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn meter(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn section(title: &str) -> String {
    format!("\n  {}\n  {}", ui::header(title), ui::dim("─".repeat(54)))
}

#[allow(clippy::too_many_lines)]
pub fn render_dashboard(session: &SessionContext, quarter: &str) -> String {
    let stats = fixtures::DASHBOARD_STATS;
    let mut lines = vec![
        format!(
            "  ◆ {}  {}",
            ui::header("Vibe Code"),
            ui::dim(format!("{quarter} Reviews Open"))
        ),
        format!(
            "  {}",
            ui::dim(format!("Signed in as {} ({})", session.email, session.role))
        ),
        String::new(),
        format!("  {}", ui::header("Welcome back! 👋")),
        format!("  {}", fixtures::WELCOME_BANNER),
        format!(
            "  {} {}",
            ui::accent(stats.days_remaining),
            ui::dim("Days Remaining")
        ),
        String::new(),
        format!(
            "  Pending {}   Completed {}   Avg Vibe {}   Total {} {}",
            ui::value(stats.pending),
            ui::value(stats.completed),
            ui::value(stats.avg_vibe),
            quarter,
            ui::value(stats.total_q1)
        ),
    ];

    lines.push(section(&format!(
        "Pending Requests ({})",
        fixtures::PENDING_REQUESTS.len()
    )));
    for request in &fixtures::PENDING_REQUESTS {
        lines.push(format!(
            "  {} {} {}  [{}]",
            ui::accent("›"),
            ui::header(request.from),
            ui::dim(format!("— {}", request.role)),
            request.kind
        ));
        lines.push(format!(
            "    {}",
            ui::dim(format!("Requested {}", request.requested))
        ));
    }
    lines.push(format!(
        "  {} {}",
        ui::dim("Give Feedback:"),
        ui::yellow("vibecode give")
    ));

    lines.push(section(&format!(
        "Completed ({})",
        fixtures::COMPLETED_FEEDBACK.len()
    )));
    for entry in &fixtures::COMPLETED_FEEDBACK {
        lines.push(format!(
            "  {} Feedback for {}  {} {}",
            ui::accent("›"),
            ui::header(entry.to),
            ui::yellow(star_row(entry.vibe_score)),
            ui::value(entry.vibe_score)
        ));
        lines.push(format!(
            "    {}",
            ui::dim(format!("{} • {}", entry.quarter, entry.completed))
        ));
    }

    lines.push(section("My Summary"));
    lines.push(format!(
        "  Your Feedback Summary - {}",
        fixtures::QUARTERLY_TRENDS
            .last()
            .map_or("Q4 2024", |trend| trend.quarter)
    ));
    lines.push(format!(
        "  {}",
        ui::dim("AI-generated insights from your received feedback")
    ));
    lines.push(format!(
        "  {} {}",
        ui::dim("View Full AI Summary:"),
        ui::yellow("vibecode summary")
    ));

    lines.join("\n")
}

#[allow(clippy::too_many_lines)]
pub fn render_summary() -> String {
    let mut lines = vec![
        format!(
            "  ◆ {}  {}",
            ui::header("Your AI-Generated Summary"),
            ui::accent("AI-Powered")
        ),
        format!("  {}", ui::dim(fixtures::SUMMARY_PERIOD)),
        String::new(),
        format!(
            "  {} Average Vibe Score {}",
            ui::value("4.7"),
            ui::dim_value("+0.2 from Q3")
        ),
        format!(
            "  {}  Total Feedback {}",
            ui::value("10"),
            ui::dim_value("+2 from Q3")
        ),
        format!(
            "  {} Growth Trend {}",
            ui::value("+15%"),
            ui::dim_value("Trending Up")
        ),
    ];

    lines.push(section("Key Insights"));
    for insight in &fixtures::KEY_INSIGHTS {
        lines.push(format!("  {} {}", ui::accent("›"), ui::header(insight.title)));
        lines.push(format!("    {}", insight.insight));
    }
    lines.push(String::new());
    lines.push(format!("  {}", ui::header("AI Recommendation")));
    lines.push("  Based on your feedback patterns, we recommend focusing on:".to_string());
    for (idx, rec) in fixtures::AI_RECOMMENDATIONS.iter().enumerate() {
        lines.push(format!("    {} {rec}", ui::accent(format!("{}.", idx + 1))));
    }

    lines.push(section("Most Mentioned Themes"));
    lines.push(format!("  {}", ui::dim("What peers are talking about most")));
    for theme in &fixtures::TOP_THEMES {
        lines.push(format!(
            "  {} {:>2} mentions  {}",
            ui::cyan(format!("{:<16}", theme.theme)),
            theme.mentions,
            ui::dim_value(format!("{} from Q3", theme.trend))
        ));
    }

    lines.push(section("Feedback Sentiment Breakdown"));
    lines.push(format!("  {}", ui::dim("Overall tone of feedback received")));
    for slice in &fixtures::SENTIMENT {
        lines.push(format!(
            "  {:<14} {} {:>3}%",
            slice.label,
            meter(slice.percent, 20),
            slice.percent
        ));
    }

    lines.push(section("Your Growth Over Time"));
    lines.push(format!(
        "  {}",
        ui::dim("Tracking your progress across quarters")
    ));
    for trend in &fixtures::QUARTERLY_TRENDS {
        lines.push(format!(
            "  {}  {}  {} Reviews",
            trend.quarter,
            ui::value(format!("{}/5.0", trend.vibe)),
            trend.feedback
        ));
    }

    lines.push(section("What your peers are saying"));
    for quote in &fixtures::SAMPLE_QUOTES {
        lines.push(format!("  \u{201c}{quote}\u{201d}"));
        lines.push(format!("    {}", ui::dim("— Anonymous Peer")));
    }

    lines.push(String::new());
    lines.push(format!("  {}", ui::success("Positive Trajectory! 📈")));
    lines.push(format!("  {}", fixtures::TRAJECTORY_NOTE));

    lines.join("\n")
}

#[allow(clippy::too_many_lines)]
pub fn render_admin(quarter: &str) -> String {
    let metrics = fixtures::ORG_METRICS;
    let mut lines = vec![
        format!("  ◆ {}", ui::header(format!("{} Admin", fixtures::APP_NAME))),
        format!("  {}", ui::dim("HR Dashboard & Analytics")),
        format!("  {}", ui::dim(format!("Period: {quarter} (Current)"))),
        String::new(),
        format!(
            "  {}% Participation {}",
            ui::value(metrics.participation_rate),
            ui::dim_value(format!("+{}%", metrics.growth_from_last_q))
        ),
        format!(
            "  {} Avg Vibe Score {}",
            ui::value(metrics.avg_vibe_score),
            ui::dim_value("+0.3 from Q4")
        ),
        format!(
            "  {} Total Feedback {}",
            ui::value(metrics.total_feedback),
            ui::dim_value("+15 from Q4")
        ),
        format!("  🔥 Trending  {}", ui::dim_value("Engagement Up")),
    ];

    lines.push(section("AI Growth Advisor"));
    lines.push(format!(
        "  {}",
        ui::dim("Data-driven recommendations for your team")
    ));
    for insight in &fixtures::ADMIN_INSIGHTS {
        let badge = match insight.kind {
            "warning" => ui::yellow(format!("[{}]", insight.priority)),
            "success" => ui::value(format!("[{}]", insight.priority)),
            _ => ui::cyan(format!("[{}]", insight.priority)),
        };
        lines.push(format!(
            "  {} {} {badge}",
            ui::accent("›"),
            ui::header(insight.title)
        ));
        lines.push(format!("    {}", insight.description));
    }

    lines.push(section("By Department"));
    for dept in &fixtures::DEPARTMENTS {
        lines.push(format!(
            "  {:<13} {} {:>3}%  {:<15}  vibe {:.1}  {:>2} reviews  {}",
            dept.dept,
            meter(dept.participation, 12),
            dept.participation,
            fixtures::participation_grade(dept.participation),
            dept.avg_vibe,
            dept.feedback,
            ui::cyan(dept.top_theme)
        ));
    }

    lines.push(section("Performance Over Time"));
    lines.push(format!("  {}", ui::dim("Track key metrics across quarters")));
    let current = fixtures::QUARTERLY_COMPARISON.len() - 1;
    for (idx, q) in fixtures::QUARTERLY_COMPARISON.iter().enumerate() {
        let tag = if idx == current { "Current" } else { "Past" };
        lines.push(format!(
            "  {}  participation {:>2}%  vibe {:.1}  feedback {:>3}  [{tag}]",
            q.quarter, q.participation, q.avg_vibe, q.feedback
        ));
    }

    lines.push(section("Most Discussed Themes"));
    lines.push(format!(
        "  {}",
        ui::dim("What employees are talking about across the organization")
    ));
    for theme in &fixtures::ORG_THEMES {
        lines.push(format!(
            "  {} {:>2} mentions  {}",
            ui::cyan(format!("{:<16}", theme.theme)),
            theme.mentions,
            ui::dim_value(format!("{} from Q4", theme.trend))
        ));
    }

    lines.push(String::new());
    lines.push(format!("  {}", ui::header("AI Recommendation")));
    lines.push(format!("  {}", fixtures::ADMIN_THEME_RECOMMENDATION));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn star_row_floors_the_score() {
        assert_eq!(star_row(4.5), "★★★★☆");
        assert_eq!(star_row(5.0), "★★★★★");
        assert_eq!(star_row(0.9), "☆☆☆☆☆");
    }

    #[test]
    fn meter_scales_to_width() {
        assert_eq!(meter(0, 10), "░░░░░░░░░░");
        assert_eq!(meter(100, 10), "██████████");
        assert_eq!(meter(65, 20).chars().filter(|&c| c == '█').count(), 13);
    }

    #[test]
    fn dashboard_shows_banner_and_tab_counts() {
        let session = SessionContext::login("dana@acme.com", Role::Employee).unwrap();
        let screen = render_dashboard(&session, "Q1 2025");
        assert!(screen.contains("Welcome back! 👋"));
        assert!(screen.contains(crate::fixtures::WELCOME_BANNER));
        assert!(screen.contains("Pending Requests (2)"));
        assert!(screen.contains("Completed (2)"));
        assert!(screen.contains("Feedback for Alex Rivera"));
    }

    #[test]
    fn summary_lists_every_key_insight() {
        let screen = render_summary();
        for insight in &crate::fixtures::KEY_INSIGHTS {
            assert!(screen.contains(insight.title));
        }
        assert!(screen.contains("Positive Trajectory! 📈"));
        assert!(screen.contains("— Anonymous Peer"));
    }

    #[test]
    fn admin_screen_covers_departments_and_insights() {
        let screen = render_admin("Q1 2025");
        for dept in &crate::fixtures::DEPARTMENTS {
            assert!(screen.contains(dept.dept));
        }
        assert!(screen.contains("Low Participation Alert"));
        assert!(screen.contains("Performance Over Time"));
    }
}
