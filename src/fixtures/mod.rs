//! Seed data for every screen.
//!
//! The product ships with a fixed demo dataset instead of a backend; these
//! tables are that dataset, verbatim. Rendering code treats them as the only
//! source of truth so the numbers on screen always agree with the tests.

use crate::draft::FeedbackField;
use rand::seq::IndexedRandom;

// ── App copy ─────────────────────────────────────────────────────

pub const APP_NAME: &str = "Acme Quarterly Peer Feedback";
pub const APP_TAGLINE: &str = "Your quarterly peer feedback companion";
pub const DEMO_MODE_NOTE: &str = "Demo mode - No actual authentication required";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

// ── Give-feedback screen ─────────────────────────────────────────

/// The demo review target shown in the form header.
pub const REVIEW_PEER_NAME: &str = "Sarah Chen";
pub const REVIEW_PEER_ROLE: &str = "Product Manager";

pub const STRENGTHS_SUGGESTIONS: [&str; 2] = [
    "In our Q4 launch meeting, Sarah clearly explained complex technical concepts to stakeholders, which helped everyone align on priorities (Situation-Behavior-Impact)",
    "During the sprint planning, Sarah's ability to prioritize features based on user impact was impressive",
];

pub const GROWTH_SUGGESTIONS: [&str; 2] = [
    "Consider scheduling regular check-ins to ensure all team members have updates on project status",
    "In future presentations, adding more data visualizations could help communicate findings more effectively",
];

#[must_use]
pub fn field_description(field: FeedbackField) -> Option<&'static str> {
    match field {
        FeedbackField::Strengths => Some(
            "Share specific examples using Situation-Behavior-Impact: What was the context? What did they do? What was the positive result?",
        ),
        FeedbackField::Growth => Some(
            "What areas could they develop further? Be constructive and specific about behaviors, not personality traits.",
        ),
        FeedbackField::Additional => Some("Additional context for your rating (Optional)"),
    }
}

#[must_use]
pub fn field_placeholder(field: FeedbackField) -> &'static str {
    match field {
        FeedbackField::Strengths => {
            "Example: During our Q4 product launch (Situation), Sarah clearly communicated technical requirements to the team (Behavior), which resulted in zero deployment issues and on-time delivery (Impact)."
        }
        FeedbackField::Growth => {
            "Example: To enhance cross-team collaboration, consider scheduling brief weekly syncs with the engineering team to share product updates proactively."
        }
        FeedbackField::Additional => {
            "Share any additional insights about your collaboration..."
        }
    }
}

/// Random quick-fill for the "AI Example" button. Only the two tone-checked
/// prose fields have canned examples.
pub fn ai_example(field: FeedbackField) -> Option<&'static str> {
    let pool: &[&str] = match field {
        FeedbackField::Strengths => &STRENGTHS_SUGGESTIONS,
        FeedbackField::Growth => &GROWTH_SUGGESTIONS,
        FeedbackField::Additional => return None,
    };
    pool.choose(&mut rand::rng()).copied()
}

#[must_use]
pub fn vibe_label(rating: u8) -> Option<&'static str> {
    match rating {
        5 => Some("Outstanding! 🌟"),
        4 => Some("Great Work! 👏"),
        3 => Some("Good! 👍"),
        2 => Some("Room to Grow 💪"),
        1 => Some("Needs Support 🤝"),
        _ => None,
    }
}

// ── Peers ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peer {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    /// Why the AI recommends them; empty for peers outside the suggested set.
    pub reason: &'static str,
}

pub const PEERS: [Peer; 5] = [
    Peer {
        id: "1",
        name: "Sarah Chen",
        role: "Product Manager",
        reason: "Frequent collaborator",
    },
    Peer {
        id: "2",
        name: "Marcus Williams",
        role: "Senior Developer",
        reason: "Same project team",
    },
    Peer {
        id: "3",
        name: "Elena Rodriguez",
        role: "UX Designer",
        reason: "Cross-functional partner",
    },
    Peer {
        id: "4",
        name: "Jordan Lee",
        role: "Engineering Manager",
        reason: "",
    },
    Peer {
        id: "5",
        name: "Alex Rivera",
        role: "Data Analyst",
        reason: "",
    },
];

/// The first three peers are the AI-suggested set.
#[must_use]
pub fn suggested_peers() -> &'static [Peer] {
    &PEERS[..3]
}

#[must_use]
pub fn peer_by_id(id: &str) -> Option<&'static Peer> {
    PEERS.iter().find(|peer| peer.id == id)
}

// ── Request screen copy ──────────────────────────────────────────

pub const CONTEXT_QUICK_FILLS: [(&str, &str); 2] = [
    (
        "Collaboration",
        "I'd appreciate feedback on my collaboration and teamwork",
    ),
    (
        "Communication",
        "Looking for insights on my communication style",
    ),
];

pub const ANONYMITY_LABEL: &str = "Keep my name hidden";
pub const ANONYMITY_NOTE: &str =
    "Your identity will be protected. Peers won't see who requested feedback.";

// ── Employee dashboard ───────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct PendingRequest {
    pub from: &'static str,
    pub role: &'static str,
    pub requested: &'static str,
    pub kind: &'static str,
}

pub const PENDING_REQUESTS: [PendingRequest; 2] = [
    PendingRequest {
        from: "Sarah Chen",
        role: "Product Manager",
        requested: "2 days ago",
        kind: "Requested Peership",
    },
    PendingRequest {
        from: "Marcus Williams",
        role: "Senior Developer",
        requested: "1 week ago",
        kind: "Suggested Peership",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CompletedFeedback {
    pub to: &'static str,
    pub quarter: &'static str,
    pub vibe_score: f32,
    pub completed: &'static str,
}

pub const COMPLETED_FEEDBACK: [CompletedFeedback; 2] = [
    CompletedFeedback {
        to: "Alex Rivera",
        quarter: "Q4 2024",
        vibe_score: 4.5,
        completed: "1 week ago",
    },
    CompletedFeedback {
        to: "Jordan Lee",
        quarter: "Q4 2024",
        vibe_score: 5.0,
        completed: "2 weeks ago",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct DashboardStats {
    pub pending: u32,
    pub completed: u32,
    pub avg_vibe: f32,
    pub total_q1: u32,
    pub days_remaining: u32,
}

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    pending: 2,
    completed: 8,
    avg_vibe: 4.7,
    total_q1: 15,
    days_remaining: 12,
};

pub const WELCOME_BANNER: &str =
    "Q1 2025 feedback period is now open. Share your insights and help your peers grow!";

// ── Personal summary ─────────────────────────────────────────────

pub const SUMMARY_PERIOD: &str = "Q4 2024 • Based on 10 peer reviews";

#[derive(Debug, Clone, Copy)]
pub struct SentimentSlice {
    pub label: &'static str,
    pub percent: u32,
}

pub const SENTIMENT: [SentimentSlice; 3] = [
    SentimentSlice {
        label: "Positive",
        percent: 65,
    },
    SentimentSlice {
        label: "Constructive",
        percent: 25,
    },
    SentimentSlice {
        label: "Neutral",
        percent: 10,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub theme: &'static str,
    pub mentions: u32,
    pub trend: &'static str,
}

pub const TOP_THEMES: [Theme; 4] = [
    Theme {
        theme: "Communication",
        mentions: 12,
        trend: "+2",
    },
    Theme {
        theme: "Leadership",
        mentions: 8,
        trend: "+3",
    },
    Theme {
        theme: "Problem Solving",
        mentions: 7,
        trend: "0",
    },
    Theme {
        theme: "Collaboration",
        mentions: 6,
        trend: "+1",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct QuarterTrend {
    pub quarter: &'static str,
    pub vibe: f32,
    pub feedback: u32,
}

pub const QUARTERLY_TRENDS: [QuarterTrend; 3] = [
    QuarterTrend {
        quarter: "Q2 2024",
        vibe: 4.2,
        feedback: 6,
    },
    QuarterTrend {
        quarter: "Q3 2024",
        vibe: 4.5,
        feedback: 8,
    },
    QuarterTrend {
        quarter: "Q4 2024",
        vibe: 4.7,
        feedback: 10,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct KeyInsight {
    pub title: &'static str,
    pub insight: &'static str,
}

pub const KEY_INSIGHTS: [KeyInsight; 3] = [
    KeyInsight {
        title: "Your Superpower",
        insight: "Team members consistently praise your clear communication, especially in explaining complex technical concepts to non-technical stakeholders.",
    },
    KeyInsight {
        title: "Growth Opportunity",
        insight: "Consider improving meeting time management. Several peers noted that discussions sometimes run over, impacting productivity.",
    },
    KeyInsight {
        title: "Recent Improvement",
        insight: "Your responsiveness to feedback requests has improved by 40% compared to Q3. Peers appreciate your quick turnaround times!",
    },
];

pub const AI_RECOMMENDATIONS: [&str; 3] = [
    "Setting clear agendas before meetings to improve time management",
    "Continuing your strong communication practices with new team members",
    "Requesting more feedback on cross-functional collaboration in Q1 2025",
];

pub const SAMPLE_QUOTES: [&str; 2] = [
    "Always available to help explain complex systems. Makes technical discussions accessible to everyone.",
    "Great at problem-solving under pressure. Really stepped up during the Q4 launch.",
];

pub const TRAJECTORY_NOTE: &str = "You've shown consistent improvement over the past 3 quarters. \
     Your vibe score increased by 12% and you're receiving 67% more feedback, \
     indicating stronger peer engagement.";

// ── Admin dashboard ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct OrgMetrics {
    pub participation_rate: u32,
    pub avg_vibe_score: f32,
    pub total_feedback: u32,
    pub growth_from_last_q: u32,
}

pub const ORG_METRICS: OrgMetrics = OrgMetrics {
    participation_rate: 78,
    avg_vibe_score: 4.3,
    total_feedback: 145,
    growth_from_last_q: 12,
};

#[derive(Debug, Clone, Copy)]
pub struct DepartmentStats {
    pub dept: &'static str,
    pub participation: u32,
    pub avg_vibe: f32,
    pub feedback: u32,
    pub top_theme: &'static str,
}

pub const DEPARTMENTS: [DepartmentStats; 5] = [
    DepartmentStats {
        dept: "Engineering",
        participation: 85,
        avg_vibe: 4.5,
        feedback: 42,
        top_theme: "Communication",
    },
    DepartmentStats {
        dept: "Product",
        participation: 75,
        avg_vibe: 4.2,
        feedback: 28,
        top_theme: "Leadership",
    },
    DepartmentStats {
        dept: "Design",
        participation: 82,
        avg_vibe: 4.6,
        feedback: 31,
        top_theme: "Collaboration",
    },
    DepartmentStats {
        dept: "Sales",
        participation: 65,
        avg_vibe: 4.0,
        feedback: 24,
        top_theme: "Problem Solving",
    },
    DepartmentStats {
        dept: "Marketing",
        participation: 70,
        avg_vibe: 4.1,
        feedback: 20,
        top_theme: "Creativity",
    },
];

/// Participation badge thresholds copied from the department table.
#[must_use]
pub fn participation_grade(participation: u32) -> &'static str {
    if participation >= 80 {
        "Excellent"
    } else if participation >= 70 {
        "Good"
    } else {
        "Needs Attention"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuarterComparison {
    pub quarter: &'static str,
    pub participation: u32,
    pub avg_vibe: f32,
    pub feedback: u32,
}

pub const QUARTERLY_COMPARISON: [QuarterComparison; 4] = [
    QuarterComparison {
        quarter: "Q2 2024",
        participation: 62,
        avg_vibe: 4.0,
        feedback: 98,
    },
    QuarterComparison {
        quarter: "Q3 2024",
        participation: 70,
        avg_vibe: 4.1,
        feedback: 122,
    },
    QuarterComparison {
        quarter: "Q4 2024",
        participation: 75,
        avg_vibe: 4.2,
        feedback: 130,
    },
    QuarterComparison {
        quarter: "Q1 2025",
        participation: 78,
        avg_vibe: 4.3,
        feedback: 145,
    },
];

pub const ORG_THEMES: [Theme; 5] = [
    Theme {
        theme: "Communication",
        mentions: 87,
        trend: "+12%",
    },
    Theme {
        theme: "Leadership",
        mentions: 64,
        trend: "+8%",
    },
    Theme {
        theme: "Collaboration",
        mentions: 52,
        trend: "+15%",
    },
    Theme {
        theme: "Problem Solving",
        mentions: 48,
        trend: "+5%",
    },
    Theme {
        theme: "Innovation",
        mentions: 41,
        trend: "+20%",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct AdminInsight {
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
}

pub const ADMIN_INSIGHTS: [AdminInsight; 3] = [
    AdminInsight {
        kind: "warning",
        title: "Low Participation Alert",
        description: "Sales department showing 15% below target participation. Recommended action: Send targeted reminders and schedule 1:1 check-ins.",
        priority: "high",
    },
    AdminInsight {
        kind: "success",
        title: "Strong Growth Area",
        description: "Engineering team shows 22% improvement in cross-functional collaboration scores. Continue supporting their team-building initiatives.",
        priority: "medium",
    },
    AdminInsight {
        kind: "info",
        title: "Communication Theme Rising",
        description: "Communication is the #1 mentioned theme with 12% growth. Consider running company-wide communication workshops in Q2.",
        priority: "medium",
    },
];

pub const ADMIN_THEME_RECOMMENDATION: &str = "Communication is showing the strongest growth \
     (+12%). Consider organizing cross-departmental communication workshops or lunch & learns \
     in Q2 2025 to capitalize on this momentum. Sales department would benefit most from these \
     initiatives given their lower participation rates.";
