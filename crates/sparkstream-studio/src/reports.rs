//! Read models behind the dashboard, analytics, and admin screens.
//!
//! The dashboard is computed from saved posts. Analytics and the admin
//! overview are fixed demo figures; there is no tracking backend.

use serde::Serialize;
use sparkstream_core::{PostStatus, SocialPost};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Newest first.
    pub posts: Vec<SocialPost>,
    pub scheduled_count: usize,
    pub posted_count: usize,
    pub draft_count: usize,
    /// Mean score over posts that have one (unanalysed drafts score 0).
    pub average_virality: Option<f64>,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_posts(posts: &[SocialPost]) -> Self {
        let count = |status: PostStatus| posts.iter().filter(|p| p.status == status).count();

        let scored: Vec<i32> = posts
            .iter()
            .map(|p| p.virality_score)
            .filter(|score| *score > 0)
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let average_virality = (!scored.is_empty()).then(|| {
            scored.iter().map(|s| f64::from(*s)).sum::<f64>() / scored.len() as f64
        });

        Self {
            posts: posts.to_vec(),
            scheduled_count: count(PostStatus::Scheduled),
            posted_count: count(PostStatus::Posted),
            draft_count: count(PostStatus::Draft),
            average_virality,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyMetric {
    pub day: &'static str,
    pub engagement: u32,
    pub views: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopContent {
    pub title: &'static str,
    pub views: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    pub weekly: Vec<DailyMetric>,
    pub top_content: Vec<TopContent>,
    pub total_engagement: u32,
    pub total_views: u32,
    pub best_day: &'static str,
}

const WEEKLY: [DailyMetric; 7] = [
    DailyMetric { day: "Mon", engagement: 400, views: 2400 },
    DailyMetric { day: "Tue", engagement: 300, views: 1398 },
    DailyMetric { day: "Wed", engagement: 200, views: 9800 },
    DailyMetric { day: "Thu", engagement: 278, views: 3908 },
    DailyMetric { day: "Fri", engagement: 189, views: 4800 },
    DailyMetric { day: "Sat", engagement: 239, views: 3800 },
    DailyMetric { day: "Sun", engagement: 349, views: 4300 },
];

#[must_use]
pub fn analytics_report() -> AnalyticsReport {
    let best_day = WEEKLY
        .iter()
        .max_by_key(|m| m.views)
        .map_or("", |m| m.day);

    AnalyticsReport {
        weekly: WEEKLY.to_vec(),
        top_content: vec![
            TopContent {
                title: "5 ways to survive finals week...",
                views: "+12.5k views",
            },
            TopContent {
                title: "Campus food hacks you didn't know",
                views: "+8.2k views",
            },
        ],
        total_engagement: WEEKLY.iter().map(|m| m.engagement).sum(),
        total_views: WEEKLY.iter().map(|m| m.views).sum(),
        best_day,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub description: &'static str,
    pub when: &'static str,
    pub amount_usd: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlaggedContent {
    pub excerpt: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub version: &'static str,
    pub stats: Vec<AdminStat>,
    pub recent_transactions: Vec<Transaction>,
    pub flagged_content: Vec<FlaggedContent>,
}

#[must_use]
pub fn admin_overview() -> AdminOverview {
    let unlock = Transaction {
        description: "Premium Collab Unlock",
        when: "2 mins ago",
        amount_usd: "+$150.00",
        status: "Success",
    };
    let flagged = FlaggedContent {
        excerpt: "How to hack university grades...",
        reason: "Academic Dishonesty",
    };

    AdminOverview {
        version: "v2.0.1 (Stable)",
        stats: vec![
            AdminStat { label: "Total Users", value: "1,248", change: "+12%" },
            AdminStat { label: "Revenue (Collabs)", value: "$4,320", change: "+24%" },
            AdminStat { label: "Reports Pending", value: "12", change: "+5" },
            AdminStat { label: "System Uptime", value: "30d", change: "98%" },
        ],
        recent_transactions: vec![unlock; 4],
        flagged_content: vec![flagged; 2],
    }
}
