// src/domain/stats.rs

use crate::domain::models::{Complaint, ComplaintCategory, ComplaintStatus};
use serde::Serialize;

/// Complaint counts for one category. `outstanding` is always
/// `total - resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub resolved: usize,
    pub outstanding: usize,
}

/// Stats for every category, in declaration order. Feeds the dashboard
/// table and the JSON stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: &'static str,
    pub total: usize,
    pub resolved: usize,
    pub outstanding: usize,
}

pub fn complaint_breakdown(complaints: &[Complaint]) -> Vec<CategoryBreakdown> {
    ComplaintCategory::ALL
        .iter()
        .map(|&category| {
            let stats = compute_category_stats(complaints, category);
            CategoryBreakdown {
                category: category.as_str(),
                total: stats.total,
                resolved: stats.resolved,
                outstanding: stats.outstanding,
            }
        })
        .collect()
}

pub fn compute_category_stats(complaints: &[Complaint], category: ComplaintCategory) -> CategoryStats {
    let total = complaints.iter().filter(|c| c.category == category).count();
    let resolved = complaints
        .iter()
        .filter(|c| c.category == category && c.status == ComplaintStatus::Solved)
        .count();
    CategoryStats {
        total,
        resolved,
        outstanding: total - resolved,
    }
}
