use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Occupancy state of a property. A vacant property never carries a renter;
/// the seed data and the fee-assignment handler both uphold that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyStatus {
    Occupied,
    Vacant,
    UnderMaintenance,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Occupied => "Occupied",
            PropertyStatus::Vacant => "Vacant",
            PropertyStatus::UnderMaintenance => "Under Maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Occupied" => Some(PropertyStatus::Occupied),
            "Vacant" => Some(PropertyStatus::Vacant),
            "Under Maintenance" => Some(PropertyStatus::UnderMaintenance),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub owner: String,
    pub renter: Option<String>,
    pub location: String,
    pub block_number: String,
    pub status: PropertyStatus,
    pub cluster: String,
    pub company: String,
    pub group: String,
    /// Monthly maintenance fee, whole currency units.
    pub fee: i64,
}

impl Property {
    /// Every textual field a free-text search runs against.
    pub fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.clone(),
            self.owner.clone(),
            self.location.clone(),
            self.block_number.clone(),
            self.status.as_str().to_string(),
            self.cluster.clone(),
            self.company.clone(),
            self.group.clone(),
        ];
        if let Some(renter) = &self.renter {
            fields.push(renter.clone());
        }
        fields
    }
}

/// The fixed set of complaint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplaintCategory {
    MaintenanceIssues,
    NoiseComplaints,
    SecurityAndSafety,
    ParkingProblems,
    CommunityRulesViolations,
    PropertyValueConcerns,
    EnvironmentalIssues,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 7] = [
        ComplaintCategory::MaintenanceIssues,
        ComplaintCategory::NoiseComplaints,
        ComplaintCategory::SecurityAndSafety,
        ComplaintCategory::ParkingProblems,
        ComplaintCategory::CommunityRulesViolations,
        ComplaintCategory::PropertyValueConcerns,
        ComplaintCategory::EnvironmentalIssues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintCategory::MaintenanceIssues => "Maintenance Issues",
            ComplaintCategory::NoiseComplaints => "Noise Complaints",
            ComplaintCategory::SecurityAndSafety => "Security and Safety",
            ComplaintCategory::ParkingProblems => "Parking Problems",
            ComplaintCategory::CommunityRulesViolations => "Community Rules Violations",
            ComplaintCategory::PropertyValueConcerns => "Property Value Concerns",
            ComplaintCategory::EnvironmentalIssues => "Environmental Issues",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle: created pending, moves to solved via an admin response,
/// terminal once solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Pending,
    Solved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Solved => "solved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ComplaintStatus::Pending),
            "solved" => Some(ComplaintStatus::Solved),
            _ => None,
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Complaint {
    pub id: i64,
    pub category: ComplaintCategory,
    pub description: String,
    pub date: NaiveDate,
    pub status: ComplaintStatus,
    pub response: Option<String>,
    pub photo: Option<String>,
}

impl Complaint {
    pub fn search_fields(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.category.as_str().to_string(),
            self.date.to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Event,
    Announcement,
    Update,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 3] = [
        NewsCategory::Event,
        NewsCategory::Announcement,
        NewsCategory::Update,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Event => "Event",
            NewsCategory::Announcement => "Announcement",
            NewsCategory::Update => "Update",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope tag controlling which audience segment a news item reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastLevel {
    Group,
    Company,
    Cluster,
}

impl BroadcastLevel {
    pub const ALL: [BroadcastLevel; 3] = [
        BroadcastLevel::Group,
        BroadcastLevel::Company,
        BroadcastLevel::Cluster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastLevel::Group => "Group Level",
            BroadcastLevel::Company => "Company Level",
            BroadcastLevel::Cluster => "Cluster Level",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == s)
    }
}

impl fmt::Display for BroadcastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub category: NewsCategory,
    pub details: String,
    pub date: NaiveDate,
    pub broadcast_level: BroadcastLevel,
}

impl NewsItem {
    pub fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.category.as_str().to_string(),
            self.broadcast_level.as_str().to_string(),
        ]
    }
}

/// A resident or administrator account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub property_id: Option<String>,
    pub company: Option<String>,
    pub group: Option<String>,
    pub status: ApprovalStatus,
    pub dob: Option<NaiveDate>,
    pub contact_number: String,
    pub email: String,
}

impl User {
    pub fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.role.clone(),
            self.status.as_str().to_string(),
            self.contact_number.clone(),
            self.email.clone(),
        ];
        if let Some(property_id) = &self.property_id {
            fields.push(property_id.clone());
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "rejected" => Some(ApprovalStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One monthly maintenance-fee payment against a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub property_id: String,
    pub month: String,
    pub amount_due: i64,
    pub amount_paid: i64,
    pub date_paid: NaiveDate,
}

/// One row of the static role-to-scope grants table. Display-only; the
/// only grant enforced in code is the property-visibility filter.
pub struct AccessGrant {
    pub role: &'static str,
    pub view: &'static str,
    pub edit: &'static str,
    pub approve: &'static str,
    pub other: &'static str,
}

pub const ACCESS_GRANTS: [AccessGrant; 6] = [
    AccessGrant { role: "Group Director", view: "All", edit: "All", approve: "All", other: "-" },
    AccessGrant { role: "Company Director", view: "Company", edit: "Company", approve: "Company", other: "-" },
    AccessGrant { role: "Estate Manager", view: "Estate", edit: "Estate", approve: "Complaints", other: "-" },
    AccessGrant { role: "Administrator", view: "All", edit: "All", approve: "All", other: "-" },
    AccessGrant { role: "Owner", view: "Own", edit: "Own", approve: "-", other: "Submit Complaints" },
    AccessGrant { role: "Renter", view: "Own", edit: "Own", approve: "-", other: "Submit Complaints" },
];
