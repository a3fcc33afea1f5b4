use serde::{Deserialize, Serialize};

/// Completion label used when a contract carries no completion rate.
pub const UNSPECIFIED: &str = "غير محدد";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub university: String,
    pub college: String,
    pub program: String,
    pub degree: String,
    #[serde(default)]
    pub contract_status: String,
    #[serde(default)]
    pub document_status: String,
    pub contract_start: Option<String>,
    pub contract_end: Option<String>,
    pub completion_rate: Option<String>,
    pub document_received: Option<String>,
    pub scheduled_visit: Option<String>,
    pub department: String,
    pub notes: Option<String>,
}

impl Contract {
    /// Completion rate with the "unspecified" label standing in for a missing value.
    pub fn completion_label(&self) -> &str {
        match self.completion_rate.as_deref() {
            Some(rate) if !rate.is_empty() => rate,
            _ => UNSPECIFIED,
        }
    }

    pub fn known_department(&self) -> Option<Department> {
        Department::from_label(&self.department)
    }
}

/// The closed set of departments that own accreditation programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Department {
    Engineering,
    Health,
    Humanities,
    Islamic,
    Scientific,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Health,
        Department::Humanities,
        Department::Islamic,
        Department::Scientific,
    ];

    /// Department name exactly as it appears on contract records.
    pub fn label(self) -> &'static str {
        match self {
            Department::Engineering => "إدارة برامج العلوم الهندسية وعلوم الحاسب",
            Department::Health => "إدارة برامج العلوم الصحية",
            Department::Humanities => "إدارة برامج العلوم الإنسانية والتربوية",
            Department::Islamic => "إدارة برامج العلوم الإسلامية والعربية",
            Department::Scientific => "إدارة برامج التخصصات العلمية",
        }
    }

    /// Display name of the specialization the department oversees.
    pub fn specialization_name(self) -> &'static str {
        match self {
            Department::Engineering => "التخصصات الهندسية وعلوم الحاسب",
            Department::Health => "التخصصات الصحية",
            Department::Humanities => "العلوم الإنسانية والتربوية",
            Department::Islamic => "العلوم الإسلامية والعربية",
            Department::Scientific => "التخصصات العلمية",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Department::Engineering => "engineering",
            Department::Health => "health",
            Department::Humanities => "humanities",
            Department::Islamic => "islamic",
            Department::Scientific => "scientific",
        }
    }

    pub fn from_label(label: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|dept| dept.label() == label)
    }

    pub fn from_key(key: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|dept| dept.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryBucket {
    Expired,
    FirstHalf2025,
    SecondHalf2025,
    Year2026Plus,
}

impl ExpiryBucket {
    pub const ALL: [ExpiryBucket; 4] = [
        ExpiryBucket::Expired,
        ExpiryBucket::FirstHalf2025,
        ExpiryBucket::SecondHalf2025,
        ExpiryBucket::Year2026Plus,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ExpiryBucket::Expired => "Expired (through 2024)",
            ExpiryBucket::FirstHalf2025 => "Ending January-June 2025",
            ExpiryBucket::SecondHalf2025 => "Ending July-December 2025",
            ExpiryBucket::Year2026Plus => "Ending 2026 or later",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusBucket {
    OnTime,
    Delayed,
    NotScheduled,
}

impl StatusBucket {
    /// Badge class used by the rendering layer.
    pub fn badge_class(self) -> &'static str {
        match self {
            StatusBucket::OnTime => "ongoing",
            StatusBucket::Delayed => "delayed",
            StatusBucket::NotScheduled => "not-scheduled",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub text: Option<String>,
    pub degree: Option<String>,
    pub document_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub total: usize,
    pub entries: Vec<DistributionEntry>,
}

impl Distribution {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_contracts: usize,
    pub expired_count: usize,
    pub first_half_2025_count: usize,
    pub second_half_2025_count: usize,
    pub year_2026_plus_count: usize,
    pub ending_2025_count: usize,
    pub university_count: usize,
    pub degree_distribution: Distribution,
    pub completion_distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityGroup<'a> {
    pub university: String,
    pub degree_count: usize,
    pub contracts: Vec<&'a Contract>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentView<'a> {
    pub department: Department,
    pub contracts: Vec<&'a Contract>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCount {
    pub date: String,
    pub count: usize,
}
