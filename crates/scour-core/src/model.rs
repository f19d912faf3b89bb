use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A cleaning product in the user's catalog.
///
/// Field names serialize in camelCase so catalogs exported by the web
/// front end load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active_ingredient: String,
    /// Comma-separated surfaces/equipment this product is meant for.
    #[serde(default)]
    pub used_for: String,
    #[serde(default)]
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Base64-encoded image, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toxicological_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_protection: Option<String>,
}

impl Chemical {
    /// The `used_for` keywords: lowercased, trimmed, empty entries dropped.
    pub fn keywords(&self) -> BTreeSet<String> {
        self.used_for
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A chemical record before it has been given an id (bulk import output).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChemical {
    pub name: String,
    #[serde(default)]
    pub active_ingredient: String,
    #[serde(default)]
    pub used_for: String,
    #[serde(default)]
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toxicological_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_protection: Option<String>,
}

impl NewChemical {
    pub fn with_id(self, id: String) -> Chemical {
        Chemical {
            id,
            name: self.name,
            active_ingredient: self.active_ingredient,
            used_for: self.used_for,
            application: self.application,
            color: self.color,
            image: self.image,
            toxicological_info: self.toxicological_info,
            personal_protection: self.personal_protection,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn from_str_loose(s: &str) -> Option<Frequency> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Some(Frequency::Daily),
            "weekly" | "week" | "w" => Some(Frequency::Weekly),
            "monthly" | "month" | "m" => Some(Frequency::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        };
        f.pad(name)
    }
}

/// One cleaning task slot: what to do, optional notes, and the chemical
/// associated with it (if any).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub chemical_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub item_name: String,
    pub daily: TaskDetail,
    pub weekly: TaskDetail,
    pub monthly: TaskDetail,
}

impl ScheduleItem {
    pub fn slot(&self, frequency: Frequency) -> &TaskDetail {
        match frequency {
            Frequency::Daily => &self.daily,
            Frequency::Weekly => &self.weekly,
            Frequency::Monthly => &self.monthly,
        }
    }

    pub fn slot_mut(&mut self, frequency: Frequency) -> &mut TaskDetail {
        match frequency {
            Frequency::Daily => &mut self.daily,
            Frequency::Weekly => &mut self.weekly,
            Frequency::Monthly => &mut self.monthly,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCategory {
    pub category: String,
    pub items: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSchedulePlan {
    pub schedule: Vec<ScheduleCategory>,
}

impl CleaningSchedulePlan {
    /// Total number of task slots (three per item).
    pub fn slot_count(&self) -> usize {
        self.schedule.iter().map(|c| c.items.len() * 3).sum()
    }
}
