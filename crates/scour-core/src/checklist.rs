use crate::error::ScourError;
use crate::model::{CleaningSchedulePlan, Frequency};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistStatus {
    #[serde(default)]
    pub daily: bool,
    #[serde(default)]
    pub weekly: bool,
    #[serde(default)]
    pub monthly: bool,
}

impl ChecklistStatus {
    pub fn get(&self, frequency: Frequency) -> bool {
        match frequency {
            Frequency::Daily => self.daily,
            Frequency::Weekly => self.weekly,
            Frequency::Monthly => self.monthly,
        }
    }

    fn get_mut(&mut self, frequency: Frequency) -> &mut bool {
        match frequency {
            Frequency::Daily => &mut self.daily,
            Frequency::Weekly => &mut self.weekly,
            Frequency::Monthly => &mut self.monthly,
        }
    }
}

/// Done/not-done marks keyed by category index, then item index.
///
/// Missing entries read as not done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    pub entries: BTreeMap<usize, BTreeMap<usize, ChecklistStatus>>,
}

impl ChecklistState {
    pub fn is_done(&self, category: usize, item: usize, frequency: Frequency) -> bool {
        self.entries
            .get(&category)
            .and_then(|items| items.get(&item))
            .is_some_and(|s| s.get(frequency))
    }

    /// Flip one slot and return its new value.
    pub fn toggle(&mut self, category: usize, item: usize, frequency: Frequency) -> bool {
        let flag = self
            .entries
            .entry(category)
            .or_default()
            .entry(item)
            .or_default()
            .get_mut(frequency);
        *flag = !*flag;
        *flag
    }

    /// Clear `frequency` for every item, leaving other frequencies alone.
    pub fn reset(&mut self, frequency: Frequency) {
        for items in self.entries.values_mut() {
            for status in items.values_mut() {
                *status.get_mut(frequency) = false;
            }
        }
    }

    /// Number of slots of `frequency` marked done.
    pub fn completed(&self, frequency: Frequency) -> usize {
        self.entries
            .values()
            .flat_map(|items| items.values())
            .filter(|s| s.get(frequency))
            .count()
    }

    /// Check that `category`/`item` exist in `plan` before toggling.
    pub fn toggle_in(
        &mut self,
        plan: &CleaningSchedulePlan,
        category: usize,
        item: usize,
        frequency: Frequency,
    ) -> Result<bool, ScourError> {
        let exists = plan
            .schedule
            .get(category)
            .is_some_and(|c| item < c.items.len());
        if !exists {
            return Err(ScourError::SlotNotFound {
                category,
                item,
                frequency,
            });
        }
        Ok(self.toggle(category, item, frequency))
    }
}

/// Load checklist state; a missing file is an empty checklist.
pub fn load_checklist(path: &Path) -> Result<ChecklistState, ScourError> {
    if !path.exists() {
        return Ok(ChecklistState::default());
    }
    let content = std::fs::read_to_string(path)?;
    let state: ChecklistState = serde_json::from_str(&content)?;
    Ok(state)
}

pub fn save_checklist(state: &ChecklistState, path: &Path) -> Result<(), ScourError> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}
