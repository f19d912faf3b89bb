pub mod associate;

use crate::error::ScourError;
use crate::model::{Chemical, CleaningSchedulePlan, Frequency, TaskDetail};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

pub use associate::{auto_associate, AssociationSummary};

/// Load a schedule plan from a JSON file.
///
/// Accepts the generator's output directly: `chemicalId` may be absent.
pub fn load_schedule(path: &Path) -> Result<CleaningSchedulePlan, ScourError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScourError::ScheduleLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let plan: CleaningSchedulePlan =
        serde_json::from_str(&content).map_err(|e| ScourError::ScheduleLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_schedule(&plan)?;
    Ok(plan)
}

/// Parse a schedule plan from a JSON string (no file path context).
pub fn parse_schedule_str(json: &str) -> Result<CleaningSchedulePlan, ScourError> {
    let plan: CleaningSchedulePlan = serde_json::from_str(json)?;
    validate_schedule(&plan)?;
    Ok(plan)
}

pub fn save_schedule(plan: &CleaningSchedulePlan, path: &Path) -> Result<(), ScourError> {
    let json = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn validate_schedule(plan: &CleaningSchedulePlan) -> Result<(), ScourError> {
    if plan.schedule.is_empty() {
        return Err(ScourError::ScheduleInvalid(
            "schedule must contain at least one category".into(),
        ));
    }
    for category in &plan.schedule {
        if category.category.trim().is_empty() {
            return Err(ScourError::ScheduleInvalid(
                "category name must not be empty".into(),
            ));
        }
        for item in &category.items {
            if item.item_name.trim().is_empty() {
                return Err(ScourError::ScheduleInvalid(format!(
                    "item in category '{}' has an empty name",
                    category.category
                )));
            }
        }
    }
    Ok(())
}

fn slot_mut(
    plan: &mut CleaningSchedulePlan,
    category: usize,
    item: usize,
    frequency: Frequency,
) -> Result<&mut TaskDetail, ScourError> {
    plan.schedule
        .get_mut(category)
        .and_then(|c| c.items.get_mut(item))
        .map(|i| i.slot_mut(frequency))
        .ok_or(ScourError::SlotNotFound {
            category,
            item,
            frequency,
        })
}

/// Set (or clear) a slot's chemical by hand. A manual choice is never
/// overwritten by [`auto_associate`].
pub fn assign_chemical(
    plan: &mut CleaningSchedulePlan,
    category: usize,
    item: usize,
    frequency: Frequency,
    chemical_id: Option<String>,
) -> Result<(), ScourError> {
    slot_mut(plan, category, item, frequency)?.chemical_id = chemical_id;
    Ok(())
}

pub fn update_notes(
    plan: &mut CleaningSchedulePlan,
    category: usize,
    item: usize,
    frequency: Frequency,
    notes: String,
) -> Result<(), ScourError> {
    slot_mut(plan, category, item, frequency)?.notes = Some(notes);
    Ok(())
}

/// A borrowed view of one task slot with its position in the plan.
#[derive(Debug, Clone, Serialize)]
pub struct SlotRef<'a> {
    pub category_index: usize,
    pub item_index: usize,
    pub category: &'a str,
    pub item_name: &'a str,
    pub frequency: Frequency,
    pub detail: &'a TaskDetail,
}

/// All slots of the given frequencies, in plan order (category, item,
/// then daily/weekly/monthly).
pub fn slots<'a>(plan: &'a CleaningSchedulePlan, frequencies: &[Frequency]) -> Vec<SlotRef<'a>> {
    let mut out = Vec::new();
    for (ci, category) in plan.schedule.iter().enumerate() {
        for (ii, item) in category.items.iter().enumerate() {
            for frequency in Frequency::ALL {
                if !frequencies.contains(&frequency) {
                    continue;
                }
                out.push(SlotRef {
                    category_index: ci,
                    item_index: ii,
                    category: &category.category,
                    item_name: &item.item_name,
                    frequency,
                    detail: item.slot(frequency),
                });
            }
        }
    }
    out
}

/// Slots whose chemical id is not in the catalog (e.g. the chemical was
/// deleted after association).
pub fn dangling_references<'a>(
    plan: &'a CleaningSchedulePlan,
    chemicals: &[Chemical],
) -> Vec<SlotRef<'a>> {
    let known: HashSet<&str> = chemicals.iter().map(|c| c.id.as_str()).collect();
    slots(plan, &Frequency::ALL)
        .into_iter()
        .filter(|s| {
            s.detail
                .chemical_id
                .as_deref()
                .is_some_and(|id| !id.is_empty() && !known.contains(id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = r#"{
        "schedule": [
            {
                "category": "Cooking Equipment",
                "items": [
                    {
                        "itemName": "Convotherm Combi Oven",
                        "daily": { "task": "Wipe stainless steel exterior", "notes": "Ensure unit is cool" },
                        "weekly": { "task": "Run descaling cycle" },
                        "monthly": { "task": "N/A", "notes": "N/A" }
                    }
                ]
            },
            {
                "category": "Live Buffet Equipment",
                "items": [
                    {
                        "itemName": "Sneeze Guard",
                        "daily": { "task": "Clean glass panels" },
                        "weekly": { "task": "Polish frame" },
                        "monthly": { "task": "Inspect seals" }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_generator_output() {
        let plan = parse_schedule_str(GENERATED).unwrap();
        assert_eq!(plan.schedule.len(), 2);
        assert_eq!(plan.slot_count(), 6);
        let oven = &plan.schedule[0].items[0];
        assert_eq!(oven.item_name, "Convotherm Combi Oven");
        assert!(oven.daily.chemical_id.is_none());
        assert!(oven.weekly.notes.is_none());
    }

    #[test]
    fn test_empty_schedule_rejected() {
        assert!(matches!(
            parse_schedule_str(r#"{"schedule": []}"#),
            Err(ScourError::ScheduleInvalid(_))
        ));
    }

    #[test]
    fn test_assign_and_clear_chemical() {
        let mut plan = parse_schedule_str(GENERATED).unwrap();
        assign_chemical(&mut plan, 1, 0, Frequency::Daily, Some("glass".into())).unwrap();
        assert_eq!(plan.schedule[1].items[0].daily.chemical_id.as_deref(), Some("glass"));

        assign_chemical(&mut plan, 1, 0, Frequency::Daily, None).unwrap();
        assert!(plan.schedule[1].items[0].daily.chemical_id.is_none());
    }

    #[test]
    fn test_out_of_range_slot_is_an_error() {
        let mut plan = parse_schedule_str(GENERATED).unwrap();
        let err = assign_chemical(&mut plan, 0, 5, Frequency::Weekly, None).unwrap_err();
        assert!(matches!(
            err,
            ScourError::SlotNotFound { category: 0, item: 5, frequency: Frequency::Weekly }
        ));
        assert!(update_notes(&mut plan, 9, 0, Frequency::Daily, "x".into()).is_err());
    }

    #[test]
    fn test_update_notes() {
        let mut plan = parse_schedule_str(GENERATED).unwrap();
        update_notes(&mut plan, 0, 0, Frequency::Monthly, "Call service".into()).unwrap();
        assert_eq!(
            plan.schedule[0].items[0].monthly.notes.as_deref(),
            Some("Call service")
        );
    }

    #[test]
    fn test_slots_filtered_by_frequency() {
        let plan = parse_schedule_str(GENERATED).unwrap();
        let weekly = slots(&plan, &[Frequency::Weekly]);
        assert_eq!(weekly.len(), 2);
        assert!(weekly.iter().all(|s| s.frequency == Frequency::Weekly));
        assert_eq!(weekly[1].item_name, "Sneeze Guard");
        assert_eq!(slots(&plan, &Frequency::ALL).len(), 6);
        assert!(slots(&plan, &[]).is_empty());
    }

    #[test]
    fn test_dangling_references() {
        let mut plan = parse_schedule_str(GENERATED).unwrap();
        assign_chemical(&mut plan, 0, 0, Frequency::Daily, Some("gone".into())).unwrap();
        assign_chemical(&mut plan, 0, 0, Frequency::Weekly, Some("kept".into())).unwrap();
        let catalog = vec![Chemical {
            id: "kept".into(),
            name: "Kept".into(),
            ..Default::default()
        }];
        let dangling = dangling_references(&plan, &catalog);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].frequency, Frequency::Daily);
    }
}
