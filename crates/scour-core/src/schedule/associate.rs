use crate::matching::find_best_chemical;
use crate::model::{Chemical, CleaningSchedulePlan, Frequency};
use serde::{Deserialize, Serialize};

/// What happened to each slot during auto-association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationSummary {
    /// Empty slots that received a chemical.
    pub filled: usize,
    /// Empty slots for which nothing matched.
    pub unmatched: usize,
    /// Slots that already had a chemical and were left alone.
    pub kept: usize,
}

/// Fill every slot without a chemical with the matcher's suggestion.
///
/// Slots that already reference a chemical (picked by hand or by an earlier
/// pass) are never overwritten. With an empty catalog the plan is returned
/// unchanged.
pub fn auto_associate(
    plan: &CleaningSchedulePlan,
    chemicals: &[Chemical],
) -> (CleaningSchedulePlan, AssociationSummary) {
    let mut out = plan.clone();
    let mut summary = AssociationSummary::default();

    if chemicals.is_empty() {
        summary.kept = count_assigned(plan);
        summary.unmatched = plan.slot_count() - summary.kept;
        return (out, summary);
    }

    for category in &mut out.schedule {
        for item in &mut category.items {
            for frequency in Frequency::ALL {
                let item_name = item.item_name.as_str();
                let slot = match frequency {
                    Frequency::Daily => &mut item.daily,
                    Frequency::Weekly => &mut item.weekly,
                    Frequency::Monthly => &mut item.monthly,
                };
                if has_chemical(slot.chemical_id.as_deref()) {
                    summary.kept += 1;
                    continue;
                }
                match find_best_chemical(item_name, &slot.task, chemicals) {
                    Some(id) => {
                        slot.chemical_id = Some(id);
                        summary.filled += 1;
                    }
                    None => summary.unmatched += 1,
                }
            }
        }
    }

    tracing::debug!(
        filled = summary.filled,
        unmatched = summary.unmatched,
        kept = summary.kept,
        "auto-associated chemicals"
    );
    (out, summary)
}

/// An empty-string id counts as unassigned, as the web front end treats it.
fn has_chemical(id: Option<&str>) -> bool {
    id.is_some_and(|id| !id.is_empty())
}

fn count_assigned(plan: &CleaningSchedulePlan) -> usize {
    plan.schedule
        .iter()
        .flat_map(|c| &c.items)
        .flat_map(|i| Frequency::ALL.map(move |f| i.slot(f)))
        .filter(|d| has_chemical(d.chemical_id.as_deref()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScheduleCategory, ScheduleItem, TaskDetail};

    fn task(text: &str) -> TaskDetail {
        TaskDetail {
            task: text.into(),
            notes: None,
            chemical_id: None,
        }
    }

    fn plan() -> CleaningSchedulePlan {
        CleaningSchedulePlan {
            schedule: vec![ScheduleCategory {
                category: "Cooking Equipment".into(),
                items: vec![ScheduleItem {
                    item_name: "Flat Top Grill".into(),
                    daily: task("Scrape and degrease griddle"),
                    weekly: task("Clean drip tray"),
                    monthly: task("N/A"),
                }],
            }],
        }
    }

    fn catalog() -> Vec<Chemical> {
        vec![
            Chemical {
                id: "grill".into(),
                name: "Grill Cleaner".into(),
                used_for: "grill, griddle".into(),
                ..Default::default()
            },
            Chemical {
                id: "glass".into(),
                name: "Glass Cleaner".into(),
                used_for: "glass".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn fills_empty_slots() {
        let (out, summary) = auto_associate(&plan(), &catalog());
        let item = &out.schedule[0].items[0];
        assert_eq!(item.daily.chemical_id.as_deref(), Some("grill"));
        assert_eq!(item.weekly.chemical_id.as_deref(), Some("grill"));
        assert!(item.monthly.chemical_id.is_none());
        assert_eq!(
            summary,
            AssociationSummary {
                filled: 2,
                unmatched: 1,
                kept: 0
            }
        );
    }

    #[test]
    fn never_overwrites_existing_choice() {
        let mut input = plan();
        input.schedule[0].items[0].daily.chemical_id = Some("glass".into());
        let (out, summary) = auto_associate(&input, &catalog());
        assert_eq!(
            out.schedule[0].items[0].daily.chemical_id.as_deref(),
            Some("glass")
        );
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.filled, 1);
    }

    #[test]
    fn empty_string_id_is_refilled() {
        let mut input = plan();
        input.schedule[0].items[0].daily.chemical_id = Some(String::new());
        let (out, _) = auto_associate(&input, &catalog());
        assert_eq!(
            out.schedule[0].items[0].daily.chemical_id.as_deref(),
            Some("grill")
        );
    }

    #[test]
    fn empty_catalog_leaves_plan_unchanged() {
        let input = plan();
        let (out, summary) = auto_associate(&input, &[]);
        assert_eq!(out, input);
        assert_eq!(summary.filled, 0);
        assert_eq!(summary.unmatched, 3);
    }

    #[test]
    fn input_plan_is_not_mutated() {
        let input = plan();
        let _ = auto_associate(&input, &catalog());
        assert!(input.schedule[0].items[0].daily.chemical_id.is_none());
    }
}
