use scour_core::catalog::Catalog;
use scour_core::checklist::ChecklistState;
use scour_core::matching::{CandidateScore, MatchReport};
use scour_core::model::{CleaningSchedulePlan, Frequency};
use scour_core::schedule::AssociationSummary;

pub fn print_match(report: &MatchReport, catalog: &Catalog, explain: bool) {
    println!("  Item: {}", report.item_name);
    println!("  Task: {}\n", report.task_description);

    match report.selected_candidate() {
        Some(best) => {
            println!(
                "  Best match: {} ({}), score {}",
                best.chemical_name, best.chemical_id, best.score
            );
            if let Some(chem) = catalog.get(&best.chemical_id) {
                if !chem.application.is_empty() {
                    println!("    Application: {}", chem.application);
                }
                if let Some(ref ppe) = chem.personal_protection {
                    println!("    Protection:  {}", ppe);
                }
            }
        }
        None => {
            let reason = report
                .no_match_reason
                .map(|r| r.to_string())
                .unwrap_or_else(|| "no candidate selected".into());
            println!("  No match: {reason}");
        }
    }
    println!();

    if explain {
        print_explanation(report);
    }
}

fn print_explanation(report: &MatchReport) {
    println!(
        "  Tokens: item [{}], task [{}]\n",
        report.item_tokens.join(", "),
        report.task_tokens.join(", ")
    );

    if report.candidates.is_empty() {
        return;
    }

    let width = report
        .candidates
        .iter()
        .map(|c| c.chemical_name.len())
        .max()
        .unwrap_or(10)
        .max(8);

    println!(
        "    {:<width$}  {:>5}  {:>5}  {:>7}  {:>5}",
        "Chemical",
        "item",
        "task",
        "penalty",
        "score",
        width = width
    );
    for candidate in &report.candidates {
        let marker = if report.selected.as_deref() == Some(candidate.chemical_id.as_str()) {
            " *"
        } else {
            ""
        };
        if candidate.skipped {
            println!(
                "    {:<width$}  (no usedFor keywords, skipped)",
                candidate.chemical_name,
                width = width
            );
            continue;
        }
        println!(
            "    {:<width$}  {:>5}  {:>5}  {:>7}  {:>5}{}",
            candidate.chemical_name,
            candidate.item_name.weighted,
            candidate.task_description.weighted,
            candidate.penalty.total(),
            candidate.score,
            marker,
            width = width
        );
    }
    println!();

    if let Some(best) = report.selected_candidate() {
        print_candidate_detail(best);
    }
}

fn print_candidate_detail(candidate: &CandidateScore) {
    println!("  Why {}:", candidate.chemical_name);
    for (label, field) in [
        ("item", &candidate.item_name),
        ("task", &candidate.task_description),
    ] {
        for m in &field.matches {
            println!(
                "    {label}: {} -> {} ({:?}, {} x{})",
                m.token, m.keyword, m.quality, m.points, field.weight
            );
        }
    }
    for term in &candidate.penalty.terms {
        match term.keyword {
            Some(ref keyword) => {
                println!("    penalty: -{} ({:?} '{}')", term.weight, term.source, keyword)
            }
            None => println!("    penalty: -{} ({:?} present)", term.weight, term.source),
        }
    }
    println!();
}

/// Print a schedule grouped by category. Positions are 1-based so they can
/// be passed back to `schedule assign` and `checklist toggle`.
pub fn print_schedule(
    plan: &CleaningSchedulePlan,
    catalog: &Catalog,
    frequencies: &[Frequency],
    checklist: Option<&ChecklistState>,
) {
    for (ci, category) in plan.schedule.iter().enumerate() {
        println!("=== {} ===\n", category.category);

        for (ii, item) in category.items.iter().enumerate() {
            println!("  {}.{} {}", ci + 1, ii + 1, item.item_name);
            for &frequency in frequencies {
                let detail = item.slot(frequency);
                let check = match checklist {
                    Some(state) if state.is_done(ci, ii, frequency) => "[x] ",
                    Some(_) => "[ ] ",
                    None => "",
                };
                let chemical = match detail.chemical_id.as_deref() {
                    Some(id) if !id.is_empty() => catalog
                        .get(id)
                        .map(|c| c.name.as_str())
                        .unwrap_or(id),
                    _ => "-",
                };
                println!(
                    "      {:<8} {}{:<40} {}",
                    frequency, check, detail.task, chemical
                );
                if let Some(ref notes) = detail.notes {
                    if !notes.trim().is_empty() {
                        println!("               {}", notes);
                    }
                }
            }
        }
        println!();
    }
}

pub fn print_summary(summary: &AssociationSummary) {
    println!(
        "  Filled {} slot(s), {} without a match, {} already assigned",
        summary.filled, summary.unmatched, summary.kept
    );
}

pub fn print_checklist(
    plan: &CleaningSchedulePlan,
    catalog: &Catalog,
    state: &ChecklistState,
    frequencies: &[Frequency],
) {
    print_schedule(plan, catalog, frequencies, Some(state));

    let total: usize = plan.schedule.iter().map(|c| c.items.len()).sum();
    for &frequency in frequencies {
        println!(
            "  {:<8} {}/{} done",
            frequency,
            state.completed(frequency),
            total
        );
    }
}

pub fn print_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("  (empty catalog)");
        return;
    }

    let width = catalog
        .chemicals
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);

    for chem in &catalog.chemicals {
        println!("  {:<width$}  [{}]", chem.name, chem.id, width = width);
        println!("  {:<width$}  used for: {}", "", chem.used_for, width = width);
        if let Some(ref tox) = chem.toxicological_info {
            println!("  {:<width$}  hazards:  {}", "", tox, width = width);
        }
    }
}
