use anyhow::Result;

use crate::state::{AppState, AverageData};

pub fn average_age_at_death(state: &AppState) -> Result<String> {
    let data = AverageData {
        metric: "average_age_at_death",
        value: state.registry.average_age_at_death(),
    };
    state.render(&data, |data| match data.value {
        Some(age) => format!("The average age at death is {age:.2} years."),
        None => "No death dates found.".to_string(),
    })
}

pub fn children_counts(state: &AppState) -> Result<String> {
    let counts = state.registry.children_count_by_person();
    state.render(&counts, |counts| {
        counts
            .iter()
            .map(|(name, count)| format!("{name} has {count} children."))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn average_children(state: &AppState) -> Result<String> {
    let data = AverageData {
        metric: "average_children_per_person",
        value: state.registry.average_children_per_person(),
    };
    state.render(&data, |data| match data.value {
        Some(avg) => format!("The average number of children per person is {avg:.2}."),
        None => "No people found.".to_string(),
    })
}
