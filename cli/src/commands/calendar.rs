use anyhow::Result;

use genealogy::dates;

use crate::state::AppState;

pub fn birthdays(state: &AppState) -> Result<String> {
    let birthdays = state.registry.birthdays();
    state.render(&birthdays, |birthdays| {
        if birthdays.is_empty() {
            return "No birthdays found.".to_string();
        }
        birthdays
            .iter()
            .map(|(name, date)| format!("{name}: {}", dates::long_label(*date)))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn sorted_calendar(state: &AppState) -> Result<String> {
    let calendar = state.registry.sorted_birthday_calendar();
    state.render(&calendar, |calendar| {
        if calendar.is_empty() {
            return "No birthdays found.".to_string();
        }
        let mut lines = vec!["Birthday Calendar:".to_string()];
        lines.extend(
            calendar
                .iter()
                .map(|group| format!("{}: {}", group.label, group.names.join(", "))),
        );
        lines.join("\n")
    })
}
