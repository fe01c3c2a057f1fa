use anyhow::Result;

use genealogy::FamilyRegistry;

use crate::state::{AppState, ImmediateFamilyData, MembersData, RelativesData};

fn build_relatives_data(
    state: &AppState,
    name: &str,
    relation: &'static str,
    lookup: fn(&FamilyRegistry, &str) -> Vec<String>,
) -> RelativesData {
    let registry = &state.registry;
    RelativesData {
        name: name.to_string(),
        relation,
        found: registry.contains(name),
        names: lookup(registry, name),
    }
}

fn not_found(name: &str) -> String {
    format!("No person found with name {name}.")
}

pub fn members(state: &AppState) -> Result<String> {
    let data = MembersData {
        count: state.registry.len(),
        names: state.registry.names().map(str::to_string).collect(),
    };
    state.render(&data, |data| {
        format!("Available family members:\n{}", data.names.join("\n"))
    })
}

pub fn parents(state: &AppState, name: &str) -> Result<String> {
    let data = build_relatives_data(state, name, "parents", FamilyRegistry::parents_of);
    state.render(&data, |data| match (data.found, data.names.is_empty()) {
        (false, _) => not_found(&data.name),
        (true, true) => format!("{} has no recorded parents.", data.name),
        (true, false) => format!("Parents of {}: {}", data.name, data.names.join(", ")),
    })
}

pub fn grandchildren(state: &AppState, name: &str) -> Result<String> {
    let data =
        build_relatives_data(state, name, "grandchildren", FamilyRegistry::grandchildren_of);
    state.render(&data, |data| match (data.found, data.names.is_empty()) {
        (false, _) => not_found(&data.name),
        (true, true) => format!("{} has no recorded grandchildren.", data.name),
        (true, false) => format!("Grandchildren of {}: {}", data.name, data.names.join(", ")),
    })
}

pub fn extended_family(state: &AppState, name: &str) -> Result<String> {
    let data =
        build_relatives_data(state, name, "extended", FamilyRegistry::extended_family_of);
    state.render(&data, |data| match (data.found, data.names.is_empty()) {
        (false, _) => not_found(&data.name),
        (true, true) => format!("{} has no recorded extended family.", data.name),
        (true, false) => format!(
            "Extended family of {}: {}",
            data.name,
            data.names.join(", ")
        ),
    })
}

pub fn siblings(state: &AppState, name: &str) -> Result<String> {
    let data = build_relatives_data(state, name, "siblings", FamilyRegistry::siblings_of);
    state.render(&data, |data| {
        if data.names.is_empty() {
            format!("No siblings found for {}.", data.name)
        } else {
            format!("Siblings of {}: {}", data.name, data.names.join(", "))
        }
    })
}

pub fn cousins(state: &AppState, name: &str) -> Result<String> {
    let data = build_relatives_data(state, name, "cousins", FamilyRegistry::cousins_of);
    state.render(&data, |data| {
        if data.names.is_empty() {
            format!("No cousins found for {}.", data.name)
        } else {
            format!("Cousins of {}: {}", data.name, data.names.join(", "))
        }
    })
}

pub fn immediate_family(state: &AppState, name: &str) -> Result<String> {
    let family = state.registry.immediate_family_of(name);
    let data = ImmediateFamilyData {
        name: name.to_string(),
        found: family.is_some(),
        family,
    };

    state.render(&data, |data| {
        let Some(family) = &data.family else {
            return not_found(&data.name);
        };
        if family.is_empty() {
            return format!("{} has no immediate family.", data.name);
        }

        let mut lines = vec![format!("Immediate family of {}:", data.name)];
        if !family.parents.is_empty() {
            lines.push(format!("Parents: {}", family.parents.join(", ")));
        }
        if !family.siblings.is_empty() {
            lines.push(format!("Siblings: {}", family.siblings.join(", ")));
        }
        if let Some(spouse) = &family.spouse {
            lines.push(format!("Spouse: {spouse}"));
        }
        if !family.children.is_empty() {
            lines.push(format!("Children: {}", family.children.join(", ")));
        }
        lines.join("\n")
    })
}
