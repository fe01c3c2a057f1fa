use genealogy::dates::ymd;
use genealogy::{Dataset, FamilyRegistry, GenealogyError, RegistryConfig};

#[test]
fn test_age_at_death_before_birthday() {
    let mut registry = FamilyRegistry::new();
    registry.get_or_create(
        "Karanbir Thakuri",
        Some(ymd(1935, 10, 10).unwrap()),
        Some(ymd(2005, 5, 25).unwrap()),
    );
    assert_eq!(registry.age_at_death_of("Karanbir Thakuri"), Some(69));
}

#[test]
fn test_malformed_dates_rejected_before_registration() {
    let registry = FamilyRegistry::new();
    assert!(matches!(
        genealogy::dates::parse("15/05/1990"),
        Err(GenealogyError::MalformedDate(_))
    ));
    assert!(ymd(1990, 2, 30).is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_calendar_serializes_for_callers() {
    let mut registry = FamilyRegistry::new();
    registry.get_or_create("Anna", Some(ymd(1990, 5, 15).unwrap()), None);
    registry.get_or_create("Lena", Some(ymd(2010, 5, 15).unwrap()), None);

    let json = serde_json::to_value(registry.sorted_birthday_calendar()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "key": { "month": 5, "day": 15 }, "label": "May 15", "names": ["Anna", "Lena"] }
        ])
    );
}

#[test]
fn test_immediate_family_in_seeded_tree() {
    let mut registry = FamilyRegistry::with_config(RegistryConfig::ignoring_case());
    Dataset::Cousins.seed(&mut registry).unwrap();

    let family = registry.immediate_family_of("anna emmersohn").unwrap();
    assert_eq!(family.parents, vec!["Otto Emmersohn", "Cornelia Emmersohn"]);
    // Erik shares both parents but was never declared a sibling.
    assert!(family.siblings.is_empty());
    assert_eq!(family.spouse, None);
    assert!(family.children.is_empty());

    let names: Vec<&str> = registry.names().take(2).collect();
    assert_eq!(names, vec!["Otto Emmersohn", "Cornelia Emmersohn"]);
}
