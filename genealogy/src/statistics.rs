//! Population statistics and birthday calendars over the whole registry.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::dates::BirthdayKey;
use crate::registry::FamilyRegistry;

/// Everyone sharing one month/day birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayGroup {
    pub key: BirthdayKey,
    /// "Month DD"
    pub label: String,
    /// Registration order.
    pub names: Vec<String>,
}

impl FamilyRegistry {
    /// Birth dates of everyone who has one, in registration order.
    pub fn birthdays(&self) -> IndexMap<String, NaiveDate> {
        self.people()
            .filter_map(|(name, id)| {
                self.graph()
                    .birth_date(id)
                    .map(|date| (name.to_string(), date))
            })
            .collect()
    }

    /// Birthdays grouped by month and day, earliest in the year first.
    pub fn sorted_birthday_calendar(&self) -> Vec<BirthdayGroup> {
        let mut groups: BTreeMap<BirthdayKey, Vec<String>> = BTreeMap::new();
        for (name, date) in self.birthdays() {
            groups.entry(BirthdayKey::of(date)).or_default().push(name);
        }

        groups
            .into_iter()
            .map(|(key, names)| BirthdayGroup {
                key,
                label: key.label(),
                names,
            })
            .collect()
    }

    /// Mean age at death over everyone with both dates recorded.
    ///
    /// People who died before their first birthday count with age 0.
    /// `None` when nobody qualifies.
    pub fn average_age_at_death(&self) -> Option<f64> {
        let ages: Vec<i32> = self
            .people()
            .filter_map(|(_, id)| self.graph().age_at_death(id))
            .collect();
        mean(ages.iter().map(|&age| f64::from(age)), ages.len())
    }

    pub fn children_count_by_person(&self) -> IndexMap<String, usize> {
        self.people()
            .map(|(name, id)| (name.to_string(), self.graph().children(id).len()))
            .collect()
    }

    /// Total children over total people; `None` for an empty registry.
    pub fn average_children_per_person(&self) -> Option<f64> {
        let counts = self.children_count_by_person();
        mean(counts.values().map(|&count| count as f64), counts.len())
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(values.sum::<f64>() / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::ymd;

    #[test]
    fn test_same_day_different_year_share_a_group() {
        let mut registry = FamilyRegistry::new();
        registry.get_or_create("Otto", Some(ymd(1980, 3, 15).unwrap()), None);
        registry.get_or_create("Anna", Some(ymd(2010, 5, 15).unwrap()), None);
        registry.get_or_create("Lena", Some(ymd(1990, 5, 15).unwrap()), None);
        registry.get_or_create("Nobody Knows", None, None);
        registry.get_or_create("Karanbir", Some(ymd(1935, 10, 10).unwrap()), None);
        registry.get_or_create("Laxmi", Some(ymd(1938, 2, 5).unwrap()), None);

        let calendar = registry.sorted_birthday_calendar();
        let labels: Vec<&str> = calendar.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["February 05", "March 15", "May 15", "October 10"]);
        assert_eq!(calendar[2].names, vec!["Anna", "Lena"]);
        assert_eq!(calendar[2].key, BirthdayKey { month: 5, day: 15 });

        let birthdays = registry.birthdays();
        assert_eq!(birthdays.len(), 5);
        assert!(!birthdays.contains_key("Nobody Knows"));
    }

    #[test]
    fn test_empty_registry_averages_are_undefined() {
        let registry = FamilyRegistry::new();
        assert_eq!(registry.average_children_per_person(), None);
        assert_eq!(registry.average_age_at_death(), None);
        assert!(registry.sorted_birthday_calendar().is_empty());
        assert!(registry.children_count_by_person().is_empty());
    }

    #[test]
    fn test_average_age_at_death_counts_infants() {
        let mut registry = FamilyRegistry::new();
        registry.get_or_create(
            "Karanbir",
            Some(ymd(1935, 10, 10).unwrap()),
            Some(ymd(2005, 5, 25).unwrap()),
        );
        registry.get_or_create(
            "Infant",
            Some(ymd(1950, 3, 1).unwrap()),
            Some(ymd(1950, 11, 30).unwrap()),
        );
        registry.get_or_create("Living", Some(ymd(1980, 1, 1).unwrap()), None);

        assert_eq!(registry.average_age_at_death(), Some(34.5));
    }

    #[test]
    fn test_children_counts_include_zero() {
        let mut registry = FamilyRegistry::new();
        for name in ["Otto", "Cornelia", "Anna", "Erik"] {
            registry.get_or_create(name, None, None);
        }
        for parent in ["Otto", "Cornelia"] {
            registry.add_child(parent, "Anna").unwrap();
            registry.add_child(parent, "Erik").unwrap();
        }

        let counts = registry.children_count_by_person();
        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![
                ("Otto".to_string(), 2),
                ("Cornelia".to_string(), 2),
                ("Anna".to_string(), 0),
                ("Erik".to_string(), 0),
            ]
        );
        assert_eq!(registry.average_children_per_person(), Some(1.0));
    }
}
