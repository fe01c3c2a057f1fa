//! Subcommands - one per menu entry of the family tree front end

pub mod calendar;
pub mod people;
pub mod statistics;

use anyhow::Result;
use clap::Subcommand;

use crate::state::AppState;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every family member
    Members,
    /// Parents of a person
    Parents { name: String },
    /// Grandchildren of a person
    Grandchildren { name: String },
    /// Parents, siblings, spouse and children of a person
    Immediate { name: String },
    /// Parents, aunts and uncles, and cousins of a person
    Extended { name: String },
    /// Declared siblings of a person
    Siblings { name: String },
    /// Children of a person's aunts and uncles
    Cousins { name: String },
    /// Every known birthday, with year
    Birthdays,
    /// Birthdays grouped by day of the year
    Calendar,
    /// Mean age at death over everyone with a recorded death
    AverageAge,
    /// Number of children of each person
    Children,
    /// Mean number of children per person
    AverageChildren,
}

impl Command {
    pub fn run(self, state: &AppState) -> Result<String> {
        match self {
            Command::Members => people::members(state),
            Command::Parents { name } => people::parents(state, &name),
            Command::Grandchildren { name } => people::grandchildren(state, &name),
            Command::Immediate { name } => people::immediate_family(state, &name),
            Command::Extended { name } => people::extended_family(state, &name),
            Command::Siblings { name } => people::siblings(state, &name),
            Command::Cousins { name } => people::cousins(state, &name),
            Command::Birthdays => calendar::birthdays(state),
            Command::Calendar => calendar::sorted_calendar(state),
            Command::AverageAge => statistics::average_age_at_death(state),
            Command::Children => statistics::children_counts(state),
            Command::AverageChildren => statistics::average_children(state),
        }
    }
}
