//! Example datasets
//!
//! Callers seed a fresh registry explicitly at startup; nothing here is
//! global.

use tracing::info;

use crate::dates::ymd;
use crate::error::Result;
use crate::registry::FamilyRegistry;

type Ymd = (i32, u32, u32);

/// One person row: name, birth date, optional death date.
type PersonRow = (&'static str, Ymd, Option<Ymd>);

/// Both partners' branches merged into one tree.
const INTEGRATED_PEOPLE: &[PersonRow] = &[
    ("Otto Emmersohn", (1980, 3, 15), None),
    ("Cornelia Emmersohn", (1985, 6, 20), None),
    ("Anna Emmersohn", (2010, 5, 15), None),
    ("Karanbir Thakuri", (1935, 10, 10), Some((2005, 5, 25))),
    ("Laxmi Thakuri", (1938, 2, 5), Some((2010, 9, 10))),
];

const INTEGRATED_SPOUSES: &[(&str, &str)] = &[("Otto Emmersohn", "Cornelia Emmersohn")];

const INTEGRATED_SIBLINGS: &[(&str, &str)] = &[("Karanbir Thakuri", "Laxmi Thakuri")];

/// (parent, child)
const INTEGRATED_CHILDREN: &[(&str, &str)] = &[
    ("Otto Emmersohn", "Anna Emmersohn"),
    ("Cornelia Emmersohn", "Anna Emmersohn"),
    ("Laxmi Thakuri", "Otto Emmersohn"),
];

/// The Emmersohn family with enough aunts and uncles to show cousins.
const COUSINS_PEOPLE: &[PersonRow] = &[
    ("Otto Emmersohn", (1965, 3, 12), None),
    ("Cornelia Emmersohn", (1967, 6, 25), None),
    ("Anna Emmersohn", (1990, 5, 15), None),
    ("Erik Emmersohn", (1993, 8, 20), None),
    ("Klaus Emmersohn", (1970, 4, 8), None),
    ("Greta Novak", (1975, 7, 14), None),
    ("Max Novak", (2000, 12, 25), None),
    ("Maria Novak", (2003, 11, 3), None),
    ("Franz Bauer", (1985, 2, 2), None),
    ("Hans Bauer", (1987, 9, 30), None),
];

const COUSINS_SPOUSES: &[(&str, &str)] = &[
    ("Otto Emmersohn", "Cornelia Emmersohn"),
    ("Klaus Emmersohn", "Greta Novak"),
];

const COUSINS_SIBLINGS: &[(&str, &str)] = &[
    ("Otto Emmersohn", "Klaus Emmersohn"),
    ("Klaus Emmersohn", "Franz Bauer"),
];

const COUSINS_CHILDREN: &[(&str, &str)] = &[
    ("Otto Emmersohn", "Anna Emmersohn"),
    ("Otto Emmersohn", "Erik Emmersohn"),
    ("Cornelia Emmersohn", "Anna Emmersohn"),
    ("Cornelia Emmersohn", "Erik Emmersohn"),
    ("Klaus Emmersohn", "Max Novak"),
    ("Klaus Emmersohn", "Maria Novak"),
    ("Franz Bauer", "Hans Bauer"),
];

/// Four generations descending from Karanbir and Laxmi. Only birth and death
/// years are known; every date falls on January 1.
const GENERATIONS_PEOPLE: &[PersonRow] = &[
    ("Karanbir Thakuri", (1935, 1, 1), Some((2005, 1, 1))),
    ("Laxmi Thakuri", (1938, 1, 1), Some((2010, 1, 1))),
    ("Angad Thakuri", (1960, 1, 1), None),
    ("Yashvi Thakuri", (1965, 1, 1), None),
    ("Cornelia Emmersohn", (1985, 1, 1), None),
    ("Otto Emmersohn", (1980, 1, 1), None),
    ("Mahesh Shah", (1990, 1, 1), None),
    ("Aanya Shah", (1991, 1, 1), None),
    ("Aadesh Thakuri", (1990, 1, 1), None),
    ("Megha Thakuri", (1994, 1, 1), None),
    ("Simran Thakuri", (2008, 1, 1), None),
    ("Ashish Thakuri", (2010, 1, 1), None),
    ("Roshni Thakuri", (2012, 1, 1), None),
    ("Alision Emmersohn", (1999, 1, 1), None),
    ("William Emmersohn", (2000, 1, 1), None),
    ("Presley Emmersohn", (2000, 1, 1), None),
    ("Rowan Emmersohn", (2019, 1, 1), None),
    ("Harper Emmersohn", (2024, 1, 1), None),
];

const GENERATIONS_SPOUSES: &[(&str, &str)] = &[
    ("Otto Emmersohn", "Cornelia Emmersohn"),
    ("Karanbir Thakuri", "Laxmi Thakuri"),
    ("Angad Thakuri", "Yashvi Thakuri"),
    ("Mahesh Shah", "Aanya Shah"),
    ("Aadesh Thakuri", "Megha Thakuri"),
    ("William Emmersohn", "Presley Emmersohn"),
];

const GENERATIONS_CHILDREN: &[(&str, &str)] = &[
    ("Karanbir Thakuri", "Angad Thakuri"),
    ("Laxmi Thakuri", "Angad Thakuri"),
    ("Angad Thakuri", "Cornelia Emmersohn"),
    ("Yashvi Thakuri", "Cornelia Emmersohn"),
    ("Angad Thakuri", "Aanya Shah"),
    ("Yashvi Thakuri", "Aanya Shah"),
    ("Angad Thakuri", "Aadesh Thakuri"),
    ("Yashvi Thakuri", "Aadesh Thakuri"),
    ("Aadesh Thakuri", "Ashish Thakuri"),
    ("Megha Thakuri", "Ashish Thakuri"),
    ("Aadesh Thakuri", "Roshni Thakuri"),
    ("Megha Thakuri", "Roshni Thakuri"),
    ("Aadesh Thakuri", "Simran Thakuri"),
    ("Megha Thakuri", "Simran Thakuri"),
    ("Cornelia Emmersohn", "William Emmersohn"),
    ("Otto Emmersohn", "William Emmersohn"),
    ("Cornelia Emmersohn", "Alision Emmersohn"),
    ("Otto Emmersohn", "Alision Emmersohn"),
    ("William Emmersohn", "Rowan Emmersohn"),
    ("Presley Emmersohn", "Rowan Emmersohn"),
    ("William Emmersohn", "Harper Emmersohn"),
    ("Presley Emmersohn", "Harper Emmersohn"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dataset {
    #[default]
    Integrated,
    Cousins,
    Generations,
}

impl Dataset {
    pub fn seed(self, registry: &mut FamilyRegistry) -> Result<()> {
        match self {
            Dataset::Integrated => integrated_family(registry),
            Dataset::Cousins => cousins_family(registry),
            Dataset::Generations => generations_family(registry),
        }
    }
}

pub fn integrated_family(registry: &mut FamilyRegistry) -> Result<()> {
    seed_rows(
        registry,
        INTEGRATED_PEOPLE,
        INTEGRATED_SPOUSES,
        INTEGRATED_SIBLINGS,
        INTEGRATED_CHILDREN,
    )?;
    info!(people = registry.len(), "seeded integrated family");
    Ok(())
}

pub fn cousins_family(registry: &mut FamilyRegistry) -> Result<()> {
    seed_rows(
        registry,
        COUSINS_PEOPLE,
        COUSINS_SPOUSES,
        COUSINS_SIBLINGS,
        COUSINS_CHILDREN,
    )?;
    info!(people = registry.len(), "seeded cousins family");
    Ok(())
}

pub fn generations_family(registry: &mut FamilyRegistry) -> Result<()> {
    seed_rows(
        registry,
        GENERATIONS_PEOPLE,
        GENERATIONS_SPOUSES,
        &[],
        GENERATIONS_CHILDREN,
    )?;
    info!(people = registry.len(), "seeded generations family");
    Ok(())
}

fn seed_rows(
    registry: &mut FamilyRegistry,
    people: &[PersonRow],
    spouses: &[(&str, &str)],
    siblings: &[(&str, &str)],
    children: &[(&str, &str)],
) -> Result<()> {
    for &(name, (by, bm, bd), death) in people {
        let birth = ymd(by, bm, bd)?;
        let death = death.map(|(y, m, d)| ymd(y, m, d)).transpose()?;
        registry.get_or_create(name, Some(birth), death);
    }
    for &(a, b) in spouses {
        registry.set_spouse(a, b)?;
    }
    for &(a, b) in siblings {
        registry.add_sibling(a, b)?;
    }
    for &(parent, child) in children {
        registry.add_child(parent, child)?;
    }
    Ok(())
}
