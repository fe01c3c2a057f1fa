use anyhow::Result;
use genealogy::{FamilyRegistry, ImmediateFamily};
use serde::Serialize;

/// Everything a command needs: the seeded registry and how to print.
pub struct AppState {
    pub registry: FamilyRegistry,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl AppState {
    /// Render `value` as pretty JSON, or fall back to the text renderer.
    pub fn render<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce(&T) -> String,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Text => Ok(text(value)),
        }
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct RelativesData {
    pub name: String,
    pub relation: &'static str,
    pub found: bool,
    pub names: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct ImmediateFamilyData {
    pub name: String,
    pub found: bool,
    pub family: Option<ImmediateFamily>,
}

#[derive(Serialize, Clone)]
pub struct MembersData {
    pub count: usize,
    pub names: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct AverageData {
    pub metric: &'static str,
    pub value: Option<f64>,
}
