use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NavigatorError, Result};

/// Name of the config file every implemented step carries at its top level.
pub const STEP_CONFIG_FILE: &str = "stepconfig.yml";

/// A step command as declared in `stepconfig.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCommandDescriptor {
    pub name: String,
    pub shellcommand: String,
    pub usage_args: Vec<String>,
    pub description: String,
}

/// Lenient mirror of a command entry so missing fields can be named.
#[derive(Debug, Default, Deserialize)]
struct RawStepCommand {
    name: Option<String>,
    shellcommand: Option<String>,
    usage_args: Option<Vec<String>>,
    description: Option<String>,
}

impl StepCommandDescriptor {
    /// Validate one raw `step_commands` entry. `index` names unnamed entries.
    pub fn from_value(value: &serde_yaml::Value, index: usize) -> Result<Self> {
        let fallback_name = value
            .get("name")
            .and_then(|name| name.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index + 1));

        let raw: RawStepCommand =
            serde_yaml::from_value(value.clone()).map_err(|source| {
                NavigatorError::InvalidCommandEntry {
                    command: fallback_name.clone(),
                    source,
                }
            })?;

        let missing = |field: &'static str| NavigatorError::MissingCommandField {
            command: fallback_name.clone(),
            field,
        };

        Ok(Self {
            name: raw.name.ok_or_else(|| missing("name"))?,
            shellcommand: raw.shellcommand.ok_or_else(|| missing("shellcommand"))?,
            usage_args: raw.usage_args.ok_or_else(|| missing("usage_args"))?,
            description: raw.description.unwrap_or_default(),
        })
    }
}

/// Contents of a step's `stepconfig.yml`.
///
/// Command entries stay raw until the step is entered so that one broken
/// entry only costs that command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepConfigFile {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub step_commands: Vec<serde_yaml::Value>,
}

impl StepConfigFile {
    pub fn load(step: &str, step_dir: &Path) -> Result<Self> {
        let path = step_dir.join(STEP_CONFIG_FILE);
        let load_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            NavigatorError::StepConfigLoad {
                step: step.to_string(),
                path: path.clone(),
                source,
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| load_error(Box::new(e)))?;
        let config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(&content).map_err(|e| load_error(Box::new(e)))?
        };

        tracing::debug!(
            "Loaded {} command entries for step '{}' from {}",
            config.step_commands.len(),
            step,
            path.display()
        );
        Ok(config)
    }

    /// Validate every command entry, keeping valid ones in file order.
    pub fn commands(&self) -> (Vec<StepCommandDescriptor>, Vec<NavigatorError>) {
        let mut commands = Vec::new();
        let mut skipped = Vec::new();

        for (index, entry) in self.step_commands.iter().enumerate() {
            match StepCommandDescriptor::from_value(entry, index) {
                Ok(command) => commands.push(command),
                Err(e) => skipped.push(e),
            }
        }

        (commands, skipped)
    }
}
