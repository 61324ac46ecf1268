use super::Command;
use indexmap::IndexMap;
use std::sync::Arc;

type CommandMap = IndexMap<String, Arc<dyn Command>>;

/// Name to command lookup with two layers.
///
/// The base layer is fixed for the life of the shell. The step layer is
/// replaced wholesale on every step transition. On a name collision the base
/// command wins.
pub struct CommandTable {
    base: CommandMap,
    step: CommandMap,
}

impl CommandTable {
    pub fn new<I>(base: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Command>>,
    {
        Self {
            base: Self::to_map(base),
            step: IndexMap::new(),
        }
    }

    fn to_map<I>(commands: I) -> CommandMap
    where
        I: IntoIterator<Item = Arc<dyn Command>>,
    {
        commands
            .into_iter()
            .map(|command| (command.name().to_string(), command))
            .collect()
    }

    /// Swap in a new step layer, returning the names shadowed by base commands.
    pub fn replace_step<I>(&mut self, commands: I) -> Vec<String>
    where
        I: IntoIterator<Item = Arc<dyn Command>>,
    {
        self.step = Self::to_map(commands);

        let shadowed: Vec<String> = self
            .step
            .keys()
            .filter(|name| self.base.contains_key(*name))
            .cloned()
            .collect();
        for name in &shadowed {
            tracing::warn!("Step command '{}' is shadowed by a base command", name);
        }
        shadowed
    }

    pub fn clear_step(&mut self) {
        self.step.clear();
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.base
            .get(name)
            .or_else(|| self.step.get(name))
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.base.contains_key(name) || self.step.contains_key(name)
    }

    pub fn base_names(&self) -> Vec<&str> {
        self.base.keys().map(String::as_str).collect()
    }

    /// Step commands that are actually reachable.
    pub fn step_names(&self) -> Vec<&str> {
        self.step
            .keys()
            .filter(|name| !self.base.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    pub fn step_commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.step
            .iter()
            .filter(|(name, _)| !self.base.contains_key(*name))
            .map(|(_, command)| command)
    }

    /// The effective command set: base commands, then step commands.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.base_names();
        names.extend(self.step_names());
        names
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.step.is_empty()
    }

    pub fn has_step_commands(&self) -> bool {
        !self.step.is_empty()
    }
}
