use super::SwitchingArchitecture;

/// An optical switching node.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    architecture: SwitchingArchitecture,
}

impl Node {
    pub(crate) fn new(name: String, architecture: SwitchingArchitecture) -> Self {
        Self { name, architecture }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn switching_architecture(&self) -> SwitchingArchitecture {
        self.architecture
    }
}
