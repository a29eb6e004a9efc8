use super::Link;

use serde::Deserialize;

/// A named operation on a model and the links resolved around it.
#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    /// Name of the action
    pub name: String,

    /// Links resolved before the action; they shape its input
    #[serde(default)]
    pub prepares: Vec<Link>,

    /// Links resolved for every output row; their results are attached
    #[serde(default)]
    pub nextpages: Vec<Link>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prepares: vec![],
            nextpages: vec![],
        }
    }

    pub fn with_prepare(mut self, link: Link) -> Self {
        self.prepares.push(link);
        self
    }

    pub fn with_nextpage(mut self, link: Link) -> Self {
        self.nextpages.push(link);
        self
    }
}
