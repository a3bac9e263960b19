/// Names of played songs, most recent on top. Grows without bound.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_play(&mut self, name: &str) {
        self.stack.push(name.to_string());
    }

    /// Most recent first. Does not consume the history.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stack.iter().rev().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
