use crate::common::models::GenerationRequest;

/// Ordered prompts edited in the workspace. Never shorter than one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptList {
    prompts: Vec<String>,
}

impl Default for PromptList {
    fn default() -> Self {
        Self { prompts: vec![String::new()] }
    }
}

impl PromptList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prompts
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.prompts.iter()
    }

    /// Replaces the prompt at `index`. Returns `false` when the index is out of range.
    pub fn set(&mut self, index: usize, text: String) -> bool {
        match self.prompts.get_mut(index) {
            Some(slot) => {
                *slot = text;
                true
            }
            None => false,
        }
    }

    pub fn push_empty(&mut self) {
        self.prompts.push(String::new());
    }

    /// Removes the prompt at `index` unless it is the only one left.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.prompts.len() <= 1 || index >= self.prompts.len() {
            return false;
        }
        self.prompts.remove(index);
        true
    }

    pub fn snapshot(&self) -> GenerationRequest {
        GenerationRequest { text_prompts: self.prompts.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_empty_prompt() {
        let list = PromptList::new();
        assert_eq!(list.as_slice(), &[String::new()]);
    }

    #[test]
    fn never_shrinks_below_one() {
        let mut list = PromptList::new();
        assert!(!list.remove(0));
        list.push_empty();
        list.set(1, "dog".into());
        assert!(list.remove(0));
        assert_eq!(list.as_slice(), &["dog".to_string()]);
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn out_of_range_edit_is_ignored() {
        let mut list = PromptList::new();
        assert!(!list.set(3, "x".into()));
        assert_eq!(list, PromptList::new());
    }
}
