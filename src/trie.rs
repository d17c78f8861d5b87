use std::collections::BTreeMap;

/// Prefix tree of completion words.
///
/// Children are ordered, so lookups come out sorted. A terminal node owns
/// its word and lookups return borrows of it.
#[derive(Debug, Default)]
pub struct Trie {
    children: BTreeMap<char, Trie>,
    word: Option<String>,
}

impl Trie {
    pub fn new () -> Self {
        Self::default()
    }

    pub fn insert (&mut self, word: &str) {
        let mut curr = self;

        for ch in word.chars() {
            curr = curr.children.entry(ch).or_default();
        }

        if curr.word.is_none() {
            curr.word = Some(word.to_string());
        }
    }

    pub fn is_empty (&self) -> bool {
        self.word.is_none() && self.children.is_empty()
    }

    fn find (&self, prefix: &str) -> Option<&Self> {
        prefix.chars().try_fold(self, |node, ch| node.children.get(&ch))
    }

    /// Every stored word starting with `prefix`, in order.
    pub fn with_prefix (&self, prefix: &str) -> Vec<&str> {
        self.with_prefix_limited(prefix, usize::MAX)
    }

    /// Like `with_prefix`, stopping after `limit` words.
    pub fn with_prefix_limited (&self, prefix: &str, limit: usize) -> Vec<&str> {
        let mut res = Vec::new();
        let Some(start) = self.find(prefix) else { return res };

        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if res.len() >= limit { break; }

            if let Some(word) = &node.word {
                res.push(word.as_str());
            }

            // reversed so the smallest child is visited first
            stack.extend(node.children.values().rev());
        }

        res
    }
}

#[cfg(test)]
mod trie_tests {
    use super::*;

    #[test]
    fn trie_insert_test () {
        let mut tr = Trie::new();

        tr.insert("Hi mom");
        tr.insert("Hi mother");
        tr.insert("Hi father");
        tr.insert("apple");
        tr.insert("apple");

        assert_eq!(tr.with_prefix("Hi mo"), vec!["Hi mom", "Hi mother"]);
        assert_eq!(tr.with_prefix("apple"), vec!["apple"]);
        assert!(tr.with_prefix("b").is_empty());
    }

    #[test]
    fn empty_prefix_lists_all_in_order () {
        let mut tr = Trie::new();
        tr.insert("ba");
        tr.insert("b");
        tr.insert("a");

        assert_eq!(tr.with_prefix(""), vec!["a", "b", "ba"]);
        assert!(Trie::new().with_prefix("").is_empty());
        assert!(Trie::new().is_empty());
        assert!(!tr.is_empty());
    }

    #[test]
    fn limited_lookup_stops_early () {
        let mut tr = Trie::new();
        for word in ["grep", "git", "gzip", "gcc"] {
            tr.insert(word);
        }

        assert_eq!(tr.with_prefix_limited("g", 2), vec!["gcc", "git"]);
        assert_eq!(tr.with_prefix_limited("g", 10).len(), 4);
        assert!(tr.with_prefix_limited("g", 0).is_empty());
    }
}
