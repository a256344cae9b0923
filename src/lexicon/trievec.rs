/// Growable trie used to collect the words before the lexicon is flattened.
///
/// Children are kept sorted by label, so a breadth first walk visits them in
/// the order the arena stores them.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(T, Box<Self>)] {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Copy> TrieVec<T> {
    /// Insert `key`. Returns false if the key was already present.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) -> bool {
        let mut t = self;
        for &c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        let added = !t.terminal;
        t.terminal = true;
        added
    }

    /// Returns `true` if the trie contains `key`.
    pub fn contains<K: AsRef<[T]>>(&self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => t = &t.children[pos].1,
                Err(_) => return false,
            }
        }
        t.terminal
    }
}
