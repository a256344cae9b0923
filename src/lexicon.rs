mod matches;
mod trievec;

pub use self::matches::Matches;
use self::trievec::TrieVec;
use crate::grid::N;
use crate::labelset::LabelSet;
use crate::tiles::{Codec, Label, Tile, Word, ALPHABET_LEN};
use crate::Error;
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;
use tracing::{debug, instrument};

/// Index of a node in the lexicon arena. The root is node 0.
pub type NodeId = usize;

/// A trie that holds all the accepted words, flattened into an arena.
///
/// The children of a node are stored next to each other in label order, so a
/// node only needs the index of its first child and the set of child labels.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// For each node the index of the first child, and a `LabelSet` with the labels of all children.
    nodes: Vec<(u32, LabelSet)>,
    /// The label of the edge into each node.
    labels: Vec<Label>,
    /// The parent of each node. The root is its own parent.
    parents: Vec<u32>,
    terminal: Vec<bool>,
    /// Path of the wordfile used to build the lexicon.
    /// Empty if the lexicon is not built from a file.
    wordfile: String,
    word_count: usize,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

impl Default for Lexicon {
    /// An empty lexicon
    fn default() -> Self {
        Lexicon::from(TrieVec::new())
    }
}

impl From<TrieVec<Label>> for Lexicon {
    fn from(trie: TrieVec<Label>) -> Self {
        let mut nodes = Vec::new();
        let mut labels = Vec::new();
        let mut parents = Vec::new();
        let mut terminal = Vec::new();
        let mut word_count = 0;

        // index of the next node pushed to the queue
        let mut next: u32 = 1;
        let mut queue = VecDeque::new();
        queue.push_back((&trie, 0_u32, 0));
        while let Some((node, parent, label)) = queue.pop_front() {
            let index = nodes.len() as u32;
            let children: LabelSet = node.children().iter().map(|(label, _)| *label).collect();
            for (label, child) in node.children() {
                queue.push_back((child.as_ref(), index, *label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((next, children));
            next += children.len() as u32;
            labels.push(label);
            parents.push(parent);
            terminal.push(node.terminal());
        }
        Lexicon {
            nodes,
            labels,
            parents,
            terminal,
            wordfile: String::new(),
            word_count,
        }
    }
}

/// Encode a word from the word list. Only `A`..`Z` (in any case) are accepted.
fn encode_word(word: &str) -> Result<Vec<Label>, Error> {
    word.chars()
        .map(|ch| match Codec::encode_char(ch.to_ascii_uppercase()) {
            Some(label) if (1..=ALPHABET_LEN).contains(&label) => Ok(label),
            _ => Err(Error::EncodeInvalidToken(ch.into())),
        })
        .collect()
}

impl Lexicon {
    /// Build a lexicon from text with one word per line.
    ///
    /// Lines are trimmed, and empty lines are skipped. Words are case insensitive.
    /// Words longer than 15 letters can not be played, and are skipped.
    /// ## Errors
    /// If a word contains a character that is not a letter.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Error, Lexicon};
    /// let lexicon = Lexicon::load("apple\n  Pear\n\nPLUM\n")?;
    /// assert_eq!(lexicon.word_count(), 3);
    /// assert!(lexicon.is_word("pear"));
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(skip(text))]
    pub fn load(text: &str) -> Result<Lexicon, Error> {
        let mut builder = TrieVec::new();
        let mut skipped = 0;
        for word in text.lines().map(str::trim).filter(|word| !word.is_empty()) {
            if word.chars().count() > N {
                skipped += 1;
                continue;
            }
            builder.insert(encode_word(word)?);
        }
        let lexicon = Lexicon::from(builder);
        debug!(
            words = lexicon.word_count,
            nodes = lexicon.node_count(),
            skipped,
            "lexicon built"
        );
        Ok(lexicon)
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read, or a word can not be encoded.
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut lexicon = Lexicon::load(&text)?;
        lexicon.wordfile = String::from(wordfile);
        Ok(lexicon)
    }

    /// Build a lexicon from a list of words.
    /// ## Errors
    /// If a word can not be encoded.
    pub fn from_words(words: &[&str]) -> Result<Lexicon, Error> {
        Lexicon::load(&words.join("\n"))
    }

    /// The number of words in the lexicon
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the arena, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the index of the child with `label` of `node` if present.
    pub fn get(&self, node: NodeId, label: Label) -> Option<NodeId> {
        let (first, labels) = &self.nodes[node];
        labels
            .index_of(label)
            .map(|index| *first as usize + index)
    }

    /// Iterate over the (label, child) pairs of `node`, in label order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (Label, NodeId)> + '_ {
        let (first, labels) = self.nodes[node];
        labels
            .iter()
            .enumerate()
            .map(move |(index, label)| (label, first as usize + index))
    }

    /// Check if `node` ends a word.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.terminal[node]
    }

    fn walk<I: IntoIterator<Item = Label>>(&self, labels: I) -> Option<NodeId> {
        labels
            .into_iter()
            .try_fold(0, |node, label| self.get(node, label))
    }

    /// Returns true if `word` is in the lexicon. The check is case insensitive,
    /// and any character that is not a letter gives `false`.
    pub fn is_word(&self, word: &str) -> bool {
        match encode_word(word) {
            Ok(labels) if !labels.is_empty() => self
                .walk(labels)
                .map_or(false, |node| self.is_terminal(node)),
            _ => false,
        }
    }

    /// Returns true if `word` is in the lexicon. Wildcard tiles match their letter.
    pub fn contains(&self, word: &Word) -> bool {
        !word.is_empty()
            && self
                .walk(word.iter().map(Tile::label))
                .map_or(false, |node| self.is_terminal(node))
    }

    /// Return the word spelled by the path from the root to `node`.
    pub fn node_word(&self, node: NodeId) -> Word {
        let mut labels = Vec::new();
        let mut i = node;
        while i != 0 {
            labels.push(self.labels[i]);
            i = self.parents[i] as usize;
        }
        labels.into_iter().rev().map(Tile::regular).collect()
    }
}
