//! Aho–Corasick automaton: trie goto edges plus BFS failure links.
//!
//! The lesson diagram shows three edge kinds — goto edges (solid), failure
//! links (dashed) and terminal states — so the builder exposes exactly that
//! structure. `scan` exercises the links the way a matcher would, which is
//! how the tests pin the failure chains down.

use serde::Serialize;

const ROOT: usize = 0;

/// One automaton state.
#[derive(Clone, Debug, Serialize)]
pub struct AcState {
    /// Character on the edge from the parent (`None` for the root).
    pub label: Option<char>,
    pub parent: Option<usize>,
    pub depth: usize,
    /// Outgoing goto edges in insertion order.
    pub children: Vec<(char, usize)>,
    /// Failure link target (the root links to itself).
    pub fail: usize,
    /// Index of the pattern ending here, if any.
    pub word: Option<usize>,
}

impl AcState {
    fn child(&self, ch: char) -> Option<usize> {
        self.children
            .iter()
            .find(|&&(c, _)| c == ch)
            .map(|&(_, v)| v)
    }
}

/// Built automaton over a fixed pattern set.
#[derive(Clone, Debug, Serialize)]
pub struct Automaton {
    pub states: Vec<AcState>,
    pub patterns: Vec<String>,
}

/// A pattern occurrence found by `scan`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Byte index of the last character of the occurrence.
    pub end: usize,
    pub pattern: usize,
}

impl Automaton {
    /// Build the trie and failure links for `patterns`.
    pub fn build<S: AsRef<str>>(patterns: &[S]) -> Automaton {
        let mut states = vec![AcState {
            label: None,
            parent: None,
            depth: 0,
            children: Vec::new(),
            fail: ROOT,
            word: None,
        }];
        for (w, pat) in patterns.iter().enumerate() {
            let mut cur = ROOT;
            for ch in pat.as_ref().chars() {
                cur = match states[cur].child(ch) {
                    Some(v) => v,
                    None => {
                        let v = states.len();
                        let depth = states[cur].depth + 1;
                        states.push(AcState {
                            label: Some(ch),
                            parent: Some(cur),
                            depth,
                            children: Vec::new(),
                            fail: ROOT,
                            word: None,
                        });
                        states[cur].children.push((ch, v));
                        v
                    }
                };
            }
            states[cur].word = Some(w);
        }

        // Failure links by BFS: a child of the root falls back to the root;
        // deeper states follow the parent's failure chain until a matching
        // goto edge appears.
        let mut queue: std::collections::VecDeque<usize> =
            states[ROOT].children.iter().map(|&(_, v)| v).collect();
        while let Some(u) = queue.pop_front() {
            let children = states[u].children.clone();
            for (ch, v) in children {
                let mut f = states[u].fail;
                let fallback = loop {
                    if let Some(w) = states[f].child(ch) {
                        if w != v {
                            break w;
                        }
                    }
                    if f == ROOT {
                        break ROOT;
                    }
                    f = states[f].fail;
                };
                states[v].fail = fallback;
                queue.push_back(v);
            }
        }
        Automaton {
            states,
            patterns: patterns.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Goto edges `(from, to, label)` in state order.
    pub fn goto_edges(&self) -> Vec<(usize, usize, char)> {
        self.states
            .iter()
            .enumerate()
            .flat_map(|(u, s)| s.children.iter().map(move |&(ch, v)| (u, v, ch)))
            .collect()
    }

    /// Failure edges `(from, to)` for every non-root state.
    pub fn fail_edges(&self) -> Vec<(usize, usize)> {
        (1..self.states.len()).map(|u| (u, self.states[u].fail)).collect()
    }

    /// State reached by reading `pat` from the root, if the path exists.
    pub fn state_of(&self, pat: &str) -> Option<usize> {
        let mut cur = ROOT;
        for ch in pat.chars() {
            cur = self.states[cur].child(ch)?;
        }
        Some(cur)
    }

    /// Run the matcher over `text`, reporting every pattern occurrence.
    pub fn scan(&self, text: &str) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut state = ROOT;
        for (i, ch) in text.chars().enumerate() {
            loop {
                if let Some(v) = self.states[state].child(ch) {
                    state = v;
                    break;
                }
                if state == ROOT {
                    break;
                }
                state = self.states[state].fail;
            }
            // Every suffix match ending here is reachable over fail links.
            let mut probe = state;
            loop {
                if let Some(w) = self.states[probe].word {
                    hits.push(Hit { end: i, pattern: w });
                }
                if probe == ROOT {
                    break;
                }
                probe = self.states[probe].fail;
            }
        }
        hits
    }
}
