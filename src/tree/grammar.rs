use regex::Regex;

/// Node of a shallow parse tree. Leaves carry the token and its tag; phrase
/// nodes carry the chunk label a grammar rule assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf { word: String, tag: String },
    Phrase { label: String, children: Vec<TreeNode> },
}

impl TreeNode {
    /// Symbol a later rule matches against: the tag for a leaf, the chunk
    /// label for a phrase.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Leaf { tag, .. } => tag,
            Self::Phrase { label, .. } => label,
        }
    }
}

/// Cascade chunking grammar: an ordered list of label/pattern rules applied
/// over the tag sequence. Each rule groups matching runs into a phrase node
/// that later rules see as a single unit. Parsing is partial by design:
/// whatever no rule matched stays as a loose child of the root.
pub struct ChunkGrammar {
    rules: Vec<(String, Regex)>,
}

impl ChunkGrammar {
    /// The fixed grammar the tree endpoint uses: noun phrase, preposition,
    /// verb, prepositional phrase, verb phrase, sentence.
    pub fn standard() -> Self {
        Self::from_rules(&[
            ("NP", "<DT>?<JJ>*<NN.*>"),
            ("P", "<IN>"),
            ("V", "<V.*>"),
            ("PP", "<P> <NP>"),
            ("VP", "<V> <NP|PP>*"),
            ("S", "<NP> <VP>"),
        ])
        .expect("standard grammar patterns are valid")
    }

    pub fn from_rules(rules: &[(&str, &str)]) -> Result<Self, regex::Error> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (label, pattern) in rules {
            compiled.push((label.to_string(), compile_tag_pattern(pattern)?));
        }
        Ok(Self { rules: compiled })
    }

    /// Chunk a tagged token sequence into a tree rooted at `S`.
    pub fn parse(&self, tagged: Vec<(String, String)>) -> TreeNode {
        let mut nodes: Vec<TreeNode> = tagged
            .into_iter()
            .map(|(word, tag)| TreeNode::Leaf { word, tag })
            .collect();

        for (label, pattern) in &self.rules {
            nodes = apply_rule(nodes, label, pattern);
        }

        TreeNode::Phrase {
            label: "S".to_string(),
            children: nodes,
        }
    }
}

/// Compile a tag pattern like `<DT>?<JJ>*<NN.*>` into a regex over the
/// angle-bracketed symbol string. A `.` inside a bracket must not cross the
/// bracket boundary, so it becomes `[^<>]`.
fn compile_tag_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let mut out = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let mut inner = String::new();
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                    inner.push(c);
                }
                let inner = inner.replace('.', "[^<>]");
                out.push_str("(?:<(?:");
                out.push_str(&inner);
                out.push_str(")>)");
            }
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }

    Regex::new(&out)
}

/// One cascade pass: wrap every maximal, leftmost match of `pattern` into a
/// phrase node labeled `label`.
fn apply_rule(nodes: Vec<TreeNode>, label: &str, pattern: &Regex) -> Vec<TreeNode> {
    let mut encoded = String::new();
    let mut offsets = Vec::with_capacity(nodes.len());
    for node in &nodes {
        offsets.push(encoded.len());
        encoded.push('<');
        encoded.push_str(node.symbol());
        encoded.push('>');
    }

    let spans: Vec<(usize, usize)> = pattern
        .find_iter(&encoded)
        .map(|m| (m.start(), m.end()))
        .collect();
    if spans.is_empty() {
        return nodes;
    }

    let mut out = Vec::new();
    let mut group: Vec<TreeNode> = Vec::new();
    let mut span_iter = spans.into_iter().peekable();

    for (i, node) in nodes.into_iter().enumerate() {
        let offset = offsets[i];
        let next_offset = offsets.get(i + 1).copied().unwrap_or(usize::MAX);

        if let Some(&(start, end)) = span_iter.peek() {
            if offset >= start && offset < end {
                group.push(node);
                if next_offset >= end {
                    out.push(TreeNode::Phrase {
                        label: label.to_string(),
                        children: std::mem::take(&mut group),
                    });
                    span_iter.next();
                }
                continue;
            }
        }
        out.push(node);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn chunks_simple_sentence() {
        let grammar = ChunkGrammar::standard();
        let tree = grammar.parse(tagged(&[("The", "DT"), ("dog", "NN"), ("barks", "VBZ")]));

        let TreeNode::Phrase { label, children } = &tree else {
            panic!("root must be a phrase");
        };
        assert_eq!(label, "S");
        // the whole sentence reduces to one S chunk
        assert_eq!(children.len(), 1);

        let TreeNode::Phrase { label, children } = &children[0] else {
            panic!("expected inner S chunk");
        };
        assert_eq!(label, "S");
        assert_eq!(children[0].symbol(), "NP");
        assert_eq!(children[1].symbol(), "VP");

        let TreeNode::Phrase { children: np, .. } = &children[0] else {
            panic!("NP must be a phrase");
        };
        assert_eq!(
            np.as_slice(),
            &[
                TreeNode::Leaf {
                    word: "The".to_string(),
                    tag: "DT".to_string()
                },
                TreeNode::Leaf {
                    word: "dog".to_string(),
                    tag: "NN".to_string()
                },
            ]
        );
    }

    #[test]
    fn prepositional_phrase_attaches_to_verb_phrase() {
        let grammar = ChunkGrammar::standard();
        // "The cat sat on the mat"
        let tree = grammar.parse(tagged(&[
            ("The", "DT"),
            ("cat", "NN"),
            ("sat", "VBD"),
            ("on", "IN"),
            ("the", "DT"),
            ("mat", "NN"),
        ]));

        let TreeNode::Phrase { children, .. } = &tree else {
            panic!("root must be a phrase");
        };
        let TreeNode::Phrase { label, children } = &children[0] else {
            panic!("expected S chunk");
        };
        assert_eq!(label, "S");
        let TreeNode::Phrase { label, children: vp } = &children[1] else {
            panic!("expected VP");
        };
        assert_eq!(label, "VP");
        assert_eq!(vp[0].symbol(), "V");
        assert_eq!(vp[1].symbol(), "PP");
    }

    #[test]
    fn unmatched_material_stays_loose() {
        let grammar = ChunkGrammar::standard();
        // an adverb alone matches no rule
        let tree = grammar.parse(tagged(&[("quickly", "RB")]));

        let TreeNode::Phrase { children, .. } = &tree else {
            panic!("root must be a phrase");
        };
        assert_eq!(
            children.as_slice(),
            &[TreeNode::Leaf {
                word: "quickly".to_string(),
                tag: "RB".to_string()
            }]
        );
    }

    #[test]
    fn empty_input_is_a_bare_root() {
        let grammar = ChunkGrammar::standard();
        let tree = grammar.parse(Vec::new());
        assert_eq!(
            tree,
            TreeNode::Phrase {
                label: "S".to_string(),
                children: Vec::new()
            }
        );
    }

    #[test]
    fn tag_wildcard_matches_tag_variants() {
        let grammar = ChunkGrammar::standard();
        // NNS must match <NN.*>
        let tree = grammar.parse(tagged(&[("dogs", "NNS")]));
        let TreeNode::Phrase { children, .. } = &tree else {
            panic!("root must be a phrase");
        };
        assert_eq!(children[0].symbol(), "NP");
    }
}
