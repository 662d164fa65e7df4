use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Stanza language identifier (e.g. "fa")
    pub lang: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
        }
    }
}

/// Response of `POST /analyze`: sentences, each an ordered list of tokens.
///
/// Tokens stay opaque (`serde_json::Value`) unless a concrete type such as
/// [`StanzaToken`] is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Analysis<T = serde_json::Value> {
    sentences: Vec<Vec<T>>,
}

impl<T> Analysis<T> {
    pub fn new(sentences: Vec<Vec<T>>) -> Self {
        Self { sentences }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of tokens in the sentence at `index`, None if there is no such sentence.
    pub fn token_count(&self, index: usize) -> Option<usize> {
        self.sentences.get(index).map(Vec::len)
    }

    pub fn sentences(&self) -> &[Vec<T>] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<Vec<T>> {
        self.sentences
    }
}

/// Position of a token inside its sentence.
///
/// Multi-word tokens (e.g. contractions split into several syntactic words)
/// carry the id range of the words they cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTokenId")]
pub enum TokenId {
    Word(u32),
    MultiWord { first: u32, last: u32 },
}

/// Stanza has emitted ids as `3`, `[3, 4]` and `"3-4"` across versions
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTokenId {
    Index(u32),
    Range(Vec<u32>),
    Text(String),
}

impl TryFrom<RawTokenId> for TokenId {
    type Error = String;

    fn try_from(raw: RawTokenId) -> Result<Self, Self::Error> {
        match raw {
            RawTokenId::Index(id) => Ok(TokenId::Word(id)),
            RawTokenId::Range(ids) => match ids.as_slice() {
                [id] => Ok(TokenId::Word(*id)),
                [first, last] => Ok(TokenId::MultiWord {
                    first: *first,
                    last: *last,
                }),
                _ => Err(format!(
                    "token id must have one or two elements, got {}",
                    ids.len()
                )),
            },
            RawTokenId::Text(text) => {
                let parse = |s: &str| {
                    s.trim()
                        .parse::<u32>()
                        .map_err(|e| format!("invalid token id '{}': {}", text, e))
                };
                match text.split_once('-') {
                    Some((first, last)) => Ok(TokenId::MultiWord {
                        first: parse(first)?,
                        last: parse(last)?,
                    }),
                    None => Ok(TokenId::Word(parse(text.as_str())?)),
                }
            }
        }
    }
}

/// Token as serialized by Stanza's `Document.to_dict()`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StanzaToken {
    pub id: TokenId,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub upos: Option<String>,
    #[serde(default)]
    pub xpos: Option<String>,
    /// Universal features, e.g. "Number=Sing|Person=3"
    #[serde(default)]
    pub feats: Option<String>,
    #[serde(default)]
    pub head: Option<u32>,
    #[serde(default)]
    pub deprel: Option<String>,
    /// Older servers only report offsets here: "start_char=0|end_char=4"
    #[serde(default)]
    pub misc: Option<String>,
    #[serde(default)]
    pub start_char: Option<usize>,
    #[serde(default)]
    pub end_char: Option<usize>,
}

impl StanzaToken {
    pub fn is_multi_word(&self) -> bool {
        matches!(self.id, TokenId::MultiWord { .. })
    }

    /// Values of all features, in order: "Number=Sing|Person=3" -> ["Sing", "3"]
    pub fn feature_values(&self) -> Vec<&str> {
        self.features().map(|(_, value)| value).collect()
    }

    /// Value of a single feature by name
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn start(&self) -> Option<usize> {
        self.start_char.or_else(|| self.misc_offset("start_char"))
    }

    pub fn end(&self) -> Option<usize> {
        self.end_char.or_else(|| self.misc_offset("end_char"))
    }

    fn features(&self) -> impl Iterator<Item = (&str, &str)> {
        self.feats
            .as_deref()
            .unwrap_or_default()
            .split('|')
            .filter_map(|pair| pair.split_once('='))
    }

    fn misc_offset(&self, key: &str) -> Option<usize> {
        self.misc
            .as_deref()?
            .split('|')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.parse().ok())
    }
}

/// A syntactic word with the character span it occupies in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub token: &'a StanzaToken,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// Resolve the character span of every syntactic word in `sentence`.
///
/// Multi-word tokens are not returned themselves. Words whose id falls inside
/// the preceding multi-word token's range take that token's span, since
/// Stanza does not report offsets for the expanded words.
pub fn word_spans(sentence: &[StanzaToken]) -> Vec<WordSpan<'_>> {
    let mut spans = Vec::with_capacity(sentence.len());
    // (last covered id, start, end) of the multi-word token in effect
    let mut multi_word: Option<(u32, Option<usize>, Option<usize>)> = None;

    for token in sentence {
        match token.id {
            TokenId::MultiWord { last, .. } => {
                multi_word = Some((last, token.start(), token.end()));
            }
            TokenId::Word(id) => {
                let (start, end) = match multi_word {
                    Some((last, start, end)) if id <= last => (start, end),
                    _ => {
                        multi_word = None;
                        (token.start(), token.end())
                    }
                };
                spans.push(WordSpan { token, start, end });
            }
        }
    }

    spans
}
