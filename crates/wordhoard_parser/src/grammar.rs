//! Category transition table and backtracking resolver.
//!
//! Every word arrives with the set of categories the vocabulary allows.
//! The resolver walks the sentence left to right, committing one category
//! per word so that each adjacent pair is a legal transition, and backs up
//! when a branch dead-ends. Successors are tried in table order and the
//! first branch that reaches the end wins.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::vocabulary::Vocabulary;
use crate::word::{self, Word, WordType, WordTypes};

/// What may follow a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    /// A word of this category.
    Type(WordType),
    /// The end of the sentence.
    End,
}

/// Returns the legal successors of a category in priority order.
#[must_use]
pub fn successors(word_type: WordType) -> &'static [Next] {
    use Next::{End, Type};
    use WordType::{
        Adjective, Adverb, Article, Connector, Direction, Literal, Negation, Noun, Numeric,
        Preposition, Pronoun, Verb,
    };

    match word_type {
        Verb => &[
            Type(Article),
            Type(Numeric),
            Type(Adjective),
            Type(Noun),
            Type(Pronoun),
            Type(Direction),
            Type(Literal),
            Type(Preposition),
            Type(Adverb),
            Type(Connector),
            End,
        ],
        Adverb => &[
            Type(Verb),
            Type(Article),
            Type(Numeric),
            Type(Adjective),
            Type(Noun),
            Type(Pronoun),
            Type(Direction),
            Type(Preposition),
            Type(Connector),
            End,
        ],
        Article => &[Type(Numeric), Type(Adjective), Type(Noun)],
        Numeric => &[
            Type(Adjective),
            Type(Noun),
            Type(Preposition),
            Type(Negation),
            Type(Connector),
            Type(Adverb),
            End,
        ],
        Adjective => &[
            Type(Adjective),
            Type(Noun),
            Type(Preposition),
            Type(Negation),
            Type(Connector),
            Type(Adverb),
            End,
        ],
        Noun => &[
            Type(Noun),
            Type(Preposition),
            Type(Negation),
            Type(Connector),
            Type(Adverb),
            End,
        ],
        Pronoun => &[
            Type(Preposition),
            Type(Negation),
            Type(Connector),
            Type(Adverb),
            End,
        ],
        Preposition => &[
            Type(Article),
            Type(Numeric),
            Type(Adjective),
            Type(Noun),
            Type(Pronoun),
            Type(Direction),
            Type(Literal),
        ],
        Negation => &[
            Type(Article),
            Type(Numeric),
            Type(Adjective),
            Type(Noun),
            Type(Pronoun),
        ],
        Connector => &[
            Type(Verb),
            Type(Adverb),
            Type(Article),
            Type(Numeric),
            Type(Adjective),
            Type(Noun),
            Type(Pronoun),
            Type(Direction),
        ],
        Direction => &[Type(Connector), Type(Adverb), End],
        Literal => &[Type(Preposition), Type(Connector), End],
        WordType::Unknown | WordType::Terminator | WordType::Stopword => &[End],
    }
}

/// A singular form found for a plural word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repair {
    /// Replacement text.
    pub text: String,
    /// Categories of the replacement.
    pub possible: WordTypes,
}

/// Categories chosen for a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// One committed category per word.
    pub types: Vec<WordType>,
    /// Plural repairs, per word.
    pub repairs: Vec<Option<Repair>>,
}

impl Resolution {
    /// Writes the categories (and repaired text) into the words.
    pub fn apply(self, words: &mut [Word]) {
        for ((word, word_type), repair) in words.iter_mut().zip(self.types).zip(self.repairs) {
            word.final_type = word_type;
            if let Some(repair) = repair {
                word.rewrite(repair.text);
                word.possible = repair.possible;
            }
        }
    }
}

/// Categories a sentence may open with after a terminator, when it borrows
/// the verb of the sentence before it ("get sword. shield").
pub const CONTINUATION: [WordType; 7] = [
    WordType::Article,
    WordType::Numeric,
    WordType::Adjective,
    WordType::Noun,
    WordType::Pronoun,
    WordType::Direction,
    WordType::Literal,
];

/// Finds one category per word, trying Verb first and then Adverb as the
/// opening category.
///
/// Words must already carry their possible categories.
///
/// # Errors
///
/// Returns [`ParseError::DanglingPreposition`] when every word was placed
/// but the sentence stops where an object was expected, and
/// [`ParseError::Ungrammatical`] otherwise.
pub fn resolve(
    words: &[Word],
    vocabulary: &Vocabulary,
    plural_repair: bool,
) -> Result<Resolution, ParseError> {
    resolve_from(words, vocabulary, plural_repair, &[WordType::Verb, WordType::Adverb])
}

/// Like [`resolve`], but the sentence opens with one of the
/// [`CONTINUATION`] categories instead of a verb.
///
/// # Errors
///
/// As for [`resolve`].
pub fn resolve_continuation(
    words: &[Word],
    vocabulary: &Vocabulary,
    plural_repair: bool,
) -> Result<Resolution, ParseError> {
    resolve_from(words, vocabulary, plural_repair, &CONTINUATION)
}

fn resolve_from(
    words: &[Word],
    vocabulary: &Vocabulary,
    plural_repair: bool,
    openings: &[WordType],
) -> Result<Resolution, ParseError> {
    if words.is_empty() {
        return Ok(Resolution {
            types: Vec::new(),
            repairs: Vec::new(),
        });
    }

    let mut deepest = 0;
    for &start in openings {
        let mut search = Search::new(words, vocabulary, plural_repair);
        if search.conjecture(Next::Type(start), 0) {
            debug!(sentence = %word::join(words), types = ?search.types, "resolved");
            return Ok(Resolution {
                types: search.types,
                repairs: search.repairs,
            });
        }
        deepest = deepest.max(search.deepest);
    }

    debug!(sentence = %word::join(words), deepest, "no grammatical reading");
    Err(rejection(words, deepest))
}

fn rejection(words: &[Word], deepest: usize) -> ParseError {
    match words.get(deepest) {
        Some(unknown) => ParseError::Ungrammatical {
            understood: word::join(&words[..deepest]),
            unknown: unknown.as_str().to_string(),
        },
        None => {
            let verb = words
                .iter()
                .find(|w| w.can_be(WordType::Verb))
                .or_else(|| words.first())
                .map(|w| w.as_str().to_string())
                .unwrap_or_default();
            ParseError::DanglingPreposition { verb }
        }
    }
}

/// Search state for one top-level attempt.
struct Search<'a> {
    words: &'a [Word],
    vocabulary: &'a Vocabulary,
    plural_repair: bool,
    possible: Vec<WordTypes>,
    types: Vec<WordType>,
    repairs: Vec<Option<Repair>>,
    plural_checking: bool,
    deepest: usize,
}

impl<'a> Search<'a> {
    fn new(words: &'a [Word], vocabulary: &'a Vocabulary, plural_repair: bool) -> Self {
        Self {
            words,
            vocabulary,
            plural_repair,
            possible: words.iter().map(|w| w.possible).collect(),
            types: vec![WordType::Unknown; words.len()],
            repairs: vec![None; words.len()],
            plural_checking: false,
            deepest: 0,
        }
    }

    fn conjecture(&mut self, assumed: Next, position: usize) -> bool {
        self.deepest = self.deepest.max(position);

        let words = self.words;
        let Some(word) = words.get(position) else {
            return assumed == Next::End;
        };

        if self.possible[position].contains(WordTypes::STOPWORD) {
            self.types[position] = WordType::Stopword;
            if self.conjecture(assumed, position + 1) {
                return true;
            }
            self.types[position] = WordType::Unknown;
            return false;
        }

        let Next::Type(assumed) = assumed else {
            return false;
        };
        if !self.possible[position].contains(assumed.flag()) && word.final_type != assumed {
            return false;
        }

        self.types[position] = assumed;
        let plural_checking = self.plural_checking;
        if assumed == WordType::Numeric {
            self.plural_checking = true;
        }

        for &next in successors(assumed) {
            if self.conjecture(next, position + 1) || self.retry_plural(assumed, next, position + 1)
            {
                return true;
            }
        }

        self.plural_checking = plural_checking;
        self.types[position] = WordType::Unknown;
        false
    }

    /// Retries the next word in singular form ("swords" → "sword").
    fn retry_plural(&mut self, current: WordType, next: Next, position: usize) -> bool {
        let Next::Type(next_type) = next else {
            return false;
        };
        if !self.plural_repair
            || !self.plural_checking
            || !matches!(
                current,
                WordType::Numeric | WordType::Article | WordType::Adjective
            )
            || self.repairs.get(position).is_none_or(Option::is_some)
        {
            return false;
        }
        let words = self.words;
        let Some(word) = words.get(position) else {
            return false;
        };

        for text in singular_forms(word.as_str()) {
            let possible = self.vocabulary.categories(&text);
            if !possible.contains(next_type.flag()) {
                continue;
            }
            let original = self.possible[position];
            self.possible[position] = possible;
            self.repairs[position] = Some(Repair { text, possible });
            if self.conjecture(next, position) {
                trace!(word = %word, "plural repaired");
                return true;
            }
            self.possible[position] = original;
            self.repairs[position] = None;
        }
        false
    }
}

/// Candidate singular forms, most likely first.
fn singular_forms(text: &str) -> Vec<String> {
    let mut forms = Vec::new();
    if let Some(stem) = text.strip_suffix('s').or_else(|| text.strip_suffix('S')) {
        if !stem.is_empty() {
            forms.push(stem.to_string());
        }
        if let Some(stem) = text
            .strip_suffix("es")
            .or_else(|| text.strip_suffix("ES"))
            .filter(|stem| !stem.is_empty())
        {
            forms.push(stem.to_string());
        }
    }
    forms
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::vocabulary::Verb;
    use wordhoard_foundation::AtomId;

    fn vocabulary() -> Vocabulary {
        let mut vocab = Vocabulary::new();
        vocab.register_verb(Verb::new("get"), &["take"]);
        vocab.register_verb(Verb::new("put"), &[]);
        vocab.register_verb(Verb::new("drop"), &[]);
        vocab.register_verb(Verb::new("go"), &[]);
        vocab.register_noun("sword", AtomId::new(10));
        vocab.register_noun("box", AtomId::new(11));
        vocab.register_noun("shield", AtomId::new(12));
        vocab.register_adjective("red", "red");
        vocab.register_word("the", WordTypes::ARTICLE);
        vocab.register_word("in", WordTypes::PREPOSITION);
        vocab.register_word("and", WordTypes::CONNECTOR);
        vocab.register_word("except", WordTypes::NEGATION);
        vocab.register_word("please", WordTypes::STOPWORD);
        vocab.register_pronoun("it");
        vocab.register_number("all", u32::MAX);
        vocab.register_direction("north", "north");
        vocab.register_adverb("quickly");
        vocab
    }

    fn classify(vocab: &Vocabulary, text: &str) -> Vec<Word> {
        text.split_whitespace()
            .map(|t| match t.parse::<i64>() {
                Ok(n) => Word::number(n, t),
                Err(_) => Word::text(t),
            })
            .map(|w| {
                let possible = vocab.classify(&w);
                w.with_possible(possible)
            })
            .collect()
    }

    fn types_of(text: &str) -> Result<Vec<WordType>, ParseError> {
        let vocab = vocabulary();
        let words = classify(&vocab, text);
        resolve(&words, &vocab, true).map(|r| r.types)
    }

    #[test]
    fn continuation_opens_with_an_object() {
        use WordType::{Adjective, Article, Connector, Noun};
        let vocab = vocabulary();
        let words = classify(&vocab, "the red shield and sword");
        assert!(resolve(&words, &vocab, true).is_err());
        assert_eq!(
            resolve_continuation(&words, &vocab, true).unwrap().types,
            vec![Article, Adjective, Noun, Connector, Noun]
        );

        let words = classify(&vocab, "in box");
        assert!(resolve_continuation(&words, &vocab, true).is_err());
    }

    #[test]
    fn simple_verb_noun() {
        use WordType::{Noun, Verb};
        assert_eq!(types_of("get sword").unwrap(), vec![Verb, Noun]);
    }

    #[test]
    fn article_adjective_noun_preposition() {
        use WordType::{Adjective, Article, Noun, Preposition, Verb};
        assert_eq!(
            types_of("put the red sword in box").unwrap(),
            vec![Verb, Article, Adjective, Noun, Preposition, Noun]
        );
    }

    #[test]
    fn connector_then_verb() {
        use WordType::{Connector, Noun, Pronoun, Verb};
        assert_eq!(
            types_of("get sword and drop it").unwrap(),
            vec![Verb, Noun, Connector, Verb, Pronoun]
        );
    }

    #[test]
    fn negation_after_numeric() {
        use WordType::{Negation, Noun, Numeric, Verb};
        assert_eq!(
            types_of("get all except sword").unwrap(),
            vec![Verb, Numeric, Negation, Noun]
        );
    }

    #[test]
    fn stopwords_are_skipped_anywhere() {
        use WordType::{Noun, Stopword, Verb};
        assert_eq!(
            types_of("please get sword please").unwrap(),
            vec![Stopword, Verb, Noun, Stopword]
        );
    }

    #[test]
    fn adverb_can_open_the_sentence() {
        use WordType::{Adverb, Noun, Verb};
        assert_eq!(
            types_of("quickly get sword").unwrap(),
            vec![Adverb, Verb, Noun]
        );
    }

    #[test]
    fn direction_ends_sentence() {
        use WordType::{Direction, Verb};
        assert_eq!(types_of("go north").unwrap(), vec![Verb, Direction]);
    }

    #[test]
    fn plural_repair_after_number() {
        let vocab = vocabulary();
        let mut words = classify(&vocab, "get 3 swords");
        let resolution = resolve(&words, &vocab, true).unwrap();
        assert_eq!(
            resolution.types,
            vec![WordType::Verb, WordType::Numeric, WordType::Noun]
        );
        resolution.apply(&mut words);
        assert_eq!(words[2].as_str(), "sword");
    }

    #[test]
    fn plural_repair_strips_es() {
        let vocab = vocabulary();
        let mut words = classify(&vocab, "get 2 red boxes");
        resolve(&words, &vocab, true).unwrap().apply(&mut words);
        assert_eq!(words[3].as_str(), "box");
    }

    #[test]
    fn plural_repair_needs_a_number() {
        let err = types_of("get swords").unwrap_err();
        assert_eq!(
            err,
            ParseError::Ungrammatical {
                understood: "get".to_string(),
                unknown: "swords".to_string(),
            }
        );
    }

    #[test]
    fn plural_repair_can_be_disabled() {
        let vocab = vocabulary();
        let words = classify(&vocab, "get 3 swords");
        assert!(resolve(&words, &vocab, false).is_err());
    }

    #[test]
    fn unknown_word_reports_prefix() {
        let err = types_of("get the xyzzy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "I understand \"get the\", but what is \"xyzzy\"?"
        );
    }

    #[test]
    fn dangling_preposition() {
        let err = types_of("put sword in").unwrap_err();
        assert_eq!(err.to_string(), "What do you want to put?");
    }

    #[test]
    fn leading_unknown_word() {
        let err = types_of("xyzzy sword").unwrap_err();
        assert_eq!(err.to_string(), "What is \"xyzzy\"?");
    }

    #[test]
    fn rerun_is_idempotent() {
        let vocab = vocabulary();
        let mut words = classify(&vocab, "get 3 red swords and drop it");
        resolve(&words, &vocab, true).unwrap().apply(&mut words);
        let first: Vec<WordType> = words.iter().map(|w| w.final_type).collect();

        let again = resolve(&words, &vocab, true).unwrap();
        assert_eq!(again.types, first);
    }

    #[test]
    fn every_category_can_end_or_continue() {
        for t in [
            WordType::Verb,
            WordType::Noun,
            WordType::Pronoun,
            WordType::Direction,
        ] {
            assert!(successors(t).contains(&Next::End), "{t} cannot end");
        }
        for t in [WordType::Article, WordType::Preposition, WordType::Negation] {
            assert!(!successors(t).contains(&Next::End), "{t} can end");
        }
    }

    const WORDS: &[&str] = &[
        "get", "put", "drop", "the", "red", "sword", "box", "shield", "in", "and", "it", "all",
        "except", "please", "north", "quickly", "3", "swords",
    ];

    proptest! {
        #[test]
        fn resolved_sentences_resolve_identically(
            picks in prop::collection::vec(0..WORDS.len(), 1..8)
        ) {
            let vocab = vocabulary();
            let text = picks.iter().map(|&i| WORDS[i]).collect::<Vec<_>>().join(" ");
            let mut words = classify(&vocab, &text);
            if let Ok(resolution) = resolve(&words, &vocab, true) {
                resolution.apply(&mut words);
                let committed: Vec<WordType> = words.iter().map(|w| w.final_type).collect();
                let again = resolve(&words, &vocab, true);
                prop_assert_eq!(again.map(|r| r.types), Ok(committed));
            }
        }

        #[test]
        fn resolution_never_leaves_unknowns(
            picks in prop::collection::vec(0..WORDS.len(), 1..8)
        ) {
            let vocab = vocabulary();
            let text = picks.iter().map(|&i| WORDS[i]).collect::<Vec<_>>().join(" ");
            let words = classify(&vocab, &text);
            if let Ok(resolution) = resolve(&words, &vocab, true) {
                prop_assert!(resolution.types.iter().all(|t| *t != WordType::Unknown));
            }
        }
    }
}
