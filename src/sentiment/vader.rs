// src/sentiment/vader.rs
//! Rule-based valence scorer in the VADER family.
//!
//! Per word: lexicon valence, adjusted by
//! - boosters/dampeners in the three preceding words (`very good`, `kind of bad`),
//! - ALL-CAPS emphasis when the text mixes case,
//! - negation in the three preceding words (`not good`, `isn't great`),
//! - a "but" contrast (earlier clause halved, later clause ×1.5).
//!
//! Text-level: `!` and `?` amplify the summed valence, which is then
//! normalized into a compound score in [-1, 1].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Lexicon, PolarityScores, SentimentScorer};

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const ALPHA: f64 = 15.0;

const EXCLAMATION_CAP: usize = 4;
const EXCLAMATION_STEP: f64 = 0.292;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

const NEGATORS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let up = [
        "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
        "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
        "fully", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more",
        "most", "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
        "thoroughly", "totally", "tremendously", "uber", "unbelievably", "unusually", "utterly",
        "very",
    ];
    let down = [
        "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little",
        "marginally", "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
        "sortof", "sort-of",
    ];
    up.iter()
        .map(|w| (*w, B_INCR))
        .chain(down.iter().map(|w| (*w, B_DECR)))
        .collect()
});

/// VADER-style scorer over an owned lexicon (used for a lexicon read from
/// the configured data dir).
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Lexicon,
}

impl VaderScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn sentiment_valence(
        &self,
        i: usize,
        words: &[&str],
        lowered: &[String],
        cap_diff: bool,
    ) -> f64 {
        let item = lowered[i].as_str();
        let Some(mut valence) = self.lexicon.get(item) else {
            return 0.0;
        };

        // "no" directly before another lexicon word only negates it
        if item == "no" && lowered.get(i + 1).is_some_and(|n| self.lexicon.contains(n)) {
            valence = 0.0;
        }
        if (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"))
        {
            valence *= N_SCALAR;
        }

        if cap_diff && is_all_caps(words[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&lowered[prev]) {
                continue;
            }
            let mut s = scalar_inc_dec(words[prev], &lowered[prev], valence, cap_diff);
            match start_i {
                1 => s *= 0.95,
                2 => s *= 0.9,
                _ => {}
            }
            valence += s;
            valence = negation_check(valence, lowered, start_i, i);
        }

        least_check(valence, lowered, i, &self.lexicon)
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words = words_and_emoticons(text);
        if words.is_empty() {
            return PolarityScores::default();
        }
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let item = lowered[i].as_str();
            let kind_of =
                item == "kind" && lowered.get(i + 1).is_some_and(|n| n.as_str() == "of");
            if BOOSTERS.contains_key(item) || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(i, &words, &lowered, cap_diff));
        }

        but_check(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}

/// Whitespace words with surrounding punctuation stripped, unless stripping
/// would leave two characters or fewer (keeps emoticons like `:)` intact).
fn words_and_emoticons(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|tok| {
            let stripped = tok.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                tok
            } else {
                stripped
            }
        })
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    let mut cased = word.chars().filter(|c| c.is_alphabetic()).peekable();
    cased.peek().is_some() && cased.all(|c| c.is_uppercase())
}

/// True when some, but not all, words are ALL CAPS.
fn allcap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

fn is_negated(lower: &str) -> bool {
    NEGATORS.contains(&lower) || lower.contains("n't")
}

fn scalar_inc_dec(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(&base) = BOOSTERS.get(lower) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -base } else { base };
    if cap_diff && is_all_caps(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], start_i: usize, i: usize) -> f64 {
    let w = |k: usize| lowered[i - k].as_str();
    match start_i {
        0 => {
            if is_negated(w(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if w(2) == "never" && matches!(w(1), "so" | "this") {
                return valence * 1.25;
            }
            if w(2) == "without" && w(1) == "doubt" {
                return valence;
            }
            if is_negated(w(2)) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if w(3) == "never" && (matches!(w(2), "so" | "this") || matches!(w(1), "so" | "this")) {
                return valence * 1.25;
            }
            if w(3) == "without" && (w(2) == "doubt" || w(1) == "doubt") {
                return valence;
            }
            if is_negated(w(3)) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

// "least good" flips; "at least" / "very least" do not
fn least_check(valence: f64, lowered: &[String], i: usize, lexicon: &Lexicon) -> f64 {
    if i == 0 || lowered[i - 1] != "least" || lexicon.contains(&lowered[i - 1]) {
        return valence;
    }
    if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * N_SCALAR
}

fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (si, s) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *s *= 0.5;
        } else if si > bi {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep = text.matches('!').count().min(EXCLAMATION_CAP) as f64 * EXCLAMATION_STEP;
    let qm_count = text.matches('?').count();
    let qm = match qm_count {
        0 | 1 => 0.0,
        2..=3 => qm_count as f64 * QUESTION_STEP,
        _ => QUESTION_MAX,
    };
    ep + qm
}

fn normalize(score: f64) -> f64 {
    let n = score / (score * score + ALPHA).sqrt();
    n.clamp(-1.0, 1.0)
}

fn round_to(x: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (x * f).round() / f
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let mut sum: f64 = sentiments.iter().sum();
    let punct = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    if total <= 0.0 {
        return PolarityScores::default();
    }

    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to(neu_count as f64 / total, 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> VaderScorer {
        let lx = Lexicon::from_tsv_str(include_str!(
            "../../tests/fixtures/vader_lexicon_sample.txt"
        ))
        .unwrap();
        VaderScorer::new(lx)
    }

    #[test]
    fn positive_text_scores_positive() {
        let s = scorer().polarity_scores("I love this! This is great, great, great.");
        assert!(s.compound > 0.9, "got {s:?}");
        assert!(s.pos > s.neg);
    }

    #[test]
    fn negation_flips_polarity() {
        let sc = scorer();
        let plain = sc.polarity_scores("The food is good");
        let negated = sc.polarity_scores("The food is not good");
        let contracted = sc.polarity_scores("The food isn't good");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0, "got {negated:?}");
        assert!(contracted.compound < 0.0, "got {contracted:?}");
    }

    #[test]
    fn boosters_and_caps_intensify() {
        let sc = scorer();
        let base = sc.polarity_scores("The service was good").compound;
        let boosted = sc.polarity_scores("The service was very good").compound;
        let shouted = sc.polarity_scores("The service was GOOD").compound;
        let damped = sc.polarity_scores("The service was slightly good").compound;
        assert!(boosted > base);
        assert!(shouted > base);
        assert!(damped < base);
    }

    #[test]
    fn exclamations_amplify_up_to_cap() {
        let sc = scorer();
        let one = sc.polarity_scores("good!").compound;
        let three = sc.polarity_scores("good!!!").compound;
        let four = sc.polarity_scores("good!!!!").compound;
        let nine = sc.polarity_scores("good!!!!!!!!!").compound;
        assert!(three > one);
        assert_eq!(four, nine);
    }

    #[test]
    fn but_shifts_weight_to_later_clause() {
        let s = scorer().polarity_scores("The plot was good but the ending was terrible");
        assert!(s.compound < 0.0, "got {s:?}");
    }

    #[test]
    fn kind_of_is_neutralized() {
        let sc = scorer();
        assert_eq!(sc.polarity_scores("kind of").compound, 0.0);
        // "kind" on its own is a positive lexicon word
        assert!(sc.polarity_scores("so kind").compound > 0.0);
    }

    #[test]
    fn no_words_means_zero_scores() {
        let sc = scorer();
        assert_eq!(sc.polarity_scores(""), PolarityScores::default());
        let punct = sc.polarity_scores("!!! ??? ...");
        assert_eq!(punct.compound, 0.0);
        assert_eq!(punct.pos, 0.0);
        assert_eq!(punct.neg, 0.0);
    }

    #[test]
    fn proportions_sum_to_about_one() {
        let s = scorer().polarity_scores("A wonderful day with a terrible ending, sadly.");
        let total = s.neg + s.neu + s.pos;
        assert!((total - 1.0).abs() < 0.01, "got {s:?}");
        assert!((-1.0..=1.0).contains(&s.compound));
    }

    #[test]
    fn emoticons_survive_punctuation_stripping() {
        assert_eq!(words_and_emoticons("nice :) ok."), vec!["nice", ":)", "ok."]);
        assert!(scorer().polarity_scores(":)").compound > 0.0);
    }

    #[test]
    fn cap_differential_requires_mixed_case() {
        assert!(allcap_differential(&["GREAT", "day"]));
        assert!(!allcap_differential(&["GREAT", "DAY"]));
        assert!(!allcap_differential(&["great", "day"]));
        assert!(!is_all_caps("!!!"));
    }
}
