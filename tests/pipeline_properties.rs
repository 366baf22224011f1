// tests/pipeline_properties.rs
//
// Property-style checks over a deterministic synthetic corpus.
// Invariants hold for every generated text:
// - char_count == chars of trimmed text
// - word_count == tokenizer output length; re-tokenizing the joined stream is stable
// - 0.0 <= lexical_diversity <= 1.0, and 0.0 exactly when no content words
// - freq_data sorted by count desc, ties in first-occurrence order
// - is_stop == stop-set membership of the lowercase form

use std::collections::HashMap;

use text_analyzer::language_data::LanguageData;
use text_analyzer::tokenizer::tokenize;
use text_analyzer::Analyzer;

/// Deterministic pseudo-RNG (LCG) so runs are reproducible.
struct Lcg(u64);
impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_usize(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 32) as usize) % n.max(1)
    }
}

const VOCAB: &[&str] = &[
    "The", "the", "cat", "Cat", "is", "not", "happy", "GREAT", "great", "don't", "won't", "42",
    "it's", "and", "but", "terrible", "very", "good", "love", "I", "this", "café", "x", "a",
];
const SEPARATORS: &[&str] = &[" ", "  ", ", ", "! ", "? ", "... ", "\n", "\t", " -- ", "'"];

fn synth_text(rng: &mut Lcg) -> String {
    let n = rng.next_usize(25);
    let mut s = String::new();
    if rng.next_usize(3) == 0 {
        s.push_str("   ");
    }
    for _ in 0..n {
        s.push_str(VOCAB[rng.next_usize(VOCAB.len())]);
        s.push_str(SEPARATORS[rng.next_usize(SEPARATORS.len())]);
    }
    s
}

#[test]
fn invariants_hold_over_synthetic_corpus() {
    let data = LanguageData::bundled().expect("bundled data");
    let stop_words = data.stop_words.clone();
    let analyzer = Analyzer::new(data, 0);
    let mut rng = Lcg::new(0x7E57_7E57_2026_1016);

    let mut checked = 0usize;
    for _ in 0..400 {
        let text = synth_text(&mut rng);
        let trimmed = text.trim();

        let r = match analyzer.analyze(Some(&text)) {
            Ok(r) => r,
            Err(e) => {
                assert!(trimmed.is_empty(), "only blank text may fail: {e} for {text:?}");
                continue;
            }
        };
        checked += 1;

        assert_eq!(r.stats.char_count, trimmed.chars().count());

        let tokens = tokenize(trimmed);
        assert_eq!(r.stats.word_count, tokens.len());
        assert_eq!(tokenize(&tokens.join(" ")).len(), tokens.len());

        let content: Vec<String> = r
            .token_stream
            .iter()
            .filter(|t| !t.is_stop)
            .map(|t| t.text.to_lowercase())
            .collect();
        let d = r.stats.lexical_diversity;
        assert!((0.0..=1.0).contains(&d), "diversity {d}");
        assert_eq!(d == 0.0, content.is_empty(), "diversity {d} for {text:?}");

        for t in &r.token_stream {
            assert_eq!(t.is_stop, stop_words.contains(&t.text.to_lowercase()));
        }

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (i, w) in content.iter().enumerate() {
            first_seen.entry(w.as_str()).or_insert(i);
        }
        for pair in r.freq_data.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.count >= b.count, "not sorted: {:?}", r.freq_data);
            if a.count == b.count {
                assert!(
                    first_seen[a.word.as_str()] < first_seen[b.word.as_str()],
                    "tie order broken: {:?}",
                    r.freq_data
                );
            }
        }
        let total: usize = r.freq_data.iter().map(|f| f.count).sum();
        assert_eq!(total, content.len());
    }
    assert!(checked > 300, "corpus too blank: {checked}");
}
