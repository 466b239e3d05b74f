//! Porter suffix-stripping stemmer.
//!
//! Collapses inflected and derived forms (plurals, verb tenses, common
//! adjective and adverb suffixes) onto one root so that different surface
//! forms of a word are counted together. The root need not be an English
//! word; it only has to be consistent.
//!
//! Rules follow M.F. Porter, "An algorithm for suffix stripping" (1980),
//! <http://tartarus.org/martin/PorterStemmer/def.txt>. The measure conditions
//! of the paper are expressed as syllable boundaries computed once on the
//! input word.

/// Letters that are always vowels.
const VOWELS: &[u8] = b"aeiou";

/// A suffix rule: if the stem ends with `suffix`, replace it with `replacement`.
type Rule = (&'static str, &'static str);

/// Derivational suffixes, keyed on the second-to-last letter.
/// Requires two syllables after removal.
fn derivational_rules(key: u8) -> &'static [Rule] {
    match key {
        b'a' => &[("ational", "ate"), ("tional", "tion")],
        b'c' => &[("enci", "ence"), ("anci", "ance")],
        b'e' => &[("izer", "ize")],
        b'l' => &[
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
        ],
        b'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
        b's' => &[
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
        ],
        b't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
        _ => &[],
    }
}

/// Second pass over adjective suffixes, keyed on the last letter.
/// Requires two syllables after removal.
fn adjective_rules(key: u8) -> &'static [Rule] {
    match key {
        b'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
        b'i' => &[("iciti", "ic")],
        b'l' => &[("ical", "ic"), ("ful", "")],
        b's' => &[("ness", "")],
        _ => &[],
    }
}

/// Residual suffixes, keyed on the second-to-last letter.
/// Requires three syllables after removal.
fn residual_rules(key: u8) -> &'static [Rule] {
    match key {
        b'a' => &[("al", "")],
        b'c' => &[("ance", ""), ("ence", "")],
        b'e' => &[("er", "")],
        b'i' => &[("ic", "")],
        b'l' => &[("able", ""), ("ible", "")],
        b'n' => &[("ant", ""), ("ement", ""), ("ment", ""), ("ent", "")],
        b'o' => &[("sion", "s"), ("tion", "t"), ("ou", "")],
        b's' => &[("ism", "")],
        b't' => &[("ate", ""), ("iti", "")],
        b'u' => &[("ous", "")],
        b'v' => &[("ive", "")],
        b'z' => &[("ize", "")],
        _ => &[],
    }
}

/// `y` is never a consonant here; callers decide from context whether it acts as a vowel.
fn is_consonant(letter: u8) -> bool {
    !VOWELS.contains(&letter) && letter != b'y'
}

fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// True if `word[..pos]` holds a vowel. A `y` counts only when it follows
/// a consonant.
fn stem_has_vowel(word: &[u8], pos: usize) -> bool {
    let head = &word[..pos];
    if head.iter().any(|&c| is_vowel(c)) {
        return true;
    }
    let mut index = head.iter().rposition(|&c| c == b'y');
    while let Some(i) = index {
        if i != 0 && !is_consonant(word[i - 1]) {
            index = word[..i].iter().rposition(|&c| c == b'y');
        } else {
            break;
        }
    }
    matches!(index, Some(i) if i != 0)
}

/// `suffix` is a proper suffix of `word` (never the whole word).
fn has_suffix(word: &[u8], suffix: &str) -> bool {
    word.len() > suffix.len() && word.ends_with(suffix.as_bytes())
}

/// True if the stem keeps at least `want` syllables once `suffix_len`
/// letters are removed from its end. `syllables` holds the boundaries of
/// the second and later syllables of the original word.
fn has_syllable_count(stem: &[u8], syllables: &[usize], want: usize, suffix_len: usize) -> bool {
    if want <= 1 {
        return true;
    }
    syllables.len() >= want - 1 && syllables[want - 2] + suffix_len < stem.len()
}

/// Replace `suffix` with `replacement` if at least `min_stem` letters remain.
fn replace_suffix(word: &mut Vec<u8>, suffix: &str, min_stem: usize, replacement: &str) -> bool {
    if suffix.len() + min_stem > word.len() || !has_suffix(word, suffix) {
        return false;
    }
    word.truncate(word.len() - suffix.len());
    word.extend_from_slice(replacement.as_bytes());
    true
}

/// Apply the first rule whose suffix lies after the boundary of syllable `want`.
fn apply_rules(word: &mut Vec<u8>, syllables: &[usize], want: usize, rules: &[Rule]) -> bool {
    if syllables.len() + 1 < want {
        return false;
    }
    let min_stem = if want > 1 { syllables[want - 2] + 1 } else { 1 };
    rules
        .iter()
        .any(|(suffix, replacement)| replace_suffix(word, suffix, min_stem, replacement))
}

/// Position of the first letter at or after `from` matching `pred`.
fn find_from(word: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> Option<usize> {
    word.get(from..)?
        .iter()
        .position(|&c| pred(c))
        .map(|offset| from + offset)
}

/// Start of the syllable following position `pos`.
///
/// A syllable is one or more vowels optionally preceded by consonants, so
/// the next one starts at the first consonant after a vowel group. `y` is a
/// vowel when it follows a consonant.
fn next_syllable(word: &[u8], pos: usize) -> Option<usize> {
    let mut index = find_from(word, pos, |c| !is_consonant(c));
    while let Some(i) = index {
        if word[i] != b'y' || (i != 0 && is_consonant(word[i - 1])) {
            break;
        }
        index = find_from(word, i + 1, |c| !is_consonant(c));
    }
    let vowel = index?;

    // A 'y' after a vowel closes the group; a 'y' after another 'y' does not.
    let mut index = find_from(word, vowel + 1, |c| !is_vowel(c));
    while let Some(i) = index {
        if word[i] != b'y' || (i != 0 && word[i - 1] != b'y') {
            break;
        }
        index = find_from(word, i + 1, |c| !is_vowel(c));
    }
    index
}

/// Boundaries of the second through fifth syllables. No rule looks further.
fn syllable_boundaries(word: &[u8]) -> Vec<usize> {
    let mut boundaries = Vec::with_capacity(4);
    let mut index = 0;
    while boundaries.len() < 4 {
        match next_syllable(word, index) {
            Some(found) => {
                boundaries.push(found);
                index = found + 1;
            }
            None => break,
        }
    }
    boundaries
}

/// Plurals to singular.
fn strip_plural(stem: &mut Vec<u8>) {
    if !replace_suffix(stem, "sses", 1, "ss")
        && !replace_suffix(stem, "ies", 1, "i")
        && stem.len() > 1
        && stem[stem.len() - 2] != b's'
    {
        stem.pop();
    }
}

/// Past tense and progressive forms to the present tense.
fn strip_tense(stem: &mut Vec<u8>, syllables: &[usize]) {
    if has_suffix(stem, "eed") {
        if has_syllable_count(stem, syllables, 2, 3) {
            stem.pop();
        }
        return;
    }

    let stripped = if has_suffix(stem, "ed") && stem_has_vowel(stem, stem.len() - 2) {
        stem.truncate(stem.len() - 2);
        true
    } else if has_suffix(stem, "ing") && stem_has_vowel(stem, stem.len() - 3) {
        stem.truncate(stem.len() - 3);
        true
    } else {
        false
    };
    if !stripped {
        return;
    }

    // Undo spelling changes made when the suffix was added.
    if has_suffix(stem, "at") || has_suffix(stem, "bl") || has_suffix(stem, "iz") {
        stem.push(b'e');
        return;
    }
    let len = stem.len();
    let last = stem[len - 1];
    if !matches!(last, b'l' | b's' | b'z') && len > 1 && last == stem[len - 2] {
        stem.pop();
    } else if len >= 3
        && has_syllable_count(stem, syllables, 2, 0)
        && !has_syllable_count(stem, syllables, 3, 0)
        && is_consonant(stem[len - 1])
        && !is_consonant(stem[len - 2])
        && is_consonant(stem[len - 3])
    {
        // Short consonant-vowel-consonant stem of exactly two syllables.
        stem.push(b'e');
    }
}

/// Trailing `y` after a vowel-bearing stem becomes `i`, matching the plural rule.
fn normalize_terminal_y(stem: &mut [u8]) {
    let len = stem.len();
    if len < 2 || stem[len - 1] != b'y' {
        return;
    }
    if let Some(last_other) = stem[..len - 1].iter().rposition(|&c| c != b'y') {
        if stem_has_vowel(stem, last_other + 1) {
            stem[len - 1] = b'i';
        }
    }
}

/// Drop a final `e` and a doubled final `l` on long enough stems.
fn final_cleanup(stem: &mut Vec<u8>, syllables: &[usize]) {
    if stem.last() == Some(&b'e') {
        if has_syllable_count(stem, syllables, 3, 1) {
            stem.pop();
        } else if has_syllable_count(stem, syllables, 2, 1) {
            // Keep the 'e' only after consonant-vowel-consonant, where the
            // last consonant is not 'w' or 'x'.
            let len = stem.len();
            let before = stem[len - 2];
            if len < 4
                || !is_consonant(stem[len - 4])
                || is_consonant(stem[len - 3])
                || !is_consonant(before)
                || before == b'w'
                || before == b'x'
            {
                stem.pop();
            }
        }
    }

    if has_syllable_count(stem, syllables, 3, 1) && has_suffix(stem, "ll") {
        stem.pop();
    }
}

/// Reduce a lowercase, punctuation-free word (dashes allowed) to its stem.
///
/// Never fails: empty input and non-ASCII input come back unchanged.
pub fn stem(word: &str) -> String {
    if word.is_empty() || !word.is_ascii() {
        return word.to_string();
    }

    let bytes = word.as_bytes();
    let syllables = syllable_boundaries(bytes);
    let mut stem = bytes.to_vec();

    if stem.last() == Some(&b's') {
        strip_plural(&mut stem);
    } else {
        strip_tense(&mut stem, &syllables);
    }

    normalize_terminal_y(&mut stem);

    if stem.len() > 3 && has_syllable_count(&stem, &syllables, 2, 3) {
        let rules = derivational_rules(stem[stem.len() - 2]);
        apply_rules(&mut stem, &syllables, 2, rules);
    }

    if stem.len() > 2 && has_syllable_count(&stem, &syllables, 2, 3) {
        let rules = adjective_rules(stem[stem.len() - 1]);
        apply_rules(&mut stem, &syllables, 2, rules);
    }

    if stem.len() > 3 && has_syllable_count(&stem, &syllables, 3, 2) {
        let rules = residual_rules(stem[stem.len() - 2]);
        apply_rules(&mut stem, &syllables, 3, rules);
    }

    final_cleanup(&mut stem, &syllables);

    // Only ASCII bytes were removed or appended, so this cannot fail.
    String::from_utf8(stem).unwrap_or_else(|_| word.to_string())
}
