/// Join fragments with single spaces by splitting the slice in half and joining the halves.
/// Produces the same string as a left-to-right join, without re-copying a growing prefix.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    match fragments {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [a, b] => {
            let (a, b) = (a.as_ref(), b.as_ref());
            let mut out = String::with_capacity(a.len() + b.len() + 1);
            out.push_str(a);
            out.push(' ');
            out.push_str(b);
            out
        }
        _ => {
            let (left, right) = fragments.split_at(fragments.len() / 2);
            let left = join_fragments(left);
            let right = join_fragments(right);
            let mut out = String::with_capacity(left.len() + right.len() + 1);
            out.push_str(&left);
            out.push(' ');
            out.push_str(&right);
            out
        }
    }
}

/// Lowercase a whitespace-delimited word and strip ASCII punctuation anywhere inside it.
pub fn normalize_token(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tokenize one document's fragments into normalized words, in order. Empty tokens are dropped.
pub fn tokenize<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    join_fragments(fragments)
        .split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_join_matches_naive_join() {
        for n in 0..12 {
            let frags: Vec<String> = (0..n).map(|i| format!("f{i}")).collect();
            assert_eq!(join_fragments(&frags), frags.join(" "), "n = {n}");
        }
    }

    #[test]
    fn join_keeps_word_boundaries() {
        let t = tokenize(&["hurricane", "hits", "philadelphia"]);
        assert_eq!(t, vec!["hurricane", "hits", "philadelphia"]);
    }

    #[test]
    fn strips_punctuation_inside_tokens() {
        assert_eq!(tokenize(&["Don't stop-believing!"]), vec!["dont", "stopbelieving"]);
    }

    #[test]
    fn drops_tokens_that_are_only_punctuation() {
        assert!(tokenize(&["... -- !!!", "  ,,, "]).is_empty());
    }
}
