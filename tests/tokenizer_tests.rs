use word_ranker::{normalize_token, TokenRule, Tokenizer};

#[cfg(test)]
mod alphabetic_tokenizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_tokens() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let text = "The QUICK Brown fox";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_rejects_whole_word_on_single_bad_character() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let text = "co.py hello, world don't e-mail snake_case #define ok";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["world", "ok"]);
    }

    #[test]
    fn test_rejects_numbers_and_non_ascii_letters() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let text = "42 v2 café naïve plain";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["plain"]);
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let text = "  one\ttwo\n\nthree \r\n four\x0cfive\x0bsix  ";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["one", "two", "three", "four", "five", "six"]);
    }

    #[test]
    fn test_vertical_tab_separates_words() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let tokens = tokenizer.tokenize("cat\x0bdog cat");
        assert_eq!(tokens, vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let tokens = tokenizer.tokenize("");
        assert_eq!(tokens, Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        let tokenizer = Tokenizer::alphabetic_parser();

        let tokens = tokenizer.tokenize(" \n\t \n");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_token_rule_accessor() {
        assert_eq!(
            Tokenizer::alphabetic_parser().token_rule(),
            TokenRule::Alphabetic
        );
        assert_eq!(Tokenizer::extended_parser().token_rule(), TokenRule::Extended);
    }
}

#[cfg(test)]
mod extended_tokenizer_tests {
    use super::*;

    #[test]
    fn test_accepts_underscore_and_hyphen() {
        let tokenizer = Tokenizer::extended_parser();

        let text = "Snake_Case well-known __init__ x";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["snake_case", "well-known", "__init__", "x"]);
    }

    #[test]
    fn test_lone_hash_only() {
        let tokenizer = Tokenizer::extended_parser();

        let text = "# #include #if #";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["#", "#"]);
    }

    #[test]
    fn test_rejects_other_punctuation() {
        let tokenizer = Tokenizer::extended_parser();

        let text = "-dash co.py it's a#b good";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["good"]);
    }
}

#[cfg(test)]
mod normalization_tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        for word in ["Hello", "WORLD", "mixed_Case", "well-Known", "#"] {
            let once = normalize_token(word.as_bytes());
            let twice = normalize_token(once.as_bytes());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_folds_ascii_only() {
        assert_eq!(normalize_token(b"ABCxyz"), "abcxyz");
        assert_eq!(normalize_token("ÀB".as_bytes()), "Àb");
    }
}
