// wordguard-core/tests/filter_integration_tests.rs
//! Integration tests for the `WordFilter` dispatcher: membership, allow-list
//! suppression, match policy, replacement, normalization, and rebuilds.

use anyhow::Result;
use std::sync::Arc;

use wordguard_core::{
    CaseFolding, CharRepeat, FilterConfig, ReplaceStrategy, WidthFolding, WordFilter, WordList,
    WordMatch,
};

fn filter_for(deny: &[&str]) -> Result<WordFilter> {
    WordFilter::new(FilterConfig::new().deny_source(WordList::new(deny.to_vec())))
}

#[test]
fn test_every_compiled_word_is_found_exactly() -> Result<()> {
    let words = ["badword", "secret", "classified"];
    let filter = filter_for(&words)?;

    for word in words {
        assert!(filter.contains(word), "missing word: {word}");
        let m = filter.find_first(word).expect("expected a match");
        assert_eq!(m.start, 0);
        assert_eq!(m.end, word.chars().count());
        assert_eq!(m.text, word);
    }
    Ok(())
}

#[test]
fn test_allow_list_suppresses_deny_entry() -> Result<()> {
    let config = FilterConfig::new()
        .deny_source(WordList::new(["badword", "secret"]))
        .allow_source(WordList::new(["badword"]));
    let filter = WordFilter::new(config)?;

    assert!(!filter.contains("a badword here"));
    assert!(filter.contains("a secret here"));
    assert_eq!(filter.word_count(), 1);
    Ok(())
}

#[test]
fn test_longest_match_wins_at_same_start() -> Result<()> {
    let filter = filter_for(&["foo", "foobar"])?;
    let matches = filter.find_all("xfoobary");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "foobar");
    assert_eq!((matches[0].start, matches[0].end), (1, 7));
    Ok(())
}

#[test]
fn test_matches_do_not_overlap() -> Result<()> {
    let filter = filter_for(&["aa"])?;
    let spans: Vec<(usize, usize)> = filter
        .find_all("aaaa")
        .iter()
        .map(|m| (m.start, m.end))
        .collect();
    assert_eq!(spans, vec![(0, 2), (2, 4)]);
    Ok(())
}

#[test]
fn test_find_all_reports_every_occurrence() -> Result<()> {
    let filter = filter_for(&["foo", "bar"])?;
    let matches = filter.find_all("foo bar foo");
    let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();

    assert_eq!(texts, vec!["foo", "bar", "foo"]);
    assert_eq!(filter.find_all_words("foo bar foo"), vec!["foo", "bar"]);
    Ok(())
}

#[test]
fn test_replace_preserves_character_count() -> Result<()> {
    let filter = filter_for(&["badword"])?;
    let replaced = filter.replace("xbadwordy");

    assert_eq!(replaced, "x*******y");
    assert_eq!(replaced.chars().count(), "xbadwordy".chars().count());
    Ok(())
}

#[test]
fn test_replace_counts_codepoints_for_multibyte_text() -> Result<()> {
    let filter = filter_for(&["héllo"])?;
    assert_eq!(filter.replace("say héllo!"), "say *****!");
    assert_eq!(filter.replace_with_char("say héllo!", '-'), "say -----!");
    Ok(())
}

#[test]
fn test_custom_replace_strategy() -> Result<()> {
    struct FixedToken;
    impl ReplaceStrategy for FixedToken {
        fn replace(&self, _m: &WordMatch) -> String {
            "[BLOCKED]".to_string()
        }
    }

    let filter = filter_for(&["badword"])?;
    assert_eq!(
        filter.replace_with("a badword twice badword", &FixedToken),
        "a [BLOCKED] twice [BLOCKED]"
    );
    Ok(())
}

#[test]
fn test_replace_returns_clean_text_unchanged() -> Result<()> {
    let filter = filter_for(&["badword"])?;
    assert_eq!(filter.replace("nothing to see"), "nothing to see");
    Ok(())
}

#[test]
fn test_case_folding_matches_and_reports_original() -> Result<()> {
    let config = FilterConfig::new()
        .deny_source(WordList::new(["BADWORD"]))
        .normalizer(CaseFolding);
    let filter = WordFilter::new(config)?;

    assert!(filter.contains("a BaDwOrD here"));
    let m = filter.find_first("a BaDwOrD here").expect("expected a match");
    assert_eq!(m.text, "BaDwOrD");
    assert_eq!((m.start, m.end), (2, 9));
    assert_eq!(filter.replace("a BaDwOrD here"), "a ******* here");
    Ok(())
}

#[test]
fn test_width_folding_matches_and_reports_original() -> Result<()> {
    let config = FilterConfig::new()
        .deny_source(WordList::new(["bad"]))
        .normalizer(WidthFolding);
    let filter = WordFilter::new(config)?;

    let text = "xｂａｄy";
    assert!(filter.contains(text));
    let m = filter.find_first(text).expect("expected a match");
    // The record carries the full-width original, not the folded form.
    assert_eq!(m.text, "ｂａｄ");
    assert_eq!((m.start, m.end), (1, 4));
    assert_eq!(filter.replace(text), "x***y");
    Ok(())
}

#[test]
fn test_find_all_with_transform() -> Result<()> {
    let filter = filter_for(&["foo"])?;
    let starts = filter.find_all_with("foo x foo", |m| m.start);
    assert_eq!(starts, vec![0, 6]);

    let first = filter.find_first_with("x foo", |m| m.text.clone());
    assert_eq!(first, Some("foo".to_string()));
    Ok(())
}

#[test]
fn test_empty_word_set_and_empty_input() -> Result<()> {
    let empty = WordFilter::new(FilterConfig::new())?;
    assert_eq!(empty.word_count(), 0);
    assert!(!empty.contains("anything at all"));
    assert!(empty.find_first("anything at all").is_none());
    assert!(empty.find_all("anything at all").is_empty());
    assert_eq!(empty.replace("anything at all"), "anything at all");

    let filter = filter_for(&["badword"])?;
    assert!(!filter.contains(""));
    assert!(filter.find_first("").is_none());
    assert!(filter.find_all("").is_empty());
    assert_eq!(filter.replace(""), "");
    Ok(())
}

#[test]
fn test_empty_deny_word_is_a_build_error() {
    let result = WordFilter::new(FilterConfig::new().deny_source(WordList::new(["ok", ""])));
    assert!(result.is_err());
}

#[test_log::test]
fn test_reload_is_idempotent() -> Result<()> {
    let filter = filter_for(&["foo", "foobar", "aa"])?;
    let text = "xfoobary aaaa foo";
    let before = filter.find_all(text);

    filter.reload()?;

    assert_eq!(filter.find_all(text), before);
    assert_eq!(filter.word_count(), 3);
    Ok(())
}

#[test]
fn test_concurrent_scans_share_one_automaton() -> Result<()> {
    let filter = Arc::new(filter_for(&["badword"])?);
    let mut handles = Vec::new();

    for i in 0..8 {
        let filter = Arc::clone(&filter);
        handles.push(std::thread::spawn(move || {
            let text = format!("thread {i} says badword");
            assert!(filter.contains(&text));
            assert_eq!(filter.find_all(&text).len(), 1);
            filter.replace(&text)
        }));
    }
    for handle in handles {
        let replaced = handle.join().expect("scan thread panicked");
        assert!(replaced.ends_with("*******"));
    }
    Ok(())
}

#[test]
fn test_independent_filters_coexist() -> Result<()> {
    let a = filter_for(&["alpha"])?;
    let b = filter_for(&["beta"])?;

    assert!(a.contains("alpha"));
    assert!(!a.contains("beta"));
    assert!(b.contains("beta"));
    assert!(!b.contains("alpha"));
    Ok(())
}

#[test]
fn test_default_char_repeat_masks_with_asterisk() {
    let strategy = CharRepeat::default();
    let m = WordMatch {
        text: "abc".to_string(),
        start: 0,
        end: 3,
    };
    assert_eq!(strategy.replace(&m), "***");
}
