//! Lazy, unbounded name-variant sequences, one per symbol kind.
//!
//! Every sequence starts with the preferred name and derives each following candidate from the
//! previous one by adding a single underscore, so later variants are strictly longer and can
//! never repeat.

use std::iter;

/// Method selector variants.
///
/// Zero-parameter selectors grow at the end (`foo`, `foo_`, `foo__`). Selectors with parameters
/// grow right before their final character, which keeps the trailing colon of the last label in
/// place (`make:with:`, `make:with_:`, `make:with__:`).
pub fn selector_candidates(selector: &str, has_parameters: bool) -> impl Iterator<Item = String> {
    iter::successors(Some(selector.to_owned()), move |previous: &String| {
        Some(if has_parameters {
            underscore_before_last(previous)
        } else {
            underscore_appended(previous)
        })
    })
}

/// Class and protocol name variants: `Foo`, `Foo_`, `Foo__`.
pub fn class_name_candidates(name: &str) -> impl Iterator<Item = String> {
    iter::successors(Some(name.to_owned()), |previous: &String| {
        Some(underscore_appended(previous))
    })
}

/// Secondary display (attribute) name variants: underscore inserted before the last character.
///
/// For a Swift name such as `make(with:)` this yields `make(with:_)`, not `make(with_:)`; the
/// underscore lands inside the closing parenthesis rather than before the last label's colon.
pub fn attribute_candidates(name: &str) -> impl Iterator<Item = String> {
    iter::successors(Some(name.to_owned()), |previous: &String| {
        Some(underscore_before_last(previous))
    })
}

fn underscore_appended(previous: &str) -> String {
    let mut next = String::with_capacity(previous.len() + 1);
    next.push_str(previous);
    next.push('_');
    next
}

fn underscore_before_last(previous: &str) -> String {
    let mut next = String::with_capacity(previous.len() + 1);
    next.push_str(previous);
    match previous.char_indices().next_back() {
        Some((index, _)) => next.insert(index, '_'),
        None => next.push('_'),
    }
    next
}

#[cfg(test)]
mod tests {
    //! Pins the first few variants of each generator; the cache relies on their exact shape.
    use super::*;

    fn first(sequence: impl Iterator<Item = String>, count: usize) -> Vec<String> {
        sequence.take(count).collect()
    }

    #[test]
    fn nullary_selector_appends() {
        assert_eq!(
            first(selector_candidates("foo", false), 3),
            ["foo", "foo_", "foo__"],
            "zero-parameter selectors grow at the end"
        );
    }

    #[test]
    fn parameterized_selector_keeps_trailing_colon() {
        assert_eq!(
            first(selector_candidates("make:with:", true), 3),
            ["make:with:", "make:with_:", "make:with__:"],
            "underscore goes right before the final colon"
        );
    }

    #[test]
    fn class_names_append() {
        assert_eq!(first(class_name_candidates("Foo"), 3), ["Foo", "Foo_", "Foo__"]);
    }

    #[test]
    fn attribute_names_insert_before_last_character() {
        assert_eq!(
            first(attribute_candidates("make(with:)"), 3),
            ["make(with:)", "make(with:_)", "make(with:__)"]
        );
    }

    #[test]
    fn insertion_respects_multibyte_tail() {
        assert_eq!(first(attribute_candidates("naïé"), 2)[1], "naï_é");
    }

    #[test]
    fn empty_name_still_grows() {
        assert_eq!(first(attribute_candidates(""), 3), ["", "_", "__"]);
        assert_eq!(first(selector_candidates("", true), 2), ["", "_"]);
    }

    #[test]
    fn sequences_are_unbounded() {
        let last = class_name_candidates("X").nth(500).expect("generator never ends");
        assert_eq!(last.len(), 501);
    }
}
