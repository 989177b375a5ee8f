//! Identifier word splitting and sentence humanizing.
//!
//! Step methods follow either `PascalCase` (`GivenAUserWithBalance`) or
//! `snake_case` (`given_a_user_with_balance`) naming. Both are reduced to the
//! same word list so convention matching and title derivation agree on what a
//! "word" is.

/// Split a method identifier into its words.
///
/// Non-alphanumeric characters separate words. Within a run of alphanumeric
/// characters a new word starts at a lower-to-upper transition, at the last
/// capital of an acronym followed by a lowercase letter, and wherever letters
/// and digits meet. A leading raw-identifier prefix (`r#`) is ignored.
///
/// # Examples
///
/// ```
/// use stepscan_patterns::split_words;
///
/// assert_eq!(split_words("GivenAUserWithBalance"), ["Given", "A", "User", "With", "Balance"]);
/// assert_eq!(split_words("when_the_HTTPRequest_is_sent"), ["when", "the", "HTTP", "Request", "is", "sent"]);
/// assert_eq!(split_words("ThenCartHas3Items"), ["Then", "Cart", "Has", "3", "Items"]);
/// ```
#[must_use]
pub fn split_words(identifier: &str) -> Vec<String> {
    let name = identifier.strip_prefix("r#").unwrap_or(identifier);
    let mut words = Vec::new();
    for segment in name.split(|c: char| !c.is_alphanumeric()) {
        split_segment(segment, &mut words);
    }
    words
}

fn split_segment(segment: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = segment.chars().collect();
    let mut current = String::new();
    for (index, &ch) in chars.iter().enumerate() {
        let prev = index.checked_sub(1).and_then(|i| chars.get(i)).copied();
        let next = chars.get(index + 1).copied();
        let starts_word = prev.is_some_and(|prev| is_boundary(prev, ch, next));
        if starts_word && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
}

fn is_boundary(prev: char, current: char, next: Option<char>) -> bool {
    let lower_to_upper = prev.is_lowercase() && current.is_uppercase();
    let acronym_end =
        prev.is_uppercase() && current.is_uppercase() && next.is_some_and(char::is_lowercase);
    let letter_to_digit = prev.is_alphabetic() && current.is_numeric();
    let digit_to_letter = prev.is_numeric() && current.is_alphabetic();
    lower_to_upper || acronym_end || letter_to_digit || digit_to_letter
}

/// Join words into a sentence.
///
/// Acronyms (more than one character, all capitals) and the pronoun `I` keep
/// their case; every other word is lowercased. The first character of the
/// sentence is then capitalised. Empty words are skipped.
///
/// # Examples
///
/// ```
/// use stepscan_patterns::humanize;
///
/// assert_eq!(humanize(&["A", "User", "With", "Balance"]), "A user with balance");
/// assert_eq!(humanize(&["the", "HTTP", "Request"]), "The HTTP request");
/// assert_eq!(humanize::<&str>(&[]), "");
/// ```
#[must_use]
pub fn humanize<S: AsRef<str>>(words: &[S]) -> String {
    let sentence = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty())
        .map(normalise_word)
        .collect::<Vec<_>>()
        .join(" ");
    capitalise_first(&sentence)
}

/// Split and humanize an identifier in one call.
///
/// # Examples
///
/// ```
/// use stepscan_patterns::humanize_identifier;
///
/// assert_eq!(humanize_identifier("ThenTheOrderIsComplete"), "Then the order is complete");
/// ```
#[must_use]
pub fn humanize_identifier(identifier: &str) -> String {
    humanize(&split_words(identifier))
}

fn normalise_word(word: &str) -> String {
    if word == "I" || is_acronym(word) {
        word.to_owned()
    } else {
        word.to_lowercase()
    }
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().any(char::is_uppercase)
        && !word.chars().any(char::is_lowercase)
}

fn capitalise_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
