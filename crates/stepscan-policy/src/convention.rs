//! Method-name conventions classifying scenario methods.
//!
//! Keyword conventions compare words rather than raw characters: the method
//! name and the keyword are both split with
//! [`split_words`](stepscan_patterns::split_words) and compared ignoring ASCII
//! case. `GivenAUser`, `given_a_user` and `Given_a_user` therefore all match
//! the `Given` prefix, while `Givenchy` does not.

use std::borrow::Cow;

use stepscan_patterns::split_words;

/// A naming rule selecting the methods that belong to a step category.
///
/// # Examples
///
/// ```
/// use stepscan_policy::Convention;
///
/// let given = Convention::prefix("Given");
/// assert!(given.matches("GivenAUserWithBalance"));
/// assert!(given.matches("given_a_user"));
/// assert!(!given.matches("Givenchy"));
///
/// let context = Convention::suffix("Context");
/// assert!(context.matches("EstablishContext"));
/// ```
#[derive(Clone, Debug)]
pub enum Convention {
    /// The name starts with the keyword's words.
    Prefix(Cow<'static, str>),
    /// The name ends with the keyword's words.
    Suffix(Cow<'static, str>),
    /// The name consists of exactly the keyword's words.
    Exact(Cow<'static, str>),
    /// An arbitrary predicate over the raw method name.
    Predicate(fn(&str) -> bool),
}

impl Convention {
    /// Build a [`Convention::Prefix`].
    #[must_use]
    pub fn prefix(keyword: impl Into<Cow<'static, str>>) -> Self {
        Self::Prefix(keyword.into())
    }

    /// Build a [`Convention::Suffix`].
    #[must_use]
    pub fn suffix(keyword: impl Into<Cow<'static, str>>) -> Self {
        Self::Suffix(keyword.into())
    }

    /// Build a [`Convention::Exact`].
    #[must_use]
    pub fn exact(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Exact(name.into())
    }

    /// Build a [`Convention::Predicate`].
    #[must_use]
    pub const fn predicate(predicate: fn(&str) -> bool) -> Self {
        Self::Predicate(predicate)
    }

    /// Return the keyword text for keyword-based conventions.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Prefix(keyword) | Self::Suffix(keyword) | Self::Exact(keyword) => {
                Some(keyword.as_ref())
            }
            Self::Predicate(_) => None,
        }
    }

    /// Decide whether `name` follows this convention.
    ///
    /// Names without any words never match a keyword convention.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if let Self::Predicate(predicate) = self {
            return predicate(name);
        }
        let words = split_words(name);
        !words.is_empty() && self.remainder(&words).is_some()
    }

    /// Remove the convention keyword from `words`.
    ///
    /// Prefixes are removed from the front and suffixes from the back. Exact
    /// and predicate conventions, and word lists the convention does not
    /// match, are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepscan_policy::Convention;
    /// use stepscan_patterns::split_words;
    ///
    /// let words = split_words("AndGivenAnEmptyCart");
    /// assert_eq!(Convention::prefix("AndGiven").strip(&words), ["An", "Empty", "Cart"]);
    /// assert_eq!(Convention::prefix("When").strip(&words), words.as_slice());
    /// ```
    #[must_use]
    pub fn strip<'w>(&self, words: &'w [String]) -> &'w [String] {
        match self {
            Self::Prefix(_) | Self::Suffix(_) => self.remainder(words).unwrap_or(words),
            Self::Exact(_) | Self::Predicate(_) => words,
        }
    }

    fn remainder<'w>(&self, words: &'w [String]) -> Option<&'w [String]> {
        match self {
            Self::Prefix(keyword) => {
                let keyword = split_words(keyword);
                let head = words.get(..keyword.len())?;
                same_words(head, &keyword).then(|| words.get(keyword.len()..))?
            }
            Self::Suffix(keyword) => {
                let keyword = split_words(keyword);
                let split = words.len().checked_sub(keyword.len())?;
                let tail = words.get(split..)?;
                same_words(tail, &keyword).then(|| words.get(..split))?
            }
            Self::Exact(keyword) => {
                let keyword = split_words(keyword);
                same_words(words, &keyword).then(|| words.get(words.len()..))?
            }
            Self::Predicate(_) => None,
        }
    }
}

fn same_words(left: &[String], right: &[String]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}
