//! Text transforms applied to name-derived step titles.
//!
//! [`TitleStyle`] covers the common casing rules via `convert_case`;
//! [`TitleTransform`] wraps either a style or an arbitrary function so the
//! scanner can hold one value regardless of how the caller configured it.

use std::fmt;
use std::sync::Arc;

use convert_case::{Case, Casing};

/// Built-in casing rules for step titles.
///
/// - `AsIs`: keep the humanized sentence (`A user with balance`).
/// - `Lower`: all letters lowercase (`a user with balance`).
/// - `Upper`: all letters uppercase (`A USER WITH BALANCE`).
/// - `Title`: each word capitalised (`A User With Balance`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TitleStyle {
    /// Leave the title unchanged.
    #[default]
    AsIs,
    /// Lowercase every word.
    Lower,
    /// Uppercase every word.
    Upper,
    /// Capitalise every word.
    Title,
}

impl TitleStyle {
    /// Apply the style to `title`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepscan_policy::TitleStyle;
    ///
    /// assert_eq!(TitleStyle::Title.apply("A user with balance"), "A User With Balance");
    /// assert_eq!(TitleStyle::AsIs.apply("A user"), "A user");
    /// ```
    #[must_use]
    pub fn apply(self, title: &str) -> String {
        match self {
            Self::AsIs => title.to_owned(),
            Self::Lower => title.to_case(Case::Lower),
            Self::Upper => title.to_case(Case::Upper),
            Self::Title => title.to_case(Case::Title),
        }
    }
}

type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// Caller-supplied transform applied to every name-derived title.
///
/// Cloning is cheap; clones share the underlying function.
///
/// # Examples
///
/// ```
/// use stepscan_policy::{TitleStyle, TitleTransform};
///
/// let shout = TitleTransform::from_fn(|title| format!("{title}!"));
/// assert_eq!(shout.apply("Done"), "Done!");
///
/// let lower = TitleTransform::from(TitleStyle::Lower);
/// assert_eq!(lower.apply("A user"), "a user");
/// assert_eq!(TitleTransform::identity().apply("Kept"), "Kept");
/// ```
#[derive(Clone)]
pub struct TitleTransform {
    inner: Arc<TransformFn>,
}

impl TitleTransform {
    /// A transform returning its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::from(TitleStyle::AsIs)
    }

    /// Wrap an arbitrary function.
    #[must_use]
    pub fn from_fn(transform: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(transform),
        }
    }

    /// Apply the transform to `title`.
    #[must_use]
    pub fn apply(&self, title: &str) -> String {
        (self.inner)(title)
    }
}

impl Default for TitleTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<TitleStyle> for TitleTransform {
    fn from(style: TitleStyle) -> Self {
        Self::from_fn(move |title| style.apply(title))
    }
}

impl fmt::Debug for TitleTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleTransform").finish_non_exhaustive()
    }
}
