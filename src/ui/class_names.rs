//! Class-name composition.
//!
//! Every component builds its `class` attribute from a base class plus a set
//! of conditional fragments. A fragment is either text or "nothing" (`None`,
//! an empty string, or a skipped [`ClassList::push_if`]); nothing is dropped
//! and the survivors are joined with a single space, in order.

use std::borrow::Cow;
use std::fmt;

/// A value that may contribute a class to a class list.
pub trait ClassFragment {
    /// The class text, or `None` when this fragment contributes nothing.
    fn as_fragment(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn as_fragment(&self) -> Option<&str> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl ClassFragment for String {
    fn as_fragment(&self) -> Option<&str> {
        self.as_str().as_fragment()
    }
}

impl ClassFragment for Cow<'_, str> {
    fn as_fragment(&self) -> Option<&str> {
        self.as_ref().as_fragment()
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn as_fragment(&self) -> Option<&str> {
        (**self).as_fragment()
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn as_fragment(&self) -> Option<&str> {
        self.as_ref().and_then(ClassFragment::as_fragment)
    }
}

/// Join the non-empty fragments with single spaces.
///
/// ```
/// use krado_ui::ui::class_names::class_names;
///
/// assert_eq!(class_names([Some("a"), None, Some(""), None, Some("b")]), "a b");
/// ```
pub fn class_names<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: ClassFragment,
{
    let mut out = String::new();
    for fragment in fragments {
        if let Some(text) = fragment.as_fragment() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
    }
    out
}

/// Builder over [`class_names`] for fragments of mixed types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: String,
}

impl ClassList {
    /// Start a list with its base class.
    pub fn new(base: impl ClassFragment) -> Self {
        Self::default().push(base)
    }

    /// Append a fragment; empty fragments are skipped.
    #[must_use]
    pub fn push(mut self, fragment: impl ClassFragment) -> Self {
        if let Some(text) = fragment.as_fragment() {
            if !self.classes.is_empty() {
                self.classes.push(' ');
            }
            self.classes.push_str(text);
        }
        self
    }

    /// Append a fragment only when `condition` holds.
    #[must_use]
    pub fn push_if(self, condition: bool, fragment: impl ClassFragment) -> Self {
        if condition { self.push(fragment) } else { self }
    }

    /// The joined class string.
    pub fn build(self) -> String {
        self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes)
    }
}
