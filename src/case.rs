// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Case conversions shared by the path parser and the output derivers.
//!
//! Icon file stems are kebab-case (`home-fill`), while generated code and
//! catalog folders use PascalCase (`HomeFill`). Only the character following
//! the start of the string or a hyphen is touched; every other character is
//! passed through verbatim so digits and embedded casing survive.

/// Builder for case conversions over a borrowed source string.
#[derive(Debug, Clone, Copy,)]
pub struct CaseStrategy<'input,>
{
    source: &'input str,
}

impl<'input,> CaseStrategy<'input,>
{
    /// Creates a new converter for the provided string slice.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
        }
    }

    /// Converts the source to PascalCase.
    ///
    /// A word character (`A-Z`, `a-z`, `0-9`, `_`) at the start of the string
    /// is upper-cased. A hyphen followed by a word character is removed and
    /// the character upper-cased. Hyphens not followed by a word character
    /// are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use icon_catalog::CaseStrategy;
    ///
    /// assert_eq!(CaseStrategy::builder("home-fill",).pascal(), "HomeFill");
    /// assert_eq!(CaseStrategy::builder("a-b-c",).pascal(), "ABC");
    /// ```
    pub fn pascal(self,) -> String
    {
        let mut output = String::with_capacity(self.source.len(),);
        let mut chars = self.source.chars().peekable();

        if let Some(&first,) = chars.peek()
            && is_word_char(first,)
        {
            output.push(first.to_ascii_uppercase(),);
            chars.next();
        }

        while let Some(candidate,) = chars.next() {
            match chars.peek() {
                Some(&next,) if candidate == '-' && is_word_char(next,) => {
                    output.push(next.to_ascii_uppercase(),);
                    chars.next();
                }
                _ => output.push(candidate,),
            }
        }

        output
    }

    /// Lower-cases the first character and keeps the remainder untouched.
    ///
    /// ```
    /// use icon_catalog::CaseStrategy;
    ///
    /// assert_eq!(CaseStrategy::builder("HomeFill",).lower_first(), "homeFill");
    /// ```
    pub fn lower_first(self,) -> String
    {
        let mut chars = self.source.chars();
        match chars.next() {
            Some(first,) => first.to_lowercase().chain(chars,).collect(),
            None => String::new(),
        }
    }
}

fn is_word_char(candidate: char,) -> bool
{
    candidate.is_ascii_alphanumeric() || candidate == '_'
}

/// Shorthand for [`CaseStrategy::pascal`].
pub fn pascal_case(source: &str,) -> String
{
    CaseStrategy::builder(source,).pascal()
}
