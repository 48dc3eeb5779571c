//! Symbol name to file base-name conversion.
//!
//! # Examples
//!
//! ```
//! use refdoc_codegen::sanitize::sanitize;
//!
//! assert_eq!(sanitize("My/Func:Name!"), "MyFuncName");
//! assert_eq!(sanitize("  trailing.  "), "trailing.");
//! ```

/// Punctuation kept besides alphanumerics.
const ALLOWED_PUNCTUATION: [char; 3] = [' ', '.', '_'];

/// Turns a symbol name into a file base-name.
///
/// Keeps alphanumeric characters, space, `.` and `_`; drops everything else
/// and trims surrounding whitespace. Total: any input, including an empty
/// string, yields a (possibly empty) result.
///
/// No uniqueness is enforced. Two names that sanitize to the same string
/// share a page file and the one written last wins.
#[must_use]
pub fn sanitize(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || ALLOWED_PUNCTUATION.contains(c))
        .collect();
    kept.trim().to_string()
}

/// File name of the page for `name`: the sanitized name plus `.md`.
#[must_use]
pub fn page_file_name(name: &str) -> String {
    format!("{}.md", sanitize(name))
}
