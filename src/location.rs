//! Call-site context for message prefixes.
//!
//! `call_site!()` captures the enclosing function path, file and line. The labels below
//! are meant to be used as prefixes, e.g.
//!
//! ```
//! use debug_log::{call_site, DisplayOptions};
//!
//! fn tick() {
//!     let here = call_site!();
//!     let options = DisplayOptions::default().prefix(format!("{}: ", here.func_with_line()));
//!     assert!(options.prefix.starts_with("tick: Line "));
//! }
//! # tick();
//! ```

use std::fmt;

/// Where a logging call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    /// Fully qualified path of the enclosing function
    pub function: &'static str,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function: strip_closures(function),
        }
    }

    /// Full function path, e.g. `game::player::Player::tick`.
    pub fn qualified(&self) -> &'static str {
        self.function
    }

    /// Last path segment, e.g. `tick`.
    pub fn function(&self) -> &'static str {
        let segments = segments(self.function);
        segments.last().copied().unwrap_or(self.function)
    }

    /// Segment owning the function: the type for methods, the module otherwise.
    pub fn class(&self) -> &'static str {
        let segments = segments(self.function);
        match segments.len() {
            0 | 1 => "",
            n => segments[n - 2],
        }
    }

    pub fn line_label(&self) -> String {
        format!("Line {}", self.line)
    }

    pub fn func_with_line(&self) -> String {
        format!("{}: {}", self.function(), self.line_label())
    }

    pub fn class_with_line(&self) -> String {
        format!("{}({})", self.class(), self.line_label())
    }

    pub fn qualified_with_line(&self) -> String {
        format!("{}: {}", self.qualified(), self.line_label())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Line {}", self.function, self.line)
    }
}

/// Capture the current function, file and line as a [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __call_site_marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__call_site_marker);
        $crate::location::CallSite::new(
            file!(),
            line!(),
            name.strip_suffix("::__call_site_marker").unwrap_or(name),
        )
    }};
}

fn strip_closures(mut path: &'static str) -> &'static str {
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path
}

/// Split on `::` outside of generic brackets.
fn segments(path: &'static str) -> Vec<&'static str> {
    let bytes = path.as_bytes();
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                out.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    out.push(&path[start..]);
    out
}
