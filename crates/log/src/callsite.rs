//! Call-site capture
//!
//! Every public logging entry point is `#[track_caller]`, so the compiler
//! hands us the user's call location no matter how many internal calls sit in
//! between. No stack depth is hard-coded. The function name is not part of
//! `std::panic::Location`; it comes from the logging macros, or from a stack
//! walk when the `backtrace` feature is enabled.

use std::panic;

use serde::Serialize;

/// Where a logging call was made, before it is turned into a [`Location`]
///
/// Cheap to build: it only holds `'static` references and integers. The
/// [`Location`] (which allocates) is produced only when call-site tracing is
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    path: &'static str,
    line: u32,
    column: u32,
    function: Option<&'static str>,
}

impl CallSite {
    /// The location of the caller of the surrounding `#[track_caller]` chain
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(panic::Location::caller())
    }

    /// Convert a compiler-provided location
    pub fn from_location(location: &'static panic::Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    /// Build a call site from its parts (see the `file!`, `line!` and
    /// `column!` macros)
    pub const fn new(path: &'static str, line: u32, column: u32) -> Self {
        Self {
            path,
            line,
            column,
            function: None,
        }
    }

    /// Attach the enclosing function's path
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Source path as given by the compiler
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// 1-based line
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Enclosing function, when known
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Materialize the event location
    pub(crate) fn capture(&self) -> Location {
        let function = match self.function {
            Some(function) => Some(function.to_string()),
            None => resolve_function(),
        };
        Location {
            path: self.path.to_string(),
            file: basename(self.path).to_string(),
            function,
            line: self.line,
            column: self.column,
        }
    }
}

/// Call-site descriptor attached to an event when tracing is enabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Full source path
    pub path: String,
    /// Substring after the last path separator
    pub file: String,
    /// Enclosing function, when it could be determined
    pub function: Option<String>,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Crates whose frames sit between the user's call and the stack walk
#[cfg(any(feature = "backtrace", test))]
const PLUMBING_CRATES: [&str; 5] = ["lantern_log", "core", "std", "alloc", "backtrace"];

/// Crate a demangled symbol belongs to
///
/// `<T as core::ops::FnOnce>::call_once` belongs to `core` when `T` is a bare
/// generic parameter; `<alloc::boxed::Box<F> as ...>` belongs to `alloc`.
#[cfg(any(feature = "backtrace", test))]
fn frame_crate(symbol: &str) -> &str {
    let symbol = symbol.trim_start_matches('<');
    let path = match symbol.split_once(" as ") {
        Some((self_ty, trait_path)) if !self_ty.contains("::") => trait_path,
        _ => symbol,
    };
    path.split("::").next().unwrap_or(path)
}

#[cfg(any(feature = "backtrace", test))]
fn is_plumbing(symbol: &str) -> bool {
    PLUMBING_CRATES.contains(&frame_crate(symbol))
}

/// First frame that is neither this crate nor std/backtrace machinery, once
/// the walk has entered this crate
#[cfg(any(feature = "backtrace", test))]
fn first_caller(symbols: impl IntoIterator<Item = String>) -> Option<String> {
    let mut inside = false;
    for symbol in symbols {
        if frame_crate(&symbol) == "lantern_log" {
            inside = true;
        } else if inside && !is_plumbing(&symbol) {
            return Some(symbol);
        }
    }
    None
}

/// Walk the stack and return the user's function
#[cfg(feature = "backtrace")]
fn resolve_function() -> Option<String> {
    let mut symbols = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if let Some(name) = symbol.name() {
                symbols.push(format!("{name:#}"));
            }
        });
        true
    });
    first_caller(symbols)
}

#[cfg(not(feature = "backtrace"))]
fn resolve_function() -> Option<String> {
    None
}

/// Path of the enclosing function, computed at the expansion site
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// [`CallSite`] for the macro invocation, including the function path
#[doc(hidden)]
#[macro_export]
macro_rules! __callsite {
    () => {
        $crate::CallSite::new(file!(), line!(), column!()).with_function($crate::__function_path!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[track_caller]
    fn nested() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn test_caller_follows_track_caller_chain() {
        let line = line!() + 1;
        let site = nested();
        assert_eq!(site.line(), line);
        assert!(site.path().ends_with("callsite.rs"));
        assert!(site.column() > 0);
    }

    #[test]
    fn test_capture_splits_basename() {
        let location = CallSite::new("src/app/handlers.rs", 12, 5)
            .with_function("app::handlers::create")
            .capture();
        assert_eq!(
            location,
            Location {
                path: "src/app/handlers.rs".to_string(),
                file: "handlers.rs".to_string(),
                function: Some("app::handlers::create".to_string()),
                line: 12,
                column: 5,
            }
        );
    }

    #[test]
    fn test_basename_variants() {
        assert_eq!(basename("main.rs"), "main.rs");
        assert_eq!(basename(r"src\lib.rs"), "lib.rs");
        assert_eq!(basename("a/b/"), "");
    }

    #[test]
    fn test_frame_crate() {
        assert_eq!(frame_crate("lantern_log::logger::Logger::emit"), "lantern_log");
        assert_eq!(frame_crate("core::bool::<impl bool>::then"), "core");
        assert_eq!(frame_crate("<F as core::ops::function::FnOnce<()>>::call_once"), "core");
        assert_eq!(frame_crate("<alloc::boxed::Box<F> as app::Run>::run"), "alloc");
        assert_eq!(frame_crate("<app::Server as app::Run>::run"), "app");
        assert_eq!(frame_crate("app::handlers::create::{{closure}}"), "app");
    }

    #[test]
    fn test_first_caller_skips_plumbing() {
        let stack = [
            "backtrace::backtrace::trace",
            "lantern_log::callsite::CallSite::capture",
            "core::bool::<impl bool>::then",
            "lantern_log::logger::Logger::emit",
            "<F as core::ops::function::FnOnce<()>>::call_once",
            "app::handlers::create",
            "app::main",
        ];
        let found = first_caller(stack.iter().map(ToString::to_string));
        assert_eq!(found.as_deref(), Some("app::handlers::create"));
        assert!(is_plumbing("std::rt::lang_start"));
        assert!(!is_plumbing("app::main"));
    }

    #[test]
    fn test_first_caller_needs_own_frame() {
        let stack = ["app::handlers::create", "app::main"];
        assert_eq!(first_caller(stack.iter().map(ToString::to_string)), None);
    }

    #[test]
    fn test_function_path_macro() {
        let name = crate::__function_path!();
        assert!(name.ends_with("test_function_path_macro"), "{name}");
    }
}
