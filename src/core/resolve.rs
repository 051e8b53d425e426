//! Module specifier → candidate file path, plus extension probing.
//!
//! Pure string computation: nothing here touches the file system. The
//! only I/O is delegated to the injected [`SourceReader`] when probing
//! extensions.

use crate::core::source::SourceReader;

/// Root alias prefix used by Payload project templates.
///
/// The alias root sits one level above the config file's directory,
/// inside `src/`.
pub const ALIAS_PREFIX: &str = "@/";

/// Extension probe order for collection files.
pub const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Turn a module specifier into a candidate path relative to `base_dir`.
///
/// - `@/rest` rewrites to `<base_dir>/../src/rest`
/// - `./x` and `../x` concatenate onto `base_dir` (a leading `./` is
///   stripped to avoid `dir/./x` paths)
/// - bare package specifiers are returned unchanged; their load will fail
///   and the collection is dropped upstream
pub fn resolve_specifier(specifier: &str, base_dir: &str) -> String {
    if let Some(rest) = specifier.strip_prefix(ALIAS_PREFIX) {
        return format!("{base_dir}/../src/{rest}");
    }

    if specifier.starts_with("./") || specifier.starts_with("../") {
        let normalized = specifier.strip_prefix("./").unwrap_or(specifier);
        return format!("{base_dir}/{normalized}");
    }

    specifier.to_string()
}

/// Probe the candidate path with each known extension, in fixed order,
/// returning the first load that succeeds along with the path that won.
///
/// A candidate already carrying one of the extensions is tried as-is on
/// that extension's turn instead of being double-suffixed.
pub fn load_source(reader: &dyn SourceReader, candidate: &str) -> Option<(String, String)> {
    for ext in SOURCE_EXTENSIONS {
        let path = if candidate.ends_with(ext) {
            candidate.to_string()
        } else {
            format!("{candidate}{ext}")
        };
        if let Ok(text) = reader.read(&path) {
            return Some((path, text));
        }
    }
    None
}
