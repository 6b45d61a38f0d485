use regex::{Captures, Regex};

pub const SOURCE_EXTENSION: &str = ".js";

const EXPLICIT_EXTENSIONS: [&str; 3] = [".js", ".json", ".css"];

fn relative_import_regex() -> Regex {
    Regex::new(r#"(from\s+["'])(\.\.?/[^"']+?)(["'])"#).unwrap()
}

pub fn has_explicit_extension(import_string: &str) -> bool {
    EXPLICIT_EXTENSIONS
        .iter()
        .any(|extension| import_string.ends_with(extension))
}

/// Appends `.js` to every relative `from "..."` import that lacks an explicit
/// extension. Returns `None` when the source code is left as it was.
pub fn append_extensions(source_code: &str) -> Option<String> {
    let re = relative_import_regex();

    let new_source_code = re.replace_all(source_code, |caps: &Captures| {
        let import_string = &caps[2];

        match has_explicit_extension(import_string) {
            true => caps[0].to_string(),
            false => format!(
                "{}{}{}{}",
                &caps[1], import_string, SOURCE_EXTENSION, &caps[3]
            ),
        }
    });

    match new_source_code.eq(source_code) {
        true => None,
        false => Some(new_source_code.into_owned()),
    }
}

pub fn from_import(import_path: &str) -> String {
    format!("from \"{}\"", import_path)
}

/// Replaces every literal occurrence of `old_import` with `new_import`.
pub fn replace_import(source_code: &str, old_import: &str, new_import: &str) -> Option<String> {
    if old_import.eq(new_import) || !source_code.contains(old_import) {
        return None;
    }
    Some(source_code.replace(old_import, new_import))
}
