/// Identifier and file naming rules for generated TypeScript

/// Strip everything that is not ascii alphanumeric
///
/// Upstream titles and keys routinely contain CJK text, dashes and braces;
/// only the ascii alphanumeric core survives into identifiers.
pub fn sanitize_ident(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Split an interface path into its non-empty segments
pub fn path_segments(raw_path: &str) -> Vec<String> {
    raw_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// Base name of the generated interface: the last path segment
pub fn interface_base_name(raw_path: &str) -> String {
    path_segments(raw_path)
        .last()
        .cloned()
        .unwrap_or_else(|| "unknownFileName".to_string())
}

/// Compose a TS interface name from the base name and a field key
///
/// `("login", "request")` becomes `loginRequest`.
pub fn ts_interface_name(base: &str, key: &str) -> String {
    format!(
        "{}{}",
        sanitize_ident(base),
        capitalize(&sanitize_ident(key))
    )
}
