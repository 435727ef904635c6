//! Path merging and dot-segment removal (RFC 3986 section 5.2).

use crate::compat::{String, format};

/// Merge a relative path (not starting with `/`) onto a base path.
/// Only a base with a non-empty host turns an empty path into `/`.
pub fn merge_paths(base_path: &str, base_has_host: bool, relative_path: &str) -> String {
    if base_has_host && base_path.is_empty() {
        return format!("/{relative_path}");
    }
    let kept = base_path.rfind('/').map_or("", |pos| &base_path[..=pos]);
    let mut merged = String::with_capacity(kept.len() + relative_path.len());
    merged.push_str(kept);
    merged.push_str(relative_path);
    merged
}

/// Pop the last segment of `out`. Returns false when `out` held a single
/// rootless segment, in which case the `/` that follows must be dropped too.
fn pop_segment(out: &mut String) -> bool {
    match out.rfind('/') {
        Some(pos) => {
            out.truncate(pos);
            true
        }
        None => {
            let rooted = out.is_empty();
            out.clear();
            rooted
        }
    }
}

/// Remove `.` and `..` segments.
///
/// The output never grows past the input. A `..` left over with nothing to
/// pop is kept as-is.
pub fn remove_dot_segments(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut input = path;

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../").or_else(|| input.strip_prefix("./")) {
            input = rest;
        } else if input == "." {
            break;
        } else if input == ".." {
            out.push_str(input);
            break;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") || input == "/.." {
            let rooted = pop_segment(&mut out);
            input = if input == "/.." { "/" } else { &input[3..] };
            if !rooted {
                input = &input[1..];
            }
        } else {
            let skip = usize::from(input.starts_with('/'));
            let end = input[skip..].find('/').map_or(input.len(), |pos| skip + pos);
            out.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    out
}
