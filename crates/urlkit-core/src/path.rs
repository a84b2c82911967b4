//! Path algebra over URIs: name derivation, absolutes, relative paths, and
//! `.`/`..` segment resolution.

use crate::parse::{parse, Scheme};

/// Full pathname of the URI: the path portion with query/fragment stripped.
pub fn filename(uri: &str) -> String {
    parse(uri).pathname
}

/// `filename` up to (excluding) the last `/`; empty when there is none.
pub fn dirname(uri: &str) -> String {
    dirname_of(&filename(uri))
}

/// Last `/`-separated segment of the pathname.
pub fn basename(uri: &str) -> String {
    basename_of(&filename(uri))
}

/// Extension of the basename, dot included; empty for extension-less names
/// and plain dotfiles.
pub fn extname(uri: &str) -> String {
    extname_of(&filename(uri))
}

pub(crate) fn dirname_of(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

pub(crate) fn basename_of(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[idx + 1..].to_string(),
        None => path.to_string(),
    }
}

pub(crate) fn extname_of(path: &str) -> String {
    let base = basename_of(path);
    match base.rfind('.') {
        Some(idx) if idx > 0 => base[idx..].to_string(),
        _ => String::new(),
    }
}

/// True for `proto://...` URIs, rooted paths (`/...`), and Windows drive
/// paths (`d:/...`). Bare segments (`c/kk.jsx`) are relative.
pub fn is_absolute(path: &str) -> bool {
    if matches!(parse(path).scheme, Scheme::WithAuthority(_)) {
        return true;
    }
    path.starts_with('/') || is_drive_path(path)
}

fn is_drive_path(path: &str) -> bool {
    let b = path.as_bytes();
    b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && b[2] == b'/'
}

/// Shortest `..`/segment path from `from` to `to`.
///
/// Common leading segments are stripped, each remaining `from` segment emits
/// one `..`, then `to`'s remaining segments are appended. The result is a
/// bare scheme-relative path. URIs with different origins have no relative
/// form; `to` is returned reserialized.
pub fn relative(from: &str, to: &str) -> String {
    let f = parse(from);
    let t = parse(to);
    if f.origin() != t.origin() {
        return t.href();
    }
    let from_segs: Vec<&str> = segments(&f.pathname).collect();
    let to_segs: Vec<&str> = segments(&t.pathname).collect();
    let common = from_segs
        .iter()
        .zip(to_segs.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<&str> = Vec::new();
    out.resize(from_segs.len() - common, "..");
    out.extend(&to_segs[common..]);
    out.join("/")
}

/// Left-to-right fold of `refs` over `base`'s path segments.
///
/// An absolute ref (per [`is_absolute`]) replaces the accumulator entirely
/// and its scheme/host carry forward. Otherwise each `/`-piece of a ref is
/// applied: `..` pops the last segment (clamped at the root), `.` and empty
/// pieces are dropped, anything else is pushed. The result is reserialized
/// with the accumulator base's scheme/host; query and fragment do not
/// survive resolution.
pub fn resolve(base: &str, refs: &[&str]) -> String {
    let mut acc = parse(base);
    let mut segs: Vec<String> = segments(&acc.pathname).map(str::to_string).collect();

    for r in refs {
        if is_absolute(r) {
            acc = parse(r);
            segs = segments(&acc.pathname).map(str::to_string).collect();
            continue;
        }
        for piece in r.split('/') {
            match piece {
                "" | "." => {}
                ".." => {
                    if segs.pop().is_none() {
                        tracing::debug!("`..` clamped at root while resolving {base:?}");
                    }
                }
                _ => segs.push(piece.to_string()),
            }
        }
    }

    let rooted = acc.pathname.starts_with('/')
        || matches!(acc.scheme, Scheme::WithAuthority(_));
    acc.pathname = match (rooted, segs.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", segs.join("/")),
        (false, _) => segs.join("/"),
    };
    acc.search = None;
    acc.hash = None;
    acc.href()
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
