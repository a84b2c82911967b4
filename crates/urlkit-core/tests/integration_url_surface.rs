//! Integration test: the public URL surface end to end.
//!
//! Walks a URL object through construction, query/fragment mutation, and
//! relative/resolve path algebra, then exercises the stateless surface and
//! the working-directory facade against a real temp directory.

use urlkit_core::ops;
use urlkit_core::path;
use urlkit_core::url::Url;
use urlkit_core::workdir;
use tempfile::tempdir;

#[test]
fn url_object_lifecycle() {
    let mut u = Url::new("http://ngui.io/home/index.html?a=a&b=b#c=c&d=d");

    assert_eq!(u.basename(), "index.html");
    assert_eq!(u.extname(), ".html");
    assert_eq!(u.dirname(), "/home");
    assert_eq!(
        u.params(),
        vec![
            ("a".to_string(), "a".to_string()),
            ("b".to_string(), "b".to_string()),
        ]
    );
    assert_eq!(
        u.hash_params(),
        vec![
            ("c".to_string(), "c".to_string()),
            ("d".to_string(), "d".to_string()),
        ]
    );

    u.set("a", "A");
    u.del("b");
    u.set_hash("k", "K");
    u.clear_param();
    assert_eq!(u.href(), "http://ngui.io/home/index.html#c=c&d=d&k=K");
    u.clear_hash();
    assert_eq!(u.href(), "http://ngui.io/home/index.html");
}

#[test]
fn stateless_surface_matches_object_surface() {
    let uri = "http://ngui.io/?a=100&b=test#a=200&b=300";
    let u = Url::new(uri);

    assert_eq!(ops::protocol(uri), u.protocol());
    assert_eq!(ops::host(uri), u.host());
    assert_eq!(ops::search(uri), u.search());
    assert_eq!(ops::hash(uri), u.hash());
    assert_eq!(ops::params(uri), u.params());
    assert_eq!(ops::hash_params(uri), u.hash_params());

    let mut mutated = Url::new(uri);
    mutated.set("a", "A");
    assert_eq!(ops::set(uri, "a", "A"), mutated.href());
}

#[test]
fn path_algebra_over_schemes() {
    assert!(path::is_absolute("http://ngui.io/home/index.html"));
    assert!(path::is_absolute("d:/a/b/c/kk.jsx"));
    assert!(!path::is_absolute("c/kk.jsx"));

    assert_eq!(
        path::resolve("http://ngui.io/home", &["..", "A", "B", "..", "C", "test.js"]),
        "http://ngui.io/A/C/test.js"
    );
    assert_eq!(
        path::relative("http://ngui.io/home", "http://ngui.io/A/B/C/test.js"),
        "../A/B/C/test.js"
    );
    assert_eq!(path::filename("zip:///var/data/test.apk@/assets/index"), "/var/data/test.apk@/assets/index");
}

#[test]
fn workdir_round_trip_in_temp_directory() {
    // One test owns all process-level workdir mutation; parallel tests would
    // otherwise race on the process-wide state.
    let saved = workdir::cwd();
    assert!(!saved.is_empty());

    let dir = tempdir().unwrap();
    workdir::chdir(dir.path().to_str().unwrap()).unwrap();
    assert_eq!(workdir::cwd(), dir.path().display().to_string());

    assert!(workdir::chdir("/no/such/directory/urlkit").is_err());
    assert_eq!(workdir::cwd(), dir.path().display().to_string());

    workdir::restore(&saved);
    assert_eq!(workdir::cwd(), saved);
}

#[test]
fn platform_directories_are_absolute() {
    for dir in [
        ops::executable(),
        ops::documents(),
        ops::temp(),
        ops::resources(),
    ] {
        assert!(path::is_absolute(&dir), "{dir} should be absolute");
    }
}
