//! Mutates the process environment, so it lives in its own test binary and
//! runs every step from a single test.

use std::io::Write;

use gluster_repo_resolver::{CATALOG_ENV, Catalog};

const ENV_CATALOG: &str = r#"{
    "root": "https://env.example.org/gluster/",
    "archive_segment": "old/",
    "releases": [
        {"release": "env", "path": "env/{codename}/{arch}/", "architectures": ["amd64"]}
    ]
}"#;

const FILE_CATALOG: &str = r#"{
    "root": "https://file.example.org/gluster/",
    "archive_segment": "old/",
    "releases": [
        {"release": "file", "path": "file/{codename}/{arch}/", "architectures": ["amd64"]}
    ]
}"#;

#[test]
fn catalog_source_precedence() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FILE_CATALOG.as_bytes()).unwrap();

    // SAFETY: this binary has a single test, so no other thread reads the environment.
    unsafe { std::env::remove_var(CATALOG_ENV) };
    let builtin = Catalog::load(None).unwrap();
    assert_eq!(builtin, Catalog::builtin().unwrap());

    // SAFETY: as above.
    unsafe { std::env::set_var(CATALOG_ENV, ENV_CATALOG) };

    let from_env = Catalog::load(None).unwrap();
    assert_eq!(from_env.releases().collect::<Vec<_>>(), vec!["env"]);
    assert_eq!(
        from_env.lookup("env").unwrap().render("bookworm", "amd64"),
        "https://env.example.org/gluster/env/bookworm/amd64/"
    );

    let from_file = Catalog::load(Some(file.path())).unwrap();
    assert_eq!(from_file.releases().collect::<Vec<_>>(), vec!["file"]);

    // SAFETY: as above.
    unsafe { std::env::set_var(CATALOG_ENV, "{ not json") };
    assert!(Catalog::load(None).is_err());
    assert!(Catalog::load(Some(file.path())).is_ok());

    // SAFETY: as above.
    unsafe { std::env::remove_var(CATALOG_ENV) };
}
