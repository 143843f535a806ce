use assetrepo::prelude::*;
use std::fs;
use std::sync::Arc;

static BUILTIN: &[(&str, &[u8])] = &[
    ("shaders/basic.wgsl", b"builtin shader"),
    ("ui/theme.css", b"builtin theme"),
    ("ui/icons/close.svg", b"<svg/>"),
];

fn user_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("ui")).unwrap();
    fs::write(dir.path().join("ui/theme.css"), "user theme").unwrap();
    fs::write(dir.path().join("ui/extra.css"), "extra").unwrap();
    dir
}

#[test]
fn directory_overrides_embedded_defaults() {
    let dir = user_dir();
    let mut repo = Layered::new();
    repo.add_source(FileSystemSource::new(dir.path()));
    repo.add_source(EmbeddedSource::new().with_static(BUILTIN));

    assert_eq!(repo.get("ui/theme.css").unwrap(), "user theme");
    assert_eq!(repo.get("shaders/basic.wgsl").unwrap(), "builtin shader");
    assert_eq!(repo.info("ui/theme.css").unwrap().size, 10);
    assert_eq!(repo.dir("ui/").unwrap(), ["extra.css", "icons", "theme.css"]);
    assert_eq!(
        repo.names(),
        [
            "shaders/basic.wgsl",
            "ui/extra.css",
            "ui/icons/close.svg",
            "ui/theme.css",
        ]
    );
}

#[test]
fn embedded_defaults_win_when_registered_first() {
    let dir = user_dir();
    let repo = Layered::with_sources([
        Arc::new(EmbeddedSource::new().with_static(BUILTIN)) as Arc<dyn AssetSource>,
        Arc::new(FileSystemSource::new(dir.path())) as Arc<dyn AssetSource>,
    ]);

    assert_eq!(repo.get("ui/theme.css").unwrap(), "builtin theme");
    assert_eq!(repo.get("ui/extra.css").unwrap(), "extra");
}

#[test]
fn shared_source_handle_is_not_consumed() {
    let builtin: Arc<dyn AssetSource> = Arc::new(EmbeddedSource::new().with_static(BUILTIN));

    let mut first = Layered::new();
    first.add_shared(builtin.clone());
    let mut second = Layered::new();
    second.add_shared(builtin.clone());

    assert_eq!(first.names(), second.names());
    assert_eq!(builtin.names().len(), 3);
}
