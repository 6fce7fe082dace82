use assetpack_domain::report::Report;
use assetpack_export::{
    ArchiveExporter, ArchiveOptions, AssetSource, ExportDestination, FsAssetSource,
};
use assetpack_types::{AssetPath, DependencyNode, NodeId, NodeKind};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Read;
use tempfile::TempDir;

fn write_file(path: &Utf8Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write file");
}

fn project() -> (TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    write_file(&root.join("Assets/Sphere.prefab"), "sphere prefab");
    write_file(&root.join("Assets/Sphere.prefab.meta"), "guid: 1");
    write_file(&root.join("Assets/Materials/Red.mat"), "red");
    write_file(&root.join("Assets/Materials/Red.mat.meta"), "guid: 2");
    (temp, root)
}

fn asset(id: &str, path: &str) -> DependencyNode {
    let path = AssetPath::new(path);
    DependencyNode {
        id: NodeId::new(id),
        name: path.file_name().to_string(),
        path: Some(path),
        kind: NodeKind::Other,
    }
}

#[test]
fn fs_source_stats_files_only() {
    let (_temp, root) = project();
    let source = FsAssetSource::new(root.clone());

    let stamp = source
        .stat("Assets/Sphere.prefab")
        .expect("stat")
        .expect("exists");
    assert_eq!(stamp.len, "sphere prefab".len() as u64);
    assert!(source.stat("Assets/Nope.prefab").expect("stat").is_none());
    assert!(source.stat("Assets/Materials").expect("stat").is_none());

    let mut content = String::new();
    source
        .open("Assets/Materials/Red.mat")
        .expect("open")
        .read_to_string(&mut content)
        .expect("read");
    assert_eq!(content, "red");
}

#[test]
fn exports_project_files_into_named_archive() {
    let (_temp, root) = project();
    let source = FsAssetSource::new(root.clone());
    let dest = ExportDestination::new(root.join("Exports"));
    let options = ArchiveOptions::default();

    let sphere = DependencyNode {
        name: "Sphere".to_string(),
        ..asset("sphere", "Assets/Sphere.prefab")
    };
    let deps = vec![
        sphere.clone(),
        asset("red", "Assets/Materials/Red.mat"),
        asset("red-again", "./Assets/Materials/Red.mat"),
    ];

    let outcome =
        ArchiveExporter::new(&source, &dest, &options).export(Report::new(&sphere), &deps);
    assert!(outcome.success(), "{:?}", outcome.error);

    let archive_path = root.join("Exports/Sphere.zip");
    assert_eq!(outcome.archive_path.as_deref(), Some(archive_path.as_path()));

    let file = std::fs::File::open(&archive_path).expect("open archive");
    let mut archive = zip::ZipArchive::new(file).expect("read zip");
    assert_eq!(archive.len(), 4);

    let mut material = String::new();
    archive
        .by_name("Materials/Red.mat")
        .expect("material entry")
        .read_to_string(&mut material)
        .expect("read entry");
    assert_eq!(material, "red");

    let meta = archive.by_name("Sphere.prefab.meta").expect("meta entry");
    assert_eq!(meta.size(), "guid: 1".len() as u64);
}

#[test]
fn files_beside_the_project_are_never_archived() {
    let temp = tempfile::tempdir().expect("tempdir");
    let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    let root = base.join("project");
    write_file(&root.join("Assets/Sphere.prefab"), "sphere prefab");
    write_file(&root.join("Assets/Sphere.prefab.meta"), "guid: 1");
    write_file(&base.join("secret.txt"), "secret");
    write_file(&base.join("secret.txt.meta"), "guid: 9");

    let source = FsAssetSource::new(root.clone());
    let dest = ExportDestination::new(root.join("Exports"));
    let options = ArchiveOptions::default();

    let sphere = DependencyNode {
        name: "Sphere".to_string(),
        ..asset("sphere", "Assets/Sphere.prefab")
    };
    let deps = vec![sphere.clone(), asset("secret", "../secret.txt")];

    let outcome =
        ArchiveExporter::new(&source, &dest, &options).export(Report::new(&sphere), &deps);

    assert!(!outcome.success());
    assert_eq!(outcome.error.as_ref().map(|e| e.code()), Some("path_outside_project"));
    assert!(outcome.entries.is_empty());
    assert!(!root.join("Exports/Sphere.zip").exists());
}
