mod common;

use std::fs;

use common::{list_files, read, write_tree};
use scaffold::processor::{apply_layers, copy_tree, Layer};
use tempfile::TempDir;

#[test]
fn test_copy_tree_copies_hidden_and_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("project");
    write_tree(
        &source,
        &[
            ("package.json", "{}"),
            (".eslintrc.json", "{\"root\": true}"),
            ("%%.gitignore", "node_modules\n"),
            ("src/app/page.tsx", "export default function Page() {}"),
            (".github/workflows/ci.yml", "on: push"),
        ],
    );
    let target = temp_dir.path().join("out");

    let copied = copy_tree(&source, &target).unwrap();

    assert_eq!(copied, 5);
    assert_eq!(list_files(&target), list_files(&source));
    assert_eq!(read(&target.join(".eslintrc.json")), "{\"root\": true}");
}

#[test]
fn test_copy_tree_overwrites_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("project");
    write_tree(&source, &[("README.md", "from template")]);
    let target = temp_dir.path().join("out");
    write_tree(&target, &[("README.md", "stale"), ("notes.txt", "kept")]);

    copy_tree(&source, &target).unwrap();

    assert_eq!(read(&target.join("README.md")), "from template");
    assert_eq!(read(&target.join("notes.txt")), "kept");
}

#[test]
fn test_copy_tree_keeps_content_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("project");
    fs::create_dir_all(source.join("public")).unwrap();
    let icon = vec![0u8, 159, 146, 150, 255, 0, 1];
    fs::write(source.join("public/favicon.ico"), &icon).unwrap();
    write_tree(&source, &[("page.tsx", "<h1>{{name}}</h1>")]);
    let target = temp_dir.path().join("out");

    copy_tree(&source, &target).unwrap();

    assert_eq!(fs::read(target.join("public/favicon.ico")).unwrap(), icon);
    assert_eq!(read(&target.join("page.tsx")), "<h1>{{name}}</h1>");
}

#[test]
fn test_copy_tree_copies_empty_directories() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("project");
    fs::create_dir_all(source.join("public/uploads")).unwrap();
    let target = temp_dir.path().join("out");

    assert_eq!(copy_tree(&source, &target).unwrap(), 0);
    assert!(target.join("public/uploads").is_dir());
}

#[cfg(unix)]
#[test]
fn test_copy_tree_preserves_directory_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("project");
    write_tree(&source, &[("scripts/run.sh", "#!/bin/sh\n")]);
    fs::set_permissions(source.join("scripts"), fs::Permissions::from_mode(0o750)).unwrap();
    let target = temp_dir.path().join("out");

    copy_tree(&source, &target).unwrap();

    let mode = fs::metadata(target.join("scripts")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o750);
}

#[test]
fn test_copy_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = copy_tree(temp_dir.path().join("nope"), temp_dir.path().join("out"));
    assert!(result.is_err());
}

#[test]
fn test_later_layers_win() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("project");
    let clerk = temp_dir.path().join("extras/clerk");
    let supabase = temp_dir.path().join("extras/supabase");
    let additionals = temp_dir.path().join("additionals");
    write_tree(&base, &[("src/auth.ts", "base"), ("package.json", "base"), ("README.md", "base")]);
    write_tree(&clerk, &[("src/auth.ts", "clerk"), ("package.json", "clerk")]);
    write_tree(&supabase, &[("src/auth.ts", "supabase"), ("SUPABASE.md", "docs")]);
    write_tree(&additionals, &[("README.md", "additionals")]);

    let layers = vec![
        Layer::Project(base),
        Layer::Extra { id: "clerk".into(), dir: clerk },
        Layer::Extra { id: "supabase".into(), dir: supabase },
        Layer::Additionals(additionals),
    ];
    let destination = temp_dir.path().join("out");
    let applied = apply_layers(&layers, &destination).unwrap();

    let counts: Vec<usize> = applied.iter().map(|(_, copied)| *copied).collect();
    assert_eq!(counts, vec![3, 2, 2, 1]);
    assert_eq!(read(&destination.join("src/auth.ts")), "supabase");
    assert_eq!(read(&destination.join("package.json")), "clerk");
    assert_eq!(read(&destination.join("README.md")), "additionals");
    assert_eq!(read(&destination.join("SUPABASE.md")), "docs");
}

#[test]
fn test_apply_layers_stops_at_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("project");
    write_tree(&base, &[("a.txt", "a")]);
    let layers = vec![
        Layer::Project(base),
        Layer::Extra { id: "gone".into(), dir: temp_dir.path().join("extras/gone") },
    ];
    let destination = temp_dir.path().join("out");

    assert!(apply_layers(&layers, &destination).is_err());
    assert_eq!(read(&destination.join("a.txt")), "a");
}
