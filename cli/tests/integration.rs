use std::fs::{self, File};
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;
use zip::ZipArchive;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn zip_without_output_exits_one_and_writes_nothing() {
    let tmp = tempdir().expect("tempdir");
    write(&tmp.path().join("Binaries/UnrealEditor.modules"), "{}");

    let output = Command::new(env!("CARGO_BIN_EXE_zip-editor-deps"))
        .current_dir(tmp.path())
        .output()
        .expect("run zip-editor-deps");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    let entries = fs::read_dir(tmp.path()).unwrap().count();
    assert_eq!(entries, 1, "only the Binaries directory should exist");
}

#[test]
fn zip_packages_editor_binaries_relative_to_cwd() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    write(&root.join("Binaries/Win64/UnrealEditor-PGPawn.dll"), "pawn");
    write(&root.join("Binaries/Win64/UnrealEditor-PGPawn.pdb"), "symbols");
    write(
        &root.join("Plugins/MultiplayerSessions/Binaries/Win64/UnrealEditor-MultiplayerSessions.dll"),
        "sessions",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_zip-editor-deps"))
        .arg("deps.zip")
        .current_dir(root)
        .output()
        .expect("run zip-editor-deps");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"Zipping editor binaries to deps.zip"));
    assert_eq!(lines.last(), Some(&"Zip created successfully: deps.zip"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("Writing ")).count(), 2);

    let zip = ZipArchive::new(File::open(root.join("deps.zip")).unwrap()).unwrap();
    let mut names: Vec<&str> = zip.file_names().collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "Binaries/Win64/UnrealEditor-PGPawn.dll",
            "Plugins/MultiplayerSessions/Binaries/Win64/UnrealEditor-MultiplayerSessions.dll",
        ]
    );
}

#[test]
fn fix_copyright_updates_then_settles() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    write(
        &root.join("config/DefaultGame.ini"),
        "[/Script/EngineSettings.GeneralProjectSettings]\nCopyrightNotice=Copyright 2024 Game Salutes.\n",
    );
    write(&root.join("source/PGCore/PGCore.h"), "#pragma once\n");
    write(&root.join("Tools/Packaging/zip.py"), "# old header\nimport zipfile\n");

    let first = Command::new(env!("CARGO_BIN_EXE_fix-copyright"))
        .current_dir(root)
        .output()
        .expect("run fix-copyright");
    assert!(
        first.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&first.stderr)
    );
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.starts_with("Replacing copyright notices in "));
    assert!(stdout.ends_with("Completed successfully: 2 files updated.\n"));

    assert_eq!(
        fs::read_to_string(root.join("source/PGCore/PGCore.h")).unwrap(),
        "// Copyright 2024 Game Salutes.\n\n#pragma once\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("Tools/Packaging/zip.py")).unwrap(),
        "# Copyright 2024 Game Salutes.\n\nimport zipfile\n"
    );

    let second = Command::new(env!("CARGO_BIN_EXE_fix-copyright"))
        .current_dir(root)
        .output()
        .expect("run fix-copyright");
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout)
        .ends_with("Completed successfully: 0 files updated.\n"));
}

#[test]
fn fix_copyright_without_notice_exits_one() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    write(&root.join("config/DefaultGame.ini"), "ProjectName=PaperGolf\n");
    write(&root.join("source/A.cpp"), "int a;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_fix-copyright"))
        .current_dir(root)
        .output()
        .expect("run fix-copyright");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Unable to get copyright notice from config in"));
    assert_eq!(fs::read_to_string(root.join("source/A.cpp")).unwrap(), "int a;\n");
}

#[test]
fn fix_copyright_check_mode_leaves_files_alone() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    write(&root.join("config/DefaultGame.ini"), "CopyrightNotice=Notice\n");
    write(&root.join("source/A.cs"), "using System;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_fix-copyright"))
        .arg("--check")
        .arg("--root")
        .arg(root)
        .output()
        .expect("run fix-copyright");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Missing notice: "));
    assert_eq!(
        fs::read_to_string(root.join("source/A.cs")).unwrap(),
        "using System;\n"
    );
}
