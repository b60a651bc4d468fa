use modscaffold::config::Configuration;
use modscaffold::error::Error;
use modscaffold::pipeline::{Pipeline, Stage, Workspace};
use modscaffold::scaffold::Diagnostic;
use std::fs;
use tempfile::TempDir;
use test_log::test;

mod utils;
use utils::*;

fn configuration() -> Configuration {
    Configuration {
        mod_name: "My Mod".into(),
        mod_id: "mymod".into(),
        mod_class: "MyMod".into(),
        mod_group: "org.foo".into(),
        mod_author: "Jane Doe".into(),
        mod_description: "Adds things.".into(),
        remove_samples: false,
        delete_script: false,
    }
}

#[test]
fn class_file_ends_up_renamed_relocated_and_rewritten() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/main/java/com/example/modtemplate/ModTemplate.java", CLASS_SOURCE);

    let workspace = Workspace::open(root).unwrap();
    Pipeline::new(&configuration()).run(&workspace).unwrap();

    assert_eq!(
        read(root, "src/main/java/org/foo/mymod/MyMod.java"),
        "package org.foo.mymod; class MyMod {}"
    );
    assert!(!root.join("src/main/java/com/example").exists());
    assert!(!root.join("src/main/java/com").exists());
}

#[test]
fn full_template_is_instantiated() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    build_template(root);

    let mut configuration = configuration();
    configuration.remove_samples = true;
    configuration.delete_script = true;
    let workspace = Workspace::open(root).unwrap();
    let report = Pipeline::new(&configuration).run(&workspace).unwrap();

    let java = root.join("src/main/java");
    assert_eq!(read(&java, "org/foo/mymod/MyMod.java"), "package org.foo.mymod; class MyMod {}");
    assert_eq!(
        read(&java, "org/foo/mymod/fabric/FabricEntrypoint.java"),
        "package org.foo.mymod.fabric;\nimport org.foo.mymod.MyMod;\npublic class FabricEntrypoint {\n}\n\n"
    );
    assert!(!java.join("org/foo/mymod/mixin/ExampleMixin.java").exists());
    assert!(!java.join("org/foo/mymod/ExampleEventHandler.java").exists());
    assert!(!java.join("com").exists());

    let resources = root.join("src/main/resources");
    assert!(!resources.join("modtemplate.mixins.json").exists());
    assert_eq!(
        read(&resources, "mymod.mixins.json"),
        "{\n  \"package\": \"org.foo.mymod.mixin\",\n  \"mixins\": [\n  ]\n}\n\n"
    );
    assert_eq!(read(&resources, "mymod.accesswidener"), "accessWidener v2 named\n\n");
    assert_eq!(
        read(&resources, "fabric.mod.json"),
        "{\"id\": \"mymod\", \"name\": \"My Mod\", \"authors\": [\"Jane Doe\"], \
         \"description\": \"Adds things.\", \"accessWidener\": \"mymod.accesswidener\"}"
    );
    // Only marker directories below the Java root are renamed.
    assert_eq!(fs::read(resources.join("assets/modtemplate/icon.png")).unwrap(), ICON_BYTES);

    assert_eq!(read(root, "gradle.properties"), "mod.id=mymod\nmod.group=org.foo\nmod.name=My Mod\n");
    assert_eq!(read(root, "README.md"), "# Mod Template\nRun ./scaffold.sh to rename modtemplate.\n");
    assert!(!root.join("scaffold.sh").exists());

    assert!(!report.has_conflicts());
    assert_eq!(report.dirs_renamed, 1);
    assert!(report.files_moved >= 2);
}

#[test]
fn excluded_subtrees_survive_the_whole_pipeline() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("project");
    build_template(&root);

    let snapshot = TempDir::new().unwrap();
    let excluded = ["build", "versions/1.21.1/build", ".gradle", ".git", "gradle"];
    for rel in excluded {
        copy_tree(&root.join(rel), &snapshot.path().join(rel));
    }

    let mut configuration = configuration();
    configuration.remove_samples = true;
    let workspace = Workspace::open(&root).unwrap();
    Pipeline::new(&configuration).run(&workspace).unwrap();

    for rel in excluded {
        assert_same_tree(&root.join(rel), &snapshot.path().join(rel));
    }
    assert_eq!(read(&root, "build/tmp/notes.txt"), "modtemplate ModTemplate com.example");
}

#[test]
fn relocation_conflict_keeps_destination_and_is_reported() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/main/java/com/example/modtemplate/ModTemplate.java", CLASS_SOURCE);
    write(root, "src/main/java/org/foo/modtemplate/MyMod.java", "existing");

    let workspace = Workspace::open(root).unwrap();
    let report = Pipeline::new(&configuration()).run(&workspace).unwrap();

    assert_eq!(read(root, "src/main/java/org/foo/mymod/MyMod.java"), "existing");
    let conflicts: Vec<_> = report.conflicts().collect();
    assert_eq!(conflicts.len(), 1);
    assert!(matches!(conflicts[0], Diagnostic::Conflict { target, .. }
        if target.ends_with("org/foo/modtemplate/MyMod.java")));
    // The skipped source is dropped with the old group directory.
    assert!(!root.join("src/main/java/com").exists());
}

#[test]
fn strict_mode_fails_on_conflict() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/main/java/com/example/modtemplate/ModTemplate.java", CLASS_SOURCE);
    write(root, "src/main/java/org/foo/modtemplate/MyMod.java", "existing");

    let workspace = Workspace::open(root).unwrap();
    let err = Pipeline::new(&configuration()).strict(true).run(&workspace).unwrap_err();

    assert!(matches!(err, Error::ConflictsDetected { count: 1 }));
    assert_eq!(read(root, "src/main/java/org/foo/modtemplate/MyMod.java"), "existing");
}

#[test]
fn strict_mode_keeps_conflicting_sources_and_reports_them() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/main/java/com/example/modtemplate/ModTemplate.java", CLASS_SOURCE);
    write(root, "src/main/java/com/example/modtemplate/Helper.java", "UNIQUE SOURCE DATA");
    write(root, "src/main/java/org/foo/modtemplate/Helper.java", "existing helper");

    let workspace = Workspace::open(root).unwrap();
    let mut report = modscaffold::scaffold::Report::default();
    let mut seen = Vec::new();
    let err = Pipeline::new(&configuration())
        .strict(true)
        .run_into(&workspace, &mut report, |stage| seen.push(stage))
        .unwrap_err();

    assert!(matches!(err, Error::ConflictsDetected { count: 1 }));
    assert_eq!(read(root, "src/main/java/com/example/modtemplate/Helper.java"), "UNIQUE SOURCE DATA");
    assert_eq!(read(root, "src/main/java/org/foo/modtemplate/Helper.java"), "existing helper");
    // Nothing was moved out of the old group.
    assert!(root.join("src/main/java/com/example/modtemplate/MyMod.java").is_file());
    assert!(!root.join("src/main/java/org/foo/modtemplate/MyMod.java").exists());

    let conflicts: Vec<_> = report.conflicts().collect();
    assert_eq!(conflicts.len(), 1);
    assert!(matches!(conflicts[0], Diagnostic::Conflict { source, .. }
        if source.ends_with("com/example/modtemplate/Helper.java")));
    // The run stops at the relocation.
    assert_eq!(seen.last(), Some(&Stage::RelocatePackage));
}

#[test]
fn unchanged_group_still_renames_marker_directories() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/main/java/com/example/modtemplate/ModTemplate.java", CLASS_SOURCE);

    let mut configuration = configuration();
    configuration.mod_group = "com.example".into();
    let workspace = Workspace::open(root).unwrap();
    let report = Pipeline::new(&configuration).run(&workspace).unwrap();

    assert_eq!(
        read(root, "src/main/java/com/example/mymod/MyMod.java"),
        "package com.example.mymod; class MyMod {}"
    );
    assert!(report
        .diagnostics()
        .iter()
        .any(|d| matches!(d, Diagnostic::GroupUnchanged { group } if group == "com.example")));
}

#[test]
fn missing_package_tree_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "gradle.properties", "mod.id=modtemplate\n");

    let workspace = Workspace::open(root).unwrap();
    let report = Pipeline::new(&configuration()).run(&workspace).unwrap();

    assert_eq!(read(root, "gradle.properties"), "mod.id=mymod\n");
    assert!(report.diagnostics().iter().any(|d| matches!(d, Diagnostic::MissingSource { .. })));
}

#[test]
fn custom_driver_is_reserved_and_deleted() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "setup.sh", "modtemplate");
    write(root, "tools/setup.sh", "modtemplate");

    let mut configuration = configuration();
    configuration.delete_script = true;
    let workspace = Workspace::with_driver(root, "setup.sh").unwrap();
    let pipeline = Pipeline::new(&configuration);
    assert_eq!(pipeline.stages().last(), Some(&Stage::DeleteDriver));
    pipeline.run(&workspace).unwrap();

    assert!(!root.join("setup.sh").exists());
    assert_eq!(read(root, "tools/setup.sh"), "modtemplate");
}

#[test]
fn stage_callback_sees_every_stage_in_order() {
    let dir = TempDir::new().unwrap();
    build_template(dir.path());

    let mut seen = Vec::new();
    let workspace = Workspace::open(dir.path()).unwrap();
    let configuration = configuration();
    let pipeline = Pipeline::new(&configuration);
    pipeline.run_with(&workspace, |stage| seen.push(stage)).unwrap();

    assert_eq!(seen, pipeline.stages());
}
