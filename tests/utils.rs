#![allow(dead_code)]

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const CLASS_SOURCE: &str = "package com.example.modtemplate; class ModTemplate {}";

/// Binary content that is not valid UTF-8 and contains the mod id bytes.
pub const ICON_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0xff, b'm', b'o', b'd', b't', b'e', b'm', b'p', b'l', b'a', b't', b'e'];

pub fn write<P: AsRef<Path>>(root: P, rel: &str, content: impl AsRef<[u8]>) {
    let path = root.as_ref().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read<P: AsRef<Path>>(root: P, rel: &str) -> String {
    fs::read_to_string(root.as_ref().join(rel)).unwrap()
}

/// Lays out a minimal copy of the mod template, including the foreign
/// directories (build output, VCS metadata, Gradle wrapper) that must survive
/// untouched.
pub fn build_template<P: AsRef<Path>>(root: P) {
    let root = root.as_ref();
    write(root, "src/main/java/com/example/modtemplate/ModTemplate.java", CLASS_SOURCE);
    write(
        root,
        "src/main/java/com/example/modtemplate/fabric/FabricEntrypoint.java",
        "package com.example.modtemplate.fabric;\n\
         import com.example.modtemplate.ModTemplate;\n\
         public class FabricEntrypoint {\n\
         \x20   void init() { ExampleEventHandler.register(); } // sample_content\n\
         }\n",
    );
    write(
        root,
        "src/main/java/com/example/modtemplate/mixin/ExampleMixin.java",
        "package com.example.modtemplate.mixin;\nclass ExampleMixin {}\n",
    );
    write(
        root,
        "src/main/java/com/example/modtemplate/ExampleEventHandler.java",
        "package com.example.modtemplate;\nclass ExampleEventHandler {}\n",
    );
    write(
        root,
        "src/main/resources/modtemplate.mixins.json",
        "{\n  \"package\": \"com.example.modtemplate.mixin\",\n  \"mixins\": [\n    \"ExampleMixin\"\n  ]\n}\n",
    );
    write(
        root,
        "src/main/resources/modtemplate.accesswidener",
        "accessWidener v2 named\naccessible field net/minecraft/Foo bar I # sample_content\n",
    );
    write(
        root,
        "src/main/resources/fabric.mod.json",
        "{\"id\": \"modtemplate\", \"name\": \"Mod Template\", \"authors\": [\"A Mod Author\"], \
         \"description\": \"A Mod Description\", \"accessWidener\": \"modtemplate.accesswidener\"}",
    );
    write(root, "src/main/resources/assets/modtemplate/icon.png", ICON_BYTES);
    write(root, "gradle.properties", "mod.id=modtemplate\nmod.group=com.example\nmod.name=Mod Template\n");
    write(root, "build/tmp/notes.txt", "modtemplate ModTemplate com.example");
    write(root, "versions/1.21.1/build/libs/info.txt", "modtemplate");
    write(root, ".gradle/8.10/cache.txt", "modtemplate");
    write(root, ".git/HEAD", "ref: refs/heads/modtemplate");
    write(root, "gradle/wrapper/gradle-wrapper.properties", "distributionPath=modtemplate");
    write(root, "README.md", "# Mod Template\nRun ./scaffold.sh to rename modtemplate.\n");
    write(root, "scaffold.sh", "#!/bin/sh\nexec modscaffold --driver scaffold.sh # modtemplate\n");
}

/// Copies a directory tree, used to snapshot subtrees before a run.
pub fn copy_tree(source: &Path, dest: &Path) {
    for entry in WalkDir::new(source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(source).unwrap();
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Asserts two trees are byte-identical, printing the first difference found.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        for entry in WalkDir::new(expected).into_iter().filter_map(Result::ok) {
            let rel = entry.path().strip_prefix(expected).unwrap();
            let other = actual.join(rel);
            if entry.file_type().is_file() && fs::read(entry.path()).ok() != fs::read(&other).ok() {
                println!("Differs: {:?}", rel);
            }
        }
    }
    assert!(!different, "{} differs from {}", actual.display(), expected.display());
}
