//! Constants used throughout modscaffold

/// Marker tokens present throughout the unmodified template.
pub mod tokens {
    pub const CLASS: &str = "ModTemplate";
    pub const DISPLAY_NAME: &str = "Mod Template";
    pub const MOD_ID: &str = "modtemplate";
    pub const GROUP: &str = "com.example";
    pub const AUTHOR: &str = "A Mod Author";
    pub const DESCRIPTION: &str = "A Mod Description";
}

/// Fixed locations inside the template, relative to the project root.
pub mod layout {
    pub const JAVA_ROOT: &str = "src/main/java";
    pub const RESOURCES_ROOT: &str = "src/main/resources";
    pub const CLASS_FILE: &str = "src/main/java/com/example/modtemplate/ModTemplate.java";
    pub const ACCESS_WIDENER: &str = "src/main/resources/modtemplate.accesswidener";
    pub const MIXINS: &str = "src/main/resources/modtemplate.mixins.json";
}

/// Sample content shipped with the template.
pub mod samples {
    pub const FILES: &[&str] = &[
        "src/main/java/com/example/modtemplate/mixin/ExampleMixin.java",
        "src/main/java/com/example/modtemplate/fabric/datagen/ModRecipeProvider.java",
        "src/main/java/com/example/modtemplate/ExampleEventHandler.java",
    ];

    pub const DIRECTORIES: &[&str] = &["src/main/generated"];

    /// Files to strip of every line containing the given marker.
    pub const LINE_EDITS: &[(&str, &str)] = &[
        ("src/main/resources/modtemplate.mixins.json", "ExampleMixin"),
        (
            "src/main/java/com/example/modtemplate/fabric/datagen/FabricDataGeneratorEntrypoint.java",
            "sample_content",
        ),
        ("src/main/java/com/example/modtemplate/fabric/FabricEntrypoint.java", "sample_content"),
        ("src/main/java/com/example/modtemplate/neoforge/NeoforgeEntrypoint.java", "sample_content"),
        ("src/main/resources/modtemplate.accesswidener", "sample_content"),
        ("src/main/resources/META-INF/accesstransformer.cfg", "sample_content"),
    ];
}

/// Documentation file never touched by text replacement.
pub const README_FILE: &str = "README.md";

/// Default name of the launcher script shipped inside the template.
pub const DEFAULT_DRIVER_SCRIPT: &str = "scaffold.sh";

/// Group suggested to the user when none is given.
pub const DEFAULT_MOD_GROUP: &str = "net.rotgruneglb";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
