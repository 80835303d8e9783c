pub mod environment {
    pub const PREFIX: &'static str = "testcases";
    pub const SEPARATOR: &'static str = "_";
}

pub mod report {
    pub const ENABLED_KEY: &'static str = "report.enabled";
    pub const ENABLED_DEFAULT: &'static str = "true";
    pub const OUTPUT_DIRECTORY: &'static str = "build/reports";
    pub const OUTPUT_FILE: &'static str = "test-cases.html";
}
