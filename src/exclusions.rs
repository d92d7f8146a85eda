/// Project descriptors that version stamping must leave untouched.
///
/// These are Maven test fixtures: their versions are part of what the tests
/// assert, so bumping them along with the real modules breaks the build.
/// Paths are relative to the checkout root and always use `/`.
pub const IGNORED_VERSION_FILES: &[&str] = &[
    "domains/toolabstraction/maven/src/test/resources/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/build-test/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/build-test-fail/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/build-test-dep/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/build-test-invalid-pom/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/installfile-valid/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/installfile-invalid/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/test-unit-success/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/test-unit-fail/pom.xml",
    "domains/toolabstraction/maven/src/test/resources/test-no-surefire/pom.xml",
    "connector/maven/src/test/resources/test-unit-success/pom.xml",
    "connector/maven/src/test/resources/test-unit-fail/pom.xml",
];

/// Returns a freshly allocated copy of [`IGNORED_VERSION_FILES`].
pub fn ignored_version_files() -> Vec<String> {
    IGNORED_VERSION_FILES.iter().map(|p| p.to_string()).collect()
}
