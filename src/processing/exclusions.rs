use crate::core::{Result, VersionExcludesError};
use crate::exclusions::ignored_version_files;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// Normalize a candidate path the way list entries are written:
/// forward slashes, no leading `/` or `./`, no empty or `.` segments.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// How a descriptor file is treated by version stamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorStatus {
    /// Version may be rewritten
    Stamp,
    /// Listed in the fixed exclusion list
    Ignored,
    /// Matched a caller-supplied wildcard pattern
    Excluded,
}

impl fmt::Display for DescriptorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DescriptorStatus::Stamp => "stamp",
            DescriptorStatus::Ignored => "ignored",
            DescriptorStatus::Excluded => "excluded",
        };
        f.pad(label)
    }
}

/// Wildcard-based matcher supporting * and ? patterns
pub struct WildcardMatcher {
    compiled_patterns: Vec<(String, Regex)>,
}

impl WildcardMatcher {
    pub fn new() -> Self {
        Self {
            compiled_patterns: Vec::new(),
        }
    }

    pub fn with_patterns(patterns: &[String]) -> Result<Self> {
        let mut compiled_patterns = Vec::new();

        for pattern in patterns {
            let normalized = pattern.to_lowercase().replace('\\', "/");
            let regex = Regex::new(&Self::wildcard_to_regex(&normalized)).map_err(|e| {
                VersionExcludesError::path_processing_with_source(
                    format!("Invalid exclusion pattern: {}", pattern),
                    Some(pattern.clone()),
                    e,
                )
            })?;
            compiled_patterns.push((pattern.clone(), regex));
        }

        Ok(Self { compiled_patterns })
    }

    /// Convert a wildcard pattern to a regex pattern
    fn wildcard_to_regex(pattern: &str) -> String {
        let mut regex = String::new();
        regex.push('^');

        for c in pattern.chars() {
            match c {
                '*' => regex.push_str(".*"),
                '?' => regex.push('.'),
                '.' | '^' | '$' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '+' | '\\' => {
                    regex.push('\\');
                    regex.push(c);
                }
                c => regex.push(c),
            }
        }

        regex.push('$');
        regex
    }

    /// Check an already normalized path against every pattern
    pub fn matches(&self, normalized_path: &str) -> bool {
        let path = normalized_path.to_lowercase();
        self.compiled_patterns
            .iter()
            .any(|(_original, regex)| regex.is_match(&path))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.compiled_patterns.iter().map(|(original, _)| original.as_str())
    }
}

impl Default for WildcardMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Membership view over the ignored version files plus extra patterns
pub struct ExclusionSet {
    entries: Vec<String>,
    lookup: HashSet<String>,
    matcher: WildcardMatcher,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::from_parts(ignored_version_files(), WildcardMatcher::new())
    }

    pub fn with_patterns(patterns: &[String]) -> Result<Self> {
        Ok(Self::from_parts(
            ignored_version_files(),
            WildcardMatcher::with_patterns(patterns)?,
        ))
    }

    fn from_parts(entries: Vec<String>, matcher: WildcardMatcher) -> Self {
        let lookup = entries.iter().map(|e| normalize_path(e)).collect();
        Self {
            entries,
            lookup,
            matcher,
        }
    }

    /// Exact membership in the fixed list
    pub fn is_ignored(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        !normalized.is_empty() && self.lookup.contains(&normalized)
    }

    pub fn classify(&self, path: &str) -> DescriptorStatus {
        let normalized = normalize_path(path);
        if normalized.is_empty() {
            return DescriptorStatus::Stamp;
        }
        if self.lookup.contains(&normalized) {
            DescriptorStatus::Ignored
        } else if self.matcher.matches(&normalized) {
            DescriptorStatus::Excluded
        } else {
            DescriptorStatus::Stamp
        }
    }

    /// Entries in authored order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.matcher.patterns().count()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new()
    }
}
