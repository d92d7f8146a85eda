//! Strategies for displaying scan results
use crate::processing::{DescriptorStatus, ScannedDescriptor};
use chrono::{DateTime, Local};

/// Outcome of a descriptor scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub root: String,
    pub generated_at: DateTime<Local>,
    pub descriptors: Vec<ScannedDescriptor>,
}

impl ScanReport {
    pub fn new(root: impl Into<String>, descriptors: Vec<ScannedDescriptor>) -> Self {
        Self {
            root: root.into(),
            generated_at: Local::now(),
            descriptors,
        }
    }

    pub fn count(&self, status: DescriptorStatus) -> usize {
        self.descriptors
            .iter()
            .filter(|d| d.status == status)
            .count()
    }

    fn header(&self) -> String {
        format!(
            "Descriptor scan of {} ({})\n  {} to stamp, {} ignored, {} excluded\n",
            self.root,
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.count(DescriptorStatus::Stamp),
            self.count(DescriptorStatus::Ignored),
            self.count(DescriptorStatus::Excluded),
        )
    }
}

/// Trait for different report display strategies
pub trait ReportDisplayStrategy {
    fn render(&self, report: &ScanReport) -> String;

    fn name(&self) -> &'static str;
}

/// Every descriptor with its status
pub struct DetailedDisplayStrategy;

impl ReportDisplayStrategy for DetailedDisplayStrategy {
    fn render(&self, report: &ScanReport) -> String {
        let mut out = report.header();
        for descriptor in &report.descriptors {
            out.push_str(&format!("    {:<8} {}\n", descriptor.status, descriptor.path));
        }
        out
    }

    fn name(&self) -> &'static str {
        "detailed"
    }
}

/// Counts plus the descriptors that will be skipped
pub struct SummaryDisplayStrategy;

impl ReportDisplayStrategy for SummaryDisplayStrategy {
    fn render(&self, report: &ScanReport) -> String {
        let mut out = report.header();
        for descriptor in report
            .descriptors
            .iter()
            .filter(|d| d.status != DescriptorStatus::Stamp)
        {
            out.push_str(&format!("    - {}\n", descriptor.path));
        }
        out
    }

    fn name(&self) -> &'static str {
        "summary"
    }
}

/// Context that uses a display strategy
pub struct ReportDisplayContext {
    strategy: Box<dyn ReportDisplayStrategy>,
}

impl ReportDisplayContext {
    pub fn new(strategy: Box<dyn ReportDisplayStrategy>) -> Self {
        Self { strategy }
    }

    pub fn with_detailed_strategy() -> Self {
        Self::new(Box::new(DetailedDisplayStrategy))
    }

    pub fn with_summary_strategy() -> Self {
        Self::new(Box::new(SummaryDisplayStrategy))
    }

    pub fn display(&self, report: &ScanReport) {
        print!("{}", self.strategy.render(report));
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScanReport {
        ScanReport::new(
            "checkout",
            vec![
                ScannedDescriptor {
                    path: "core/api/pom.xml".to_string(),
                    status: DescriptorStatus::Stamp,
                },
                ScannedDescriptor {
                    path: "domains/toolabstraction/maven/src/test/resources/pom.xml".to_string(),
                    status: DescriptorStatus::Ignored,
                },
                ScannedDescriptor {
                    path: "pom.xml".to_string(),
                    status: DescriptorStatus::Stamp,
                },
            ],
        )
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();

        assert_eq!(report.count(DescriptorStatus::Stamp), 2);
        assert_eq!(report.count(DescriptorStatus::Ignored), 1);
        assert_eq!(report.count(DescriptorStatus::Excluded), 0);
    }

    #[test]
    fn test_detailed_lists_every_descriptor() {
        let rendered = DetailedDisplayStrategy.render(&sample_report());

        assert!(rendered.contains("2 to stamp, 1 ignored, 0 excluded"));
        assert!(rendered.contains("stamp    core/api/pom.xml"));
        assert!(rendered.contains("ignored  domains/toolabstraction/maven/src/test/resources/pom.xml"));
    }

    #[test]
    fn test_summary_lists_skipped_only() {
        let rendered = SummaryDisplayStrategy.render(&sample_report());

        assert!(rendered.contains("- domains/toolabstraction/maven/src/test/resources/pom.xml"));
        assert!(!rendered.contains("core/api/pom.xml"));
    }

    #[test]
    fn test_context_creation() {
        assert_eq!(
            ReportDisplayContext::with_detailed_strategy().strategy_name(),
            "detailed"
        );
        assert_eq!(
            ReportDisplayContext::with_summary_strategy().strategy_name(),
            "summary"
        );
    }
}
