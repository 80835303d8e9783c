use crate::configuration::constants::report;
use crate::configuration::settings::ReportSettings;
use crate::reporter::error::Error;
use crate::reporter::model::TestCaseResult;
use crate::reporter::Reporter;
use std::fs;
use std::path::PathBuf;

/// Writes the recorded outcomes as a single self-contained HTML table.
/// Emission is gated by [`ReportSettings`]; when the switch is off the
/// reporter accepts the results and touches nothing on disk.
pub struct HtmlReporter {
    settings: ReportSettings,
    output_directory: PathBuf,
}

impl HtmlReporter {
    pub fn new(settings: ReportSettings) -> Self {
        Self::with_output_directory(settings, report::OUTPUT_DIRECTORY)
    }

    pub fn with_output_directory<P>(settings: ReportSettings, output_directory: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            settings,
            output_directory: output_directory.into(),
        }
    }

    fn render(results: &[TestCaseResult]) -> String {
        let mut document = String::new();
        document.push_str(
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>TestCase Report</title></head><body>",
        );
        document.push_str("<table border=\"1\"><tr><th>ID</th><th>Test</th><th>Status</th></tr>");
        for result in results {
            document.push_str("<tr><td>");
            document.push_str(escape(result.id().as_str()).as_str());
            document.push_str("</td><td>");
            document.push_str(escape(result.test_name()).as_str());
            document.push_str("</td><td>");
            document.push_str(escape(result.status().as_str()).as_str());
            document.push_str("</td></tr>");
        }
        document.push_str("</table></body></html>");
        document
    }
}

impl Reporter for HtmlReporter {
    fn emit(&self, results: &[TestCaseResult]) -> Result<(), Error> {
        if !self.settings.enabled {
            debug!("Report emission disabled, dropping {} results", results.len());
            return Ok(());
        }
        fs::create_dir_all(&self.output_directory)?;
        let output = self.output_directory.join(report::OUTPUT_FILE);
        fs::write(&output, Self::render(results))?;
        info!(
            "Report for {} test cases written to {}",
            results.len(),
            output.display()
        );
        Ok(())
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for symbol in value.chars() {
        match symbol {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod test {
    use super::{escape, HtmlReporter};
    use crate::configuration::constants::report;
    use crate::configuration::settings::ReportSettings;
    use crate::reporter::model::{Status, TestCaseResult};
    use crate::reporter::Reporter;
    use std::fs;

    fn results() -> Vec<TestCaseResult> {
        vec![
            TestCaseResult::new("ABC-1".parse().unwrap(), "first test", Status::Passed),
            TestCaseResult::new("ABC-2".parse().unwrap(), "second test", Status::Failed),
        ]
    }

    #[test]
    fn test_render_keeps_execution_order() {
        let document = HtmlReporter::render(&results());
        let first = document.find("ABC-1").unwrap();
        let second = document.find("ABC-2").unwrap();

        assert!(first < second);
        assert_eq!(document.matches("<tr><td>").count(), 2);
    }

    #[test]
    fn test_render_contains_header_row() {
        let document = HtmlReporter::render(&results());

        assert!(document.contains("<tr><th>ID</th><th>Test</th><th>Status</th></tr>"));
        assert!(document.contains("PASSED"));
        assert!(document.contains("FAILED"));
    }

    #[test]
    fn test_render_escapes_markup_in_names() {
        let entries = vec![TestCaseResult::new(
            "XY-1".parse().unwrap(),
            "compares a < b & \"c\"",
            Status::Passed,
        )];
        let document = HtmlReporter::render(&entries);

        assert!(document.contains("compares a &lt; b &amp; &quot;c&quot;"));
        assert!(!document.contains("a < b"));
    }

    #[test]
    fn test_escape_replaces_all_special_symbols() {
        assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_emit_writes_report_file() {
        let directory = tempfile::tempdir().unwrap();
        let root = directory.path().join("build").join("reports");
        let reporter =
            HtmlReporter::with_output_directory(ReportSettings { enabled: true }, root.clone());

        reporter.emit(&results()).unwrap();

        let written = fs::read_to_string(root.join(report::OUTPUT_FILE)).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert_eq!(written.matches("<tr><td>").count(), 2);
    }

    #[test]
    fn test_emit_overwrites_previous_report() {
        let directory = tempfile::tempdir().unwrap();
        let root = directory.path().to_path_buf();
        fs::write(root.join(report::OUTPUT_FILE), "stale").unwrap();
        let reporter =
            HtmlReporter::with_output_directory(ReportSettings { enabled: true }, root.clone());

        reporter.emit(&results()).unwrap();

        let written = fs::read_to_string(root.join(report::OUTPUT_FILE)).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_emit_disabled_writes_nothing() {
        let directory = tempfile::tempdir().unwrap();
        let root = directory.path().join("reports");
        let reporter =
            HtmlReporter::with_output_directory(ReportSettings { enabled: false }, root.clone());

        reporter.emit(&results()).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn test_emit_surfaces_io_failure() {
        let directory = tempfile::tempdir().unwrap();
        let blocked = directory.path().join("blocked");
        fs::write(&blocked, "not a directory").unwrap();
        let reporter =
            HtmlReporter::with_output_directory(ReportSettings { enabled: true }, blocked);

        assert!(reporter.emit(&results()).is_err());
    }
}
