//! Golden-file conformance harness.
//!
//! Compares actual tool output against expected baselines by structural
//! equality, never by text. Every case is persisted under the output root
//! so a failing run can be inspected and rebaselined with the generated
//! scripts.
//!
//! ## Output Layout
//!
//! ```text
//! <output_root>/<suite>/ActualOutputs/<name>.sarif
//! <output_root>/<suite>/ExpectedOutputs/<name>.sarif
//! <output_root>/Diff<suite>.sh          (only on mismatch)
//! <output_root>/Rebaseline<suite>.sh    (only on mismatch)
//! ```
//!
//! A case whose actual or expected bytes cannot be decoded (not UTF-8, or
//! not a valid log) is a mismatch for that case; the run continues with the
//! remaining cases.

use crate::equality::{log_equals, verify_round_trip, DocumentCodec, JsonCodec};
use crate::errors::{ExError, Result, SarifOrderError};
use crate::model::SarifLog;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const SARIF_EXTENSION: &str = "sarif";
const ACTUAL_OUTPUTS: &str = "ActualOutputs";
const EXPECTED_OUTPUTS: &str = "ExpectedOutputs";

/// Harness settings for one suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceConfig {
    /// Suite name, used for the output subdirectory and script names
    pub suite: String,
    /// Root directory for persisted cases and scripts
    pub output_root: PathBuf,
    /// Directory the rebaseline script copies actual outputs into
    pub baseline_dir: PathBuf,
    /// Also require each actual document to survive a codec round trip
    pub verify_round_trip: bool,
    /// Fail a case whose first invocation carries tool notifications
    pub forbid_notifications: bool,
}

impl ConformanceConfig {
    pub fn new(
        suite: impl Into<String>,
        output_root: impl Into<PathBuf>,
        baseline_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            suite: suite.into(),
            output_root: output_root.into(),
            baseline_dir: baseline_dir.into(),
            verify_round_trip: true,
            forbid_notifications: false,
        }
    }

    pub fn with_round_trip(mut self, enabled: bool) -> Self {
        self.verify_round_trip = enabled;
        self
    }

    pub fn with_forbid_notifications(mut self, enabled: bool) -> Self {
        self.forbid_notifications = enabled;
        self
    }

    fn suite_dir(&self) -> PathBuf {
        self.output_root.join(&self.suite)
    }
}

/// One named pair of actual and expected log documents
///
/// Both sides are kept as raw bytes and persisted unchanged; they are only
/// read as UTF-8 when the case is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceCase {
    pub name: String,
    pub actual: Vec<u8>,
    pub expected: Vec<u8>,
}

impl ConformanceCase {
    pub fn new(
        name: impl Into<String>,
        actual: impl Into<Vec<u8>>,
        expected: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            actual: actual.into(),
            expected: expected.into(),
        }
    }

    /// File name used for both persisted copies: the case name with any
    /// extension replaced by `.sarif`
    fn file_name(&self) -> String {
        let stem = Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone());
        format!("{}.{}", stem, SARIF_EXTENSION)
    }
}

/// Why a case failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum MismatchReason {
    /// Both sides decoded but are not structurally equal
    NotEquivalent,
    /// The actual bytes are not a valid UTF-8 log
    UndecodableActual(String),
    /// The expected bytes are not a valid UTF-8 log
    UndecodableExpected(String),
    /// The actual log does not survive a codec round trip
    RoundTrip(String),
    /// The actual log reports tool execution or configuration notifications
    UnexpectedNotifications,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseMismatch {
    pub name: String,
    pub reason: MismatchReason,
}

/// Outcome of a conformance run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    pub suite: String,
    pub case_count: usize,
    pub mismatches: Vec<CaseMismatch>,
    pub actual_dir: PathBuf,
    pub expected_dir: PathBuf,
    pub diff_script: Option<PathBuf>,
    pub rebaseline_script: Option<PathBuf>,
}

impl ConformanceReport {
    /// True when every case matched
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Names of the mismatched cases, in case order
    pub fn mismatched_names(&self) -> Vec<String> {
        self.mismatches.iter().map(|m| m.name.clone()).collect()
    }

    /// Structured error describing a failed run, or `None` when it passed
    pub fn to_error(&self) -> Option<ExError> {
        if self.passed() {
            return None;
        }
        let mut message = format!(
            "{} of {} cases in suite '{}' differ from their expected output",
            self.mismatches.len(),
            self.case_count,
            self.suite
        );
        if let Some(diff) = &self.diff_script {
            message.push_str(&format!("; compare with {}", diff.display()));
        }
        if let Some(rebaseline) = &self.rebaseline_script {
            message.push_str(&format!("; rebaseline with {}", rebaseline.display()));
        }
        let mismatch = SarifOrderError::SemanticMismatch {
            resource: self.suite.clone(),
        };
        Some(
            ExError::from(mismatch)
                .with_op("conformance_run")
                .with_message(message)
                .with_candidates(self.mismatched_names()),
        )
    }
}

/// A conformance run over a set of cases
#[derive(Debug, Clone)]
pub struct ConformanceRun<C = JsonCodec> {
    config: ConformanceConfig,
    codec: C,
    cases: Vec<ConformanceCase>,
}

impl ConformanceRun<JsonCodec> {
    pub fn new(config: ConformanceConfig) -> Self {
        Self {
            config,
            codec: JsonCodec::pretty(),
            cases: Vec::new(),
        }
    }
}

impl<C: DocumentCodec> ConformanceRun<C> {
    /// Replace the codec used to decode cases and check round trips
    pub fn with_codec<D: DocumentCodec>(self, codec: D) -> ConformanceRun<D> {
        ConformanceRun {
            config: self.config,
            codec,
            cases: self.cases,
        }
    }

    pub fn with_case(mut self, case: ConformanceCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn with_cases(mut self, cases: impl IntoIterator<Item = ConformanceCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    pub fn config(&self) -> &ConformanceConfig {
        &self.config
    }

    /// Check every case, persist both sides and write scripts on mismatch
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: no cases, or a case name that is empty, duplicated
    ///   or not a plain file name
    /// - `Io`: the output tree or a script could not be written
    pub fn execute(&self) -> Result<ConformanceReport> {
        log_op_start!(
            "conformance_run",
            suite = self.config.suite.as_str(),
            case_count = self.cases.len()
        );
        let start = std::time::Instant::now();

        let report = self.execute_impl().map_err(|e| {
            log_op_error!(
                "conformance_run",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                suite = self.config.suite.as_str()
            );
            e
        })?;

        log_op_end!(
            "conformance_run",
            duration_ms = start.elapsed().as_millis() as u64,
            suite = self.config.suite.as_str(),
            mismatch_count = report.mismatches.len()
        );
        Ok(report)
    }

    fn execute_impl(&self) -> Result<ConformanceReport> {
        self.validate_cases()?;

        let suite_dir = self.config.suite_dir();
        let actual_dir = create_dir(&suite_dir.join(ACTUAL_OUTPUTS))?;
        let expected_dir = create_dir(&suite_dir.join(EXPECTED_OUTPUTS))?;

        let mut mismatches = Vec::new();
        for case in &self.cases {
            if let Some(reason) = self.check_case(case) {
                crate::__log_op_event!(
                    warn,
                    "conformance_run",
                    EVENT_MISMATCH,
                    resource = case.name.as_str(),
                    reason = ?reason
                );
                mismatches.push(CaseMismatch {
                    name: case.name.clone(),
                    reason,
                });
            }
            write_file(&actual_dir.join(case.file_name()), &case.actual)?;
            write_file(&expected_dir.join(case.file_name()), &case.expected)?;
        }

        let (diff_script, rebaseline_script) = if mismatches.is_empty() {
            (None, None)
        } else {
            let baseline_dir = create_dir(&self.config.baseline_dir)?;
            let output_root = create_dir(&self.config.output_root)?;
            let diff = output_root.join(format!("Diff{}.sh", self.config.suite));
            write_script(&diff, &diff_command(&expected_dir, &actual_dir))?;
            let rebaseline = output_root.join(format!("Rebaseline{}.sh", self.config.suite));
            write_script(&rebaseline, &rebaseline_command(&actual_dir, &baseline_dir))?;
            (Some(diff), Some(rebaseline))
        };

        Ok(ConformanceReport {
            suite: self.config.suite.clone(),
            case_count: self.cases.len(),
            mismatches,
            actual_dir,
            expected_dir,
            diff_script,
            rebaseline_script,
        })
    }

    fn validate_cases(&self) -> Result<()> {
        if self.cases.is_empty() {
            return Err(SarifOrderError::InvalidInput {
                reason: format!("suite '{}' has no cases", self.config.suite),
            });
        }
        if self.config.suite.is_empty() || !is_plain_file_name(&self.config.suite) {
            return Err(SarifOrderError::InvalidInput {
                reason: format!("invalid suite name '{}'", self.config.suite),
            });
        }
        let mut seen = BTreeSet::new();
        for case in &self.cases {
            if case.name.is_empty() || !is_plain_file_name(&case.name) {
                return Err(SarifOrderError::InvalidInput {
                    reason: format!("invalid case name '{}'", case.name),
                });
            }
            if !seen.insert(case.file_name()) {
                return Err(SarifOrderError::InvalidInput {
                    reason: format!("duplicate case name '{}'", case.name),
                });
            }
        }
        Ok(())
    }

    fn check_case(&self, case: &ConformanceCase) -> Option<MismatchReason> {
        let actual = match self.decode(&case.actual) {
            Ok(log) => log,
            Err(detail) => return Some(MismatchReason::UndecodableActual(detail)),
        };
        let expected = match self.decode(&case.expected) {
            Ok(log) => log,
            Err(detail) => return Some(MismatchReason::UndecodableExpected(detail)),
        };
        if self.config.forbid_notifications && has_tool_notifications(&actual) {
            return Some(MismatchReason::UnexpectedNotifications);
        }
        if !log_equals(&actual, &expected) {
            return Some(MismatchReason::NotEquivalent);
        }
        if self.config.verify_round_trip {
            if let Err(e) = verify_round_trip(&self.codec, &actual) {
                return Some(MismatchReason::RoundTrip(e.to_string()));
            }
        }
        None
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<SarifLog, String> {
        let text = std::str::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {}", e))?;
        self.codec.decode(text).map_err(|e| e.to_string())
    }
}

/// Pair up `*.sarif` files from an actual and an expected directory by name
///
/// A file present on only one side yields a case whose other side is empty,
/// which then fails to decode and is reported as a mismatch. File contents
/// are read as bytes, so a file that is not UTF-8 fails only its own case.
///
/// ## Errors
///
/// `Io` if either directory cannot be read.
pub fn cases_from_dirs(actual_dir: &Path, expected_dir: &Path) -> Result<Vec<ConformanceCase>> {
    let actual = sarif_files(actual_dir)?;
    let expected = sarif_files(expected_dir)?;
    let names: BTreeSet<&String> = actual.iter().chain(expected.iter()).collect();

    names
        .into_iter()
        .map(|name| {
            let read = |dir: &Path, present: &BTreeSet<String>| -> Result<Vec<u8>> {
                if present.contains(name) {
                    let path = dir.join(name);
                    fs::read(&path).map_err(|e| SarifOrderError::io(&path, e))
                } else {
                    Ok(Vec::new())
                }
            };
            Ok(ConformanceCase::new(
                name.clone(),
                read(actual_dir, &actual)?,
                read(expected_dir, &expected)?,
            ))
        })
        .collect()
}

fn sarif_files(dir: &Path) -> Result<BTreeSet<String>> {
    let entries = fs::read_dir(dir).map_err(|e| SarifOrderError::io(dir, e))?;
    let mut names = BTreeSet::new();
    for entry in entries {
        let path = entry.map_err(|e| SarifOrderError::io(dir, e))?.path();
        let is_sarif = path.extension().is_some_and(|ext| ext == SARIF_EXTENSION);
        if is_sarif && path.is_file() {
            if let Some(name) = path.file_name() {
                names.insert(name.to_string_lossy().into_owned());
            }
        }
    }
    Ok(names)
}

fn has_tool_notifications(log: &SarifLog) -> bool {
    let invocation = log
        .runs
        .as_ref()
        .and_then(|runs| runs.first())
        .and_then(|run| run.invocations.as_ref())
        .and_then(|invocations| invocations.first());
    invocation.is_some_and(|i| {
        i.tool_execution_notifications.is_some() || i.tool_configuration_notifications.is_some()
    })
}

fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    path.file_name().is_some_and(|f| f == path.as_os_str())
}

/// `path` as a single-quoted POSIX shell word; embedded `'` become `'\''`
fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}

fn diff_command(expected_dir: &Path, actual_dir: &Path) -> String {
    format!(
        "$DIFF {} {}",
        shell_quote(expected_dir),
        shell_quote(actual_dir)
    )
}

fn rebaseline_command(actual_dir: &Path, baseline_dir: &Path) -> String {
    format!(
        "cp {}/*.{} {}",
        shell_quote(actual_dir),
        SARIF_EXTENSION,
        shell_quote(baseline_dir)
    )
}

fn create_dir(path: &Path) -> Result<PathBuf> {
    fs::create_dir_all(path).map_err(|e| SarifOrderError::io(path, e))?;
    fs::canonicalize(path).map_err(|e| SarifOrderError::io(path, e))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| SarifOrderError::io(path, e))
}

fn write_script(path: &Path, command: &str) -> Result<()> {
    write_file(path, format!("#!/bin/sh\n{}\n", command).as_bytes())?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .map_err(|e| SarifOrderError::io(path, e))?;
    }
    Ok(())
}
