// Best-effort startup: every visual feature initializes inside its own
// failure boundary so one failure never skips the others.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureStatus {
    Started,
    /// The feature's container is not on this page.
    Skipped(&'static str),
}

#[derive(Debug)]
pub struct FeatureReport {
    pub name: &'static str,
    pub outcome: Result<FeatureStatus, String>,
}

impl FeatureReport {
    /// Record and log the result of one initializer.
    pub fn from_result(name: &'static str, result: anyhow::Result<FeatureStatus>) -> Self {
        let outcome = match result {
            Ok(FeatureStatus::Started) => {
                log::info!("[init] {} started", name);
                Ok(FeatureStatus::Started)
            }
            Ok(FeatureStatus::Skipped(why)) => {
                log::debug!("[init] {} skipped: {}", name, why);
                Ok(FeatureStatus::Skipped(why))
            }
            Err(e) => {
                log::warn!("[init] {} unavailable, continuing without it: {:#}", name, e);
                Err(format!("{:#}", e))
            }
        };
        Self { name, outcome }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.outcome, Ok(FeatureStatus::Started))
    }
}

pub fn run_isolated(
    name: &'static str,
    init: impl FnOnce() -> anyhow::Result<FeatureStatus>,
) -> FeatureReport {
    FeatureReport::from_result(name, init())
}

pub type StartupReport = SmallVec<[FeatureReport; 4]>;

/// Run each initializer in order; all of them run regardless of earlier
/// failures.
pub fn run_all<'a, I>(inits: I) -> StartupReport
where
    I: IntoIterator<
        Item = (
            &'static str,
            Box<dyn FnOnce() -> anyhow::Result<FeatureStatus> + 'a>,
        ),
    >,
{
    inits
        .into_iter()
        .map(|(name, init)| run_isolated(name, init))
        .collect()
}
