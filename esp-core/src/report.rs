//! Test-Runner Buchhaltung
//!
//! Zählt Checks und Fehler und liefert die Zusammenfassung im
//! Unity-Format (`N Tests F Failures 0 Ignored` + `OK`/`FAIL`).
//! Das Loggen der Checks übernimmt die Firmware.

use core::fmt;
use core::future::Future;

use crate::mhz19::Mhz19Error;
use crate::traits::{BuzzerError, LedError};

/// Grund für einen fehlgeschlagenen Check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFailure {
    /// Wert weicht vom erwarteten Wert ab
    NotEqual { expected: i64, actual: i64 },
    /// Wert ist gleich einem verbotenen Wert
    Equal { value: i64 },
    Sensor(Mhz19Error),
    Led(LedError),
    Buzzer(BuzzerError),
}

impl From<Mhz19Error> for CheckFailure {
    fn from(e: Mhz19Error) -> Self {
        Self::Sensor(e)
    }
}

impl From<LedError> for CheckFailure {
    fn from(e: LedError) -> Self {
        Self::Led(e)
    }
}

impl From<BuzzerError> for CheckFailure {
    fn from(e: BuzzerError) -> Self {
        Self::Buzzer(e)
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEqual { expected, actual } => {
                write!(f, "Expected {} Was {}", expected, actual)
            }
            Self::Equal { value } => write!(f, "Expected Not-Equal {}", value),
            Self::Sensor(e) => write!(f, "Sensor error {:?}", e),
            Self::Led(e) => write!(f, "LED error {:?}", e),
            Self::Buzzer(e) => write!(f, "Buzzer error {:?}", e),
        }
    }
}

/// Ergebnis eines einzelnen Checks
pub type CheckResult = Result<(), CheckFailure>;

/// Assertion: `actual == expected`
pub fn expect_eq(expected: impl Into<i64>, actual: impl Into<i64>) -> CheckResult {
    let (expected, actual) = (expected.into(), actual.into());
    if expected == actual {
        Ok(())
    } else {
        Err(CheckFailure::NotEqual { expected, actual })
    }
}

/// Assertion: `actual != unexpected`
pub fn expect_ne(unexpected: impl Into<i64>, actual: impl Into<i64>) -> CheckResult {
    let (unexpected, actual) = (unexpected.into(), actual.into());
    if unexpected != actual {
        Ok(())
    } else {
        Err(CheckFailure::Equal { value: actual })
    }
}

/// Zähler über alle ausgeführten Checks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuiteSummary {
    pub tests: u32,
    pub failures: u32,
}

impl SuiteSummary {
    pub const fn new() -> Self {
        Self {
            tests: 0,
            failures: 0,
        }
    }

    /// Verbucht das Ergebnis eines Checks
    pub fn record(&mut self, result: &CheckResult) {
        self.tests += 1;
        if result.is_err() {
            self.failures += 1;
        }
    }

    /// Führt einen Check aus und verbucht das Ergebnis
    ///
    /// Ein Fehler bricht die Suite nicht ab, er wird nur gezählt.
    pub async fn run(&mut self, check: impl Future<Output = CheckResult>) -> CheckResult {
        let result = check.await;
        self.record(&result);
        result
    }

    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    pub fn verdict(&self) -> &'static str {
        if self.passed() { "OK" } else { "FAIL" }
    }
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Tests {} Failures 0 Ignored", self.tests, self.failures)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for CheckFailure {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CheckFailure::NotEqual { expected, actual } => {
                defmt::write!(fmt, "Expected {} Was {}", expected, actual)
            }
            CheckFailure::Equal { value } => defmt::write!(fmt, "Expected Not-Equal {}", value),
            CheckFailure::Sensor(e) => defmt::write!(fmt, "Sensor error {}", e),
            CheckFailure::Led(_) => defmt::write!(fmt, "LED write failed"),
            CheckFailure::Buzzer(e) => match e {
                BuzzerError::Timer => defmt::write!(fmt, "Buzzer timer setup failed"),
                BuzzerError::Channel => defmt::write!(fmt, "Buzzer channel setup failed"),
            },
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SuiteSummary {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} Tests {} Failures 0 Ignored",
            self.tests,
            self.failures
        )
    }
}
