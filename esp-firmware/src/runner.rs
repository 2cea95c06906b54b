// Test-Runner - führt benannte Checks nacheinander aus
//
// Ausgabe im Unity-Format, damit die Log-Auswertung auf dem Host
// dieselben Zeilen sieht wie bei einem PlatformIO Embedded-Test:
//
//   test_name:PASS
//   test_name:FAIL: Expected 2 Was 3
//   -----------------------
//   3 Tests 1 Failures 0 Ignored
//   FAIL

use core::future::Future;

use defmt::{error, info};
use esp_core::{CheckResult, SuiteSummary};

pub struct TestRunner {
    summary: SuiteSummary,
}

impl TestRunner {
    /// Entspricht UNITY_BEGIN()
    pub fn begin() -> Self {
        Self {
            summary: SuiteSummary::new(),
        }
    }

    /// Führt einen Check aus und verbucht das Ergebnis
    ///
    /// Ein fehlgeschlagener Check bricht die Suite nicht ab.
    pub async fn run(&mut self, name: &str, check: impl Future<Output = CheckResult>) {
        match self.summary.run(check).await {
            Ok(()) => info!("{}:PASS", name),
            Err(failure) => error!("{}:FAIL: {}", name, failure),
        }
    }

    /// Entspricht UNITY_END(): Zusammenfassung ausgeben
    pub fn end(self) -> SuiteSummary {
        info!("-----------------------");
        info!("{}", self.summary);
        if self.summary.passed() {
            info!("{}", self.summary.verdict());
        } else {
            error!("{}", self.summary.verdict());
        }
        self.summary
    }
}
