//! Catalog of the diagnostics this tool fronts
//!
//! The catalog is descriptive only: it names the tests a user runs against
//! their hardware and supplies the display labels the ledger denormalizes.
//! Verdicts for ids outside this catalog are still legal, since every test
//! owns its own id.

use serde::{Deserialize, Serialize};

/// Functional grouping for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestCategory {
    /// Panel checks rendered full-screen
    Display,
    /// Controller and keyboard checks
    Input,
    /// Camera and audio checks
    Media,
    /// Latency and geometry calculators
    Measurement,
}

impl TestCategory {
    /// All categories in listing order
    pub fn all() -> [TestCategory; 4] {
        [
            TestCategory::Display,
            TestCategory::Input,
            TestCategory::Media,
            TestCategory::Measurement,
        ]
    }
}

impl std::fmt::Display for TestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TestCategory::Display => "Display",
            TestCategory::Input => "Input",
            TestCategory::Media => "Media",
            TestCategory::Measurement => "Measurement",
        };
        write!(f, "{}", name)
    }
}

/// One diagnostic test the tool knows about
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticTest {
    /// Stable identifier used as the ledger key
    pub id: &'static str,
    /// Display label
    pub name: &'static str,
    /// Listing group
    pub category: TestCategory,
    /// One-line description for listings
    pub summary: &'static str,
}

/// Every diagnostic in listing order
static ALL_TESTS: &[DiagnosticTest] = &[
    DiagnosticTest {
        id: "dead-pixel",
        name: "Dead Pixel Test",
        category: TestCategory::Display,
        summary: "Full-screen solid colors to expose stuck or dead pixels",
    },
    DiagnosticTest {
        id: "uniformity",
        name: "Uniformity Test",
        category: TestCategory::Display,
        summary: "Flat gray fields to expose backlight bleed and clouding",
    },
    DiagnosticTest {
        id: "gamma",
        name: "Gamma Calibration",
        category: TestCategory::Display,
        summary: "Banded target patterns for checking the gamma curve",
    },
    DiagnosticTest {
        id: "ghosting",
        name: "Ghosting Test",
        category: TestCategory::Display,
        summary: "Moving objects to expose motion blur and overdrive artifacts",
    },
    DiagnosticTest {
        id: "gamepad",
        name: "Gamepad Tester",
        category: TestCategory::Input,
        summary: "Button and stick readouts for connected controllers",
    },
    DiagnosticTest {
        id: "keyboard",
        name: "Keyboard Tester",
        category: TestCategory::Input,
        summary: "Key-by-key rollover and scancode check",
    },
    DiagnosticTest {
        id: "webcam",
        name: "Webcam Test",
        category: TestCategory::Media,
        summary: "Camera preview with resolution and frame rate readout",
    },
    DiagnosticTest {
        id: "speaker",
        name: "Speaker Test",
        category: TestCategory::Media,
        summary: "Left/right channel sweeps and tone playback",
    },
    DiagnosticTest {
        id: "reaction-time",
        name: "Reaction Time",
        category: TestCategory::Measurement,
        summary: "Click-on-green latency measurement",
    },
    DiagnosticTest {
        id: "ppi",
        name: "PPI Calculator",
        category: TestCategory::Measurement,
        summary: "Pixel density from resolution and diagonal size",
    },
];

/// Get the full catalog in listing order
pub fn all_tests() -> &'static [DiagnosticTest] {
    ALL_TESTS
}

/// Look up a diagnostic by id
pub fn find_test(id: &str) -> Option<&'static DiagnosticTest> {
    ALL_TESTS.iter().find(|t| t.id == id)
}

/// Diagnostics belonging to one category, in listing order
pub fn tests_in_category(category: TestCategory) -> Vec<&'static DiagnosticTest> {
    ALL_TESTS.iter().filter(|t| t.category == category).collect()
}
