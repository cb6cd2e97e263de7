use once_cell::sync::Lazy;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::breakdown::Breakdown;

static DEMO_RESULT: Lazy<AnalysisResult> = Lazy::new(|| AnalysisResult {
    repo_name: "sample-repository".to_string(),
    owner: "gitgrade-demo".to_string(),
    score: 68,
    summary: "[Demo] This sample evaluation is shown because the analysis service could not be reached. \
              It describes a typical mid-level project: working features and a sensible layout, \
              with thin test coverage and uneven commit history."
        .to_string(),
    roadmap: vec![
        "Add unit tests for the core modules".to_string(),
        "Set up continuous integration".to_string(),
        "Write atomic commits with descriptive messages".to_string(),
        "Expand the README with setup and usage instructions".to_string(),
    ],
    breakdown: Some(
        vec![
            ("Problem & Product Thinking", 10),
            ("Code Quality & Engineering Maturity", 20),
            ("Project Structure & Scalability", 10),
            ("Git & Collaboration Signals", 10),
            ("Testing & Reliability Mindset", 3),
            ("Documentation & Communication", 6),
            ("Professionalism Signals", 9),
        ]
        .into_iter()
        .collect::<Breakdown>(),
    ),
    verdict: Some("Demo".to_string()),
    level: None,
});

pub struct FallbackContent;

impl FallbackContent {

    pub fn demo_result() -> AnalysisResult {
        DEMO_RESULT.clone()
    }

    pub fn demo_outcome() -> AnalysisOutcome {
        AnalysisOutcome::demo(Self::demo_result())
    }
}
