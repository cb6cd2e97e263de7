use url::form_urlencoded;
use crate::config::constants::REPORT_DOWNLOAD_PATH;
use crate::enums::roadmap_encoding::RoadmapEncoding;
use crate::structs::analysis_result::AnalysisResult;

pub struct ReportLinkBuilder;

impl ReportLinkBuilder {

    /// `{base}/download-pdf?repo=..&score=..&summary=..&roadmap=..`
    ///
    /// With [`RoadmapEncoding::Joined`] the steps are joined with bare commas
    /// before encoding, so the receiver cannot tell a comma inside a step
    /// from a step boundary.
    pub fn build(result: &AnalysisResult, report_base: &str, encoding: RoadmapEncoding) -> String {
        let mut link = format!(
            "{}/{}?repo={}&score={}&summary={}",
            report_base,
            REPORT_DOWNLOAD_PATH,
            Self::encode(&result.repo_name),
            result.score,
            Self::encode(&result.summary),
        );

        match encoding {
            RoadmapEncoding::Joined => {
                if result.roadmap.iter().any(|step| step.contains(',')) {
                    log::warn!("⚠️ A roadmap step contains a comma; the report will split it into separate steps");
                }
                link.push_str("&roadmap=");
                link.push_str(&Self::encode(&result.roadmap.join(",")));
            }
            RoadmapEncoding::Repeated => {
                if result.roadmap.is_empty() {
                    link.push_str("&roadmap=");
                }
                for step in &result.roadmap {
                    link.push_str("&roadmap=");
                    link.push_str(&Self::encode(step));
                }
            }
        }

        link
    }

    fn encode(value: &str) -> String {
        form_urlencoded::byte_serialize(value.as_bytes()).collect()
    }
}
