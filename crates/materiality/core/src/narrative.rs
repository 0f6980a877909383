//! Narrative generation

use crate::inference::{join_labels, ScopeSet, TopicSet};
use materiality_types::{CompanyProfile, RiskBand, RiskScore};

/// Render the assessment narrative
///
/// Size and sector are lower-cased to read as prose. The band label and
/// the score are interpolated verbatim. Empty sets render as empty lists.
pub fn narrate(
    profile: &CompanyProfile,
    scopes: &ScopeSet,
    topics: &TopicSet,
    score: RiskScore,
    band: RiskBand,
) -> String {
    format!(
        "Based on the provided company profile—a {size} {sector} organization operating in \
         {geography}—the PCAP-style risk level is {band}, with a total score of {score} out of \
         {max}. The emission scopes most likely to be material include: {scopes}. Key ESG and \
         climate themes that warrant management attention include: {topics}. These insights \
         can serve as a structured starting point for your materiality assessment, \
         prioritization, and disclosure planning.",
        size = profile.size.label().to_lowercase(),
        sector = profile.sector.label().to_lowercase(),
        geography = profile.geography,
        band = band,
        score = score.value,
        max = score.max(),
        scopes = join_labels(scopes),
        topics = join_labels(topics),
    )
}
