//! # Citation Registry — FDA/FTC Guidance Documents
//!
//! Named regulatory guidance documents with direct links, the issue-kind →
//! citation-set mapping, and the key → URL resolver detectors use to stamp
//! `reference_url` on issues.
//!
//! Lookups are total: a key with no registry entry resolves to an empty
//! URL, and a kind with no citation set falls back to the general device
//! promotion guidance.

use mlr_core::IssueKind;

/// One regulatory guidance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation {
    /// Registry key.
    pub key: &'static str,
    /// Full document title.
    pub title: &'static str,
    /// Direct URL.
    pub url: &'static str,
    /// Short citation used in rendered listings.
    pub short_citation: &'static str,
}

/// All registered guidance documents.
pub const REGISTRY: &[Citation] = &[
    Citation {
        key: "fda_medical_device_promotion",
        title: "Medical Device Advertising and Promotion - FDA",
        url: "https://www.fda.gov/medical-devices/device-advice-comprehensive-regulatory-assistance/medical-device-promotion-advertising",
        short_citation: "FDA Medical Device Promotion",
    },
    Citation {
        key: "fda_misbranding_guidance",
        title: "FDA Guidance on Medical Device Misbranding",
        url: "https://www.fda.gov/regulatory-information/search-fda-guidance-documents/guidance-industry-and-fda-staff-medical-device-label-requirements",
        short_citation: "FDA Misbranding Guidance",
    },
    Citation {
        key: "fda_intended_use_guidance",
        title: "FDA Guidance on Intended Use in Device Labeling",
        url: "https://www.fda.gov/regulatory-information/search-fda-guidance-documents/how-study-and-market-your-medical-device",
        short_citation: "FDA Intended Use Guidance",
    },
    Citation {
        key: "ftc_health_claims",
        title: "FTC Health Products Compliance Guidance",
        url: "https://www.ftc.gov/business-guidance/resources/health-products-compliance-guidance",
        short_citation: "FTC Health Products Compliance",
    },
    Citation {
        key: "ftc_advertising_substantiation",
        title: "FTC Policy Statement on Advertising Substantiation",
        url: "https://www.ftc.gov/legal-library/browse/federal-register-notices/advertising-substantiation-policy-statement",
        short_citation: "FTC Substantiation Policy",
    },
    Citation {
        key: "ftc_substantiation_guide",
        title: "Advertising Substantiation: What Advertisers Should Know",
        url: "https://www.ftc.gov/business-guidance/resources/advertising-faqs-guide-small-business",
        short_citation: "FTC Substantiation Guide",
    },
    Citation {
        key: "fda_labeling_requirements",
        title: "FDA Device Labeling Guidance",
        url: "https://www.fda.gov/medical-devices/overview-device-regulation/device-labeling",
        short_citation: "FDA Labeling Requirements",
    },
    Citation {
        key: "fda_label_requirements_detailed",
        title: "Medical Device Labeling Regulations (21 CFR Part 801)",
        url: "https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfcfr/CFRSearch.cfm?CFRPart=801",
        short_citation: "21 CFR Part 801",
    },
    Citation {
        key: "fda_510k_premarket",
        title: "FDA Premarket Notification 510(k) Guidance",
        url: "https://www.fda.gov/medical-devices/premarket-submissions-selecting-and-preparing-correct-submission/premarket-notification-510k",
        short_citation: "FDA 510(k) Guidance",
    },
    Citation {
        key: "ftc_deceptive_advertising",
        title: "FTC Policy Statement on Deception (Appended to Cliffdale Associates)",
        url: "https://www.ftc.gov/legal-library/browse/ftc-policy-statement-deception",
        short_citation: "FTC Deception Policy Statement",
    },
    Citation {
        key: "ftc_endorsement_guides",
        title: "FTC Endorsement Guides (16 CFR Part 255)",
        url: "https://www.ecfr.gov/current/title-16/chapter-I/subchapter-B/part-255",
        short_citation: "FTC Endorsement Guides",
    },
    Citation {
        key: "fda_clinical_trials",
        title: "Clinical Trials and Medical Devices - FDA",
        url: "https://www.fda.gov/medical-devices/device-advice-comprehensive-regulatory-assistance/clinical-trials-medical-devices",
        short_citation: "FDA Clinical Trials Guidance",
    },
    Citation {
        key: "fda_promotional_materials",
        title: "Promotional Materials Submitted to FDA (Draft Guidance)",
        url: "https://www.fda.gov/media/72379/download",
        short_citation: "FDA Promotional Materials Guidance",
    },
];

/// Look up one guidance document by registry key.
pub fn get(key: &str) -> Option<&'static Citation> {
    REGISTRY.iter().find(|c| c.key == key)
}

/// Resolve a registry key to its URL.
///
/// Unregistered keys resolve to the empty string; issues stamped with such
/// a key simply carry no reference URL.
pub fn url_for(key: &str) -> &'static str {
    get(key).map(|c| c.url).unwrap_or("")
}

/// Citation-set keys per issue kind. Kinds without a curated set fall back
/// to the general device-promotion guidance.
fn citation_keys(kind: IssueKind) -> &'static [&'static str] {
    match kind {
        IssueKind::UnsubstantiatedSuperlatives => &[
            "ftc_health_claims",
            "ftc_advertising_substantiation",
            "ftc_substantiation_guide",
        ],
        IssueKind::Overpromising | IssueKind::AbsoluteStatement => &[
            "ftc_deceptive_advertising",
            "fda_medical_device_promotion",
            "fda_misbranding_guidance",
        ],
        IssueKind::MissingDisclaimer | IssueKind::MisplacedDisclaimer => &[
            "fda_labeling_requirements",
            "fda_label_requirements_detailed",
            "fda_medical_device_promotion",
        ],
        IssueKind::VagueTestimonial => &[
            "ftc_endorsement_guides",
            "ftc_health_claims",
            "ftc_advertising_substantiation",
        ],
        IssueKind::UnsupportedComparative => &[
            "ftc_advertising_substantiation",
            "ftc_deceptive_advertising",
            "ftc_substantiation_guide",
        ],
        IssueKind::UnsupportedClaim | IssueKind::WeakReference => &[
            "ftc_advertising_substantiation",
            "ftc_substantiation_guide",
        ],
        IssueKind::UnqualifiedPercentage => &[
            "ftc_advertising_substantiation",
            "fda_clinical_trials",
        ],
        IssueKind::MisleadingLanguage => &[
            "ftc_deceptive_advertising",
            "fda_promotional_materials",
        ],
        IssueKind::InconsistentTrademark
        | IssueKind::ContradictoryStatement
        | IssueKind::InappropriateTone
        | IssueKind::OverlyTechnical => &[],
    }
}

/// Regulatory citations backing findings of the given kind.
///
/// Kinds with no curated set return the general device-promotion guidance.
pub fn citations_for_kind(kind: IssueKind) -> Vec<&'static Citation> {
    let keys = citation_keys(kind);
    let keys: &[&str] = if keys.is_empty() {
        &["fda_medical_device_promotion"]
    } else {
        keys
    };
    keys.iter().filter_map(|key| get(key)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for citation in REGISTRY {
            assert!(seen.insert(citation.key), "duplicate key {}", citation.key);
        }
    }

    #[test]
    fn url_for_known_key() {
        assert!(url_for("ftc_advertising_substantiation").contains("ftc.gov"));
    }

    #[test]
    fn url_for_unknown_key_is_empty() {
        assert_eq!(url_for("overpromising_outcomes"), "");
        assert_eq!(url_for(""), "");
    }

    #[test]
    fn citation_sets_resolve() {
        let citations = citations_for_kind(IssueKind::Overpromising);
        assert_eq!(citations.len(), 3);
        assert_eq!(citations[0].short_citation, "FTC Deception Policy Statement");
    }

    #[test]
    fn fallback_set_for_unmapped_kind() {
        let citations = citations_for_kind(IssueKind::InconsistentTrademark);
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].key, "fda_medical_device_promotion");
    }

    #[test]
    fn every_mapped_key_is_registered() {
        for kind in IssueKind::all() {
            for key in citation_keys(*kind) {
                assert!(get(key).is_some(), "unregistered citation key {key}");
            }
        }
    }
}
