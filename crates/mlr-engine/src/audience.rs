//! # Audience Classification & Tone
//!
//! Scores the whole document against patient, professional, and emotional
//! vocabularies, classifies the audience from the score ratios, and checks
//! tone appropriateness for the classified audience. Also runs the
//! document-wide misleading-language families, each of which produces at
//! most one issue citing the first matching line.

use once_cell::sync::Lazy;
use regex::Regex;

use mlr_core::{AudienceType, Issue, IssueKind, Location, Severity};

use crate::text::truncate_chars;

static PATIENT_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:patient|you|your|yourself|people|anyone|everyone)",
        r"(?i)(?:feel|experience|enjoy|benefit|results)",
        r"(?i)(?:daily life|everyday|activities|freedom|independence)",
        r"(?i)(?:doctor|eye care professional|surgeon|consult)",
        r"(?i)(?:simple|easy|convenient|comfortable)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("patient indicator pattern"))
    .collect()
});

static PROFESSIONAL_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:clinical|study|trial|evidence|data|analysis)",
        r"(?i)(?:efficacy|safety|performance|outcomes)",
        r"(?i)(?:FDA approved|510\(k\)|cleared|indications)",
        r"(?i)(?:ophthalmologist|surgeon|physician|healthcare provider)",
        r"(?i)(?:methodology|parameters|specifications|technical)",
        r"(?i)(?:comparison|versus|demonstrated)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("professional indicator pattern"))
    .collect()
});

static EMOTIONAL_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:amazing|wonderful|fantastic|incredible|revolutionary)",
        r"(?i)(?:love|best|perfect|greatest)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("emotional indicator pattern"))
    .collect()
});

/// Emotional-score ceiling tolerated in professional material.
const PROFESSIONAL_EMOTIONAL_LIMIT: usize = 3;

/// Professional-score floor above which patient material reads technical.
const PATIENT_TECHNICAL_LIMIT: usize = 5;

fn score(text: &str, indicators: &[Regex]) -> usize {
    indicators
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum()
}

/// Classify the audience and run tone and misleading-language checks.
///
/// Returns `(audience, confidence, issues)`. A document with no vocabulary
/// signal at all classifies as unknown with zero confidence; that is a
/// valid low-confidence output, not a failure.
pub fn analyze_audience(text: &str) -> (AudienceType, f64, Vec<Issue>) {
    let mut issues = Vec::new();

    let patient_score = score(text, &PATIENT_INDICATORS);
    let professional_score = score(text, &PROFESSIONAL_INDICATORS);
    let emotional_score = score(text, &EMOTIONAL_INDICATORS);
    let total = patient_score + professional_score + emotional_score;

    let (audience, confidence) = if total == 0 {
        (AudienceType::Unknown, 0.0)
    } else {
        let patient_ratio = patient_score as f64 / total as f64;
        let professional_ratio = professional_score as f64 / total as f64;

        if patient_ratio > 0.5 {
            (AudienceType::Patient, patient_ratio)
        } else if professional_ratio > 0.5 {
            (AudienceType::Professional, professional_ratio)
        } else {
            (AudienceType::Mixed, patient_ratio.max(professional_ratio))
        }
    };

    if audience == AudienceType::Professional && emotional_score > PROFESSIONAL_EMOTIONAL_LIMIT {
        issues.push(Issue::new(
            IssueKind::InappropriateTone,
            Severity::Warning,
            Location::DocumentWide,
            "Emotional language found in professional/clinical material",
            "Replace emotional language with objective, evidence-based terminology",
        ));
    }

    if audience == AudienceType::Patient
        && emotional_score == 0
        && professional_score > PATIENT_TECHNICAL_LIMIT
    {
        issues.push(Issue::new(
            IssueKind::OverlyTechnical,
            Severity::Warning,
            Location::DocumentWide,
            "This material appears aimed at patients but uses overly technical or medical terminology",
            "Simplify technical terminology for patient audience or clarify this is for professionals",
        ));
    }

    issues.extend(detect_misleading_language(text));

    (audience, confidence, issues)
}

// ---------------------------------------------------------------------------
// Misleading language (document-wide families)
// ---------------------------------------------------------------------------

static CURE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:miracle|cure|eliminate)").expect("cure words pattern"));

static GUARANTEED_OUTCOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:works?|results?).*(?:guaranteed|always|never fails)")
        .expect("guaranteed outcome pattern")
});

static UNIVERSAL_OUTCOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:all|everyone|100%).*(?:patients?|people)").expect("universal pattern")
});

/// "miracle/cure/eliminate" counts only without a -d or -ing suffix; the
/// conjugated past forms read as history, not promises.
fn has_bare_cure_word(text: &str) -> bool {
    CURE_WORDS.find_iter(text).any(|m| {
        let rest = &text[m.end()..];
        let rest_lower = rest
            .chars()
            .take(3)
            .collect::<String>()
            .to_lowercase();
        !rest_lower.starts_with('d') && !rest_lower.starts_with("ing")
    })
}

fn detect_misleading_language(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let families: [Box<dyn Fn(&str) -> bool>; 3] = [
        Box::new(has_bare_cure_word),
        Box::new(|t: &str| GUARANTEED_OUTCOME.is_match(t)),
        Box::new(|t: &str| UNIVERSAL_OUTCOME.is_match(t)),
    ];

    for matches in families.iter() {
        if !matches(text) {
            continue;
        }
        let snippet = text
            .lines()
            .find(|line| matches(line))
            .map(|line| truncate_chars(line.trim(), 200).to_string())
            .unwrap_or_default();

        issues.push(
            Issue::new(
                IssueKind::MisleadingLanguage,
                Severity::Critical,
                Location::DocumentWide,
                "Potentially misleading language detected",
                "Use more measured language with appropriate qualifiers and disclaimers",
            )
            .with_snippet(snippet),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_unknown_with_zero_confidence() {
        let (audience, confidence, issues) = analyze_audience("");
        assert_eq!(audience, AudienceType::Unknown);
        assert_eq!(confidence, 0.0);
        assert!(issues.is_empty());
    }

    #[test]
    fn patient_material_classifies_patient() {
        let text = "Talk to your doctor about whether you could enjoy freedom from glasses in your daily life.";
        let (audience, confidence, _) = analyze_audience(text);
        assert_eq!(audience, AudienceType::Patient);
        assert!(confidence > 0.5);
    }

    #[test]
    fn clinical_material_classifies_professional() {
        let text = "A randomized clinical trial demonstrated efficacy and safety outcomes; study data and analysis parameters follow.";
        let (audience, confidence, _) = analyze_audience(text);
        assert_eq!(audience, AudienceType::Professional);
        assert!(confidence > 0.5);
    }

    #[test]
    fn emotional_clinical_copy_is_inappropriate_tone() {
        let text = "Clinical trial data analysis demonstrated efficacy outcomes. The study evidence shows safety performance parameters. Amazing! Wonderful! Fantastic! Incredible!";
        let (audience, _, issues) = analyze_audience(text);
        assert_eq!(audience, AudienceType::Professional);
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::InappropriateTone));
    }

    #[test]
    fn technical_patient_copy_is_overly_technical() {
        let text = "You and your family will benefit. You will enjoy your results, and you can feel the comfort you want every day, simple and easy for everyone, anyone, people everywhere. Clinical study trial evidence data analysis.";
        let (audience, _, issues) = analyze_audience(text);
        assert_eq!(audience, AudienceType::Patient);
        assert!(issues.iter().any(|i| i.kind == IssueKind::OverlyTechnical));
    }

    #[test]
    fn bare_cure_word_is_misleading() {
        let (_, _, issues) = analyze_audience("A miracle for your eyes.");
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::MisleadingLanguage));
    }

    #[test]
    fn suffixed_cure_words_are_not_misleading() {
        let (_, _, issues) = analyze_audience("Symptoms were eliminated during the program.");
        assert!(issues.is_empty());

        let (_, _, issues) = analyze_audience("We are eliminating the old packaging.");
        assert!(issues.is_empty());
    }

    #[test]
    fn guaranteed_outcome_family_fires_once_with_first_line_snippet() {
        let text = "It works, guaranteed.\nResults are always guaranteed.";
        let (_, _, issues) = analyze_audience(text);
        let misleading: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::MisleadingLanguage)
            .collect();
        assert_eq!(misleading.len(), 1);
        assert_eq!(misleading[0].snippet, "It works, guaranteed.");
    }

    #[test]
    fn universal_outcome_family() {
        let (_, _, issues) = analyze_audience("Recommended for all our patients.");
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::MisleadingLanguage));
    }
}
