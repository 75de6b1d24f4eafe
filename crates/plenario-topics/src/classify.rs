//! Keyword scoring over a proposal summary.
//!
//! Matching is substring containment over diacritics-stripped lowercase text.
//! Each matched keyword contributes `len(keyword) * weight / 10` to its
//! category's score; the top three categories are returned.

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

use crate::categories::{category_by_id, TopicCategory, TOPIC_CATEGORIES};

/// A scored category match.
#[derive(Debug)]
pub struct TopicMatch {
    pub category: &'static TopicCategory,
    pub score: f64,
    pub matched_keywords: Vec<&'static str>,
}

/// Phrases that pin a summary to international relations regardless of what
/// else it mentions. Proposals creating parliamentary groups and diplomatic
/// missions would otherwise scatter across generic categories.
const PARLIAMENTARY_PHRASES: &[&str] = &[
    "grupo parlamentar",
    "assembleia parlamentar",
    "comissao parlamentar",
    "delegacao",
    "missao diplomatica",
];

const PARLIAMENTARY_SCORE: f64 = 15.0;

/// Normalized keyword lists, parallel to `TOPIC_CATEGORIES`.
static NORMALIZED_KEYWORDS: Lazy<Vec<Vec<String>>> = Lazy::new(|| {
    TOPIC_CATEGORIES
        .iter()
        .map(|cat| cat.keywords.iter().map(|kw| normalize(kw)).collect())
        .collect()
});

/// Lowercase and strip diacritics: NFD decomposition, then drop the
/// combining marks (U+0300..U+036F).
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !matches!(*c as u32, 0x0300..=0x036F))
        .collect()
}

/// Score a proposal summary against the category table.
///
/// Returns at most three matches, highest score first. Ties keep the
/// declaration order of the category table. Empty input yields no matches.
pub fn categorize(ementa: &str) -> Vec<TopicMatch> {
    if ementa.is_empty() {
        return Vec::new();
    }

    let text = normalize(ementa);

    // Parliamentary groups and diplomatic missions short-circuit to
    // international relations with a fixed high score.
    if PARLIAMENTARY_PHRASES.iter().any(|p| text.contains(p)) {
        return category_by_id("relacoes-internacionais")
            .map(|category| {
                vec![TopicMatch {
                    category,
                    score: PARLIAMENTARY_SCORE,
                    matched_keywords: vec!["grupo parlamentar", "relações internacionais"],
                }]
            })
            .unwrap_or_default();
    }

    let mut matches: Vec<TopicMatch> = Vec::new();

    for (category, normalized) in TOPIC_CATEGORIES.iter().zip(NORMALIZED_KEYWORDS.iter()) {
        let mut matched_keywords = Vec::new();
        let mut score = 0.0;

        for (keyword, norm) in category.keywords.iter().zip(normalized.iter()) {
            if !text.contains(norm.as_str()) {
                continue;
            }
            // Generic words that only signal a topic alongside a qualifier.
            if norm == "grupo" && !text.contains("parlamentar") {
                continue;
            }
            if norm == "associacao" && !text.contains("nacoes") {
                continue;
            }

            matched_keywords.push(*keyword);
            score += keyword.chars().count() as f64 * category.weight as f64 / 10.0;
        }

        if !matched_keywords.is_empty() {
            matches.push(TopicMatch {
                category,
                score,
                matched_keywords,
            });
        }
    }

    // Stable sort: equal scores keep category declaration order.
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(3);
    matches
}

/// The best-scoring category for a summary, if any.
pub fn primary_topic(ementa: &str) -> Option<&'static TopicCategory> {
    categorize(ementa).first().map(|m| m.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_matches() {
        assert!(categorize("").is_empty());
    }

    #[test]
    fn unmatched_text_yields_no_matches() {
        assert!(categorize("lorem ipsum dolor sit amet").is_empty());
    }

    #[test]
    fn parliamentary_group_short_circuits() {
        let matches = categorize("Institui o grupo parlamentar Brasil-Japão");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category.id, "relacoes-internacionais");
        assert_eq!(matches[0].score, 15.0);
    }

    #[test]
    fn diplomatic_mission_short_circuits() {
        let matches = categorize("Autoriza a missão diplomática junto à ONU");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category.id, "relacoes-internacionais");
    }

    #[test]
    fn accented_and_unaccented_variants_match_identically() {
        let accented = categorize("Amplia o acesso à saúde pública");
        let plain = categorize("Amplia o acesso a saude publica");
        assert_eq!(accented[0].category.id, "saude");
        assert_eq!(plain[0].category.id, "saude");
        assert_eq!(accented[0].score, plain[0].score);
    }

    #[test]
    fn multiple_categories_ordered_by_score() {
        let matches =
            categorize("Cria programa de medicamento e vacina nas escolas com professor dedicado");
        assert!(matches.len() >= 2);
        let ids: Vec<&str> = matches.iter().map(|m| m.category.id).collect();
        assert!(ids.contains(&"saude"));
        assert!(ids.contains(&"educacao"));
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn never_more_than_three_matches() {
        // Keywords from at least five categories.
        let text = "saúde educação imposto polícia floresta trabalho transporte tecnologia";
        let matches = categorize(text);
        assert!(matches.len() <= 3);
    }

    #[test]
    fn matched_keywords_are_present_in_input() {
        let text = "Reforma a previdência e o cálculo da aposentadoria e do salário";
        let normalized_text = normalize(text);
        for m in categorize(text) {
            for kw in &m.matched_keywords {
                assert!(
                    normalized_text.contains(&normalize(kw)),
                    "keyword {:?} not found in input",
                    kw
                );
            }
        }
    }

    #[test]
    fn score_accumulates_keyword_length_times_weight() {
        // "previdência" (11 chars) and "aposentadoria" (13 chars), weight 8.
        let matches = categorize("previdência e aposentadoria");
        assert_eq!(matches[0].category.id, "trabalho");
        let expected = (11.0 * 8.0 + 13.0 * 8.0) / 10.0;
        assert!((matches[0].score - expected).abs() < 1e-9);
    }

    #[test]
    fn generic_grupo_is_suppressed_without_qualifier() {
        // "grupo" alone must not trigger any category.
        assert!(categorize("Cria o grupo de trabalho interno").iter().all(|m| {
            !m.matched_keywords.contains(&"grupo parlamentar")
        }));
    }

    #[test]
    fn repeated_table_keyword_counts_once() {
        // "negro" (5 chars, weight 8) contributes a single 4.0, not twice.
        let matches = categorize("Política de valorização do negro");
        assert_eq!(matches[0].category.id, "direitos-sociais");
        assert_eq!(matches[0].matched_keywords, vec!["negro"]);
        assert!((matches[0].score - 4.0).abs() < 1e-9);
    }

    #[test]
    fn generic_associacao_is_suppressed_without_nacoes() {
        let matches = categorize("Dispõe sobre a associação de moradores do bairro");
        assert!(matches
            .iter()
            .all(|m| m.category.id != "relacoes-internacionais"));
    }

    #[test]
    fn normalize_strips_diacritics() {
        assert_eq!(normalize("Saúde Pública"), "saude publica");
        assert_eq!(normalize("missão diplomática"), "missao diplomatica");
    }

    #[test]
    fn primary_topic_returns_top_match() {
        assert_eq!(primary_topic("hospital e medicamento").map(|c| c.id), Some("saude"));
        assert!(primary_topic("").is_none());
    }
}
