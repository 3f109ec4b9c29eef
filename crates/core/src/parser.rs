//! Marker grammar for oracle answers.
//!
//! The oracle is instructed to structure its answer with bracketed section
//! markers such as `[RECOMMENDATIONS]`. A section's content runs from just
//! after its marker to the next `[` (or end of text), trimmed. The grammar has
//! no nesting: a literal `[` inside section prose ends that section early.
//!
//! A missing marker yields an empty section. Only text with no markers at all
//! is reported as [`ParseError::Unstructured`], which callers answer with
//! [`ParsedSuggestion::fallback`].

use std::sync::LazyLock;

use regex::Regex;

use crate::suggestion::{ParsedSuggestion, DEFAULT_SUITABILITY_SCORE};

/// Maximum number of marketplace keywords kept from an answer.
pub const MAX_KEYWORDS: usize = 7;

/// First `10` or single digit 1-9 in a score section.
static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(10|[1-9])").expect("valid regex"));

/// Lines in the keyword section containing any of these are instructions or
/// chatter echoed by the oracle, not keywords. Compared lowercase.
const KEYWORD_DENYLIST: &[&str] = &[
    "generate",
    "search for",
    "congratulations",
    "successfully",
    "question",
    "don't",
    "tạo ra",
    "tìm kiếm",
    "chúc",
    "thành công",
    "câu hỏi",
    "đừng",
];

/// CJK Unified Ideographs block.
const CJK_IDEOGRAPHS: std::ops::RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// The nine section markers of the oracle output contract, in contract order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    CharacterDescription,
    DifficultyLevel,
    SuitabilityScore,
    BudgetAnalysis,
    Recommendations,
    ItemsList,
    Tips,
    Alternatives,
    TaobaoKeywords,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::CharacterDescription,
        Section::DifficultyLevel,
        Section::SuitabilityScore,
        Section::BudgetAnalysis,
        Section::Recommendations,
        Section::ItemsList,
        Section::Tips,
        Section::Alternatives,
        Section::TaobaoKeywords,
    ];

    /// Marker name without brackets.
    pub fn name(self) -> &'static str {
        match self {
            Section::CharacterDescription => "CHARACTER_DESCRIPTION",
            Section::DifficultyLevel => "DIFFICULTY_LEVEL",
            Section::SuitabilityScore => "SUITABILITY_SCORE",
            Section::BudgetAnalysis => "BUDGET_ANALYSIS",
            Section::Recommendations => "RECOMMENDATIONS",
            Section::ItemsList => "ITEMS_LIST",
            Section::Tips => "TIPS",
            Section::Alternatives => "ALTERNATIVES",
            Section::TaobaoKeywords => "TAOBAO_KEYWORDS",
        }
    }

    /// Marker as it appears in the text, e.g. `[TIPS]`.
    pub fn tag(self) -> String {
        format!("[{}]", self.name())
    }
}

/// Errors from [`parse_suggestion`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Answer contains none of the section markers")]
    Unstructured,
}

/// Extract the content of `section` from `text`.
///
/// Returns an empty string when the marker is absent.
pub fn extract_section(text: &str, section: Section) -> &str {
    let tag = section.tag();
    let Some(start) = text.find(&tag) else {
        return "";
    };
    let body = &text[start + tag.len()..];
    let end = body.find('[').unwrap_or(body.len());
    body[..end].trim()
}

/// Extract the suitability score as `"1"`..`"10"`, defaulting to `"7"`.
pub fn extract_score(text: &str) -> String {
    let raw = extract_section(text, Section::SuitabilityScore);
    SCORE_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_SUITABILITY_SCORE.to_string())
}

/// Extract up to [`MAX_KEYWORDS`] marketplace keywords, in answer order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    extract_section(text, Section::TaobaoKeywords)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_denylisted(line))
        .map(|line| line.strip_prefix("- ").map(str::trim).unwrap_or(line))
        .filter(|line| looks_like_keyword(line))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Parse a full oracle answer into its sections and keywords.
///
/// Pure: the same text always yields the same result.
pub fn parse_suggestion(text: &str) -> Result<ParsedSuggestion, ParseError> {
    if !Section::ALL.iter().any(|s| text.contains(&s.tag())) {
        return Err(ParseError::Unstructured);
    }

    Ok(ParsedSuggestion {
        character_description: extract_section(text, Section::CharacterDescription).to_string(),
        difficulty_level: extract_section(text, Section::DifficultyLevel).to_string(),
        suitability_score: extract_score(text),
        budget_analysis: extract_section(text, Section::BudgetAnalysis).to_string(),
        recommendations: extract_section(text, Section::Recommendations).to_string(),
        items_list: extract_section(text, Section::ItemsList).to_string(),
        tips: extract_section(text, Section::Tips).to_string(),
        alternatives: extract_section(text, Section::Alternatives).to_string(),
        keywords: extract_keywords(text),
    })
}

fn is_denylisted(line: &str) -> bool {
    let lower = line.to_lowercase();
    KEYWORD_DENYLIST.iter().any(|phrase| lower.contains(phrase))
}

fn looks_like_keyword(line: &str) -> bool {
    // "cos" also covers "cosplay".
    line.chars().any(|c| CJK_IDEOGRAPHS.contains(&c)) || line.to_lowercase().contains("cos")
}
