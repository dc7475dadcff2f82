/// Label applied when no keyword rule matches.
pub const FALLBACK_CATEGORY: &str = "Community";

struct CategoryRule {
    category: &'static str,
    keywords: &'static [&'static str],
}

const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "Gaming",
        keywords: &[
            "game",
            "gaming",
            "play",
            "player",
            "esport",
            "stream",
            "twitch",
            "minecraft",
            "fortnite",
            "valorant",
            "league of legends",
        ],
    },
    CategoryRule {
        category: "Art",
        keywords: &[
            "art",
            "artist",
            "draw",
            "drawing",
            "paint",
            "painting",
            "creative",
            "design",
            "illustration",
            "digital art",
        ],
    },
    CategoryRule {
        category: "Music",
        keywords: &[
            "music", "musician", "song", "singing", "producer", "beat", "rap", "hip hop", "rock",
            "jazz", "playlist",
        ],
    },
    CategoryRule {
        category: "Technology",
        keywords: &[
            "tech",
            "technology",
            "programming",
            "code",
            "developer",
            "software",
            "hardware",
            "computer",
            "ai",
            "crypto",
        ],
    },
    CategoryRule {
        category: "Community",
        keywords: &[
            "community",
            "chat",
            "social",
            "hangout",
            "friends",
            "meet",
            "talk",
            "discussion",
        ],
    },
];

/// Maps a server's text fields to category labels by pure substring
/// presence over the lower-cased text, no stemming or scoring. Rules are
/// evaluated in a fixed order and each contributes at most one label, so
/// the result needs no deduplication. Total: falls back to `{Community}`
/// when no keyword matches, so a categorized server's category list is
/// never empty.
pub fn suggest_categories(name: &str, description: &str, full_description: &str) -> Vec<String> {
    let text = format!("{} {} {}", name, description, full_description).to_lowercase();

    let matched: Vec<String> = CATEGORY_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|rule| rule.category.to_string())
        .collect();

    if matched.is_empty() {
        vec![FALLBACK_CATEGORY.to_string()]
    } else {
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_falls_back_to_community() {
        assert_eq!(suggest_categories("hello", "world", ""), vec!["Community"]);
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(
            suggest_categories("best minecraft server", "", ""),
            vec!["Gaming"]
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            suggest_categories("MINECRAFT Legends", "", ""),
            vec!["Gaming"]
        );
    }

    #[test]
    fn test_multiple_rules_contribute() {
        let categories = suggest_categories(
            "Lo-fi Lounge",
            "music and beats while you code",
            "a social hangout for producers and developers",
        );
        assert!(categories.contains(&"Music".to_string()));
        assert!(categories.contains(&"Technology".to_string()));
        assert!(categories.contains(&"Community".to_string()));
    }

    #[test]
    fn test_all_text_fields_are_analyzed() {
        let from_full = suggest_categories("a", "b", "weekly drawing prompts");
        assert_eq!(from_full, vec!["Art"]);
    }

    #[test]
    fn test_result_is_never_empty() {
        for text in ["", "zzzz", "the quick brown fox", "日本語"] {
            assert!(!suggest_categories(text, text, text).is_empty());
        }
    }

    #[test]
    fn test_result_has_no_duplicates() {
        let categories = suggest_categories("art artist drawing", "drawing", "digital art");
        assert_eq!(categories, vec!["Art"]);
    }
}
