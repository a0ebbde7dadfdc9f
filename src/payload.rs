// Input contract for the host view.
//
// The payload arrives by value as plain JSON from the surrounding page.
// Author and keyword entries come in two shapes (bare string or wrapped
// object), matching what the upstream API actually returns. Absent lists mean
// the ring is omitted entirely, not rendered empty.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
    #[serde(default)]
    pub keywords: Vec<KeywordRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Name(String),
    Object { name: String },
}

impl AuthorRef {
    pub fn name(&self) -> &str {
        match self {
            AuthorRef::Name(name) => name,
            AuthorRef::Object { name } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeywordRef {
    Term(String),
    Object { term: String },
}

impl KeywordRef {
    pub fn term(&self) -> &str {
        match self {
            KeywordRef::Term(term) => term,
            KeywordRef::Object { term } => term,
        }
    }
}

/// Normalized artifact: plain strings, ready for layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artifact {
    pub title: String,
    pub category: Option<String>,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
}

pub fn normalize(payload: &ArtifactPayload) -> Artifact {
    Artifact {
        title: payload.title.clone(),
        category: payload.category.clone(),
        authors: payload.authors.iter().map(|a| a.name().to_string()).collect(),
        keywords: payload.keywords.iter().map(|k| k.term().to_string()).collect(),
    }
}

/// Title substituted by the boundary when the payload carries none.
pub const DEFAULT_TITLE: &str = "Research Paper";

/// Host-side fallback: substitute a blank title and drop blank entries so the
/// strict layout core cannot fail on real-world payloads.
pub fn sanitize(mut artifact: Artifact) -> Artifact {
    if artifact.title.trim().is_empty() {
        artifact.title = DEFAULT_TITLE.to_string();
    }
    if let Some(category) = &artifact.category {
        if category.trim().is_empty() {
            artifact.category = None;
        }
    }
    artifact.authors.retain(|a| !a.trim().is_empty());
    artifact.keywords.retain(|k| !k.trim().is_empty());
    artifact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_and_keyword_forms() {
        let payload: ArtifactPayload = serde_json::from_str(
            r#"{
                "title": "Microgravity and Bone Loss in Mice",
                "category": "Animal Studies",
                "authors": ["Jane Doe", {"name": "Kim Lee"}],
                "keywords": [{"term": "bone"}, "gravity"]
            }"#,
        )
        .unwrap();

        let artifact = normalize(&payload);
        assert_eq!(artifact.authors, vec!["Jane Doe", "Kim Lee"]);
        assert_eq!(artifact.keywords, vec!["bone", "gravity"]);
    }

    #[test]
    fn test_absent_lists_default_empty() {
        let payload: ArtifactPayload =
            serde_json::from_str(r#"{"title": "Solo"}"#).unwrap();
        let artifact = normalize(&payload);
        assert!(artifact.authors.is_empty());
        assert!(artifact.keywords.is_empty());
        assert_eq!(artifact.category, None);
    }

    #[test]
    fn test_sanitize_substitutes_blank_title() {
        let artifact = sanitize(Artifact {
            title: "  ".to_string(),
            ..Artifact::default()
        });
        assert_eq!(artifact.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_sanitize_drops_blank_entries() {
        let artifact = sanitize(Artifact {
            title: "T".to_string(),
            category: Some(" ".to_string()),
            authors: vec!["Jane Doe".to_string(), "".to_string()],
            keywords: vec!["  ".to_string(), "bone".to_string()],
        });
        assert_eq!(artifact.category, None);
        assert_eq!(artifact.authors, vec!["Jane Doe"]);
        assert_eq!(artifact.keywords, vec!["bone"]);
    }
}
