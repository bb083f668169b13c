use crate::types::Post;

/// Returns every keyword whose lowercase form occurs as a substring of the
/// post's title or body, preserving keyword-list order.
///
/// Matching is deliberately substring-based rather than word-bounded so that
/// phrases embedded in longer terms still hit ("appointment anxiety" matches
/// "appointment anxiety disorder").
pub fn match_keywords(post: &Post, keywords: &[String]) -> Vec<String> {
    let haystack = format!("{} {}", post.title, post.body).to_lowercase();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}
