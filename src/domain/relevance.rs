const AI_ML_KEYWORDS: [&str; 10] = [
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
    "data scientist",
    "deep learning",
    "neural network",
    "nlp",
    "computer vision",
    "data engineer",
];

/// Case-insensitive substring test against the AI/ML keyword set. Short
/// keywords like "ai" and "ml" match inside unrelated words; that looseness
/// is inherited behavior and kept as-is.
pub fn is_relevant(title: &str) -> bool {
    let title = title.to_lowercase();
    AI_ML_KEYWORDS.iter().any(|keyword| title.contains(keyword))
}
