use serde::Serialize;

/// One normalized job listing. Built by the pipeline, immutable afterwards.
/// Title is always non-empty; link is absolute; country is a known MENA
/// country name or the regional fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub country: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
    #[serde(rename = "AI Engineer")]
    AiEngineer,
    #[serde(rename = "Computer Vision Engineer")]
    ComputerVisionEngineer,
    #[serde(rename = "NLP Engineer")]
    NlpEngineer,
    #[serde(rename = "Data Engineer")]
    DataEngineer,
    #[serde(rename = "Research Scientist")]
    ResearchScientist,
    #[serde(rename = "AI/ML Manager")]
    AiMlManager,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Other AI/ML Role")]
    OtherAiMlRole,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DataScientist => "Data Scientist",
            Category::MlEngineer => "ML Engineer",
            Category::AiEngineer => "AI Engineer",
            Category::ComputerVisionEngineer => "Computer Vision Engineer",
            Category::NlpEngineer => "NLP Engineer",
            Category::DataEngineer => "Data Engineer",
            Category::ResearchScientist => "Research Scientist",
            Category::AiMlManager => "AI/ML Manager",
            Category::DataAnalyst => "Data Analyst",
            Category::OtherAiMlRole => "Other AI/ML Role",
        }
    }
}

/// Assigns a category from the lower-cased title. Rules are evaluated in
/// order and the first match wins, so a "Data Scientist Manager" lands on
/// Data Scientist, not AI/ML Manager. Total over all inputs.
pub fn classify(title: &str) -> Category {
    let title = title.to_lowercase();

    if title.contains("data scientist") || title.contains("data science") {
        Category::DataScientist
    } else if title.contains("machine learning") || title.contains("ml engineer") {
        Category::MlEngineer
    } else if title.contains("ai engineer") || title.contains("artificial intelligence") {
        Category::AiEngineer
    } else if title.contains("computer vision") {
        Category::ComputerVisionEngineer
    } else if title.contains("nlp") || title.contains("natural language") {
        Category::NlpEngineer
    } else if title.contains("data engineer") {
        Category::DataEngineer
    } else if title.contains("research") && (title.contains("scientist") || title.contains("researcher")) {
        Category::ResearchScientist
    } else if title.contains("manager") || title.contains("lead") {
        Category::AiMlManager
    } else if title.contains("analyst") {
        Category::DataAnalyst
    } else {
        Category::OtherAiMlRole
    }
}
