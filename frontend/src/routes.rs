use std::collections::{BTreeMap, HashMap};

/// Course card headings and the page each one opens.
/// Several headings may share a page.
const COURSE_PAGES: &[(&str, &str)] = &[
    ("python for ai", "course-python-for-ai.html"),
    ("python for ai & data science", "course-python-for-ai.html"),
    ("statistics & math for ml", "course-statistics-math-ml.html"),
    ("machine learning mastery", "course-machine-learning.html"),
    ("deep learning & computer vision", "course-deep-learning-cv.html"),
    ("nlp & text mining", "course-nlp-text-mining.html"),
    ("generative ai & llms", "course-generative-ai-llms.html"),
    ("mlops & deployment", "course-mlops-ai-engineering.html"),
    ("mlops & ai engineering", "course-mlops-ai-engineering.html"),
    ("computer vision", "course-computer-vision.html"),
    // No capstone page yet, it shares the computer vision page.
    ("ai capstone project", "course-computer-vision.html"),
];

pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Immutable heading -> page lookup, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRoutes {
    pages: HashMap<String, String>,
}

impl CourseRoutes {
    pub fn builtin() -> Self {
        Self::from_pairs(COURSE_PAGES.iter().map(|(title, page)| (*title, *page)))
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pages = pairs
            .into_iter()
            .map(|(title, page)| (normalize_title(title), page.trim().to_string()))
            .collect();
        CourseRoutes { pages }
    }

    /// Layers page-supplied routes over this table. Later entries win when
    /// two titles normalize to the same key.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (title, page) in overrides {
            let page = page.trim();
            if page.is_empty() {
                log::warn!("Ignoring course route '{}' with an empty page", title);
                continue;
            }
            self.pages.insert(normalize_title(title), page.to_string());
        }
        self
    }

    /// Exact match after trimming and lower-casing. No fuzzy matching.
    pub fn lookup(&self, heading: &str) -> Option<&str> {
        self.pages.get(&normalize_title(heading)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}
