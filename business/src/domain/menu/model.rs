use std::path::PathBuf;

use super::errors::OcrError;

/// A priced dish recognized on a menu line.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

/// A menu section opened by a heading line. Kept even when no item follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }
}

/// Structured menu built from scanned text. Categories keep the order their headings appeared in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    pub categories: Vec<Category>,
}

impl Menu {
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Outcome of OCR on one input file.
#[derive(Debug)]
pub struct PageOutcome {
    /// Position of the file in the caller's list.
    pub index: usize,
    pub path: PathBuf,
    pub result: Result<String, OcrError>,
}

/// A page that could not be recognized, tied to its path.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFailure {
    pub path: PathBuf,
    pub reason: OcrError,
}

impl std::fmt::Display for PageFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Aggregated text of every page that succeeded, plus one failure per page that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageScan {
    pub text: String,
    pub failures: Vec<PageFailure>,
}

/// Result handed back to the caller of a menu scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuScanResult {
    pub menu: Menu,
    /// One human-readable "path: reason" entry per page that failed OCR.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_page_failure_as_path_and_reason() {
        let failure = PageFailure {
            path: PathBuf::from("/tmp/page-2.png"),
            reason: OcrError::Recognition("empty page".to_string()),
        };

        assert_eq!(
            failure.to_string(),
            "/tmp/page-2.png: ocr.recognition_failed: empty page"
        );
    }

    #[test]
    fn should_count_items_across_categories() {
        let menu = Menu {
            categories: vec![
                Category {
                    name: "DRINKS".to_string(),
                    items: vec![
                        MenuItem {
                            name: "Cola".to_string(),
                            price: 2.5,
                        },
                        MenuItem {
                            name: "Juice".to_string(),
                            price: 3.0,
                        },
                    ],
                },
                Category::new("DESSERTS"),
            ],
        };

        assert_eq!(menu.item_count(), 2);
    }
}
