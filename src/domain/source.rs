/// The five CSS selectors that locate one source's listing fields.
pub struct SelectorSet {
    pub card: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub link: &'static str,
}

pub struct SourceConfig {
    pub name: &'static str,
    pub base_url: &'static str,
    pub search_urls: &'static [&'static str],
    pub selectors: SelectorSet,
}

impl SourceConfig {
    /// Display form of the source name, first letter of each word capitalized.
    pub fn display_name(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Static registry of the job boards being scraped. Changing endpoints or
/// selectors means redeploying this table.
pub fn source_registry() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            name: "wuzzuf",
            base_url: "https://wuzzuf.net",
            search_urls: &[
                "https://wuzzuf.net/search/jobs/?q=artificial+intelligence",
                "https://wuzzuf.net/search/jobs/?q=machine+learning",
                "https://wuzzuf.net/search/jobs/?q=data+scientist",
            ],
            selectors: SelectorSet {
                card: "div.css-1gatmva",
                title: "h2.css-m604qf",
                company: "div.css-d7j1kk",
                location: "span.css-5wys0k",
                link: "a.css-o171kl",
            },
        },
        SourceConfig {
            name: "naukrigulf",
            base_url: "https://www.naukrigulf.com",
            search_urls: &[
                "https://www.naukrigulf.com/artificial-intelligence-jobs",
                "https://www.naukrigulf.com/machine-learning-jobs",
            ],
            selectors: SelectorSet {
                card: "div.row",
                title: "a.title",
                company: "div.orgName",
                location: "span.loc",
                link: "a.title",
            },
        },
        SourceConfig {
            name: "gulftalent",
            base_url: "https://www.gulftalent.com",
            search_urls: &[
                "https://www.gulftalent.com/jobs/artificial-intelligence",
                "https://www.gulftalent.com/jobs/machine-learning",
            ],
            selectors: SelectorSet {
                card: "div.job-item",
                title: "a.job-title",
                company: "div.company",
                location: "div.location",
                link: "a.job-title",
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::source_registry;

    #[test]
    fn display_name_capitalizes_each_word() {
        let registry = source_registry();
        let wuzzuf = registry.iter().find(|s| s.name == "wuzzuf").unwrap();

        assert_eq!(wuzzuf.display_name(), "Wuzzuf");
    }

    #[test]
    fn registry_entries_are_complete() {
        let registry = source_registry();

        assert_eq!(registry.len(), 3);
        for source in registry {
            assert!(!source.search_urls.is_empty());
            assert!(Url::parse(source.base_url).is_ok());
            assert!(!source.selectors.card.is_empty());
            assert!(!source.selectors.title.is_empty());
        }
    }
}
