//! Canned query templates
//!
//! The catalog is static configuration: each template pairs a set of intent
//! keywords with a ready-made SQL string. Matching is lexical; when several
//! templates hit, the one with the most keyword hits wins and catalog order
//! breaks ties.

/// One canned keyword-to-SQL template
#[derive(Debug, Clone, Copy)]
pub struct QueryTemplate {
    /// Short display title
    pub title: &'static str,
    /// Lowercase keywords matched against the user's text
    pub keywords: &'static [&'static str],
    /// The canned SQL answer
    pub sql: &'static str,
}

/// A catalog of canned templates with keyword lookup
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: &'static [QueryTemplate],
}

/// The built-in template table
const DEFAULT_TEMPLATES: &[QueryTemplate] = &[
    QueryTemplate {
        title: "List tables",
        keywords: &["tables", "schema", "structure"],
        sql: "SELECT table_name FROM information_schema.tables WHERE table_schema = 'public' ORDER BY table_name;",
    },
    QueryTemplate {
        title: "Show all rows",
        keywords: &["show all", "list all", "everything", "all rows"],
        sql: "SELECT * FROM {table} LIMIT 100;",
    },
    QueryTemplate {
        title: "Count rows",
        keywords: &["count", "how many", "number of"],
        sql: "SELECT COUNT(*) AS row_count FROM {table};",
    },
    QueryTemplate {
        title: "Recent rows",
        keywords: &["recent", "latest", "newest", "last"],
        sql: "SELECT * FROM {table} ORDER BY created_at DESC LIMIT 10;",
    },
    QueryTemplate {
        title: "Totals by group",
        keywords: &["total", "sum", "revenue", "per", "by category"],
        sql: "SELECT {group_column}, SUM({value_column}) AS total FROM {table} GROUP BY {group_column} ORDER BY total DESC;",
    },
    QueryTemplate {
        title: "Averages by group",
        keywords: &["average", "avg", "mean"],
        sql: "SELECT {group_column}, AVG({value_column}) AS average FROM {table} GROUP BY {group_column};",
    },
    QueryTemplate {
        title: "Top values",
        keywords: &["top", "highest", "largest", "best"],
        sql: "SELECT * FROM {table} ORDER BY {value_column} DESC LIMIT 10;",
    },
    QueryTemplate {
        title: "Find duplicates",
        keywords: &["duplicate", "duplicates", "repeated"],
        sql: "SELECT {column}, COUNT(*) AS occurrences FROM {table} GROUP BY {column} HAVING COUNT(*) > 1;",
    },
    QueryTemplate {
        title: "Missing values",
        keywords: &["missing", "null", "empty", "blank"],
        sql: "SELECT * FROM {table} WHERE {column} IS NULL;",
    },
];

impl TemplateCatalog {
    /// The built-in catalog
    pub fn default_catalog() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES,
        }
    }

    /// Iterate over every template in catalog order
    pub fn templates(&self) -> impl Iterator<Item = &QueryTemplate> {
        self.templates.iter()
    }

    /// Find the best template for a piece of user text
    ///
    /// Case-insensitive substring matching on the keywords; `None` when no
    /// keyword hits at all.
    pub fn find_match(&self, text: &str) -> Option<&QueryTemplate> {
        let text = text.to_lowercase();

        let mut best: Option<(&QueryTemplate, usize)> = None;
        for template in self.templates {
            let hits = template
                .keywords
                .iter()
                .filter(|keyword| text.contains(*keyword))
                .count();
            if hits == 0 {
                continue;
            }
            // Strictly-greater keeps catalog order as the tie-breaker
            if best.map(|(_, b)| hits > b).unwrap_or(true) {
                best = Some((template, hits));
            }
        }

        best.map(|(template, _)| template)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_keyword() {
        let catalog = TemplateCatalog::default_catalog();

        let m = catalog.find_match("how many orders came in?").unwrap();
        assert_eq!(m.title, "Count rows");
    }

    #[test]
    fn most_hits_wins() {
        let catalog = TemplateCatalog::default_catalog();

        // "total" and "revenue" and "per" all hit the grouping template;
        // "count" alone hits the count template.
        let m = catalog
            .find_match("count total revenue per region")
            .unwrap();
        assert_eq!(m.title, "Totals by group");
    }

    #[test]
    fn catalog_order_breaks_ties() {
        let catalog = TemplateCatalog::default_catalog();

        // One hit each on "tables" and "count"; the earlier template wins.
        let m = catalog.find_match("count the tables").unwrap();
        assert_eq!(m.title, "List tables");
    }

    #[test]
    fn no_hits_is_none() {
        let catalog = TemplateCatalog::default_catalog();
        assert!(catalog.find_match("hello there").is_none());
        assert!(catalog.find_match("").is_none());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = TemplateCatalog::default_catalog();
        let m = catalog.find_match("Show ALL the data please").unwrap();
        assert_eq!(m.title, "Show all rows");
    }
}
