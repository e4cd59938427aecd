/// Page categories with a dedicated component registry. Schedule names
/// outside this set sample the generic fallback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    Main,
    JobList,
    Company,
    JobDetail,
    /// Any other page name
    Generic,
}

impl PageCategory {
    /// Classify a schedule page name
    pub fn from_name(name: &str) -> Self {
        match name {
            "main" => PageCategory::Main,
            "job_list" => PageCategory::JobList,
            "company" => PageCategory::Company,
            "job_detail" => PageCategory::JobDetail,
            _ => {
                ::log::debug!("No dedicated registry for page {}, using fallback", name);
                PageCategory::Generic
            }
        }
    }
}

/// Component name → selector table for a page category.
///
/// Selectors may be comma-separated alternation lists; resolution is left
/// to the browser's own selector engine. The tables are static
/// configuration expressing which semantic components are expected to be
/// analyzable on which page type.
pub fn selectors_for(category: PageCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        PageCategory::Main => MAIN_COMPONENTS,
        PageCategory::JobList => JOB_LIST_COMPONENTS,
        PageCategory::Company => COMPANY_COMPONENTS,
        PageCategory::JobDetail => JOB_DETAIL_COMPONENTS,
        PageCategory::Generic => GENERIC_COMPONENTS,
    }
}

const MAIN_COMPONENTS: &[(&str, &str)] = &[
    ("header", "header, .header, #header"),
    ("navigation", "nav, .nav, .navigation, .gnb"),
    (
        "search_box",
        ".search, .search-box, .search-form, input[type=\"search\"]",
    ),
    ("main_banner", ".banner, .main-banner, .visual"),
    ("job_card", ".job-card, .recruit-item, .list-item, .job-item"),
    ("button_primary", ".btn, .button, .btn-primary, button"),
    ("footer", "footer, .footer, #footer"),
];

const JOB_LIST_COMPONENTS: &[(&str, &str)] = &[
    ("filter_sidebar", ".filter, .sidebar, .search-filter"),
    ("job_listing", ".list-item, .job-item, .recruit-info"),
    ("pagination", ".pagination, .paging, .page-nav"),
    ("sort_options", ".sort, .order, .sorting"),
];

const COMPANY_COMPONENTS: &[(&str, &str)] = &[
    ("company_card", ".company-item, .corp-item, .company-info"),
    ("company_logo", ".logo, .company-logo, .corp-logo"),
    ("info_section", ".info, .company-detail, .corp-detail"),
];

const JOB_DETAIL_COMPONENTS: &[(&str, &str)] = &[
    ("job_header", ".detail-header, .job-header, .recruit-header"),
    ("job_content", ".content, .detail-content, .job-detail"),
    ("apply_button", ".apply, .btn-apply, .apply-btn"),
    ("company_info", ".company-info, .corp-info"),
];

const GENERIC_COMPONENTS: &[(&str, &str)] = &[
    ("general_card", ".card, .box, .panel"),
    ("form_input", "input, textarea, select"),
    ("table", "table, .table"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name() {
        assert_eq!(PageCategory::from_name("main"), PageCategory::Main);
        assert_eq!(PageCategory::from_name("job_list"), PageCategory::JobList);
        assert_eq!(PageCategory::from_name("company"), PageCategory::Company);
        assert_eq!(PageCategory::from_name("job_detail"), PageCategory::JobDetail);
        assert_eq!(PageCategory::from_name("talent"), PageCategory::Generic);
        assert_eq!(PageCategory::from_name(""), PageCategory::Generic);
    }

    #[test]
    fn test_fallback_table() {
        let components = selectors_for(PageCategory::Generic);
        let names: Vec<&str> = components.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["general_card", "form_input", "table"]);
    }

    #[test]
    fn test_main_table_has_expected_components() {
        let components = selectors_for(PageCategory::Main);
        assert_eq!(components.len(), 7);
        assert!(components.iter().any(|(name, _)| *name == "header"));
        assert!(components.iter().any(|(name, _)| *name == "footer"));
    }
}
