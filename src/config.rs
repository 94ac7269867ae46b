//! Runtime Configuration
//!
//! Defaults for the API location, timings and the printed form's fixed text.
//! `index.html` can override a few values with `<meta name="requisition:KEY">`.

use log::LevelFilter;
use wasm_bindgen::JsCast;

/// Fixed text of the paper requisition form
#[derive(Debug, Clone, PartialEq)]
pub struct Letterhead {
    pub institution: String,
    pub sub_titles: Vec<String>,
    pub accreditations: Vec<String>,
    pub form_number: String,
    pub form_revision: String,
    pub form_title: String,
    pub division: String,
    pub office: String,
    pub requested_by: String,
    pub approved_by: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            institution: "PHILIPPINE GENERAL HOSPITAL".to_string(),
            sub_titles: vec![
                "The National University Hospital".to_string(),
                "University of the Philippines Manila".to_string(),
                "Taft Avenue, Manila".to_string(),
            ],
            accreditations: vec![
                "PHIC Accredited Health Care Provider".to_string(),
                "ISO 9001 Certified".to_string(),
            ],
            form_number: "PGH FORM NO. Q-310050".to_string(),
            form_revision: "REV. 00; Eff. 26 September 2019".to_string(),
            form_title: "DRUGS/MEDICINES AND MEDICAL SUPPLIES REQUISITION AND ISSUE FORM".to_string(),
            division: "CATHLAB".to_string(),
            office: "CATHLAB".to_string(),
            requested_by: "LEGASPI, VENUS JOY JOSE".to_string(),
            approved_by: "ERIC OLIVER SISON, MD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub logo_path: String,
    pub search_debounce_ms: u32,
    pub min_query_len: usize,
    pub print_delay_ms: u32,
    pub rows_per_page: usize,
    pub log_level: LevelFilter,
    pub letterhead: Letterhead,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            logo_path: "/static/UP_PGH_logo.png".to_string(),
            search_debounce_ms: 500,
            min_query_len: 3,
            print_delay_ms: 500,
            rows_per_page: 25,
            log_level: LevelFilter::Info,
            letterhead: Letterhead::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `<meta name="requisition:...">` tags
    pub fn from_document() -> Self {
        Self::default().with_overrides(read_meta)
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup("api-base") {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(path) = lookup("logo-path") {
            self.logo_path = path;
        }
        if let Some(level) = lookup("log-level").and_then(|l| l.parse().ok()) {
            self.log_level = level;
        }
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn read_meta(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"requisition:{key}\"]");
    let meta = document
        .query_selector(&selector)
        .ok()??
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.rows_per_page, 25);
        assert_eq!(config.url("/requests"), "/requests");
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(|key| match key {
            "api-base" => Some("http://127.0.0.1:8000/".to_string()),
            "log-level" => Some("debug".to_string()),
            _ => None,
        });

        assert_eq!(config.url("/requests"), "http://127.0.0.1:8000/requests");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.logo_path, "/static/UP_PGH_logo.png");
    }

    #[test]
    fn test_bad_log_level_is_ignored() {
        let config = Config::default().with_overrides(|key| (key == "log-level").then(|| "loud".to_string()));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
