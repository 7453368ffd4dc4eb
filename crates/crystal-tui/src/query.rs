//! Query field state and per-module input validation.

use regex::{Regex, RegexBuilder};

use crate::module::OsintModule;

/// Placeholder shown while no module is selected.
pub const NO_MODULE_PLACEHOLDER: &str = "Select an OSINT module first";

/// Outcome of validating a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// No module selected; nothing to validate against
    NoModule,
    /// Query does not match the module's expected format
    Invalid { message: &'static str },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Message to show under the field, if any.
    pub fn message(&self) -> Option<&'static str> {
        match *self {
            Validation::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

/// Compiled format patterns for the modules that constrain their input.
#[derive(Debug, Clone)]
pub struct QueryValidator {
    email: Regex,
    domain_or_ip: Regex,
    malware_hash: Regex,
    image_url: Regex,
}

impl Default for QueryValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryValidator {
    pub fn new() -> Self {
        let email = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex");
        let domain_or_ip =
            Regex::new(r"^(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}|^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$")
                .expect("Invalid domain regex");
        let malware_hash = Regex::new(r"^[A-Fa-f0-9]{16,64}$").expect("Invalid hash regex");
        let image_url = RegexBuilder::new(r"^(https?://.*\.(?:png|jpg|jpeg|gif|bmp|webp))$")
            .case_insensitive(true)
            .build()
            .expect("Invalid image URL regex");

        Self {
            email,
            domain_or_ip,
            malware_hash,
            image_url,
        }
    }

    /// Validate `value` against the format expected by `module`.
    pub fn validate(&self, module: Option<OsintModule>, value: &str) -> Validation {
        let Some(module) = module else {
            return Validation::NoModule;
        };

        let (pattern, message) = match module {
            OsintModule::LeakMonitor => (&self.email, "Please enter a valid email address."),
            OsintModule::DomainScanner => (
                &self.domain_or_ip,
                "Please enter a valid domain or IP address.",
            ),
            OsintModule::MalwareTracker => {
                (&self.malware_hash, "Please enter a valid malware hash or ID.")
            }
            OsintModule::ImageIntelligence => (&self.image_url, "Please enter a valid image URL."),
            OsintModule::ThreatIntelligence | OsintModule::DataEnrichment => {
                return Validation::Valid;
            }
        };

        if pattern.is_match(value) {
            Validation::Valid
        } else {
            Validation::Invalid { message }
        }
    }
}

/// Text and validation state of the query field.
#[derive(Debug, Clone)]
pub struct QueryField {
    text: String,
    validation: Validation,
}

impl Default for QueryField {
    fn default() -> Self {
        Self {
            text: String::new(),
            validation: Validation::Valid,
        }
    }
}

impl QueryField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Clear the text and forget any previous validation error.
    pub fn reset(&mut self) {
        self.text.clear();
        self.validation = Validation::Valid;
    }

    pub fn push_char(&mut self, c: char, module: Option<OsintModule>, validator: &QueryValidator) {
        self.text.push(c);
        self.validation = validator.validate(module, &self.text);
    }

    pub fn pop_char(&mut self, module: Option<OsintModule>, validator: &QueryValidator) {
        self.text.pop();
        self.validation = validator.validate(module, &self.text);
    }

    /// Whether the query may be submitted: valid and not blank.
    pub fn is_submittable(&self) -> bool {
        self.validation.is_valid() && !self.text.trim().is_empty()
    }
}

/// Placeholder for the query field given the selected module.
pub fn placeholder(module: Option<OsintModule>) -> &'static str {
    module.map_or(NO_MODULE_PLACEHOLDER, |m| m.placeholder())
}
