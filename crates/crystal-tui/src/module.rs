//! OSINT module catalog and the searchable picker.

use std::fmt;

/// One of the OSINT modules offered by the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsintModule {
    ThreatIntelligence,
    DomainScanner,
    DataEnrichment,
    MalwareTracker,
    ImageIntelligence,
    LeakMonitor,
}

impl OsintModule {
    /// Catalog in display order.
    pub const ALL: [OsintModule; 6] = [
        OsintModule::ThreatIntelligence,
        OsintModule::DomainScanner,
        OsintModule::DataEnrichment,
        OsintModule::MalwareTracker,
        OsintModule::ImageIntelligence,
        OsintModule::LeakMonitor,
    ];

    /// Stable catalog id, starting at 1.
    pub fn id(&self) -> u8 {
        match self {
            OsintModule::ThreatIntelligence => 1,
            OsintModule::DomainScanner => 2,
            OsintModule::DataEnrichment => 3,
            OsintModule::MalwareTracker => 4,
            OsintModule::ImageIntelligence => 5,
            OsintModule::LeakMonitor => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OsintModule::ThreatIntelligence => "Threat Intelligence",
            OsintModule::DomainScanner => "Domain Scanner",
            OsintModule::DataEnrichment => "Data Enrichment",
            OsintModule::MalwareTracker => "Malware Tracker",
            OsintModule::ImageIntelligence => "Image Intelligence",
            OsintModule::LeakMonitor => "Leak Monitor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OsintModule::ThreatIntelligence => {
                "Analyze and correlate OSINT sources to spot threats."
            }
            OsintModule::DomainScanner => "Scan domains, IPs and subdomains with crystal precision.",
            OsintModule::DataEnrichment => {
                "Enrich results with metadata and advanced correlations."
            }
            OsintModule::MalwareTracker => "Track indicators of compromise from OSINT feeds.",
            OsintModule::ImageIntelligence => "Analyze metadata and reverse search images.",
            OsintModule::LeakMonitor => "Monitor public and dark web data leaks.",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            OsintModule::ThreatIntelligence => '⛨',
            OsintModule::DomainScanner => '◍',
            OsintModule::DataEnrichment => '▤',
            OsintModule::MalwareTracker => '☣',
            OsintModule::ImageIntelligence => '◉',
            OsintModule::LeakMonitor => '⚿',
        }
    }

    /// Hint shown in the empty query field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            OsintModule::ThreatIntelligence => "Enter a threat indicator...",
            OsintModule::DomainScanner => "Enter a domain or IP...",
            OsintModule::DataEnrichment => "Enter an identifier or hash...",
            OsintModule::MalwareTracker => "Enter a malware ID...",
            OsintModule::ImageIntelligence => "Enter an image URL or file hash...",
            OsintModule::LeakMonitor => "Enter a keyword or email to monitor...",
        }
    }

    /// Case-insensitive substring match on title or description.
    pub fn matches(&self, filter: &str) -> bool {
        find_ignore_case(self.title(), filter).is_some()
            || find_ignore_case(self.description(), filter).is_some()
    }
}

impl fmt::Display for OsintModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Modules matching `filter`, in catalog order. An empty filter matches all.
pub fn filter_modules(filter: &str) -> Vec<OsintModule> {
    OsintModule::ALL
        .into_iter()
        .filter(|module| module.matches(filter))
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`. An empty needle matches at the start.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }
    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        for wanted in needle.chars() {
            let (_, got) = rest.next()?;
            if !got.to_lowercase().eq(wanted.to_lowercase()) {
                return None;
            }
        }
        let end = rest
            .next()
            .map(|(offset, _)| start + offset)
            .unwrap_or(haystack.len());
        Some((start, end))
    })
}

/// Split `text` into `(segment, is_match)` pieces, marking every
/// non-overlapping case-insensitive occurrence of `filter`.
pub fn highlight_segments<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    if filter.is_empty() {
        return vec![(text, false)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    while let Some((start, end)) = find_ignore_case(&text[cursor..], filter) {
        let (start, end) = (cursor + start, cursor + end);
        if start > cursor {
            segments.push((&text[cursor..start], false));
        }
        segments.push((&text[start..end], true));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push((&text[cursor..], false));
    }
    segments
}

/// State of the module picker dropdown.
#[derive(Debug, Default, Clone)]
pub struct ModulePicker {
    open: bool,
    filter: String,
    cursor: usize,
    selected: Option<OsintModule>,
}

impl ModulePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.cursor = 0;
    }

    /// Close without selecting. The filter text is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected(&self) -> Option<OsintModule> {
        self.selected
    }

    /// Index of the highlighted entry in [`matches`](Self::matches).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entries matching the current filter.
    pub fn matches(&self) -> Vec<OsintModule> {
        filter_modules(&self.filter)
    }

    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.cursor = 0;
    }

    pub fn pop_char(&mut self) {
        self.filter.pop();
        self.cursor = 0;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.matches().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Select the highlighted entry, close the dropdown and clear the filter.
    ///
    /// Returns `None` (and stays open) when nothing matches.
    pub fn confirm(&mut self) -> Option<OsintModule> {
        let module = self.matches().get(self.cursor).copied()?;
        self.select(module);
        Some(module)
    }

    pub fn select(&mut self, module: OsintModule) {
        self.selected = Some(module);
        self.open = false;
        self.filter.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_modules_with_unique_ids() {
        let mut ids: Vec<_> = OsintModule::ALL.iter().map(OsintModule::id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(OsintModule::LeakMonitor.to_string(), "Leak Monitor");
    }

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        assert_eq!(filter_modules("DOMAIN"), vec![OsintModule::DomainScanner]);
        assert_eq!(filter_modules("leak"), vec![OsintModule::LeakMonitor]);
        assert_eq!(filter_modules("").len(), 6);
    }

    #[test]
    fn test_filter_matches_description() {
        // "metadata" only appears in descriptions
        assert_eq!(
            filter_modules("metadata"),
            vec![OsintModule::DataEnrichment, OsintModule::ImageIntelligence]
        );
        assert!(filter_modules("zzz").is_empty());
    }

    #[test]
    fn test_highlight_segments() {
        assert_eq!(
            highlight_segments("Domain Scanner", "an"),
            vec![("Domain Sc", false), ("an", true), ("ner", false)]
        );
        assert_eq!(
            highlight_segments("Leak Monitor", "LEAK"),
            vec![("Leak", true), (" Monitor", false)]
        );
        assert_eq!(highlight_segments("abc", ""), vec![("abc", false)]);
    }

    #[test]
    fn test_highlight_marks_every_occurrence() {
        let segments = highlight_segments("Data Enrichment", "a");
        let marked: Vec<_> = segments.iter().filter(|(_, hit)| *hit).collect();
        assert_eq!(marked.len(), 2);
        let joined: String = segments.iter().map(|(s, _)| *s).collect();
        assert_eq!(joined, "Data Enrichment");
    }

    #[test]
    fn test_picker_confirm_selects_and_resets() {
        let mut picker = ModulePicker::new();
        picker.open();
        for c in "malware".chars() {
            picker.push_char(c);
        }
        assert_eq!(picker.matches(), vec![OsintModule::MalwareTracker]);

        assert_eq!(picker.confirm(), Some(OsintModule::MalwareTracker));
        assert!(!picker.is_open());
        assert_eq!(picker.filter(), "");
        assert_eq!(picker.selected(), Some(OsintModule::MalwareTracker));
    }

    #[test]
    fn test_picker_confirm_with_no_matches_stays_open() {
        let mut picker = ModulePicker::new();
        picker.open();
        picker.push_char('#');
        assert_eq!(picker.confirm(), None);
        assert!(picker.is_open());
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_picker_cursor_is_clamped() {
        let mut picker = ModulePicker::new();
        picker.open();
        picker.move_up();
        assert_eq!(picker.cursor(), 0);
        for _ in 0..10 {
            picker.move_down();
        }
        assert_eq!(picker.cursor(), 5);
        assert_eq!(picker.confirm(), Some(OsintModule::LeakMonitor));
    }
}
