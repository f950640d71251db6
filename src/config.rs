use crate::error::GenerationError;
use folio_layout::LayoutConfig;
use folio_types::{PageSize, Size};
use serde::{Deserialize, Serialize};

/// Generator settings as they appear in a JSON settings document.
///
/// Every field is optional in JSON; missing fields take their defaults.
///
/// ```json
/// { "pageSize": "Letter", "landscape": true, "maxPages": 50 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// A named paper size or `{ "width": .., "height": .. }` in points.
    pub page_size: PageSize,
    pub landscape: bool,
    pub max_pages: usize,
    pub cache_measurements: bool,
    pub trace_layout_failures: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from_layout_config(PageSize::default(), LayoutConfig::default())
    }
}

impl GeneratorSettings {
    pub fn from_layout_config(page_size: PageSize, config: LayoutConfig) -> Self {
        Self {
            page_size,
            landscape: false,
            max_pages: config.max_pages,
            cache_measurements: config.cache_measurements,
            trace_layout_failures: config.trace_layout_failures,
        }
    }

    /// Parses and validates a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let settings: GeneratorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            max_pages: self.max_pages,
            cache_measurements: self.cache_measurements,
            trace_layout_failures: self.trace_layout_failures,
        }
    }

    /// Page dimensions in points, honouring the orientation.
    pub fn page_dimensions(&self) -> Size {
        if self.landscape {
            self.page_size.landscape()
        } else {
            self.page_size.dimensions()
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_pages == 0 {
            return Err(GenerationError::Config("maxPages must be at least 1".to_string()));
        }

        let page = self.page_dimensions();
        if page.width <= 0.0 || page.height <= 0.0 {
            return Err(GenerationError::Config(format!(
                "page size must be positive, got {}",
                page
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = GeneratorSettings::from_json(r#"{ "maxPages": 5 }"#).unwrap();
        assert_eq!(settings.max_pages, 5);
        assert_eq!(settings.page_size, PageSize::A4);
        assert!(settings.cache_measurements);
        assert!(settings.trace_layout_failures);
    }

    #[test]
    fn parses_custom_page_in_landscape() {
        let json = r#"{
            "pageSize": { "width": 100, "height": 90 },
            "landscape": true,
            "cacheMeasurements": false
        }"#;
        let settings = GeneratorSettings::from_json(json).unwrap();

        assert_eq!(settings.page_dimensions(), Size::new(90.0, 100.0));
        assert!(!settings.layout_config().cache_measurements);
    }

    #[test]
    fn rejects_invalid_values() {
        let zero_pages = GeneratorSettings::from_json(r#"{ "maxPages": 0 }"#);
        assert!(matches!(zero_pages, Err(GenerationError::Config(_))));

        let flat_page =
            GeneratorSettings::from_json(r#"{ "pageSize": { "width": 100, "height": 0 } }"#);
        assert!(matches!(flat_page, Err(GenerationError::Config(_))));

        let malformed = GeneratorSettings::from_json(r#"{ "maxPages": "many" }"#);
        assert!(matches!(malformed, Err(GenerationError::Json(_))));
    }
}
