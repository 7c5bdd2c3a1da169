//! Template store and library persistence
//!
//! A [`Template`] is a named reference shape, normalized once at
//! registration time and immutable afterwards. Several templates may share
//! one name to provide multiple examples of the same gesture class; the
//! matcher scans all of them and the minimum distance decides.
//!
//! A [`TemplateLibrary`] holds the raw, un-normalized definitions in a
//! versioned JSON file so template sets can be authored and shipped as data.

use crate::geometry::Point;
use crate::recognition::normalize::{normalize, NormalizeParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current template library format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// A named reference shape, pre-normalized for matching.
///
/// Immutable once created; its lifetime is the lifetime of the recognizer
/// that owns it.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    points: Vec<Point>,
}

impl Template {
    /// Normalizes `raw_points` and wraps them as a template.
    ///
    /// Fails loudly on fewer than 2 raw points: that is a programming error
    /// upstream, not a user-gesture edge case.
    pub fn new(name: String, raw_points: &[Point], params: &NormalizeParams) -> crate::Result<Self> {
        if raw_points.len() < 2 {
            return Err(crate::Error::Template(format!(
                "template '{}' needs at least 2 points, got {}",
                name,
                raw_points.len()
            )));
        }
        let points = normalize(raw_points, params);
        Ok(Self { name, points })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized point sequence (always `params.resample_count` long)
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A raw template definition as authored: a name plus the un-normalized
/// defining points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDef {
    pub name: String,
    pub points: Vec<Point>,
}

/// A serializable collection of template definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLibrary {
    /// Version of the library format
    pub format_version: String,
    /// Optional human-readable library name
    pub name: Option<String>,
    /// Raw template definitions, in registration order
    pub templates: Vec<TemplateDef>,
}

impl TemplateLibrary {
    /// Create a new empty library
    pub fn new(name: Option<String>) -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION.to_string(),
            name,
            templates: Vec::new(),
        }
    }

    /// Append a template definition
    pub fn add(&mut self, name: impl Into<String>, points: Vec<Point>) {
        self.templates.push(TemplateDef {
            name: name.into(),
            points,
        });
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDef> {
        self.templates.iter()
    }

    /// Save the library to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a library from a JSON file.
    ///
    /// Logs a warning for unknown format versions but still attempts to
    /// deserialize.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let library: TemplateLibrary = serde_json::from_str(&content)?;
        if library.format_version != CURRENT_FORMAT_VERSION {
            tracing::warn!(
                found = %library.format_version,
                expected = CURRENT_FORMAT_VERSION,
                "Template library has different format version"
            );
        }
        Ok(library)
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn square_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_template_is_normalized_on_creation() {
        let params = NormalizeParams::default();
        let template = Template::new("square".to_string(), &square_points(), &params).unwrap();
        assert_eq!(template.name(), "square");
        assert_eq!(template.points().len(), params.resample_count);
    }

    #[test]
    fn test_template_rejects_too_few_points() {
        let params = NormalizeParams::default();
        let result = Template::new("dot".to_string(), &[Point::new(1.0, 1.0)], &params);
        assert!(matches!(result, Err(crate::Error::Template(_))));
    }

    #[test]
    fn test_template_rejects_empty_points() {
        let params = NormalizeParams::default();
        assert!(Template::new("nothing".to_string(), &[], &params).is_err());
    }

    #[test]
    fn test_library_add_and_iterate() {
        let mut library = TemplateLibrary::new(Some("shapes".to_string()));
        library.add("square", square_points());
        library.add("line", vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0)]);

        assert_eq!(library.len(), 2);
        assert!(!library.is_empty());
        let names: Vec<_> = library.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["square", "line"]);
    }

    #[test]
    fn test_library_save_and_load() {
        let mut library = TemplateLibrary::new(Some("roundtrip".to_string()));
        library.add("square", square_points());

        let temp_file = NamedTempFile::new().unwrap();
        library.save(temp_file.path()).unwrap();

        let loaded = TemplateLibrary::load(temp_file.path()).unwrap();
        assert_eq!(loaded.name.as_deref(), Some("roundtrip"));
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.templates[0].name, "square");
        assert_eq!(loaded.templates[0].points.len(), 5);
        assert_eq!(loaded.format_version, CURRENT_FORMAT_VERSION);
    }

    #[test]
    fn test_library_load_missing_file() {
        let result = TemplateLibrary::load(Path::new("/nonexistent/library.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_library_load_malformed_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json }").unwrap();
        assert!(TemplateLibrary::load(temp_file.path()).is_err());
    }

    #[test]
    fn test_library_version_mismatch_still_loads() {
        let mut library = TemplateLibrary::new(None);
        library.add("line", vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        library.format_version = "2.0".to_string();

        let temp_file = NamedTempFile::new().unwrap();
        library.save(temp_file.path()).unwrap();

        let loaded = TemplateLibrary::load(temp_file.path()).unwrap();
        assert_eq!(loaded.format_version, "2.0");
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        // Several examples of the same gesture class may share a name
        let mut library = TemplateLibrary::default();
        library.add("two", vec![Point::new(0.0, 0.0), Point::new(10.0, 4.0)]);
        library.add("two", vec![Point::new(0.0, 0.0), Point::new(12.0, 5.0)]);
        assert_eq!(library.len(), 2);
    }
}
