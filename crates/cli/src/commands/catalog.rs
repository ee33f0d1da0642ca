//! Catalog inspection commands.
//!
//! Every command that reads a catalog runs it through the same validation
//! the storefront applies at startup, so a file that passes `validate` will
//! also load in the storefront.

use std::path::Path;

use icanmake3d_core::{Catalog, CatalogData, CatalogItem, SortOrder};
use tracing::info;

use super::CliError;

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// List items in catalog or price order.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub fn list(file: Option<&Path>, category: Option<&str>, sort: SortOrder) -> Result<(), CliError> {
    let catalog = load_catalog(file)?;
    let items = catalog.browse(category, sort);

    info!("{} item(s), sorted by {sort}", items.len());
    for item in items {
        info!("{}", summary_line(item));
    }

    Ok(())
}

/// Show a single item.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the slug is unknown.
pub fn show(file: Option<&Path>, slug: &str) -> Result<(), CliError> {
    let catalog = load_catalog(file)?;
    let item = catalog
        .find_by_slug(slug)
        .ok_or_else(|| CliError::UnknownSlug(slug.to_string()))?;

    info!("{} ({})", item.name, item.slug);
    info!("  id:        {}", item.id);
    info!("  price:     {}", item.price);
    info!("  category:  {}", item.category);
    info!("  summary:   {}", item.short_description);
    info!("  formats:   {}", item.tech_details.format_label());
    info!("  polygons:  {}", item.tech_details.poly_count);
    info!("  textures:  {}", item.tech_details.textures);
    info!("  file size: {}", item.tech_details.file_size);
    if let Some(rigged) = item.tech_details.rigged {
        info!("  rigged:    {rigged}");
    }
    if let Some(animated) = item.tech_details.animated {
        info!("  animated:  {animated}");
    }
    info!(
        "  3D model:  {}",
        item.model_url.as_deref().unwrap_or("(placeholder)")
    );

    let related = catalog.related(item, 3);
    if !related.is_empty() {
        info!("Related:");
        for other in related {
            info!("  {}", summary_line(other));
        }
    }

    Ok(())
}

/// List categories with their item counts.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub fn categories(file: Option<&Path>) -> Result<(), CliError> {
    let catalog = load_catalog(file)?;

    for (category, count) in catalog.category_counts() {
        info!(
            "{} {:<12} {:>3} item(s)  {}",
            category.icon, category.id, count, category.description
        );
    }

    Ok(())
}

/// Validate a catalog file.
///
/// # Errors
///
/// Returns an error describing the first defect found.
pub fn validate(path: &Path) -> Result<(), CliError> {
    info!(path = %path.display(), "Validating catalog");

    let catalog = read_catalog(path)?;
    let featured = catalog.list_featured().len();

    info!(
        items = catalog.len(),
        categories = catalog.list_categories().len(),
        featured,
        "Catalog is valid"
    );

    Ok(())
}

/// Export the built-in catalog.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn export(path: &Path) -> Result<(), CliError> {
    let catalog = Catalog::builtin()?;
    let content = render_catalog(&catalog.to_data(), Format::for_path(path))?;

    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), items = catalog.len(), "Catalog exported");
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn load_catalog(file: Option<&Path>) -> Result<Catalog, CliError> {
    match file {
        Some(path) => read_catalog(path),
        None => Ok(Catalog::builtin()?),
    }
}

fn read_catalog(path: &Path) -> Result<Catalog, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content, Format::for_path(path))
}

fn parse_catalog(content: &str, format: Format) -> Result<Catalog, CliError> {
    let data: CatalogData = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(Catalog::from_data(data)?)
}

fn render_catalog(data: &CatalogData, format: Format) -> Result<String, CliError> {
    Ok(match format {
        Format::Yaml => serde_yaml::to_string(data)?,
        Format::Json => serde_json::to_string_pretty(data)?,
    })
}

fn summary_line(item: &CatalogItem) -> String {
    let mut flags = Vec::new();
    if item.featured {
        flags.push("featured");
    }
    if item.new {
        flags.push("new");
    }

    format!(
        "{:<4} {:<24} {:>8}  {:<11} {}",
        item.id,
        item.slug,
        item.price.display(),
        item.category,
        flags.join(", ")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use icanmake3d_core::CatalogError;

    use super::*;

    const SMALL_CATALOG: &str = r#"
categories:
  - id: props
    name: Props
    icon: "📦"
    description: Game-ready props & items
items:
  - id: "5"
    slug: industrial-crate-set
    name: Industrial Crate Set
    description: Collection of 5 industrial crates.
    short_description: Set of 5 industrial containers
    price:
      amount: "14.99"
    category: props
    thumbnail: /assets/models/industrial-crates.jpg
    tech_details:
      formats: [GLB, FBX]
      poly_count: 2,500 tris each
      textures: 2K PBR
      file_size: 30 MB
"#;

    #[test]
    fn test_format_for_path() {
        assert_eq!(Format::for_path(Path::new("catalog.json")), Format::Json);
        assert_eq!(Format::for_path(Path::new("catalog.JSON")), Format::Json);
        assert_eq!(Format::for_path(Path::new("catalog.yaml")), Format::Yaml);
        assert_eq!(Format::for_path(Path::new("catalog")), Format::Yaml);
    }

    #[test]
    fn test_parse_yaml_catalog() {
        let catalog = parse_catalog(SMALL_CATALOG, Format::Yaml).unwrap();
        assert_eq!(catalog.len(), 1);

        let item = catalog.find_by_slug("industrial-crate-set").unwrap();
        assert_eq!(item.price.display(), "$14.99");
        assert!(!item.featured);
        assert_eq!(catalog.list_by_category("props").len(), 1);
    }

    #[test]
    fn test_parse_rejects_duplicate_slug() {
        let mut data = Catalog::builtin().unwrap().to_data();
        let mut copy = data.items.first().cloned().unwrap();
        copy.id = "99".into();
        data.items.push(copy);

        let yaml = render_catalog(&data, Format::Yaml).unwrap();
        let err = parse_catalog(&yaml, Format::Yaml).unwrap_err();
        assert!(matches!(
            err,
            CliError::Catalog(CatalogError::DuplicateSlug(_))
        ));
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let err = parse_catalog("categories: [", Format::Yaml).unwrap_err();
        assert!(matches!(err, CliError::Yaml(_)));
    }

    #[test]
    fn test_export_then_validate() {
        let dir = tempfile::tempdir().unwrap();

        for name in ["catalog.yaml", "catalog.json"] {
            let path = dir.path().join(name);
            export(&path).unwrap();
            validate(&path).unwrap();
            assert_eq!(read_catalog(&path).unwrap().len(), 8);
        }
    }

    #[test]
    fn test_show_unknown_slug() {
        let err = show(None, "unknown-slug").unwrap_err();
        assert!(matches!(err, CliError::UnknownSlug(ref slug) if slug == "unknown-slug"));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_summary_line_flags() {
        let catalog = Catalog::builtin().unwrap();
        let line = summary_line(catalog.find_by_id("1").unwrap());
        assert!(line.contains("cyber-sports-car"));
        assert!(line.contains("$49.99"));
        assert!(line.ends_with("featured, new"));
    }
}
