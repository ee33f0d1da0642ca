//! Catalog listing types.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, ItemId, Price, Slug};

/// A browsable category of 3D assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// Technical metadata shown on the product page.
///
/// The labels are display text authored with the listing; nothing here is
/// parsed or checked against the asset files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TechDetails {
    /// Downloadable file formats (e.g., `GLB`, `FBX`).
    pub formats: Vec<String>,
    /// Polygon count label (e.g., "45,000 tris").
    pub poly_count: String,
    /// Texture resolution label (e.g., "4K PBR").
    pub textures: String,
    /// Download size label (e.g., "85 MB").
    pub file_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl TechDetails {
    /// Formats joined for display, e.g. "GLB, FBX, OBJ".
    #[must_use]
    pub fn format_label(&self) -> String {
        self.formats.join(", ")
    }
}

/// A sellable 3D model listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub slug: Slug,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub price: Price,
    /// Loose reference to a [`Category`]; not checked against the category set.
    pub category: CategoryId,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Locator of a viewable 3D asset, when one has been uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    pub tech_details: TechDetails,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub new: bool,
}

/// What the product page's 3D panel should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum Preview<'a> {
    /// Load the listing's own model.
    Model(&'a str),
    /// No asset available; show the stock placeholder scene.
    Placeholder,
}

impl CatalogItem {
    /// Choose the preview source for this listing.
    #[must_use]
    pub fn preview(&self) -> Preview<'_> {
        self.model_url
            .as_deref()
            .map_or(Preview::Placeholder, Preview::Model)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn listing(model_url: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: ItemId::new("9"),
            slug: Slug::new("test-rig"),
            name: "Test Rig".to_string(),
            description: "A rig.".to_string(),
            short_description: "Rig".to_string(),
            price: Price::from_cents(999, CurrencyCode::USD),
            category: CategoryId::new("props"),
            thumbnail: "/assets/models/test-rig.jpg".to_string(),
            images: Vec::new(),
            model_url: model_url.map(String::from),
            tech_details: TechDetails::default(),
            featured: false,
            new: false,
        }
    }

    #[test]
    fn test_preview_falls_back_to_placeholder() {
        assert_eq!(listing(None).preview(), Preview::Placeholder);
        assert_eq!(
            listing(Some("/models/rig.glb")).preview(),
            Preview::Model("/models/rig.glb")
        );
    }

    #[test]
    fn test_preview_serialization() {
        let item = listing(Some("/models/rig.glb"));
        let json = serde_json::to_value(item.preview()).unwrap();
        assert_eq!(json["kind"], "model");
        assert_eq!(json["url"], "/models/rig.glb");

        let json = serde_json::to_value(Preview::Placeholder).unwrap();
        assert_eq!(json["kind"], "placeholder");
    }

    #[test]
    fn test_optional_flags_default_to_false() {
        let json = serde_json::json!({
            "id": "9",
            "slug": "test-rig",
            "name": "Test Rig",
            "description": "A rig.",
            "short_description": "Rig",
            "price": { "amount": "9.99" },
            "category": "props",
            "thumbnail": "/assets/models/test-rig.jpg",
            "tech_details": {
                "formats": ["GLB"],
                "poly_count": "1,000 tris",
                "textures": "2K PBR",
                "file_size": "4 MB"
            }
        });

        let item: CatalogItem = serde_json::from_value(json).unwrap();
        assert!(!item.featured);
        assert!(!item.new);
        assert!(item.images.is_empty());
        assert_eq!(item.model_url, None);
        assert_eq!(item.tech_details.rigged, None);
        assert_eq!(item.price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_format_label() {
        let details = TechDetails {
            formats: vec!["GLB".to_string(), "FBX".to_string(), "OBJ".to_string()],
            ..TechDetails::default()
        };
        assert_eq!(details.format_label(), "GLB, FBX, OBJ");
    }
}
