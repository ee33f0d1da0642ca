//! Built-in launch catalog.

use crate::catalog::{CatalogData, CatalogItem, Category, TechDetails};
use crate::types::{CategoryId, CurrencyCode, ItemId, Price, Slug};

fn category(id: &str, name: &str, icon: &str, description: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn tech(formats: &[&str], poly_count: &str, textures: &str, file_size: &str) -> TechDetails {
    TechDetails {
        formats: formats.iter().map(|f| (*f).to_string()).collect(),
        poly_count: poly_count.to_string(),
        textures: textures.to_string(),
        file_size: file_size.to_string(),
        rigged: None,
        animated: None,
    }
}

struct Listing<'a> {
    id: &'a str,
    slug: &'a str,
    name: &'a str,
    cents: i64,
    category: &'a str,
    description: &'a str,
    short_description: &'a str,
    image: &'a str,
    gallery_size: usize,
    tech_details: TechDetails,
}

impl Listing<'_> {
    fn build(self) -> CatalogItem {
        let thumbnail = format!("/assets/models/{}.jpg", self.image);
        CatalogItem {
            id: ItemId::new(self.id),
            slug: Slug::new(self.slug),
            name: self.name.to_string(),
            description: self.description.to_string(),
            short_description: self.short_description.to_string(),
            price: Price::from_cents(self.cents, CurrencyCode::USD),
            category: CategoryId::new(self.category),
            images: vec![thumbnail.clone(); self.gallery_size],
            thumbnail,
            model_url: None,
            tech_details: self.tech_details,
            featured: false,
            new: false,
        }
    }
}

/// The categories and listings the store launches with.
pub(crate) fn launch_catalog() -> CatalogData {
    let categories = vec![
        category("cars", "Cars", "🚗", "High-detail vehicle models"),
        category("weapons", "Weapons", "⚔️", "Swords, guns & combat gear"),
        category("buildings", "Buildings", "🏛️", "Architecture & structures"),
        category("characters", "Characters", "👤", "Humanoid & creature models"),
        category("props", "Props", "📦", "Game-ready props & items"),
    ];

    let items = vec![
        CatalogItem {
            featured: true,
            new: true,
            tech_details: TechDetails {
                rigged: Some(false),
                animated: Some(false),
                ..tech(&["GLB", "FBX", "OBJ"], "45,000 tris", "4K PBR", "85 MB")
            },
            ..Listing {
                id: "1",
                slug: "cyber-sports-car",
                name: "Cyber Sports Car",
                cents: 4999,
                category: "cars",
                description: "A futuristic sports car with sleek aerodynamic design, perfect for cyberpunk games and sci-fi visualizations. Features detailed interior, working doors, and PBR materials.",
                short_description: "Futuristic sports car with cyberpunk aesthetics",
                image: "cyber-car",
                gallery_size: 3,
                tech_details: TechDetails::default(),
            }
            .build()
        },
        CatalogItem {
            new: true,
            ..Listing {
                id: "2",
                slug: "medieval-longsword",
                name: "Medieval Longsword",
                cents: 1999,
                category: "weapons",
                description: "Highly detailed medieval longsword with intricate engravings and worn metal textures. Game-ready with multiple LODs included.",
                short_description: "Detailed medieval sword with worn textures",
                image: "medieval-sword",
                gallery_size: 2,
                tech_details: tech(&["GLB", "FBX"], "8,500 tris", "4K PBR", "25 MB"),
            }
            .build()
        },
        Listing {
            id: "3",
            slug: "sci-fi-tower",
            name: "Sci-Fi Tower",
            cents: 3999,
            category: "buildings",
            description: "Massive futuristic skyscraper with holographic billboards and neon accents. Perfect for cyberpunk cityscapes.",
            short_description: "Futuristic skyscraper with neon details",
            image: "scifi-tower",
            gallery_size: 2,
            tech_details: tech(
                &["GLB", "FBX", "Blend"],
                "120,000 tris",
                "4K PBR + Emissive",
                "150 MB",
            ),
        }
        .build(),
        CatalogItem {
            featured: true,
            tech_details: TechDetails {
                rigged: Some(true),
                animated: Some(true),
                ..tech(&["GLB", "FBX"], "35,000 tris", "4K PBR", "120 MB")
            },
            ..Listing {
                id: "4",
                slug: "robot-warrior",
                name: "Robot Warrior",
                cents: 7999,
                category: "characters",
                description: "Fully rigged humanoid robot character with combat animations. Ready for game engines with optimized topology.",
                short_description: "Rigged robot character with animations",
                image: "robot-warrior",
                gallery_size: 3,
                tech_details: TechDetails::default(),
            }
            .build()
        },
        Listing {
            id: "5",
            slug: "industrial-crate-set",
            name: "Industrial Crate Set",
            cents: 1499,
            category: "props",
            description: "Collection of 5 industrial crates and containers with various damage states and materials.",
            short_description: "Set of 5 industrial containers",
            image: "industrial-crates",
            gallery_size: 1,
            tech_details: tech(&["GLB", "FBX"], "2,500 tris each", "2K PBR", "30 MB"),
        }
        .build(),
        CatalogItem {
            featured: true,
            ..Listing {
                id: "6",
                slug: "classic-muscle-car",
                name: "Classic Muscle Car",
                cents: 5499,
                category: "cars",
                description: "Vintage American muscle car with chrome details and leather interior. Perfect for racing games or cinematic shots.",
                short_description: "Vintage muscle car with chrome accents",
                image: "muscle-car",
                gallery_size: 2,
                tech_details: tech(&["GLB", "FBX", "OBJ"], "52,000 tris", "4K PBR", "95 MB"),
            }
            .build()
        },
        Listing {
            id: "7",
            slug: "katana-collection",
            name: "Katana Collection",
            cents: 2999,
            category: "weapons",
            description: "Set of 3 Japanese katanas with different styles - traditional, modern, and fantasy. Includes sheaths and stands.",
            short_description: "3 katana styles with accessories",
            image: "katana-collection",
            gallery_size: 2,
            tech_details: tech(&["GLB", "FBX"], "12,000 tris total", "4K PBR", "45 MB"),
        }
        .build(),
        CatalogItem {
            new: true,
            ..Listing {
                id: "8",
                slug: "cyberpunk-apartment",
                name: "Cyberpunk Apartment",
                cents: 6999,
                category: "buildings",
                description: "Complete cyberpunk apartment interior with furniture, decorations, and neon lighting. Modular design for easy customization.",
                short_description: "Full apartment interior with furniture",
                image: "cyberpunk-apartment",
                gallery_size: 3,
                tech_details: tech(
                    &["GLB", "FBX", "Blend"],
                    "200,000 tris",
                    "4K PBR + Emissive",
                    "280 MB",
                ),
            }
            .build()
        },
    ];

    CatalogData { categories, items }
}
