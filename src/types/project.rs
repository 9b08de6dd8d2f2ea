//! Portfolio project records
//!
//! Defines the canonical project shape and the legacy shapes it migrates from.

use super::category::{Category, CategoryFilter};
use super::{
    current_year, has_first_image, images_from_legacy, lenient_images, lenient_optional,
    lenient_text, non_blank, optional, Record, RecordId,
};
use serde::{Deserialize, Serialize};

/// A showcased portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub category: Category,
    /// Image URLs, first one is the cover
    pub images: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// CSS aspect ratio of the cover, e.g. "4/5"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

/// A project as found in storage
///
/// `Current` is tried first and requires an `images` array; anything else with
/// an `id` falls through to `Legacy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredProject {
    Current(CurrentProject),
    Legacy(LegacyProject),
}

/// Current stored shape. The category is kept as raw text until migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentProject {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub client: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub aspect_ratio: Option<String>,
}

/// Older shape with a single `image` string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyProject {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub client: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub aspect_ratio: Option<String>,
}

impl From<Project> for StoredProject {
    fn from(project: Project) -> Self {
        StoredProject::Current(CurrentProject {
            id: project.id,
            title: project.title,
            category: project.category.label().to_string(),
            images: project.images,
            description: project.description,
            client: project.client,
            year: project.year,
            role: project.role,
            aspect_ratio: project.aspect_ratio,
        })
    }
}

/// Coerce stored category text into the known set
fn coerce_category(raw: &str) -> Category {
    Category::from_label(raw).unwrap_or_else(|| {
        if !raw.is_empty() {
            tracing::warn!("Unknown project category {:?}, using {}", raw, Category::default());
        }
        Category::default()
    })
}

/// A single-field change to a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectEdit {
    Title(String),
    Category(Category),
    Images(Vec<String>),
    Description(String),
    Client(String),
    Year(String),
    Role(String),
    AspectRatio(String),
}

impl Project {
    /// Empty project for the "add" form
    pub fn draft() -> Self {
        Self {
            id: 0,
            title: String::new(),
            category: Category::default(),
            images: Vec::new(),
            description: String::new(),
            client: None,
            year: Some(current_year()),
            role: None,
            aspect_ratio: None,
        }
    }

    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Record for Project {
    type Stored = StoredProject;
    type Edit = ProjectEdit;

    const STORAGE_KEY: &'static str = "portfolio_projects";
    const KIND: &'static str = "project";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn migrate(stored: StoredProject) -> Self {
        match stored {
            StoredProject::Current(p) => Project {
                id: p.id,
                title: p.title,
                category: coerce_category(&p.category),
                images: p.images,
                description: p.description,
                client: p.client,
                year: p.year,
                role: p.role,
                aspect_ratio: p.aspect_ratio,
            },
            StoredProject::Legacy(p) => Project {
                id: p.id,
                title: p.title,
                category: coerce_category(&p.category),
                images: images_from_legacy(p.image),
                description: p.description,
                client: p.client,
                year: p.year,
                role: p.role,
                aspect_ratio: p.aspect_ratio,
            },
        }
    }

    fn is_complete(&self) -> bool {
        non_blank(&self.title) && has_first_image(&self.images) && non_blank(&self.description)
    }

    fn apply(&mut self, edit: ProjectEdit) {
        match edit {
            ProjectEdit::Title(title) => self.title = title,
            ProjectEdit::Category(category) => self.category = category,
            ProjectEdit::Images(images) => self.images = images,
            ProjectEdit::Description(description) => self.description = description,
            ProjectEdit::Client(client) => self.client = optional(client),
            ProjectEdit::Year(year) => self.year = optional(year),
            ProjectEdit::Role(role) => self.role = optional(role),
            ProjectEdit::AspectRatio(ratio) => self.aspect_ratio = optional(ratio),
        }
    }

    fn defaults() -> Vec<Self> {
        vec![
            Project {
                id: 1,
                title: "Harbor Banking App".to_string(),
                category: Category::UiUx,
                images: vec![
                    "https://images.unsplash.com/photo-1551650975-87deedd944c3".to_string(),
                ],
                description: "Mobile banking redesign focused on fast everyday payments."
                    .to_string(),
                client: Some("Harbor Bank".to_string()),
                year: Some("2023".to_string()),
                role: Some("Lead Designer".to_string()),
                aspect_ratio: Some("3/4".to_string()),
            },
            Project {
                id: 2,
                title: "Northwind Identity".to_string(),
                category: Category::Branding,
                images: vec![
                    "https://images.unsplash.com/photo-1634942537034-2531766767d1".to_string(),
                ],
                description: "Logo, type system and packaging for a coffee roaster.".to_string(),
                client: Some("Northwind Coffee".to_string()),
                year: Some("2022".to_string()),
                role: Some("Brand Designer".to_string()),
                aspect_ratio: Some("1/1".to_string()),
            },
            Project {
                id: 3,
                title: "Coastline".to_string(),
                category: Category::Photography,
                images: vec![
                    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e".to_string(),
                    "https://images.unsplash.com/photo-1519046904884-53103b34b206".to_string(),
                ],
                description: "A photo series shot along the Atlantic coast.".to_string(),
                client: None,
                year: Some("2024".to_string()),
                role: Some("Photographer".to_string()),
                aspect_ratio: Some("4/3".to_string()),
            },
        ]
    }
}

/// Projects matching `filter`, in list order
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Project {
        let stored: StoredProject = serde_json::from_value(value).unwrap();
        Project::migrate(stored)
    }

    #[test]
    fn test_legacy_image_becomes_images() {
        let project = parse(json!({
            "id": 7,
            "title": "Old",
            "category": "Branding",
            "image": "x.png",
            "description": "legacy"
        }));
        assert_eq!(project.images, vec!["x.png"]);

        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("image").is_none());
        assert_eq!(value["images"], json!(["x.png"]));
    }

    #[test]
    fn test_unknown_category_is_coerced() {
        let project = parse(json!({
            "id": 8,
            "title": "Mystery",
            "category": "Sculpture",
            "images": ["a.png"],
            "description": "d"
        }));
        assert_eq!(project.category, Category::default());

        let missing = parse(json!({ "id": 9, "images": [] }));
        assert_eq!(missing.category, Category::UiUx);
    }

    #[test]
    fn test_non_text_fields_are_tolerated() {
        let null_category = parse(json!({
            "id": 10,
            "title": null,
            "category": null,
            "images": ["a.png"],
            "description": null
        }));
        assert_eq!(null_category.category, Category::UiUx);
        assert_eq!(null_category.title, "");
        assert_eq!(null_category.description, "");

        let numeric = parse(json!({
            "id": 11,
            "title": "Numbers",
            "category": 5,
            "image": "n.png",
            "description": "d",
            "year": 2020
        }));
        assert_eq!(numeric.category, Category::UiUx);
        assert_eq!(numeric.images, vec!["n.png"]);
        assert_eq!(numeric.year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_bare_image_string_is_wrapped() {
        let project = parse(json!({
            "id": 12,
            "title": "Single",
            "category": "Photography",
            "images": "x.png",
            "description": "d"
        }));
        assert_eq!(project.images, vec!["x.png"]);
        assert_eq!(project.category, Category::Photography);
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let inputs = [
            json!({ "id": 1, "title": "t", "category": "nope", "image": "x.png", "description": "d" }),
            json!({ "id": 2, "title": "t", "category": "Marketing", "images": ["a", "b"], "description": "d", "client": "c" }),
            json!({ "id": 3, "image": "" }),
        ];
        for input in inputs {
            let once = parse(input);
            let twice = Project::migrate(StoredProject::from(once.clone()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_stale_image_field_is_dropped() {
        let project = parse(json!({
            "id": 4,
            "title": "t",
            "category": "Photography",
            "images": ["new.png"],
            "image": "old.png",
            "description": "d"
        }));
        assert_eq!(project.images, vec!["new.png"]);
    }

    #[test]
    fn test_is_complete() {
        let mut project = Project::draft();
        assert!(!project.is_complete());
        project.title = "Title".into();
        project.images = vec!["a.png".into()];
        assert!(!project.is_complete());
        project.description = "Description".into();
        assert!(project.is_complete());
        project.images = vec![" ".into()];
        assert!(!project.is_complete());
    }

    #[test]
    fn test_apply_edits() {
        let mut project = Project::defaults().remove(0);
        project.apply(ProjectEdit::Category(Category::Videography));
        project.apply(ProjectEdit::Client(String::new()));
        project.apply(ProjectEdit::Role("Director".into()));
        assert_eq!(project.category, Category::Videography);
        assert_eq!(project.client, None);
        assert_eq!(project.role.as_deref(), Some("Director"));
    }

    #[test]
    fn test_defaults_are_complete_and_unique() {
        let defaults = Project::defaults();
        assert!(defaults.iter().all(|p| p.is_complete()));
        let mut ids: Vec<_> = defaults.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defaults.len());
    }

    #[test]
    fn test_filter_projects() {
        let projects = Project::defaults();
        assert_eq!(filter_projects(&projects, CategoryFilter::All).len(), 3);
        let branding = filter_projects(&projects, CategoryFilter::Only(Category::Branding));
        assert_eq!(branding.len(), 1);
        assert_eq!(branding[0].id, 2);
        assert!(filter_projects(&projects, CategoryFilter::Only(Category::Marketing)).is_empty());
    }
}
