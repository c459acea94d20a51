use serde::{Deserialize, Serialize};

/// Product category with its nested subcategories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub subcategories: Vec<SubCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl Category {
    /// Comma-separated subcategory names, in catalog order
    pub fn subcategory_names(&self) -> String {
        self.subcategories
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
