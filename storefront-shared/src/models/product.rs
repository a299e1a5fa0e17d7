//! Catalog records: products and their categories.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Category reference embedded in a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    /// Category identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
}

/// A catalog category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Optional long description.
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// A product listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "precio")]
    pub price: f64,
    /// Optional long description.
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Owning category identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Owning category, when the server embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Product {
    /// Price label, `$20` or `$19.9`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("${}", self.price)
    }

    /// Name of the embedded category, if any.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.name.as_str())
    }

    /// Whether the product belongs to the given category, looking at both the
    /// foreign key and the embedded summary.
    #[must_use]
    pub fn in_category(&self, category_id: i64) -> bool {
        self.category_id == Some(category_id)
            || self
                .category
                .as_ref()
                .is_some_and(|category| category.id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "id": 3,
        "nombre": "Camiseta",
        "precio": 19.9,
        "descripcion": "Algodón",
        "imageUrl": "https://cdn.example.com/shirt.png",
        "categoryId": 2,
        "category": {"id": 2, "nombre": "Ropa"},
        "createdAt": "2024-03-01T12:00:00.000Z",
        "updatedAt": "2024-03-02T12:00:00.000Z"
    }"#;

    #[test]
    fn product_from_api_payload() {
        let product: Product = serde_json::from_str(FULL).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Camiseta");
        assert_eq!(product.description.as_deref(), Some("Algodón"));
        assert_eq!(product.category_name(), Some("Ropa"));
        assert!(product.in_category(2));
        assert!(!product.in_category(9));
        assert!(product.updated_at.is_some());
    }

    #[test]
    fn minimal_product() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"nombre":"Taza","precio":5}"#).unwrap();
        assert_eq!(product.image_url, None);
        assert_eq!(product.category_name(), None);
        assert!(!product.in_category(1));
    }

    #[test]
    fn price_label() {
        let mut product: Product = serde_json::from_str(FULL).unwrap();
        assert_eq!(product.formatted_price(), "$19.9");
        product.price = 20.0;
        assert_eq!(product.formatted_price(), "$20");
        product.price = 1234.56;
        assert_eq!(product.formatted_price(), "$1234.56");
    }

    #[test]
    fn category_from_api_payload() {
        let category: Category =
            serde_json::from_str(r#"{"id":4,"nombre":"Hogar","descripcion":"Casa"}"#).unwrap();
        assert_eq!(category.name, "Hogar");
        assert_eq!(category.description.as_deref(), Some("Casa"));

        let back = serde_json::to_value(&category).unwrap();
        assert_eq!(back["nombre"], "Hogar");
        assert!(back.get("createdAt").is_none());
    }
}
