//! Catalog listing models.

use crate::clients::ErrorEntry;

model! {
    /// Query parameters for `ListCatalog`.
    pub struct ListCatalogRequest / ListCatalogRequestBuilder {
        optional {
            /// Pagination cursor returned by a previous call.
            cursor: String,
            /// Comma-separated catalog object types to include, such as `ITEM,CATEGORY`.
            types: String,
            /// The specific version of the catalog objects to include.
            catalog_version: i64,
        }
    }
}

model! {
    /// Item-specific data of a catalog object.
    pub struct CatalogItem / CatalogItemBuilder {
        optional {
            name: String,
            description: String,
            abbreviation: String,
            label_color: String,
            category_id: String,
            product_type: String,
            is_archived: bool,
        }
    }
}

model! {
    /// Item-category data of a catalog object.
    pub struct CatalogCategory / CatalogCategoryBuilder {
        optional {
            name: String,
        }
    }
}

model! {
    /// A catalog entry.
    ///
    /// The type-specific data is held in the `*_data` field matching `object_type`.
    pub struct CatalogObject / CatalogObjectBuilder {
        required {
            /// The object type, such as `ITEM` or `CATEGORY`.
            #[serde(rename = "type")]
            object_type: String,
            /// Unique ID, or a `#`-prefixed temporary ID when creating.
            id: String,
        }
        optional {
            updated_at: String,
            version: i64,
            is_deleted: bool,
            present_at_all_locations: bool,
            present_at_location_ids: Vec<String>,
            absent_at_location_ids: Vec<String>,
            item_data: CatalogItem,
            category_data: CatalogCategory,
        }
    }
}

model! {
    /// A page of catalog objects.
    pub struct ListCatalogResponse / ListCatalogResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            cursor: String,
            objects: Vec<CatalogObject>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_object_type_is_renamed() {
        let body = json!({
            "type": "ITEM",
            "id": "W62UWFY35CWMYGVWK6TWJDNI",
            "version": 1_706_000_000_000_i64,
            "item_data": {"name": "Tea"}
        });
        let object: CatalogObject = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(object.object_type, "ITEM");
        assert_eq!(serde_json::to_value(&object).unwrap(), body);
    }

    #[test]
    fn test_list_catalog_response_decodes_page() {
        let response: ListCatalogResponse = serde_json::from_value(json!({
            "cursor": "next",
            "objects": [
                {"type": "CATEGORY", "id": "C1", "category_data": {"name": "Drinks"}}
            ]
        }))
        .unwrap();

        let objects = response.objects.as_option().unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id, "C1");
        assert!(response.errors.is_absent());
    }
}
