//! Wire shapes shared by every resource endpoint.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;
use validator::Validate;

use crate::domain::pagination::ListPage;
use crate::domain::record::Record;

/// Binds a record type to its request/response DTOs and list key.
pub trait ApiResource: Record {
    /// Body accepted by create, and by update next to `id`.
    type Request: DeserializeOwned + Validate + Into<Self::New> + Send + 'static;
    type Response: Serialize + From<Self> + Send + 'static;

    /// Key holding the items in a list response, e.g. `"cities"`.
    const COLLECTION: &'static str;
}

/// Whole-record update body: `{ "id": ..., <writable fields> }`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: T,
}

/// One page of items keyed by the resource's collection name, plus the
/// table's total row count.
///
/// ```json
/// { "cities": [ ... ], "count": 42 }
/// ```
#[derive(Debug)]
pub struct ListResponse<T> {
    pub collection: &'static str,
    pub items: Vec<T>,
    pub count: i64,
}

impl<T> ListResponse<T> {
    pub fn from_page<R>(page: ListPage<R>) -> Self
    where
        R: ApiResource<Response = T>,
        T: From<R>,
    {
        let page = page.map(<T as From<R>>::from);

        Self {
            collection: R::COLLECTION,
            items: page.items,
            count: page.count,
        }
    }
}

impl<T: Serialize> Serialize for ListResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.collection, &self.items)?;
        map.serialize_entry("count", &self.count)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::city::{CityItem, CityRequest};
    use crate::domain::entities::City;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_list_response_uses_collection_key() {
        let city = City {
            id: Uuid::new_v4(),
            name: "Tashkent".to_string(),
            created_at: Utc::now(),
        };

        let response: ListResponse<CityItem> =
            ListResponse::from_page(ListPage::new(vec![city.clone()], 7));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["count"], 7);
        assert_eq!(value["cities"][0]["name"], "Tashkent");
        assert_eq!(value["cities"][0]["id"], json!(city.id));
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_list_still_has_key() {
        let response: ListResponse<CityItem> =
            ListResponse::from_page::<City>(ListPage::new(vec![], 0));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "cities": [], "count": 0 }));
    }

    #[test]
    fn test_update_request_flattens_fields() {
        let id = Uuid::new_v4();
        let body = json!({ "id": id, "name": "Samarkand" });

        let request: UpdateRequest<CityRequest> = serde_json::from_value(body).unwrap();

        assert_eq!(request.id, id);
        assert_eq!(request.fields.name, "Samarkand");
    }

    #[test]
    fn test_update_request_requires_id() {
        let body = json!({ "name": "Samarkand" });

        assert!(serde_json::from_value::<UpdateRequest<CityRequest>>(body).is_err());
    }
}
