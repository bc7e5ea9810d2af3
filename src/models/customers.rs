//! Customer search models.

use super::{Address, TimeRange};
use crate::clients::ErrorEntry;

model! {
    /// Filters customers by the source that created them.
    pub struct CustomerCreationSourceFilter / CustomerCreationSourceFilterBuilder {
        optional {
            /// Creation sources such as `DIRECTORY` or `THIRD_PARTY`.
            values: Vec<String>,
            /// `INCLUDE` or `EXCLUDE`.
            rule: String,
        }
    }
}

model! {
    /// Matches a text attribute exactly or fuzzily. Set only one of the fields.
    pub struct CustomerTextFilter / CustomerTextFilterBuilder {
        optional {
            exact: String,
            fuzzy: String,
        }
    }
}

model! {
    /// Matches a set-valued attribute.
    pub struct FilterValue / FilterValueBuilder {
        optional {
            all: Vec<String>,
            any: Vec<String>,
            none: Vec<String>,
        }
    }
}

model! {
    /// Filtering criteria for a customer search. Criteria are combined with AND.
    pub struct CustomerFilter / CustomerFilterBuilder {
        optional {
            creation_source: CustomerCreationSourceFilter,
            created_at: TimeRange,
            updated_at: TimeRange,
            email_address: CustomerTextFilter,
            phone_number: CustomerTextFilter,
            reference_id: CustomerTextFilter,
            group_ids: FilterValue,
        }
    }
}

model! {
    /// Sort order for a customer search.
    pub struct CustomerSort / CustomerSortBuilder {
        optional {
            /// `DEFAULT` or `CREATED_AT`.
            field: String,
            /// `ASC` or `DESC`.
            order: String,
        }
    }
}

model! {
    /// Filtering and sorting criteria for a customer search.
    pub struct CustomerQuery / CustomerQueryBuilder {
        optional {
            filter: CustomerFilter,
            sort: CustomerSort,
        }
    }
}

model! {
    /// Searches the customer profiles of a business.
    pub struct SearchCustomersRequest / SearchCustomersRequestBuilder {
        optional {
            cursor: String,
            /// Between 1 and 100.
            limit: i64,
            query: CustomerQuery,
            /// When `true`, the response includes the total number of matches.
            count: bool,
        }
    }
}

model! {
    /// A customer profile.
    pub struct Customer / CustomerBuilder {
        optional {
            id: String,
            created_at: String,
            updated_at: String,
            given_name: String,
            family_name: String,
            nickname: String,
            company_name: String,
            email_address: String,
            address: Address,
            phone_number: String,
            birthday: String,
            reference_id: String,
            note: String,
            version: i64,
            creation_source: String,
            group_ids: Vec<String>,
            segment_ids: Vec<String>,
        }
    }
}

model! {
    /// Customers matching a search.
    pub struct SearchCustomersResponse / SearchCustomersResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            customers: Vec<Customer>,
            cursor: String,
            count: i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_customers_request_nests_filter() {
        let request = SearchCustomersRequest::builder()
            .limit(2_i64)
            .query(
                CustomerQuery::builder()
                    .filter(
                        CustomerFilter::builder()
                            .email_address(CustomerTextFilter::builder().fuzzy("example.com").build().unwrap())
                            .group_ids(FilterValue::builder().all(vec!["G1".to_string()]).build().unwrap())
                            .build()
                            .unwrap(),
                    )
                    .sort(CustomerSort::builder().field("CREATED_AT").order("ASC").build().unwrap())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "limit": 2,
                "query": {
                    "filter": {
                        "email_address": {"fuzzy": "example.com"},
                        "group_ids": {"all": ["G1"]}
                    },
                    "sort": {"field": "CREATED_AT", "order": "ASC"}
                }
            })
        );
    }
}
