//! Order models.

use std::collections::BTreeMap;

use super::Money;
use crate::clients::ErrorEntry;

model! {
    /// A modifier applied to a line item.
    pub struct OrderLineItemModifier / OrderLineItemModifierBuilder {
        optional {
            uid: String,
            catalog_object_id: String,
            catalog_version: i64,
            name: String,
            /// Decimal quantity as a string. Defaults to `"1"`.
            quantity: String,
            base_price_money: Money,
            total_price_money: Money,
            /// Application-defined key-value pairs.
            metadata: BTreeMap<String, String>,
        }
    }
}

model! {
    /// A line item in an order.
    pub struct OrderLineItem / OrderLineItemBuilder {
        required {
            /// Decimal quantity as a string, such as `"1"` or `"0.5"`.
            quantity: String,
        }
        optional {
            uid: String,
            name: String,
            catalog_object_id: String,
            catalog_version: i64,
            variation_name: String,
            item_type: String,
            note: String,
            modifiers: Vec<OrderLineItemModifier>,
            base_price_money: Money,
            variation_total_price_money: Money,
            gross_sales_money: Money,
            total_tax_money: Money,
            total_discount_money: Money,
            total_money: Money,
            metadata: BTreeMap<String, String>,
        }
    }
}

model! {
    /// Curbside pickup details.
    pub struct OrderFulfillmentPickupDetailsCurbsidePickupDetails / OrderFulfillmentPickupDetailsCurbsidePickupDetailsBuilder {
        optional {
            /// Specific details for curbside pickup, such as parking number and vehicle model.
            curbside_details: String,
            buyer_arrived_at: String,
        }
    }
}

model! {
    /// The person receiving a fulfillment.
    pub struct OrderFulfillmentRecipient / OrderFulfillmentRecipientBuilder {
        optional {
            customer_id: String,
            display_name: String,
            email_address: String,
            phone_number: String,
        }
    }
}

model! {
    /// Details of a `PICKUP` fulfillment.
    pub struct OrderFulfillmentPickupDetails / OrderFulfillmentPickupDetailsBuilder {
        optional {
            recipient: OrderFulfillmentRecipient,
            expires_at: String,
            /// RFC 3339 duration after which an open fulfillment is completed automatically.
            auto_complete_duration: String,
            /// `SCHEDULED` or `ASAP`.
            schedule_type: String,
            pickup_at: String,
            pickup_window_duration: String,
            prep_time_duration: String,
            note: String,
            placed_at: String,
            accepted_at: String,
            rejected_at: String,
            ready_at: String,
            expired_at: String,
            picked_up_at: String,
            canceled_at: String,
            cancel_reason: String,
            is_curbside_pickup: bool,
            curbside_pickup_details: OrderFulfillmentPickupDetailsCurbsidePickupDetails,
        }
    }
}

model! {
    /// How an order is fulfilled.
    pub struct OrderFulfillment / OrderFulfillmentBuilder {
        optional {
            uid: String,
            /// `PICKUP`, `SHIPMENT` or `DELIVERY`.
            #[serde(rename = "type")]
            fulfillment_type: String,
            state: String,
            pickup_details: OrderFulfillmentPickupDetails,
            metadata: BTreeMap<String, String>,
        }
    }
}

model! {
    /// A purchase by a customer from a seller.
    pub struct Order / OrderBuilder {
        required {
            location_id: String,
        }
        optional {
            id: String,
            reference_id: String,
            customer_id: String,
            line_items: Vec<OrderLineItem>,
            fulfillments: Vec<OrderFulfillment>,
            metadata: BTreeMap<String, String>,
            created_at: String,
            updated_at: String,
            closed_at: String,
            /// `OPEN`, `COMPLETED`, `CANCELED` or `DRAFT`.
            state: String,
            /// Incremented on every update; required when updating an order.
            version: i64,
            total_money: Money,
            total_tax_money: Money,
            total_discount_money: Money,
            total_tip_money: Money,
            total_service_charge_money: Money,
            ticket_name: String,
        }
    }
}

model! {
    /// Creates an order.
    pub struct CreateOrderRequest / CreateOrderRequestBuilder {
        optional {
            order: Order,
            /// A value you specify that uniquely identifies this order among orders you have created.
            idempotency_key: String,
        }
    }
}

model! {
    /// The created order.
    pub struct CreateOrderResponse / CreateOrderResponseBuilder {
        optional {
            order: Order,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// Retrieves a set of orders by ID.
    pub struct BatchRetrieveOrdersRequest / BatchRetrieveOrdersRequestBuilder {
        required {
            /// At most 100 order IDs.
            order_ids: Vec<String>,
        }
        optional {
            location_id: String,
        }
    }
}

model! {
    /// The requested orders. Unknown IDs are skipped.
    pub struct BatchRetrieveOrdersResponse / BatchRetrieveOrdersResponseBuilder {
        optional {
            orders: Vec<Order>,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// Previews prices and totals for an order without creating it.
    pub struct CalculateOrderRequest / CalculateOrderRequestBuilder {
        required {
            order: Order,
        }
    }
}

model! {
    /// The calculated order.
    pub struct CalculateOrderResponse / CalculateOrderResponseBuilder {
        optional {
            order: Order,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// Creates a draft copy of an existing order.
    pub struct CloneOrderRequest / CloneOrderRequestBuilder {
        required {
            order_id: String,
        }
        optional {
            /// The version of the order to clone. Defaults to the latest.
            version: i64,
            idempotency_key: String,
        }
    }
}

model! {
    /// The cloned draft order.
    pub struct CloneOrderResponse / CloneOrderResponseBuilder {
        optional {
            order: Order,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// Filters orders by state.
    pub struct SearchOrdersStateFilter / SearchOrdersStateFilterBuilder {
        required {
            states: Vec<String>,
        }
    }
}

model! {
    /// Filters orders by customer.
    pub struct SearchOrdersCustomerFilter / SearchOrdersCustomerFilterBuilder {
        optional {
            customer_ids: Vec<String>,
        }
    }
}

model! {
    /// Filtering criteria for an order search.
    pub struct SearchOrdersFilter / SearchOrdersFilterBuilder {
        optional {
            state_filter: SearchOrdersStateFilter,
            customer_filter: SearchOrdersCustomerFilter,
        }
    }
}

model! {
    /// Sort order for an order search.
    pub struct SearchOrdersSort / SearchOrdersSortBuilder {
        required {
            /// `CREATED_AT`, `UPDATED_AT` or `CLOSED_AT`.
            sort_field: String,
        }
        optional {
            sort_order: String,
        }
    }
}

model! {
    /// Filtering and sorting criteria for an order search.
    pub struct SearchOrdersQuery / SearchOrdersQueryBuilder {
        optional {
            filter: SearchOrdersFilter,
            sort: SearchOrdersSort,
        }
    }
}

model! {
    /// Searches orders across locations.
    pub struct SearchOrdersRequest / SearchOrdersRequestBuilder {
        optional {
            location_ids: Vec<String>,
            cursor: String,
            query: SearchOrdersQuery,
            limit: i64,
            return_entries: bool,
        }
    }
}

model! {
    /// Orders matching a search.
    pub struct SearchOrdersResponse / SearchOrdersResponseBuilder {
        optional {
            orders: Vec<Order>,
            cursor: String,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// A single order.
    pub struct RetrieveOrderResponse / RetrieveOrderResponseBuilder {
        optional {
            order: Order,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// Updates an open or draft order.
    ///
    /// Fields set to `Nullable::Null` in the sparse `order` are not cleared;
    /// list them in `fields_to_clear` instead.
    pub struct UpdateOrderRequest / UpdateOrderRequestBuilder {
        optional {
            /// A sparse order containing only the fields to update and the current `version`.
            order: Order,
            /// Dot-notation paths of fields to clear, such as `line_items[uid].note`.
            fields_to_clear: Vec<String>,
            idempotency_key: String,
        }
    }
}

model! {
    /// The updated order.
    pub struct UpdateOrderResponse / UpdateOrderResponseBuilder {
        optional {
            order: Order,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// Pays for an order using approved payments.
    pub struct PayOrderRequest / PayOrderRequestBuilder {
        required {
            idempotency_key: String,
        }
        optional {
            order_version: i64,
            payment_ids: Vec<String>,
        }
    }
}

model! {
    /// The paid order.
    pub struct PayOrderResponse / PayOrderResponseBuilder {
        optional {
            order: Order,
            errors: Vec<ErrorEntry>,
        }
    }
}
