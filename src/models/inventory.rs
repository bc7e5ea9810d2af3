//! Inventory adjustment models.

use super::Money;
use crate::clients::ErrorEntry;

model! {
    /// Groups adjustments that were made together.
    pub struct InventoryAdjustmentGroup / InventoryAdjustmentGroupBuilder {
        optional {
            id: String,
            /// The inventory adjustment of the composed variation.
            root_adjustment_id: String,
            from_state: String,
            to_state: String,
        }
    }
}

model! {
    /// A change in the quantity of an item variation from one state to another.
    pub struct InventoryAdjustment / InventoryAdjustmentBuilder {
        optional {
            id: String,
            reference_id: String,
            from_state: String,
            to_state: String,
            location_id: String,
            catalog_object_id: String,
            catalog_object_type: String,
            /// Decimal quantity as a string, such as `"2.5"`.
            quantity: String,
            total_price_money: Money,
            occurred_at: String,
            created_at: String,
            team_member_id: String,
            transaction_id: String,
            refund_id: String,
            purchase_order_id: String,
            goods_receipt_id: String,
            adjustment_group: InventoryAdjustmentGroup,
        }
    }
}

model! {
    /// A single inventory adjustment.
    pub struct RetrieveInventoryAdjustmentResponse / RetrieveInventoryAdjustmentResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            adjustment: InventoryAdjustment,
        }
    }
}
