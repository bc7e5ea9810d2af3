//! Device code models for pairing Square Terminal devices.

use crate::clients::ErrorEntry;

model! {
    /// A code used to sign a device in to a seller account.
    pub struct DeviceCode / DeviceCodeBuilder {
        required {
            /// The product type the code is for, such as `TERMINAL_API`.
            product_type: String,
        }
        optional {
            id: String,
            /// An optional user-defined name for the device code.
            name: String,
            /// The unique code that can be used to log in.
            code: String,
            /// The unique ID of the device that used this code. Populated once paired.
            device_id: String,
            location_id: String,
            /// `UNKNOWN`, `UNPAIRED`, `PAIRED` or `EXPIRED`.
            status: String,
            pair_by: String,
            created_at: String,
            status_changed_at: String,
            paired_at: String,
        }
    }
}

model! {
    /// Query parameters for `ListDeviceCodes`.
    pub struct ListDeviceCodesRequest / ListDeviceCodesRequestBuilder {
        optional {
            cursor: String,
            location_id: String,
            product_type: String,
            /// Comma-separated statuses to include.
            status: String,
        }
    }
}

model! {
    /// A page of device codes.
    pub struct ListDeviceCodesResponse / ListDeviceCodesResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            device_codes: Vec<DeviceCode>,
            cursor: String,
        }
    }
}

model! {
    /// Creates a device code.
    pub struct CreateDeviceCodeRequest / CreateDeviceCodeRequestBuilder {
        required {
            idempotency_key: String,
            device_code: DeviceCode,
        }
    }
}

model! {
    /// The created device code.
    pub struct CreateDeviceCodeResponse / CreateDeviceCodeResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            device_code: DeviceCode,
        }
    }
}

model! {
    /// A single device code.
    pub struct GetDeviceCodeResponse / GetDeviceCodeResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            device_code: DeviceCode,
        }
    }
}
