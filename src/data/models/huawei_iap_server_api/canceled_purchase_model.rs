use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::models::{
    codes::define_int_code,
    utils::{millis_to_utc, HmsModel},
};

/// A single canceled or refunded purchase, as listed in
/// `CanceledPurchaseListModel::cancelled_purchase_list`.
///
/// https://developer.huawei.com/consumer/en/doc/HMSCore-References-V5/api-cancel-or-refund-record-0000001050746117-V5
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanceledPurchaseModel {
    /// Unique order ID of a subscription or subscription renewal.
    pub order_id: String,
    pub product_id: String,
    pub purchase_token: String,
    /// Purchase time, in milliseconds since the Unix epoch.
    pub purchase_time: i64,
    /// Time of the cancellation or refund, in milliseconds since the Unix
    /// epoch.
    pub cancelled_time: i64,
    /// Initiator of the cancellation or refund.
    pub cancelled_source: CancelledSource,
    pub cancelled_reason: CancelledReason,
}

impl HmsModel for CanceledPurchaseModel {
    const MODEL_NAME: &'static str = "CanceledPurchase";
}

impl CanceledPurchaseModel {
    pub fn purchase_time_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.purchase_time)
    }

    pub fn cancelled_time_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.cancelled_time)
    }
}

define_int_code!(
    CancelledSource {
        BY_USER = 0,
        BY_DEVELOPER = 1,
        BY_HUAWEI = 2,
    }
);

define_int_code!(
    CancelledReason {
        OTHER = 0,
        USER_REPENTANCE = 1,
        PRODUCT_NOT_PROVIDED = 2,
        /// Abnormal app service.
        ABNORMAL = 3,
        ACCIDENTAL = 4,
        FRAUD = 5,
        CHARGEBACK = 6,
        UPGRADE_OR_DOWNGRADE = 7,
        /// The user's service area changed.
        SERVICE_AREA_CHANGED = 8,
    }
);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn decodes_refund_record() {
        let payload = json!({
            "orderId": "202101011200001",
            "productId": "premium_monthly",
            "purchaseToken": "00000173a6b9",
            "purchaseTime": 1_609_459_200_000_i64,
            "cancelledTime": 1_609_545_600_000_i64,
            "cancelledSource": 2,
            "cancelledReason": 6
        });

        let m = CanceledPurchaseModel::from_json(&payload.to_string()).unwrap();
        assert_eq!(m.order_id, "202101011200001");
        assert_eq!(m.purchase_time, 1_609_459_200_000);
        assert_eq!(
            m.cancelled_time_utc(),
            Some(Utc.timestamp_millis_opt(1_609_545_600_000).unwrap())
        );
        assert_eq!(m.cancelled_source, CancelledSource::BY_HUAWEI);
        assert_eq!(m.cancelled_reason, CancelledReason::CHARGEBACK);

        let reencoded: Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();
        assert_eq!(reencoded, payload);
    }

    #[test]
    fn missing_cancelled_time_is_rejected() {
        let payload = json!({
            "orderId": "O1",
            "productId": "P1",
            "purchaseToken": "T1",
            "purchaseTime": 1_609_459_200_000_i64,
            "cancelledSource": 0,
            "cancelledReason": 1
        });

        let err = CanceledPurchaseModel::from_json(&payload.to_string()).unwrap_err();
        assert!(err.to_string().contains("cancelledTime"), "{err}");
    }

    #[test]
    fn out_of_range_required_timestamp_is_kept_verbatim() {
        let payload = json!({
            "orderId": "O1",
            "productId": "P1",
            "purchaseToken": "T1",
            "purchaseTime": 1_609_459_200_000_i64,
            "cancelledTime": i64::MAX,
            "cancelledSource": 1,
            "cancelledReason": 0
        });

        let m = CanceledPurchaseModel::from_json(&payload.to_string()).unwrap();
        assert_eq!(m.cancelled_time, i64::MAX);
        assert_eq!(m.cancelled_time_utc(), None);

        let reencoded: Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();
        assert_eq!(reencoded, payload);
    }

    #[test]
    fn undocumented_reason_is_preserved() {
        let payload = json!({
            "orderId": "O1",
            "productId": "P1",
            "purchaseToken": "T1",
            "purchaseTime": 1,
            "cancelledTime": 2,
            "cancelledSource": 0,
            "cancelledReason": 99
        });

        let m = CanceledPurchaseModel::from_json(&payload.to_string()).unwrap();
        assert_eq!(m.cancelled_reason.value(), 99);
        assert_eq!(m.purchase_time_utc(), Some(Utc.timestamp_millis_opt(1).unwrap()));
        assert!(!m.cancelled_reason.is_known());
        assert!(m.cancelled_source.is_known());
    }
}
