use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::trace;

use crate::{
    data::models::{
        codes::define_str_code,
        utils::{decode, HmsModel},
    },
    errors::HmsIapError,
};

use super::canceled_purchase_model::CanceledPurchaseModel;

/// Response of the query for canceled or refunded purchases
/// (CanceledPurchaseList).
///
/// https://developer.huawei.com/consumer/en/doc/HMSCore-References-V5/api-cancel-or-refund-record-0000001050746117-V5
///
/// The list itself is sent as a JSON string containing a JSON array, and is
/// kept in that form here so that it re-encodes exactly. Use
/// `cancelled_purchases()` for the parsed records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanceledPurchaseListModel {
    /// Result code. Anything other than `ResponseCode::SUCCESS` is a failure:
    /// https://developer.huawei.com/consumer/en/doc/HMSCore-References-V5/server-error-code-0000001050166248-V5
    pub response_code: ResponseCode,
    pub response_message: Option<String>,
    /// JSON-encoded array of `CanceledPurchaseModel`.
    pub cancelled_purchase_list: Option<String>,
    /// Token to pass in the next query to fetch the next page. Only present if
    /// more results remain.
    pub continuation_token: Option<String>,
}

impl HmsModel for CanceledPurchaseListModel {
    const MODEL_NAME: &'static str = "CanceledPurchaseList";
}

impl CanceledPurchaseListModel {
    pub fn is_success(&self) -> bool {
        self.response_code == ResponseCode::SUCCESS
    }

    /// Whether another page can be requested with `continuation_token`.
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Parses the double-encoded `cancelled_purchase_list`. A missing or empty
    /// list yields no records.
    pub fn cancelled_purchases(&self) -> Result<Vec<CanceledPurchaseModel>, HmsIapError> {
        match self.cancelled_purchase_list.as_deref() {
            None => Ok(Vec::new()),
            Some(list) if list.trim().is_empty() => Ok(Vec::new()),
            Some(list) => decode(CanceledPurchaseModel::MODEL_NAME, list.as_bytes()),
        }
    }

    /// Replaces `cancelled_purchase_list` with the JSON encoding of
    /// `purchases`.
    pub fn set_cancelled_purchases(
        &mut self,
        purchases: &[CanceledPurchaseModel],
    ) -> Result<(), HmsIapError> {
        let list = serde_json::to_string(purchases).map_err(|e| HmsIapError::Serialize {
            model: CanceledPurchaseModel::MODEL_NAME,
            source: e,
        })?;
        trace!(count = purchases.len(), "encoded cancelled purchase list");
        self.cancelled_purchase_list = Some(list);
        Ok(())
    }
}

define_str_code!(
    /// Result code of an HMS IAP server API response. Only success is
    /// interpreted; other codes are carried as-is.
    ResponseCode {
        SUCCESS = "0",
    }
);

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::super::canceled_purchase_model::{CancelledReason, CancelledSource};
    use super::*;

    fn sample_purchase() -> CanceledPurchaseModel {
        CanceledPurchaseModel {
            order_id: "O1".to_string(),
            product_id: "P1".to_string(),
            purchase_token: "T1".to_string(),
            purchase_time: 1_600_000_000_000,
            cancelled_time: 1_600_000_100_000,
            cancelled_source: CancelledSource::BY_USER,
            cancelled_reason: CancelledReason::ACCIDENTAL,
        }
    }

    #[test]
    fn final_page_has_no_continuation() {
        let m = CanceledPurchaseListModel::from_json(r#"{"responseCode":"0"}"#).unwrap();
        assert!(m.is_success());
        assert!(!m.has_more());
        assert!(m.cancelled_purchases().unwrap().is_empty());
    }

    #[test]
    fn continuation_token_signals_more_pages() {
        let m = CanceledPurchaseListModel::from_json(
            r#"{"responseCode":"0","continuationToken":"next-page"}"#,
        )
        .unwrap();
        assert!(m.has_more());
        assert_eq!(m.continuation_token.as_deref(), Some("next-page"));
    }

    #[test]
    fn failure_code_is_carried_not_interpreted() {
        let m = CanceledPurchaseListModel::from_json(
            r#"{"responseCode":"6","responseMessage":"invalid param"}"#,
        )
        .unwrap();
        assert!(!m.is_success());
        assert_eq!(m.response_code.as_str(), "6");
        assert_eq!(m.response_message.as_deref(), Some("invalid param"));
    }

    #[test]
    fn inner_list_stays_double_encoded() {
        let mut m = CanceledPurchaseListModel {
            response_code: ResponseCode::SUCCESS,
            ..Default::default()
        };
        m.set_cancelled_purchases(&[sample_purchase()]).unwrap();

        let outer: Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();
        let inner = outer["cancelledPurchaseList"].as_str().unwrap();
        let inner: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(inner[0]["orderId"], json!("O1"));
        assert_eq!(inner[0]["cancelledReason"], json!(4));

        let decoded = CanceledPurchaseListModel::from_json(&outer.to_string()).unwrap();
        assert_eq!(decoded, m);
        assert_eq!(decoded.cancelled_purchases().unwrap(), vec![sample_purchase()]);
    }

    #[test]
    fn malformed_inner_list_is_a_parse_error() {
        let m = CanceledPurchaseListModel {
            response_code: ResponseCode::SUCCESS,
            cancelled_purchase_list: Some("[{\"orderId\":".to_string()),
            ..Default::default()
        };

        let err = m.cancelled_purchases().unwrap_err();
        assert!(matches!(err, HmsIapError::Parse { .. }));
        assert_eq!(err.model(), "CanceledPurchase");
    }
}
