use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::data::models::{
    codes::{define_int_code, define_str_code},
    utils::{millis_to_utc, HmsModel},
};

/// Data structure returned by the HMS IAP server API when verifying an in-app
/// purchase or subscription (InAppPurchaseData).
///
/// https://developer.huawei.com/consumer/en/doc/HMSCore-References-V5/server-data-model-0000001050986133-V5
///
/// Fields that the API marks as optional are `None` when absent from the
/// payload, and are left out again when encoding. A value that is present but
/// zero, false or empty is kept as `Some(..)`.
///
/// Timestamps are kept as the raw milliseconds since the Unix epoch sent by
/// the provider; the `*_utc()` accessors convert them to `DateTime<Utc>`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppPurchaseDataModel {
    /// App ID.
    pub application_id: i64,
    /// For consumables or non-consumables, the value is always false. For
    /// subscriptions, true means the subscription is active and will be
    /// renewed automatically on the next renewal date. During a grace period
    /// the value stays true.
    #[serde(default)]
    pub auto_renewing: bool,
    /// Order ID, which uniquely identifies a transaction and is generated by
    /// the Huawei IAP server during payment.
    pub order_id: String,
    /// Product type.
    pub kind: PurchaseKind,
    /// App package name.
    pub package_name: Option<String>,
    /// Product ID. Each product must have a unique ID, which is maintained in
    /// the PMS or passed when the app initiates a purchase.
    pub product_id: String,
    /// Product name.
    pub product_name: Option<String>,
    /// Time of the purchase. Left empty if the purchase is not complete.
    pub purchase_time: Option<i64>,
    /// Transaction status.
    pub purchase_state: PurchaseState,
    /// Information stored on the merchant side, passed by the app when the
    /// payment API is called.
    pub developer_payload: Option<String>,
    /// Challenge defined when an app initiates a consumption request. Only
    /// exists for one-off products.
    pub developer_challenge: Option<String>,
    /// Consumption status. Only exists for one-off products.
    pub consumption_state: Option<ConsumptionState>,
    /// Purchase token, which uniquely identifies the mapping between a product
    /// and a user. It does not change when a subscription is renewed.
    ///
    /// The value is currently 92 characters long, but may grow; reserve 128
    /// characters when storing it.
    pub purchase_token: String,
    /// Purchase type. Not returned for formal (production) purchases, so
    /// `None` must not be read as sandbox.
    pub purchase_type: Option<PurchaseType>,
    /// Currency, following ISO 4217.
    pub currency: Option<String>,
    /// Actual price of the product multiplied by 100, e.g. 501 for 5.01.
    pub price: Option<i64>,
    /// Country or region code, following ISO 3166.
    pub country: Option<String>,
    /// Payment method.
    pub pay_type: Option<PayType>,
    /// Transaction order ID.
    pub pay_order_id: Option<String>,
    /// Account type.
    pub account_flag: Option<AccountFlag>,

    // The following fields are only returned for subscriptions.
    // ---
    /// Order ID generated by the Huawei IAP server during fee deduction for the
    /// previous renewal. Equal to `order_id` on the first purchase.
    #[serde(default)]
    pub last_order_id: String,
    /// ID of the subscription group to which the subscription belongs.
    pub product_group: Option<String>,
    /// Time of the first successful fee deduction.
    pub ori_purchase_time: Option<i64>,
    /// Subscription ID. Does not change when the subscription is renewed.
    pub subscription_id: Option<String>,
    /// Original subscription ID. If set, the current subscription was switched
    /// from the subscription with this ID.
    pub ori_subscription_id: Option<String>,
    /// Purchase quantity.
    pub quantity: Option<i64>,
    /// Days of paid subscription, excluding free trial and promotion periods.
    pub days_lasted: Option<i64>,
    /// Number of successful renewal periods, excluding promotion periods. If 0
    /// or absent, no renewal has been performed yet.
    pub num_of_periods: Option<i64>,
    /// Number of successful renewal periods with promotion.
    pub num_of_discount: Option<i64>,
    /// Subscription expiration time. For an automatic renewal receipt where
    /// the fee was deducted, this is the renewal or expiration date. A time in
    /// the past means the subscription has expired.
    pub expiration_date: Option<i64>,
    /// Reason why the subscription expired. If several apply, the smallest
    /// code wins.
    pub expiration_intent: Option<ExpirationIntent>,
    /// Whether the system is still trying to renew an expired subscription.
    pub retry_flag: Option<RetryFlag>,
    /// Whether the subscription is in a renewal period with promotion.
    pub introductory_flag: Option<IntroductoryFlag>,
    /// Whether the subscription is in a free trial period.
    pub trial_flag: Option<TrialFlag>,
    /// Time when the subscription was revoked: a refund was made and the
    /// service is unavailable immediately. A revoked receipt counts as an
    /// incomplete purchase.
    pub cancel_time: Option<i64>,
    /// Cause of subscription cancellation. If absent while `cancel_time` is
    /// set, the cancellation was caused by an operation such as an upgrade.
    pub cancel_reason: Option<CancelReason>,
    /// App information. Reserved.
    pub app_info: Option<String>,
    /// Whether the user has disabled subscription notifications.
    pub notify_closed: Option<NotifyClosed>,
    /// Renewal status. Valid for both active and expired subscriptions, but
    /// does not represent the subscription status itself.
    pub renew_status: Option<RenewStatus>,
    /// User opinion on a price increase of the product.
    pub price_consent_status: Option<PriceConsentStatus>,
    /// Price used upon the next renewal, provided alongside
    /// `price_consent_status`.
    pub renew_price: Option<i64>,
    /// True if the user has been charged, the product has not expired and no
    /// refund was made. Stays true after cancellation until expiry.
    #[serde(rename = "subIsvalid")]
    pub sub_is_valid: Option<bool>,
    /// Whether the settlement date is postponed.
    pub defer_flag: Option<DeferFlag>,
    /// Subscription cancellation initiator.
    pub cancel_way: Option<CancelWay>,
    /// Time at which renewal was set to stop in the future. The subscription
    /// stays valid until then and no refund is involved.
    pub cancellation_time: Option<i64>,
    /// Number of days the subscription relationship is retained after
    /// cancellation.
    pub cancelled_sub_keep_days: Option<i64>,
    /// Confirmation status: 0 for not confirmed, 1 for confirmed. If absent,
    /// no confirmation is required.
    pub confirmed: Option<i64>,
    /// Time when a paused subscription is resumed.
    pub resume_time: Option<i64>,
    /// Cancellation reason chosen by the user in the survey.
    pub survey_reason: Option<SurveyReason>,
    /// Free-text cancellation reason, set when `survey_reason` is `OTHERS`.
    pub survey_details: Option<String>,
    /// Time when the grace period of the subscription ends.
    pub grace_expiration_time: Option<i64>,
    // ---
}

impl HmsModel for InAppPurchaseDataModel {
    const MODEL_NAME: &'static str = "InAppPurchaseData";
}

impl InAppPurchaseDataModel {
    pub fn is_subscription(&self) -> bool {
        self.kind == PurchaseKind::SUBSCRIPTION
    }

    /// True only if the payload explicitly marks the purchase as made in the
    /// sandbox.
    pub fn is_sandbox(&self) -> bool {
        self.purchase_type == Some(PurchaseType::SANDBOX)
    }

    /// Price with the two implied decimal places restored, e.g. "5.01".
    pub fn price_decimal(&self) -> Option<String> {
        self.price.map(|price| {
            let sign = if price < 0 { "-" } else { "" };
            let abs = price.unsigned_abs();
            format!("{sign}{}.{:02}", abs / 100, abs % 100)
        })
    }

    pub fn purchase_time_utc(&self) -> Option<DateTime<Utc>> {
        self.purchase_time.and_then(millis_to_utc)
    }

    pub fn ori_purchase_time_utc(&self) -> Option<DateTime<Utc>> {
        self.ori_purchase_time.and_then(millis_to_utc)
    }

    pub fn expiration_date_utc(&self) -> Option<DateTime<Utc>> {
        self.expiration_date.and_then(millis_to_utc)
    }

    pub fn cancel_time_utc(&self) -> Option<DateTime<Utc>> {
        self.cancel_time.and_then(millis_to_utc)
    }

    pub fn cancellation_time_utc(&self) -> Option<DateTime<Utc>> {
        self.cancellation_time.and_then(millis_to_utc)
    }

    pub fn resume_time_utc(&self) -> Option<DateTime<Utc>> {
        self.resume_time.and_then(millis_to_utc)
    }

    pub fn grace_expiration_time_utc(&self) -> Option<DateTime<Utc>> {
        self.grace_expiration_time.and_then(millis_to_utc)
    }

    /// Looks up `country` as an ISO 3166-1 alpha-2 code.
    pub fn country_code(&self) -> Option<rust_iso3166::CountryCode> {
        self.country.as_deref().and_then(rust_iso3166::from_alpha2)
    }
}

define_int_code!(
    PurchaseKind {
        CONSUMABLE = 0,
        NON_CONSUMABLE = 1,
        SUBSCRIPTION = 2,
    }
);

define_int_code!(
    PurchaseState {
        INITIALIZED = -1,
        PURCHASED = 0,
        CANCELED = 1,
        REFUNDED = 2,
    }
);

define_int_code!(
    ConsumptionState {
        NOT_CONSUMED = 0,
        CONSUMED = 1,
    }
);

define_int_code!(
    /// Whether the product was purchased in the sandbox or during a promotion.
    PurchaseType {
        SANDBOX = 0,
        /// Currently unsupported by Huawei.
        PROMOTION = 1,
    }
);

define_str_code!(
    /// Payment method used for the purchase.
    ///
    /// https://developer.huawei.com/consumer/en/doc/HMSCore-References-V5/server-data-model-0000001050986133-V5#EN-US_TOPIC_0000001050986133__section135412662210
    PayType {
        HUAWEI_POINT = "0",
        CREDIT_CARD = "3",
        ALIPAY = "4",
        CARRIER_BILLING = "6",
        PAYPAL = "13",
        DEBIT_CARD = "16",
        WECHAT_PAY = "17",
        GIFT_CARD = "19",
        BALANCE = "20",
        HUAWEI_POINT_CARD = "21",
        WORLDPAY = "24",
        HUAWEI_PAY = "31",
        ANT_CREDIT_PAY = "32",
        M_PESA = "200",
    }
);

define_int_code!(
    /// https://developer.huawei.com/consumer/en/doc/HMSCore-References-V5/api-common-statement-0000001050986127-V5#EN-US_TOPIC_0000001050986127__section1741234185817
    AccountFlag {
        HUAWEI_ID = 0,
        APP_TOUCH = 1,
    }
);

define_int_code!(
    ExpirationIntent {
        CANCELED_BY_USER = 1,
        PRODUCT_UNAVAILABLE = 2,
        ABNORMAL_USER_SIGNING = 3,
        BILLING_ERROR = 4,
        PRICE_INCREASE_DISAGREED = 5,
        UNKNOWN_ERROR = 6,
    }
);

define_int_code!(
    RetryFlag {
        NO = 0,
        YES = 1,
    }
);

define_int_code!(
    IntroductoryFlag {
        NO = 0,
        YES = 1,
    }
);

define_int_code!(
    TrialFlag {
        NO = 0,
        YES = 1,
    }
);

define_int_code!(
    CancelReason {
        /// For example, the user purchased the subscription by mistake.
        OTHER = 0,
        /// The user encountered a problem within the app.
        USER_ISSUE = 1,
        UPGRADE_OR_CROSSGRADE = 2,
    }
);

define_int_code!(
    NotifyClosed {
        NO = 0,
        YES = 1,
    }
);

define_int_code!(
    RenewStatus {
        /// The user proactively canceled auto-renewal.
        CANCELED_BY_USER = 0,
        NORMAL = 1,
    }
);

define_int_code!(
    PriceConsentStatus {
        /// The user did not respond. The subscription ends without renewal
        /// once it expires.
        NO_RESPONSE = 0,
        AGREED = 1,
    }
);

define_int_code!(
    DeferFlag {
        YES = 1,
    }
);

define_int_code!(
    CancelWay {
        BY_USER = 0,
        BY_DEVELOPER = 1,
        BY_HUAWEI = 2,
    }
);

define_int_code!(
    SurveyReason {
        OTHERS = 0,
        TOO_HIGH_FEE = 1,
        /// For example, the product was not provided.
        TECHNICAL_PROBLEM = 2,
        /// The user is in the blocklist because of fraud.
        FRAUD = 5,
        SUBSCRIPTION_SWITCHOVER = 7,
        RARELY_USED = 9,
        BETTER_APP = 10,
    }
);
