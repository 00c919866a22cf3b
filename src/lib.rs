pub mod data {
    pub mod models {
        pub mod huawei_iap_server_api {
            pub mod canceled_purchase_list_model;
            pub mod canceled_purchase_model;
            pub mod in_app_purchase_data_model;
        }
        mod codes;
        pub mod utils;
    }
}

pub mod errors;

pub use data::models::{
    huawei_iap_server_api::{
        canceled_purchase_list_model::{CanceledPurchaseListModel, ResponseCode},
        canceled_purchase_model::{CanceledPurchaseModel, CancelledReason, CancelledSource},
        in_app_purchase_data_model::*,
    },
    utils::HmsModel,
};
pub use errors::HmsIapError;
