//! Coupon verification.

use herowear_core::{Amount, CouponCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{CommerceClient, RemoteCallFailure};

/// Coupon verification endpoint.
pub const VERIFY_COUPON_PATH: &str = "/coupons/verify";

/// Body of a coupon verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponVerificationRequest {
    /// Code the customer entered.
    pub code: CouponCode,
    /// Order amount the coupon would apply to.
    pub amount: Amount,
}

impl CommerceClient {
    /// Ask the commerce API whether `code` applies to an order of `amount`.
    ///
    /// The response (validity, discount, applicability) is returned exactly
    /// as the API sent it, decoded into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallFailure`] on transport failure, a non-2xx status
    /// or an undecodable body. The failure has already been reported to the
    /// client's diagnostic sink.
    #[instrument(skip(self))]
    pub async fn verify_coupon<R>(
        &self,
        code: CouponCode,
        amount: Amount,
    ) -> Result<R, RemoteCallFailure>
    where
        R: DeserializeOwned,
    {
        let request = CouponVerificationRequest { code, amount };
        self.post(VERIFY_COUPON_PATH, &request).await
    }
}
