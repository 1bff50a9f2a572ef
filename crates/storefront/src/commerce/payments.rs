//! Payment intent creation.

use herowear_core::{Amount, OrderId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{CommerceClient, RemoteCallFailure};

/// Stripe payment intent endpoint.
pub const STRIPE_PAYMENT_INTENT_PATH: &str = "/payment/stripe";

/// Body of a payment intent request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    /// Order total to charge.
    pub amount: Amount,
    /// Order the intent pays for.
    pub order_id: OrderId,
}

impl CommerceClient {
    /// Create a Stripe payment intent for an order.
    ///
    /// The returned payload normally carries the client secret the browser
    /// uses to confirm the payment with Stripe. No idempotency key is sent:
    /// calling this twice creates two intents.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallFailure`] on transport failure, a non-2xx status
    /// or an undecodable body. The failure has already been reported to the
    /// client's diagnostic sink.
    #[instrument(skip(self))]
    pub async fn create_stripe_payment_intent<R>(
        &self,
        amount: Amount,
        order_id: OrderId,
    ) -> Result<R, RemoteCallFailure>
    where
        R: DeserializeOwned,
    {
        let request = PaymentIntentRequest { amount, order_id };
        self.post(STRIPE_PAYMENT_INTENT_PATH, &request).await
    }
}
