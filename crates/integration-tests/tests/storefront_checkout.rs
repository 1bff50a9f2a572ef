//! Checkout API proxying against a mock commerce API.

#![allow(clippy::unwrap_used)]

use herowear_core::{Amount, CouponCode};
use herowear_integration_tests::TestContext;
use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_coupon_verification_round_trip() {
    let ctx = TestContext::new().await;
    let payload = json!({"valid": true, "discountAmount": 15});
    let mock = ctx
        .commerce
        .mock_async(|when, then| {
            when.method(POST)
                .path("/coupons/verify")
                .json_body(json!({"code": "HERO15", "amount": 120}));
            then.status(200).json_body(payload.clone());
        })
        .await;

    let resp = ctx
        .client
        .post(ctx.url("/api/coupons/verify"))
        .json(&json!({"code": CouponCode::new("HERO15"), "amount": Amount::from(120_u32)}))
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), payload);
}

#[tokio::test]
async fn test_payment_intent_round_trip() {
    let ctx = TestContext::new().await;
    let payload = json!({"clientSecret": "pi_123_secret_456"});
    let mock = ctx
        .commerce
        .mock_async(|when, then| {
            when.method(POST)
                .path("/payment/stripe")
                .json_body(json!({"amount": 500, "orderId": "order-123"}));
            then.status(200).json_body(payload.clone());
        })
        .await;

    let resp = ctx
        .client
        .post(ctx.url("/api/payments/stripe"))
        .json(&json!({"amount": 500, "orderId": "order-123"}))
        .send()
        .await
        .unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(resp.json::<Value>().await.unwrap(), payload);
}

#[tokio::test]
async fn test_commerce_rejection_status_is_preserved() {
    let ctx = TestContext::new().await;
    ctx.commerce
        .mock_async(|when, then| {
            when.method(POST).path("/coupons/verify");
            then.status(404).body("unknown coupon");
        })
        .await;

    let resp = ctx
        .client
        .post(ctx.url("/api/coupons/verify"))
        .json(&json!({"code": "NOPE", "amount": 10}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_commerce_auth_failure_is_bad_gateway() {
    let ctx = TestContext::new().await;
    ctx.commerce
        .mock_async(|when, then| {
            when.method(POST).path("/coupons/verify");
            then.status(401).body("missing bearer token");
        })
        .await;

    let resp = ctx
        .client
        .post(ctx.url("/api/coupons/verify"))
        .json(&json!({"code": "HERO15", "amount": 120}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(resp.text().await.unwrap(), "External service error");
}

#[tokio::test]
async fn test_commerce_outage_is_bad_gateway() {
    let ctx = TestContext::new().await;
    ctx.commerce
        .mock_async(|when, then| {
            when.method(POST).path("/payment/stripe");
            then.status(503);
        })
        .await;

    let resp = ctx
        .client
        .post(ctx.url("/api/payments/stripe"))
        .json(&json!({"amount": 25, "orderId": "order-7"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
