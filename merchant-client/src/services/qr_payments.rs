//! QR-code payments

use shared::models::{QrPayment, QrPaymentCreate};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const QR_PAYMENTS: &str = "api/qr-payments";

#[derive(Debug, Clone)]
pub struct QrPaymentsService<C> {
    http: C,
}

impl<C: HttpClient> QrPaymentsService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Generate a QR payment request for an outlet
    pub async fn create(&self, payload: &QrPaymentCreate) -> ClientResult<QrPayment> {
        self.http.post(QR_PAYMENTS, payload).await
    }

    /// Poll the current state of a QR payment
    pub async fn status(&self, id: &str) -> ClientResult<QrPayment> {
        self.http
            .get(&format!("{QR_PAYMENTS}/{}", encode(id)))
            .await
    }

    pub async fn cancel(&self, id: &str) -> ClientResult<QrPayment> {
        self.http
            .post(&format!("{QR_PAYMENTS}/{}/cancel", encode(id)), &serde_json::json!({}))
            .await
    }
}
