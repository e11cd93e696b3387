use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use medconsult_api::{
    middleware::auth::{issue_token, JwtIdentityProvider},
    router, ApiState,
};
use medconsult_core::{models::doctor::Doctor, BookingService};
use medconsult_db::mock::InMemoryStore;
use mockable::Clock;

pub const TEST_SECRET: &str = "medconsult-test-secret";

/// Pins "now" so slot validity does not depend on the wall clock.
pub struct FixtureClock {
    local_now: DateTime<Local>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.local_now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local_now.with_timezone(&Utc)
    }
}

/// 2030-01-15 10:30 local time.
pub fn fixture_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2030, 1, 15, 10, 30, 0)
        .single()
        .expect("unambiguous fixture instant")
}

pub fn doctor(id: i64) -> Doctor {
    Doctor {
        id,
        name: format!("Dr. Fixture {id}"),
        crm: format!("CRM-SP {id:06}"),
        specialty: "General Practice".to_string(),
        email: Some(format!("doctor{id}@clinic.test")),
        phone: None,
    }
}

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub server: TestServer,
}

impl TestContext {
    /// A server backed by an in-memory store holding doctors 1 and 2.
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::with_doctors([doctor(1), doctor(2)]));
        let clock = Arc::new(FixtureClock {
            local_now: fixture_now(),
        });

        let state = ApiState {
            booking: BookingService::new(store.clone(), store.clone(), clock),
            identity: Arc::new(JwtIdentityProvider::new(TEST_SECRET)),
        };
        let server = TestServer::new(router(Arc::new(state))).expect("Failed to start test server");

        Self { store, server }
    }
}

/// `Authorization` header carrying a valid token for `user_id`.
pub fn bearer(user_id: i64) -> (HeaderName, HeaderValue) {
    let token = issue_token(TEST_SECRET, user_id, Duration::hours(1)).expect("Failed to sign token");
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value");
    (AUTHORIZATION, value)
}
