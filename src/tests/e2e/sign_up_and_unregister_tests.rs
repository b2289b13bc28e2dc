use crate::shared::infrastructure::activity_store::in_memory::InMemoryActivityRegistry;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    registry: Arc<InMemoryActivityRegistry>,
    router: Router,
}

impl TestApp {
    async fn call(&self, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn sign_up(&self, activity: &str, email: &str) -> StatusCode {
        self.call(
            Method::POST,
            &format!("/activities/{activity}/signup?email={email}"),
        )
        .await
        .0
    }

    async fn unregister(&self, activity: &str, email: &str) -> StatusCode {
        self.call(
            Method::DELETE,
            &format!("/activities/{activity}/unregister?email={email}"),
        )
        .await
        .0
    }

    async fn activities(&self) -> serde_json::Value {
        self.call(Method::GET, "/activities").await.1
    }

    async fn participants(&self, activity: &str) -> Vec<String> {
        serde_json::from_value(self.activities().await[activity]["participants"].clone()).unwrap()
    }
}

#[fixture]
fn test_app() -> TestApp {
    let registry = Arc::new(InMemoryActivityRegistry::seeded());
    let router = router(AppState::in_memory(registry.clone()), "static");
    TestApp { registry, router }
}

#[rstest]
#[tokio::test]
async fn sign_up_shows_the_new_participant_in_the_listing(test_app: TestApp) {
    let status = test_app
        .sign_up("Basketball", "newstudent@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);

    let participants = test_app.participants("Basketball").await;
    assert_eq!(
        participants,
        vec!["alex@mergington.edu", "newstudent@mergington.edu"]
    );
}

#[rstest]
#[tokio::test]
async fn two_students_sign_up_for_the_same_activity_independently(test_app: TestApp) {
    test_app
        .sign_up("Basketball", "student1@mergington.edu")
        .await;
    test_app
        .sign_up("Basketball", "student2@mergington.edu")
        .await;

    let participants = test_app.participants("Basketball").await;
    assert!(participants.contains(&"student1@mergington.edu".to_string()));
    assert!(participants.contains(&"student2@mergington.edu".to_string()));
}

#[rstest]
#[tokio::test]
async fn unregister_leaves_the_other_participants_untouched(test_app: TestApp) {
    let initial = test_app.participants("Debate Team").await;

    let status = test_app
        .unregister("Debate%20Team", "sarah@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);

    let participants = test_app.participants("Debate Team").await;
    assert_eq!(participants.len(), initial.len() - 1);
    assert_eq!(participants, vec!["james@mergington.edu"]);
}

#[rstest]
#[tokio::test]
async fn sign_up_then_unregister_restores_the_roster(test_app: TestApp) {
    let initial = test_app.participants("Tennis Club").await;

    test_app
        .sign_up("Tennis%20Club", "newstudent@mergington.edu")
        .await;
    assert!(
        test_app
            .participants("Tennis Club")
            .await
            .contains(&"newstudent@mergington.edu".to_string())
    );

    test_app
        .unregister("Tennis%20Club", "newstudent@mergington.edu")
        .await;
    assert_eq!(test_app.participants("Tennis Club").await, initial);
    assert_eq!(initial, vec!["lucas@mergington.edu"]);
}

#[rstest]
#[tokio::test]
async fn sign_up_many_then_unregister_one(test_app: TestApp) {
    test_app
        .sign_up("Chess%20Club", "student1@mergington.edu")
        .await;
    test_app
        .sign_up("Chess%20Club", "student2@mergington.edu")
        .await;
    let before = test_app.participants("Chess Club").await;

    test_app
        .unregister("Chess%20Club", "student1@mergington.edu")
        .await;

    let after = test_app.participants("Chess Club").await;
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(
        after,
        vec![
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "student2@mergington.edu",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn rejected_requests_leave_the_registry_unchanged(test_app: TestApp) {
    let before = test_app.activities().await;

    assert_eq!(
        test_app.sign_up("Basketball", "alex@mergington.edu").await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        test_app
            .unregister("Basketball", "notregistered@mergington.edu")
            .await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        test_app
            .sign_up("Underwater%20Basket%20Weaving", "student@mergington.edu")
            .await,
        StatusCode::NOT_FOUND
    );

    assert_eq!(test_app.activities().await, before);
}

#[rstest]
#[tokio::test]
async fn no_roster_ever_holds_a_duplicate(test_app: TestApp) {
    let steps = [
        ("sign_up", "Gym%20Class", "john@mergington.edu"),
        ("sign_up", "Gym%20Class", "newstudent@mergington.edu"),
        ("sign_up", "Gym%20Class", "newstudent@mergington.edu"),
        ("unregister", "Gym%20Class", "john@mergington.edu"),
        ("sign_up", "Gym%20Class", "john@mergington.edu"),
        ("sign_up", "Gym%20Class", "john@mergington.edu"),
        ("unregister", "Gym%20Class", "olivia@mergington.edu"),
        ("unregister", "Gym%20Class", "olivia@mergington.edu"),
    ];
    for (action, activity, email) in steps {
        match action {
            "sign_up" => test_app.sign_up(activity, email).await,
            _ => test_app.unregister(activity, email).await,
        };
    }

    for (name, activity) in test_app.activities().await.as_object().unwrap() {
        let participants: Vec<String> =
            serde_json::from_value(activity["participants"].clone()).unwrap();
        let unique: HashSet<&String> = participants.iter().collect();
        assert_eq!(unique.len(), participants.len(), "{name} has duplicates");
    }
    assert_eq!(
        test_app.participants("Gym Class").await,
        vec!["newstudent@mergington.edu", "john@mergington.edu"]
    );
}

#[rstest]
#[tokio::test]
async fn reset_restores_the_seed_set(test_app: TestApp) {
    let seeded = test_app.activities().await;
    test_app
        .sign_up("Basketball", "newstudent@mergington.edu")
        .await;
    test_app
        .unregister("Drama%20Club", "maya@mergington.edu")
        .await;
    assert_ne!(test_app.activities().await, seeded);

    test_app.registry.reset().await;

    assert_eq!(test_app.activities().await, seeded);
}
