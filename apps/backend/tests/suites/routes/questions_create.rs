use actix_web::test;
use serde_json::{json, Value};

use crate::common::{assert_error_envelope, question_ids, read_success};
use crate::support::factory::{seed_many, GEOGRAPHY, SCIENCE};
use crate::support::{create_test_app, db_state};

fn valid_body() -> Value {
    json!({
        "question": "Which planet is known as the Red Planet?",
        "answer": "Mars",
        "category": SCIENCE,
        "difficulty": 2
    })
}

async fn total_questions(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> i64 {
    let resp = test::call_service(app, test::TestRequest::get().uri("/questions").to_request()).await;
    if resp.status().as_u16() == 404 {
        return 0;
    }
    read_success(resp).await["total_questions"]
        .as_i64()
        .expect("total_questions")
}

#[actix_web::test]
async fn create_assigns_increasing_ids_and_bumps_total() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    let existing = seed_many(&db, 3, GEOGRAPHY).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/questions")
            .set_json(valid_body())
            .to_request(),
    )
    .await;
    let first = read_success(resp).await;
    assert_eq!(first["total_questions"], 4);
    let first_id = first["created"].as_i64().expect("created id");
    assert!(existing.iter().all(|&id| (id as i64) < first_id));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/questions")
            .set_json(valid_body())
            .to_request(),
    )
    .await;
    let second = read_success(resp).await;
    assert_eq!(second["total_questions"], 5);
    assert!(second["created"].as_i64().expect("created id") > first_id);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
    let listing = read_success(resp).await;
    assert!(question_ids(&listing).contains(&first_id));
}

#[actix_web::test]
async fn numeric_strings_are_accepted_and_stored_as_integers() {
    let state = db_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let body = json!({
        "question": "Who painted the Mona Lisa?",
        "answer": "Leonardo da Vinci",
        "category": "2",
        "difficulty": "3"
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/questions").set_json(body).to_request(),
    )
    .await;
    read_success(resp).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
    let listing = read_success(resp).await;
    assert_eq!(listing["questions"][0]["category"], 2);
    assert_eq!(listing["questions"][0]["difficulty"], 3);
}

#[actix_web::test]
async fn missing_or_sentinel_fields_are_unprocessable() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    seed_many(&db, 2, SCIENCE).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    for field in ["question", "answer", "category", "difficulty"] {
        for replacement in [None, Some(Value::Null), Some(json!("")), Some(json!(" "))] {
            let mut body = valid_body();
            let obj = body.as_object_mut().expect("object body");
            match &replacement {
                None => {
                    obj.remove(field);
                }
                Some(v) => {
                    obj.insert(field.to_string(), v.clone());
                }
            }

            let resp = test::call_service(
                &app,
                test::TestRequest::post().uri("/questions").set_json(&body).to_request(),
            )
            .await;
            assert_error_envelope(resp, 422).await;
        }
    }

    assert_eq!(total_questions(&app).await, 2);
}

#[actix_web::test]
async fn invalid_values_are_unprocessable() {
    let state = db_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let cases = [
        ("difficulty", json!("hard")),
        ("difficulty", json!(9)),
        ("difficulty", json!(0)),
        ("category", json!(99)),
        ("category", json!("science")),
        ("question", json!(["not", "text"])),
    ];

    for (field, value) in cases {
        let mut body = valid_body();
        body[field] = value;
        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/questions").set_json(&body).to_request(),
        )
        .await;
        assert_error_envelope(resp, 422).await;
    }

    assert_eq!(total_questions(&app).await, 0);
}

#[actix_web::test]
async fn malformed_json_is_bad_request_and_wrong_shape_is_unprocessable() {
    let state = db_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/questions")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"question": "unterminated"#)
            .to_request(),
    )
    .await;
    assert_error_envelope(resp, 400).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!(["question", "answer"]))
            .to_request(),
    )
    .await;
    assert_error_envelope(resp, 422).await;
}
