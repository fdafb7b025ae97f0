use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use smart4edu::{names, router, AppState};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(false))
}

async fn send(app: &Router, method: Method, uri: &str, cookies: &str, form: Option<&str>) -> Response<Body> {
    let mut req = Request::builder().method(method).uri(uri);
    if !cookies.is_empty() {
        req = req.header(header::COOKIE, cookies);
    }
    let body = match form {
        Some(form) => {
            req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

async fn get(app: &Router, uri: &str, cookies: &str) -> Response<Body> {
    send(app, Method::GET, uri, cookies, None).await
}

async fn post(app: &Router, uri: &str, cookies: &str) -> Response<Body> {
    send(app, Method::POST, uri, cookies, Some("")).await
}

fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .expect("location should be ascii")
}

/// The `name=value` pair of the cookie set by the response.
fn cookie_pair(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .expect("cookie should be ascii")
        .split(';')
        .next()
        .expect("cookie should have a name=value part")
        .to_string()
}

async fn body_string(resp: Response<Body>) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

const USER: &str = "user_session=ana";

#[tokio::test]
async fn pages_redirect_to_login_without_a_user_cookie() {
    let app = app();

    for uri in ["/", "/practice", "/calm", "/chat", "/progress", "/settings"] {
        let resp = get(&app, uri, "").await;
        assert_eq!(
            resp.status(),
            StatusCode::SEE_OTHER,
            "expected a redirect for {uri}"
        );
        assert_eq!(location(&resp), names::LOGIN_URL, "for {uri}");
    }
}

#[tokio::test]
async fn login_with_empty_fields_rerenders_the_form_with_an_error() {
    let app = app();

    let resp = send(
        &app,
        Method::POST,
        names::LOGIN_URL,
        "",
        Some("username=++&password="),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let body = body_string(resp).await;
    assert!(body.contains("Te rugăm să introduci utilizatorul și parola."));
}

#[tokio::test]
async fn login_stores_the_username_and_redirects_home() {
    let app = app();

    let resp = send(
        &app,
        Method::POST,
        names::LOGIN_URL,
        "",
        Some("username=ana&password=oricare"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), names::HOME_URL);
    assert_eq!(cookie_pair(&resp), "user_session=ana");

    let resp = get(&app, names::HOME_URL, USER).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Salut, ana!"));
}

#[tokio::test]
async fn logout_clears_the_user_cookie() {
    let app = app();

    let resp = post(&app, names::LOGOUT_URL, USER).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), names::LOGIN_URL);
    assert_eq!(cookie_pair(&resp), "user_session=");
}

#[tokio::test]
async fn locale_switch_flips_between_the_two_languages() {
    let app = app();

    let resp = post(&app, names::SET_LOCALE_URL, USER).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(cookie_pair(&resp), "lang=en");

    let resp = post(&app, names::SET_LOCALE_URL, "user_session=ana; lang=en").await;
    assert_eq!(cookie_pair(&resp), "lang=ro");

    // The page itself renders in the persisted language.
    let resp = get(&app, names::HOME_URL, "user_session=ana; lang=en").await;
    let body = body_string(resp).await;
    assert!(body.contains(r#"lang="en""#));
}

#[tokio::test]
async fn theme_toggle_flips_the_dark_flag() {
    let app = app();

    let resp = post(&app, names::TOGGLE_THEME_URL, USER).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(cookie_pair(&resp), "dark_theme=true");

    let resp = post(&app, names::TOGGLE_THEME_URL, "user_session=ana; dark_theme=true").await;
    assert_eq!(cookie_pair(&resp), "dark_theme=false");

    let resp = get(&app, names::HOME_URL, "user_session=ana; dark_theme=true").await;
    let body = body_string(resp).await;
    assert!(body.contains(r#"data-theme="dark""#));
}

#[tokio::test]
async fn a_full_quiz_round_trip_over_percent_encoded_routes() {
    let app = app();

    // "Matematică" / "Fracții", as the topic page's form encodes them.
    let resp = post(
        &app,
        "/practice/Matematic%C4%83/Frac%C8%9Bii/quiz",
        USER,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), names::QUIZ_URL);
    let quiz_cookie = cookie_pair(&resp);
    assert!(quiz_cookie.starts_with("quiz_session="));
    let cookies = format!("{USER}; {quiz_cookie}");

    let body = body_string(get(&app, names::QUIZ_URL, &cookies).await).await;
    assert!(body.contains("Întrebarea 1"));
    assert!(body.contains("(72 - 8·7):4 + 6 ="));

    // Checking before selecting is rejected.
    let resp = post(&app, names::QUIZ_CHECK_URL, &cookies).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = post(&app, "/quiz/select/2", &cookies).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = post(&app, names::QUIZ_CHECK_URL, &cookies).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = body_string(get(&app, names::QUIZ_URL, &cookies).await).await;
    assert!(body.contains("Corect"));
    assert!(body.contains("72-56=16; 16:4=4; 4+6=10."));

    let resp = post(&app, names::QUIZ_ADVANCE_URL, &cookies).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(get(&app, names::QUIZ_URL, &cookies).await).await;
    assert!(body.contains("Întrebarea 2"));
}

#[tokio::test]
async fn a_select_out_of_range_is_a_bad_request() {
    let app = app();

    let resp = post(&app, "/practice/Matematic%C4%83/Ecua%C8%9Bii/quiz", USER).await;
    let cookies = format!("{USER}; {}", cookie_pair(&resp));

    let resp = post(&app, "/quiz/select/9", &cookies).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_intents_without_an_active_quiz_are_bad_requests() {
    let app = app();

    for uri in [
        names::QUIZ_CHECK_URL,
        names::QUIZ_ADVANCE_URL,
        names::QUIZ_RETRY_URL,
        "/quiz/select/0",
    ] {
        let resp = post(&app, uri, USER).await;
        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "expected BAD_REQUEST for {uri}"
        );
    }

    // Without a session the quiz page just sends the user back to practice.
    let resp = get(&app, names::QUIZ_URL, USER).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), names::PRACTICE_URL);
}

#[tokio::test]
async fn an_unknown_subject_renders_the_no_quiz_page() {
    let app = app();

    let resp = post(&app, "/practice/Fizic%C4%83/Optic%C4%83/quiz", USER).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookies = format!("{USER}; {}", cookie_pair(&resp));

    let body = body_string(get(&app, names::QUIZ_URL, &cookies).await).await;
    assert!(body.contains("Nu există încă un test"));
}

#[tokio::test]
async fn abandoning_a_quiz_returns_to_its_topic_page_and_drops_the_session() {
    let app = app();

    let resp = post(&app, "/practice/Matematic%C4%83/Frac%C8%9Bii/quiz", USER).await;
    let quiz_cookie = cookie_pair(&resp);
    let cookies = format!("{USER}; {quiz_cookie}");

    let resp = post(&app, names::QUIZ_ABANDON_URL, &cookies).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/practice/Matematic%C4%83/Frac%C8%9Bii");
    assert!(cookie_pair(&resp).starts_with("quiz_session="));

    // The session is gone even if the stale cookie is still sent.
    let resp = get(&app, names::QUIZ_URL, &cookies).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), names::PRACTICE_URL);
}

#[tokio::test]
async fn restarting_a_quiz_drops_the_previous_session_from_the_store() {
    let state = AppState::new(false);
    let app = router(state.clone());

    let resp = post(&app, "/practice/Matematic%C4%83/Frac%C8%9Bii/quiz", USER).await;
    let first = cookie_pair(&resp);
    let first_token = first
        .strip_prefix("quiz_session=")
        .expect("quiz cookie should be set")
        .to_string();
    assert!(state.sessions.snapshot(&first_token).is_some());

    // Starting another quiz while the old cookie is still around must not
    // leave the old entry behind in the store.
    let cookies = format!("{USER}; {first}");
    let resp = post(&app, "/practice/Limba%20rom%C3%A2n%C4%83/Rezumat/quiz", &cookies).await;
    let second_token = cookie_pair(&resp)
        .strip_prefix("quiz_session=")
        .expect("quiz cookie should be set")
        .to_string();

    assert!(state.sessions.snapshot(&first_token).is_none());
    assert!(state.sessions.snapshot(&second_token).is_some());
    assert_eq!(
        state.sessions.snapshot(&second_token).unwrap().subject(),
        "Limba română"
    );
}

#[tokio::test]
async fn retry_resets_a_finished_quiz_to_its_first_question() {
    let app = app();

    let resp = post(&app, "/practice/Fizic%C4%83/Optic%C4%83/quiz", USER).await;
    let cookies = format!("{USER}; {}", cookie_pair(&resp));

    // The empty quiz is complete from the start, so retry is valid.
    let resp = post(&app, names::QUIZ_RETRY_URL, &cookies).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), names::QUIZ_URL);
}

#[tokio::test]
async fn static_assets_are_served_with_a_content_type() {
    let app = app();

    let resp = get(&app, "/static/index.css", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .expect("css should have a content type"),
        "text/css"
    );

    let resp = get(&app, "/static/missing.css", "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
