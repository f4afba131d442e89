//! Behavioural tests for loading and rotating the review carousel.

use review_carousel::tui::components::{
    CarouselComponent, CarouselViewContext, DEFAULT_AVATAR_SERVICE, EMPTY_PLACEHOLDER,
};
use review_carousel::{FetchError, HttpReviewGateway, LoadOutcome, ReviewStore};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REVIEWS_PATH: &str = "/api/v1/course/getReviews";

/// Shared runtime wrapper that can be stored in rstest-bdd Slot.
#[derive(Clone)]
struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
struct CarouselState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    store: Slot<ReviewStore>,
}

#[fixture]
fn carousel_state() -> CarouselState {
    CarouselState::default()
}

fn scenario_error(message: impl Into<String>) -> FetchError {
    FetchError::Client {
        message: message.into(),
    }
}

/// Ensures the runtime and server are initialised in `CarouselState`.
fn ensure_runtime_and_server(carousel_state: &CarouselState) -> Result<SharedRuntime, FetchError> {
    if carousel_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .map_err(|error| scenario_error(format!("failed to create Tokio runtime: {error}")))?;
        carousel_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = carousel_state
        .runtime
        .get()
        .ok_or_else(|| scenario_error("runtime not initialised"))?;

    if carousel_state.server.with_ref(|_| ()).is_none() {
        carousel_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

fn mount_response(
    carousel_state: &CarouselState,
    response: ResponseTemplate,
) -> Result<(), FetchError> {
    let runtime = ensure_runtime_and_server(carousel_state)?;
    let mock = Mock::given(method("GET"))
        .and(path(REVIEWS_PATH))
        .respond_with(response);

    carousel_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or_else(|| scenario_error("mock server not initialised"))
}

fn with_store<T>(
    carousel_state: &CarouselState,
    f: impl FnOnce(&mut ReviewStore) -> T,
) -> Result<T, FetchError> {
    let mut store = carousel_state
        .store
        .take()
        .ok_or_else(|| scenario_error("carousel has not loaded"))?;
    let result = f(&mut store);
    carousel_state.store.set(store);
    Ok(result)
}

#[given("a reviews API serving {count:u64} reviews")]
fn seed_reviews(carousel_state: &CarouselState, count: u64) -> Result<(), FetchError> {
    let data: Vec<_> = (0..count)
        .map(|index| {
            json!({
                "rating": 4.5,
                "review": format!("review {index}"),
                "user": { "firstName": "Learner", "lastName": format!("{index}") },
                "course": { "courseName": "Rust Fundamentals" }
            })
        })
        .collect();

    mount_response(
        carousel_state,
        ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data })),
    )
}

#[given("a reviews API that fails with status {status:u16}")]
fn seed_failing_server(carousel_state: &CarouselState, status: u16) -> Result<(), FetchError> {
    mount_response(
        carousel_state,
        ResponseTemplate::new(status).set_body_string("internal error"),
    )
}

#[given("a reviews API that reports no success")]
fn seed_unsuccessful_server(carousel_state: &CarouselState) -> Result<(), FetchError> {
    mount_response(
        carousel_state,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "success": false, "message": "maintenance" })),
    )
}

#[when("the carousel loads reviews")]
fn load_reviews(carousel_state: &CarouselState) -> Result<(), FetchError> {
    let server_url = carousel_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| FetchError::InvalidUrl("mock server URL missing".to_owned()))?;
    let endpoint = Url::parse(&format!("{server_url}{REVIEWS_PATH}"))
        .map_err(|error| FetchError::InvalidUrl(error.to_string()))?;
    let gateway = HttpReviewGateway::for_endpoint(endpoint, None)?;

    let runtime = carousel_state
        .runtime
        .get()
        .ok_or_else(|| scenario_error("runtime not initialised"))?;
    let cancel = CancellationToken::new();
    let outcome = runtime.block_on(ReviewStore::load(&gateway, &cancel));

    if matches!(outcome, LoadOutcome::Cancelled) {
        return Err(scenario_error("fetch unexpectedly cancelled"));
    }

    let mut store = ReviewStore::new();
    store.apply(outcome);
    carousel_state.store.set(store);
    Ok(())
}

#[when("the carousel advances {times:u64} times")]
fn advance(carousel_state: &CarouselState, times: u64) -> Result<(), FetchError> {
    with_store(carousel_state, |store| {
        for _ in 0..times {
            store.advance();
        }
    })
}

#[when("the carousel retreats {times:u64} times")]
fn retreat(carousel_state: &CarouselState, times: u64) -> Result<(), FetchError> {
    with_store(carousel_state, |store| {
        for _ in 0..times {
            store.retreat();
        }
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the visible reviews are {expected}")]
fn assert_visible(carousel_state: &CarouselState, expected: String) -> Result<(), FetchError> {
    let expected_bodies: Vec<&str> = expected.trim_matches('"').split(", ").collect();
    let actual: Vec<String> = with_store(carousel_state, |store| {
        store
            .visible()
            .into_iter()
            .map(|review| review.body.clone())
            .collect()
    })?;

    if actual == expected_bodies {
        Ok(())
    } else {
        Err(scenario_error(format!(
            "expected visible reviews {expected_bodies:?} but found {actual:?}"
        )))
    }
}

fn assert_controls(carousel_state: &CarouselState, expected: bool) -> Result<(), FetchError> {
    let shown = with_store(carousel_state, |store| store.shows_controls())?;
    if shown == expected {
        Ok(())
    } else {
        Err(scenario_error(format!(
            "expected controls shown to be {expected}, was {shown}"
        )))
    }
}

#[then("navigation controls are shown")]
fn assert_controls_shown(carousel_state: &CarouselState) -> Result<(), FetchError> {
    assert_controls(carousel_state, true)
}

#[then("navigation controls are hidden")]
fn assert_controls_hidden(carousel_state: &CarouselState) -> Result<(), FetchError> {
    assert_controls(carousel_state, false)
}

#[then("the carousel shows only the empty placeholder")]
fn assert_empty_placeholder(carousel_state: &CarouselState) -> Result<(), FetchError> {
    let rendered = with_store(carousel_state, |store| {
        let component = CarouselComponent::new();
        component.view(&CarouselViewContext {
            store: &*store,
            avatar_service: DEFAULT_AVATAR_SERVICE,
        })
    })?;

    if rendered.trim_end() == EMPTY_PLACEHOLDER {
        Ok(())
    } else {
        Err(scenario_error(format!(
            "expected only the placeholder, rendered {rendered:?}"
        )))
    }
}

#[scenario(path = "tests/features/review_carousel.feature", index = 0)]
fn rotating_through_five_reviews(carousel_state: CarouselState) {
    let _ = carousel_state;
}

#[scenario(path = "tests/features/review_carousel.feature", index = 1)]
fn short_list_stays_put(carousel_state: CarouselState) {
    let _ = carousel_state;
}

#[scenario(path = "tests/features/review_carousel.feature", index = 2)]
fn server_failure_shows_empty_state(carousel_state: CarouselState) {
    let _ = carousel_state;
}

#[scenario(path = "tests/features/review_carousel.feature", index = 3)]
fn unsuccessful_envelope_shows_empty_state(carousel_state: CarouselState) {
    let _ = carousel_state;
}
