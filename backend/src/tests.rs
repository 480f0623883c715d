use crate::models::NewVideo;
use crate::services::video_service::create_video;
use crate::services::video_store::SqliteVideoStore;
use crate::{build_rocket, AppState};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

fn client() -> Client {
    let state = AppState {
        store: Box::new(SqliteVideoStore::open_in_memory().expect("in-memory store")),
        app_name: "Football Videos".to_string(),
    };
    Client::tracked(build_rocket(state)).expect("valid rocket instance")
}

fn state(client: &Client) -> &AppState {
    client.rocket().state::<AppState>().expect("managed app state")
}

fn video_count(client: &Client) -> usize {
    state(client).store.count().unwrap()
}

fn seed(client: &Client, name: &str, notes: &str, video_id: &str) {
    let url = format!("https://www.youtube.com/watch?v={video_id}");
    create_video(state(client).store.as_ref(), &NewVideo::new(name, &url, Some(notes))).unwrap();
}

fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn post_form(client: &Client, path: &str, fields: &[(&str, &str)]) -> (Status, Option<String>, String) {
    let response = client
        .post(path)
        .header(ContentType::Form)
        .body(form_body(fields))
        .dispatch();
    let status = response.status();
    let location = response.headers().get_one("Location").map(str::to_string);
    (status, location, response.into_string().unwrap_or_default())
}

fn listing_page(client: &Client) -> String {
    let response = client.post("/videos").dispatch();
    assert_eq!(response.status(), Status::Ok);
    response.into_string().unwrap()
}

#[test]
fn home_page_shows_app_title() {
    let client = client();
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().unwrap().contains("Football Videos"));
}

#[test]
fn add_page_shows_empty_form() {
    let client = client();
    let response = client.get("/add").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().unwrap();
    assert!(body.contains("name=\"url\""));
    assert!(!body.contains("Please check the data entered."));
}

#[test]
fn add_video_redirects_to_listing() {
    let client = client();
    let (status, location, _) = post_form(
        &client,
        "/add",
        &[
            ("name", "Vikings lose to Broncos Recap"),
            ("url", "https://www.youtube.com/watch?v=DCIlwPIISS8"),
            ("notes", "Vikings lose, Recap"),
        ],
    );
    assert_eq!(status, Status::SeeOther);
    assert_eq!(location.as_deref(), Some("/videos"));

    let body = client.get("/videos").dispatch().into_string().unwrap();
    assert!(body.contains("Vikings lose to Broncos Recap"));
    assert!(body.contains("Vikings lose, Recap"));
    assert!(body.contains("https://www.youtube.com/watch?v=DCIlwPIISS8"));

    let videos = state(&client).store.all().unwrap();
    assert_eq!(videos.len(), 1);
    let video = &videos[0];
    assert_eq!(video.name, "Vikings lose to Broncos Recap");
    assert_eq!(video.url, "https://www.youtube.com/watch?v=DCIlwPIISS8");
    assert_eq!(video.notes.as_deref(), Some("Vikings lose, Recap"));
    assert_eq!(video.video_id, "DCIlwPIISS8");
}

#[test]
fn invalid_url_is_not_added() {
    let client = client();
    for url in [
        "https://www.youtube.com/watch",
        "https://www.youtube.com/watch?",
        "https://www.youtube.com/watch?v=",
        "https://www.youtube.com/watch?v=&v=abc",
        "https://www.github.com",
        "https://www.minneapolis.edu",
        "https://www.minneapolis.edu?v=32156das",
    ] {
        let (status, _, body) = post_form(
            &client,
            "/add",
            &[("name", "example"), ("url", url), ("notes", "example notes")],
        );
        assert_eq!(status, Status::Ok, "{url}");
        assert!(body.contains("Invalid YouTube URL"), "{url}");
        assert!(body.contains("Please check the data entered."), "{url}");
        assert!(body.contains("value=\"example\""), "{url}");
    }
    assert_eq!(video_count(&client), 0);
}

#[test]
fn duplicate_video_is_not_added() {
    let client = client();
    let fields = [
        ("name", "aaa"),
        ("url", "https://www.youtube.com/watch?v=111"),
        ("notes", "hello one"),
    ];
    let (status, _, _) = post_form(&client, "/add", &fields);
    assert_eq!(status, Status::SeeOther);

    let (status, _, body) = post_form(&client, "/add", &fields);
    assert_eq!(status, Status::Ok);
    assert!(body.contains("You already added this YouTube Video"));
    assert!(body.contains("Please check the data entered."));
    assert_eq!(video_count(&client), 1);
}

#[test]
fn blank_name_is_a_field_error() {
    let client = client();
    let (status, _, body) = post_form(
        &client,
        "/add",
        &[
            ("name", "   "),
            ("url", "https://www.youtube.com/watch?v=111"),
            ("notes", ""),
        ],
    );
    assert_eq!(status, Status::Ok);
    assert!(body.contains("This field is required."));
    assert!(body.contains("Please check the data entered."));
    assert!(!body.contains("Invalid YouTube URL"));
    assert!(body.contains("value=\"https://www.youtube.com/watch?v=111\""));
    assert_eq!(video_count(&client), 0);
}

#[test]
fn overlong_name_is_a_field_error() {
    let client = client();
    let name = "n".repeat(201);
    let (status, _, body) = post_form(
        &client,
        "/add",
        &[("name", &name), ("url", "https://www.youtube.com/watch?v=111")],
    );
    assert_eq!(status, Status::Ok);
    assert!(body.contains("at most 200 characters"));
    assert_eq!(video_count(&client), 0);
}

#[test]
fn overlong_url_is_a_field_error() {
    let client = client();
    let url = format!("https://www.youtube.com/watch?v=111&t={}", "x".repeat(363));
    assert_eq!(url.chars().count(), 401);

    let (status, _, body) = post_form(&client, "/add", &[("name", "aaa"), ("url", &url)]);
    assert_eq!(status, Status::Ok);
    assert!(body.contains("Ensure this value has at most 400 characters"));
    assert!(body.contains("Please check the data entered."));
    assert!(!body.contains("Invalid YouTube URL"));
    assert_eq!(video_count(&client), 0);
}

#[test]
fn all_videos_displayed_in_name_order() {
    let client = client();
    seed(&client, "aaa", "hello one", "111");
    seed(&client, "PPP", "hello two", "222");
    seed(&client, "ccc", "hello three", "333");
    seed(&client, "JJJ", "hello four", "444");

    let body = listing_page(&client);
    let position = |name: &str| body.find(&format!("<h3>{name}</h3>")).unwrap();
    assert!(position("aaa") < position("ccc"));
    assert!(position("ccc") < position("JJJ"));
    assert!(position("JJJ") < position("PPP"));
}

#[test]
fn no_videos_message() {
    let client = client();
    assert!(listing_page(&client).contains("No videos"));

    let body = client.get("/videos").dispatch().into_string().unwrap();
    assert!(body.contains("No videos"));
}

#[test]
fn one_video_message() {
    let client = client();
    seed(&client, "aaa", "hello one", "111");

    let body = listing_page(&client);
    assert!(body.contains("1 Video"));
    assert!(!body.contains("1 Videos"));
}

#[test]
fn two_videos_message() {
    let client = client();
    seed(&client, "aaa", "hello one", "111");
    seed(&client, "bbb", "hello one more", "1111");

    assert!(listing_page(&client).contains("2 Videos"));
}

#[test]
fn search_filters_by_name() {
    let client = client();
    seed(&client, "Vikings lose to Broncos", "recap", "111");
    seed(&client, "Packers win", "highlights", "222");

    let body = client
        .get("/videos?search_term=vikings")
        .dispatch()
        .into_string()
        .unwrap();
    assert!(body.contains("Vikings lose to Broncos"));
    assert!(!body.contains("Packers win"));
    assert!(body.contains("1 Video"));

    let (status, _, body) = post_form(&client, "/videos", &[("search_term", "PACKERS")]);
    assert_eq!(status, Status::Ok);
    assert!(body.contains("Packers win"));
    assert!(!body.contains("Vikings lose to Broncos"));

    let (_, _, body) = post_form(&client, "/videos", &[("search_term", "bears")]);
    assert!(body.contains("No videos"));
}

#[test]
fn empty_search_lists_everything() {
    let client = client();
    seed(&client, "aaa", "hello one", "111");
    seed(&client, "bbb", "hello two", "222");

    let body = client
        .get("/videos?search_term=")
        .dispatch()
        .into_string()
        .unwrap();
    assert!(body.contains("2 Videos"));

    let (_, _, body) = post_form(&client, "/videos", &[("search_term", "   ")]);
    assert!(body.contains("2 Videos"));
}
