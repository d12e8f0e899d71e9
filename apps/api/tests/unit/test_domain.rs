use posts_board::domain::{
    post::entity::{NewPost, PostUpdate},
    shared::pagination::{OverflowPolicy, PageConfig, RawPageParams, page_window},
};
use validator::Validate;

fn raw(page: &str, size: &str, count: &str) -> RawPageParams {
    RawPageParams {
        page: Some(page.to_string()),
        size: Some(size.to_string()),
        count: Some(count.to_string()),
    }
}

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let request = PageConfig::default().normalize(&RawPageParams::default());
    assert_eq!((request.page, request.size, request.count), (1, 10, 10));
    assert_eq!(request.offset(), 0);
    assert_eq!(request.limit(), 10);
}

#[test]
fn normalized_request_survives_a_second_pass() {
    let config = PageConfig::default();
    for params in [
        raw("7", "25", "3"),
        raw("0", "0", "0"),
        raw("x", "999999", "-1"),
        raw("18446744073709551616", "5", "5"),
    ] {
        let once = config.normalize(&params);
        let twice = config.normalize(&once.to_raw());
        assert_eq!(once, twice);
    }
}

#[test]
fn board_of_95_rows_has_ten_pages() {
    let pagination = PageConfig::default()
        .normalize(&raw("4", "10", "10"))
        .with_total(95, OverflowPolicy::Clamp);

    assert_eq!(pagination.total_page, 10);
    assert_eq!(pagination.offset(), 30);
    assert_eq!(pagination.start_page, Some(1));
    assert_eq!(pagination.end_page, Some(10));
}

#[test]
fn window_never_leaves_page_range() {
    for total_page in 1..=12u64 {
        for count in 1..=12u64 {
            for page in 1..=15u64 {
                let window = page_window(page, count, total_page).expect("pages exist");
                assert!(window.start_page >= 1);
                assert!(window.start_page <= window.end_page);
                assert!(window.end_page <= total_page);
                assert_eq!(window.width(), count.min(total_page));
                if page <= total_page {
                    assert!(window.contains(page));
                }
            }
        }
    }
}

#[test]
fn overflow_policy_parses_from_config_strings() {
    assert_eq!("clamp".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Clamp));
    assert_eq!(" Empty ".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Empty));
    assert!("wrap".parse::<OverflowPolicy>().is_err());
}

#[test]
fn new_post_enforces_field_lengths() {
    let valid = NewPost {
        title: "hello".to_string(),
        writer: "kim".to_string(),
        content: String::new(),
    };
    assert!(valid.validate().is_ok());

    let blank_title = NewPost {
        title: String::new(),
        ..valid.clone()
    };
    assert!(blank_title.validate().is_err());

    let long_writer = NewPost {
        writer: "w".repeat(51),
        ..valid.clone()
    };
    assert!(long_writer.validate().is_err());

    let long_content = NewPost {
        content: "c".repeat(10_001),
        ..valid
    };
    assert!(long_content.validate().is_err());
}

#[test]
fn post_update_enforces_field_lengths() {
    let update = PostUpdate {
        no: 1,
        title: "t".repeat(201),
        writer: "kim".to_string(),
        content: String::new(),
    };
    assert!(update.validate().is_err());
}

#[test]
fn new_post_content_defaults_to_empty() {
    let post: NewPost =
        serde_json::from_str(r#"{"title":"t","writer":"w"}"#).expect("content is optional");
    assert_eq!(post.content, "");
}
