use dayfacts_providers::wikipedia::{OnThisDayFeed, entry_to_record, fun_fact};
use dayfacts_providers::PLACEHOLDER_IMAGE;

fn sample_feed() -> OnThisDayFeed {
    let raw = include_str!("fixtures/onthisday_sample.json");
    serde_json::from_str(raw).expect("fixture parses as a feed document")
}

#[test]
fn feed_document_parses_all_category_arrays() {
    let feed = sample_feed();
    assert_eq!(feed.births.len(), 2);
    assert_eq!(feed.deaths.len(), 1);
    assert_eq!(feed.events.len(), 2);
    assert_eq!(feed.holidays.len(), 1);
}

#[test]
fn birth_with_page_normalizes_fully() {
    let feed = sample_feed();
    let record = entry_to_record(&feed.births[0]);

    assert_eq!(record.title, "John Smith");
    assert_eq!(record.subtitle.as_deref(), Some("1931"));
    assert_eq!(
        record.description,
        "John Smith was an American film and television actor."
    );
    assert!(record.image_url.as_deref().unwrap().contains("320px-John_Smith.jpg"));
    assert_eq!(
        record.link_url.as_deref(),
        Some("https://en.wikipedia.org/wiki/John_Smith_(actor)")
    );
}

#[test]
fn birth_without_page_degrades_to_placeholder() {
    let feed = sample_feed();
    let record = entry_to_record(&feed.births[1]);

    assert_eq!(record.title, "Maria Jones");
    assert_eq!(record.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
    assert_eq!(record.link_url, None);
    assert_eq!(record.description, "1872 – Maria Jones, Welsh poet");
}

#[test]
fn death_page_link_survives_without_thumbnail() {
    let feed = sample_feed();
    let record = entry_to_record(&feed.deaths[0]);

    assert_eq!(record.title, "Thomas Jefferson");
    assert_eq!(record.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
    assert_eq!(
        record.link_url.as_deref(),
        Some("https://en.wikipedia.org/wiki/Thomas_Jefferson")
    );
}

#[test]
fn holiday_has_no_year_subtitle() {
    let feed = sample_feed();
    let record = entry_to_record(&feed.holidays[0]);
    assert_eq!(record.title, "Independence Day (United States)");
    assert_eq!(record.subtitle, None);
}

#[test]
fn fun_fact_selects_by_day_of_month() {
    let feed = sample_feed();
    // Two events: day 4 -> index 0, day 5 -> index 1.
    assert!(fun_fact(&feed.events, 4)
        .unwrap()
        .title
        .contains("Declaration of Independence"));
    assert!(fun_fact(&feed.events, 5)
        .unwrap()
        .title
        .contains("Pathfinder"));
}
