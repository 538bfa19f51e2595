use super::models::OnThisDayEntry;
use crate::PLACEHOLDER_IMAGE;
use dayfacts_types::DisplayRecord;

/// Extract a short subject name from feed text.
///
/// Feed text reads like `"1931 – John Smith, American actor (d. 2000)"`:
/// the subject sits after the first en-dash and before the first comma.
/// Text without an en-dash is returned whole.
pub fn short_title(text: &str) -> String {
    match text.split_once('–') {
        Some((_, rest)) => {
            let rest = rest.trim();
            match rest.split_once(',') {
                Some((name, _)) => name.trim().to_string(),
                None => rest.to_string(),
            }
        }
        None => text.trim().to_string(),
    }
}

/// Map one feed entry to a display record.
///
/// The first linked page, when present, contributes the thumbnail, the
/// extract, and the canonical link. Absent fields are omitted, except the
/// image which falls back to the shared placeholder.
pub fn entry_to_record(entry: &OnThisDayEntry) -> DisplayRecord {
    let page = entry.pages.first();

    let description = page
        .and_then(|p| p.extract.clone())
        .unwrap_or_else(|| entry.text.clone());

    let image_url = page
        .and_then(|p| p.thumbnail.as_ref())
        .map(|t| t.source.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let link_url = page
        .and_then(|p| p.content_urls.as_ref())
        .map(|urls| urls.desktop.page.clone());

    DisplayRecord {
        title: short_title(&entry.text),
        subtitle: entry.year.map(|y| y.to_string()),
        description,
        image_url: Some(image_url),
        link_url,
    }
}

/// Pick the day's fun fact from the events list.
///
/// Selection is day-of-month modulo the list length, so the same date always
/// shows the same fact.
pub fn fun_fact(events: &[OnThisDayEntry], day: u32) -> Option<DisplayRecord> {
    if events.is_empty() {
        return None;
    }
    let index = day as usize % events.len();
    Some(entry_to_record(&events[index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wikipedia::models::{ContentUrls, DesktopUrls, PageSummary, Thumbnail};

    fn entry(text: &str, year: Option<i32>, pages: Vec<PageSummary>) -> OnThisDayEntry {
        OnThisDayEntry {
            text: text.to_string(),
            year,
            pages,
        }
    }

    #[test]
    fn short_title_takes_between_dash_and_comma() {
        assert_eq!(
            short_title("1931 – John Smith, American actor (d. 2000)"),
            "John Smith"
        );
    }

    #[test]
    fn short_title_without_comma_takes_rest_of_text() {
        assert_eq!(short_title("1969 – Apollo 11 launches"), "Apollo 11 launches");
    }

    #[test]
    fn short_title_without_dash_falls_back_to_full_text() {
        assert_eq!(short_title("Independence Day"), "Independence Day");
    }

    #[test]
    fn record_carries_year_as_subtitle() {
        let record = entry_to_record(&entry(
            "1931 – John Smith, American actor (d. 2000)",
            Some(1931),
            vec![],
        ));
        assert_eq!(record.title, "John Smith");
        assert_eq!(record.subtitle.as_deref(), Some("1931"));
    }

    #[test]
    fn entry_without_pages_gets_placeholder_and_no_link() {
        let record = entry_to_record(&entry("2004 – Jane Doe, chemist", Some(2004), vec![]));
        assert_eq!(record.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(record.link_url, None);
        assert_eq!(record.description, "2004 – Jane Doe, chemist");
    }

    #[test]
    fn page_fields_flow_into_the_record() {
        let page = PageSummary {
            thumbnail: Some(Thumbnail {
                source: "https://img.example/thumb.jpg".to_string(),
            }),
            extract: Some("A chemist.".to_string()),
            content_urls: Some(ContentUrls {
                desktop: DesktopUrls {
                    page: "https://en.wikipedia.org/wiki/Jane_Doe".to_string(),
                },
            }),
        };
        let record = entry_to_record(&entry("2004 – Jane Doe, chemist", Some(2004), vec![page]));

        insta::assert_json_snapshot!(record, @r###"
        {
          "title": "Jane Doe",
          "subtitle": "2004",
          "description": "A chemist.",
          "image_url": "https://img.example/thumb.jpg",
          "link_url": "https://en.wikipedia.org/wiki/Jane_Doe"
        }
        "###);
    }

    #[test]
    fn holiday_entries_have_no_subtitle() {
        let record = entry_to_record(&entry("Independence Day", None, vec![]));
        assert_eq!(record.subtitle, None);
    }

    #[test]
    fn fun_fact_is_deterministic_per_day() {
        let events = vec![
            entry("1900 – first", Some(1900), vec![]),
            entry("1910 – second", Some(1910), vec![]),
            entry("1920 – third", Some(1920), vec![]),
        ];
        assert_eq!(fun_fact(&events, 4).unwrap().title, "second");
        assert_eq!(fun_fact(&events, 4).unwrap().title, "second");
        assert_eq!(fun_fact(&events, 3).unwrap().title, "first");
        assert!(fun_fact(&[], 4).is_none());
    }
}
