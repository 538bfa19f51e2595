use super::models::AnimeItem;
use crate::PLACEHOLDER_IMAGE;
use dayfacts_types::{DateSelection, DisplayRecord};

/// Whether an `aired.from` timestamp falls on the selected month/day.
///
/// Timestamps look like `"2024-07-04T00:00:00+00:00"`; the date digits are
/// compared literally, so no timezone conversion can roll the day.
pub fn aired_matches(from: &str, date: &DateSelection) -> bool {
    let Some(day_part) = from.get(..10) else {
        return false;
    };
    let mut fields = day_part.splitn(3, '-');
    let (Some(_year), Some(month), Some(day)) = (fields.next(), fields.next(), fields.next())
    else {
        return false;
    };
    month == date.mm() && day == date.dd()
}

/// Keep only shows whose premiere matches the date.
pub fn premieres_on(items: Vec<AnimeItem>, date: &DateSelection) -> Vec<AnimeItem> {
    items
        .into_iter()
        .filter(|item| {
            item.aired
                .as_ref()
                .and_then(|aired| aired.from.as_deref())
                .is_some_and(|from| aired_matches(from, date))
        })
        .collect()
}

/// Map one season item to a display record.
pub fn anime_to_record(anime: &AnimeItem) -> DisplayRecord {
    let image_url = anime
        .images
        .as_ref()
        .and_then(|images| images.jpg.as_ref())
        .and_then(|jpg| jpg.image_url.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let subtitle = anime
        .aired
        .as_ref()
        .and_then(|aired| aired.from.as_deref())
        .and_then(|from| from.get(..10))
        .map(str::to_string);

    DisplayRecord {
        title: anime.title.clone(),
        subtitle,
        description: anime.synopsis.clone().unwrap_or_default(),
        image_url: Some(image_url),
        link_url: anime.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jikan::models::Aired;

    fn show(title: &str, from: Option<&str>) -> AnimeItem {
        AnimeItem {
            title: title.to_string(),
            synopsis: None,
            url: None,
            aired: Some(Aired {
                from: from.map(str::to_string),
            }),
            images: None,
        }
    }

    #[test]
    fn matches_on_literal_month_and_day_digits() {
        let date = DateSelection::parse("2024-07-04").unwrap();
        assert!(aired_matches("2024-07-04T00:00:00+00:00", &date));
        assert!(aired_matches("1998-07-04T00:00:00+09:00", &date));
        assert!(!aired_matches("2024-07-05T00:00:00+00:00", &date));
        assert!(!aired_matches("garbage", &date));
    }

    #[test]
    fn filter_keeps_only_matching_premieres() {
        let date = DateSelection::parse("2024-07-04").unwrap();
        let items = vec![
            show("On the day", Some("2024-07-04T00:00:00+00:00")),
            show("Off by one", Some("2024-07-05T00:00:00+00:00")),
            show("Never aired", None),
        ];
        let kept = premieres_on(items, &date);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "On the day");
    }

    #[test]
    fn record_without_images_gets_placeholder() {
        let record = anime_to_record(&show("Sparse", Some("2024-07-04T00:00:00+00:00")));
        assert_eq!(record.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(record.subtitle.as_deref(), Some("2024-07-04"));
        assert_eq!(record.link_url, None);
    }
}
