use super::models::MovieItem;
use super::IMAGE_BASE_URL;
use crate::PLACEHOLDER_IMAGE;
use dayfacts_types::DisplayRecord;

/// Map one discovery item to a display record.
pub fn movie_to_record(movie: &MovieItem) -> DisplayRecord {
    let image_url = movie
        .poster_path
        .as_ref()
        .map(|path| format!("{}{}", IMAGE_BASE_URL, path))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    DisplayRecord {
        title: movie.title.clone(),
        subtitle: movie.release_date.clone(),
        description: movie.overview.clone().unwrap_or_default(),
        image_url: Some(image_url),
        link_url: Some(format!("https://www.themoviedb.org/movie/{}", movie.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> MovieItem {
        MovieItem {
            id: 603,
            title: title.to_string(),
            release_date: Some("1999-03-31".to_string()),
            overview: Some("A hacker learns the truth.".to_string()),
            poster_path: Some("/matrix.jpg".to_string()),
        }
    }

    #[test]
    fn poster_path_joins_the_image_base() {
        let record = movie_to_record(&movie("The Matrix"));
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w300/matrix.jpg")
        );
        assert_eq!(
            record.link_url.as_deref(),
            Some("https://www.themoviedb.org/movie/603")
        );
        assert_eq!(record.subtitle.as_deref(), Some("1999-03-31"));
    }

    #[test]
    fn missing_poster_falls_back_to_placeholder() {
        let mut item = movie("The Matrix");
        item.poster_path = None;
        item.overview = None;
        let record = movie_to_record(&item);
        assert_eq!(record.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(record.description, "");
    }
}
