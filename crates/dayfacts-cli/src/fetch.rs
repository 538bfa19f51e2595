use crate::config::Config;
use anyhow::Result;
use dayfacts_engine::{CategoryOutcome, DayPayload, FetchPlan};
use dayfacts_providers::jikan::{JikanProvider, anime_to_record};
use dayfacts_providers::tmdb::{TmdbProvider, movie_to_record};
use dayfacts_providers::wikipedia::{WikipediaProvider, entry_to_record, fun_fact};
use dayfacts_providers::{Error as FetchError, HttpClient};
use dayfacts_types::{Category, DateSelection};
use tracing::debug;

/// What one whole fetch resolved to.
///
/// Providers fail independently, so a payload can carry a mix of loaded and
/// failed categories; only when every planned call failed does the fetch
/// count as failed outright.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Payload(DayPayload),
    Failed(String),
}

/// Issues the provider calls one date needs, per the fetch plan.
///
/// Calls run concurrently, each bounded by its own timeout; one slow or
/// failing provider never blocks or blanks the others.
pub struct FetchService {
    client: HttpClient,
    wikipedia: WikipediaProvider,
    tmdb: Option<TmdbProvider>,
    jikan: JikanProvider,
}

impl FetchService {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpClient::new(config.timeout_ms)?;
        let tmdb = config
            .providers
            .tmdb_api_key
            .as_ref()
            .map(|key| TmdbProvider::new(key.clone()));

        Ok(Self {
            client,
            wikipedia: WikipediaProvider::new(),
            tmdb,
            jikan: JikanProvider::new(),
        })
    }

    /// Fetch everything the plan asks for and fold the results into one
    /// payload. Unplanned categories stay `NotFetched`.
    pub async fn fetch_day(&self, date: DateSelection, plan: FetchPlan) -> FetchOutcome {
        let mut payload = DayPayload::new(date);

        let wikipedia = async {
            if plan.wikipedia {
                Some(self.wikipedia.fetch(&self.client, &date).await)
            } else {
                None
            }
        };
        let movies = async {
            if plan.movies {
                match &self.tmdb {
                    Some(tmdb) => Some(tmdb.fetch(&self.client, &date).await),
                    // No credential: the source degrades to empty results.
                    None => Some(Ok(Vec::new())),
                }
            } else {
                None
            }
        };
        let anime = async {
            if plan.anime {
                Some(self.jikan.fetch(&self.client, &date).await)
            } else {
                None
            }
        };

        let (wikipedia, movies, anime) = tokio::join!(wikipedia, movies, anime);

        let mut planned = 0usize;
        let mut failures: Vec<String> = Vec::new();

        if let Some(result) = wikipedia {
            planned += 1;
            match result {
                Ok(feed) => {
                    payload.set(
                        Category::Births,
                        CategoryOutcome::Loaded(feed.births.iter().map(entry_to_record).collect()),
                    );
                    payload.set(
                        Category::Deaths,
                        CategoryOutcome::Loaded(feed.deaths.iter().map(entry_to_record).collect()),
                    );
                    payload.set(
                        Category::Events,
                        CategoryOutcome::Loaded(feed.events.iter().map(entry_to_record).collect()),
                    );
                    payload.set(
                        Category::Holidays,
                        CategoryOutcome::Loaded(
                            feed.holidays.iter().map(entry_to_record).collect(),
                        ),
                    );
                    payload.set(
                        Category::FunFact,
                        CategoryOutcome::Loaded(
                            fun_fact(&feed.events, date.day).into_iter().collect(),
                        ),
                    );
                }
                Err(err) => {
                    debug!(error = %err, "wikipedia fetch failed");
                    set_wikipedia_failure(&mut payload, &err);
                    failures.push(err.to_string());
                }
            }
        }

        if let Some(result) = movies {
            planned += 1;
            match result {
                Ok(items) => {
                    payload.set(
                        Category::Movies,
                        CategoryOutcome::Loaded(items.iter().map(movie_to_record).collect()),
                    );
                }
                Err(err) => {
                    debug!(error = %err, "tmdb fetch failed");
                    payload.set(Category::Movies, CategoryOutcome::Failed(err.to_string()));
                    failures.push(err.to_string());
                }
            }
        }

        if let Some(result) = anime {
            planned += 1;
            match result {
                Ok(items) => {
                    payload.set(
                        Category::Anime,
                        CategoryOutcome::Loaded(items.iter().map(anime_to_record).collect()),
                    );
                }
                Err(err) => {
                    debug!(error = %err, "jikan fetch failed");
                    payload.set(Category::Anime, CategoryOutcome::Failed(err.to_string()));
                    failures.push(err.to_string());
                }
            }
        }

        if planned > 0 && failures.len() == planned {
            FetchOutcome::Failed(failures.swap_remove(0))
        } else {
            FetchOutcome::Payload(payload)
        }
    }
}

/// A finished background fetch, tagged with the sequence number it was
/// issued under so the handler can drop stale arrivals.
#[derive(Debug)]
pub struct FetchEvent {
    pub seq: u64,
    pub outcome: FetchOutcome,
}

/// Run one fetch on the background runtime and report over the channel.
/// A send failure means the TUI already quit; the result just drops.
pub fn spawn_fetch(
    handle: &tokio::runtime::Handle,
    service: std::sync::Arc<FetchService>,
    date: DateSelection,
    plan: FetchPlan,
    seq: u64,
    tx: std::sync::mpsc::Sender<FetchEvent>,
) {
    handle.spawn(async move {
        let outcome = service.fetch_day(date, plan).await;
        let _ = tx.send(FetchEvent { seq, outcome });
    });
}

fn set_wikipedia_failure(payload: &mut DayPayload, err: &FetchError) {
    let message = err.to_string();
    for category in [
        Category::Births,
        Category::Deaths,
        Category::Events,
        Category::Holidays,
        Category::FunFact,
    ] {
        payload.set(category, CategoryOutcome::Failed(message.clone()));
    }
}
