// NOTE: dayfacts architecture
//
// Why a single-slot payload cache (not per-category)?
// - Toggling a category must be free: re-render from the last full fetch,
//   zero network calls
// - The wikipedia feed serves four categories in one response anyway, so
//   per-category slots would mostly duplicate one document
// - Staleness is handled by a request sequence number, not by cache keys:
//   whichever fetch was issued last wins the slot, later arrivals of older
//   fetches are dropped
//
// Why per-category outcomes inside the payload?
// - Providers fail independently (a TMDb timeout should not blank the
//   births carousel), so each category records Loaded/Failed/NotFetched
// - NotFetched covers categories that were disabled at fetch time; they
//   render as empty, never as errors, and never trigger hidden refetches

mod args;
mod commands;
pub mod config;
mod fetch;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, ProviderCommand};
pub use commands::run;
