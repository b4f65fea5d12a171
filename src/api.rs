//! The catalog's HTTP routes.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/getAllMovies` | 200, every movie | — |
//! | POST | `/addMovie` | 201, the added movie | 400 |
//! | GET | `/getMovieByYearOfRelease/{yearOfRelease}` | 200, matches | 400, 404 |
//! | GET | `/getMovieByDirectorName/{director}` | 200, matches | 404 |
//! | DELETE | `/deleteMovieByEntryNo/{entryNo}` | 200, confirmation | 400, 404 |
//! | GET | `/healthz`, `/readyz` | 200 | — |

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::health;
use crate::method::Method;
use crate::movie::Movie;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::status::Status;
use crate::store::MovieStore;

const NO_MOVIES_FOUND: &str = "No Movies Found";
const NOTHING_TO_DELETE: &str = "No Movies Found to Delete";
const DELETED: &str = "Movie record Deleted Successfully";

/// Body of every error answer: `{"message": "..."}`.
#[derive(Serialize)]
struct Message {
    message: &'static str,
}

fn message(status: Status, message: &'static str) -> Response {
    (status, Json(Message { message })).into_response()
}

/// Mounts every catalog route over `store`.
pub fn routes(store: Arc<MovieStore>) -> Router<MovieStore> {
    Router::new(store)
        .on(Method::Get,    "/getAllMovies",                            get_all_movies)
        .on(Method::Post,   "/addMovie",                                add_movie)
        .on(Method::Get,    "/getMovieByYearOfRelease/{yearOfRelease}", get_by_year_of_release)
        .on(Method::Get,    "/getMovieByDirectorName/{director}",       get_by_director_name)
        .on(Method::Delete, "/deleteMovieByEntryNo/{entryNo}",          delete_by_entry_no)
        .on(Method::Get,    "/healthz",                                 health::liveness::<MovieStore>)
        .on(Method::Get,    "/readyz",                                  health::readiness::<MovieStore>)
}

// GET /getAllMovies
async fn get_all_movies(store: Arc<MovieStore>, _req: Request) -> Json<Vec<Movie>> {
    Json(store.list_all())
}

// POST /addMovie
async fn add_movie(store: Arc<MovieStore>, req: Request) -> Response {
    let movie = match req.json().and_then(Movie::from_json_value) {
        Ok(movie) => movie,
        Err(e) => {
            warn!(error = %e, "rejecting malformed movie");
            return message(Status::BadRequest, "Invalid Movie Data");
        }
    };

    let added = store.add(movie);
    info!(entry_no = added.entry_no, name = %added.movie_name, "movie added");
    (Status::Created, Json(added)).into_response()
}

// GET /getMovieByYearOfRelease/{yearOfRelease}
async fn get_by_year_of_release(store: Arc<MovieStore>, req: Request) -> Response {
    let Some(year) = req.param_as::<i64>("yearOfRelease") else {
        return message(Status::BadRequest, "Invalid Year Of Release");
    };

    match store.find_by_year(year) {
        Some(movies) => Json(movies).into_response(),
        None => message(Status::NotFound, NO_MOVIES_FOUND),
    }
}

// GET /getMovieByDirectorName/{director}
async fn get_by_director_name(store: Arc<MovieStore>, req: Request) -> Response {
    let director = req.param("director").unwrap_or_default();

    match store.find_by_director(director) {
        Some(movies) => Json(movies).into_response(),
        None => message(Status::NotFound, NO_MOVIES_FOUND),
    }
}

// DELETE /deleteMovieByEntryNo/{entryNo}
async fn delete_by_entry_no(store: Arc<MovieStore>, req: Request) -> Response {
    let Some(entry_no) = req.param_as::<i64>("entryNo") else {
        return message(Status::BadRequest, "Invalid Entry Number");
    };

    match store.delete_by_entry_no(entry_no) {
        0 => message(Status::NotFound, NOTHING_TO_DELETE),
        removed => {
            info!(entry_no, removed, "movie deleted");
            Json(DELETED).into_response()
        }
    }
}
